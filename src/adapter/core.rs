use std::collections::HashMap;

use tracing::debug;

use crate::config::BridgeConfig;
use crate::player::{PlayerCommands, PlayerEvent};

use super::dispatch::ControlDispatcher;
use super::emitter::NotificationEmitter;
use super::error::AdapterError;
use super::properties::PropertyStore;
use super::translate;
use super::types::{PLAYER_INTERFACE, PropValue};

/// Orchestrator wiring player events into the property mirror and remote
/// calls into player commands.
///
/// Owned by the process's composition root and constructed once, with the
/// player command interface and the notification sink passed in explicitly.
/// All access is assumed serialized onto one logical thread; callers that
/// parallelize the transport must treat each method call as one atomic
/// read-modify-emit unit (a mutex around the adapter is enough).
#[derive(Debug)]
pub struct ProtocolAdapter<P: PlayerCommands, E: NotificationEmitter> {
    store: PropertyStore,
    dispatcher: ControlDispatcher<P>,
    emitter: E,
}

impl<P: PlayerCommands, E: NotificationEmitter> ProtocolAdapter<P, E> {
    /// Build the adapter with root identity from config and the protocol's
    /// player-property defaults.
    pub fn new(config: &BridgeConfig, player: P, emitter: E) -> Self {
        Self {
            store: PropertyStore::new(config),
            dispatcher: ControlDispatcher::new(player),
            emitter,
        }
    }

    /// Mirror one player event into the store and publish the change.
    ///
    /// Position events publish the dedicated seek notification first and
    /// the property-changed delta second; some controllers only listen for
    /// one of the two, so both always go out.
    pub fn handle_event(&mut self, event: &PlayerEvent) {
        let delta = translate::translate(event);
        debug!(keys = ?delta.changed.keys().collect::<Vec<_>>(), "player event translated");

        self.store.update(delta.changed.clone());

        if let Some(position_us) = delta.seeked {
            self.emitter.seeked(position_us);
        }
        self.emitter.properties_changed(PLAYER_INTERFACE, &delta.changed);
    }

    /// Remote command operations, delegating to the player.
    pub fn controls(&self) -> &ControlDispatcher<P> {
        &self.dispatcher
    }

    /// Snapshot of every property in one interface namespace.
    ///
    /// # Errors
    /// Returns [`AdapterError::UnknownInterface`] for an unrecognized
    /// interface.
    pub fn get_all(&self, interface: &str) -> Result<HashMap<String, PropValue>, AdapterError> {
        self.store.get_all(interface)
    }

    /// Read one property.
    ///
    /// # Errors
    /// Returns [`AdapterError::UnknownInterface`] or
    /// [`AdapterError::UnknownProperty`] when the lookup misses.
    pub fn get_property(&self, interface: &str, name: &str) -> Result<PropValue, AdapterError> {
        self.store.get(interface, name)
    }

    /// Write one player-interface property from the remote `Set` operation.
    ///
    /// The write mutates the mirror only; no change notification is
    /// published for it and no player command results from it.
    pub fn set_property(&mut self, name: &str, value: PropValue) {
        self.store.set(name, value);
    }
}
