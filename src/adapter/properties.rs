use std::collections::HashMap;

use crate::config::BridgeConfig;

use super::error::AdapterError;
use super::types::{PLAYER_INTERFACE, PlaybackStatus, PropValue, ROOT_INTERFACE, TrackMetadata};

/// Mirror of the protocol-visible state, one map per interface namespace.
///
/// The root map is fixed at construction. The player map starts from the
/// protocol defaults and is mutated in place by event translation and by
/// the remote `Set` operation for the adapter's lifetime.
#[derive(Debug, Clone)]
pub struct PropertyStore {
    root: HashMap<String, PropValue>,
    player: HashMap<String, PropValue>,
}

impl PropertyStore {
    /// Build the store with root identity from config and player defaults.
    pub fn new(config: &BridgeConfig) -> Self {
        let root = HashMap::from([
            (
                "Identity".to_string(),
                PropValue::Str(config.identity.clone()),
            ),
            (
                "DesktopEntry".to_string(),
                PropValue::Str(config.desktop_entry.clone()),
            ),
            ("CanQuit".to_string(), PropValue::Bool(config.can_quit)),
            ("CanRaise".to_string(), PropValue::Bool(config.can_raise)),
            (
                "HasTrackList".to_string(),
                PropValue::Bool(config.has_track_list),
            ),
        ]);

        // Capability flags are constants asserting "always controllable";
        // they are not derived from the player.
        let player = HashMap::from([
            (
                "Metadata".to_string(),
                PropValue::Metadata(TrackMetadata::default()),
            ),
            ("Rate".to_string(), PropValue::Float(1.0)),
            ("MinimumRate".to_string(), PropValue::Float(1.0)),
            ("MaximumRate".to_string(), PropValue::Float(1.0)),
            ("CanGoNext".to_string(), PropValue::Bool(true)),
            ("CanGoPrevious".to_string(), PropValue::Bool(true)),
            ("CanControl".to_string(), PropValue::Bool(true)),
            ("CanSeek".to_string(), PropValue::Bool(true)),
            ("CanPause".to_string(), PropValue::Bool(true)),
            ("CanPlay".to_string(), PropValue::Bool(true)),
            ("Position".to_string(), PropValue::Int(0)),
            (
                "LoopStatus".to_string(),
                PropValue::Str("Playlist".to_string()),
            ),
            (
                "PlaybackStatus".to_string(),
                PropValue::Str(PlaybackStatus::Stopped.as_str().to_string()),
            ),
            ("Volume".to_string(), PropValue::Float(1.0)),
        ]);

        Self { root, player }
    }

    /// Snapshot of every property in the given interface namespace.
    ///
    /// # Errors
    /// Returns [`AdapterError::UnknownInterface`] for any interface outside
    /// the root and player namespaces.
    pub fn get_all(&self, interface: &str) -> Result<HashMap<String, PropValue>, AdapterError> {
        match interface {
            PLAYER_INTERFACE => Ok(self.player.clone()),
            ROOT_INTERFACE => Ok(self.root.clone()),
            other => Err(AdapterError::UnknownInterface(other.to_string())),
        }
    }

    /// Read a single property.
    ///
    /// # Errors
    /// Returns [`AdapterError::UnknownInterface`] for an unrecognized
    /// interface and [`AdapterError::UnknownProperty`] for a name the
    /// interface does not carry.
    pub fn get(&self, interface: &str, name: &str) -> Result<PropValue, AdapterError> {
        let map = match interface {
            PLAYER_INTERFACE => &self.player,
            ROOT_INTERFACE => &self.root,
            other => return Err(AdapterError::UnknownInterface(other.to_string())),
        };

        map.get(name)
            .cloned()
            .ok_or_else(|| AdapterError::UnknownProperty {
                interface: interface.to_string(),
                name: name.to_string(),
            })
    }

    /// Write a player-interface property.
    ///
    /// Unknown names are accepted and stored; the protocol allows
    /// controller-defined properties.
    pub fn set(&mut self, name: &str, value: PropValue) {
        self.player.insert(name.to_string(), value);
    }

    /// Apply a batch of player-interface changes.
    pub fn update(&mut self, changes: HashMap<String, PropValue>) {
        self.player.extend(changes);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn store() -> PropertyStore {
        PropertyStore::new(&BridgeConfig::default())
    }

    #[test]
    fn root_snapshot_holds_identity_and_flags() {
        let all = store().get_all(ROOT_INTERFACE).unwrap();

        assert!(all.contains_key("Identity"));
        assert_eq!(all.get("CanQuit").unwrap().as_bool(), Some(false));
        assert_eq!(all.get("CanRaise").unwrap().as_bool(), Some(false));
        assert_eq!(all.get("HasTrackList").unwrap().as_bool(), Some(false));
    }

    #[test]
    fn player_snapshot_starts_from_protocol_defaults() {
        let all = store().get_all(PLAYER_INTERFACE).unwrap();

        assert_eq!(all.get("PlaybackStatus").unwrap().as_str(), Some("Stopped"));
        assert_eq!(all.get("LoopStatus").unwrap().as_str(), Some("Playlist"));
        assert_eq!(all.get("Position").unwrap().as_int(), Some(0));
        assert_eq!(all.get("Rate").unwrap().as_float(), Some(1.0));
        assert_eq!(all.get("Volume").unwrap().as_float(), Some(1.0));
        assert_eq!(all.get("CanControl").unwrap().as_bool(), Some(true));
        assert_eq!(
            all.get("Metadata").unwrap().as_metadata(),
            Some(&TrackMetadata::default())
        );
    }

    #[test]
    fn unknown_interface_is_rejected() {
        let result = store().get_all("org.example.NotMpris");
        assert!(matches!(result, Err(AdapterError::UnknownInterface(_))));

        let result = store().get("org.example.NotMpris", "Volume");
        assert!(matches!(result, Err(AdapterError::UnknownInterface(_))));
    }

    #[test]
    fn unknown_property_is_rejected_on_read() {
        let result = store().get(PLAYER_INTERFACE, "NoSuchProperty");
        assert!(matches!(
            result,
            Err(AdapterError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn set_accepts_controller_defined_names() {
        let mut store = store();
        store.set("X-Custom", PropValue::Int(7));

        assert_eq!(
            store.get(PLAYER_INTERFACE, "X-Custom").unwrap().as_int(),
            Some(7)
        );
    }

    #[test]
    fn reads_are_idempotent_between_events() {
        let store = store();

        let first = store.get(PLAYER_INTERFACE, "Volume").unwrap();
        let second = store.get(PLAYER_INTERFACE, "Volume").unwrap();
        assert_eq!(first, second);
    }
}
