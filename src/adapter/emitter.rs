use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::warn;

use super::types::PropValue;

/// Change notification handed to the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A minimal changed subset of one interface's properties
    PropertiesChanged {
        /// Interface namespace the properties belong to
        interface: String,
        /// Changed properties and their new values
        changed: HashMap<String, PropValue>,
    },

    /// Playback position moved to an absolute microsecond offset
    Seeked {
        /// New absolute position in microseconds
        position_us: i64,
    },
}

/// Sink for protocol change notifications.
///
/// The adapter calls this with the minimal changed subset only, never a
/// full snapshot; the one whole-record case is the atomic `Metadata`
/// replacement. Implementations must not block.
pub trait NotificationEmitter: Send {
    /// Publish a property-changed notification for one interface.
    fn properties_changed(&self, interface: &str, changed: &HashMap<String, PropValue>);

    /// Publish a dedicated seek notification.
    fn seeked(&self, position_us: i64);
}

/// Emitter that hands notifications to the transport over a channel.
///
/// The D-Bus task on the other end turns them into `PropertiesChanged` and
/// `Seeked` signals. A closed channel means the transport is gone; that is
/// logged and otherwise ignored, since notification delivery is best-effort.
#[derive(Debug, Clone)]
pub struct ChannelEmitter {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelEmitter {
    /// Create the emitter and the receiving end for the transport task.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationEmitter for ChannelEmitter {
    fn properties_changed(&self, interface: &str, changed: &HashMap<String, PropValue>) {
        let notification = Notification::PropertiesChanged {
            interface: interface.to_string(),
            changed: changed.clone(),
        };

        if self.tx.send(notification).is_err() {
            warn!("Notification channel closed; dropping properties-changed");
        }
    }

    fn seeked(&self, position_us: i64) {
        if self.tx.send(Notification::Seeked { position_us }).is_err() {
            warn!("Notification channel closed; dropping seeked at {position_us}us");
        }
    }
}
