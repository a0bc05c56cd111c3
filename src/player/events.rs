use tokio::sync::broadcast;

use super::types::{PlayerState, TrackInfo};

/// Buffered events per feed before slow subscribers start missing them.
const FEED_CAPACITY: usize = 64;

/// The player's three event feeds, one broadcast channel each.
///
/// The player side publishes into the hub; the bridge subscribes to all
/// three feeds at construction and mirrors them into protocol state.
/// Publishing never blocks and does not fail when no subscriber is
/// listening yet.
#[derive(Debug, Clone)]
pub struct PlayerEvents {
    position: broadcast::Sender<i64>,
    media: broadcast::Sender<TrackInfo>,
    state: broadcast::Sender<PlayerState>,
}

impl PlayerEvents {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        let (position, _) = broadcast::channel(FEED_CAPACITY);
        let (media, _) = broadcast::channel(FEED_CAPACITY);
        let (state, _) = broadcast::channel(FEED_CAPACITY);

        Self {
            position,
            media,
            state,
        }
    }

    /// Publish a position change, in the player's native milliseconds.
    pub fn position_changed(&self, position_ms: i64) {
        let _ = self.position.send(position_ms);
    }

    /// Publish a media change with the new track's descriptor.
    pub fn media_changed(&self, track: TrackInfo) {
        let _ = self.media.send(track);
    }

    /// Publish a playback-state change.
    pub fn state_changed(&self, state: PlayerState) {
        let _ = self.state.send(state);
    }

    /// Subscribe to the position feed.
    pub fn subscribe_position(&self) -> broadcast::Receiver<i64> {
        self.position.subscribe()
    }

    /// Subscribe to the media-changed feed.
    pub fn subscribe_media(&self) -> broadcast::Receiver<TrackInfo> {
        self.media.subscribe()
    }

    /// Subscribe to the playback-state feed.
    pub fn subscribe_state(&self) -> broadcast::Receiver<PlayerState> {
        self.state.subscribe()
    }
}

impl Default for PlayerEvents {
    fn default() -> Self {
        Self::new()
    }
}
