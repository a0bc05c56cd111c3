use tracing::{debug, info};

use crate::player::{PlayerCommands, PlayerError};

use super::translate::US_PER_MS;

/// Maps incoming remote commands onto the player's command interface.
///
/// Every operation is a direct synchronous delegation with no local
/// validation beyond unit conversion; player failures are returned to the
/// caller untouched so the transport can report them.
#[derive(Debug)]
pub struct ControlDispatcher<P: PlayerCommands> {
    player: P,
}

impl<P: PlayerCommands> ControlDispatcher<P> {
    /// Wrap the injected player command interface.
    pub fn new(player: P) -> Self {
        Self { player }
    }

    /// Start playback.
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    pub fn play(&self) -> Result<(), PlayerError> {
        info!("remote call: play");
        self.player.play()
    }

    /// Pause playback.
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    pub fn pause(&self) -> Result<(), PlayerError> {
        info!("remote call: pause");
        self.player.pause()
    }

    /// Toggle between playing and paused.
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    pub fn play_pause(&self) -> Result<(), PlayerError> {
        info!("remote call: play_pause");
        self.player.play_pause()
    }

    /// Stop playback.
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    pub fn stop(&self) -> Result<(), PlayerError> {
        info!("remote call: stop");
        self.player.stop()
    }

    /// Advance to the next track.
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    pub fn next(&self) -> Result<(), PlayerError> {
        info!("remote call: next");
        self.player.next()
    }

    /// Return to the previous track.
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    pub fn previous(&self) -> Result<(), PlayerError> {
        info!("remote call: previous");
        self.player.previous()
    }

    /// Seek with a microsecond offset.
    ///
    /// The offset is divided by 1000 (truncating, the reverse of the
    /// position-event scaling) and forwarded to the player's *absolute*
    /// position setter. That mixes offset semantics with absolute-position
    /// behavior; kept to match the service this replaces rather than
    /// silently changed to a relative seek.
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    pub fn seek(&self, offset_us: i64) -> Result<(), PlayerError> {
        info!(offset_us, "remote call: seek");
        self.player.set_position(offset_us / US_PER_MS)
    }

    /// Jump to an absolute microsecond position in the given track.
    ///
    /// The track id is accepted for wire compatibility but not checked
    /// against the current track.
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    pub fn set_position(&self, track_id: &str, position_us: i64) -> Result<(), PlayerError> {
        info!(track_id, position_us, "remote call: set_position");
        self.player.set_position(position_us / US_PER_MS)
    }

    /// Accepted but intentionally does nothing; URI playback is not wired
    /// to the player. Callers observe neither a failure nor an effect.
    pub fn open_uri(&self, uri: &str) {
        debug!(uri, "remote call: open_uri (ignored)");
    }

    /// Accepted but intentionally does nothing; process lifecycle is owned
    /// outside the bridge.
    pub fn quit(&self) {
        debug!("remote call: quit (ignored)");
    }
}
