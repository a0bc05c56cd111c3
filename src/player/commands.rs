use super::error::PlayerError;

/// Command interface of the underlying media player.
///
/// The bridge never manages playback itself; every remote call ends up as
/// one of these delegations. All commands are fire-and-forget from the
/// bridge's point of view: they either return immediately or fail, and any
/// resulting state change flows back through the player's event feeds.
pub trait PlayerCommands: Send + Sync {
    /// Start playback
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    fn play(&self) -> Result<(), PlayerError>;

    /// Pause playback
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    fn pause(&self) -> Result<(), PlayerError>;

    /// Toggle between playing and paused
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    fn play_pause(&self) -> Result<(), PlayerError>;

    /// Stop playback
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    fn stop(&self) -> Result<(), PlayerError>;

    /// Advance to the next track
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    fn next(&self) -> Result<(), PlayerError>;

    /// Return to the previous track
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    fn previous(&self) -> Result<(), PlayerError>;

    /// Set the playback position, in the player's native milliseconds
    ///
    /// # Errors
    /// Returns error if the player rejects the command
    fn set_position(&self, position_ms: i64) -> Result<(), PlayerError>;
}

impl PlayerCommands for Box<dyn PlayerCommands> {
    fn play(&self) -> Result<(), PlayerError> {
        (**self).play()
    }

    fn pause(&self) -> Result<(), PlayerError> {
        (**self).pause()
    }

    fn play_pause(&self) -> Result<(), PlayerError> {
        (**self).play_pause()
    }

    fn stop(&self) -> Result<(), PlayerError> {
        (**self).stop()
    }

    fn next(&self) -> Result<(), PlayerError> {
        (**self).next()
    }

    fn previous(&self) -> Result<(), PlayerError> {
        (**self).previous()
    }

    fn set_position(&self, position_ms: i64) -> Result<(), PlayerError> {
        (**self).set_position(position_ms)
    }
}
