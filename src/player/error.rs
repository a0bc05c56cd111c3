/// Errors raised by the player's command interface.
#[derive(thiserror::Error, Debug)]
pub enum PlayerError {
    /// The player rejected or failed to execute a command
    #[error("Player command {command} failed: {reason}")]
    CommandFailed {
        /// Name of the command that failed
        command: &'static str,
        /// Player-reported failure reason
        reason: String,
    },

    /// The player is no longer reachable
    #[error("Player is not available")]
    Unavailable,
}
