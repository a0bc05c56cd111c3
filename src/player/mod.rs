//! Contracts at the boundary to the underlying media player.
//!
//! The bridge treats the player as an external collaborator: it calls a
//! small command interface on it and subscribes to its event feeds. Nothing
//! here implements playback.

/// Player command interface trait
pub mod commands;
/// Player error types
pub mod error;
/// Player event feeds
pub mod events;
/// Native player state and track types
pub mod types;

pub use commands::*;
pub use error::*;
pub use events::*;
pub use types::*;
