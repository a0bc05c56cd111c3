//! mpris-bridge - MPRIS remote-control bridge for an embedded media player.
//!
//! Mirrors a host player's live state onto the standard MPRIS D-Bus
//! interfaces so desktop shells, media-key daemons, and remote widgets can
//! query and drive playback without knowing the player's internal API.
//! The main pieces are:
//!
//! - Property mirror of the protocol-visible root and player state
//! - Event translation from the player's feeds into change notifications
//! - Remote-call dispatch into player commands with unit conversion
//! - Session-bus transport serving the two MPRIS interfaces
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mpris_bridge::config::BridgeConfig;
//! use mpris_bridge::player::PlayerEvents;
//! # use mpris_bridge::player::{PlayerCommands, PlayerError};
//! # struct MyPlayer;
//! # impl PlayerCommands for MyPlayer {
//! #     fn play(&self) -> Result<(), PlayerError> { Ok(()) }
//! #     fn pause(&self) -> Result<(), PlayerError> { Ok(()) }
//! #     fn play_pause(&self) -> Result<(), PlayerError> { Ok(()) }
//! #     fn stop(&self) -> Result<(), PlayerError> { Ok(()) }
//! #     fn next(&self) -> Result<(), PlayerError> { Ok(()) }
//! #     fn previous(&self) -> Result<(), PlayerError> { Ok(()) }
//! #     fn set_position(&self, _ms: i64) -> Result<(), PlayerError> { Ok(()) }
//! # }
//!
//! # async fn start() -> zbus::Result<()> {
//! let config = BridgeConfig::default();
//! let events = PlayerEvents::new();
//!
//! // Hand the bridge your player's command interface and event feeds.
//! let (_connection, _adapter) =
//!     mpris_bridge::dbus::start(&config, Box::new(MyPlayer), &events).await?;
//!
//! // Publish player activity; controllers see it immediately.
//! events.position_changed(1_500);
//! # Ok(())
//! # }
//! ```

/// Protocol-adapter core: property mirror, translation, dispatch.
pub mod adapter;

/// Bridge identity and capability configuration.
pub mod config;

/// Session-bus transport serving the MPRIS interfaces.
pub mod dbus;

/// Contracts at the boundary to the underlying player.
pub mod player;

/// Tracing initialization for host applications.
pub mod tracing_config;

pub use adapter::{AdapterError, NotificationEmitter, ProtocolAdapter};
pub use config::BridgeConfig;
pub use player::{PlayerCommands, PlayerError, PlayerEvents};
