//! Protocol-adapter core: mirrors player state into protocol properties,
//! translates player events into change notifications, and dispatches
//! remote calls back into player commands.

/// Adapter orchestrator
pub mod core;
/// Remote-command dispatch
pub mod dispatch;
/// Notification sink contract and channel emitter
pub mod emitter;
/// Adapter error types
pub mod error;
/// Protocol property mirror
pub mod properties;
/// Player-event to property-delta translation
pub mod translate;
/// Protocol value and status types
pub mod types;

pub use self::core::*;
pub use dispatch::*;
pub use emitter::*;
pub use error::*;
pub use properties::*;
pub use translate::*;
pub use types::*;
