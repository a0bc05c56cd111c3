use crate::player::PlayerError;

/// Errors surfaced by the protocol adapter.
#[derive(thiserror::Error, Debug)]
pub enum AdapterError {
    /// Property access named an interface outside the two known namespaces
    #[error("Object does not implement the {0} interface")]
    UnknownInterface(String),

    /// Property read named a property the interface does not carry
    #[error("Interface {interface} has no property {name}")]
    UnknownProperty {
        /// Interface the property was looked up on
        interface: String,
        /// Requested property name
        name: String,
    },

    /// The underlying player command failed; passed through uncaught
    #[error(transparent)]
    Player(#[from] PlayerError),
}
