//! Bridge configuration: identity strings and root capability flags.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::adapter::BUS_NAME_PREFIX;

/// Errors raised while loading the bridge configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config at {path}: {source}")]
    Io {
        /// Path that failed to read
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML
    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        /// Path that failed to parse
        path: String,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Identity and capability settings exposed on the root interface.
///
/// The player-interface capability flags are not configurable; the bridge
/// asserts "always controllable" regardless of the actual player.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Human-readable player name (`Identity`)
    pub identity: String,

    /// Desktop entry name (`DesktopEntry`)
    pub desktop_entry: String,

    /// Suffix appended to the well-known bus name prefix
    pub bus_suffix: String,

    /// Whether remote controllers may quit the application
    pub can_quit: bool,

    /// Whether remote controllers may raise the application window
    pub can_raise: bool,

    /// Whether the application exposes a track list
    pub has_track_list: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            identity: "mpris-bridge".to_string(),
            desktop_entry: "mpris-bridge".to_string(),
            bus_suffix: "bridge".to_string(),
            can_quit: false,
            can_raise: false,
            has_track_list: false,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from a TOML file, filling omitted fields with
    /// defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Well-known bus name the bridge registers under.
    pub fn bus_name(&self) -> String {
        format!("{BUS_NAME_PREFIX}{}", self.bus_suffix)
    }
}
