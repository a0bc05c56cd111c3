use std::collections::HashMap;
use std::fmt;

use zbus::zvariant::Value;

use crate::player::PlayerState;

/// Well-known name prefix for media players on the session bus.
pub const BUS_NAME_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Object path every MPRIS player serves its interfaces at.
pub const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";

/// Root interface namespace (identity and application capabilities).
pub const ROOT_INTERFACE: &str = "org.mpris.MediaPlayer2";

/// Player interface namespace (playback state and controls).
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// Protocol-visible playback status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    Stopped,
}

impl PlaybackStatus {
    /// Wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<PlayerState> for PlaybackStatus {
    /// Closed three-way mapping: every native state that is not explicitly
    /// stopped or paused counts as playing.
    fn from(state: PlayerState) -> Self {
        match state {
            PlayerState::Stopped => Self::Stopped,
            PlayerState::Paused => Self::Paused,
            _ => Self::Playing,
        }
    }
}

/// Metadata of the currently loaded track, in protocol units.
///
/// Replaced as a whole record on every media-changed event; there is no
/// partial-update path.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMetadata {
    /// Track length in microseconds
    pub length_us: i64,

    /// Album art URL
    pub art_url: String,

    /// Ordered artist names
    pub artists: Vec<String>,

    /// Track title
    pub title: String,

    /// Source URL of the track
    pub url: String,

    /// Album name
    pub album: String,
}

impl Default for TrackMetadata {
    fn default() -> Self {
        Self {
            length_us: 0,
            art_url: String::new(),
            artists: vec!["None".to_string()],
            title: "None".to_string(),
            url: String::new(),
            album: "None".to_string(),
        }
    }
}

impl TrackMetadata {
    /// Flatten into the protocol's metadata dictionary keys.
    pub fn to_map(&self) -> HashMap<String, PropValue> {
        HashMap::from([
            ("mpris:length".to_string(), PropValue::Int(self.length_us)),
            (
                "mpris:artUrl".to_string(),
                PropValue::Str(self.art_url.clone()),
            ),
            (
                "xesam:artist".to_string(),
                PropValue::StrList(self.artists.clone()),
            ),
            ("xesam:title".to_string(), PropValue::Str(self.title.clone())),
            ("xesam:url".to_string(), PropValue::Str(self.url.clone())),
            ("xesam:album".to_string(), PropValue::Str(self.album.clone())),
        ])
    }
}

/// Tagged value type for protocol-visible properties.
///
/// Stands in for the wire protocol's variant type so the property store and
/// dispatch layer stay statically checkable.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Boolean flag
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// Floating-point multiplier or level
    Float(f64),

    /// UTF-8 string
    Str(String),

    /// Ordered sequence of strings
    StrList(Vec<String>),

    /// Nested track-metadata record
    Metadata(TrackMetadata),
}

impl PropValue {
    /// Boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float payload, if this is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// String payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Metadata payload, if this is a metadata record.
    pub fn as_metadata(&self) -> Option<&TrackMetadata> {
        match self {
            Self::Metadata(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&PropValue> for Value<'static> {
    fn from(value: &PropValue) -> Self {
        match value {
            PropValue::Bool(b) => Value::from(*b),
            PropValue::Int(i) => Value::from(*i),
            PropValue::Float(f) => Value::from(*f),
            PropValue::Str(s) => Value::from(s.clone()),
            PropValue::StrList(list) => Value::from(list.clone()),
            PropValue::Metadata(metadata) => {
                let map: HashMap<String, Value<'static>> = metadata
                    .to_map()
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect();
                Value::from(map)
            }
        }
    }
}
