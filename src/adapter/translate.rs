use std::collections::HashMap;

use crate::player::{PlayerEvent, TrackInfo};

use super::types::{PlaybackStatus, PropValue, TrackMetadata};

/// Delimiter the player uses to join artist names into one string.
const ARTIST_DELIMITER: &str = ", ";

/// Microseconds per millisecond, the scale between player position and
/// protocol position.
pub(crate) const US_PER_MS: i64 = 1000;

/// Microseconds per second, the scale for track length.
const US_PER_SEC: i64 = 1_000_000;

/// Store mutation produced by translating one player event.
///
/// `changed` is the minimal set of properties whose values moved; `seeked`
/// carries the absolute position when the event also warrants a dedicated
/// seek notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Delta {
    /// Properties to write into the store and publish as changed
    pub changed: HashMap<String, PropValue>,

    /// Absolute position in microseconds for the seek notification
    pub seeked: Option<i64>,
}

/// Translate a player event into protocol-visible store changes.
///
/// Every unit crossing happens here: positions go from milliseconds to
/// microseconds, track lengths from seconds to microseconds, and the artist
/// string becomes an ordered sequence.
pub fn translate(event: &PlayerEvent) -> Delta {
    match event {
        PlayerEvent::PositionChanged(position_ms) => {
            let position_us = position_ms * US_PER_MS;
            Delta {
                changed: HashMap::from([(
                    "Position".to_string(),
                    PropValue::Int(position_us),
                )]),
                seeked: Some(position_us),
            }
        }
        PlayerEvent::MediaChanged(track) => Delta {
            changed: HashMap::from([(
                "Metadata".to_string(),
                PropValue::Metadata(metadata_from(track)),
            )]),
            seeked: None,
        },
        PlayerEvent::StateChanged(state) => {
            let status = PlaybackStatus::from(*state);
            Delta {
                changed: HashMap::from([(
                    "PlaybackStatus".to_string(),
                    PropValue::Str(status.as_str().to_string()),
                )]),
                seeked: None,
            }
        }
    }
}

/// Build the replacement metadata record for a media-changed event.
///
/// The whole record is replaced at once; partial metadata updates are not a
/// supported state.
fn metadata_from(track: &TrackInfo) -> TrackMetadata {
    TrackMetadata {
        length_us: track.length_secs * US_PER_SEC,
        art_url: track.art_url.clone(),
        artists: track
            .artists
            .split(ARTIST_DELIMITER)
            .map(str::to_string)
            .collect(),
        title: track.title.clone(),
        url: track.url.clone(),
        album: track.album.clone(),
    }
}
