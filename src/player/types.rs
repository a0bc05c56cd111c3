/// Playback state as reported by the player engine.
///
/// This is the player's native vocabulary, before translation into the
/// protocol-visible `PlaybackStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Nothing is loaded or playback was stopped
    Stopped,

    /// Playback is paused
    Paused,

    /// Playback is running
    Playing,

    /// Player is buffering before resuming playback
    Buffering,
}

/// Track descriptor carried by the player's media-changed feed.
///
/// Units are the player's native ones: the artist field is a single
/// delimiter-joined string and the length is in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    /// Track title
    pub title: String,

    /// Artist names joined with `", "`
    pub artists: String,

    /// Album name
    pub album: String,

    /// Source URL of the track
    pub url: String,

    /// Track length in seconds
    pub length_secs: i64,

    /// Album art URL
    pub art_url: String,
}

/// A single event from one of the player's feeds.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Playback position moved, in the player's native milliseconds
    PositionChanged(i64),

    /// A different track was loaded
    MediaChanged(TrackInfo),

    /// Playback state changed
    StateChanged(PlayerState),
}
