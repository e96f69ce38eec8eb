//! Core data types for the shared player state tree.
//!
//! Two state nodes matter to the query layer: the [`TrackRegistry`]
//! (which tracks are mid-fetch, which failed) and the [`PlayerState`]
//! (playback status, active track, play queue). Both are owned and mutated
//! by the store; queries only ever see them inside an immutable snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A track's native numeric identifier, as stored in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub i64);

impl TrackId {
    /// Lenient conversion from a textual id.
    ///
    /// Follows standard numeric-parse semantics: surrounding whitespace is
    /// ignored, and text that does not parse as an `i64` yields `None`,
    /// which never matches a registry entry. [`crate::status::is_track_loading`]
    /// relies on this to stay total over arbitrary caller input.
    pub fn coerce(text: &str) -> Option<Self> {
        text.trim().parse::<i64>().ok().map(Self)
    }
}

impl From<i64> for TrackId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for TrackId {
    type Err = Error;

    /// Strict parse. Unlike [`TrackId::coerce`], invalid text is an error,
    /// for callers that want to reject bad ids at the boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|source| Error::invalid_track_id(s, source))
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A track identifier as supplied by a caller: numeric or textual.
///
/// The registry's error map is keyed by `TrackKey`, and lookups use the key
/// **as given** with no normalization: `TrackKey::from(7)` and
/// `TrackKey::from("7")` are distinct keys. Callers must query with the
/// same representation the map was populated with.
///
/// This is the opposite of the loading-set query, which always normalizes
/// text to a numeric [`TrackId`]. The asymmetry is deliberate and callers
/// depend on it; do not "fix" it by coercing here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackKey {
    Id(TrackId),
    Text(String),
}

impl TrackKey {
    /// Best-effort numeric view of the key.
    ///
    /// Textual keys fall back to the lenient parse. Used by the store to
    /// clear loading marks (which are always numeric) on load failure;
    /// never used for error-map lookups.
    pub fn as_id(&self) -> Option<TrackId> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Text(text) => TrackId::coerce(text),
        }
    }
}

impl From<TrackId> for TrackKey {
    fn from(id: TrackId) -> Self {
        Self::Id(id)
    }
}

impl From<i64> for TrackKey {
    fn from(id: i64) -> Self {
        Self::Id(TrackId(id))
    }
}

impl From<&str> for TrackKey {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TrackKey {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => id.fmt(f),
            Self::Text(text) => text.fmt(f),
        }
    }
}

/// Current playback status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Playing,
    Paused,
    Stopped,
}

/// One scheduled item in the play queue.
///
/// Queue matching compares entries by full structural equality (every
/// field), never by track id alone: queueing the same track twice produces
/// two entries with distinct slot ids, and position queries must be able to
/// tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Identifier of this queue slot (unique per scheduling, not per track)
    pub id: String,
    /// The track scheduled in this slot
    pub track_id: TrackId,
}

impl QueueEntry {
    pub fn new(id: impl Into<String>, track_id: impl Into<TrackId>) -> Self {
        Self {
            id: id.into(),
            track_id: track_id.into(),
        }
    }
}

/// Per-track fetch status shared across the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRegistry {
    /// Track ids with a fetch currently in flight.
    /// SmallVec: a handful of concurrent loads at most, avoid heap allocation.
    pub loading: SmallVec<[TrackId; 8]>,
    /// Load failures, keyed by the identifier the failure was recorded under.
    /// Absent entry = no error (the common case).
    pub error: HashMap<TrackKey, String>,
}

/// Playback state: what is playing, from where, and in what order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Playlist currently associated with playback, if any
    pub current_playlist_id: Option<String>,
    /// Current playback status
    pub status: PlaybackStatus,
    /// The queue entry considered "now playing", if any
    pub playing_track: Option<QueueEntry>,
    /// Play order. Order is significant; duplicates are permitted.
    pub queue: Vec<QueueEntry>,
}

/// The whole shared state tree the query layer reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub tracks: TrackRegistry,
    pub player: PlayerState,
}
