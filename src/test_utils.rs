//! Test fixtures for playstate tests.
//!
//! Mock factories with sensible defaults; customize with struct update
//! syntax:
//!
//! ```ignore
//! let player = PlayerState {
//!     status: PlaybackStatus::Paused,
//!     ..mock_player()
//! };
//! ```

use smallvec::smallvec;
use tracing_subscriber::EnvFilter;

use crate::model::{PlaybackStatus, PlayerState, QueueEntry, TrackId, TrackKey, TrackRegistry};

/// Initialize tracing for a test; `RUST_LOG` controls verbosity.
///
/// Safe to call from every test: only the first initialization wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a queue entry with the given slot id and track id.
pub fn mock_entry(id: &str, track_id: i64) -> QueueEntry {
    QueueEntry::new(id, track_id)
}

/// Creates a registry with track 5 loading and a failure recorded for
/// track 7 under its numeric key.
pub fn mock_registry() -> TrackRegistry {
    let mut registry = TrackRegistry {
        loading: smallvec![TrackId(5)],
        error: Default::default(),
    };
    registry
        .error
        .insert(TrackKey::from(7), "network error".to_string());
    registry
}

/// Creates a player mid-playback of playlist "p1", with queue
/// `[b, a, a]` and the first "a" entry playing.
pub fn mock_player() -> PlayerState {
    PlayerState {
        current_playlist_id: Some("p1".to_string()),
        status: PlaybackStatus::Playing,
        playing_track: Some(mock_entry("a", 1)),
        queue: vec![mock_entry("b", 2), mock_entry("a", 1), mock_entry("a", 1)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_registry_defaults() {
        let registry = mock_registry();
        assert_eq!(registry.loading.as_slice(), &[TrackId(5)]);
        assert_eq!(
            registry.error.get(&TrackKey::from(7)).map(String::as_str),
            Some("network error")
        );
    }

    #[test]
    fn test_mock_player_defaults() {
        let player = mock_player();
        assert_eq!(player.status, PlaybackStatus::Playing);
        assert_eq!(player.queue.len(), 3);
        assert_eq!(player.playing_track, Some(mock_entry("a", 1)));
    }
}
