//! Playlist-activity and queue-position queries over the player state.

use crate::model::{PlaybackStatus, PlayerState};

/// Whether this playlist is the one actively playing.
///
/// True only when the player's current playlist id equals `playlist_id`
/// exactly AND the status is [`PlaybackStatus::Playing`]. A paused or
/// stopped player is never "playing", even when the playlist matches, and
/// a player with no current playlist fails the comparison.
pub fn is_current_playlist_playing(player: &PlayerState, playlist_id: &str) -> bool {
    player.current_playlist_id.as_deref() == Some(playlist_id)
        && player.status == PlaybackStatus::Playing
}

/// Zero-based index of the playing track within the queue, or `-1`.
///
/// Scans the queue in order and returns the index of the **first** entry
/// structurally equal to `playing_track`. When the queue holds duplicate
/// entries the earliest index wins; playlists legitimately queue the same
/// track more than once and callers rely on the first-occurrence rule.
///
/// Returns `-1` when nothing is playing or the playing entry is not in the
/// queue (e.g. the queue was replaced mid-playback). Absence is not an
/// error.
pub fn current_position(player: &PlayerState) -> i32 {
    let Some(playing) = player.playing_track.as_ref() else {
        return -1;
    };

    player
        .queue
        .iter()
        .position(|entry| entry == playing)
        .map_or(-1, |index| index as i32)
}
