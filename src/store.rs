//! The shared state store.
//!
//! Owns the [`AppState`] tree and is its only writer. Track fetch events
//! and playback controls arrive as [`Action`]s; readers take cheap
//! [`Snapshot`]s, an `Arc` of the whole tree plus a version stamp, so a
//! query never observes a half-applied update. The version stamp is what
//! [`crate::memo::CachedQuery`] keys its cache on.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::model::{
    AppState, PlaybackStatus, PlayerState, QueueEntry, TrackId, TrackKey, TrackRegistry,
};

/// Track registry mutations, driven by fetch lifecycle events.
#[derive(Debug, Clone)]
pub enum TrackAction {
    /// A fetch for this track began
    LoadStarted(TrackId),
    /// A fetch for this track completed successfully
    LoadFinished(TrackId),
    /// A fetch failed; the error is recorded under the key as given
    LoadFailed { key: TrackKey, message: String },
}

/// Player mutations, driven by playback controls.
#[derive(Debug, Clone)]
pub enum PlayerAction {
    /// Replace the play queue
    SetQueue(Vec<QueueEntry>),
    /// Begin playback of a playlist
    Play { playlist_id: String },
    /// Mark a queue entry as the one now playing
    PlayTrack(QueueEntry),
    Pause,
    Resume,
    Stop,
}

/// Any state mutation the store accepts.
#[derive(Debug, Clone)]
pub enum Action {
    Track(TrackAction),
    Player(PlayerAction),
}

impl From<TrackAction> for Action {
    fn from(action: TrackAction) -> Self {
        Self::Track(action)
    }
}

impl From<PlayerAction> for Action {
    fn from(action: PlayerAction) -> Self {
        Self::Player(action)
    }
}

/// An immutable point-in-time read of the state tree.
///
/// Cloning is cheap (an `Arc` bump). Two snapshots with the same version
/// hold identical state, which is what makes version-keyed memoization
/// sound.
#[derive(Debug, Clone)]
pub struct Snapshot {
    version: u64,
    state: Arc<AppState>,
}

impl Snapshot {
    /// Monotonic stamp, bumped once per dispatched action.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tracks(&self) -> &TrackRegistry {
        &self.state.tracks
    }

    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }
}

#[derive(Default)]
struct Shared {
    state: Arc<AppState>,
    version: u64,
}

/// Shared state store. Safe to read from any number of threads; all
/// writes funnel through [`Store::dispatch`].
#[derive(Default)]
pub struct Store {
    shared: RwLock<Shared>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing state (e.g. restored from disk).
    pub fn with_state(state: AppState) -> Self {
        Self {
            shared: RwLock::new(Shared {
                state: Arc::new(state),
                version: 0,
            }),
        }
    }

    /// Take an immutable snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        let shared = self.shared.read();
        Snapshot {
            version: shared.version,
            state: Arc::clone(&shared.state),
        }
    }

    /// Apply an action and bump the version stamp.
    ///
    /// Copy-on-write: outstanding snapshots keep the tree they were taken
    /// from; the store clones the state only when a snapshot is still
    /// holding it.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        let mut shared = self.shared.write();
        let state = Arc::make_mut(&mut shared.state);
        match action {
            Action::Track(action) => reduce_track(&mut state.tracks, action),
            Action::Player(action) => reduce_player(&mut state.player, action),
        }
        shared.version += 1;
        trace!(version = shared.version, "state updated");
    }
}

fn reduce_track(tracks: &mut TrackRegistry, action: TrackAction) {
    match action {
        TrackAction::LoadStarted(id) => {
            // Idempotent: a retried fetch must not duplicate the mark.
            if !tracks.loading.contains(&id) {
                tracks.loading.push(id);
            }
            // A retry supersedes a stale failure recorded for the numeric key.
            tracks.error.remove(&TrackKey::Id(id));
            trace!(track = %id, "track load started");
        }
        TrackAction::LoadFinished(id) => {
            tracks.loading.retain(|t| *t != id);
            trace!(track = %id, "track load finished");
        }
        TrackAction::LoadFailed { key, message } => {
            // The loading set is numeric, so clear via the key's numeric view;
            // the error itself is recorded under the key exactly as given.
            if let Some(id) = key.as_id() {
                tracks.loading.retain(|t| *t != id);
            }
            debug!(key = %key, error = %message, "track load failed");
            tracks.error.insert(key, message);
        }
    }
}

fn reduce_player(player: &mut PlayerState, action: PlayerAction) {
    match action {
        PlayerAction::SetQueue(queue) => {
            debug!(len = queue.len(), "queue replaced");
            player.queue = queue;
        }
        PlayerAction::Play { playlist_id } => {
            debug!(playlist = %playlist_id, "playlist playback started");
            player.current_playlist_id = Some(playlist_id);
            player.status = PlaybackStatus::Playing;
        }
        PlayerAction::PlayTrack(entry) => {
            debug!(slot = %entry.id, track = %entry.track_id, "now playing");
            player.playing_track = Some(entry);
            player.status = PlaybackStatus::Playing;
        }
        PlayerAction::Pause => {
            if player.status == PlaybackStatus::Playing {
                player.status = PlaybackStatus::Paused;
            }
        }
        PlayerAction::Resume => {
            if player.status == PlaybackStatus::Paused {
                player.status = PlaybackStatus::Playing;
            }
        }
        PlayerAction::Stop => {
            debug!("playback stopped");
            player.status = PlaybackStatus::Stopped;
            player.playing_track = None;
        }
    }
}
