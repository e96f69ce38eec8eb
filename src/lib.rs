//! Derived playback and track-status queries for a music player.
//!
//! A player UI recomputes a handful of flags on every state change: is this
//! track still fetching, did its fetch fail, is this playlist the one
//! actually playing, and where the playhead sits in the queue. This crate
//! owns those derivations as pure queries over an immutable snapshot of the
//! shared state tree, plus the small store that produces such snapshots.
//!
//! # Layout
//!
//! - [`model`]: the state tree types (track registry, player state, queue)
//! - [`status`]: per-track loading/error queries
//! - [`position`]: playlist-playing and queue-position queries
//! - [`store`]: the snapshot-producing state store and its actions
//! - [`memo`]: caller-owned memoization for derived values
//!
//! Queries never fail: malformed or missing input degrades to `false`,
//! `None`, or `-1`. Rendering, scheduling of query calls, and everything
//! else view-side belongs to the embedding application.

pub mod error;
pub mod memo;
pub mod model;
pub mod position;
pub mod status;
pub mod store;
#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
pub use model::{
    AppState, PlaybackStatus, PlayerState, QueueEntry, TrackId, TrackKey, TrackRegistry,
};
pub use store::{Action, Snapshot, Store};
