//! Library error types.
//!
//! The query layer itself is total: lookups degrade to `false` / `None` /
//! `-1` rather than failing. Errors only arise at the input boundary, when
//! a caller asks for a strict parse of a track identifier.

/// Library-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text that is not a valid numeric track id
    #[error("invalid track id {text:?}: {source}")]
    InvalidTrackId {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl Error {
    pub fn invalid_track_id(text: impl Into<String>, source: std::num::ParseIntError) -> Self {
        Self::InvalidTrackId {
            text: text.into(),
            source,
        }
    }
}
