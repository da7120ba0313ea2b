//! Error types for placement, generation, and word sources.

use std::path::PathBuf;

use crate::geometry::Position;

/// Failure to place a single word into a grid.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error("cannot place an empty word")]
    EmptyWord,

    /// The word is longer than both grid dimensions and can never fit.
    #[error("word \"{word}\" ({len} letters) does not fit a {width}x{height} grid in any orientation")]
    WordTooLong {
        word: String,
        len: usize,
        width: usize,
        height: usize,
    },

    /// The random search ran out of attempts. This is not proof that the
    /// word cannot be placed.
    #[error("no position found for \"{word}\" after {attempts} attempts")]
    PlacementFailed { word: String, attempts: usize },

    #[error("placement starting at {position} leaves the grid")]
    OutOfBounds { position: Position },

    #[error("\"{word}\" conflicts with a word already in the grid")]
    Conflict { word: String },
}

/// Failure of a whole puzzle generation. No partial grid is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid grid dimensions {width}x{height} (both must be at least 1)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("word slot {slot} could not be filled after {attempts} words")]
    RetriesExhausted { slot: usize, attempts: usize },

    #[error("word source failed: {0}")]
    WordSource(#[from] WordSourceError),
}

/// Failure to supply words.
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    #[error("failed to load word list from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list is empty")]
    Empty,
}
