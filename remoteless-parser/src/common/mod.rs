//! Common utilities and data structures shared across the decoders
//!
//! ## Available Utilities
//!
//! - [`tokenizer`]: line and field splitting, plus the [`Record`] view
//! - [`model`]: playlist, song, state and pagination types
//! - [`values`]: boolean and integer field parsing

pub mod tokenizer;
pub mod model;
pub mod values;

// Re-export commonly used types for convenient access
pub use tokenizer::{Record, EQUALS, PIPE};
pub use model::{PaginationCursor, Playlist, PlaylistPage, Song, SongInfo, State};

/// Options shared by the decoders that accumulate records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Commit the record still open at end of stream.
    ///
    /// The daemon's reference client drops the last open playlist (per page)
    /// and the last search song. `false` keeps that behavior.
    pub flush_trailing_record: bool,
}

impl DecodeOptions {
    /// Options that commit the trailing record instead of dropping it
    pub fn flushing() -> Self {
        Self {
            flush_trailing_record: true,
        }
    }
}
