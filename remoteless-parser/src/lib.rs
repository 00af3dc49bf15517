//! # remoteless-parser
//!
//! Decoders for the plain-text responses of the Remoteless daemon.
//! This crate performs no I/O: it turns response bodies into typed values
//! and leaves fetching (and following pagination) to `remoteless-api`.
//!
//! ## Usage
//!
//! ```rust
//! use remoteless_parser::{decode_state, decode_search, DecodeOptions};
//!
//! let state = decode_state("alive=True\nvolume=42\n").unwrap();
//! assert!(state.alive);
//! assert_eq!(state.volume, 42);
//!
//! let rows = "artist|0|spotify:artist:a|Someone\ntrack|1|spotify:track:b|Something\n";
//! let songs = decode_search(rows, DecodeOptions::flushing()).unwrap();
//! assert_eq!(songs.len(), 1);
//! ```
//!
//! ## Wire format
//!
//! Bodies are newline-separated records. Playlist and search records use `|`
//! between fields; state records and pagination markers use `=`. Values are
//! never escaped, so a value containing its record's delimiter cannot be
//! decoded faithfully.

pub mod error;
pub mod common;
pub mod services;

// Re-export error types for convenient top-level access
pub use error::{DecodeError, DecodeResult, ValueKind};

// Re-export models and options for convenient top-level access
pub use common::{DecodeOptions, PaginationCursor, Playlist, PlaylistPage, Song, SongInfo, State};

// Re-export the decoders for convenient top-level access
pub use services::{decode_playlist_page, decode_search, decode_state};
