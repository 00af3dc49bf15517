//! Decoders organized by daemon endpoint
//!
//! ## Available Decoders
//!
//! - [`playlists`]: one page of `/playlists`
//! - [`state`]: `/state`
//! - [`search`]: `/search`
//!
//! ## Usage
//!
//! ```rust
//! use remoteless_parser::services::state::decode_state;
//! ```

pub mod playlists;
pub mod search;
pub mod state;

pub use playlists::decode_playlist_page;
pub use search::decode_search;
pub use state::decode_state;
