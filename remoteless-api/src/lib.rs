//! Blocking client for the Remoteless daemon
//!
//! Remoteless exposes a desktop music player over a small plain-text HTTP
//! interface. This crate fetches its playlists, player state and search
//! results as typed values (decoded by `remoteless-parser`) and sends player
//! actions. It uses the private `text-client` crate for the HTTP requests.
//!
//! ```rust,no_run
//! use remoteless_api::{ClientConfig, RemotelessClient};
//!
//! let config = ClientConfig::from_env().with_flush_trailing_record(true);
//! let client = RemotelessClient::with_config(config)?;
//!
//! for song in client.search("daft punk")? {
//!     if let Some(track) = song.track {
//!         println!("{} ({})", track.name, track.url);
//!     }
//! }
//! client.set_volume(40)?;
//! # Ok::<(), remoteless_api::ApiError>(())
//! ```
//!
//! # Trailing records
//!
//! The daemon's reference client drops the last playlist of every page and
//! the last song of a search result, because it only commits a record when
//! the next one starts. This client does the same unless
//! [`ClientConfig::flush_trailing_record`] is set.

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod transport;

pub use client::RemotelessClient;
pub use command::Command;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use transport::Transport;

pub use remoteless_parser::{PaginationCursor, Playlist, PlaylistPage, Song, SongInfo, State};
pub use text_client::TransportError;
