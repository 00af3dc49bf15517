//! Typed values decoded from Remoteless responses

use serde::{Deserialize, Serialize};

/// Reference to an artist, track or album on the streaming service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct SongInfo {
    /// Display name
    pub name: String,
    /// Service URI, e.g. `spotify:track:...`
    pub url: String,
}

impl SongInfo {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A song assembled from consecutive records.
///
/// Any part the response never mentioned stays `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Song {
    #[serde(default)]
    pub album: Option<SongInfo>,
    #[serde(default)]
    pub artist: Option<SongInfo>,
    #[serde(default)]
    pub track: Option<SongInfo>,
}

/// A playlist with its songs in the order the daemon listed them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Playlist {
    pub name: String,
    pub url: String,
    pub songs: Vec<Song>,
}

impl Playlist {
    /// An empty playlist, as opened by a `playlist` record
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            songs: Vec::new(),
        }
    }

    /// Whether this playlist is kept when decoding moves past it
    pub fn is_committable(&self) -> bool {
        !self.name.is_empty() && !self.songs.is_empty()
    }
}

/// Player status as reported by `/state`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub alive: bool,
    pub visible: bool,
    pub playing: bool,
    pub activated: bool,
    pub volume: i32,
    pub song_pos: i32,
    pub cover_art: bool,
    /// Reserved; the daemon does not report it yet.
    pub cover_id: i32,
    pub artist: String,
    pub track: String,
}

/// Offset window reported at the end of a playlist page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PaginationCursor {
    pub from: i32,
    pub to: i32,
    pub remaining: i32,
}

impl PaginationCursor {
    /// More playlists remain and the server made forward progress.
    ///
    /// A page reporting `to == from` never continues, whatever `remaining`
    /// says, so a stalled server cannot keep the listing looping.
    pub fn has_more(&self) -> bool {
        self.remaining > 0 && self.to != self.from
    }
}

/// The committed playlists of one page plus its pagination markers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PlaylistPage {
    pub playlists: Vec<Playlist>,
    pub cursor: PaginationCursor,
}
