//! Test helpers: encoders that write typed values back into the daemon's
//! wire format, using the same delimiter rules the decoders read.

#![allow(dead_code)]

use remoteless_parser::{PaginationCursor, Playlist, PlaylistPage, Song, SongInfo, State};

fn row(kind: &str, index: usize, info: &SongInfo) -> String {
    format!("{}|{}|{}|{}\n", kind, index, info.url, info.name)
}

/// Encode a page the way `/playlists` lists it.
///
/// Every song is written as a `track` row followed by an `artist` row, so
/// songs must carry both.
pub fn encode_playlist_page(page: &PlaylistPage) -> String {
    let mut out = String::new();
    for (i, playlist) in page.playlists.iter().enumerate() {
        out.push_str(&format!("playlist|{}|{}|{}\n", i, playlist.url, playlist.name));
        for (j, song) in playlist.songs.iter().enumerate() {
            let track = song.track.as_ref().expect("encoded songs need a track");
            let artist = song.artist.as_ref().expect("encoded songs need an artist");
            out.push_str(&row("track", j, track));
            out.push_str(&row("artist", j, artist));
        }
    }
    out.push_str(&encode_cursor(&page.cursor));
    out
}

pub fn encode_cursor(cursor: &PaginationCursor) -> String {
    format!(
        "from={}\nto={}\nremaining={}\n",
        cursor.from, cursor.to, cursor.remaining
    )
}

/// Encode a state the way `/state` reports it. `cover_id` is not on the wire.
pub fn encode_state(state: &State) -> String {
    let flag = |b: bool| if b { "True" } else { "False" };
    format!(
        "alive={}\nvisible={}\nplaying={}\nactivated={}\nvolume={}\nsongpos={}\ncoverart={}\nartist={}\ntrack={}\n",
        flag(state.alive),
        flag(state.visible),
        flag(state.playing),
        flag(state.activated),
        state.volume,
        state.song_pos,
        flag(state.cover_art),
        state.artist,
        state.track,
    )
}

/// Encode songs the way `/search` lists them: the first row of every song
/// carries group index 0, later rows count up from 1.
pub fn encode_search(songs: &[Song]) -> String {
    let mut out = String::new();
    for song in songs {
        let mut index = 0;
        for (kind, part) in [("artist", &song.artist), ("track", &song.track), ("album", &song.album)] {
            if let Some(info) = part {
                out.push_str(&row(kind, index, info));
                index += 1;
            }
        }
    }
    out
}

pub fn info(name: &str, url: &str) -> SongInfo {
    SongInfo::new(name, url)
}

pub fn song(track: &str, artist: &str) -> Song {
    Song {
        album: None,
        artist: Some(info(artist, &format!("spotify:artist:{}", artist.to_lowercase()))),
        track: Some(info(track, &format!("spotify:track:{}", track.to_lowercase()))),
    }
}

pub fn playlist(name: &str, songs: Vec<Song>) -> Playlist {
    Playlist {
        name: name.to_string(),
        url: format!("spotify:user:me:playlist:{}", name.to_lowercase()),
        songs,
    }
}
