//! Decoder for `/search` output.
//!
//! Every row is `kind|group|url|name`. A group index of `0` starts a new
//! song; any other index adds to the song started last.
//!
//! ```text
//! artist|0|spotify:artist:a|Someone
//! track|1|spotify:track:b|Something
//! album|2|spotify:album:c|Somewhere
//! artist|0|spotify:artist:d|Someone else
//! ```

use tracing::trace;

use crate::common::tokenizer::{records, PIPE};
use crate::common::{DecodeOptions, Song};
use crate::error::{DecodeError, DecodeResult};

/// Group index value that opens a new song
pub const GROUP_START: &str = "0";

/// Decode a `/search` body into songs.
///
/// The song still open at the end of the body is only returned when
/// `options.flush_trailing_record` is set.
///
/// # Errors
///
/// * [`DecodeError::MalformedRecord`] for a row without a group index, or an
///   `artist`/`track`/`album` row with fewer than four fields
/// * [`DecodeError::OrphanRecord`] for an `artist`/`track`/`album` row before
///   any row with group index `0`
pub fn decode_search(text: &str, options: DecodeOptions) -> DecodeResult<Vec<Song>> {
    let mut songs = Vec::new();
    let mut current: Option<Song> = None;

    for record in records(text, PIPE) {
        if record.field(1)? == GROUP_START {
            if let Some(song) = current.take() {
                songs.push(song);
            }
            current = Some(Song::default());
        }

        let kind = record.field(0)?;
        if !matches!(kind, "artist" | "track" | "album") {
            trace!(line = record.line(), kind, "ignoring unknown search row");
            continue;
        }

        let info = record.song_info()?;
        let Some(song) = current.as_mut() else {
            return Err(DecodeError::OrphanRecord {
                line: record.line(),
                kind: kind.to_string(),
            });
        };

        match kind {
            "artist" => song.artist = Some(info),
            "track" => song.track = Some(info),
            _ => song.album = Some(info),
        }
    }

    if let Some(song) = current {
        if options.flush_trailing_record {
            songs.push(song);
        } else {
            trace!("dropping trailing open search song");
        }
    }

    Ok(songs)
}
