//! Decoder for one page of `/playlists` output.
//!
//! A page is a stream of pipe-delimited records plus `key=value` pagination
//! markers:
//!
//! ```text
//! playlist|0|spotify:user:me:playlist:1|Road trip
//! track|0|spotify:track:aaa|First song
//! artist|0|spotify:artist:bbb|First artist
//! track|1|spotify:track:ccc|Second song
//! artist|1|spotify:artist:ddd|Second artist
//! from=0
//! to=20
//! remaining=5
//! ```
//!
//! A `track` record opens a song, the following `artist` record completes it
//! and appends it to the open playlist. A playlist is committed when the next
//! `playlist` record arrives, and only if it has a name and at least one song.
//! Following pages is the caller's job; see [`PaginationCursor::has_more`].

use std::mem;

use tracing::trace;

use crate::common::tokenizer::{lines, Record, EQUALS, PIPE};
use crate::common::values::parse_int;
use crate::common::{DecodeOptions, PaginationCursor, Playlist, PlaylistPage, Song};
use crate::error::{DecodeError, DecodeResult};

/// Pagination marker keys, matched case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    From,
    To,
    Remaining,
}

impl Marker {
    fn parse(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("from") {
            Some(Marker::From)
        } else if key.eq_ignore_ascii_case("to") {
            Some(Marker::To)
        } else if key.eq_ignore_ascii_case("remaining") {
            Some(Marker::Remaining)
        } else {
            None
        }
    }

    fn key(self) -> &'static str {
        match self {
            Marker::From => "from",
            Marker::To => "to",
            Marker::Remaining => "remaining",
        }
    }
}

/// Playlist assembly state
#[derive(Debug, Default)]
enum Assembly {
    #[default]
    NoPlaylist,
    AccumulatingPlaylist { playlist: Playlist },
}

/// Accumulators for a single page decode
#[derive(Debug, Default)]
struct PageDecoder {
    assembly: Assembly,
    /// Always present; survives playlist boundaries until the next `track`
    song: Song,
    committed: Vec<Playlist>,
    cursor: PaginationCursor,
}

impl PageDecoder {
    fn feed(&mut self, line: usize, raw: &str) -> DecodeResult<()> {
        let meta = Record::new(line, raw, EQUALS);
        if let Some(marker) = meta.fields().first().and_then(|key| Marker::parse(key)) {
            return self.set_marker(marker, &meta);
        }

        let record = Record::new(line, raw, PIPE);
        let kind = record.field(0)?.to_lowercase();

        match kind.as_str() {
            "playlist" => {
                let info = record.song_info()?;
                if let Assembly::AccumulatingPlaylist { playlist } = mem::take(&mut self.assembly) {
                    self.commit(playlist);
                }
                self.assembly = Assembly::AccumulatingPlaylist {
                    playlist: Playlist::new(info.name, info.url),
                };
            }
            "track" => {
                self.song = Song {
                    track: Some(record.song_info()?),
                    ..Song::default()
                };
            }
            "artist" => {
                self.song.artist = Some(record.song_info()?);
                match &mut self.assembly {
                    Assembly::AccumulatingPlaylist { playlist } => playlist.songs.push(self.song.clone()),
                    Assembly::NoPlaylist => {
                        return Err(DecodeError::OrphanRecord {
                            line,
                            kind: "artist".to_string(),
                        });
                    }
                }
            }
            other => match Marker::parse(other) {
                Some(marker) => self.set_marker(marker, &record)?,
                None => trace!(line, kind = other, "ignoring unknown playlist record"),
            },
        }

        Ok(())
    }

    fn set_marker(&mut self, marker: Marker, record: &Record<'_>) -> DecodeResult<()> {
        let value = parse_int(record.field(1)?, record.line(), marker.key())?;
        match marker {
            Marker::From => self.cursor.from = value,
            Marker::To => self.cursor.to = value,
            Marker::Remaining => self.cursor.remaining = value,
        }
        Ok(())
    }

    fn commit(&mut self, playlist: Playlist) {
        if playlist.is_committable() {
            self.committed.push(playlist);
        } else {
            trace!(name = %playlist.name, "discarding playlist without songs");
        }
    }

    fn finish(mut self, options: DecodeOptions) -> PlaylistPage {
        if let Assembly::AccumulatingPlaylist { playlist } = mem::take(&mut self.assembly) {
            if options.flush_trailing_record {
                self.commit(playlist);
            } else {
                trace!(name = %playlist.name, "dropping trailing open playlist");
            }
        }

        PlaylistPage {
            playlists: self.committed,
            cursor: self.cursor,
        }
    }
}

/// Decode one page of `/playlists` output.
///
/// # Errors
///
/// * [`DecodeError::MalformedRecord`] for a `playlist`, `track` or `artist`
///   record with fewer than four fields, or a marker without a value
/// * [`DecodeError::OrphanRecord`] for an `artist` record before any `playlist`
/// * [`DecodeError::ParseValue`] for a non-integer marker value
pub fn decode_playlist_page(text: &str, options: DecodeOptions) -> DecodeResult<PlaylistPage> {
    let mut decoder = PageDecoder::default();
    for (i, raw) in lines(text).enumerate() {
        decoder.feed(i + 1, raw)?;
    }
    Ok(decoder.finish(options))
}
