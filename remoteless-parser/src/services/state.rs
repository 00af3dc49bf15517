//! Decoder for `/state` output.
//!
//! ```text
//! alive=True
//! visible=False
//! playing=True
//! volume=42
//! songpos=93
//! artist=Someone
//! track=Something
//! ```

use tracing::trace;

use crate::common::tokenizer::{records, Record, EQUALS};
use crate::common::values::{parse_bool, parse_int};
use crate::common::State;
use crate::error::DecodeResult;

/// Decode a `/state` body into a fresh [`State`].
///
/// Keys are case-sensitive. Unknown keys are skipped and keys the body does
/// not mention keep their default. A string value containing `=` is cut at
/// the first `=`.
///
/// # Errors
///
/// * [`crate::DecodeError::MalformedRecord`] when a known key has no value
/// * [`crate::DecodeError::ParseValue`] when a boolean or integer value does not parse
pub fn decode_state(text: &str) -> DecodeResult<State> {
    let mut state = State::default();

    for record in records(text, EQUALS) {
        let Some(&key) = record.fields().first() else {
            continue;
        };

        match key {
            "alive" => state.alive = bool_value(&record, key)?,
            "visible" => state.visible = bool_value(&record, key)?,
            "playing" => state.playing = bool_value(&record, key)?,
            "activated" => state.activated = bool_value(&record, key)?,
            "coverart" => state.cover_art = bool_value(&record, key)?,
            "volume" => state.volume = int_value(&record, key)?,
            "songpos" => state.song_pos = int_value(&record, key)?,
            "artist" => state.artist = record.field(1)?.to_string(),
            "track" => state.track = record.field(1)?.to_string(),
            _ => trace!(line = record.line(), key, "ignoring unknown state key"),
        }
    }

    Ok(state)
}

fn bool_value(record: &Record<'_>, key: &str) -> DecodeResult<bool> {
    parse_bool(record.field(1)?, record.line(), key)
}

fn int_value(record: &Record<'_>, key: &str) -> DecodeResult<i32> {
    parse_int(record.field(1)?, record.line(), key)
}
