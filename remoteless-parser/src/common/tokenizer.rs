//! Line and field splitting for Remoteless response bodies.
//!
//! Bodies are newline-separated records whose fields are separated by a
//! single delimiter character (`|` or `=`). Empty lines and empty fields are
//! dropped. There is no escaping: a delimiter inside a value cannot be told
//! apart from a field boundary, so such a value splits into extra fields.

use crate::common::model::SongInfo;
use crate::error::{DecodeError, DecodeResult};

/// Field delimiter of playlist and search records
pub const PIPE: char = '|';

/// Field delimiter of state records and pagination markers
pub const EQUALS: char = '=';

/// Split a body into its non-empty lines
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.is_empty())
}

/// Split one line into its non-empty fields
pub fn fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).filter(|field| !field.is_empty()).collect()
}

/// Split a body into lines, then every line into fields
pub fn tokenize(text: &str, delimiter: char) -> Vec<Vec<&str>> {
    lines(text).map(|line| fields(line, delimiter)).collect()
}

/// Iterate the records of a body, numbered from 1
pub fn records(text: &str, delimiter: char) -> impl Iterator<Item = Record<'_>> {
    lines(text)
        .enumerate()
        .map(move |(i, line)| Record::new(i + 1, line, delimiter))
}

/// One tokenized line, with checked field access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    line: usize,
    raw: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Tokenize `raw` on `delimiter`. `line` is the 1-based line number.
    pub fn new(line: usize, raw: &'a str, delimiter: char) -> Self {
        Self {
            line,
            raw,
            fields: fields(raw, delimiter),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`, or [`DecodeError::MalformedRecord`] when the row is too short
    pub fn field(&self, index: usize) -> DecodeResult<&'a str> {
        self.fields
            .get(index)
            .copied()
            .ok_or_else(|| DecodeError::MalformedRecord {
                line: self.line,
                index,
                record: self.raw.to_string(),
            })
    }

    /// Entity reference carried in fields 2 (URL) and 3 (name)
    pub fn song_info(&self) -> DecodeResult<SongInfo> {
        let url = self.field(2)?;
        let name = self.field(3)?;
        Ok(SongInfo::new(name, url))
    }
}
