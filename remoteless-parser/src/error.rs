//! Error types for decoding operations

use std::fmt;
use thiserror::Error;

/// The type a field value was expected to parse as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Integer,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "boolean"),
            ValueKind::Integer => write!(f, "integer"),
        }
    }
}

/// Errors that can occur while decoding a response body
///
/// Line numbers are 1-based and count only non-empty lines, matching the
/// record numbering of [`crate::common::tokenizer::records`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A record has fewer fields than its kind requires
    #[error("Malformed record on line {line}: no field at index {index} in {record:?}")]
    MalformedRecord {
        line: usize,
        index: usize,
        record: String,
    },

    /// A record arrived while no accumulator was open to receive it
    #[error("Orphan '{kind}' record on line {line}: nothing open to attach it to")]
    OrphanRecord { line: usize, kind: String },

    /// A field value could not be parsed as its declared type
    #[error("Invalid {expected} value {value:?} for '{key}' on line {line}")]
    ParseValue {
        line: usize,
        key: String,
        value: String,
        expected: ValueKind,
    },
}

/// Result type alias for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DecodeError::MalformedRecord {
            line: 3,
            index: 3,
            record: "track|1|url".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Malformed record on line 3: no field at index 3 in \"track|1|url\""
        );

        let err = DecodeError::ParseValue {
            line: 1,
            key: "alive".to_string(),
            value: "maybe".to_string(),
            expected: ValueKind::Bool,
        };
        assert_eq!(format!("{}", err), "Invalid boolean value \"maybe\" for 'alive' on line 1");

        let err = DecodeError::OrphanRecord {
            line: 1,
            kind: "artist".to_string(),
        };
        assert!(format!("{}", err).contains("Orphan 'artist'"));
    }
}
