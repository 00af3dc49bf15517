//! Scalar field parsing.

use crate::error::{DecodeError, DecodeResult, ValueKind};

/// Parse a boolean field. Only `true` and `false` are accepted, in any case.
pub fn parse_bool(value: &str, line: usize, key: &str) -> DecodeResult<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(invalid(value, line, key, ValueKind::Bool))
    }
}

/// Parse a signed 32-bit integer field, tolerating surrounding whitespace.
pub fn parse_int(value: &str, line: usize, key: &str) -> DecodeResult<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid(value, line, key, ValueKind::Integer))
}

fn invalid(value: &str, line: usize, key: &str, expected: ValueKind) -> DecodeError {
    DecodeError::ParseValue {
        line,
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}
