//! Positional field validation.
//!
//! Both record formats are fixed-width: every field is a half-open column
//! range checked against a character-class pattern before any value is
//! interpreted. Columns are counted in characters, not bytes, so the accented
//! letters allowed in reference fields occupy exactly one column, matching
//! their single-byte Latin-1 encoding.
//!
//! The patterns mirror the bank specifications. `Regex::is_match` searches for
//! a match anywhere in the haystack, so every pattern is anchored.

use crate::error::{ProcessError, RecordKind, Result};
use regex::Regex;
use std::sync::LazyLock;

// Safety: all patterns below are literals known to compile
fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("valid pattern")
}

/// Uppercase letters (including ÅÄÖ) and digits, blank-padded on the right.
pub(crate) static STRING_FIELD: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-ZÅÄÖ0-9]*\s*$"));

/// Digits, blank-padded on the left.
pub(crate) static INTEGER_FIELD: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*\d+$"));

/// Digits with an optional comma decimal part, blank-padded on the left.
pub(crate) static DECIMAL_FIELD: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\s*\d+(,\d+)?$"));

/// Exactly eight digits (yyyymmdd, calendar validity checked semantically).
pub(crate) static DATE_FIELD: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\d{8}$"));

/// Two whitespace-separated digit groups, blank-padded on the right.
pub(crate) static ACCOUNT_FIELD: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\d+\s\d+\s*$"));

/// Digits filling the whole field.
pub(crate) static NUMBER_FIELD: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\d+$"));

/// Checks one positional field of a line against a pattern.
///
/// On violation, returns a syntax error carrying the record kind, the field's
/// start column and the offending substring. Pure check: never constructs
/// domain values.
pub fn validate(
    line: &str,
    record: RecordKind,
    start: usize,
    end: usize,
    pattern: &Regex,
    field: &'static str,
) -> Result<()> {
    let value = columns(line, start, end);

    if !pattern.is_match(value) {
        return Err(ProcessError::Syntax {
            record,
            field,
            offset: start,
            found: value.to_string(),
        });
    }

    Ok(())
}

/// Checks that a positional field holds an exact literal, reporting the same
/// syntax error shape as [`validate`]. Used for the record type columns.
pub fn validate_literal(
    line: &str,
    record: RecordKind,
    start: usize,
    end: usize,
    expected: &str,
    field: &'static str,
) -> Result<()> {
    let value = columns(line, start, end);

    if value != expected {
        return Err(ProcessError::Syntax {
            record,
            field,
            offset: start,
            found: value.to_string(),
        });
    }

    Ok(())
}

/// Extracts the half-open character range `start..end` of a line.
///
/// Callers must have verified the line length first; an out-of-range end is
/// clamped rather than panicking.
pub fn columns(line: &str, start: usize, end: usize) -> &str {
    &line[byte_offset(line, start)..byte_offset(line, end)]
}

/// Number of character columns in a line.
pub fn width(line: &str) -> usize {
    line.chars().count()
}

fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}
