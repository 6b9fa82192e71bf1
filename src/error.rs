//! Error types for payment file processing.

use std::fmt;
use thiserror::Error;

/// Result type alias for processing operations
pub type Result<T> = std::result::Result<T, ProcessError>;

/// The kind of record a line represents, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// First line of a file, carrying file-level metadata
    Opening,
    /// One line per payment
    Payment,
    /// Last line (Inbetalningstjansten only), restating totals
    Closing,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Opening => write!(f, "opening post"),
            RecordKind::Payment => write!(f, "payment post"),
            RecordKind::Closing => write!(f, "closing post"),
        }
    }
}

/// Errors that can occur while validating and parsing a payment file.
///
/// The first violation aborts the whole file; no errors are aggregated and
/// nothing is emitted to the receiver for a failing file.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file has fewer lines than the format's record layout requires
    #[error("input file must contain at least {min} lines, found {actual}")]
    LineCount { min: usize, actual: usize },

    /// A line does not have the exact length mandated by its record type
    #[error("{record} on line {line} has an invalid length: {actual} (expected {expected})")]
    LineLength {
        record: RecordKind,
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A field does not match its positional pattern
    #[error("{record} has invalid {field} syntax at column {offset}: {found:?}")]
    Syntax {
        record: RecordKind,
        field: &'static str,
        offset: usize,
        found: String,
    },

    /// Cross-record consistency check failed; `offset` points at the
    /// authoritative declared field
    #[error("{message} (column {offset})")]
    Semantic { offset: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: payment-files <file>...")]
    MissingArgument,
}
