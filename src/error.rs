//! Error types for gbkit

use thiserror::Error;

/// Result type alias for gbkit operations
pub type Result<T> = std::result::Result<T, GbkitError>;

/// Error types that can occur while reading or parsing a GenBank file
///
/// File-level I/O failures ([`Io`](GbkitError::Io)) are distinct from
/// structural parse failures; all structural variants carry the 1-based line
/// number of the offending line so a host application can report exactly
/// which line or field failed.
#[derive(Debug, Error)]
pub enum GbkitError {
    /// I/O error (input path missing or unreadable)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// LOCUS line has fewer tokens than its arity requires
    #[error("Malformed LOCUS line at line {line}: {msg}")]
    MalformedLocus {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// A line ended before a column the classifier needed to inspect
    #[error("Line {line} is {length} characters long, too short to inspect column {column}")]
    TruncatedLine {
        /// Line number where error occurred
        line: usize,
        /// Zero-based column offset that was inspected
        column: usize,
        /// Actual line length in bytes
        length: usize,
    },

    /// REFERENCE header lacks the expected tokens or has non-numeric bounds
    #[error("Malformed REFERENCE header at line {line}: {msg}")]
    MalformedReferenceHeader {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// Parse was interrupted through a [`CancelToken`](crate::CancelToken)
    #[error("Parse cancelled")]
    Cancelled,
}
