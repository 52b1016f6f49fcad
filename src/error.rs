//! Unified error types for playpack.
//!
//! This module provides a single [`PlaypackError`] enum that covers all error
//! cases in the library, from hard ingestion failures to the file and
//! argument errors raised by the CLI layer.
//!
//! # Tolerated vs. fatal records
//!
//! Records that are merely incomplete (a missing track name, a null
//! timestamp) are never errors: ingestion counts them as rejected and moves
//! on. Only records whose fields are present but malformed produce
//! [`PlaypackError::InvalidTimestamp`] or [`PlaypackError::InvalidDuration`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for playpack operations.
///
/// # Example
///
/// ```rust
/// use playpack::error::Result;
/// use playpack::PlayEvent;
///
/// fn my_function() -> Result<Vec<PlayEvent>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, PlaypackError>;

/// The error type for all playpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlaypackError {
    /// An I/O error occurred outside of input loading (e.g. writing output).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input file given on the command line does not exist.
    #[error("{} does not exist", path.display())]
    FileNotFound {
        /// Position of the file in the input list
        index: usize,
        /// The missing path
        path: PathBuf,
    },

    /// An input file exists but could not be read or parsed as JSON.
    #[error("{} - '{source}'", path.display())]
    Read {
        /// Position of the file in the input list
        index: usize,
        /// The file that failed
        path: PathBuf,
        /// The underlying read or parse error
        #[source]
        source: ReadErrorKind,
    },

    /// A record carries a `ts` value that is not a valid date-time.
    #[error("Invalid timestamp '{input}' in batch {batch}, record {record}: {reason}")]
    InvalidTimestamp {
        /// The raw timestamp string
        input: String,
        /// Index of the batch within the ingest call
        batch: usize,
        /// Index of the record within its batch
        record: usize,
        /// Why parsing failed
        reason: String,
    },

    /// A record carries an `ms_played` value that is not a non-negative integer.
    #[error("Invalid duration '{input}' in batch {batch}, record {record}: expected a non-negative integer")]
    InvalidDuration {
        /// The raw duration value, rendered as JSON
        input: String,
        /// Index of the batch within the ingest call
        batch: usize,
        /// Index of the record within its batch
        record: usize,
    },

    /// The input does not have the expected overall structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in a filter bound.
    ///
    /// Date bounds expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown export format name.
    #[error("Unknown format: '{input}'. Expected one of: {expected}")]
    UnknownFormat {
        /// The format name that was provided
        input: String,
        /// Comma-separated list of known names
        expected: String,
    },

    /// A run configuration is unusable.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Kinds of errors raised while loading an input file.
#[derive(Debug, Error)]
pub enum ReadErrorKind {
    /// The file could not be read
    #[error("{0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl PlaypackError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        PlaypackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        PlaypackError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PlaypackError::InvalidArgument(message.into())
    }

    /// Creates a read error for the input file at `index`.
    pub fn read(index: usize, path: impl Into<PathBuf>, source: impl Into<ReadErrorKind>) -> Self {
        PlaypackError::Read {
            index,
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns `true` if this error aborted an ingest call.
    pub fn is_ingest(&self) -> bool {
        matches!(
            self,
            PlaypackError::InvalidTimestamp { .. }
                | PlaypackError::InvalidDuration { .. }
                | PlaypackError::InvalidFormat { .. }
        )
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, PlaypackError::InvalidDate { .. })
    }

    /// Process exit code for this error.
    ///
    /// | Code | Meaning |
    /// |------|---------|
    /// | 1 | invalid argument, date or format, including command-line usage errors |
    /// | 2X | input file X does not exist (first file is 20) |
    /// | 3X | input file X could not be read |
    /// | 4 | error while processing the history |
    /// | -1 | anything else |
    pub fn exit_code(&self) -> i32 {
        match self {
            PlaypackError::InvalidArgument(_)
            | PlaypackError::InvalidDate { .. }
            | PlaypackError::UnknownFormat { .. } => 1,
            PlaypackError::FileNotFound { index, .. } => indexed_code(2, *index),
            PlaypackError::Read { index, .. } => indexed_code(3, *index),
            PlaypackError::InvalidTimestamp { .. }
            | PlaypackError::InvalidDuration { .. }
            | PlaypackError::InvalidFormat { .. } => 4,
            PlaypackError::Io(_) | PlaypackError::Json(_) => -1,
        }
    }
}

/// Prepends `prefix` as a decimal digit to `index`: `(2, 0)` is 20, `(3, 11)` is 311.
fn indexed_code(prefix: i32, index: usize) -> i32 {
    format!("{prefix}{index}").parse().unwrap_or(-1)
}

// ============================================================================
// Tests
// ============================================================================
