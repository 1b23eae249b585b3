//! Error types for playlist persistence

use thiserror::Error;

/// Errors raised while reading or writing playlist files.
///
/// Index and lookup misses are not errors; those operations report a
/// no-op through their return value instead.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Opening, reading or writing the sink/source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited text could not be tokenised
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record's duration field is not a number
    #[error("Invalid duration {value:?} in record {record}")]
    InvalidDuration {
        /// 1-based record number within the source
        record: u64,
        /// The field text as read
        value: String,
    },
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
