//! Error types for case table loading

use thiserror::Error;

/// Errors raised while building or loading a [`SpecialCase`](crate::SpecialCase)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// Case table could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Case table file could not be read
    #[error("Failed to read case table {path}: {reason}")]
    Io {
        /// The file that was being read
        path: String,
        /// The underlying I/O failure
        reason: String,
    },

    /// A range whose lower bound exceeds its upper bound
    #[error("Invalid case range {lo:?}..={hi:?}: lower bound exceeds upper bound")]
    InvertedRange {
        /// Lower bound of the offending range
        lo: char,
        /// Upper bound of the offending range
        hi: char,
    },

    /// Ranges must be sorted by lower bound and must not overlap
    #[error("Case range starting at {lo:?} is out of order or overlaps its predecessor")]
    UnorderedRanges {
        /// Lower bound of the offending range
        lo: char,
    },

    /// No embedded table with this code
    #[error("Unknown case table: {0}")]
    UnknownTable(String),
}

/// Result type for case table operations
pub type Result<T> = std::result::Result<T, CaseError>;
