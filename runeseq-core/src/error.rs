//! Error types for the strict decoding surface
//!
//! The search and split primitives are total and never fail. Only the
//! strict byte tokenizer reports malformed input instead of truncating.

use thiserror::Error;

/// Decoding errors raised by the strict byte tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No code point could be decoded at the given offset
    #[error("malformed encoded input at byte offset {offset}")]
    Malformed {
        /// The byte offset of the first undecodable unit
        offset: usize,
    },
}

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = DecodeError::Malformed { offset: 7 };
        assert_eq!(err.to_string(), "malformed encoded input at byte offset 7");
    }
}
