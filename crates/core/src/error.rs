//! Error types for the positional-index codec.
//!
//! All operations return structured errors rather than panicking.
//! Decoding and verification never fail given a well-formed table, so the
//! taxonomy is centred on encoding.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Encode: input validation failures while building an encoding table
/// - Config: bad driver configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Encoding failed (unsupported character, limit violation)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Encoding errors.
///
/// Every variant names the offending value so callers can report exactly
/// what was rejected. No partial table is ever returned alongside an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Input contains a character outside the 128-value ASCII alphabet.
    ///
    /// `position` is the 1-based index of the offending character.
    #[error("unsupported character {character:?} at position {position} (ASCII only)")]
    UnsupportedCharacter { character: char, position: usize },

    /// Input exceeds the configured maximum length
    #[error("input length {length} exceeds maximum {max}")]
    InputTooLong { length: usize, max: usize },

    /// Input contains more distinct characters than the table may hold
    #[error("distinct character count {count} exceeds maximum {max}")]
    TooManyDistinctCharacters { count: usize, max: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
