//! # Error Types
//!
//! Errors raised by the leaf types. Both are local, synchronous and
//! describe malformed caller input; neither is retryable.

use thiserror::Error;

/// Error during canonical encoding of a proof or public-signal set.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// Non-integer numbers have no stable canonical text form.
    /// Field elements and amounts must be strings or integers.
    #[error("float values are not permitted in canonical encodings; use a string or integer: {0}")]
    FloatRejected(f64),

    /// The value could not be represented as JSON (e.g. non-string map keys).
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// A circuit identifier failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidCircuitId {
    /// The identifier is the empty string.
    #[error("circuit id must not be empty")]
    Empty,

    /// The identifier exceeds the maximum length.
    #[error("circuit id is {len} bytes; maximum is {max}")]
    TooLong {
        /// Length of the rejected identifier in bytes.
        len: usize,
        /// Maximum permitted length in bytes.
        max: usize,
    },

    /// The identifier contains whitespace or a control character.
    #[error("circuit id {id:?} contains forbidden character {ch:?}")]
    ForbiddenCharacter {
        /// The rejected identifier.
        id: String,
        /// The first offending character.
        ch: char,
    },
}
