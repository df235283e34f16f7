//! Error types for bencode encoding and decoding operations.
//!
//! Every variant means the same thing to a caller that only cares whether the
//! operation worked: reject the whole value or input. No variant carries an
//! input offset.

use thiserror::Error;

/// Errors that can occur during bencode encoding or decoding.
#[derive(Error, Debug)]
pub enum BencodeError {
    /// A number could not be represented as a canonical bencode integer
    /// (fractional, NaN, infinite, negative zero, or outside `i64`).
    #[error("not a bencode integer: {0}")]
    NotAnInteger(String),

    /// A value of a type the bencode value model has no production for.
    #[error("unsupported value type: {0}")]
    UnsupportedType(&'static str),

    /// The input string was not valid JSON (JSON encoding path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A production marker or delimiter was expected and something else found.
    #[error("unexpected character: {0:?}")]
    UnexpectedChar(char),

    /// An integer or a text length had no digits.
    #[error("expected at least one digit")]
    MissingDigits,

    /// The digit run of an integer does not fit in `i64`.
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// The declared length of a text does not fit in `usize`.
    #[error("invalid text length: {0}")]
    InvalidLength(String),

    #[error("declared text length {declared} exceeds the {remaining} remaining characters")]
    LengthExceedsInput { declared: usize, remaining: usize },

    #[error("nesting too deep")]
    NestingTooDeep,

    /// Strict mode: leading zeros, `-0`, or a zero-padded length.
    #[error("non-canonical integer: {0}")]
    NonCanonicalInteger(String),

    /// Strict mode: a dictionary key that is not strictly greater than the
    /// previous one (covers duplicates).
    #[error("dictionary key out of order: {0:?}")]
    UnsortedKey(String),

    /// Strict mode: input left over after the top-level value.
    #[error("trailing data after value")]
    TrailingData,
}

/// Convenience alias used throughout bencode-core.
pub type Result<T> = std::result::Result<T, BencodeError>;
