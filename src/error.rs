//! Error types for float-decode.
use thiserror::Error;

/// Errors that can occur while decoding a packed bit pattern.
///
/// Every failure is terminal for the decode call that produced it;
/// the pipeline never yields a partial value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input does not supply the expected number of bits.
    #[error("expected {expected} bits, received {found}")]
    InvalidLength { expected: usize, found: usize },

    /// A character other than '0' or '1' appeared in the input.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },
}
