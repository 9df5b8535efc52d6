//! Decoding errors for the shared types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid point encoding: expected 64 or 65 bytes, got {0}")]
    InvalidPointLength(usize),

    #[error("invalid point prefix 0x{0:02x}, expected 0x04")]
    InvalidPointPrefix(u8),

    #[error("invalid 256-bit word: {0}")]
    InvalidWord(String),
}
