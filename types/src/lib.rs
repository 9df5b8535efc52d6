//! Fundamental types for the Orochi verification core.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! EVM word types, affine curve points, and timestamps.

pub mod error;
pub mod point;
pub mod time;

pub use alloy_primitives::{Address, B256, U256};
pub use error::TypesError;
pub use point::Point;
pub use time::Timestamp;

/// Encode a `U256` as a 32-byte big-endian word.
pub fn word(value: U256) -> [u8; 32] {
    value.to_be_bytes::<32>()
}

/// Parse a `U256` from a `0x`-prefixed hex string or a decimal string.
pub fn parse_word(s: &str) -> Result<U256, TypesError> {
    s.trim()
        .parse::<U256>()
        .map_err(|e| TypesError::InvalidWord(format!("{s}: {e}")))
}
