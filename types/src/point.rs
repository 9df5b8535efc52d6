//! Affine secp256k1 point in EVM word representation.

use crate::error::TypesError;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An affine curve point `(x, y)` as two 256-bit words.
///
/// This type only carries coordinates; whether they satisfy the curve
/// equation is checked by `orochi_crypto::field::is_on_curve`. The all-zero
/// point stands for the point at infinity and is never on the curve.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: U256,
    pub y: U256,
}

impl Point {
    /// SEC1 tag for an uncompressed point.
    pub const UNCOMPRESSED_TAG: u8 = 0x04;

    pub const INFINITY: Self = Self {
        x: U256::ZERO,
        y: U256::ZERO,
    };

    pub fn new(x: U256, y: U256) -> Self {
        Self { x, y }
    }

    /// Decode either `0x04 || x || y` (65 bytes) or `x || y` (64 bytes).
    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self, TypesError> {
        let raw = match bytes.len() {
            65 => {
                if bytes[0] != Self::UNCOMPRESSED_TAG {
                    return Err(TypesError::InvalidPointPrefix(bytes[0]));
                }
                &bytes[1..]
            }
            64 => bytes,
            n => return Err(TypesError::InvalidPointLength(n)),
        };
        Ok(Self {
            x: U256::from_be_slice(&raw[..32]),
            y: U256::from_be_slice(&raw[32..]),
        })
    }

    /// Decode a hex string (with or without `0x`) of either uncompressed form.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(digits).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        Self::from_uncompressed(&bytes)
    }

    /// `0x04 || x || y`.
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[0] = Self::UNCOMPRESSED_TAG;
        out[1..].copy_from_slice(&self.to_bytes());
        out
    }

    /// `x || y`, the layout used when hashing points.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.x.to_be_bytes::<32>());
        out[32..].copy_from_slice(&self.y.to_be_bytes::<32>());
        out
    }

    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:#x}, {:#x})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_uncompressed()))
    }
}
