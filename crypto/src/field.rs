//! secp256k1 base-field arithmetic on EVM words.
//!
//! These mirror the `addmod`/`mulmod` arithmetic the on-chain verifier
//! performs, so intermediate values (hash-to-curve candidates, projective
//! coordinates) come out bit-identical to the contract's.

use alloy_primitives::U256;
use orochi_types::Point;

/// The secp256k1 field prime `p = 2^256 - 2^32 - 977`.
pub const FIELD_SIZE: U256 = U256::from_limbs([
    0xFFFF_FFFE_FFFF_FC2F,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
]);

/// The order `n` of the secp256k1 group.
pub const GROUP_ORDER: U256 = U256::from_limbs([
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
]);

/// Curve constant `b` in `y^2 = x^3 + b`.
const CURVE_B: U256 = U256::from_limbs([7, 0, 0, 0]);

pub fn add(a: U256, b: U256) -> U256 {
    a.add_mod(b, FIELD_SIZE)
}

/// `a - b mod p`, computed as `a + (p - b)` like the contract does.
pub fn sub(a: U256, b: U256) -> U256 {
    a.add_mod(FIELD_SIZE - b.reduce_mod(FIELD_SIZE), FIELD_SIZE)
}

pub fn mul(a: U256, b: U256) -> U256 {
    a.mul_mod(b, FIELD_SIZE)
}

/// Multiplicative inverse, `None` for zero.
pub fn invert(a: U256) -> Option<U256> {
    a.inv_mod(FIELD_SIZE)
}

/// `x^3 + 7 mod p`.
pub fn y_squared(x: U256) -> U256 {
    add(mul(mul(x, x), x), CURVE_B)
}

/// Square root candidate `a^((p + 1) / 4) mod p`.
///
/// Valid because `p ≡ 3 (mod 4)`; the result is only a true root when `a`
/// is a quadratic residue, which callers check via [`is_on_curve`].
pub fn sqrt(a: U256) -> U256 {
    let exponent = (FIELD_SIZE + U256::from(1u8)) >> 2;
    a.pow_mod(exponent, FIELD_SIZE)
}

/// Whether `point` satisfies the curve equation with canonical coordinates.
///
/// The point at infinity `(0, 0)` never does.
pub fn is_on_curve(point: &Point) -> bool {
    if point.x >= FIELD_SIZE || point.y >= FIELD_SIZE {
        return false;
    }
    y_squared(point.x) == mul(point.y, point.y)
}

/// Whether `scalar` is a canonical scalar (`< n`).
pub fn is_reduced_scalar(scalar: U256) -> bool {
    scalar < GROUP_ORDER
}
