//! Group operations on secp256k1 points.
//!
//! Points travel through the workspace as EVM words ([`Point`]); this module
//! converts them to `k256` types for scalar multiplication and addition and
//! back. Every scalar is reduced modulo the group order before use.

use crate::field::{self, GROUP_ORDER};
use alloy_primitives::U256;
use k256::elliptic_curve::ff::PrimeField;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar};
use orochi_types::Point;

/// The secp256k1 generator `G`.
pub fn generator() -> Point {
    // The generator always has affine coordinates.
    from_projective(&ProjectivePoint::GENERATOR).unwrap_or_default()
}

/// Convert a word-encoded point into a `k256` point.
///
/// Returns `None` when the coordinates are not on the curve.
pub fn to_projective(point: &Point) -> Option<ProjectivePoint> {
    if !field::is_on_curve(point) {
        return None;
    }
    let x = point.x.to_be_bytes::<32>();
    let y = point.y.to_be_bytes::<32>();
    let encoded =
        EncodedPoint::from_affine_coordinates(FieldBytes::from_slice(&x), FieldBytes::from_slice(&y), false);
    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded)).map(ProjectivePoint::from)
}

/// Convert a `k256` point back to affine words. `None` for the identity.
pub fn from_projective(point: &ProjectivePoint) -> Option<Point> {
    let encoded = point.to_affine().to_encoded_point(false);
    let x = encoded.x()?;
    let y = encoded.y()?;
    Some(Point::new(U256::from_be_slice(x), U256::from_be_slice(y)))
}

/// Reduce a word modulo `n` and convert it to a `k256` scalar.
pub fn to_scalar(value: U256) -> Scalar {
    let reduced = value.reduce_mod(GROUP_ORDER);
    let repr = *FieldBytes::from_slice(&reduced.to_be_bytes::<32>());
    // A value below the group order always has a canonical representation.
    Option::<Scalar>::from(Scalar::from_repr(repr)).unwrap_or(Scalar::ZERO)
}

/// `scalar · point`. `None` if the input is off-curve or the result is the identity.
pub fn mul(point: &Point, scalar: U256) -> Option<Point> {
    let p = to_projective(point)?;
    from_projective(&(p * to_scalar(scalar)))
}

/// `scalar · G`. `None` when the scalar reduces to zero.
pub fn mul_generator(scalar: U256) -> Option<Point> {
    from_projective(&(ProjectivePoint::GENERATOR * to_scalar(scalar)))
}

/// `p + q`. `None` if either input is off-curve or the sum is the identity.
pub fn add(p: &Point, q: &Point) -> Option<Point> {
    let sum = to_projective(p)? + to_projective(q)?;
    from_projective(&sum)
}

/// `c · p + s · G`.
pub fn linear_combination_with_generator(c: U256, p: &Point, s: U256) -> Option<Point> {
    let p = to_projective(p)?;
    let sum = p * to_scalar(c) + ProjectivePoint::GENERATOR * to_scalar(s);
    from_projective(&sum)
}
