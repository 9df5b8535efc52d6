//! ECVRF proof verification.

use crate::config::VrfConfig;
use crate::error::VrfError;
use crate::hash_to_curve::hash_to_curve;
use crate::proof::EcvrfProof;
use crate::SCALAR_FROM_CURVE_POINTS_HASH_PREFIX;
use alloy_primitives::{Address, U256};
use orochi_crypto::field::{self, FIELD_SIZE, GROUP_ORDER};
use orochi_crypto::{address_of_point, curve, keccak256};
use orochi_types::{word, Point};
use tracing::debug;

/// `scalar · point == expected`. A zero scalar never verifies.
pub fn ecmul_verify(point: &Point, scalar: U256, expected: &Point) -> bool {
    if scalar.reduce_mod(GROUP_ORDER).is_zero() {
        return false;
    }
    curve::mul(point, scalar).is_some_and(|product| product == *expected)
}

/// `address(c · p + s · G) == witness`. The zero address never verifies.
pub fn verify_linear_combination_with_generator(
    c: U256,
    p: &Point,
    s: U256,
    witness: Address,
) -> bool {
    if witness.is_zero() {
        return false;
    }
    curve::linear_combination_with_generator(c, p, s)
        .is_some_and(|point| address_of_point(&point) == witness)
}

fn projective_sub(x1: U256, z1: U256, x2: U256, z2: U256) -> (U256, U256) {
    let num1 = field::mul(z2, x1);
    let num2 = field::mul(z1, FIELD_SIZE - x2);
    (field::add(num1, num2), field::mul(z1, z2))
}

fn projective_mul(x1: U256, z1: U256, x2: U256, z2: U256) -> (U256, U256) {
    (field::mul(x1, x2), field::mul(z1, z2))
}

/// Sum of two affine points in projective coordinates `(x, y, z)`.
///
/// This is the exact formula the on-chain verifier evaluates, so the `z` it
/// produces is the one whose inverse the prover must supply as `z_inv`. The
/// inputs are assumed distinct; callers check that first.
pub fn projective_ec_add(p: &Point, q: &Point) -> (U256, U256, U256) {
    let one = U256::from(1u8);
    let (px, py, qx, qy) = (p.x, p.y, q.x, q.y);

    let lx = field::add(qy, FIELD_SIZE - py);
    let lz = field::add(qx, FIELD_SIZE - px);

    let (sx, dx) = projective_mul(lx, lz, lx, lz);
    let (sx, dx) = projective_sub(sx, dx, px, one);
    let (mut sx, dx) = projective_sub(sx, dx, qx, one);

    let (sy, dy) = projective_sub(px, one, sx, dx);
    let (sy, dy) = projective_mul(sy, dy, lx, lz);
    let (mut sy, dy) = projective_sub(sy, dy, py, one);

    let sz = if dx != dy {
        sx = field::mul(sx, dy);
        sy = field::mul(sy, dx);
        field::mul(dx, dy)
    } else {
        dx
    };
    (sx, sy, sz)
}

/// `c · p1 + s · p2`, checked against the supplied witnesses.
///
/// Returns `None` if the witness x-coordinates coincide, either scalar
/// multiplication witness is wrong, or `z_inv` is not the inverse of the
/// projective sum's `z`.
pub fn linear_combination(
    c: U256,
    p1: &Point,
    cp1_witness: &Point,
    s: U256,
    p2: &Point,
    sp2_witness: &Point,
    z_inv: U256,
) -> Option<Point> {
    if cp1_witness.x.reduce_mod(FIELD_SIZE) == sp2_witness.x.reduce_mod(FIELD_SIZE) {
        debug!("linear combination witnesses share an x-coordinate");
        return None;
    }
    if !ecmul_verify(p1, c, cp1_witness) {
        debug!("c·gamma witness mismatch");
        return None;
    }
    if !ecmul_verify(p2, s, sp2_witness) {
        debug!("s·hash witness mismatch");
        return None;
    }
    let (x, y, z) = projective_ec_add(cp1_witness, sp2_witness);
    if field::mul(z, z_inv) != U256::from(1u8) {
        debug!("z_inv is not the inverse of z");
        return None;
    }
    Some(Point::new(field::mul(x, z_inv), field::mul(y, z_inv)))
}

/// The challenge hash, reduced mod `n`.
pub fn scalar_from_curve_points(
    hash: &Point,
    public_key: &Point,
    gamma: &Point,
    u_witness: Address,
    v: &Point,
) -> U256 {
    let mut input = Vec::with_capacity(32 + 64 * 4 + 20);
    input.extend_from_slice(&word(U256::from(SCALAR_FROM_CURVE_POINTS_HASH_PREFIX)));
    input.extend_from_slice(&hash.to_bytes());
    input.extend_from_slice(&public_key.to_bytes());
    input.extend_from_slice(&gamma.to_bytes());
    input.extend_from_slice(&v.to_bytes());
    input.extend_from_slice(u_witness.as_slice());
    U256::from_be_bytes(keccak256(&input).0).reduce_mod(GROUP_ORDER)
}

/// The VRF output for a verified `gamma`: the full keccak word of its
/// affine coordinates, as `uint256(keccak256(gamma))` on chain.
pub fn output_from_gamma(gamma: &Point) -> U256 {
    U256::from_be_bytes(keccak256(&gamma.to_bytes()).0)
}

/// Verifies proofs for one oracle public key.
#[derive(Clone, Debug)]
pub struct EcvrfVerifier {
    public_key: Point,
    config: VrfConfig,
}

impl EcvrfVerifier {
    /// Fails with [`VrfError::InvalidCurvePoint`] for an off-curve key.
    pub fn new(public_key: Point, config: VrfConfig) -> Result<Self, VrfError> {
        if !field::is_on_curve(&public_key) {
            debug!(public_key = %public_key, "rejected off-curve public key");
            return Err(VrfError::InvalidCurvePoint);
        }
        Ok(Self { public_key, config })
    }

    pub fn public_key(&self) -> &Point {
        &self.public_key
    }

    pub fn config(&self) -> &VrfConfig {
        &self.config
    }

    pub fn hash_to_curve(&self, alpha: U256) -> Result<Point, VrfError> {
        hash_to_curve(&self.public_key, alpha, self.config.max_hash_to_curve_attempts)
    }

    /// Verify `proof` for the expected `seed` and return the output `y`.
    pub fn verify_proof(&self, proof: &EcvrfProof, seed: U256) -> Result<U256, VrfError> {
        if proof.alpha != seed {
            debug!(alpha = %proof.alpha, seed = %seed, "proof alpha does not match seed");
            return Err(VrfError::InvalidAlphaValue);
        }

        if !field::is_on_curve(&self.public_key)
            || proof.points().iter().any(|point| !field::is_on_curve(point))
        {
            debug!("proof carries an off-curve point");
            return Err(VrfError::InvalidCurvePoint);
        }

        if !field::is_reduced_scalar(proof.c)
            || !field::is_reduced_scalar(proof.s)
            || proof.z_inv >= FIELD_SIZE
        {
            debug!("proof scalar is not reduced");
            return Err(VrfError::ScalarNotReduced);
        }

        if !verify_linear_combination_with_generator(
            proof.c,
            &self.public_key,
            proof.s,
            proof.u_witness,
        ) {
            debug!(u_witness = %proof.u_witness, "address(c·pk + s·G) != u_witness");
            return Err(VrfError::InvalidECVRFProofDigest);
        }

        let hash = self.hash_to_curve(proof.alpha)?;

        let v = linear_combination(
            proof.c,
            &proof.gamma,
            &proof.c_gamma_witness,
            proof.s,
            &hash,
            &proof.s_hash_witness,
            proof.z_inv,
        )
        .ok_or(VrfError::InvalidECVRFProofDigest)?;

        let derived_c =
            scalar_from_curve_points(&hash, &self.public_key, &proof.gamma, proof.u_witness, &v);
        if derived_c != proof.c {
            debug!(c = %proof.c, derived = %derived_c, "challenge mismatch");
            return Err(VrfError::InvalidECVRFProofDigest);
        }

        Ok(output_from_gamma(&proof.gamma))
    }
}
