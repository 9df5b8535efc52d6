//! ECVRF verification for the Orand randomness oracle.
//!
//! Proofs are produced off-chain by the oracle operator, one per epoch, and
//! verified here exactly as the on-chain verifier does:
//! - **hash-to-curve** by try-and-increment over Keccak-256
//! - **witness checks** for `c·Γ`, `s·H` and `c·pk + s·G`
//! - **z-inverse** check on the projective sum
//! - **challenge** recomputation and output derivation
//!
//! [`EpochChain`] layers the chaining rule on top: every epoch's seed is the
//! previous epoch's output.

pub mod config;
pub mod epoch;
pub mod error;
pub mod hash_to_curve;
pub mod proof;
pub mod verifier;

pub use config::VrfConfig;
pub use epoch::{EpochChain, EpochRecord};
pub use error::VrfError;
pub use hash_to_curve::hash_to_curve;
pub use proof::EcvrfProof;
pub use verifier::{
    ecmul_verify, linear_combination, output_from_gamma, projective_ec_add,
    scalar_from_curve_points, verify_linear_combination_with_generator, EcvrfVerifier,
};

/// Domain-separation prefix for hash-to-curve inputs.
pub const HASH_TO_CURVE_HASH_PREFIX: u8 = 1;

/// Domain-separation prefix for the challenge hash.
pub const SCALAR_FROM_CURVE_POINTS_HASH_PREFIX: u8 = 2;
