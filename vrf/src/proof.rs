//! The ECVRF proof as submitted by the oracle operator.

use alloy_primitives::{Address, U256};
use orochi_types::Point;
use serde::{Deserialize, Serialize};

/// An ECVRF proof together with the witnesses the verifier needs.
///
/// JSON field names follow the operator's publishing format
/// (`uWitness`, `cGammaWitness`, `sHashWitness`, `zInv`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcvrfProof {
    /// `Γ = sk · H`; the output is derived from it.
    pub gamma: Point,
    /// Challenge scalar.
    pub c: U256,
    /// Response scalar.
    pub s: U256,
    /// The seed this proof was produced for.
    pub alpha: U256,
    /// Address of `c · pk + s · G`.
    pub u_witness: Address,
    /// `c · Γ`.
    pub c_gamma_witness: Point,
    /// `s · H`.
    pub s_hash_witness: Point,
    /// Inverse of the projective `z` of `c·Γ + s·H`.
    pub z_inv: U256,
}

impl EcvrfProof {
    /// Every curve point carried by the proof, for on-curve validation.
    pub fn points(&self) -> [&Point; 3] {
        [&self.gamma, &self.c_gamma_witness, &self.s_hash_witness]
    }
}
