//! Nullable prover: produces ECVRF proofs the way the oracle operator does.
//!
//! Nonces are derived deterministically from the secret key and the input,
//! so the same `(secret, alpha)` always yields the same proof.

use alloy_primitives::U256;
use orochi_crypto::field::{self, GROUP_ORDER};
use orochi_crypto::{address_of_point, curve, keccak256, keypair_from_secret, KeyPair};
use orochi_types::{word, Point};
use orochi_vrf::config::DEFAULT_MAX_HASH_TO_CURVE_ATTEMPTS;
use orochi_vrf::{hash_to_curve, output_from_gamma, projective_ec_add, scalar_from_curve_points, EcvrfProof};

pub struct NullProver {
    key: KeyPair,
}

impl NullProver {
    pub fn new(secret: &[u8; 32]) -> Self {
        Self {
            key: keypair_from_secret(secret).expect("test secret must be a valid scalar"),
        }
    }

    /// A prover whose secret is derived from `label`.
    pub fn from_label(label: &str) -> Self {
        Self::new(&keccak256(label.as_bytes()).0)
    }

    pub fn public_key(&self) -> Point {
        self.key.public
    }

    /// The proof for `alpha`, with every witness the verifier needs.
    pub fn prove(&self, alpha: U256) -> EcvrfProof {
        let pk = self.key.public;
        let sk = self.key.secret_scalar();

        let hash = hash_to_curve(&pk, alpha, DEFAULT_MAX_HASH_TO_CURVE_ATTEMPTS)
            .expect("hash-to-curve succeeds within the default bound");
        let gamma = curve::mul(&hash, sk).expect("sk·H is not the identity");

        let mut nonce_input = word(sk).to_vec();
        nonce_input.extend_from_slice(&word(alpha));
        nonce_input.extend_from_slice(&hash.to_bytes());
        let mut k = U256::from_be_bytes(keccak256(&nonce_input).0).reduce_mod(GROUP_ORDER);
        if k.is_zero() {
            k = U256::from(1u8);
        }

        let u = curve::mul_generator(k).expect("k·G is not the identity");
        let u_witness = address_of_point(&u);
        let v = curve::mul(&hash, k).expect("k·H is not the identity");
        let c = scalar_from_curve_points(&hash, &pk, &gamma, u_witness, &v);
        let s = k.add_mod(GROUP_ORDER - c.mul_mod(sk, GROUP_ORDER), GROUP_ORDER);

        let c_gamma_witness = curve::mul(&gamma, c).expect("c·Γ is not the identity");
        let s_hash_witness = curve::mul(&hash, s).expect("s·H is not the identity");
        let (_, _, z) = projective_ec_add(&c_gamma_witness, &s_hash_witness);
        let z_inv = field::invert(z).expect("projective z is non-zero");

        EcvrfProof {
            gamma,
            c,
            s,
            alpha,
            u_witness,
            c_gamma_witness,
            s_hash_witness,
            z_inv,
        }
    }

    /// The output a verifier derives from a proof for `alpha`.
    pub fn output(&self, alpha: U256) -> U256 {
        output_from_gamma(&self.prove(alpha).gamma)
    }

    /// `count` chained proofs: each alpha is the previous output.
    pub fn prove_chain(&self, genesis_alpha: U256, count: usize) -> Vec<EcvrfProof> {
        let mut proofs = Vec::with_capacity(count);
        let mut alpha = genesis_alpha;
        for _ in 0..count {
            let proof = self.prove(alpha);
            alpha = output_from_gamma(&proof.gamma);
            proofs.push(proof);
        }
        proofs
    }
}
