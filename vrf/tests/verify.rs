use alloy_primitives::{Address, U256};
use orochi_crypto::field::{FIELD_SIZE, GROUP_ORDER};
use orochi_crypto::{curve, field};
use orochi_nullables::NullProver;
use orochi_types::{word, Point};
use orochi_vrf::{EcvrfProof, EcvrfVerifier, VrfConfig, VrfError};

fn setup() -> (NullProver, EcvrfVerifier) {
    let prover = NullProver::from_label("orand-operator");
    let verifier = EcvrfVerifier::new(prover.public_key(), VrfConfig::default()).unwrap();
    (prover, verifier)
}

#[test]
fn honest_proofs_verify() {
    let (prover, verifier) = setup();
    for seed in [0u64, 1, 42, u64::MAX] {
        let alpha = U256::from(seed);
        let proof = prover.prove(alpha);
        let output = verifier.verify_proof(&proof, alpha).unwrap();
        assert_eq!(output, prover.output(alpha));
        assert_eq!(output, orochi_vrf::output_from_gamma(&proof.gamma));
    }
}

#[test]
fn output_is_deterministic_and_input_dependent() {
    let (prover, verifier) = setup();
    let a = verifier.verify_proof(&prover.prove(U256::from(7u8)), U256::from(7u8)).unwrap();
    let b = verifier.verify_proof(&prover.prove(U256::from(7u8)), U256::from(7u8)).unwrap();
    let c = verifier.verify_proof(&prover.prove(U256::from(8u8)), U256::from(8u8)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn seed_mismatch_is_alpha_error() {
    let (prover, verifier) = setup();
    let proof = prover.prove(U256::from(1u8));
    assert_eq!(
        verifier.verify_proof(&proof, U256::from(2u8)),
        Err(VrfError::InvalidAlphaValue)
    );
}

#[test]
fn relabelled_alpha_is_rejected() {
    let (prover, verifier) = setup();
    let mut proof = prover.prove(U256::from(1u8));
    proof.alpha = U256::from(2u8);
    assert_eq!(
        verifier.verify_proof(&proof, U256::from(2u8)),
        Err(VrfError::InvalidECVRFProofDigest)
    );
}

#[test]
fn proof_under_another_key_is_rejected() {
    let (_, verifier) = setup();
    let other = NullProver::from_label("someone-else");
    let proof = other.prove(U256::from(5u8));
    assert_eq!(
        verifier.verify_proof(&proof, U256::from(5u8)),
        Err(VrfError::InvalidECVRFProofDigest)
    );
}

#[test]
fn off_curve_points_are_rejected() {
    let (prover, verifier) = setup();
    let alpha = U256::from(3u8);
    let honest = prover.prove(alpha);

    let bump = |p: Point| Point::new(p.x, field::add(p.y, U256::from(1u8)));
    let cases = [
        EcvrfProof { gamma: bump(honest.gamma), ..honest },
        EcvrfProof { c_gamma_witness: bump(honest.c_gamma_witness), ..honest },
        EcvrfProof { s_hash_witness: bump(honest.s_hash_witness), ..honest },
        EcvrfProof { gamma: Point::INFINITY, ..honest },
    ];
    for proof in cases {
        assert_eq!(verifier.verify_proof(&proof, alpha), Err(VrfError::InvalidCurvePoint));
    }
}

#[test]
fn unreduced_scalars_are_rejected() {
    let (prover, verifier) = setup();
    let alpha = U256::from(4u8);
    let honest = prover.prove(alpha);
    let cases = [
        EcvrfProof { c: GROUP_ORDER, ..honest },
        EcvrfProof { s: U256::MAX, ..honest },
        EcvrfProof { z_inv: FIELD_SIZE, ..honest },
    ];
    for proof in cases {
        assert_eq!(verifier.verify_proof(&proof, alpha), Err(VrfError::ScalarNotReduced));
    }
}

#[test]
fn on_curve_substitutions_fail_the_digest() {
    let (prover, verifier) = setup();
    let alpha = U256::from(5u8);
    let honest = prover.prove(alpha);
    let shifted = |p: Point| curve::add(&p, &curve::generator()).unwrap();
    let one = U256::from(1u8);

    let cases = [
        EcvrfProof { gamma: shifted(honest.gamma), ..honest },
        EcvrfProof { c_gamma_witness: shifted(honest.c_gamma_witness), ..honest },
        EcvrfProof { s_hash_witness: shifted(honest.s_hash_witness), ..honest },
        EcvrfProof { c: honest.c.add_mod(one, GROUP_ORDER), ..honest },
        EcvrfProof { s: honest.s.add_mod(one, GROUP_ORDER), ..honest },
        EcvrfProof { z_inv: field::add(honest.z_inv, one), ..honest },
        EcvrfProof { u_witness: Address::repeat_byte(0x55), ..honest },
        EcvrfProof { u_witness: Address::ZERO, ..honest },
    ];
    for proof in cases {
        assert_eq!(
            verifier.verify_proof(&proof, alpha),
            Err(VrfError::InvalidECVRFProofDigest)
        );
    }
}

#[test]
fn single_byte_mutations_never_verify() {
    let (prover, verifier) = setup();
    let alpha = U256::from(6u8);
    let honest = prover.prove(alpha);

    let flip_word = |w: U256, i: usize| {
        let mut bytes = word(w);
        bytes[i] ^= 0x01;
        U256::from_be_bytes(bytes)
    };
    let flip_point = |p: Point, i: usize| {
        if i < 32 {
            Point::new(flip_word(p.x, i), p.y)
        } else {
            Point::new(p.x, flip_word(p.y, i - 32))
        }
    };

    for i in [0usize, 13, 31] {
        let mut u = honest.u_witness;
        u.0[i % 20] ^= 0x01;
        let mutants = [
            EcvrfProof { c: flip_word(honest.c, i), ..honest },
            EcvrfProof { s: flip_word(honest.s, i), ..honest },
            EcvrfProof { z_inv: flip_word(honest.z_inv, i), ..honest },
            EcvrfProof { u_witness: u, ..honest },
            EcvrfProof { gamma: flip_point(honest.gamma, i), ..honest },
            EcvrfProof { gamma: flip_point(honest.gamma, i + 32), ..honest },
            EcvrfProof { c_gamma_witness: flip_point(honest.c_gamma_witness, i + 32), ..honest },
            EcvrfProof { s_hash_witness: flip_point(honest.s_hash_witness, i), ..honest },
        ];
        for mutant in mutants {
            assert!(verifier.verify_proof(&mutant, alpha).is_err(), "byte {i} mutation verified");
        }
    }
}

#[test]
fn verifier_hash_matches_free_function() {
    let (prover, verifier) = setup();
    let alpha = U256::from(77u8);
    let h = verifier.hash_to_curve(alpha).unwrap();
    assert_eq!(h, orochi_vrf::hash_to_curve(&prover.public_key(), alpha, 256).unwrap());
    assert!(field::is_on_curve(&h));
}

#[test]
fn proof_json_round_trips_into_verification() {
    let (prover, verifier) = setup();
    let alpha = U256::from(9u8);
    let json = serde_json::to_string(&prover.prove(alpha)).unwrap();
    let proof: EcvrfProof = serde_json::from_str(&json).unwrap();
    assert!(verifier.verify_proof(&proof, alpha).is_ok());
}
