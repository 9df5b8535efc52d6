use alloy_primitives::{Address, U256};
use orochi_nullables::NullProver;
use orochi_vrf::{EcvrfVerifier, EpochChain, VrfConfig, VrfError};

fn chain(prover: &NullProver) -> EpochChain {
    EpochChain::new(EcvrfVerifier::new(prover.public_key(), VrfConfig::default()).unwrap())
}

#[test]
fn chained_epochs_publish_in_order() {
    let prover = NullProver::from_label("orand-operator");
    let mut chain = chain(&prover);
    let receiver = Address::repeat_byte(0x10);

    let proofs = prover.prove_chain(U256::from(1234u64), 4);
    for (i, proof) in proofs.iter().enumerate() {
        let record = chain.publish(receiver, proof).unwrap();
        assert_eq!(record.epoch, i as u64);
        assert_eq!(record.alpha, proof.alpha);
    }
    assert_eq!(chain.epoch_count(&receiver), 4);

    let last = chain.current_epoch(&receiver).unwrap();
    assert_eq!(last.epoch, 3);
    assert_eq!(chain.expected_alpha(&receiver), Some(last.output));
    for pair in chain.epochs(&receiver).windows(2) {
        assert_eq!(pair[1].alpha, pair[0].output);
    }
}

#[test]
fn unchained_proof_is_rejected_without_side_effects() {
    let prover = NullProver::from_label("orand-operator");
    let mut chain = chain(&prover);
    let receiver = Address::repeat_byte(0x11);

    chain.publish(receiver, &prover.prove(U256::from(1u8))).unwrap();
    let stray = prover.prove(U256::from(2u8));
    assert_eq!(chain.publish(receiver, &stray), Err(VrfError::InvalidAlphaValue));
    assert_eq!(chain.epoch_count(&receiver), 1);
}

#[test]
fn pinned_genesis_must_match() {
    let prover = NullProver::from_label("orand-operator");
    let mut chain = chain(&prover);
    let receiver = Address::repeat_byte(0x12);

    chain.seed_genesis(receiver, U256::from(100u8)).unwrap();
    assert_eq!(
        chain.publish(receiver, &prover.prove(U256::from(99u8))),
        Err(VrfError::InvalidAlphaValue)
    );
    chain.publish(receiver, &prover.prove(U256::from(100u8))).unwrap();
    assert_eq!(
        chain.seed_genesis(receiver, U256::from(1u8)),
        Err(VrfError::GenesisAlreadySeeded)
    );
}

#[test]
fn receivers_are_independent() {
    let prover = NullProver::from_label("orand-operator");
    let mut chain = chain(&prover);
    let (a, b) = (Address::repeat_byte(0x01), Address::repeat_byte(0x02));

    chain.publish(a, &prover.prove(U256::from(1u8))).unwrap();
    chain.publish(b, &prover.prove(U256::from(2u8))).unwrap();
    assert_eq!(chain.epoch_count(&a), 1);
    assert_eq!(chain.epoch_count(&b), 1);
    assert_ne!(
        chain.current_epoch(&a).unwrap().output,
        chain.current_epoch(&b).unwrap().output
    );
}

#[test]
fn forged_epoch_is_not_recorded() {
    let prover = NullProver::from_label("orand-operator");
    let mut chain = chain(&prover);
    let receiver = Address::repeat_byte(0x13);

    let mut proof = prover.prove(U256::from(1u8));
    proof.s = proof.s.add_mod(U256::from(1u8), orochi_crypto::GROUP_ORDER);
    assert!(chain.publish(receiver, &proof).is_err());
    assert!(chain.current_epoch(&receiver).is_none());
}
