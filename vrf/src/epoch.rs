//! Epoch chaining for the randomness oracle.
//!
//! Every receiver owns a sequence of epochs. Epoch 0 is the genesis epoch and
//! takes an externally supplied alpha; epoch N > 0 must be proven over the
//! output of epoch N-1.

use crate::error::VrfError;
use crate::proof::EcvrfProof;
use crate::verifier::EcvrfVerifier;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// One published epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochRecord {
    pub epoch: u64,
    pub alpha: U256,
    pub output: U256,
}

#[derive(Debug, Default)]
struct ReceiverEpochs {
    genesis_alpha: Option<U256>,
    records: Vec<EpochRecord>,
}

impl ReceiverEpochs {
    /// The alpha the next proof must carry, `None` for an unpinned genesis.
    fn expected_alpha(&self) -> Option<U256> {
        match self.records.last() {
            Some(last) => Some(last.output),
            None => self.genesis_alpha,
        }
    }
}

/// Verified epoch history per receiver, all under one oracle key.
#[derive(Debug)]
pub struct EpochChain {
    verifier: EcvrfVerifier,
    receivers: HashMap<Address, ReceiverEpochs>,
}

impl EpochChain {
    pub fn new(verifier: EcvrfVerifier) -> Self {
        Self {
            verifier,
            receivers: HashMap::new(),
        }
    }

    pub fn verifier(&self) -> &EcvrfVerifier {
        &self.verifier
    }

    /// Pin the alpha the genesis proof for `receiver` must carry.
    ///
    /// Allowed until the first epoch is published; re-pinning replaces the
    /// previous value.
    pub fn seed_genesis(&mut self, receiver: Address, alpha: U256) -> Result<(), VrfError> {
        let entry = self.receivers.entry(receiver).or_default();
        if !entry.records.is_empty() {
            return Err(VrfError::GenesisAlreadySeeded);
        }
        entry.genesis_alpha = Some(alpha);
        debug!(%receiver, %alpha, "genesis alpha pinned");
        Ok(())
    }

    /// Verify `proof` as the next epoch of `receiver` and record it.
    ///
    /// Nothing is recorded when verification fails.
    pub fn publish(&mut self, receiver: Address, proof: &EcvrfProof) -> Result<EpochRecord, VrfError> {
        let state = self.receivers.get(&receiver);
        let expected = state
            .and_then(ReceiverEpochs::expected_alpha)
            .unwrap_or(proof.alpha);
        let epoch = state.map_or(0, |s| s.records.len() as u64);

        let output = self.verifier.verify_proof(proof, expected)?;

        let record = EpochRecord {
            epoch,
            alpha: proof.alpha,
            output,
        };
        self.receivers.entry(receiver).or_default().records.push(record);
        info!(%receiver, epoch, %output, "epoch published");
        Ok(record)
    }

    /// The latest published epoch of `receiver`.
    pub fn current_epoch(&self, receiver: &Address) -> Option<&EpochRecord> {
        self.receivers.get(receiver)?.records.last()
    }

    pub fn epoch_count(&self, receiver: &Address) -> u64 {
        self.receivers
            .get(receiver)
            .map_or(0, |s| s.records.len() as u64)
    }

    pub fn epochs(&self, receiver: &Address) -> &[EpochRecord] {
        self.receivers
            .get(receiver)
            .map_or(&[], |s| s.records.as_slice())
    }

    /// The alpha the next proof for `receiver` must carry, if fixed.
    pub fn expected_alpha(&self, receiver: &Address) -> Option<U256> {
        self.receivers.get(receiver)?.expected_alpha()
    }
}
