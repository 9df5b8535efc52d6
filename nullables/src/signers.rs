//! Nullable signers: a deterministic keyring for wallet tests.

use alloy_primitives::Address;
use orochi_crypto::{keccak256, keypair_from_secret, sign_message, KeyPair};

/// `count` deterministic keys, sorted by ascending address.
///
/// Index `i` always names the `i`-th smallest address, so signing with
/// ascending indices yields the ordered signature list a wallet expects.
pub struct NullSigners {
    keys: Vec<KeyPair>,
}

impl NullSigners {
    pub fn new(count: usize) -> Self {
        Self::with_label("orochi-null-signer", count)
    }

    /// Keys derived from `label`; different labels give disjoint keyrings.
    pub fn with_label(label: &str, count: usize) -> Self {
        let mut keys: Vec<KeyPair> = (0..count as u64)
            .map(|i| {
                let mut preimage = label.as_bytes().to_vec();
                preimage.extend_from_slice(&i.to_be_bytes());
                let secret = keccak256(&preimage);
                keypair_from_secret(&secret.0).expect("keccak output is a valid secret")
            })
            .collect();
        keys.sort_by_key(|k| k.address);
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn address(&self, index: usize) -> Address {
        self.keys[index].address
    }

    pub fn addresses(&self) -> Vec<Address> {
        self.keys.iter().map(|k| k.address).collect()
    }

    pub fn keypair(&self, index: usize) -> &KeyPair {
        &self.keys[index]
    }

    /// EIP-191 signature of `message` by signer `index`.
    pub fn sign(&self, index: usize, message: &[u8]) -> Vec<u8> {
        sign_message(&self.keys[index].signing_key, message)
            .expect("signing with a valid key succeeds")
            .to_vec()
    }

    /// Signatures by `indices`, in the order given.
    pub fn sign_all(&self, indices: &[usize], message: &[u8]) -> Vec<Vec<u8>> {
        indices.iter().map(|&i| self.sign(i, message)).collect()
    }
}
