//! Keccak-256 hashing as used by the EVM.

use alloy_primitives::{Keccak256, B256};

/// Prefix of the EIP-191 "personal message" digest.
const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Compute the Keccak-256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> B256 {
    alloy_primitives::keccak256(data)
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn keccak256_multi(parts: &[&[u8]]) -> B256 {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize()
}

/// EIP-191 digest: `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)`.
///
/// This is the digest wallet signers produce for an arbitrary byte message,
/// and the one multisig signatures are recovered against.
pub fn eth_signed_message_hash(message: &[u8]) -> B256 {
    let len = message.len().to_string();
    keccak256_multi(&[PERSONAL_MESSAGE_PREFIX, len.as_bytes(), message])
}
