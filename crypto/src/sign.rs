//! ECDSA message signing and signer recovery.
//!
//! Signatures are the 65-byte `r || s || v` form produced by Ethereum
//! wallets, with `v` in `{27, 28}` (or the raw recovery id `{0, 1}`).

use crate::address::address_of_verifying_key;
use crate::error::CryptoError;
use crate::field::GROUP_ORDER;
use crate::hash::eth_signed_message_hash;
use alloy_primitives::{Address, B256, U256};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

/// Length of an `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Sign a 32-byte digest, returning `r || s || v` with `v` in `{27, 28}`.
pub fn sign_digest(signing_key: &SigningKey, digest: &B256) -> Result<[u8; 65], CryptoError> {
    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(digest.as_slice())
        .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
    let mut out = [0u8; SIGNATURE_LENGTH];
    out[..64].copy_from_slice(&signature.to_bytes());
    out[64] = 27 + recovery_id.to_byte();
    Ok(out)
}

/// Sign the EIP-191 personal-message digest of `message`.
pub fn sign_message(signing_key: &SigningKey, message: &[u8]) -> Result<[u8; 65], CryptoError> {
    sign_digest(signing_key, &eth_signed_message_hash(message))
}

/// Recover the address that produced `signature` over `digest`.
///
/// Rejects signatures whose `s` lies in the upper half of the group order,
/// so every (message, signer) pair has exactly one accepted encoding.
pub fn recover_signer(digest: &B256, signature: &[u8]) -> Result<Address, CryptoError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(CryptoError::InvalidSignatureLength(signature.len()));
    }
    let v = signature[64];
    let recovery_byte = match v {
        0 | 1 => v,
        27 | 28 => v - 27,
        _ => return Err(CryptoError::InvalidRecoveryId(v)),
    };
    let recovery_id =
        RecoveryId::from_byte(recovery_byte).ok_or(CryptoError::InvalidRecoveryId(v))?;

    let s = U256::from_be_slice(&signature[32..64]);
    if s > GROUP_ORDER >> 1 {
        return Err(CryptoError::MalleableSignature);
    }

    let signature =
        Signature::from_slice(&signature[..64]).map_err(|_| CryptoError::MalformedSignature)?;
    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;
    Ok(address_of_verifying_key(&key))
}
