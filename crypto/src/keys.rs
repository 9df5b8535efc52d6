//! secp256k1 key generation.

use crate::address::address_of_point;
use crate::curve;
use crate::error::CryptoError;
use alloy_primitives::{Address, U256};
use k256::ecdsa::SigningKey;
use k256::FieldBytes;
use orochi_types::Point;
use rand::rngs::OsRng;

/// A secp256k1 signing key together with its public point and address.
///
/// The signing key stays in the `k256` type, which zeroizes on drop.
pub struct KeyPair {
    pub signing_key: SigningKey,
    pub public: Point,
    pub address: Address,
}

impl KeyPair {
    fn from_signing_key(signing_key: SigningKey) -> Self {
        let public = curve::mul_generator(secret_scalar_of(&signing_key)).unwrap_or_default();
        let address = address_of_point(&public);
        Self {
            signing_key,
            public,
            address,
        }
    }

    /// The secret scalar as a word.
    pub fn secret_scalar(&self) -> U256 {
        secret_scalar_of(&self.signing_key)
    }
}

fn secret_scalar_of(signing_key: &SigningKey) -> U256 {
    U256::from_be_slice(&signing_key.to_bytes())
}

/// Generate a new key pair from a secure random source.
pub fn generate_keypair() -> KeyPair {
    KeyPair::from_signing_key(SigningKey::random(&mut OsRng))
}

/// Reconstruct a key pair from 32 secret bytes (deterministic).
///
/// Fails if the bytes are zero or not below the group order.
pub fn keypair_from_secret(secret: &[u8; 32]) -> Result<KeyPair, CryptoError> {
    let signing_key = SigningKey::from_bytes(FieldBytes::from_slice(secret))
        .map_err(|_| CryptoError::InvalidSecretKey)?;
    Ok(KeyPair::from_signing_key(signing_key))
}
