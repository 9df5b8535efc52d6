//! Cryptographic primitives for the Orochi verification core.
//!
//! - **Keccak-256** for every digest (EVM compatible)
//! - **secp256k1** field arithmetic over EVM words, with point arithmetic
//!   delegated to `k256`
//! - **ECDSA** signing and public-key recovery with 65-byte `r || s || v` signatures
//! - Ethereum address derivation from curve points

pub mod address;
pub mod curve;
pub mod error;
pub mod field;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{address_of_point, address_of_verifying_key};
pub use error::CryptoError;
pub use field::{is_on_curve, FIELD_SIZE, GROUP_ORDER};
pub use hash::{eth_signed_message_hash, keccak256, keccak256_multi};
pub use keys::{generate_keypair, keypair_from_secret, KeyPair};
pub use sign::{recover_signer, sign_digest, sign_message, SIGNATURE_LENGTH};
