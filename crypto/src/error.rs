use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("invalid signature length: expected 65 bytes, got {0}")]
    InvalidSignatureLength(usize),

    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),

    #[error("signature s value is not in the lower half of the group order")]
    MalleableSignature,

    #[error("malformed signature")]
    MalformedSignature,

    #[error("public key recovery failed")]
    RecoveryFailed,

    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("signing failed: {0}")]
    SigningFailed(String),
}
