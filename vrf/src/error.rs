use thiserror::Error;

/// Rejection reasons for ECVRF verification. None of them is transient:
/// the same proof will be rejected again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VrfError {
    #[error("point is not on the secp256k1 curve")]
    InvalidCurvePoint,

    #[error("ECVRF proof digest does not match")]
    InvalidECVRFProofDigest,

    #[error("alpha does not match the expected seed")]
    InvalidAlphaValue,

    #[error("scalar is not reduced")]
    ScalarNotReduced,

    #[error("genesis alpha already seeded for this receiver")]
    GenesisAlreadySeeded,
}
