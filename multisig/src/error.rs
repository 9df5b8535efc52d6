use alloy_primitives::{Address, FixedBytes, U256};
use orochi_crypto::CryptoError;
use orochi_types::Timestamp;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultisigError {
    #[error("wallet can only be initialised once")]
    OnlyAbleToInitOnce,

    #[error("wallet is not initialised")]
    NotInitialized,

    #[error("user/role length mismatch: {users} users, {roles} roles")]
    UserRoleLengthMismatch { users: usize, roles: usize },

    #[error("signer list must be strictly ascending without duplicates (index {0})")]
    UserDuplicatedOrWrongOrder(usize),

    #[error("invalid role bitmask {0:#04x}")]
    InvalidRole(u8),

    #[error("invalid threshold {threshold} for {total_signer} voting signers")]
    InvalidThreshold { threshold: u64, total_signer: u64 },

    #[error("no user holds the create permission")]
    ProofNoCreator,

    #[error("timeout of {got}s is below the secure minimum of {min}s")]
    InsecuredTimeout { got: u64, min: u64 },

    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),

    #[error("chain id mismatch: wallet is on {expected}, transaction is for {got}")]
    ProofChainIdMismatch { expected: U256, got: U256 },

    #[error("transaction is bound to wallet {got}, not {expected}")]
    ProofWalletMismatch { expected: Address, got: Address },

    #[error("invalid nonce: expected {expected}, got {got}")]
    ProofInvalidNonce { expected: U256, got: U256 },

    #[error("voting deadline {deadline} has passed (now {now})")]
    ProofExpired { deadline: Timestamp, now: Timestamp },

    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] CryptoError),

    #[error("{0} lacks the required permission")]
    InvalidPermission(Address),

    #[error("threshold not passed: {have} of {need} votes")]
    ThresholdNotPassed { have: u64, need: u64 },

    #[error("only wallet users may do this")]
    OnlyUserAllowed,

    #[error("invalid role receiver {0}")]
    InvalidReceiver(Address),

    #[error("unknown wallet command selector {0}")]
    UnknownCommand(FixedBytes<4>),

    #[error("call execution failed: {0}")]
    ExecutionFailed(String),

    #[error("salt does not fit in 96 bits")]
    InvalidSalt,

    #[error("wallet {0} already exists")]
    WalletAlreadyExists(Address),

    #[error("wallet {0} not found")]
    WalletNotFound(Address),
}
