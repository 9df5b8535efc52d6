//! Threshold multisig validation for Orosign wallets.
//!
//! - [`MultisigWallet`]: roles, nonce and the execute/transfer state machine
//! - [`PackedTransaction`]: the byte message signers vote on
//! - [`WalletCommand`]: administrative self-calls
//! - [`WalletFactory`]: address prediction and a locked wallet registry

pub mod command;
pub mod config;
pub mod error;
pub mod factory;
pub mod permission;
pub mod transaction;
pub mod wallet;

pub use command::WalletCommand;
pub use config::MultisigConfig;
pub use error::MultisigError;
pub use factory::{pack_salt, predict_wallet_address, proxy_init_code, WalletFactory, MAX_SALT};
pub use permission::{Permission, RoleRecord};
pub use transaction::{PackedTransaction, PACKED_HEAD_LEN};
pub use wallet::{Call, CallExecutor, ExecutionReceipt, MultisigWallet, WalletMetadata};
