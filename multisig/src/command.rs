//! Administrative commands carried by self-calls.

use crate::error::MultisigError;
use alloy_primitives::{FixedBytes, U256};
use orochi_crypto::keccak256;
use orochi_types::word;

/// Payload length: selector plus one argument word.
const COMMAND_LEN: usize = 4 + 32;

/// A call the wallet makes on itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletCommand {
    UpdateThreshold(u64),
    UpdateSecuredTimeout(u64),
}

impl WalletCommand {
    pub const UPDATE_THRESHOLD_SIGNATURE: &'static str = "updateThreshold(uint256)";
    pub const UPDATE_SECURED_TIMEOUT_SIGNATURE: &'static str = "updateSecuredTimeout(uint256)";

    pub fn selector(&self) -> FixedBytes<4> {
        match self {
            WalletCommand::UpdateThreshold(_) => selector_of(Self::UPDATE_THRESHOLD_SIGNATURE),
            WalletCommand::UpdateSecuredTimeout(_) => {
                selector_of(Self::UPDATE_SECURED_TIMEOUT_SIGNATURE)
            }
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let argument = match self {
            WalletCommand::UpdateThreshold(n) | WalletCommand::UpdateSecuredTimeout(n) => *n,
        };
        let mut out = Vec::with_capacity(COMMAND_LEN);
        out.extend_from_slice(self.selector().as_slice());
        out.extend_from_slice(&word(U256::from(argument)));
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self, MultisigError> {
        if data.len() < 4 {
            return Err(MultisigError::MalformedTransaction(
                "self-call data has no selector".to_string(),
            ));
        }
        let selector = FixedBytes::<4>::from_slice(&data[..4]);
        let make: fn(u64) -> WalletCommand =
            if selector == selector_of(Self::UPDATE_THRESHOLD_SIGNATURE) {
                WalletCommand::UpdateThreshold
            } else if selector == selector_of(Self::UPDATE_SECURED_TIMEOUT_SIGNATURE) {
                WalletCommand::UpdateSecuredTimeout
            } else {
                return Err(MultisigError::UnknownCommand(selector));
            };

        if data.len() != COMMAND_LEN {
            return Err(MultisigError::MalformedTransaction(format!(
                "self-call data is {} bytes, expected {COMMAND_LEN}",
                data.len()
            )));
        }
        let argument = U256::from_be_slice(&data[4..]);
        let argument = u64::try_from(argument).map_err(|_| {
            MultisigError::MalformedTransaction(format!("argument {argument} out of range"))
        })?;
        Ok(make(argument))
    }
}

fn selector_of(signature: &str) -> FixedBytes<4> {
    FixedBytes::from_slice(&keccak256(signature.as_bytes())[..4])
}
