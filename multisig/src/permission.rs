//! Role bitmasks and per-user role records.

use crate::error::MultisigError;
use orochi_types::Timestamp;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// A set of permission bits held by a wallet user.
    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[serde(transparent)]
    pub struct Permission: u8 {
        /// Listed as a user but never counted.
        const OBSERVE = 0b0001;
        /// Counted towards the threshold.
        const VOTE = 0b0010;
        const EXECUTE = 0b0100;
        /// May submit transactions for execution.
        const CREATE = 0b1000;
    }
}

impl Permission {
    /// Parse a role bitmask; empty masks and unknown bits are rejected.
    pub fn from_role_bits(bits: u8) -> Result<Self, MultisigError> {
        Self::from_bits(bits)
            .filter(|p| !p.is_empty())
            .ok_or(MultisigError::InvalidRole(bits))
    }
}

/// A user's slot in the wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    /// Position assigned at initialisation; kept across transfers.
    pub index: u32,
    pub permission: Permission,
    /// [`Timestamp::EPOCH`] means active immediately.
    pub active_time: Timestamp,
}

impl RoleRecord {
    pub fn is_active(&self, now: Timestamp) -> bool {
        self.active_time.is_epoch() || now >= self.active_time
    }

    pub fn has_active(&self, permission: Permission, now: Timestamp) -> bool {
        self.is_active(now) && self.permission.contains(permission)
    }
}
