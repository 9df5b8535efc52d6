//! Wallet timing configuration.

use serde::{Deserialize, Serialize};

/// Three days.
pub const DEFAULT_SECURED_TIMEOUT_SECS: u64 = 3 * 24 * 60 * 60;

/// Fifteen minutes.
pub const DEFAULT_MIN_VOTING_TIMEOUT_SECS: u64 = 15 * 60;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigConfig {
    /// Delay before a transferred role becomes active.
    #[serde(default = "default_secured_timeout_secs")]
    pub secured_timeout_secs: u64,

    /// Lower bound on a transaction's voting window.
    #[serde(default = "default_min_voting_timeout_secs")]
    pub min_voting_timeout_secs: u64,
}

fn default_secured_timeout_secs() -> u64 {
    DEFAULT_SECURED_TIMEOUT_SECS
}

fn default_min_voting_timeout_secs() -> u64 {
    DEFAULT_MIN_VOTING_TIMEOUT_SECS
}

impl Default for MultisigConfig {
    fn default() -> Self {
        Self {
            secured_timeout_secs: default_secured_timeout_secs(),
            min_voting_timeout_secs: default_min_voting_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: MultisigConfig = toml::from_str("").unwrap();
        assert_eq!(config.secured_timeout_secs, 259_200);
        assert_eq!(config.min_voting_timeout_secs, 900);
    }

    #[test]
    fn partial_override() {
        let config: MultisigConfig = toml::from_str("min_voting_timeout_secs = 60").unwrap();
        assert_eq!(config.min_voting_timeout_secs, 60);
        assert_eq!(config.secured_timeout_secs, DEFAULT_SECURED_TIMEOUT_SECS);
    }
}
