//! CLI configuration with TOML file support.

use alloy_primitives::Address;
use anyhow::Context;
use orochi_multisig::MultisigConfig;
use orochi_utils::LogFormat;
use orochi_vrf::VrfConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the `orochi` tool.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; command-line
/// flags and environment variables override individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Chain the packed transactions are bound to.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Wallet factory deploying the proxies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory_address: Option<Address>,

    /// Wallet implementation the proxies delegate to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_address: Option<Address>,

    #[serde(default)]
    pub vrf: VrfConfig,

    #[serde(default)]
    pub multisig: MultisigConfig,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}

fn default_chain_id() -> u64 {
    1
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CliConfig {
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            chain_id: default_chain_id(),
            factory_address: None,
            implementation_address: None,
            vrf: VrfConfig::default(),
            multisig: MultisigConfig::default(),
        }
    }
}
