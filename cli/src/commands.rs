//! Subcommand implementations. Each returns the JSON value printed on stdout.

use crate::config::CliConfig;
use alloy_primitives::{Address, U256};
use anyhow::{anyhow, bail, Context};
use orochi_multisig::{pack_salt, predict_wallet_address, PackedTransaction};
use orochi_types::{parse_word, Point, Timestamp};
use orochi_utils::format_duration;
use orochi_vrf::{EcvrfProof, EcvrfVerifier};
use serde_json::{json, Value};
use std::path::Path;

pub fn hash_to_curve(config: &CliConfig, public_key: &str, alpha: &str) -> anyhow::Result<Value> {
    let verifier = verifier(config, public_key)?;
    let alpha = parse_word(alpha).context("alpha")?;
    let point = verifier.hash_to_curve(alpha)?;
    Ok(json!({ "x": point.x, "y": point.y }))
}

pub fn verify_proof(
    config: &CliConfig,
    public_key: &str,
    proof_path: &Path,
    seed: Option<&str>,
) -> anyhow::Result<Value> {
    let verifier = verifier(config, public_key)?;
    let content = std::fs::read_to_string(proof_path)
        .with_context(|| format!("reading proof {}", proof_path.display()))?;
    let proof: EcvrfProof = serde_json::from_str(&content)
        .with_context(|| format!("parsing proof {}", proof_path.display()))?;
    let seed = match seed {
        Some(s) => parse_word(s).context("seed")?,
        None => proof.alpha,
    };

    let output = verifier
        .verify_proof(&proof, seed)
        .with_context(|| format!("proof for alpha {} rejected", proof.alpha))?;
    tracing::info!(alpha = %proof.alpha, %output, "proof verified");
    Ok(json!({ "alpha": proof.alpha, "output": output }))
}

pub fn pack_salt_cmd(salt: &str, creator: Address) -> anyhow::Result<Value> {
    let packed = pack_salt(parse_salt(salt)?, creator)?;
    Ok(json!({ "packedSalt": packed }))
}

pub fn predict_wallet(
    config: &CliConfig,
    salt: &str,
    creator: Address,
    factory: Option<Address>,
    implementation: Option<Address>,
) -> anyhow::Result<Value> {
    let factory = factory
        .or(config.factory_address)
        .ok_or_else(|| anyhow!("no factory address (pass --factory or set factory_address)"))?;
    let implementation = implementation.or(config.implementation_address).ok_or_else(|| {
        anyhow!("no implementation address (pass --implementation or set implementation_address)")
    })?;
    let address = predict_wallet_address(factory, implementation, parse_salt(salt)?, creator)?;
    Ok(json!({ "wallet": address, "factory": factory, "implementation": implementation }))
}

/// Parameters of `encode-transaction`, mirroring its flags.
pub struct EncodeArgs<'a> {
    pub wallet: Address,
    pub nonce: &'a str,
    pub timeout: u64,
    pub target: Address,
    pub value: &'a str,
    pub data: &'a str,
    pub now: Option<u64>,
}

pub fn encode_transaction(config: &CliConfig, args: EncodeArgs<'_>) -> anyhow::Result<Value> {
    let min = config.multisig.min_voting_timeout_secs;
    if args.timeout < min {
        bail!("timeout of {}s is below the secure minimum of {min}s", args.timeout);
    }
    let now = args.now.map(Timestamp::new).unwrap_or_else(Timestamp::now);
    let digits = args.data.strip_prefix("0x").unwrap_or(args.data);
    let tx = PackedTransaction {
        chain_id: U256::from(config.chain_id),
        voting_deadline: now.saturating_add(args.timeout),
        nonce: parse_word(args.nonce).context("nonce")?,
        current_block_time: now,
        target: args.target,
        value: parse_word(args.value).context("value")?,
        wallet_address: args.wallet,
        data: hex::decode(digits).context("call data")?,
    };
    Ok(json!({
        "message": format!("0x{}", hex::encode(tx.encode())),
        "votingDeadline": tx.voting_deadline.as_secs(),
        "votingWindow": format_duration(args.timeout),
    }))
}

pub fn default_config() -> anyhow::Result<String> {
    CliConfig::default().to_toml_string()
}

fn verifier(config: &CliConfig, public_key: &str) -> anyhow::Result<EcvrfVerifier> {
    let point = Point::from_hex(public_key).context("public key")?;
    Ok(EcvrfVerifier::new(point, config.vrf.clone())?)
}

/// Decimal or `0x` hex salt.
fn parse_salt(s: &str) -> anyhow::Result<u128> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x") {
        Some(digits) => u128::from_str_radix(digits, 16),
        None => s.parse::<u128>(),
    };
    parsed.with_context(|| format!("invalid salt '{s}'"))
}
