//! `orochi`: offline ECVRF verification and Orosign wallet tooling.

mod commands;
mod config;

use alloy_primitives::Address;
use anyhow::Context;
use clap::Parser;
use config::CliConfig;
use orochi_utils::LogFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orochi", version, about = "Orand proof verification and Orosign wallet tools")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "OROCHI_CONFIG")]
    config: Option<PathBuf>,

    /// Log format: "human" or "json".
    #[arg(long, env = "OROCHI_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "OROCHI_LOG_LEVEL")]
    log_level: Option<String>,

    /// Chain id packed into transactions.
    #[arg(long, env = "OROCHI_CHAIN_ID")]
    chain_id: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Map a public key and alpha to a curve point.
    HashToCurve {
        /// Uncompressed public key, hex.
        #[arg(long)]
        public_key: String,
        /// Seed as decimal or 0x hex.
        #[arg(long)]
        alpha: String,
    },

    /// Verify a JSON proof and print its output.
    VerifyProof {
        #[arg(long)]
        public_key: String,
        /// Path to the proof JSON.
        #[arg(long)]
        proof: PathBuf,
        /// Expected seed; defaults to the proof's own alpha.
        #[arg(long)]
        seed: Option<String>,
    },

    /// Pack a 96-bit salt with a creator address.
    PackSalt {
        #[arg(long)]
        salt: String,
        #[arg(long)]
        creator: Address,
    },

    /// Predict a wallet's CREATE2 address.
    PredictWallet {
        #[arg(long)]
        salt: String,
        #[arg(long)]
        creator: Address,
        #[arg(long, env = "OROCHI_FACTORY")]
        factory: Option<Address>,
        #[arg(long, env = "OROCHI_IMPLEMENTATION")]
        implementation: Option<Address>,
    },

    /// Pack a transaction for signers to vote on.
    EncodeTransaction {
        #[arg(long)]
        wallet: Address,
        #[arg(long)]
        nonce: String,
        /// Voting window in seconds.
        #[arg(long)]
        timeout: u64,
        #[arg(long)]
        target: Address,
        #[arg(long, default_value = "0")]
        value: String,
        /// Call data, hex.
        #[arg(long, default_value = "")]
        data: String,
        /// Unix time to pack instead of the system clock.
        #[arg(long)]
        now: Option<u64>,
    },

    /// Print the default configuration as TOML.
    DefaultConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(chain_id) = cli.chain_id {
        config.chain_id = chain_id;
    }

    orochi_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::debug!("loaded config from {}", path.display());
    }

    let output = match cli.command {
        Command::HashToCurve { public_key, alpha } => {
            commands::hash_to_curve(&config, &public_key, &alpha)?
        }
        Command::VerifyProof {
            public_key,
            proof,
            seed,
        } => commands::verify_proof(&config, &public_key, &proof, seed.as_deref())?,
        Command::PackSalt { salt, creator } => commands::pack_salt_cmd(&salt, creator)?,
        Command::PredictWallet {
            salt,
            creator,
            factory,
            implementation,
        } => commands::predict_wallet(&config, &salt, creator, factory, implementation)?,
        Command::EncodeTransaction {
            wallet,
            nonce,
            timeout,
            target,
            value,
            data,
            now,
        } => commands::encode_transaction(
            &config,
            commands::EncodeArgs {
                wallet,
                nonce: &nonce,
                timeout,
                target,
                value: &value,
                data: &data,
                now,
            },
        )?,
        Command::DefaultConfig => {
            print!("{}", commands::default_config()?);
            return Ok(());
        }
    };

    let rendered = serde_json::to_string_pretty(&output).context("rendering output")?;
    println!("{rendered}");
    Ok(())
}
