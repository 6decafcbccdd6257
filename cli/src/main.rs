//! nanohd — derive Nano accounts from a BIP39 mnemonic.

use anyhow::Context;
use clap::Parser;
use nanohd_types::DerivationPath;
use nanohd_utils::LogFormat;
use nanohd_wallet_core::{OutputFormat, Wallet, WalletConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nanohd",
    about = "Hierarchical-deterministic Nano keys (SLIP-0010, Ed25519)"
)]
struct Cli {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Defaults to the config file value, then "warn". `RUST_LOG` overrides.
    #[arg(long, global = true, env = "NANOHD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "NANOHD_LOG_JSON")]
    log_json: bool,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "NANOHD_CONFIG")]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Derive keys and addresses from a mnemonic.
    Derive {
        /// BIP39 mnemonic (required).
        #[arg(long, env = "NANOHD_MNEMONIC", hide_env_values = true)]
        mnemonic: String,

        /// BIP39 passphrase (optional).
        #[arg(long, default_value = "", env = "NANOHD_PASSWORD", hide_env_values = true)]
        password: String,

        /// Full derivation path, e.g. "44'/165'/0'". Overrides account selection.
        #[arg(long, conflicts_with_all = ["account", "count"])]
        path: Option<DerivationPath>,

        /// First account index under the base path.
        #[arg(long)]
        account: Option<u32>,

        /// Number of consecutive accounts.
        #[arg(long)]
        count: Option<u32>,

        /// Print a JSON array instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Encode a hex public key as an address.
    Address {
        /// 32-byte public key, hex encoded.
        public_key: String,
    },

    /// Check an address and print the public key it carries.
    Validate { address: String },

    /// Parse a derivation path and print its canonical form and raw indices.
    ParsePath { path: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => WalletConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WalletConfig::default(),
    };

    let level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    nanohd_utils::init_tracing(level, format);
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Derive {
            mnemonic,
            password,
            path,
            account,
            count,
            json,
        } => {
            if let Some(account) = account {
                config.first_account = account;
            }
            if let Some(count) = count {
                config.count = count;
            }
            if json {
                config.output = OutputFormat::Json;
            }
            run_derive(&mnemonic, &password, path, &config)
        }
        Command::Address { public_key } => {
            let bytes = hex::decode(public_key.trim()).context("public key is not valid hex")?;
            println!("{}", nanohd_crypto::encode_address(&bytes)?);
            Ok(())
        }
        Command::Validate { address } => {
            let public_key = nanohd_crypto::decode_address(address.trim())
                .with_context(|| format!("{address} is not a valid address"))?;
            println!("Public key: {public_key}");
            Ok(())
        }
        Command::ParsePath { path } => {
            let parsed = DerivationPath::parse(&path)?;
            println!("Path: {parsed}");
            let indices: Vec<String> = parsed
                .indices()
                .iter()
                .map(|i| format!("0x{i:08x}"))
                .collect();
            println!("Indices: {}", indices.join(" "));
            Ok(())
        }
    }
}

fn run_derive(
    mnemonic: &str,
    password: &str,
    path: Option<DerivationPath>,
    config: &WalletConfig,
) -> anyhow::Result<()> {
    let wallet = Wallet::from_mnemonic(mnemonic, password)?;
    let accounts = match path {
        Some(path) => vec![wallet.account(&path)?],
        None => wallet.accounts(config)?,
    };
    tracing::info!(count = accounts.len(), "derived accounts");

    match config.output {
        OutputFormat::Json => {
            let reports: Vec<_> = accounts.iter().map(|a| a.report()).collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            println!("Mnemonic: {mnemonic:?}");
            println!("Password: {password:?}");
            for account in &accounts {
                let report = account.report();
                println!("Path: {}", report.path);
                println!("Private key: {}", report.private_key);
                println!("Public key: {}", report.public_key);
                println!("Nano address: {}", report.address);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn path_conflicts_with_account_selection() {
        let result = Cli::try_parse_from([
            "nanohd", "derive", "--mnemonic", "x", "--path", "44'/165'/0'", "--account", "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn derive_path_is_parsed_by_clap() {
        let cli =
            Cli::try_parse_from(["nanohd", "derive", "--mnemonic", "x", "--path", "44'/165'/7'"])
                .unwrap();
        match cli.command {
            Command::Derive { path, .. } => {
                assert_eq!(path, Some(DerivationPath::nano_account(7)));
            }
            _ => panic!("expected derive"),
        }
    }

    #[test]
    fn malformed_path_is_rejected_by_clap() {
        let result = Cli::try_parse_from(["nanohd", "derive", "--mnemonic", "x", "--path", "44'/"]);
        assert!(result.is_err());
    }
}
