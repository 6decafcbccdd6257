//! Wallet configuration, loadable from TOML.

use std::path::Path;

use nanohd_types::{harden, DerivationPath, HARDENED_OFFSET, NANO_COIN_TYPE};
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// How derived accounts are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which accounts to derive and how to show them.
///
/// Can be loaded from a TOML file via [`WalletConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). The BIP39 passphrase is never
/// part of the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Path prefix; the account index is appended as a hardened segment.
    #[serde(default = "default_base_path")]
    pub base_path: DerivationPath,

    /// First account index to derive.
    #[serde(default = "default_first_account")]
    pub first_account: u32,

    /// Number of consecutive accounts to derive.
    #[serde(default = "default_count")]
    pub count: u32,

    /// Output format of the `derive` command.
    #[serde(default)]
    pub output: OutputFormat,

    /// Default log level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_path() -> DerivationPath {
    DerivationPath::new(vec![harden(44), harden(NANO_COIN_TYPE)])
}

fn default_first_account() -> u32 {
    1
}

fn default_count() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl WalletConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, WalletError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WalletError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        let config: Self = toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Check that the account range fits in hardened index space.
    pub fn validate(&self) -> Result<(), WalletError> {
        if self.count == 0 {
            return Err(WalletError::Config("count must be at least 1".into()));
        }
        let last = u64::from(self.first_account) + u64::from(self.count) - 1;
        if last >= u64::from(HARDENED_OFFSET) {
            return Err(WalletError::Config(format!(
                "account range {}..={last} exceeds 2^31 - 1",
                self.first_account
            )));
        }
        Ok(())
    }

    /// The full derivation paths of every configured account, in order.
    pub fn account_paths(&self) -> Result<Vec<DerivationPath>, WalletError> {
        self.validate()?;
        Ok((self.first_account..self.first_account + self.count)
            .map(|account| self.base_path.child(account))
            .collect())
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            first_account: default_first_account(),
            count: default_count(),
            output: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}
