//! Seed-holding wallet: derives Nano accounts along hardened paths.

use nanohd_crypto::{derive, encode_address, keypair_from_seed, seed_from_mnemonic};
use nanohd_types::{DerivationPath, KeyPair, NanoAddress, PublicKey};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::config::WalletConfig;
use crate::error::WalletError;

/// One derived account: its path, key pair and address.
pub struct Account {
    pub path: DerivationPath,
    pub keypair: KeyPair,
    pub address: NanoAddress,
}

impl Account {
    pub fn public_key(&self) -> &PublicKey {
        &self.keypair.public
    }

    /// Printable form. Includes the private key, so only build it on request.
    pub fn report(&self) -> AccountReport {
        AccountReport {
            path: self.path.to_string(),
            private_key: self.keypair.private.to_hex(),
            public_key: self.keypair.public.to_hex(),
            address: self.address.to_string(),
        }
    }
}

/// Serializable view of an [`Account`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccountReport {
    pub path: String,
    pub private_key: String,
    pub public_key: String,
    pub address: String,
}

/// A BIP39-derived seed. The seed is zeroized on drop.
pub struct Wallet {
    seed: Zeroizing<Vec<u8>>,
}

impl Wallet {
    /// Build a wallet from a mnemonic and optional passphrase.
    pub fn from_mnemonic(mnemonic: &str, passphrase: &str) -> Result<Self, WalletError> {
        let seed = seed_from_mnemonic(mnemonic, passphrase)?;
        Ok(Self::from_seed(&seed[..]))
    }

    /// Build a wallet from raw seed bytes.
    pub fn from_seed(seed: &[u8]) -> Self {
        Self {
            seed: Zeroizing::new(seed.to_vec()),
        }
    }

    /// Derive the account at `path`. Every segment must be hardened.
    pub fn account(&self, path: &DerivationPath) -> Result<Account, WalletError> {
        let material = derive(&self.seed, path)?;
        let keypair = keypair_from_seed(&material.into_private_key().0);
        let address = NanoAddress::new(encode_address(keypair.public.as_bytes())?)?;
        tracing::debug!(%path, %address, "derived account");
        Ok(Account {
            path: path.clone(),
            keypair,
            address,
        })
    }

    /// Derive every account named by `config`, in order.
    pub fn accounts(&self, config: &WalletConfig) -> Result<Vec<Account>, WalletError> {
        config
            .account_paths()?
            .iter()
            .map(|path| self.account(path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanohd_types::{harden, DerivationError};

    #[test]
    fn account_is_deterministic() {
        let wallet = Wallet::from_seed(&[9u8; 64]);
        let path = DerivationPath::nano_account(0);
        let a = wallet.account(&path).unwrap();
        let b = wallet.account(&path).unwrap();
        assert_eq!(a.report(), b.report());
    }

    #[test]
    fn different_accounts_differ() {
        let wallet = Wallet::from_seed(&[9u8; 64]);
        let a = wallet.account(&DerivationPath::nano_account(0)).unwrap();
        let b = wallet.account(&DerivationPath::nano_account(1)).unwrap();
        assert_ne!(a.public_key(), b.public_key());
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn zero_seed_first_child_account() {
        let wallet = Wallet::from_seed(&[0u8; 64]);
        let account = wallet
            .account(&DerivationPath::new(vec![harden(0)]))
            .unwrap();
        assert_eq!(
            account.report().private_key,
            "54d12b1cda4884cba85468e9c1189ee9d67865c97b93f214f1d9d65f38f15a99"
        );
        assert!(account.address.as_str().starts_with("nano_"));
    }

    #[test]
    fn non_hardened_path_is_derivation_error() {
        let wallet = Wallet::from_seed(&[9u8; 64]);
        let path = DerivationPath::parse("44'/165'/0").unwrap();
        let err = wallet.account(&path).err().unwrap();
        assert!(matches!(
            err,
            WalletError::Derivation(DerivationError::UnsupportedNonHardenedIndex(0))
        ));
    }

    #[test]
    fn accounts_follow_config() {
        let wallet = Wallet::from_seed(&[9u8; 64]);
        let config = WalletConfig {
            first_account: 0,
            count: 3,
            ..Default::default()
        };
        let accounts = wallet.accounts(&config).unwrap();
        let paths: Vec<String> = accounts.iter().map(|a| a.path.to_string()).collect();
        assert_eq!(paths, ["44'/165'/0'", "44'/165'/1'", "44'/165'/2'"]);
    }

    #[test]
    fn invalid_mnemonic_is_reported() {
        let err = Wallet::from_mnemonic("not a mnemonic", "").err().unwrap();
        assert!(matches!(err, WalletError::Mnemonic(_)));
    }
}
