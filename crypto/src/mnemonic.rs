//! BIP39 mnemonic to seed conversion.
//!
//! The mnemonic checksum is validated before the seed is stretched
//! (PBKDF2-HMAC-SHA512, salt `"mnemonic" + passphrase`, 2048 rounds).

use bip39::Mnemonic;
use thiserror::Error;
use zeroize::Zeroizing;

/// Errors arising from mnemonic operations.
#[derive(Debug, Error)]
pub enum MnemonicError {
    #[error("invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),
}

/// Turn a BIP39 mnemonic and optional passphrase into a 64-byte seed.
///
/// The passphrase is used as given; callers passing non-ASCII text should
/// NFKD-normalize it first.
pub fn seed_from_mnemonic(
    mnemonic: &str,
    passphrase: &str,
) -> Result<Zeroizing<[u8; 64]>, MnemonicError> {
    let mnemonic = Mnemonic::parse_normalized(mnemonic)
        .map_err(|e| MnemonicError::InvalidMnemonic(e.to_string()))?;
    tracing::debug!(words = mnemonic.word_count(), "mnemonic accepted");
    Ok(Zeroizing::new(mnemonic.to_seed_normalized(passphrase)))
}
