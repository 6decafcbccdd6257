use nanohd_crypto::MnemonicError;
use nanohd_types::{DecodeError, DerivationError, EncodeError, ParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),

    #[error("invalid derivation path: {0}")]
    Path(#[from] ParseError),

    #[error("key derivation failed: {0}")]
    Derivation(#[from] DerivationError),

    #[error("address encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("invalid address: {0}")]
    Address(#[from] DecodeError),

    #[error("configuration error: {0}")]
    Config(String),
}
