//! Wallet core library for nanohd.
//!
//! Glues the cryptographic core into the full pipeline:
//! mnemonic → seed → SLIP-0010 derivation → Ed25519 key pair → `nano_` address.

pub mod config;
pub mod error;
pub mod wallet;

pub use config::{OutputFormat, WalletConfig};
pub use error::WalletError;
pub use wallet::{Account, AccountReport, Wallet};
