//! Cryptographic core for nanohd.
//!
//! - **SLIP-0010** hardened-only Ed25519 derivation (HMAC-SHA512)
//! - **Blake2b** for the 40-bit address checksum and Nano's key expansion
//! - Address encoding with `nano_` prefix and Nano's base32 alphabet
//! - **BIP39** mnemonic to seed, the upstream input of a derivation

pub mod address;
pub mod hash;
pub mod keys;
pub mod mnemonic;
pub mod slip10;

pub use address::{decode_address, encode_address, validate_address};
pub use hash::{address_checksum, blake2b_512, ChecksumError, CHECKSUM_LEN};
pub use keys::{keypair_from_seed, public_from_private};
pub use mnemonic::{seed_from_mnemonic, MnemonicError};
pub use slip10::{derive, derive_child, master_key};
