//! Fundamental types for nanohd.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! derivation paths, key material, addresses, and the error taxonomy.

pub mod address;
pub mod error;
pub mod keys;
pub mod path;

pub use address::NanoAddress;
pub use error::{DecodeError, DerivationError, EncodeError, ParseError};
pub use keys::{KeyMaterial, KeyPair, PrivateKey, PublicKey};
pub use path::{harden, is_hardened, DerivationPath, HARDENED_OFFSET, NANO_COIN_TYPE};
