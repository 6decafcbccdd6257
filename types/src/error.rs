//! Error taxonomy shared across crates.
//!
//! Every failure is returned to the immediate caller; nothing here is
//! retried or recovered internally.

use thiserror::Error;

/// Failure to parse a textual derivation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid derivation path format: {0:?}")]
    InvalidFormat(String),

    #[error("derivation path segment out of range: {0}")]
    Overflow(String),
}

/// Failure while deriving key material from a seed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    #[error("non-hardened index {0}: only hardened keys are supported for Ed25519")]
    UnsupportedNonHardenedIndex(u32),

    #[error("HMAC-SHA512 failure: {0}")]
    HashFailure(String),
}

/// Failure while encoding a public key as an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidPublicKeyLength(usize),

    #[error("BLAKE2b checksum failure: {0}")]
    HashFailure(String),
}

/// Failure while decoding an address back into a public key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("address has an unknown prefix")]
    InvalidPrefix,

    #[error("invalid address length: expected 60 encoded characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid address character {0:?}")]
    InvalidCharacter(char),

    #[error("address padding bits are not zero")]
    InvalidPadding,

    #[error("address checksum mismatch")]
    InvalidChecksum,

    #[error("BLAKE2b checksum failure: {0}")]
    HashFailure(String),
}
