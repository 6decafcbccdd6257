//! Account address type with `nano_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DecodeError;

/// Number of encoded characters after the prefix: 52 for the key, 8 for the checksum.
pub const ENCODED_LEN: usize = 60;

/// A Nano account address, always prefixed with `nano_` or the legacy `xrb_`.
///
/// Construction only checks the shape (prefix and length); checksum
/// verification lives with the codec in `nanohd-crypto`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NanoAddress(String);

impl NanoAddress {
    /// The prefix written on every encoded address.
    pub const PREFIX: &'static str = "nano_";

    /// Prefix still accepted when reading addresses.
    pub const LEGACY_PREFIX: &'static str = "xrb_";

    pub fn new(raw: impl Into<String>) -> Result<Self, DecodeError> {
        let s = raw.into();
        Self::encoded_part(&s)?;
        Ok(Self(s))
    }

    /// Strip the prefix and check that exactly 60 characters follow.
    ///
    /// Length is counted in characters, so a non-ASCII address reports the
    /// same length here as in the decoder.
    pub fn encoded_part(s: &str) -> Result<&str, DecodeError> {
        let encoded = Self::strip_prefix(s).ok_or(DecodeError::InvalidPrefix)?;
        let len = encoded.chars().count();
        if len != ENCODED_LEN {
            return Err(DecodeError::InvalidLength(len));
        }
        Ok(encoded)
    }

    /// Return the 60 encoded characters that follow either accepted prefix.
    pub fn strip_prefix(s: &str) -> Option<&str> {
        s.strip_prefix(Self::PREFIX)
            .or_else(|| s.strip_prefix(Self::LEGACY_PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NanoAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NanoAddress {
    type Error = DecodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<NanoAddress> for String {
    fn from(address: NanoAddress) -> Self {
        address.0
    }
}
