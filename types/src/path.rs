//! Hierarchical derivation paths like `44'/165'/0'`.
//!
//! Grammar: one or more decimal segments separated by `/`, each optionally
//! suffixed with `'` to mark it hardened. The whole input must match; there
//! is no `m/` root marker, no leading or trailing slash and no empty segment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// Offset added to a segment value to mark it hardened (2^31).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// BIP44 purpose and Nano coin type (`44'/165'`).
pub const NANO_COIN_TYPE: u32 = 165;

/// Mark a raw segment value as hardened.
///
/// Values at or above 2^31 already carry the hardened bit and are returned as-is.
pub const fn harden(index: u32) -> u32 {
    index | HARDENED_OFFSET
}

/// Whether a stored index carries the hardened bit.
pub const fn is_hardened(index: u32) -> bool {
    index >= HARDENED_OFFSET
}

/// An ordered sequence of 32-bit child indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    /// Build a path from already-encoded indices (hardened bit included).
    pub fn new(indices: Vec<u32>) -> Self {
        Self(indices)
    }

    /// The empty path. Deriving it yields the master key material.
    pub fn master() -> Self {
        Self(Vec::new())
    }

    /// The standard Nano account path `44'/165'/<account>'`.
    pub fn nano_account(account: u32) -> Self {
        Self(vec![harden(44), harden(NANO_COIN_TYPE), harden(account)])
    }

    /// Parse a textual path.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::InvalidFormat(input.to_string()));
        }

        // The whole input must match the grammar before any value is range-checked.
        let segments = input
            .split('/')
            .map(split_segment)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ParseError::InvalidFormat(input.to_string()))?;

        segments
            .into_iter()
            .map(|(digits, hardened)| segment_index(digits, hardened))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Return a new path with one hardened child appended.
    pub fn child(&self, index: u32) -> Self {
        let mut indices = self.0.clone();
        indices.push(harden(index));
        Self(indices)
    }

    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position and value of the first non-hardened index, if any.
    pub fn first_non_hardened(&self) -> Option<(usize, u32)> {
        self.0
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, index)| !is_hardened(index))
    }
}

/// Split `digits'?` into its digits and hardened flag; `None` if the shape is wrong.
fn split_segment(segment: &str) -> Option<(&str, bool)> {
    let (digits, hardened) = match segment.strip_suffix('\'') {
        Some(digits) => (digits, true),
        None => (segment, false),
    };

    // Leading zeros are accepted ("007" is 7).
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((digits, hardened))
}

fn segment_index(digits: &str, hardened: bool) -> Result<u32, ParseError> {
    let overflow = || {
        let suffix = if hardened { "'" } else { "" };
        ParseError::Overflow(format!("{digits}{suffix}"))
    };

    let value: u32 = digits.parse().map_err(|_| overflow())?;
    if value >= HARDENED_OFFSET {
        return Err(overflow());
    }

    Ok(if hardened { value + HARDENED_OFFSET } else { value })
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            if is_hardened(index) {
                write!(f, "{}'", index - HARDENED_OFFSET)?;
            } else {
                write!(f, "{index}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
