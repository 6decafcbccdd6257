//! Blake2b hashing: the 40-bit address checksum and the 512-bit key expansion.

use blake2::digest::{Update, VariableOutput};
use blake2::{Blake2b512, Blake2bVar, Digest};
use thiserror::Error;

/// Length of the address checksum in bytes (40 bits).
pub const CHECKSUM_LEN: usize = 5;

/// The Blake2b hasher rejected its output size.
#[derive(Debug, Error)]
#[error("blake2b: {0}")]
pub struct ChecksumError(String);

/// Compute the unkeyed Blake2b-40 checksum of a public key.
pub fn address_checksum(data: &[u8]) -> Result<[u8; CHECKSUM_LEN], ChecksumError> {
    let mut hasher =
        Blake2bVar::new(CHECKSUM_LEN).map_err(|e| ChecksumError(e.to_string()))?;
    hasher.update(data);
    let mut checksum = [0u8; CHECKSUM_LEN];
    hasher
        .finalize_variable(&mut checksum)
        .map_err(|e| ChecksumError(e.to_string()))?;
    Ok(checksum)
}

/// Compute a 512-bit Blake2b hash of arbitrary data.
pub fn blake2b_512(data: &[u8]) -> [u8; 64] {
    let result = <Blake2b512 as Digest>::digest(data);
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}
