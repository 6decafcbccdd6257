//! SLIP-0010 Ed25519 key derivation.
//!
//! Only hardened children exist for Ed25519: there is no public-key-only
//! child derivation on this curve.
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md

use hmac::{Hmac, Mac};
use nanohd_types::{is_hardened, DerivationError, DerivationPath, KeyMaterial};
use sha2::Sha512;
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// Derive the master key material: `HMAC-SHA512("ed25519 seed", seed)`.
pub fn master_key(seed: &[u8]) -> Result<KeyMaterial, DerivationError> {
    hmac_sha512(ED25519_CURVE, seed)
}

/// Derive one hardened child from its parent.
///
/// The HMAC message is `0x00 || parent key || index (big-endian)`, keyed by
/// the parent chain code.
pub fn derive_child(parent: &KeyMaterial, index: u32) -> Result<KeyMaterial, DerivationError> {
    if !is_hardened(index) {
        return Err(DerivationError::UnsupportedNonHardenedIndex(index));
    }

    let mut data = Zeroizing::new([0u8; 1 + 32 + 4]);
    data[1..33].copy_from_slice(parent.key());
    data[33..].copy_from_slice(&index.to_be_bytes());

    hmac_sha512(parent.chain_code(), &data[..])
}

/// Derive the key material at `path` from `seed`.
///
/// An empty path yields the master key material. Each step replaces the
/// previous (key, chain code) pair entirely.
pub fn derive(seed: &[u8], path: &DerivationPath) -> Result<KeyMaterial, DerivationError> {
    let master = master_key(seed)?;
    path.indices()
        .iter()
        .enumerate()
        .try_fold(master, |parent, (depth, &index)| {
            let child = derive_child(&parent, index)?;
            tracing::trace!(depth = depth + 1, index, "derived hardened child");
            Ok(child)
        })
}

fn hmac_sha512(key: &[u8], message: &[u8]) -> Result<KeyMaterial, DerivationError> {
    let mut mac =
        HmacSha512::new_from_slice(key).map_err(|e| DerivationError::HashFailure(e.to_string()))?;
    mac.update(message);

    let mut digest = Zeroizing::new([0u8; 64]);
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Ok(KeyMaterial::from_digest(&digest))
}
