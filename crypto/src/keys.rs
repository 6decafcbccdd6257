//! Ed25519 key generation, Nano flavour.
//!
//! Nano's Ed25519 expands the 32-byte secret seed with Blake2b-512 where
//! RFC 8032 uses SHA-512. Everything after the expansion (clamping, scalar
//! multiplication, point encoding) is standard Ed25519.

use ed25519_dalek::hazmat::ExpandedSecretKey;
use ed25519_dalek::VerifyingKey;
use nanohd_types::{KeyPair, PrivateKey, PublicKey};
use zeroize::Zeroizing;

use crate::hash::blake2b_512;

fn expand(seed: &[u8; 32]) -> ExpandedSecretKey {
    let expanded = Zeroizing::new(blake2b_512(seed));
    ExpandedSecretKey::from_bytes(&expanded)
}

/// Derive the public key from a private key.
pub fn public_from_private(private: &PrivateKey) -> PublicKey {
    let verifying_key = VerifyingKey::from(&expand(private.as_bytes()));
    PublicKey(verifying_key.to_bytes())
}

/// Derive a key pair from a 32-byte seed (deterministic).
///
/// The seed is typically the key half of SLIP-0010 key material.
pub fn keypair_from_seed(seed: &[u8; 32]) -> KeyPair {
    let private = PrivateKey(*seed);
    KeyPair {
        public: public_from_private(&private),
        private,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex32(s: &str) -> [u8; 32] {
        hex::decode(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn matches_published_nano_key() {
        // Account 0 of the all-zero Nano wallet seed.
        let private = hex32("9F0E444C69F77A49BD0BE89DB92C38FE713E0963165CCA12FAF5712D7657120F");
        let kp = keypair_from_seed(&private);
        assert_eq!(
            kp.public.0,
            hex32("C008B814A7D269A1FA3C6528B19201A24D797912DB9996FF02A1FF356E45552B")
        );
        assert_eq!(kp.private.as_bytes(), &private);
    }

    #[test]
    fn differs_from_sha512_ed25519() {
        let seed = [42u8; 32];
        let standard = ed25519_dalek::SigningKey::from_bytes(&seed).verifying_key();
        assert_ne!(keypair_from_seed(&seed).public.0, standard.to_bytes());
    }

    #[test]
    fn keypair_from_seed_deterministic() {
        let seed = [42u8; 32];
        let kp1 = keypair_from_seed(&seed);
        let kp2 = keypair_from_seed(&seed);
        assert_eq!(kp1.public, kp2.public);
        assert_eq!(kp1.private.0, kp2.private.0);
    }

    #[test]
    fn different_seeds_produce_different_keys() {
        let kp1 = keypair_from_seed(&[1u8; 32]);
        let kp2 = keypair_from_seed(&[2u8; 32]);
        assert_ne!(kp1.public, kp2.public);
    }
}
