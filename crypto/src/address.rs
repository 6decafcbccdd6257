//! Nano account address encoding.
//!
//! Address format: `nano_` + 60 base32 characters. The first 52 encode the
//! public key (with 4 leading zero padding bits), the last 8 encode the
//! Blake2b-40 checksum of the key in little-endian order.
//!
//! The encoder walks a 37-byte virtual array (checksum bytes, then the
//! public key reversed) 5 bits at a time and fills the output from the end.

use nanohd_types::address::ENCODED_LEN;
use nanohd_types::{DecodeError, EncodeError, NanoAddress, PublicKey};

use crate::hash::{address_checksum, CHECKSUM_LEN};

/// Base32 alphabet (digits 0 and 2, letters l and v omitted).
const ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

const PUBLIC_KEY_LEN: usize = 32;

/// Bytes of the little-endian bit stream, rounded up: 60 chars * 5 bits = 300 bits.
const STREAM_LEN: usize = (ENCODED_LEN * 5).div_ceil(8);

/// The checksum followed by the public key in reverse byte order.
struct VirtualBytes<'a> {
    checksum: &'a [u8; CHECKSUM_LEN],
    public_key: &'a [u8],
}

impl VirtualBytes<'_> {
    /// Reads past the end yield 0; that only happens for the padding bits.
    fn get(&self, i: usize) -> u8 {
        if i < CHECKSUM_LEN {
            return self.checksum[i];
        }
        let j = i - CHECKSUM_LEN;
        if j < self.public_key.len() {
            self.public_key[self.public_key.len() - 1 - j]
        } else {
            0
        }
    }
}

/// Encode a 32-byte public key as a `nano_` address.
pub fn encode_address(public_key: &[u8]) -> Result<String, EncodeError> {
    if public_key.len() != PUBLIC_KEY_LEN {
        return Err(EncodeError::InvalidPublicKeyLength(public_key.len()));
    }
    let checksum =
        address_checksum(public_key).map_err(|e| EncodeError::HashFailure(e.to_string()))?;
    let bytes = VirtualBytes {
        checksum: &checksum,
        public_key,
    };

    let mut raw = [0u8; ENCODED_LEN];
    for k in 0..ENCODED_LEN {
        let i = (k / 8) * 5;
        let c = match k % 8 {
            0 => bytes.get(i) & 0b11111,
            1 => ((bytes.get(i) >> 5) & 0b00111) | ((bytes.get(i + 1) & 0b00011) << 3),
            2 => (bytes.get(i + 1) >> 2) & 0b11111,
            3 => ((bytes.get(i + 1) >> 7) & 0b00001) | ((bytes.get(i + 2) & 0b01111) << 1),
            4 => ((bytes.get(i + 2) >> 4) & 0b01111) | ((bytes.get(i + 3) & 0b00001) << 4),
            5 => (bytes.get(i + 3) >> 1) & 0b11111,
            6 => ((bytes.get(i + 3) >> 6) & 0b00011) | ((bytes.get(i + 4) & 0b00111) << 2),
            _ => (bytes.get(i + 4) >> 3) & 0b11111,
        };
        raw[ENCODED_LEN - 1 - k] = ALPHABET[c as usize];
    }

    let mut address = String::with_capacity(NanoAddress::PREFIX.len() + ENCODED_LEN);
    address.push_str(NanoAddress::PREFIX);
    address.extend(raw.iter().map(|&b| b as char));
    Ok(address)
}

/// Extract the public key from a `nano_` or `xrb_` address, verifying its checksum.
pub fn decode_address(address: &str) -> Result<PublicKey, DecodeError> {
    let encoded = NanoAddress::encoded_part(address)?;

    // Character k from the end carries bits 5k..5k+5 of the stream.
    let mut stream = [0u8; STREAM_LEN];
    for (k, ch) in encoded.chars().rev().enumerate() {
        let value = decode_char(ch)?;
        for bit in 0..5 {
            if (value >> bit) & 1 == 1 {
                let pos = 5 * k + bit;
                stream[pos / 8] |= 1 << (pos % 8);
            }
        }
    }

    let payload_len = CHECKSUM_LEN + PUBLIC_KEY_LEN;
    if stream[payload_len..].iter().any(|&b| b != 0) {
        return Err(DecodeError::InvalidPadding);
    }

    let mut public_key = [0u8; PUBLIC_KEY_LEN];
    for (j, byte) in public_key.iter_mut().enumerate() {
        *byte = stream[payload_len - 1 - j];
    }

    let expected =
        address_checksum(&public_key).map_err(|e| DecodeError::HashFailure(e.to_string()))?;
    if stream[..CHECKSUM_LEN] != expected {
        return Err(DecodeError::InvalidChecksum);
    }

    Ok(PublicKey(public_key))
}

/// Validate that an address string is well-formed and its checksum is correct.
pub fn validate_address(address: &str) -> bool {
    decode_address(address).is_ok()
}

fn decode_char(ch: char) -> Result<u8, DecodeError> {
    let value = if ch.is_ascii() {
        DECODE[ch as usize]
    } else {
        0xFF
    };
    if value == 0xFF {
        return Err(DecodeError::InvalidCharacter(ch));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keypair_from_seed;

    const NANO_VECTOR_KEY: &str =
        "C008B814A7D269A1FA3C6528B19201A24D797912DB9996FF02A1FF356E45552B";
    const NANO_VECTOR_ADDRESS: &str =
        "nano_3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7";
    const BURN_ADDRESS: &str =
        "nano_1111111111111111111111111111111111111111111111111111hifc8npp";

    fn vector_key() -> [u8; 32] {
        hex::decode(NANO_VECTOR_KEY).unwrap().try_into().unwrap()
    }

    #[test]
    fn encodes_published_vector() {
        assert_eq!(encode_address(&vector_key()).unwrap(), NANO_VECTOR_ADDRESS);
    }

    #[test]
    fn encodes_burn_address() {
        assert_eq!(encode_address(&[0u8; 32]).unwrap(), BURN_ADDRESS);
    }

    #[test]
    fn encodes_all_ones_key() {
        assert_eq!(
            encode_address(&[0xFF; 32]).unwrap(),
            "nano_3zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzc3yoon41"
        );
    }

    #[test]
    fn wrong_length_rejected() {
        for len in [0, 1, 31, 33, 64] {
            assert_eq!(
                encode_address(&vec![0u8; len]),
                Err(EncodeError::InvalidPublicKeyLength(len))
            );
        }
    }

    #[test]
    fn virtual_bytes_reverse_the_key() {
        let checksum = [1, 2, 3, 4, 5];
        let key: Vec<u8> = (10..42).collect();
        let bytes = VirtualBytes {
            checksum: &checksum,
            public_key: &key,
        };
        assert_eq!(bytes.get(0), 1);
        assert_eq!(bytes.get(4), 5);
        assert_eq!(bytes.get(5), 41);
        assert_eq!(bytes.get(36), 10);
        assert_eq!(bytes.get(37), 0);
        assert_eq!(bytes.get(39), 0);
    }

    #[test]
    fn decodes_published_vector() {
        assert_eq!(decode_address(NANO_VECTOR_ADDRESS).unwrap().0, vector_key());
        let legacy = NANO_VECTOR_ADDRESS.replacen("nano_", "xrb_", 1);
        assert_eq!(decode_address(&legacy).unwrap().0, vector_key());
    }

    #[test]
    fn decode_roundtrip() {
        let kp = keypair_from_seed(&[7u8; 32]);
        let addr = encode_address(kp.public.as_bytes()).unwrap();
        assert_eq!(decode_address(&addr).unwrap(), kp.public);
    }

    #[test]
    fn invalid_prefix_rejected() {
        let addr = NANO_VECTOR_ADDRESS.replacen("nano_", "ban_", 1);
        assert_eq!(decode_address(&addr), Err(DecodeError::InvalidPrefix));
    }

    #[test]
    fn invalid_checksum_rejected() {
        let mut bad = NANO_VECTOR_ADDRESS.to_string();
        let last = bad.pop().unwrap();
        bad.push(if last == '1' { '3' } else { '1' });
        assert_eq!(decode_address(&bad), Err(DecodeError::InvalidChecksum));
    }

    #[test]
    fn invalid_character_rejected() {
        let bad = NANO_VECTOR_ADDRESS.replacen('3', "0", 1);
        assert_eq!(decode_address(&bad), Err(DecodeError::InvalidCharacter('0')));
        let upper = NANO_VECTOR_ADDRESS.replacen('i', "I", 1);
        assert_eq!(decode_address(&upper), Err(DecodeError::InvalidCharacter('I')));
    }

    #[test]
    fn nonzero_padding_rejected() {
        // The first character may only encode 0 or 1 ('1' or '3').
        let bad = NANO_VECTOR_ADDRESS.replacen("nano_3", "nano_4", 1);
        assert_eq!(decode_address(&bad), Err(DecodeError::InvalidPadding));
    }

    #[test]
    fn length_error_matches_address_type() {
        let addr = format!("nano_{}é", "1".repeat(10));
        assert_eq!(decode_address(&addr), Err(DecodeError::InvalidLength(11)));
        assert_eq!(NanoAddress::new(addr), Err(DecodeError::InvalidLength(11)));
    }

    #[test]
    fn wrong_length_address_rejected() {
        assert_eq!(decode_address("nano_"), Err(DecodeError::InvalidLength(0)));
        assert!(!validate_address("nano_tooshort"));
        assert!(validate_address(BURN_ADDRESS));
    }
}
