#![no_main]

use libfuzzer_sys::fuzz_target;

// Decoding arbitrary text never panics; anything accepted re-encodes to the
// same 60 characters under the `nano_` prefix.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(public_key) = nanohd_crypto::decode_address(text) {
        let encoded = nanohd_crypto::encode_address(public_key.as_bytes()).unwrap();
        assert_eq!(&encoded[5..], &text[text.len() - 60..]);
    }
});
