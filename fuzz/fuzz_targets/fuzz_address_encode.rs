#![no_main]

use libfuzzer_sys::fuzz_target;

// Encoding accepts exactly 32-byte inputs and always decodes back.
fuzz_target!(|data: &[u8]| {
    match nanohd_crypto::encode_address(data) {
        Ok(address) => {
            assert_eq!(data.len(), 32);
            let decoded = nanohd_crypto::decode_address(&address).unwrap();
            assert_eq!(&decoded.0[..], data);
        }
        Err(_) => assert_ne!(data.len(), 32),
    }
});
