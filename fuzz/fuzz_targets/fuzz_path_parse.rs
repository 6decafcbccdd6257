#![no_main]

use libfuzzer_sys::fuzz_target;

use nanohd_types::DerivationPath;

// Parsing never panics, and every accepted path re-parses from its display form.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(path) = DerivationPath::parse(text) {
        let again = DerivationPath::parse(&path.to_string()).expect("display form must parse");
        assert_eq!(again, path);
    }
});
