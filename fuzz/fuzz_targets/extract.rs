#![no_main]

use libfuzzer_sys::fuzz_target;
use nameof::{extract_identifier, is_identifier};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let bare = extract_identifier(s, false);
        assert!(bare.is_empty() || is_identifier(bare));

        let full = extract_identifier(s, true);
        assert!(full.starts_with(bare));
        assert_eq!(extract_identifier(full, true), full);
    }
});
