#![no_main]
use libfuzzer_sys::fuzz_target;
use markseg::{normalize, tokenize_sentence};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(out) = tokenize_sentence(s) {
            assert_eq!(normalize(&out), out);
        }
    }
});
