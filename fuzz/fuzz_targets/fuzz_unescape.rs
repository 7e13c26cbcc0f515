#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(out) = ctlproto::unescape_quoted(s) {
            assert!(out.chars().count() + 2 <= s.chars().count());
        }
    }
});
