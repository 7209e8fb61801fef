//! Fuzzes `paccel_fixed::Fixed64::from_decimal_str` with arbitrary
//! strings.
//!
//! This is the parser behind every live parameter write (`spec.md`
//! §4.2's "values stored as strings, parsed on each event"): a
//! misconfigured or malicious write through the parameter store's text
//! interface must degrade to a parse-noise skip, never a panic.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_decimal_parse
#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let parsed = paccel_fixed::Fixed64::from_decimal_str(text);
        // The parser always returns a value, never a Result; exercise
        // the reverse direction too so a round trip never panics.
        let _ = parsed.to_fixed_string(None);
    }
});
