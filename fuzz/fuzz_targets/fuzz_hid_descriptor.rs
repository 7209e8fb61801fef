//! Fuzzes `paccel_hid::parse_descriptor` with arbitrary byte sequences.
//!
//! The descriptor parser walks attacker-reachable bytes (a HID report
//! descriptor off the wire, at device bind time) and must never panic,
//! regardless of truncated items, bogus tag bytes, or bit widths that
//! don't fit the declared report.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_hid_descriptor
#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(layout) = paccel_hid::parse_descriptor(data) {
        // A successfully parsed layout must also survive extraction
        // against arbitrary (and possibly too-short) report bytes.
        let _ = layout.extract(data);
    }
});
