//! The speed-echo endpoint (`spec.md` §4.7, C7): a read-only byte source
//! exposing the most recently computed `input_speed` as a big-endian,
//! fixed-width byte sequence.
//!
//! Every read is a single atomic load off [`paccel_speed::SpeedEstimator`]'s
//! lock-free echo cell (`spec.md` §5: "word-aligned load/store of the
//! fixed-point value is atomic at fixed-point width"), so a reader racing a
//! concurrent estimate always observes either the old or the new speed,
//! never a torn mixture. Readers are expected to be rare (UI refresh rate)
//! and this crate applies no rate limiting of its own.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, missing_debug_implementations)]

use paccel_fixed::{Fixed32, Fixed64};
use paccel_speed::SpeedEstimator;

/// Byte width of a [`Fixed64`] echo read (`W/8` for `W = 64`).
pub const WIDTH_BYTES_64: usize = 8;
/// Byte width of a [`Fixed32`] echo read (`W/8` for `W = 32`).
pub const WIDTH_BYTES_32: usize = 4;

/// Serialize a [`Fixed64`] speed to its big-endian wire form.
#[must_use]
pub fn encode64(speed: Fixed64) -> [u8; WIDTH_BYTES_64] {
    speed.to_bits().to_be_bytes()
}

/// Parse a big-endian [`Fixed64`] wire value back into a speed. Exposed for
/// test harnesses and host-side readers written in Rust; the wire consumer
/// described in `spec.md` §6 is typically a foreign UI process.
#[must_use]
pub fn decode64(bytes: [u8; WIDTH_BYTES_64]) -> Fixed64 {
    Fixed64::from_bits(i64::from_be_bytes(bytes))
}

/// Serialize a [`Fixed32`] speed to its big-endian wire form, for targets
/// using the narrower fixed-point width (`spec.md` §3's `Fixed32`).
#[must_use]
pub fn encode32(speed: Fixed32) -> [u8; WIDTH_BYTES_32] {
    speed.to_bits().to_be_bytes()
}

/// Parse a big-endian [`Fixed32`] wire value back into a speed.
#[must_use]
pub fn decode32(bytes: [u8; WIDTH_BYTES_32]) -> Fixed32 {
    Fixed32::from_bits(i32::from_be_bytes(bytes))
}

/// A read-only speed-echo endpoint (`spec.md` §6's "Echo endpoint"): each
/// successful read returns exactly `W/8` bytes, big-endian. Partial reads
/// are not supported — a reader either gets the full snapshot or nothing.
pub trait SpeedReader {
    /// Read the current speed as a big-endian [`Fixed64`]-width snapshot.
    fn read_speed(&self) -> [u8; WIDTH_BYTES_64];
}

impl SpeedReader for SpeedEstimator {
    fn read_speed(&self) -> [u8; WIDTH_BYTES_64] {
        encode64(self.last_speed())
    }
}
