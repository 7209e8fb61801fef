//! Instantaneous pointer-speed estimation (`spec.md` §4.3, C3).
//!
//! Converts a `(dx, dy, dt_ms)` triple into a speed in device-units per
//! millisecond, publishing the result to a lock-free echo cell that
//! [`SpeedEstimator::last_speed`] (and, outside this crate, `paccel-echo`)
//! reads. Also owns the frametime-clamping semantics the acceleration core
//! applies before calling [`SpeedEstimator::estimate`]: a raw interval
//! below one quantum falls back to the last valid frametime, and any
//! interval over 100 ms is clamped to 100 ms, so a burst of near-zero
//! intervals or a long pause never produces an unbounded speed spike.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, missing_debug_implementations)]

use core::sync::atomic::{AtomicI64, Ordering};

use paccel_fixed::Fixed64;

/// Nanoseconds in one millisecond, used to convert a raw monotonic
/// interval into fixed-point milliseconds.
const NANOS_PER_MS: i64 = 1_000_000;

/// Below this raw interval (one nanosecond — the resolution quantum for
/// the 64-bit fixed-point width this crate commits to) the interval is
/// considered degenerate and the last valid frametime is substituted.
const DEGENERATE_QUANTUM_NS: i64 = 1;

/// Frametimes longer than this are clamped, per `spec.md` §4.3: a long
/// pause before the user starts moving again must not synthesize a huge
/// acceleration.
const FRAMETIME_CLAMP_MS: i64 = 100;

/// Derive a clamped frametime in fixed-point milliseconds from a raw
/// monotonic interval in nanoseconds.
///
/// - `raw_interval_ns < 1` (duplicate or out-of-order timestamps, common
///   during bursty URB delivery): substitutes `last_valid_dt_ms`.
/// - the converted interval `> 100 ms`: clamped to exactly `100`.
/// - otherwise: the interval converted to milliseconds.
#[must_use]
pub fn clamp_frametime(raw_interval_ns: i64, last_valid_dt_ms: Fixed64) -> Fixed64 {
    if raw_interval_ns < DEGENERATE_QUANTUM_NS {
        tracing::debug!(raw_interval_ns, "degenerate frametime, substituting last valid interval");
        return last_valid_dt_ms;
    }

    // Clamp in raw nanoseconds before converting to fixed-point: a pause
    // long enough that `raw_interval_ns << FRAC_BITS` would overflow i64
    // (past ~2.15s) must still land on the 100ms clamp, not wrap negative.
    let clamped_ns = raw_interval_ns.min(FRAMETIME_CLAMP_MS * NANOS_PER_MS);
    Fixed64::from_int(clamped_ns).div(Fixed64::from_int(NANOS_PER_MS))
}

/// Per-stream instantaneous speed estimator.
///
/// Holds the most recently published speed in a lock-free cell so the
/// speed-echo endpoint can read it without synchronizing with the hot
/// path; see `spec.md` §4.7 / §5 ("word-aligned load/store of the
/// fixed-point value is atomic at fixed-point width").
pub struct SpeedEstimator {
    last_speed_bits: AtomicI64,
}

impl Default for SpeedEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SpeedEstimator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpeedEstimator").field("last_speed", &self.last_speed()).finish()
    }
}

impl SpeedEstimator {
    /// A fresh estimator with a zero echoed speed.
    #[must_use]
    pub fn new() -> Self {
        Self { last_speed_bits: AtomicI64::new(0) }
    }

    /// Compute the instantaneous speed of the `(dx, dy)` displacement over
    /// `dt_ms`, publish it to the echo cell, and return it.
    ///
    /// If the displacement's squared magnitude overflows into the
    /// fixed-point sentinel range (so [`Fixed64::sqrt`] would return
    /// [`Fixed64::SENTINEL`]), this emits a debug note and returns zero
    /// rather than propagating the sentinel as a speed.
    pub fn estimate(&self, dx: Fixed64, dy: Fixed64, dt_ms: Fixed64) -> Fixed64 {
        let magnitude_sq = dx.mul(dx).add(dy.mul(dy));
        let distance = magnitude_sq.sqrt();

        let speed = if distance.is_sentinel() {
            tracing::debug!("input_speed: sqrt hit domain sentinel, reporting zero speed");
            Fixed64::ZERO
        } else {
            distance.div(dt_ms)
        };

        self.publish(speed);
        speed
    }

    /// The most recently published speed. Lock-free; may observe a value
    /// from a concurrent [`Self::estimate`] call that is still in
    /// progress, never a torn bit pattern (single atomic load).
    #[must_use]
    pub fn last_speed(&self) -> Fixed64 {
        Fixed64::from_bits(self.last_speed_bits.load(Ordering::Relaxed))
    }

    fn publish(&self, speed: Fixed64) {
        self.last_speed_bits.store(speed.to_bits(), Ordering::Relaxed);
    }
}
