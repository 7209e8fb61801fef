//! The four pure sensitivity curves selected by the acceleration core's
//! `curve` configuration: `no_accel`, `linear`, `natural`, `synchronous`.
//!
//! Every curve is a pure function `speed -> multiplier`. None allocates,
//! blocks, or panics; degenerate parameters (a zero `decay_rate`, a
//! `limit <= 1`, and so on) make the curve fall back to the identity
//! multiplier rather than dividing by zero. [`CurveArgs::sensitivity`]
//! additionally watches for [`paccel_fixed::Fixed64`]'s domain-error
//! sentinel leaking out of a curve (from an internal `ln`/`div`/`sqrt`)
//! and turns it into [`AccelFault::ArithmeticSentinel`] so the caller can
//! emit the unmodified original event instead of propagating a garbage
//! multiplier.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, missing_debug_implementations)]

mod linear;
mod natural;
mod no_accel;
mod synchronous;

use paccel_errors::{AccelFault, AccelResult};
use paccel_fixed::Fixed64;

/// Tagged configuration for exactly one sensitivity curve, matching
/// `spec.md`'s `CurveArgs` variant set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveArgs {
    /// `sens(s) == 1` everywhere; acceleration disabled.
    NoAccel,
    /// Quadratic ramp with an optional symmetric output cap.
    Linear {
        /// Ramp steepness.
        accel: Fixed64,
        /// Speed below which the curve is flat at `1` (identity input).
        offset: Fixed64,
        /// `0` disables the cap; otherwise clamps the multiplier's
        /// deviation from `1` to `|output_cap - 1|`.
        output_cap: Fixed64,
    },
    /// Smooth saturating ramp toward `limit`.
    Natural {
        /// Ramp decay rate.
        decay_rate: Fixed64,
        /// Speed below which the curve is flat at `1` (identity input).
        offset: Fixed64,
        /// Asymptotic ceiling multiplier.
        limit: Fixed64,
    },
    /// `tanh`-smoothed or linearly clamped sigmoid around `sync_speed`.
    Synchronous {
        /// Steepness of the transition.
        gamma: Fixed64,
        /// Activation smoothing; `0` selects a hard linear clamp.
        smooth: Fixed64,
        /// Asymptotic multiplier for fast motion (and its reciprocal for
        /// slow motion).
        motivity: Fixed64,
        /// Speed at which the curve crosses `1` (identity input).
        sync_speed: Fixed64,
    },
}

impl CurveArgs {
    /// Evaluate this curve at the given input speed.
    ///
    /// # Errors
    ///
    /// Returns [`AccelFault::ArithmeticSentinel`] if evaluating the curve
    /// produced [`Fixed64::SENTINEL`] (e.g. a `ln` of a non-positive
    /// intermediate, or a division by zero) instead of a finite
    /// multiplier.
    pub fn sensitivity(&self, speed: Fixed64) -> AccelResult<Fixed64> {
        let raw = match *self {
            CurveArgs::NoAccel => no_accel::sensitivity(speed),
            CurveArgs::Linear { accel, offset, output_cap } => linear::sensitivity(speed, accel, offset, output_cap),
            CurveArgs::Natural { decay_rate, offset, limit } => natural::sensitivity(speed, decay_rate, offset, limit),
            CurveArgs::Synchronous { gamma, smooth, motivity, sync_speed } => {
                synchronous::sensitivity(speed, gamma, smooth, motivity, sync_speed)
            }
        };

        if raw.is_sentinel() {
            Err(AccelFault::ArithmeticSentinel)
        } else {
            Ok(raw)
        }
    }

    /// The curve's identity input: the speed at which it returns exactly
    /// `1`, per `spec.md` §8.3.
    #[must_use]
    pub fn identity_input(&self) -> Fixed64 {
        match *self {
            CurveArgs::NoAccel => Fixed64::ZERO,
            CurveArgs::Linear { offset, .. } | CurveArgs::Natural { offset, .. } => offset,
            CurveArgs::Synchronous { sync_speed, .. } => sync_speed,
        }
    }
}
