//! The acceleration core (`spec.md` §4.5, C5): the per-event orchestrator
//! that rotates, DPI-normalizes, estimates speed, queries the configured
//! curve, and carries fractional residue across events.
//!
//! [`StreamState`] is the only mutable state this crate owns, and it is
//! strictly per intercepted input stream — never shared, never locked
//! (`spec.md` §5). [`accelerate`] never allocates, never blocks, and
//! completes in bounded time proportional to one event.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, missing_debug_implementations)]

use paccel_curves::CurveArgs;
use paccel_errors::{AccelFault, AccelResult};
use paccel_fixed::{Fixed64, Vector};
use paccel_speed::{SpeedEstimator, clamp_frametime};

/// Normalizing reference DPI the core scales every device to before
/// feeding its speed to a curve, per `spec.md` §4.2's `INPUT_DPI` row.
const REFERENCE_DPI: i64 = 1000;

/// The record passed to [`accelerate`] on every event: everything
/// [`paccel_params`](https://docs.rs/paccel-params) reads from the
/// parameter store and [`paccel_curves::CurveArgs`] needed to evaluate a
/// sensitivity multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelArgs {
    /// Global post-curve multiplier.
    pub sens_mult: Fixed64,
    /// `Y` sensitivity = `X` sensitivity * this.
    pub yx_ratio: Fixed64,
    /// Device's reported DPI; normalized to [`REFERENCE_DPI`] before the
    /// curve sees a speed.
    pub input_dpi: Fixed64,
    /// Rotation applied before acceleration, in degrees.
    pub angle_rotation_deg: Fixed64,
    /// The selected sensitivity curve and its parameters.
    pub curve: CurveArgs,
}

impl AccelArgs {
    /// Accelerations with no rotation, 1:1 DPI, and a `1000`-DPI-relative
    /// device, matching the identity-at-rest configuration described in
    /// `spec.md` §8.2.
    #[must_use]
    pub fn identity(curve: CurveArgs) -> Self {
        Self {
            sens_mult: Fixed64::ONE,
            yx_ratio: Fixed64::ONE,
            input_dpi: Fixed64::from_int(REFERENCE_DPI),
            angle_rotation_deg: Fixed64::ZERO,
            curve,
        }
    }
}

/// Per-stream residue and frametime state (`spec.md` §3's "Per-stream
/// residue state" and "Frametime state"). One instance per intercepted
/// input stream; never shared across streams, never read outside
/// [`accelerate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamState {
    carry: Vector<Fixed64>,
    last_timestamp_ns: Option<i64>,
    last_dt_ms: Fixed64,
}

impl Default for StreamState {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamState {
    /// Fresh per-stream state: zero carry, no previous timestamp, a
    /// 1 ms fallback frametime.
    #[must_use]
    pub fn new() -> Self {
        Self { carry: Vector::new(Fixed64::ZERO, Fixed64::ZERO), last_timestamp_ns: None, last_dt_ms: Fixed64::ONE }
    }

    /// The fractional residue carried into the next event on each axis.
    #[must_use]
    pub fn carry(&self) -> Vector<Fixed64> {
        self.carry
    }
}

/// Rotate, DPI-normalize, estimate speed, query the curve, and quantize a
/// single event's `(x, y)` integer deltas in place.
///
/// `now_ns` is the host's monotonic clock reading for this event, in
/// nanoseconds; the core never reads the clock itself (no hidden syscalls
/// on the hot path — the host supplies the timestamp it already has from
/// its event-delivery callback).
///
/// # Errors
///
/// Returns [`AccelFault::ArithmeticSentinel`] if the configured curve hit
/// a domain sentinel for this event's speed. On that path `x` and `y` are
/// left untouched (the caller, `paccel-editor`, is expected to emit the
/// original unmodified event) and the stream's residue/frametime state is
/// *not* advanced, so the next event is unaffected.
pub fn accelerate(state: &mut StreamState, x: &mut i32, y: &mut i32, now_ns: i64, args: &AccelArgs, estimator: &SpeedEstimator) -> AccelResult<()> {
    let raw_interval_ns = match state.last_timestamp_ns {
        Some(prev) => now_ns.saturating_sub(prev),
        None => 0,
    };
    let dt_ms = clamp_frametime(raw_interval_ns, state.last_dt_ms);

    let mut delta = Vector::new(Fixed64::from_int(i64::from(*x)), Fixed64::from_int(i64::from(*y)));

    if args.angle_rotation_deg.to_bits() != 0 {
        delta = rotate(delta, args.angle_rotation_deg);
    }

    delta = normalize_dpi(delta, args.input_dpi);

    let speed = estimator.estimate(delta.x, delta.y, dt_ms);
    let sens_x = args.curve.sensitivity(speed)?.mul(args.sens_mult);
    let sens_y = sens_x.mul(args.yx_ratio);

    let out_x = delta.x.mul(sens_x).add(state.carry.x);
    let out_y = delta.y.mul(sens_y).add(state.carry.y);

    let quantized_x = out_x.to_int_trunc();
    let quantized_y = out_y.to_int_trunc();

    state.carry = Vector::new(out_x.sub(Fixed64::from_int(quantized_x)), out_y.sub(Fixed64::from_int(quantized_y)));
    state.last_dt_ms = dt_ms;
    state.last_timestamp_ns = Some(now_ns);

    *x = quantized_x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    *y = quantized_y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    Ok(())
}

/// Rotate a delta vector by `angle_deg` degrees (counter-clockwise),
/// computing `cos`/`sin` once and applying the standard 2D rotation
/// matrix, per `spec.md` §4.5 step 4.
fn rotate(delta: Vector<Fixed64>, angle_deg: Fixed64) -> Vector<Fixed64> {
    let theta = angle_deg.to_radians();
    let (sin_theta, cos_theta) = (theta.sin(), theta.cos());
    Vector::new(
        delta.x.mul(cos_theta).sub(delta.y.mul(sin_theta)),
        delta.x.mul(sin_theta).add(delta.y.mul(cos_theta)),
    )
}

/// Scale a delta vector so a device reporting at `input_dpi` is expressed
/// in units relative to [`REFERENCE_DPI`], per `spec.md` §4.5 step 5.
fn normalize_dpi(delta: Vector<Fixed64>, input_dpi: Fixed64) -> Vector<Fixed64> {
    let factor = Fixed64::from_int(REFERENCE_DPI).div(input_dpi);
    Vector::new(delta.x.mul(factor), delta.y.mul(factor))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fx(s: &str) -> Fixed64 {
        Fixed64::from_decimal_str(s)
    }

    fn approx(a: Fixed64, b: f64, eps: f64) -> bool {
        let v = a.to_bits() as f64 / (1i64 << Fixed64::FRAC_BITS) as f64;
        (v - b).abs() < eps
    }

    #[test]
    fn identity_at_rest_scenario_s1() {
        // spec.md S1: no_accel, identity scalars, (5, 0, 1ms) -> (5, 0), carry 0.
        let mut state = StreamState::new();
        let estimator = SpeedEstimator::new();
        let args = AccelArgs::identity(CurveArgs::NoAccel);
        let (mut x, mut y) = (5, 0);
        accelerate(&mut state, &mut x, &mut y, 1_000_000, &args, &estimator).unwrap();
        assert_eq!((x, y), (5, 0));
        assert_eq!(state.carry(), Vector::new(Fixed64::ZERO, Fixed64::ZERO));
    }

    #[test]
    fn residue_carries_across_events_scenario_s2() {
        // spec.md S2: sens_mult=0.5, (1,0,1ms) twice -> (0,0) carry .5 then (1,0) carry 0.
        let mut state = StreamState::new();
        let estimator = SpeedEstimator::new();
        let args = AccelArgs {
            sens_mult: fx("0.5"),
            yx_ratio: Fixed64::ONE,
            input_dpi: Fixed64::from_int(1000),
            angle_rotation_deg: Fixed64::ZERO,
            curve: CurveArgs::Linear { accel: Fixed64::ZERO, offset: Fixed64::ZERO, output_cap: Fixed64::ZERO },
        };

        let (mut x, mut y) = (1, 0);
        accelerate(&mut state, &mut x, &mut y, 1_000_000, &args, &estimator).unwrap();
        assert_eq!((x, y), (0, 0));
        assert_eq!(state.carry().x, fx("0.5"));

        let (mut x, mut y) = (1, 0);
        accelerate(&mut state, &mut x, &mut y, 2_000_000, &args, &estimator).unwrap();
        assert_eq!((x, y), (1, 0));
        assert_eq!(state.carry().x, Fixed64::ZERO);
    }

    #[test]
    fn linear_curve_scenario_s3() {
        let mut state = StreamState::new();
        let estimator = SpeedEstimator::new();
        let args = AccelArgs {
            sens_mult: Fixed64::ONE,
            yx_ratio: Fixed64::ONE,
            input_dpi: Fixed64::from_int(1000),
            angle_rotation_deg: Fixed64::ZERO,
            curve: CurveArgs::Linear { accel: fx("0.3"), offset: fx("2"), output_cap: fx("2") },
        };
        let (mut x, mut y) = (10, 0);
        accelerate(&mut state, &mut x, &mut y, 1_000_000, &args, &estimator).unwrap();
        assert_eq!((x, y), (20, 0));
    }

    #[test]
    fn rotation_is_isometry_scenario_s4() {
        // spec.md S4: angle=90, no_accel, (3,0,1ms) -> (0,3), up to the
        // polynomial sin/cos approximation's error (exact cos(90deg) is
        // zero by construction; sin(90deg) carries a small residual).
        let mut state = StreamState::new();
        let estimator = SpeedEstimator::new();
        let args = AccelArgs::identity(CurveArgs::NoAccel);
        let args = AccelArgs { angle_rotation_deg: fx("90"), ..args };
        let (mut x, mut y) = (3, 0);
        accelerate(&mut state, &mut x, &mut y, 1_000_000, &args, &estimator).unwrap();

        let exact_x = Fixed64::from_int(i64::from(x)).add(state.carry().x);
        let exact_y = Fixed64::from_int(i64::from(y)).add(state.carry().y);
        assert_eq!(x, 0);
        assert!(approx(exact_x, 0.0, 1e-3));
        assert!(approx(exact_y, 3.0, 1e-3));
    }

    #[test]
    fn natural_curve_guard_scenario_s5() {
        let mut state = StreamState::new();
        let estimator = SpeedEstimator::new();
        let args = AccelArgs {
            sens_mult: Fixed64::ONE,
            yx_ratio: Fixed64::ONE,
            input_dpi: Fixed64::from_int(1000),
            angle_rotation_deg: Fixed64::ZERO,
            curve: CurveArgs::Natural { decay_rate: fx("0.1"), offset: Fixed64::ZERO, limit: fx("1.5") },
        };
        let (mut x, mut y) = (0, 0);
        accelerate(&mut state, &mut x, &mut y, 1_000_000, &args, &estimator).unwrap();
        assert_eq!((x, y), (0, 0));
    }

    #[test]
    fn yx_ratio_scenario_s6() {
        let mut state = StreamState::new();
        let estimator = SpeedEstimator::new();
        let args = AccelArgs {
            sens_mult: Fixed64::ONE,
            yx_ratio: fx("2"),
            input_dpi: Fixed64::from_int(1000),
            angle_rotation_deg: Fixed64::ZERO,
            curve: CurveArgs::NoAccel,
        };
        let (mut x, mut y) = (4, 3);
        accelerate(&mut state, &mut x, &mut y, 1_000_000, &args, &estimator).unwrap();
        assert_eq!((x, y), (4, 6));
    }

    #[test]
    fn dpi_normalization_halves_speed_when_dpi_doubles() {
        let estimator_a = SpeedEstimator::new();
        let estimator_b = SpeedEstimator::new();
        let mut state_a = StreamState::new();
        let mut state_b = StreamState::new();

        let args_a = AccelArgs { input_dpi: Fixed64::from_int(1000), ..AccelArgs::identity(CurveArgs::NoAccel) };
        let args_b = AccelArgs { input_dpi: Fixed64::from_int(2000), ..AccelArgs::identity(CurveArgs::NoAccel) };

        let (mut xa, mut ya) = (100, 0);
        let (mut xb, mut yb) = (100, 0);
        accelerate(&mut state_a, &mut xa, &mut ya, 1_000_000, &args_a, &estimator_a).unwrap();
        accelerate(&mut state_b, &mut xb, &mut yb, 1_000_000, &args_b, &estimator_b).unwrap();

        assert!(approx(estimator_b.last_speed(), estimator_a.last_speed().to_bits() as f64 / 2.0 / (1i64 << Fixed64::FRAC_BITS) as f64, 1e-3));
    }

    #[test]
    fn degenerate_dpi_does_not_panic_and_no_accel_still_succeeds() {
        // A zero input_dpi is a misconfiguration, not a curve-domain
        // error: no_accel ignores its speed argument entirely, so this
        // must still succeed rather than surface a fault.
        let mut state = StreamState::new();
        let estimator = SpeedEstimator::new();
        let args = AccelArgs { input_dpi: Fixed64::ZERO, ..AccelArgs::identity(CurveArgs::NoAccel) };
        let (mut x, mut y) = (10, 0);
        let result = accelerate(&mut state, &mut x, &mut y, 1_000_000, &args, &estimator);
        assert!(result.is_ok(), "no_accel never rejects a speed, sentinel or not: {result:?}");
    }

    #[test]
    fn residue_carry_never_reaches_a_full_unit() {
        // Truncation toward zero always leaves a remainder strictly
        // smaller in magnitude than one whole unit, by construction.
        let mut state = StreamState::new();
        let estimator = SpeedEstimator::new();
        let args = AccelArgs {
            sens_mult: fx("1.3"),
            yx_ratio: Fixed64::ONE,
            input_dpi: Fixed64::from_int(1000),
            angle_rotation_deg: Fixed64::ZERO,
            curve: CurveArgs::NoAccel,
        };

        let mut timestamp_ns = 1_000_000i64;
        for step in 0..200i32 {
            let (mut x, mut y) = (step % 7 - 3, (step % 5) - 2);
            accelerate(&mut state, &mut x, &mut y, timestamp_ns, &args, &estimator).unwrap();
            assert!(state.carry().x.abs().to_bits() < Fixed64::ONE.to_bits());
            assert!(state.carry().y.abs().to_bits() < Fixed64::ONE.to_bits());
            timestamp_ns += 1_000_000;
        }
    }
}
