//! Property tests for curve continuity, monotonicity, and identity-input
//! behavior (`spec.md` §8.3, §8.4).

use paccel_curves::CurveArgs;
use paccel_errors::AccelResult;
use paccel_fixed::Fixed64;
use proptest::prelude::*;

fn fixed_in_range(lo: f64, hi: f64) -> impl Strategy<Value = Fixed64> {
    (lo..hi).prop_map(|v| Fixed64::from_decimal_str(&format!("{v:.6}")))
}

/// `Some` unless the curve hit a domain sentinel; lets property tests skip
/// the (rare, parameter-combination-dependent) sentinel case instead of
/// panicking on it.
fn finite(result: AccelResult<Fixed64>) -> Option<Fixed64> {
    result.ok()
}

proptest! {
    #[test]
    fn linear_is_monotonic_above_offset(
        accel in fixed_in_range(0.01, 2.0),
        offset in fixed_in_range(0.0, 5.0),
        s1 in fixed_in_range(5.1, 50.0),
        delta in fixed_in_range(0.01, 50.0),
    ) {
        let curve = CurveArgs::Linear { accel, offset, output_cap: Fixed64::ZERO };
        let s2 = s1 + delta;
        let (Some(sens1), Some(sens2)) = (finite(curve.sensitivity(s1)), finite(curve.sensitivity(s2))) else {
            return Ok(());
        };
        prop_assert!(sens1.to_bits() <= sens2.to_bits());
    }

    #[test]
    fn natural_is_monotonic_above_offset(
        decay_rate in fixed_in_range(0.01, 2.0),
        limit in fixed_in_range(1.01, 10.0),
        s1 in fixed_in_range(0.1, 50.0),
        delta in fixed_in_range(0.01, 50.0),
    ) {
        let curve = CurveArgs::Natural { decay_rate, offset: Fixed64::ZERO, limit };
        let s2 = s1 + delta;
        let (Some(sens1), Some(sens2)) = (finite(curve.sensitivity(s1)), finite(curve.sensitivity(s2))) else {
            return Ok(());
        };
        prop_assert!(sens1.to_bits() <= sens2.to_bits());
    }

    #[test]
    fn synchronous_is_monotonic_above_sync_speed(
        smooth in fixed_in_range(0.1, 3.0),
        motivity in fixed_in_range(1.1, 5.0),
        sync_speed in fixed_in_range(1.0, 10.0),
        delta1 in fixed_in_range(0.01, 20.0),
        delta2 in fixed_in_range(0.01, 20.0),
    ) {
        let curve = CurveArgs::Synchronous { gamma: Fixed64::ONE, smooth, motivity, sync_speed };
        let s1 = sync_speed + delta1;
        let s2 = s1 + delta2;
        let (Some(sens1), Some(sens2)) = (finite(curve.sensitivity(s1)), finite(curve.sensitivity(s2))) else {
            return Ok(());
        };
        prop_assert!(sens1.to_bits() <= sens2.to_bits());
    }

    #[test]
    fn every_curve_is_one_at_its_identity_input(
        accel in fixed_in_range(0.0, 2.0),
        decay_rate in fixed_in_range(0.01, 1.0),
        offset in fixed_in_range(0.0, 5.0),
        sync_speed in fixed_in_range(1.0, 10.0),
    ) {
        let no_accel = CurveArgs::NoAccel;
        if let Some(sens) = finite(no_accel.sensitivity(no_accel.identity_input())) {
            prop_assert_eq!(sens, Fixed64::ONE);
        }

        let linear = CurveArgs::Linear { accel, offset, output_cap: Fixed64::ZERO };
        if let Some(sens) = finite(linear.sensitivity(linear.identity_input())) {
            prop_assert_eq!(sens, Fixed64::ONE);
        }

        let natural = CurveArgs::Natural { decay_rate, offset, limit: Fixed64::from_decimal_str("1.5") };
        if let Some(sens) = finite(natural.sensitivity(natural.identity_input())) {
            prop_assert_eq!(sens, Fixed64::ONE);
        }

        let synchronous = CurveArgs::Synchronous {
            gamma: Fixed64::ONE,
            smooth: Fixed64::from_decimal_str("0.5"),
            motivity: Fixed64::from_decimal_str("1.5"),
            sync_speed,
        };
        if let Some(sens) = finite(synchronous.sensitivity(synchronous.identity_input())) {
            prop_assert_eq!(sens, Fixed64::ONE);
        }
    }
}
