//! The "natural" curve: a smooth saturating ramp from `1` at `offset`
//! toward `limit` as speed grows without bound.

use paccel_fixed::Fixed64;

/// `sens(s) = (L * (exp(a*(offset-s))/a - (offset-s)) + C) / s + 1` where
/// `L = limit - 1`, `a = decay_rate / |L|`, `C = -L / a`.
///
/// Short-circuits to `1` when `s <= offset`, `limit <= 1`, or
/// `decay_rate <= 0` — the three degenerate-parameter guards the curve
/// must honor before it is safe to divide by `a`.
#[must_use]
pub fn sensitivity(speed: Fixed64, decay_rate: Fixed64, offset: Fixed64, limit: Fixed64) -> Fixed64 {
    if speed.to_bits() <= offset.to_bits() || limit.to_bits() <= Fixed64::ONE.to_bits() || decay_rate.to_bits() <= 0 {
        return Fixed64::ONE;
    }

    let l = limit.sub(Fixed64::ONE);
    let a = decay_rate.div(l.abs());
    let c = (-l).div(a);

    let offset_minus_speed = offset.sub(speed);
    let ramp = l
        .mul(a.mul(offset_minus_speed).exp().div(a).sub(offset_minus_speed))
        .add(c);

    ramp.div(speed).add(Fixed64::ONE)
}
