//! The "synchronous" curve: rises through `1` at `sync_speed`, asymptoting
//! to `motivity` for fast motion and `1/motivity` for slow motion.

use paccel_fixed::Fixed64;

const SIGMA_LINEAR_THRESHOLD: i64 = 16;

/// `sens(sync_speed) == 1`; asymptotes to `motivity` above `sync_speed` and
/// to `1/motivity` below it. `smooth` selects between a hard linear clamp
/// (`smooth == 0`, or any value giving `sigma >= 16`) and a `tanh`-smoothed
/// activation.
#[must_use]
pub fn sensitivity(speed: Fixed64, gamma: Fixed64, smooth: Fixed64, motivity: Fixed64, sync_speed: Fixed64) -> Fixed64 {
    let lm = motivity.ln();
    let g = gamma.div(lm);
    let ls = sync_speed.ln();
    let m = Fixed64::ONE.div(motivity);
    let sixteen = Fixed64::from_int(SIGMA_LINEAR_THRESHOLD);
    let sigma = if smooth.to_bits() == 0 { sixteen } else { Fixed64::HALF.div(smooth) };

    if sigma.to_bits() >= sixteen.to_bits() {
        let v = g.mul(speed.ln().sub(ls));
        if v.to_bits() < -Fixed64::ONE.to_bits() {
            m
        } else if v.to_bits() > Fixed64::ONE.to_bits() {
            motivity
        } else {
            v.mul(lm).exp()
        }
    } else {
        if speed.to_bits() == sync_speed.to_bits() {
            return Fixed64::ONE;
        }
        let d = speed.ln().sub(ls);
        if d.to_bits() > 0 {
            let v = g.mul(d);
            let activation = v.mul(sigma).tanh().pow(Fixed64::ONE.div(sigma));
            lm.mul(activation).exp()
        } else {
            let v = (-g).mul(d);
            let activation = v.mul(sigma).tanh().pow(Fixed64::ONE.div(sigma));
            (-lm).mul(activation).exp()
        }
    }
}
