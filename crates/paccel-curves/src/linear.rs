//! The classic "linear" curve: a quadratic ramp in the exponent-two form
//! used by the original driver, with an optional symmetric output cap.

use paccel_fixed::Fixed64;

/// `sens(s) = 1 + accel * (s - offset)^2 / s`, clamped to `output_cap` when
/// that cap is positive. Returns `1` for `s <= offset` (the identity input).
#[must_use]
pub fn sensitivity(speed: Fixed64, accel: Fixed64, offset: Fixed64, output_cap: Fixed64) -> Fixed64 {
    let shifted = speed.sub(offset);
    if shifted.to_bits() <= 0 {
        return Fixed64::ONE;
    }

    let b = accel.mul(shifted).mul(shifted).div(speed);

    if output_cap.to_bits() > Fixed64::ZERO.to_bits() {
        let cap = output_cap.sub(Fixed64::ONE);
        let negative_cap = cap.to_bits() < 0;
        let magnitude = cap.abs();
        let clamped = if b.to_bits() > magnitude.to_bits() { magnitude } else { b };
        if negative_cap {
            Fixed64::ONE.sub(clamped)
        } else {
            Fixed64::ONE.add(clamped)
        }
    } else {
        Fixed64::ONE.add(b)
    }
}
