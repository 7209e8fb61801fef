//! Allocation-free Q-format fixed-point arithmetic.
//!
//! This crate replaces floating point in the pointer-acceleration hot path
//! with signed Q-format integers: a `W`-bit signed integer interpreted as
//! `raw * 2^-f` where `f = W/2`. Two widths are provided:
//!
//! - [`Fixed64`] — Q32.32 (64-bit storage, 32 fraction bits). The default
//!   width for 64-bit targets.
//! - [`Fixed32`] — Q16.16 (32-bit storage, 16 fraction bits). Useful on
//!   targets where 128-bit widening is unavailable or expensive.
//!
//! Every routine here is callable without heap allocation (aside from
//! [`Fixed64::to_fixed_string`]/[`Fixed32::to_fixed_string`], which are
//! debug/formatting conveniences, not hot-path operations) and without
//! blocking.
//!
//! # Sentinel values
//!
//! [`sqrt`](Fixed64::sqrt), [`div`](Fixed64::div), and [`ln`](Fixed64::ln)
//! return a sentinel value (all raw bits set, i.e. raw `-1`) rather than a
//! `Result` on domain errors (negative sqrt input, division by zero,
//! non-positive ln input), matching the hot-path contract: no allocation,
//! no branch to an error type wide enough to need one. Use
//! [`is_sentinel`](Fixed64::is_sentinel) to detect it, or the
//! `checked_*` wrappers for an `Option`-based API.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, missing_debug_implementations)]

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

macro_rules! define_fixed {
    (
        $(#[$meta:meta])*
        $name:ident, $repr:ty, $wide:ty, $frac_bits:expr, $default_dec:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name($repr);

        impl $name {
            /// Number of fraction bits (`f` in `QW.f` notation).
            pub const FRAC_BITS: u32 = $frac_bits;
            /// Total storage width in bits.
            pub const BITS: u32 = <$repr>::BITS;
            /// Mask selecting the fractional bits of a raw value.
            pub const FRAC_MASK: $repr = (1 as $repr << $frac_bits) - 1;

            /// The value `0`.
            pub const ZERO: Self = Self(0);
            /// The value `1`.
            pub const ONE: Self = Self(1 << $frac_bits);
            /// The value `2`.
            pub const TWO: Self = Self(2 << $frac_bits);
            /// The value `0.5`.
            pub const HALF: Self = Self(1 << ($frac_bits - 1));

            /// Sentinel returned by [`Self::div`], [`Self::sqrt`], and
            /// [`Self::ln`] on domain errors: every raw bit set (raw `-1`).
            pub const SENTINEL: Self = Self(-1);

            /// The constant `pi`, to full fixed-point precision.
            pub const PI: Self = Self(Self::ratio(31_415_926_535_897_932_384, 10_000_000_000_000_000_000));
            /// `2 * pi`.
            pub const TWO_PI: Self = Self(Self::ratio(62_831_853_071_795_864_769, 10_000_000_000_000_000_000));
            /// `pi / 2`.
            pub const HALF_PI: Self = Self(Self::ratio(15_707_963_267_948_966_192, 10_000_000_000_000_000_000));
            const LN2: Self = Self(Self::ratio(6_931_471_805_599_453_094, 10_000_000_000_000_000_000));
            const LN2_INV: Self = Self(Self::ratio(14_426_950_408_889_634_074, 10_000_000_000_000_000_000));

            const EXP_P0: Self = Self(Self::ratio(166_666_666_666_660_190, 1_000_000_000_000_000_000_000));
            const EXP_P1: Self = Self(Self::ratio(-2_777_777_777_701_559_338, 1_000_000_000_000_000_000_000_000));
            const EXP_P2: Self = Self(Self::ratio(66_137_563_214_379_343, 1_000_000_000_000_000_000_000_000_000));
            const EXP_P3: Self = Self(Self::ratio(-165_339_022_054_652_515_390, 1_000_000_000_000_000_000_000_000_000_000_000));
            const EXP_P4: Self = Self(Self::ratio(4_138_136_797_057_238_460_390, 100_000_000_000_000_000_000_000_000_000_000_000_000));

            const LG0: Self = Self(Self::ratio(666_666_666_666_673_513, 1_000_000_000_000_000_000));
            const LG1: Self = Self(Self::ratio(399_999_999_994_094_190, 1_000_000_000_000_000_000));
            const LG2: Self = Self(Self::ratio(285_714_287_436_623_914, 1_000_000_000_000_000_000));
            const LG3: Self = Self(Self::ratio(222_221_984_321_497_839, 1_000_000_000_000_000_000));
            const LG4: Self = Self(Self::ratio(181_835_721_616_180_501, 1_000_000_000_000_000_000));
            const LG5: Self = Self(Self::ratio(153_138_376_992_093_733, 1_000_000_000_000_000_000));
            const LG6: Self = Self(Self::ratio(147_981_986_051_165_859, 1_000_000_000_000_000_000));

            const SIN_K0: Self = Self(Self::ratio(761, 100_000));
            const SIN_K1: Self = Self(Self::ratio(16_605, 100_000));

            /// Fold a `numerator / denominator` rational constant into raw
            /// fixed-point bits at compile time (no floating point involved).
            const fn ratio(numerator: i128, denominator: i128) -> $repr {
                (((numerator * (1i128 << $frac_bits)) / denominator) as $repr)
            }

            /// Build a fixed-point value from a raw bit pattern.
            #[must_use]
            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            /// The raw bit pattern backing this value.
            #[must_use]
            pub const fn to_bits(self) -> $repr {
                self.0
            }

            /// Lift an integer into fixed-point.
            #[must_use]
            pub fn from_int(i: i64) -> Self {
                Self((((i as $wide) << $frac_bits) as $repr))
            }

            /// `true` if this value is the domain-error sentinel (raw `-1`).
            #[must_use]
            pub const fn is_sentinel(self) -> bool {
                self.0 == -1
            }

            /// Absolute value.
            #[must_use]
            pub fn abs(self) -> Self {
                if self.0 < 0 { Self(-self.0) } else { self }
            }

            /// Wrapping add. Debug builds assert the addition did not
            /// actually overflow; release builds wrap silently.
            #[must_use]
            pub fn add(self, rhs: Self) -> Self {
                debug_assert!(
                    self.0.checked_add(rhs.0).is_some(),
                    "fixed-point addition overflowed"
                );
                Self(self.0.wrapping_add(rhs.0))
            }

            /// Wrapping subtract; see [`Self::add`] for the overflow contract.
            #[must_use]
            pub fn sub(self, rhs: Self) -> Self {
                debug_assert!(
                    self.0.checked_sub(rhs.0).is_some(),
                    "fixed-point subtraction overflowed"
                );
                Self(self.0.wrapping_sub(rhs.0))
            }

            /// Multiply: widen to `2W` bits, shift right by `f`, narrow.
            #[must_use]
            pub fn mul(self, rhs: Self) -> Self {
                let wide = (self.0 as $wide) * (rhs.0 as $wide);
                Self((wide >> $frac_bits) as $repr)
            }

            /// Divide: widen the numerator left by `f` bits before the
            /// integer division. Returns [`Self::SENTINEL`] if `rhs` is
            /// zero; callers must check via [`Self::is_sentinel`] or use
            /// [`Self::checked_div`].
            #[must_use]
            pub fn div(self, rhs: Self) -> Self {
                if rhs.0 == 0 {
                    return Self::SENTINEL;
                }
                let wide = (self.0 as $wide) << $frac_bits;
                Self((wide / (rhs.0 as $wide)) as $repr)
            }

            /// [`Self::div`], but `None` on division by zero instead of a
            /// sentinel value.
            #[must_use]
            pub fn checked_div(self, rhs: Self) -> Option<Self> {
                if rhs.0 == 0 { None } else { Some(self.div(rhs)) }
            }

            /// Square root. Returns [`Self::SENTINEL`] for negative inputs.
            /// Monotonic non-decreasing on non-negative inputs.
            #[must_use]
            pub fn sqrt(self) -> Self {
                if self.0 < 0 {
                    return Self::SENTINEL;
                }
                if self.0 == 0 || self == Self::ONE {
                    return self;
                }

                let mut iter = $frac_bits;
                if self.0 > Self::ONE.0 {
                    let mut s = self.0;
                    iter = 0;
                    while s > 0 {
                        s >>= 2;
                        iter += 1;
                    }
                }

                let mut l = (self.0 >> 1) + 1;
                for _ in 0..iter {
                    l = (l + self.div(Self(l)).0) >> 1;
                }
                Self(l)
            }

            /// [`Self::sqrt`], but `None` for negative inputs.
            #[must_use]
            pub fn checked_sqrt(self) -> Option<Self> {
                if self.0 < 0 { None } else { Some(self.sqrt()) }
            }

            /// `e^x`, via range reduction to `x = k*ln2 + r` and a degree-5
            /// minimax polynomial on `r^2`.
            #[must_use]
            pub fn exp(self) -> Self {
                if self.0 == 0 {
                    return Self::ONE;
                }

                let xabs = self.abs();
                let mut k = xabs.mul(Self::LN2_INV).add(Self::HALF);
                k.0 &= !Self::FRAC_MASK;
                if self.0 < 0 {
                    k = Self(-k.0);
                }

                let mut fp = self.sub(k.mul(Self::LN2));
                let z = fp.mul(fp);
                let r = Self::TWO.add(z.mul(
                    Self::EXP_P0.add(z.mul(
                        Self::EXP_P1.add(z.mul(Self::EXP_P2.add(z.mul(Self::EXP_P3.add(z.mul(Self::EXP_P4)))))),
                    )),
                ));
                let xp = Self::ONE.add(fp.mul(Self::TWO).div(r.sub(fp)));
                fp = xp;

                let k_int = k.0 >> $frac_bits;
                let scaled = if k_int < 0 {
                    Self(Self::ONE.0 >> (-k_int))
                } else {
                    Self(Self::ONE.0 << k_int)
                };
                scaled.mul(fp)
            }

            /// Hyperbolic tangent, via `(e^2x - 1) / (e^2x + 1)`.
            #[must_use]
            pub fn tanh(self) -> Self {
                let e2x = Self::TWO.mul(self).exp();
                e2x.sub(Self::ONE).div(e2x.add(Self::ONE))
            }

            /// Natural logarithm. Returns `0` for negative inputs and
            /// [`Self::SENTINEL`] for zero.
            #[must_use]
            pub fn ln(self) -> Self {
                if self.0 < 0 {
                    return Self::ZERO;
                }
                if self.0 == 0 {
                    return Self::SENTINEL;
                }

                let mut log2: i64 = 0;
                let mut xi = self;
                while xi.0 > Self::TWO.0 {
                    xi.0 >>= 1;
                    log2 += 1;
                }

                let f = xi.sub(Self::ONE);
                let s = f.div(Self::TWO.add(f));
                let z = s.mul(s);
                let w = z.mul(z);
                let r = w
                    .mul(Self::LG1.add(w.mul(Self::LG3.add(w.mul(Self::LG5)))))
                    .add(z.mul(Self::LG0.add(w.mul(Self::LG2.add(w.mul(Self::LG4.add(w.mul(Self::LG6))))))));

                Self::LN2
                    .mul(Self::from_int(log2))
                    .add(f)
                    .sub(s.mul(f.sub(r)))
            }

            /// `None` for non-positive inputs, instead of the mixed `0`
            /// sentinel split the raw [`Self::ln`] contract uses.
            #[must_use]
            pub fn checked_ln(self) -> Option<Self> {
                if self.0 <= 0 { None } else { Some(self.ln()) }
            }

            /// Logarithm of `self` in the given `base`.
            #[must_use]
            pub fn log(self, base: Self) -> Self {
                self.ln().div(base.ln())
            }

            /// `self ^ exponent`. `pow(x, 0) == 1`; `pow(x < 0, _) == 0`.
            #[must_use]
            pub fn pow(self, exponent: Self) -> Self {
                if exponent.0 == 0 {
                    return Self::ONE;
                }
                if self.0 < 0 {
                    return Self::ZERO;
                }
                self.ln().mul(exponent).exp()
            }

            /// Sine, via range reduction into `[-pi/2, pi/2]` and a minimax
            /// polynomial. Defined for all reals.
            #[must_use]
            pub fn sin(self) -> Self {
                let mut sign = Self::ONE;
                let mut fp = Self(self.0 % Self::TWO_PI.0);
                if fp.0 < 0 {
                    fp = fp.add(Self::TWO_PI);
                }
                if fp.0 > Self::HALF_PI.0 && fp.0 <= Self::PI.0 {
                    fp = Self::PI.sub(fp);
                } else if fp.0 > Self::PI.0 && fp.0 <= Self::PI.add(Self::HALF_PI).0 {
                    fp = fp.sub(Self::PI);
                    sign = Self(-Self::ONE.0);
                } else if fp.0 > Self::PI.add(Self::HALF_PI).0 {
                    fp = Self::TWO_PI.sub(fp);
                    sign = Self(-Self::ONE.0);
                }

                let sqr = fp.mul(fp);
                let mut result = Self::SIN_K0;
                result = result.mul(sqr);
                result = result.sub(Self::SIN_K1);
                result = result.mul(sqr);
                result = result.add(Self::ONE);
                result = result.mul(fp);
                sign.mul(result)
            }

            /// Cosine, via `sin(pi/2 - x)`.
            #[must_use]
            pub fn cos(self) -> Self {
                Self::HALF_PI.sub(self).sin()
            }

            /// Tangent, via `sin(x) / cos(x)`. Returns [`Self::SENTINEL`]
            /// near multiples of `pi/2`, where `cos(x)` underflows to zero.
            #[must_use]
            pub fn tan(self) -> Self {
                self.sin().div(self.cos())
            }

            /// Convert a value interpreted as degrees into radians, via
            /// the constant factor `pi / 180`.
            #[must_use]
            pub fn to_radians(self) -> Self {
                self.mul(Self::PI).div(Self::from_int(180))
            }

            /// Convert a decimal string into fixed-point. The grammar is
            /// `[-] [digits] ['.' digits]`; any other character is skipped
            /// (a debug-build note records that a character was dropped —
            /// this never fails the parse).
            #[must_use]
            pub fn from_decimal_str(text: &str) -> Self {
                let mut negative = false;
                let mut seen_dot = false;
                let mut int_part: i128 = 0;
                let mut frac_num: i128 = 0;
                let mut frac_digits: u32 = 0;

                for c in text.chars() {
                    match c {
                        '-' => negative = true,
                        '.' if !seen_dot => seen_dot = true,
                        d if d.is_ascii_digit() => {
                            let digit = i128::from(d as u32 - '0' as u32);
                            if !seen_dot {
                                int_part = int_part.saturating_mul(10).saturating_add(digit);
                            } else if frac_digits < 27 {
                                frac_num = frac_num.saturating_mul(10).saturating_add(digit);
                                frac_digits += 1;
                            }
                        }
                        ' ' | '\t' | '\n' | '\r' => {}
                        _ => {
                            #[cfg(debug_assertions)]
                            {
                                // A non-digit, non-sign, non-'.' character was
                                // present in a parameter string; skipped rather
                                // than treated as a parse failure.
                                let _ = c;
                            }
                        }
                    }
                }

                let one = 1i128 << $frac_bits;
                let mut raw = int_part.saturating_mul(one);
                if frac_digits > 0 {
                    let denom = 10i128.saturating_pow(frac_digits);
                    raw = raw.saturating_add((frac_num.saturating_mul(one)) / denom);
                }
                if negative {
                    raw = -raw;
                }
                Self(raw as $repr)
            }

            /// Truncate toward zero — the acceleration core's quantization
            /// contract, distinct from the floor behavior of a raw
            /// arithmetic right shift.
            #[must_use]
            pub fn to_int_trunc(self) -> i64 {
                (self.0 / Self::ONE.0) as i64
            }

            /// Render as `integer.fraction`, trimming trailing zeros when
            /// more than one fractional digit remains. `max_dec` bounds
            /// the number of fractional digits produced; `None` uses the
            /// width's default (`$default_dec`).
            #[must_use]
            pub fn to_fixed_string(self, max_dec: Option<usize>) -> String {
                let max_dec = max_dec.unwrap_or($default_dec);
                let mut out = String::new();
                let negative = self.0 < 0;
                let magnitude: i128 = if negative { -(self.0 as i128) } else { self.0 as i128 };

                if negative {
                    out.push('-');
                }

                let one = 1i128 << $frac_bits;
                let int_part = magnitude / one;
                out.push_str(&int_part.to_string());
                out.push('.');

                let mut frac = magnitude % one;
                let mask = one - 1;
                let mut produced = 0usize;
                loop {
                    frac = (frac & mask) * 10;
                    let digit = frac >> $frac_bits;
                    out.push((b'0' + digit as u8) as char);
                    produced += 1;
                    if frac & mask == 0 || produced >= max_dec {
                        break;
                    }
                }

                if produced > 1 && out.ends_with('0') {
                    out.pop();
                }
                out
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_fixed_string(None))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_fixed_string(None))
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $name::add(self, rhs)
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $name::sub(self, rhs)
            }
        }

        impl Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                $name::mul(self, rhs)
            }
        }

        impl Div for $name {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                $name::div(self, rhs)
            }
        }

        impl Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl From<i64> for $name {
            fn from(i: i64) -> Self {
                Self::from_int(i)
            }
        }
    };
}

define_fixed!(
    /// Q32.32 fixed-point scalar: 64-bit storage, 32 fraction bits.
    Fixed64,
    i64,
    i128,
    32,
    10
);

define_fixed!(
    /// Q16.16 fixed-point scalar: 32-bit storage, 16 fraction bits.
    Fixed32,
    i32,
    i64,
    16,
    4
);

/// A 2D vector of fixed-point scalars, used for deltas, scale factors, and
/// residues.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Vector<F> {
    /// X component.
    pub x: F,
    /// Y component.
    pub y: F,
}

impl<F> Vector<F> {
    /// Construct a vector from its components.
    #[must_use]
    pub const fn new(x: F, y: F) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Fixed64, b: f64, eps: f64) -> bool {
        let bits = a.to_bits() as f64 / (1u64 << Fixed64::FRAC_BITS) as f64;
        (bits - b).abs() < eps
    }

    #[test]
    fn one_and_zero() {
        assert_eq!(Fixed64::ONE.to_int_trunc(), 1);
        assert_eq!(Fixed64::ZERO.to_int_trunc(), 0);
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = Fixed64::from_int(3);
        let b = Fixed64::from_int(5);
        assert_eq!((a + b).to_int_trunc(), 8);
        assert_eq!((b - a).to_int_trunc(), 2);
    }

    #[test]
    fn mul_div_identity() {
        let a = Fixed64::from_decimal_str("2.5");
        let b = Fixed64::from_decimal_str("4.0");
        let product = a.mul(b);
        assert!(approx(product, 10.0, 1e-6));
        let quotient = product.div(b);
        assert!(approx(quotient, 2.5, 1e-6));
    }

    #[test]
    fn div_by_zero_is_sentinel() {
        let a = Fixed64::ONE;
        let r = a.div(Fixed64::ZERO);
        assert!(r.is_sentinel());
        assert_eq!(a.checked_div(Fixed64::ZERO), None);
    }

    #[test]
    fn sqrt_matches_known_values() {
        assert!(approx(Fixed64::from_int(4).sqrt(), 2.0, 1e-4));
        assert!(approx(Fixed64::from_int(9).sqrt(), 3.0, 1e-4));
        assert_eq!(Fixed64::ZERO.sqrt(), Fixed64::ZERO);
        assert_eq!(Fixed64::ONE.sqrt(), Fixed64::ONE);
    }

    #[test]
    fn sqrt_negative_is_sentinel() {
        assert!(Fixed64::from_int(-4).sqrt().is_sentinel());
        assert_eq!(Fixed64::from_int(-1).checked_sqrt(), None);
    }

    #[test]
    fn sqrt_monotonic() {
        let mut prev = Fixed64::ZERO;
        for i in 0..64 {
            let x = Fixed64::from_decimal_str(&format!("{}.5", i));
            let s = x.sqrt();
            assert!(s.to_bits() >= prev.to_bits());
            prev = s;
        }
    }

    #[test]
    fn exp_ln_roundtrip() {
        let x = Fixed64::from_decimal_str("2.0");
        let y = x.ln().exp();
        assert!(approx(y, 2.0, 1e-3));
    }

    #[test]
    fn ln_of_one_is_zero() {
        assert!(approx(Fixed64::ONE.ln(), 0.0, 1e-6));
    }

    #[test]
    fn ln_of_zero_is_sentinel() {
        assert!(Fixed64::ZERO.ln().is_sentinel());
    }

    #[test]
    fn ln_of_negative_is_zero() {
        assert_eq!(Fixed64::from_int(-5).ln(), Fixed64::ZERO);
    }

    #[test]
    fn pow_zero_exponent_is_one() {
        assert_eq!(Fixed64::from_int(7).pow(Fixed64::ZERO), Fixed64::ONE);
    }

    #[test]
    fn pow_negative_base_is_zero() {
        assert_eq!(Fixed64::from_int(-2).pow(Fixed64::from_int(2)), Fixed64::ZERO);
    }

    #[test]
    fn sin_cos_pythagorean() {
        let theta = Fixed64::from_decimal_str("0.7");
        let s = theta.sin();
        let c = theta.cos();
        let sum = s.mul(s).add(c.mul(c));
        assert!(approx(sum, 1.0, 1e-2));
    }

    #[test]
    fn tan_sentinel_near_half_pi() {
        // cos(pi/2) is an exact zero (HALF_PI - HALF_PI == 0, sin(0) == 0),
        // so tan(pi/2) divides by exact zero and hits the sentinel.
        let t = Fixed64::HALF_PI.tan();
        assert!(t.is_sentinel());
    }

    #[test]
    fn decimal_parse_basic() {
        assert_eq!(Fixed64::from_decimal_str("0"), Fixed64::ZERO);
        assert_eq!(Fixed64::from_decimal_str("1"), Fixed64::ONE);
        assert!(approx(Fixed64::from_decimal_str("1.5"), 1.5, 1e-9));
        assert!(approx(Fixed64::from_decimal_str("-1.5"), -1.5, 1e-9));
        assert!(approx(Fixed64::from_decimal_str("0.1"), 0.1, 1e-6));
    }

    #[test]
    fn decimal_parse_skips_noise_characters() {
        // A stray letter shouldn't fail the parse, just get skipped.
        assert_eq!(Fixed64::from_decimal_str("1a2"), Fixed64::from_int(12));
    }

    #[test]
    fn to_fixed_string_trims_trailing_zeros() {
        let v = Fixed64::from_decimal_str("3.5");
        assert_eq!(v.to_fixed_string(Some(10)), "3.5");
    }

    #[test]
    fn to_fixed_string_integer_value() {
        let v = Fixed64::from_int(42);
        assert_eq!(v.to_fixed_string(Some(4)), "42.0");
    }

    #[test]
    fn fixed32_basic_ops() {
        let a = Fixed32::from_decimal_str("2.0");
        let b = Fixed32::from_decimal_str("3.0");
        assert_eq!(a.mul(b), Fixed32::from_int(6));
    }

    #[test]
    fn vector_new() {
        let v = Vector::new(Fixed64::ONE, Fixed64::ZERO);
        assert_eq!(v.x, Fixed64::ONE);
        assert_eq!(v.y, Fixed64::ZERO);
    }
}
