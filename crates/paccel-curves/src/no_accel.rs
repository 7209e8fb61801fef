//! The identity curve: `sens(s) == 1` for every input speed.
//!
//! Still routes events through the acceleration core so rotation and DPI
//! normalization keep applying even when acceleration itself is disabled.

use paccel_fixed::Fixed64;

/// Always returns [`Fixed64::ONE`].
#[must_use]
pub fn sensitivity(_speed: Fixed64) -> Fixed64 {
    Fixed64::ONE
}
