//! The flat name -> string parameter store (`spec.md` §4.2, C2).
//!
//! Every parameter is held as a fixed-capacity [`ParamText`] behind a
//! lock-free [`ParamCell`]: writers `store()` a new value with no lock,
//! readers `load()` and re-parse the decimal string on every event. This
//! is intentional (`spec.md` §9's "hot-path configuration parsing"
//! design note) — it trades a cheap re-parse for never needing a lock on
//! the write side, and a torn read degrades to one slightly-wrong event
//! rather than a crash or a stall.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cell;
pub mod text;

pub use cell::ParamCell;
pub use text::ParamText;

use paccel_core::AccelArgs;
use paccel_curves::CurveArgs;
use paccel_fixed::Fixed64;

/// Names recognized by [`ParamStore`], exactly as tabulated in
/// `spec.md` §4.2.
pub mod names {
    /// Global post-curve multiplier.
    pub const SENS_MULT: &str = "SENS_MULT";
    /// `Y` sensitivity = `X` sensitivity * this.
    pub const YX_RATIO: &str = "YX_RATIO";
    /// Device DPI, normalized to 1000 CPI.
    pub const INPUT_DPI: &str = "INPUT_DPI";
    /// Selects the curve variant (`no_accel`, `linear`, `natural`, `synchronous`).
    pub const MODE: &str = "MODE";
    /// Rotation applied before acceleration, in degrees.
    pub const ANGLE_ROTATION: &str = "ANGLE_ROTATION";
    /// Linear-curve ramp steepness.
    pub const ACCEL: &str = "ACCEL";
    /// Identity-input speed, shared by the linear and natural curves.
    pub const OFFSET: &str = "OFFSET";
    /// Linear-curve symmetric output cap; `0` disables it.
    pub const OUTPUT_CAP: &str = "OUTPUT_CAP";
    /// Natural-curve decay rate.
    pub const DECAY_RATE: &str = "DECAY_RATE";
    /// Natural-curve asymptotic ceiling multiplier.
    pub const LIMIT: &str = "LIMIT";
    /// Synchronous-curve transition steepness.
    pub const GAMMA: &str = "GAMMA";
    /// Synchronous-curve activation smoothing; `0` selects a hard linear clamp.
    pub const SMOOTH: &str = "SMOOTH";
    /// Synchronous-curve asymptotic multiplier for fast motion.
    pub const MOTIVITY: &str = "MOTIVITY";
    /// Synchronous-curve speed at which the curve crosses `1`.
    pub const SYNC_SPEED: &str = "SYNC_SPEED";
}

/// The `MODE` parameter's recognized values, selecting a [`CurveArgs`]
/// variant. Unrecognized text falls back to [`CurveMode::Linear`], the
/// table's documented default, rather than rejecting the write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CurveMode {
    /// `no_accel`.
    NoAccel,
    /// `linear`.
    #[default]
    Linear,
    /// `natural`.
    Natural,
    /// `synchronous`.
    Synchronous,
}

impl CurveMode {
    fn parse(value: &str) -> Self {
        match value.trim() {
            "no_accel" | "none" | "off" => CurveMode::NoAccel,
            "natural" => CurveMode::Natural,
            "synchronous" | "sync" => CurveMode::Synchronous,
            _ => CurveMode::Linear,
        }
    }

    /// The canonical text written back by [`ParamStore::write`] when
    /// this mode is selected programmatically (e.g. from [`engine`](https://docs.rs/engine)'s
    /// profile loader).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CurveMode::NoAccel => "no_accel",
            CurveMode::Linear => "linear",
            CurveMode::Natural => "natural",
            CurveMode::Synchronous => "synchronous",
        }
    }
}

/// Read/write access to a named parameter's text value: the "flat
/// name->string map" `spec.md` §6 describes as the configuration
/// interface.
pub trait ParamSource {
    /// The current text value of `name`, or `None` if unrecognized.
    fn read(&self, name: &str) -> Option<ParamText>;

    /// Write `value` to `name`. Returns `false` if `name` is
    /// unrecognized; never panics, never blocks.
    fn write(&self, name: &str, value: &str) -> bool;
}

/// The live parameter store: one [`ParamCell`] per named parameter in
/// `spec.md`'s §4.2 table, each independently lock-free.
pub struct ParamStore {
    sens_mult: ParamCell,
    yx_ratio: ParamCell,
    input_dpi: ParamCell,
    mode: ParamCell,
    angle_rotation: ParamCell,
    accel: ParamCell,
    offset: ParamCell,
    output_cap: ParamCell,
    decay_rate: ParamCell,
    limit: ParamCell,
    gamma: ParamCell,
    smooth: ParamCell,
    motivity: ParamCell,
    sync_speed: ParamCell,
}

impl Default for ParamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ParamStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParamStore").field("mode", &self.mode.load().as_str()).finish_non_exhaustive()
    }
}

impl ParamStore {
    /// A store seeded with the defaults in `spec.md`'s §4.2 table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sens_mult: ParamCell::new(ParamText::new("1")),
            yx_ratio: ParamCell::new(ParamText::new("1")),
            input_dpi: ParamCell::new(ParamText::new("1000")),
            mode: ParamCell::new(ParamText::new(CurveMode::Linear.as_str())),
            angle_rotation: ParamCell::new(ParamText::new("0")),
            accel: ParamCell::new(ParamText::new("0")),
            offset: ParamCell::new(ParamText::new("0")),
            output_cap: ParamCell::new(ParamText::new("0")),
            decay_rate: ParamCell::new(ParamText::new("0.1")),
            limit: ParamCell::new(ParamText::new("1.5")),
            gamma: ParamCell::new(ParamText::new("1")),
            smooth: ParamCell::new(ParamText::new("0.5")),
            motivity: ParamCell::new(ParamText::new("1.5")),
            sync_speed: ParamCell::new(ParamText::new("5")),
        }
    }

    /// The currently selected curve mode.
    #[must_use]
    pub fn mode(&self) -> CurveMode {
        CurveMode::parse(self.mode.load().as_str())
    }

    /// Build this event's [`AccelArgs`] by re-parsing every parameter's
    /// current text value. Allocation-free; cheap enough to call once
    /// per event, matching `spec.md` §4.2's "read-mostly, live-reload"
    /// contract.
    #[must_use]
    pub fn accel_args(&self) -> AccelArgs {
        let curve = match self.mode() {
            CurveMode::NoAccel => CurveArgs::NoAccel,
            CurveMode::Linear => {
                CurveArgs::Linear { accel: fx(&self.accel), offset: fx(&self.offset), output_cap: fx(&self.output_cap) }
            }
            CurveMode::Natural => {
                CurveArgs::Natural { decay_rate: fx(&self.decay_rate), offset: fx(&self.offset), limit: fx(&self.limit) }
            }
            CurveMode::Synchronous => CurveArgs::Synchronous {
                gamma: fx(&self.gamma),
                smooth: fx(&self.smooth),
                motivity: fx(&self.motivity),
                sync_speed: fx(&self.sync_speed),
            },
        };

        AccelArgs {
            sens_mult: fx(&self.sens_mult),
            yx_ratio: fx(&self.yx_ratio),
            input_dpi: fx(&self.input_dpi),
            angle_rotation_deg: fx(&self.angle_rotation),
            curve,
        }
    }
}

fn fx(cell: &ParamCell) -> Fixed64 {
    Fixed64::from_decimal_str(cell.load().as_str())
}

impl ParamSource for ParamStore {
    fn read(&self, name: &str) -> Option<ParamText> {
        let cell = self.cell_for(name)?;
        Some(cell.load())
    }

    fn write(&self, name: &str, value: &str) -> bool {
        let Some(cell) = self.cell_for(name) else {
            return false;
        };
        cell.store(ParamText::new(value));
        true
    }
}

impl ParamStore {
    fn cell_for(&self, name: &str) -> Option<&ParamCell> {
        Some(match name {
            names::SENS_MULT => &self.sens_mult,
            names::YX_RATIO => &self.yx_ratio,
            names::INPUT_DPI => &self.input_dpi,
            names::MODE => &self.mode,
            names::ANGLE_ROTATION => &self.angle_rotation,
            names::ACCEL => &self.accel,
            names::OFFSET => &self.offset,
            names::OUTPUT_CAP => &self.output_cap,
            names::DECAY_RATE => &self.decay_rate,
            names::LIMIT => &self.limit,
            names::GAMMA => &self.gamma,
            names::SMOOTH => &self.smooth,
            names::MOTIVITY => &self.motivity,
            names::SYNC_SPEED => &self.sync_speed,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_table() {
        let store = ParamStore::new();
        let args = store.accel_args();
        assert_eq!(args.sens_mult, Fixed64::ONE);
        assert_eq!(args.yx_ratio, Fixed64::ONE);
        assert_eq!(args.input_dpi, Fixed64::from_int(1000));
        assert_eq!(args.angle_rotation_deg, Fixed64::ZERO);
        assert!(matches!(args.curve, CurveArgs::Linear { .. }));
    }

    #[test]
    fn write_then_read_round_trips() {
        let store = ParamStore::new();
        assert!(store.write(names::SENS_MULT, "2.5"));
        assert_eq!(store.read(names::SENS_MULT).map(|t| t.as_str().to_string()), Some("2.5".to_string()));
        assert_eq!(store.accel_args().sens_mult, Fixed64::from_decimal_str("2.5"));
    }

    #[test]
    fn unrecognized_name_is_rejected_without_panicking() {
        let store = ParamStore::new();
        assert!(!store.write("NOT_A_PARAM", "1"));
        assert_eq!(store.read("NOT_A_PARAM"), None);
    }

    #[test]
    fn mode_switch_changes_curve_variant() {
        let store = ParamStore::new();
        assert!(store.write(names::MODE, "natural"));
        assert_eq!(store.mode(), CurveMode::Natural);
        assert!(matches!(store.accel_args().curve, CurveArgs::Natural { .. }));

        assert!(store.write(names::MODE, "synchronous"));
        assert!(matches!(store.accel_args().curve, CurveArgs::Synchronous { .. }));

        assert!(store.write(names::MODE, "no_accel"));
        assert!(matches!(store.accel_args().curve, CurveArgs::NoAccel));
    }

    #[test]
    fn unrecognized_mode_text_falls_back_to_linear() {
        let store = ParamStore::new();
        assert!(store.write(names::MODE, "quadratic"));
        assert_eq!(store.mode(), CurveMode::Linear);
    }

    #[test]
    fn offset_is_shared_between_linear_and_natural() {
        let store = ParamStore::new();
        assert!(store.write(names::OFFSET, "3"));

        assert!(store.write(names::MODE, "linear"));
        match store.accel_args().curve {
            CurveArgs::Linear { offset, .. } => assert_eq!(offset, Fixed64::from_int(3)),
            other => panic!("expected linear curve, got {other:?}"),
        }

        assert!(store.write(names::MODE, "natural"));
        match store.accel_args().curve {
            CurveArgs::Natural { offset, .. } => assert_eq!(offset, Fixed64::from_int(3)),
            other => panic!("expected natural curve, got {other:?}"),
        }
    }
}
