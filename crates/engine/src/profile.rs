//! The bulk configuration format: a `serde`-deserializable JSON record
//! bundling every named parameter from `paccel_params::names` plus the
//! rotation injection mode.
//!
//! [`Profile`] is loaded once at startup (or on an explicit reload) and
//! never touched on the hot path — unlike `ParamStore`, which stays live
//! for per-parameter tweaks, `Profile` only round-trips the whole
//! configuration at once.

use std::path::Path;

use paccel_editor::InjectionMode;
use paccel_errors::ConfigError;
use paccel_params::{ParamSource, ParamStore, names};
use serde::{Deserialize, Serialize};

/// Which rotation injection strategy a loaded profile selects, mirroring
/// `paccel_editor::InjectionMode` in a `serde`-friendly shape (that enum
/// itself deliberately carries no `serde` dependency, since it lives on
/// the hot-path side of the workspace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RotationInjectionMode {
    /// The host integration can grow its event buffer freely.
    GrowBuffer,
    /// The host integration has a fixed-capacity buffer.
    BoundedBuffer {
        /// Maximum number of records the produced frame may contain.
        capacity: usize,
    },
    /// The host integration cannot grow its buffer at all.
    DropMissingAxis,
}

impl From<RotationInjectionMode> for InjectionMode {
    fn from(mode: RotationInjectionMode) -> Self {
        match mode {
            RotationInjectionMode::GrowBuffer => InjectionMode::GrowBuffer,
            RotationInjectionMode::BoundedBuffer { capacity } => InjectionMode::BoundedBuffer { capacity },
            RotationInjectionMode::DropMissingAxis => InjectionMode::DropMissingAxis,
        }
    }
}

/// The bulk, on-disk configuration record: every parameter in
/// `paccel_params::names`'s table, plus the rotation injection mode.
///
/// Fields are plain `f64`/`String` rather than `Fixed64`, since `Fixed64`
/// has no `serde` impl (it is not part of this workspace's public wire
/// format, only its internal arithmetic representation) — each field is
/// converted to a decimal string and written through
/// [`paccel_params::ParamSource::write`] by [`Profile::apply_to`], which
/// re-parses it exactly the way a live `ParamSource` write would.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Profile {
    /// Global post-curve multiplier.
    pub sens_mult: f64,
    /// `Y` sensitivity = `X` sensitivity * this.
    pub yx_ratio: f64,
    /// Device DPI, normalized to 1000 CPI.
    pub input_dpi: f64,
    /// Selected curve: `no_accel`, `linear`, `natural`, or `synchronous`.
    pub mode: String,
    /// Rotation applied before acceleration, in degrees.
    pub angle_rotation_deg: f64,
    /// Linear-curve ramp steepness.
    pub accel: f64,
    /// Identity-input speed, shared by the linear and natural curves.
    pub offset: f64,
    /// Linear-curve symmetric output cap; `0` disables it.
    pub output_cap: f64,
    /// Natural-curve decay rate.
    pub decay_rate: f64,
    /// Natural-curve asymptotic ceiling multiplier.
    pub limit: f64,
    /// Synchronous-curve transition steepness.
    pub gamma: f64,
    /// Synchronous-curve activation smoothing; `0` selects a hard linear clamp.
    pub smooth: f64,
    /// Synchronous-curve asymptotic multiplier for fast motion.
    pub motivity: f64,
    /// Synchronous-curve speed at which the curve crosses `1`.
    pub sync_speed: f64,
    /// How to handle a rotated cross-axis component the device itself
    /// never reported for a frame.
    pub rotation_injection_mode: RotationInjectionMode,
}

impl Default for Profile {
    /// Mirrors `ParamStore::new`'s defaults exactly, so a freshly
    /// generated profile round-trips through [`Profile::apply_to`]
    /// without changing a live store's behavior.
    fn default() -> Self {
        Self {
            sens_mult: 1.0,
            yx_ratio: 1.0,
            input_dpi: 1000.0,
            mode: "linear".to_string(),
            angle_rotation_deg: 0.0,
            accel: 0.0,
            offset: 0.0,
            output_cap: 0.0,
            decay_rate: 0.1,
            limit: 1.5,
            gamma: 1.0,
            smooth: 0.5,
            motivity: 1.5,
            sync_speed: 5.0,
            rotation_injection_mode: RotationInjectionMode::GrowBuffer,
        }
    }
}

impl Profile {
    /// Load and validate a profile from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::InvalidProfile`] if the JSON does not match this
    /// shape, or [`ConfigError::ParameterOutOfRange`] if it parses but
    /// fails [`Profile::validate`].
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let profile: Self = serde_json::from_str(&text).map_err(|err| ConfigError::InvalidProfile {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        profile.validate()?;
        tracing::info!(path = %path.display(), mode = %profile.mode, "loaded profile");
        Ok(profile)
    }

    /// Reject parameter combinations that are syntactically valid JSON
    /// but semantically nonsensical (a non-positive DPI, an unrecognized
    /// curve name) before they ever reach the live parameter store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParameterOutOfRange`] naming the offending
    /// field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_dpi <= 0.0 {
            return Err(ConfigError::ParameterOutOfRange {
                name: names::INPUT_DPI.to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.sens_mult <= 0.0 {
            return Err(ConfigError::ParameterOutOfRange {
                name: names::SENS_MULT.to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.yx_ratio <= 0.0 {
            return Err(ConfigError::ParameterOutOfRange {
                name: names::YX_RATIO.to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !matches!(self.mode.as_str(), "no_accel" | "none" | "off" | "linear" | "natural" | "synchronous" | "sync") {
            return Err(ConfigError::ParameterOutOfRange {
                name: names::MODE.to_string(),
                reason: format!("unrecognized curve name {:?}", self.mode),
            });
        }
        if let RotationInjectionMode::DropMissingAxis = self.rotation_injection_mode {
            if self.angle_rotation_deg != 0.0 {
                tracing::warn!(
                    angle_rotation_deg = self.angle_rotation_deg,
                    "profile pairs DropMissingAxis with a nonzero rotation; rotated \
                     cross-axis motion on a single-axis-reporting frame will be silently lost"
                );
            }
        }
        Ok(())
    }

    /// Write every field through `store`'s [`ParamSource`] interface,
    /// exactly as a sequence of live parameter writes would. Each
    /// numeric field is formatted with Rust's default `f64` `Display`,
    /// which `paccel_fixed::Fixed64::from_decimal_str` parses back on
    /// the next read.
    pub fn apply_to(&self, store: &ParamStore) {
        store.write(names::SENS_MULT, &self.sens_mult.to_string());
        store.write(names::YX_RATIO, &self.yx_ratio.to_string());
        store.write(names::INPUT_DPI, &self.input_dpi.to_string());
        store.write(names::MODE, &self.mode);
        store.write(names::ANGLE_ROTATION, &self.angle_rotation_deg.to_string());
        store.write(names::ACCEL, &self.accel.to_string());
        store.write(names::OFFSET, &self.offset.to_string());
        store.write(names::OUTPUT_CAP, &self.output_cap.to_string());
        store.write(names::DECAY_RATE, &self.decay_rate.to_string());
        store.write(names::LIMIT, &self.limit.to_string());
        store.write(names::GAMMA, &self.gamma.to_string());
        store.write(names::SMOOTH, &self.smooth.to_string());
        store.write(names::MOTIVITY, &self.motivity.to_string());
        store.write(names::SYNC_SPEED, &self.sync_speed.to_string());
    }

    /// The [`InjectionMode`] this profile selects, for handing straight
    /// to [`paccel_editor::process_frame`].
    #[must_use]
    pub fn injection_mode(&self) -> InjectionMode {
        self.rotation_injection_mode.into()
    }
}
