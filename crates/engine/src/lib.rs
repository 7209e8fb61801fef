//! Facade crate wiring the parameter store (C2), acceleration core (C5),
//! and event editor (C6) into one [`AccelerationEngine`]. This is the
//! only crate in the workspace that owns process-wide concerns — profile
//! loading, `tracing` setup — the way a runtime facade sits on top of
//! its smaller component crates.
//!
//! The real-time obligations all still live one layer down: this facade
//! itself allocates a fresh `Vec` per frame (via `paccel_editor::process_frame`)
//! and is not meant to be called from a true interrupt context — it is
//! the convenience entry point for a host integration that already owns
//! its own event loop.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod profile;

pub use profile::{Profile, RotationInjectionMode};

use paccel_editor::{InjectionMode, InputEvent, process_frame};
use paccel_errors::ConfigError;
use paccel_fixed::Fixed64;
use paccel_params::ParamStore;
use paccel_core::StreamState;
use paccel_speed::SpeedEstimator;

/// The facade most host integrations hold one of per intercepted input
/// stream: a live [`ParamStore`], the stream's [`StreamState`] residue,
/// a [`SpeedEstimator`] for the speed-echo endpoint, and the currently
/// selected [`InjectionMode`].
pub struct AccelerationEngine {
    params: ParamStore,
    stream: StreamState,
    estimator: SpeedEstimator,
    injection_mode: InjectionMode,
}

impl core::fmt::Debug for AccelerationEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccelerationEngine").field("params", &self.params).field("injection_mode", &self.injection_mode).finish_non_exhaustive()
    }
}

impl AccelerationEngine {
    /// Build an engine from a validated [`Profile`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParameterOutOfRange`] if `profile` fails
    /// [`Profile::validate`].
    pub fn new(profile: &Profile) -> Result<Self, ConfigError> {
        profile.validate()?;
        let params = ParamStore::new();
        profile.apply_to(&params);
        tracing::debug!(mode = %profile.mode, "acceleration engine started");
        Ok(Self { params, stream: StreamState::new(), estimator: SpeedEstimator::new(), injection_mode: profile.injection_mode() })
    }

    /// Re-apply a new profile's parameters to the live store, leaving
    /// per-stream residue and frametime state untouched. Matches
    /// `spec.md` §4.2's "live-reload" contract: a configuration change
    /// never resets in-flight motion.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParameterOutOfRange`] if `profile` fails
    /// [`Profile::validate`]; on error, the previous configuration is
    /// left in effect.
    pub fn reload(&mut self, profile: &Profile) -> Result<(), ConfigError> {
        profile.validate()?;
        profile.apply_to(&self.params);
        self.injection_mode = profile.injection_mode();
        tracing::info!(mode = %profile.mode, "acceleration engine reloaded");
        Ok(())
    }

    /// Process one frame through the event editor, using the store's
    /// current parameter snapshot (`spec.md` §4.2: re-read on every
    /// event, never cached across frames).
    #[must_use]
    pub fn process_frame(&mut self, frame: &[InputEvent], now_ns: i64) -> Vec<InputEvent> {
        let args = self.params.accel_args();
        process_frame(&mut self.stream, frame, self.injection_mode, now_ns, &args, &self.estimator)
    }

    /// Direct read/write access to the live parameter store, for a host
    /// integration exposing `spec.md` §6's "flat name->string map"
    /// interface (a sysfs file, a control-plane RPC, ...).
    #[must_use]
    pub fn params(&self) -> &ParamStore {
        &self.params
    }

    /// The most recently computed input speed, for `spec.md` §4.7's
    /// speed-echo endpoint.
    #[must_use]
    pub fn last_speed(&self) -> Fixed64 {
        self.estimator.last_speed()
    }

    /// The last input speed, encoded as the big-endian wire format
    /// `paccel-echo` defines.
    #[must_use]
    pub fn echo_speed(&self) -> [u8; paccel_echo::WIDTH_BYTES_64] {
        paccel_echo::encode64(self.last_speed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paccel_editor::{EV_REL, EV_SYN, REL_X, REL_Y, SYN_REPORT};

    fn frame(x: i32, y: i32) -> Vec<InputEvent> {
        vec![
            InputEvent::new(EV_REL, REL_X, x),
            InputEvent::new(EV_REL, REL_Y, y),
            InputEvent::new(EV_SYN, SYN_REPORT, 0),
        ]
    }

    #[test]
    fn engine_builds_from_default_profile() {
        let engine = match AccelerationEngine::new(&Profile::default()) {
            Ok(e) => e,
            Err(e) => panic!("default profile must validate: {e}"),
        };
        assert_eq!(engine.last_speed(), Fixed64::ZERO);
    }

    #[test]
    fn invalid_profile_is_rejected_at_construction() {
        let profile = Profile { input_dpi: 0.0, ..Profile::default() };
        assert!(AccelerationEngine::new(&profile).is_err());
    }

    #[test]
    fn no_accel_identity_passes_motion_through_unchanged() {
        let profile = Profile { mode: "no_accel".to_string(), ..Profile::default() };
        let mut engine = match AccelerationEngine::new(&profile) {
            Ok(e) => e,
            Err(e) => panic!("expected a valid profile: {e}"),
        };
        let out = engine.process_frame(&frame(5, 0), 1_000_000);
        assert_eq!(out, vec![InputEvent::new(EV_REL, REL_X, 5), InputEvent::new(EV_SYN, SYN_REPORT, 0)]);
    }

    #[test]
    fn reload_changes_the_active_curve_without_resetting_residue() {
        let profile = Profile { mode: "no_accel".to_string(), sens_mult: 0.5, ..Profile::default() };
        let mut engine = match AccelerationEngine::new(&profile) {
            Ok(e) => e,
            Err(e) => panic!("expected a valid profile: {e}"),
        };
        let _ = engine.process_frame(&frame(1, 0), 1_000_000);
        assert_ne!(engine.stream.carry().x, Fixed64::ZERO);

        let reloaded = Profile { mode: "no_accel".to_string(), sens_mult: 1.0, ..Profile::default() };
        if let Err(e) = engine.reload(&reloaded) {
            panic!("expected reload to succeed: {e}");
        }
        assert_ne!(engine.stream.carry().x, Fixed64::ZERO, "reload must not reset in-flight residue");
    }

    #[test]
    fn echo_speed_matches_the_wire_encoding() {
        let engine = match AccelerationEngine::new(&Profile::default()) {
            Ok(e) => e,
            Err(e) => panic!("default profile must validate: {e}"),
        };
        assert_eq!(engine.echo_speed(), paccel_echo::encode64(Fixed64::ZERO));
    }
}
