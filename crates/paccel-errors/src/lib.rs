//! Error types for the pointer acceleration engine.
//!
//! The hot path (the acceleration core, the event editor's per-frame
//! compaction) and the non-hot path (profile loading, HID descriptor
//! parsing) have different error budgets, so they get different error
//! types:
//!
//! - [`AccelFault`] is `Copy`, `#[repr(u8)]`, and allocation-free — safe to
//!   return from code that runs on every input event.
//! - [`ConfigError`] is `thiserror`-derived and carries owned `String`
//!   context — only used where an allocation is already unavoidable
//!   (reading a profile file, parsing a report descriptor at bind time).

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

use core::fmt;

/// Hot-path fault. One variant per error kind resolved locally by the
/// acceleration core or event editor; none of these ever propagates to a
/// host error facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AccelFault {
    /// The arithmetic unit could not be used in the current context.
    /// Resolution: buffer the deltas and retry on the next event.
    TransientBusy = 1,
    /// The computed frametime would be below one quantum.
    /// Resolution: substitute the last valid frametime silently.
    DegenerateTiming = 2,
    /// `sqrt` of a negative value, `div` by zero, `ln` of a non-positive
    /// value, or `pow` with a negative base. Resolution: short-circuit the
    /// step that produced it and emit the unmodified original event.
    ArithmeticSentinel = 3,
    /// A non-digit character appeared inside a decimal parameter string.
    /// Resolution: debug-log once, skip the character, continue parsing.
    ParameterParseNoise = 4,
    /// Synthetic-axis injection would exceed the host's event buffer.
    /// Resolution: skip the injection and emit what can be emitted.
    RecordBufferFull = 5,
    /// The HID report descriptor does not specify an X or Y usage.
    /// Resolution: refuse to bind the device; no events are processed.
    HidDescriptorMalformed = 6,
}

impl AccelFault {
    /// Numeric error code, stable across releases for lightweight logging.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// `true` if this fault should ever be visible outside the component
    /// that produced it (all the others are fully resolved locally).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, AccelFault::HidDescriptorMalformed)
    }

    /// Construct a fault from its numeric code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AccelFault::TransientBusy),
            2 => Some(AccelFault::DegenerateTiming),
            3 => Some(AccelFault::ArithmeticSentinel),
            4 => Some(AccelFault::ParameterParseNoise),
            5 => Some(AccelFault::RecordBufferFull),
            6 => Some(AccelFault::HidDescriptorMalformed),
            _ => None,
        }
    }
}

impl fmt::Display for AccelFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccelFault::TransientBusy => write!(f, "arithmetic unit unavailable, buffering"),
            AccelFault::DegenerateTiming => write!(f, "frametime below one quantum"),
            AccelFault::ArithmeticSentinel => write!(f, "fixed-point operation hit a domain sentinel"),
            AccelFault::ParameterParseNoise => write!(f, "non-digit character in parameter string"),
            AccelFault::RecordBufferFull => write!(f, "synthetic axis injection would overflow buffer"),
            AccelFault::HidDescriptorMalformed => write!(f, "HID descriptor has no X or Y usage"),
        }
    }
}

impl std::error::Error for AccelFault {}

/// A specialized `Result` for hot-path operations.
pub type AccelResult<T = ()> = Result<T, AccelFault>;

/// Errors from non-hot-path configuration and descriptor loading: profile
/// deserialization, HID report-descriptor validation at bind time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The profile's JSON did not match the expected schema.
    #[error("invalid profile at {path}: {reason}")]
    InvalidProfile {
        /// Path the profile was loaded from, for diagnostics.
        path: String,
        /// Human-readable explanation of what failed to parse.
        reason: String,
    },

    /// A profile field was syntactically valid but out of its allowed
    /// range (e.g. a negative DPI).
    #[error("parameter {name} out of range: {reason}")]
    ParameterOutOfRange {
        /// Name of the offending parameter.
        name: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// The HID report descriptor could not be parsed or did not declare
    /// both an X and a Y usage.
    #[error("HID descriptor malformed: {0}")]
    HidDescriptor(String),

    /// Underlying I/O failure while reading a profile file.
    #[error("I/O error loading profile: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization failure, wrapped with its source for context.
    #[error("profile JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_codes_are_stable() {
        assert_eq!(AccelFault::TransientBusy.code(), 1);
        assert_eq!(AccelFault::HidDescriptorMalformed.code(), 6);
    }

    #[test]
    fn fault_round_trips_through_code() {
        for code in 1..=6u8 {
            assert_eq!(AccelFault::from_code(code).map(AccelFault::code), Some(code));
        }
        assert_eq!(AccelFault::from_code(0), None);
        assert_eq!(AccelFault::from_code(7), None);
    }

    #[test]
    fn only_hid_malformed_is_terminal() {
        assert!(AccelFault::HidDescriptorMalformed.is_terminal());
        assert!(!AccelFault::TransientBusy.is_terminal());
        assert!(!AccelFault::ArithmeticSentinel.is_terminal());
    }

    #[test]
    fn fault_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<AccelFault>();
    }

    #[test]
    fn fault_display_is_human_readable() {
        assert!(AccelFault::DegenerateTiming.to_string().contains("frametime"));
    }

    #[test]
    fn config_error_wraps_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
