//! The event-stream editor (`spec.md` §4.6, C6): collects `REL_X`/`REL_Y`
//! per frame, invokes the acceleration core on `SYN_REPORT`, rewrites the
//! frame in place, elides zeroed axes, and — when rotation is active and
//! the host integration allows it — splices in a synthetic axis for a
//! rotated cross-axis component the source stream never reported.
//!
//! [`process_frame`] consumes one frame (`&[InputEvent]` terminated by a
//! `SYN_REPORT`) and returns the edited frame as a new `Vec<InputEvent>`.
//! This models the "grow the buffer" host integration directly; the
//! "fixed-capacity buffer" integration is modeled by
//! [`InjectionMode::BoundedBuffer`], which silently skips injection
//! rather than exceeding a caller-supplied capacity (`spec.md` §7's
//! `RecordBufferFull` resolution: "skip injection; emit what can be
//! emitted").

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, missing_debug_implementations)]

use paccel_core::{AccelArgs, StreamState, accelerate};
use paccel_speed::SpeedEstimator;

/// `EV_SYN`: the input-system event type that terminates a frame.
pub const EV_SYN: u16 = 0x00;
/// `EV_KEY`: button/key events, passed through unchanged.
pub const EV_KEY: u16 = 0x01;
/// `EV_REL`: relative-motion events (`REL_X`, `REL_Y`, `REL_WHEEL`, ...).
pub const EV_REL: u16 = 0x02;

/// `SYN_REPORT`: the code pairing with [`EV_SYN`] that closes a frame.
pub const SYN_REPORT: u16 = 0x00;
/// `REL_X` axis code.
pub const REL_X: u16 = 0x00;
/// `REL_Y` axis code.
pub const REL_Y: u16 = 0x01;
/// `REL_WHEEL` axis code — passes through this editor untouched.
pub const REL_WHEEL: u16 = 0x08;

/// One record in the consumed/produced event-stream contract
/// (`spec.md` §6): `{type, code, value}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    /// Event type (`EV_SYN`, `EV_KEY`, `EV_REL`, ...).
    pub ev_type: u16,
    /// Event code, interpreted within `ev_type` (`REL_X`, `SYN_REPORT`, ...).
    pub code: u16,
    /// The event's integer payload.
    pub value: i32,
}

impl InputEvent {
    /// Construct a record from its three fields.
    #[must_use]
    pub const fn new(ev_type: u16, code: u16, value: i32) -> Self {
        Self { ev_type, code, value }
    }

    /// Construct the frame-terminating `SYN_REPORT` record.
    #[must_use]
    pub const fn syn_report() -> Self {
        Self::new(EV_SYN, SYN_REPORT, 0)
    }

    fn is_zeroed_rel(&self) -> bool {
        self.ev_type == EV_REL && self.value == 0
    }
}

/// Which cross-axis component a rotated, single-axis-reporting device
/// leaves missing for a frame (`spec.md` §4.6's "exactly one axis is
/// present" case).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MissingAxis {
    X,
    Y,
}

/// How the editor handles a missing axis that rotation demands
/// (`spec.md` §9's "rotation-plus-single-axis" open question,
/// resolved in `SPEC_FULL.md` §9 by supporting both modes explicitly).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InjectionMode {
    /// The host integration point can grow the event buffer: splice a
    /// synthetic `REL_X`/`REL_Y` record in just before `SYN_REPORT`.
    GrowBuffer,
    /// The host integration point has a fixed-capacity buffer of
    /// `capacity` records: splice in the synthetic axis only if the
    /// frame still fits; otherwise skip the injection (`RecordBufferFull`).
    BoundedBuffer {
        /// Maximum number of records the produced frame may contain.
        capacity: usize,
    },
    /// The host integration point provides no way to grow the buffer at
    /// all: the missing axis's rotated component is always silently
    /// lost. Per `spec.md` §9, this mode is conformant only when
    /// `angle_rotation_deg == 0` — this crate does not enforce that as
    /// a runtime invariant (a future rotation change is the caller's
    /// decision, not this crate's to police), it is documented here for
    /// callers to opt into deliberately.
    DropMissingAxis,
}

/// Process one frame: apply [`paccel_core::accelerate`] at the frame's
/// `SYN_REPORT`, rewrite axis values in place, elide zeroed `EV_REL`
/// records, and inject a synthetic axis per `mode` if rotation demands
/// one and the present axis did produce a nonzero rotated component.
///
/// `frame` must be terminated by a [`InputEvent::syn_report`] record (or
/// more generally any `{EV_SYN, SYN_REPORT}` record); everything after
/// the first such record in `frame` is copied through unexamined — the
/// editor processes exactly one frame per call, exactly as `spec.md` §5
/// says the host's event-delivery callback drives it ("never re-entered
/// for the same input stream" means one frame in, one frame out).
///
/// Non-`EV_REL` records (buttons, wheel, anything else) pass through
/// unchanged and unexamined, per `spec.md` §4.6.
#[must_use]
pub fn process_frame(
    state: &mut StreamState,
    frame: &[InputEvent],
    mode: InjectionMode,
    now_ns: i64,
    args: &AccelArgs,
    estimator: &SpeedEstimator,
) -> Vec<InputEvent> {
    let mut out: Vec<InputEvent> = Vec::with_capacity(frame.len());
    let mut x_idx: Option<usize> = None;
    let mut y_idx: Option<usize> = None;
    let mut syn_closed = false;

    for ev in frame {
        out.push(*ev);

        if syn_closed {
            continue;
        }

        if ev.ev_type == EV_REL {
            match ev.code {
                REL_X => x_idx = Some(out.len() - 1),
                REL_Y => y_idx = Some(out.len() - 1),
                _ => {}
            }
            continue;
        }

        if ev.ev_type == EV_SYN && ev.code == SYN_REPORT {
            close_frame(state, &mut out, x_idx, y_idx, mode, now_ns, args, estimator);
            syn_closed = true;
            x_idx = None;
            y_idx = None;
        }
    }

    out.retain(|ev| !ev.is_zeroed_rel());
    out
}

#[allow(clippy::too_many_arguments, reason = "mirrors accelerate's own argument list plus frame bookkeeping")]
fn close_frame(
    state: &mut StreamState,
    out: &mut Vec<InputEvent>,
    x_idx: Option<usize>,
    y_idx: Option<usize>,
    mode: InjectionMode,
    now_ns: i64,
    args: &AccelArgs,
    estimator: &SpeedEstimator,
) {
    let x_val = x_idx.and_then(|i| out.get(i)).map_or(0, |ev| ev.value);
    let y_val = y_idx.and_then(|i| out.get(i)).map_or(0, |ev| ev.value);

    if x_val == 0 && y_val == 0 {
        return;
    }

    let missing_axis = match (x_idx.is_some(), y_idx.is_some()) {
        (true, false) => Some(MissingAxis::Y),
        (false, true) => Some(MissingAxis::X),
        _ => None,
    };
    let rotation_active = args.angle_rotation_deg.to_bits() != 0;

    let mut x = x_val;
    let mut y = y_val;
    if accelerate(state, &mut x, &mut y, now_ns, args, estimator).is_err() {
        // ArithmeticSentinel: emit the unmodified original event for
        // this frame. `out` still holds the pre-acceleration values, so
        // there is nothing to undo.
        return;
    }

    if let Some(i) = x_idx.and_then(|i| out.get_mut(i)) {
        i.value = x;
    }
    if let Some(i) = y_idx.and_then(|i| out.get_mut(i)) {
        i.value = y;
    }

    if !rotation_active {
        return;
    }
    let Some(axis) = missing_axis else {
        return;
    };

    let synthetic_value = match axis {
        MissingAxis::X => x,
        MissingAxis::Y => y,
    };
    if synthetic_value == 0 {
        return;
    }

    let fits = match mode {
        InjectionMode::GrowBuffer => true,
        InjectionMode::BoundedBuffer { capacity } => out.len() < capacity,
        InjectionMode::DropMissingAxis => false,
    };
    if !fits {
        return;
    }

    let code = match axis {
        MissingAxis::X => REL_X,
        MissingAxis::Y => REL_Y,
    };
    // `out`'s last record is the `SYN_REPORT` we just closed on; splice
    // the synthetic axis in immediately before it, per spec.md §4.6.
    let syn_position = out.len() - 1;
    out.insert(syn_position, InputEvent::new(EV_REL, code, synthetic_value));
}
