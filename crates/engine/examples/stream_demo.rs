//! Minimal end-to-end demo: build an engine from the default profile,
//! feed it a few synthetic frames, and print the edited output plus the
//! echoed speed.

use std::process::ExitCode;

use engine::{AccelerationEngine, Profile};
use paccel_editor::{EV_REL, EV_SYN, InputEvent, REL_X, REL_Y, SYN_REPORT};

fn frame(x: i32, y: i32) -> Vec<InputEvent> {
    vec![InputEvent::new(EV_REL, REL_X, x), InputEvent::new(EV_REL, REL_Y, y), InputEvent::new(EV_SYN, SYN_REPORT, 0)]
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let profile = Profile { mode: "natural".to_string(), sens_mult: 1.2, ..Profile::default() };
    let mut engine = match AccelerationEngine::new(&profile) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid profile: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut now_ns = 1_000_000i64;
    for (dx, dy) in [(2, 0), (8, 1), (20, 3), (1, 0)] {
        let out = engine.process_frame(&frame(dx, dy), now_ns);
        println!("in=({dx:>3},{dy:>3}) -> out={out:?}  speed_echo={:02x?}", engine.echo_speed());
        now_ns += 8_000_000;
    }

    ExitCode::SUCCESS
}
