//! Balloon Adventure headless runner
//!
//! Runs the world at the fixed outer tick rate with a wall clock, draws each
//! frame into a vertex surface, and logs flight telemetry once a second.
//! Hosts with a window replace this loop and feed real key state.
//!
//! Usage: `balloon-adventure [settings.json] [--frames N] [--seed S]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use balloon_adventure::consts::TICK_RATE_HZ;
use balloon_adventure::platform::{Clock, KeyState, WallClock};
use balloon_adventure::renderer::{Camera, Draw, VertexSurface};
use balloon_adventure::sim::GameState;
use balloon_adventure::{Settings, SimError};
use clap::Parser;

/// Frames to run when `--frames` is not given (ten seconds)
const DEFAULT_FRAMES: u64 = 10 * TICK_RATE_HZ as u64;

#[derive(Parser, Debug)]
#[command(
    name = "balloon-adventure",
    version,
    about = "Fly the balloon headless and log telemetry"
)]
struct Args {
    /// Settings JSON (defaults are used if missing or invalid)
    settings: Option<PathBuf>,

    /// Number of frames to run
    #[arg(long)]
    frames: Option<u64>,

    /// Seed for terrain generation
    #[arg(long)]
    seed: Option<u64>,
}

fn run(args: Args) -> Result<(), SimError> {
    let settings = match &args.settings {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut state = match args.seed {
        Some(seed) => GameState::with_seed(settings, seed)?,
        None => GameState::new(settings)?,
    };

    let viewport = state.settings().viewport();
    let mut camera = Camera::from_settings(&state.settings().display);
    let mut surface = VertexSurface::new(viewport);
    let mut keys = KeyState::new();
    let mut clock = WallClock::new();

    let frame_time = Duration::from_millis(1000 / u64::from(TICK_RATE_HZ));
    let frames = args.frames.unwrap_or(DEFAULT_FRAMES);
    let mut substeps_total: u64 = 0;

    for frame in 0..frames {
        if !state.running() {
            break;
        }
        let frame_start = Instant::now();

        let elapsed = clock.elapsed_millis();
        substeps_total += u64::from(state.update(elapsed, &mut keys));

        camera.follow(state.focus(), viewport);
        surface.clear();
        state.draw(&mut surface, camera.offset());

        if frame % u64::from(TICK_RATE_HZ) == 0 {
            let envelope = state.balloon().envelope();
            log::info!(
                "t={}s altitude {:.1} temp {}% burner {} valve {} control {:?} ({} vertices)",
                frame / u64::from(TICK_RATE_HZ),
                state.altitude(),
                envelope.temp_percent(),
                state.burner_on(),
                state.valve_open(),
                state.control(),
                surface.vertices().len()
            );
        }

        if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!("Finished after {} sub-steps", substeps_total);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Balloon Adventure (headless) starting...");

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
