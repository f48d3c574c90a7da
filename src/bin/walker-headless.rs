//! Runs the walker simulation without a window.
//!
//! Usage: `walker-headless [config.json] [generations]`

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use walker::simulation::params::Params;
use walker::simulation::world::World;

const TICK: f32 = 1.0 / 60.0;
const DEFAULT_GENERATIONS: u32 = 20;

fn main() -> ExitCode {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let params = match args.next() {
        Some(path) if path != "-" => match Params::from_json_file(&path) {
            Ok(params) => params,
            Err(err) => {
                error!(path = %path, %err, "invalid configuration");
                return ExitCode::FAILURE;
            }
        },
        _ => Params::default(),
    };
    let generations = match args.next().map(|arg| arg.parse::<u32>()) {
        None => DEFAULT_GENERATIONS,
        Some(Ok(count)) => count,
        Some(Err(err)) => {
            error!(%err, "generation count must be a non-negative integer");
            return ExitCode::FAILURE;
        }
    };

    let mut world = World::new(params);
    let mut completed = 0;
    while completed < generations {
        if world.advance(TICK).is_some() {
            completed += 1;
        }
    }

    if let Some(best) = world.history().best_ever() {
        info!(generations, best, seed = world.seed(), "run finished");
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
