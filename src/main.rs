use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use walker::simulation::params::Params;
use walker::simulation::world::World;

mod graphics;
mod ui;

/// Fixed simulation step in seconds.
const TICK: f32 = 1.0 / 60.0;
/// Upper bound on simulation steps per rendered frame.
const MAX_TICKS_PER_FRAME: usize = 600;

fn window_conf() -> Conf {
    Conf {
        window_title: "Walker".to_owned(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let params = load_params();
    let mut world = World::new(params.clone());
    let mut ui_state = ui::UiState::new();
    let mut accumulator = 0.0;

    info!("Starting walker simulation");

    loop {
        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            world = World::new(params.clone());
            accumulator = 0.0;
        }

        if !ui_state.paused {
            accumulator += get_frame_time() * ui_state.simulation_speed;
            let mut ticks = 0;
            while accumulator >= TICK && ticks < MAX_TICKS_PER_FRAME {
                world.advance(TICK);
                accumulator -= TICK;
                ticks += 1;
            }
            // Drop the backlog instead of spiralling when the machine cannot keep up.
            if ticks == MAX_TICKS_PER_FRAME {
                accumulator = 0.0;
            }
        }

        clear_background(Color::from_rgba(20, 20, 20, 255));
        if ui_state.rendering_enabled {
            graphics::draw_world(&world);
        }
        ui::draw_ui(&mut ui_state, &world);

        next_frame().await
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Reads parameters from the JSON file named by the first argument, if any.
fn load_params() -> Params {
    let Some(path) = std::env::args().nth(1) else {
        return Params::default();
    };

    match Params::from_json_file(&path) {
        Ok(params) => {
            info!(path = %path, "loaded configuration");
            params
        }
        Err(err) => {
            error!(path = %path, %err, "falling back to default configuration");
            Params::default()
        }
    }
}
