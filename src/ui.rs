use egui_macroquad::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use walker::simulation::world::World;

pub struct UiState {
    pub stats_panel_width: f32,
    pub simulation_speed: f32,
    pub paused: bool,
    pub rendering_enabled: bool,
    pub reset_requested: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 300.0,
            simulation_speed: 1.0,
            paused: false,
            rendering_enabled: true,
            reset_requested: false,
        }
    }
}

pub fn draw_ui(state: &mut UiState, world: &World) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        draw_stats_panel(egui_ctx, state, world);
    });

    egui_macroquad::draw();
}

fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UiState, world: &World) {
    egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Walker");
            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
            });

            ui.horizontal(|ui| {
                let button_text = if state.rendering_enabled {
                    "🎨 Rendering: ON"
                } else {
                    "🎨 Rendering: OFF"
                };
                if ui.button(button_text).clicked() {
                    state.rendering_enabled = !state.rendering_enabled;
                }
            });

            ui.separator();

            ui.label("Simulation Speed");
            ui.add(egui::Slider::new(&mut state.simulation_speed, 0.1..=30.0).text("x"));

            ui.separator();

            ui.label(format!("Generation: {}", world.generation()));
            ui.label(format!(
                "Time: {:.1}s / {:.1}s",
                world.sim_time(),
                world.params().generation_duration
            ));
            ui.label(format!("Population: {}", world.population().len()));
            ui.label(format!("Genes: {}", world.population().gene_count()));
            ui.label(format!("Seed: {}", world.seed()));

            if let Some(latest) = world.history().latest() {
                ui.separator();
                ui.label(format!("Last generation: {}", latest.generation));
                ui.label(format!("Average: {:.2}", latest.average));
                ui.label(format!("Best: {:.2}", latest.best));
                ui.label(format!("Worst: {:.2}", latest.worst));
            }
            if let Some(best) = world.history().best_ever() {
                ui.label(format!("Best ever: {:.2}", best));
            }

            ui.separator();
            ui.label("Fitness per generation");
            draw_fitness_plot(ui, world);
        });
}

fn draw_fitness_plot(ui: &mut egui::Ui, world: &World) {
    let records = world.history().records();
    if records.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let best: PlotPoints = records
        .iter()
        .map(|r| [r.generation as f64, r.best as f64])
        .collect();
    let average: PlotPoints = records
        .iter()
        .map(|r| [r.generation as f64, r.average as f64])
        .collect();

    Plot::new("fitness_plot")
        .height(200.0)
        .show_axes([true, true])
        .legend(Legend::default())
        .label_formatter(|name, value| {
            format!("{}: Generation {:.0}, Fitness {:.1}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(best).name("best"));
            plot_ui.line(Line::new(average).name("average"));
        });
}
