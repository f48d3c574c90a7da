use std::path::Path;

use serde::{Deserialize, Serialize};

use super::biped::{ACTUATOR_COUNT, SENSOR_COUNT};
use super::error::ConfigError;
use super::genetics::EvolutionParams;
use super::physics::Vec2;

/// Simulation parameters that control the walker population.
///
/// Coordinates follow the screen: +x right, +y down, so the ground is a
/// horizontal line at `ground_y` and points above it have a smaller `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Number of creatures (and bipeds).
    pub population_size: usize,
    /// Network inputs, must equal the biped sensor count.
    pub input_count: usize,
    /// Hidden units.
    pub hidden_count: usize,
    /// Network outputs, the first four drive the actuators.
    pub output_count: usize,
    /// Probability that a single gene of a child is perturbed.
    pub mutation_rate: f32,
    /// Half-width of the uniform mutation perturbation.
    pub mutation_scale: f32,
    /// Share of the population kept unchanged each generation.
    pub elite_fraction: f32,
    /// Simulated seconds per generation.
    pub generation_duration: f32,
    /// Height of the ground line.
    pub ground_y: f32,
    /// Horizontal start position of each biped's chest.
    pub start_x: f32,
    /// Vertical start position of each biped's chest.
    pub start_y: f32,
    /// Downward force applied to every point each tick.
    pub gravity: f32,
    /// Constraint passes per tick.
    pub relaxation_passes: usize,
    /// Horizontal force scale of the ankle actuators.
    pub ankle_force: f32,
    /// Horizontal force scale of the hand actuators.
    pub hand_force: f32,
    /// Divisor normalising sensor offsets.
    pub sensor_scale: f32,
    /// Fitness weight of the accumulated upright bonus.
    pub upright_weight: f32,
    /// Fitness penalty per second with both feet off the ground.
    pub air_penalty: f32,
    /// Ankle clearance above the ground that counts as airborne.
    pub airborne_clearance: f32,
    /// Render radius of the head.
    pub head_radius: f32,
    /// Seed for the random stream; drawn from the thread RNG when unset.
    pub seed: Option<u64>,
    /// Number of generation summaries kept in the history.
    pub history_capacity: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            population_size: 50,
            input_count: SENSOR_COUNT,
            hidden_count: 16,
            output_count: ACTUATOR_COUNT,
            mutation_rate: 0.05,
            mutation_scale: 0.1,
            elite_fraction: 0.2,
            generation_duration: 10.0,
            ground_y: 620.0,
            start_x: 200.0,
            start_y: 520.0,
            gravity: 50.0,
            relaxation_passes: 5,
            ankle_force: 2000.0,
            hand_force: 1000.0,
            sensor_scale: 100.0,
            upright_weight: 5.0,
            air_penalty: 20.0,
            airborne_clearance: 1.0,
            head_radius: 8.0,
            seed: None,
            history_capacity: 500,
        }
    }
}

impl Params {
    /// Reads and validates parameters from a JSON file.
    ///
    /// Missing fields take their default value.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses and validates parameters from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks that the parameters describe a runnable simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::Invalid("population_size must be positive"));
        }
        if self.input_count != SENSOR_COUNT {
            return Err(ConfigError::Invalid(
                "input_count must match the biped sensor count (8)",
            ));
        }
        if self.hidden_count == 0 {
            return Err(ConfigError::Invalid("hidden_count must be positive"));
        }
        if self.output_count < ACTUATOR_COUNT {
            return Err(ConfigError::Invalid(
                "output_count must cover the biped actuators (4)",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::Invalid("mutation_rate must be within [0, 1]"));
        }
        if !(self.mutation_scale >= 0.0 && self.mutation_scale.is_finite()) {
            return Err(ConfigError::Invalid("mutation_scale must be non-negative"));
        }
        if !(self.elite_fraction > 0.0 && self.elite_fraction <= 1.0) {
            return Err(ConfigError::Invalid("elite_fraction must be within (0, 1]"));
        }
        if !(self.generation_duration > 0.0 && self.generation_duration.is_finite()) {
            return Err(ConfigError::Invalid(
                "generation_duration must be a positive number of seconds",
            ));
        }
        if self.relaxation_passes == 0 {
            return Err(ConfigError::Invalid("relaxation_passes must be positive"));
        }
        if self.sensor_scale == 0.0 {
            return Err(ConfigError::Invalid("sensor_scale must be non-zero"));
        }
        Ok(())
    }

    /// Selection and variation settings for the population.
    pub fn evolution(&self) -> EvolutionParams {
        EvolutionParams {
            mutation_rate: self.mutation_rate,
            mutation_scale: self.mutation_scale,
            elite_fraction: self.elite_fraction,
        }
    }

    /// Chest position every biped starts a generation from.
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }

    /// Number of weights in one network.
    pub fn gene_count(&self) -> usize {
        self.input_count * self.hidden_count + self.hidden_count * self.output_count
    }
}
