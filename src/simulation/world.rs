//! Generation loop tying bipeds to the evolving population.
//!
//! The world owns one [`Population`] and an equally long array of [`Biped`]s.
//! Biped `i` is driven by whichever creature currently occupies slot `i`; after
//! `evolve` reorders the population, the pairing follows the slot, not the
//! creature. Each call to [`World::advance`] steps every biped once and, when the
//! generation's simulated duration is reached, scores the bipeds, evolves the
//! population and resets the bodies.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use super::biped::Biped;
use super::genetics::Population;
use super::params::Params;
use super::physics::Vec2;
use super::stats::{FitnessHistory, GenerationStats};

/// Head of a biped as drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Head {
    /// Head position.
    pub center: Vec2,
    /// Head radius.
    pub radius: f32,
}

/// The complete simulation state.
#[derive(Debug, Clone)]
pub struct World {
    params: Params,
    population: Population,
    bipeds: Vec<Biped>,
    rng: ChaCha8Rng,
    seed: u64,
    /// Generation currently being evaluated, starting at 1.
    generation: u32,
    /// Simulated seconds elapsed in the current generation.
    sim_time: f32,
    history: FitnessHistory,
}

impl World {
    /// Creates a world from validated parameters.
    ///
    /// Networks are initialised from the seeded stream in slot order. Without a
    /// configured seed one is drawn from the thread RNG and logged.
    pub fn new(params: Params) -> Self {
        let seed = params.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let population = Population::new_random(
            params.population_size,
            params.input_count,
            params.hidden_count,
            params.output_count,
            params.evolution(),
            &mut rng,
        );

        let start = params.start_position();
        let bipeds = (0..params.population_size)
            .map(|_| Biped::new(start))
            .collect();

        info!(
            population = params.population_size,
            genes = population.gene_count(),
            seed,
            "world created"
        );

        Self {
            history: FitnessHistory::new(params.history_capacity),
            params,
            population,
            bipeds,
            rng,
            seed,
            generation: 1,
            sim_time: 0.0,
        }
    }

    /// Creates a world with default parameters apart from the population shape.
    pub fn create(
        population_size: usize,
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        mutation_rate: f32,
    ) -> Self {
        Self::new(Params {
            population_size,
            input_count,
            hidden_count,
            output_count,
            mutation_rate,
            ..Params::default()
        })
    }

    /// Advances every biped by `dt` seconds.
    ///
    /// Returns the finished generation's summary on the tick that reaches the
    /// generation duration.
    pub fn advance(&mut self, dt: f32) -> Option<GenerationStats> {
        self.sim_time += dt;

        for (biped, creature) in self
            .bipeds
            .iter_mut()
            .zip(self.population.creatures_mut())
        {
            biped.step(&mut creature.brain, dt, &self.params);
        }

        if self.sim_time >= self.params.generation_duration {
            Some(self.end_generation())
        } else {
            None
        }
    }

    /// Scores the bipeds, evolves the population and starts the next generation.
    fn end_generation(&mut self) -> GenerationStats {
        let fitness: Vec<f32> = self
            .bipeds
            .iter()
            .map(|biped| biped.fitness(&self.params))
            .collect();
        for (creature, value) in self.population.creatures_mut().iter_mut().zip(&fitness) {
            creature.fitness = *value;
        }

        let stats = GenerationStats::from_fitness(self.generation, &fitness);
        self.population.evolve(&mut self.rng);

        info!(
            "generation {} | avg fitness {:.2} | best {:.2} | worst {:.2}",
            stats.generation, stats.average, stats.best, stats.worst
        );
        self.history.record(stats);

        for biped in &mut self.bipeds {
            biped.reset();
        }
        self.generation += 1;
        self.sim_time = 0.0;

        stats
    }

    /// Parameters the world was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Seed of the world's random stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generation currently being evaluated (starts at 1).
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Simulated seconds elapsed in the current generation.
    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }

    /// The evolving population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Mutable access to the population, e.g. to seed known controllers.
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    /// All bipeds, index-aligned with the population's slots.
    pub fn bipeds(&self) -> &[Biped] {
        &self.bipeds
    }

    /// Summaries of completed generations.
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }

    /// Height of the ground line.
    pub fn ground_y(&self) -> f32 {
        self.params.ground_y
    }

    /// Bone endpoints of biped `index`, in bone-table order.
    pub fn segments(&self, index: usize) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.bipeds[index].segments()
    }

    /// Head of biped `index`.
    pub fn head(&self, index: usize) -> Head {
        Head {
            center: self.bipeds[index].head(),
            radius: self.params.head_radius,
        }
    }
}
