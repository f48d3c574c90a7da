//! # Walker - Evolving Bipedal Locomotion
//!
//! A population of stick-figure bipeds learns to walk. Each biped is a Verlet
//! point-mass skeleton driven by a small feedforward network, and a
//! generational genetic algorithm evolves the network weights from the distance
//! each biped covers within a fixed simulated time.
//!
//! ## Features
//!
//! - Position-Verlet physics with distance-constraint relaxation
//! - Single-hidden-layer tanh networks whose weights form the genome
//! - Elitist genetic algorithm with single-point crossover and per-gene mutation
//! - Seeded, deterministic runs
//! - Real-time visualization with egui/macroquad, or headless runs
//!
//! ## Core Modules
//!
//! - [`simulation::physics`] - Point masses and constraints
//! - [`simulation::brain`] - Neural network controller
//! - [`simulation::genetics`] - Population and evolution
//! - [`simulation::biped`] - Walker body, sensors and actuators
//! - [`simulation::world`] - Generation loop and render queries
//!
//! ```no_run
//! use walker::simulation::world::World;
//!
//! let mut world = World::create(50, 8, 16, 4, 0.05);
//! loop {
//!     if let Some(stats) = world.advance(1.0 / 60.0) {
//!         println!("generation {} best {:.1}", stats.generation, stats.best);
//!     }
//! }
//! ```

/// Core simulation logic and data structures.
pub mod simulation {
    /// Walker body, sensors, actuators and fitness signals.
    pub mod biped;
    /// Feedforward network controlling a biped.
    pub mod brain;
    /// Configuration errors.
    pub mod error;
    /// Creatures, population and the generational evolve step.
    pub mod genetics;
    /// Simulation parameters.
    pub mod params;
    /// Point masses, constraints and 2D vectors.
    pub mod physics;
    /// Declarative joint and bone tables.
    pub mod skeleton;
    /// Generation fitness summaries.
    pub mod stats;
    /// The simulation state and its per-tick driver.
    pub mod world;
}
