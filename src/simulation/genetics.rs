//! Generational genetic algorithm over network weights.
//!
//! Each creature's genome is its network's flattened weight vector. A generation
//! ends with [`Population::evolve`]: creatures are ranked by fitness, the elite
//! fraction survives unchanged, and every other slot is refilled with a
//! single-point crossover of two elites followed by per-gene mutation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::brain::NeuralNetwork;

/// A network paired with the fitness it earned in the current generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Controller network.
    pub brain: NeuralNetwork,
    /// Fitness for the current generation, reset to zero by `evolve`.
    pub fitness: f32,
}

impl Creature {
    /// Wraps a network with zero fitness.
    pub fn new(brain: NeuralNetwork) -> Self {
        Self {
            brain,
            fitness: 0.0,
        }
    }
}

/// Selection and variation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvolutionParams {
    /// Probability that a single gene of a child is perturbed.
    pub mutation_rate: f32,
    /// Perturbations are drawn uniformly from `[-mutation_scale, mutation_scale]`.
    pub mutation_scale: f32,
    /// Share of the population kept unchanged each generation.
    pub elite_fraction: f32,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            mutation_rate: 0.05,
            mutation_scale: 0.1,
            elite_fraction: 0.2,
        }
    }
}

/// Number of elites for a population: `floor(size · fraction)`, at least one.
pub fn elite_count(population_size: usize, elite_fraction: f32) -> usize {
    let count = (population_size as f64 * f64::from(elite_fraction)) as usize;
    if count == 0 && population_size > 0 {
        1
    } else {
        count.min(population_size)
    }
}

/// A fixed-size population of creatures sharing one network shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Population {
    creatures: Vec<Creature>,
    gene_count: usize,
    evolution: EvolutionParams,
}

impl Population {
    /// Creates `size` creatures with random networks, drawn in slot order.
    pub fn new_random<R: Rng>(
        size: usize,
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        evolution: EvolutionParams,
        rng: &mut R,
    ) -> Self {
        let creatures = (0..size)
            .map(|_| {
                Creature::new(NeuralNetwork::new_random(
                    input_count,
                    hidden_count,
                    output_count,
                    rng,
                ))
            })
            .collect();

        Self {
            creatures,
            gene_count: input_count * hidden_count + hidden_count * output_count,
            evolution,
        }
    }

    /// Builds a population from existing creatures.
    ///
    /// All networks must share the shape of the first one.
    pub fn from_creatures(creatures: Vec<Creature>, evolution: EvolutionParams) -> Self {
        let gene_count = creatures.first().map_or(0, |c| c.brain.gene_count());
        Self {
            creatures,
            gene_count,
            evolution,
        }
    }

    /// Number of creatures.
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Returns true if the population holds no creatures.
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Length of every creature's genome.
    pub fn gene_count(&self) -> usize {
        self.gene_count
    }

    /// Selection and variation settings.
    pub fn evolution(&self) -> &EvolutionParams {
        &self.evolution
    }

    /// Probability that a single gene of a child is perturbed.
    pub fn mutation_rate(&self) -> f32 {
        self.evolution.mutation_rate
    }

    /// Creatures in slot order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Mutable access to the creatures; the slot count cannot change.
    pub fn creatures_mut(&mut self) -> &mut [Creature] {
        &mut self.creatures
    }

    /// Elite count for the current size.
    pub fn elite_count(&self) -> usize {
        elite_count(self.creatures.len(), self.evolution.elite_fraction)
    }

    /// Slot indices ordered by descending fitness. Ties keep slot order.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.creatures.len()).collect();
        order.sort_by(|&a, &b| {
            self.creatures[b]
                .fitness
                .total_cmp(&self.creatures[a].fitness)
        });
        order
    }

    /// Replaces the population with the next generation.
    ///
    /// Afterwards slots `[0, elite_count)` hold the elites in rank order with
    /// their weights untouched, the remaining slots hold mutated crossovers of
    /// elites, and every fitness is zero.
    pub fn evolve<R: Rng>(&mut self, rng: &mut R) {
        let size = self.creatures.len();
        if size == 0 {
            return;
        }

        let order = self.ranking();
        let elites = self.elite_count();
        let gene_count = self.gene_count;

        let elite_genes: Vec<Vec<f32>> = order[..elites]
            .iter()
            .map(|&index| self.creatures[index].brain.flatten())
            .collect();

        let mut children: Vec<Vec<f32>> = (elites..size)
            .map(|_| {
                let first = &elite_genes[rng.random_range(0..elites)];
                let second = &elite_genes[rng.random_range(0..elites)];
                let point = if gene_count == 0 {
                    0
                } else {
                    rng.random_range(0..gene_count)
                };

                let mut child = Vec::with_capacity(gene_count);
                child.extend_from_slice(&first[..point]);
                child.extend_from_slice(&second[point..]);
                child
            })
            .collect();

        let EvolutionParams {
            mutation_rate,
            mutation_scale,
            ..
        } = self.evolution;
        for child in &mut children {
            for gene in child.iter_mut() {
                if rng.random::<f32>() < mutation_rate {
                    *gene += rng.random_range(-mutation_scale..=mutation_scale);
                }
            }
        }

        // Move each creature once into its ranked slot.
        let mut slots: Vec<Option<Creature>> = std::mem::take(&mut self.creatures)
            .into_iter()
            .map(Some)
            .collect();
        self.creatures = order
            .iter()
            .filter_map(|&index| slots[index].take())
            .collect();

        for (creature, genes) in self.creatures[elites..].iter_mut().zip(&children) {
            creature.brain.restore(genes);
        }
        for creature in &mut self.creatures {
            creature.fitness = 0.0;
        }

        debug!(
            elites,
            children = children.len(),
            leader = order[0],
            "population evolved"
        );
    }
}
