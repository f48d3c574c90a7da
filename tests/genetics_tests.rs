#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use walker::simulation::brain::NeuralNetwork;
use walker::simulation::genetics::{Creature, EvolutionParams, Population, elite_count};

fn create_population(size: usize, seed: u64, evolution: EvolutionParams) -> Population {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Population::new_random(size, 8, 16, 4, evolution, &mut rng)
}

fn assign_fitness(population: &mut Population, fitness: &[f32]) {
    for (creature, value) in population.creatures_mut().iter_mut().zip(fitness) {
        creature.fitness = *value;
    }
}

fn genomes(population: &Population) -> Vec<Vec<f32>> {
    population
        .creatures()
        .iter()
        .map(|c| c.brain.flatten())
        .collect()
}

#[test]
fn test_elite_count_rules() {
    assert_eq!(elite_count(50, 0.2), 10);
    assert_eq!(elite_count(10, 0.2), 2);
    assert_eq!(elite_count(9, 0.2), 1);
    assert_eq!(elite_count(5, 0.2), 1);
    assert_eq!(elite_count(4, 0.2), 1);
    assert_eq!(elite_count(1, 0.2), 1);
    assert_eq!(elite_count(0, 0.2), 0);
    assert_eq!(elite_count(3, 1.0), 3);
}

#[test]
fn test_population_creation() {
    let population = create_population(10, 1, EvolutionParams::default());

    assert_eq!(population.len(), 10);
    assert_eq!(population.gene_count(), 8 * 16 + 16 * 4);
    assert_eq!(population.mutation_rate(), 0.05);
    for creature in population.creatures() {
        assert_eq!(creature.fitness, 0.0);
        assert_eq!(creature.brain.gene_count(), population.gene_count());
    }
}

#[test]
fn test_ranking_is_descending_and_stable() {
    let mut population = create_population(5, 2, EvolutionParams::default());
    assign_fitness(&mut population, &[1.0, 5.0, 3.0, 5.0, 0.0]);

    assert_eq!(population.ranking(), vec![1, 3, 2, 0, 4]);
}

#[test]
fn test_evolve_preserves_elite_genomes() {
    let mut population = create_population(10, 3, EvolutionParams::default());
    assign_fitness(
        &mut population,
        &[2.0, 9.0, 1.0, 4.0, 0.0, 7.5, 3.0, 8.0, 6.0, 5.0],
    );
    let before = genomes(&population);

    let mut rng = ChaCha8Rng::seed_from_u64(30);
    population.evolve(&mut rng);
    let after = genomes(&population);

    // slots 1 and 7 held the two best creatures; they now lead in rank order
    assert_eq!(after[0], before[1]);
    assert_eq!(after[1], before[7]);
    assert_eq!(population.len(), 10);
    assert_eq!(population.gene_count(), 8 * 16 + 16 * 4);
}

#[test]
fn test_evolve_resets_all_fitness() {
    let mut population = create_population(8, 4, EvolutionParams::default());
    assign_fitness(&mut population, &[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);

    population.evolve(&mut ChaCha8Rng::seed_from_u64(40));

    assert!(population.creatures().iter().all(|c| c.fitness == 0.0));
}

#[test]
fn test_children_are_single_point_crossovers_without_mutation() {
    let evolution = EvolutionParams {
        mutation_rate: 0.0,
        ..EvolutionParams::default()
    };
    let mut population = create_population(10, 5, evolution);
    assign_fitness(
        &mut population,
        &[10.0, 9.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    );

    population.evolve(&mut ChaCha8Rng::seed_from_u64(50));

    let after = genomes(&population);
    let elites = &after[..2];
    for child in &after[2..] {
        let is_crossover = elites.iter().any(|first| {
            elites.iter().any(|second| {
                (0..child.len()).any(|point| {
                    child[..point] == first[..point] && child[point..] == second[point..]
                })
            })
        });
        assert!(is_crossover, "child is not a crossover of two elites");
    }
}

#[test]
fn test_mutation_perturbs_within_scale() {
    let template = NeuralNetwork::new_random(8, 16, 4, &mut ChaCha8Rng::seed_from_u64(6));
    let creatures = (0..5).map(|_| Creature::new(template.clone())).collect();
    let evolution = EvolutionParams {
        mutation_rate: 1.0,
        mutation_scale: 0.1,
        elite_fraction: 0.2,
    };
    let mut population = Population::from_creatures(creatures, evolution);

    population.evolve(&mut ChaCha8Rng::seed_from_u64(60));

    let parent = template.flatten();
    for child in &genomes(&population)[1..] {
        assert_ne!(child, &parent);
        for (gene, original) in child.iter().zip(&parent) {
            assert!((gene - original).abs() <= 0.1 + 1e-6);
        }
    }
    assert_eq!(population.creatures()[0].brain, template);
}

#[test]
fn test_single_creature_survives_unchanged() {
    let mut population = create_population(1, 7, EvolutionParams::default());
    population.creatures_mut()[0].fitness = 12.0;
    let before = population.creatures()[0].brain.clone();

    population.evolve(&mut ChaCha8Rng::seed_from_u64(70));

    assert_eq!(population.creatures()[0].brain, before);
    assert_eq!(population.creatures()[0].fitness, 0.0);
}

#[test]
fn test_evolve_is_deterministic_for_a_seed() {
    let fitness = [4.0, 2.0, 8.0, 1.0, 3.0, 7.0];
    let mut a = create_population(6, 8, EvolutionParams::default());
    let mut b = create_population(6, 8, EvolutionParams::default());
    assign_fitness(&mut a, &fitness);
    assign_fitness(&mut b, &fitness);

    a.evolve(&mut ChaCha8Rng::seed_from_u64(80));
    b.evolve(&mut ChaCha8Rng::seed_from_u64(80));

    assert_eq!(genomes(&a), genomes(&b));
}

#[test]
fn test_empty_population_evolves_to_empty() {
    let mut population = Population::from_creatures(Vec::new(), EvolutionParams::default());

    population.evolve(&mut ChaCha8Rng::seed_from_u64(90));

    assert!(population.is_empty());
    assert_eq!(population.gene_count(), 0);
}
