//! Per-generation fitness summaries.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fitness summary of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation the summary belongs to (the first generation is 1).
    pub generation: u32,
    /// Mean fitness.
    pub average: f32,
    /// Highest fitness.
    pub best: f32,
    /// Lowest fitness.
    pub worst: f32,
}

impl GenerationStats {
    /// Summarises a generation's fitness values.
    ///
    /// An empty slice yields zeros.
    pub fn from_fitness(generation: u32, fitness: &[f32]) -> Self {
        if fitness.is_empty() {
            return Self {
                generation,
                average: 0.0,
                best: 0.0,
                worst: 0.0,
            };
        }

        let total: f32 = fitness.iter().sum();
        let best = fitness.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let worst = fitness.iter().copied().fold(f32::INFINITY, f32::min);

        Self {
            generation,
            average: total / fitness.len() as f32,
            best,
            worst,
        }
    }
}

/// Bounded history of generation summaries, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessHistory {
    records: VecDeque<GenerationStats>,
    capacity: usize,
}

impl Default for FitnessHistory {
    fn default() -> Self {
        Self::new(500)
    }
}

impl FitnessHistory {
    /// Creates an empty history keeping at most `capacity` summaries.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a summary, evicting the oldest ones beyond capacity.
    pub fn record(&mut self, stats: GenerationStats) {
        self.records.push_back(stats);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// Summaries, oldest first.
    pub fn records(&self) -> &VecDeque<GenerationStats> {
        &self.records
    }

    /// Most recent summary.
    pub fn latest(&self) -> Option<&GenerationStats> {
        self.records.back()
    }

    /// Highest best-fitness seen across the retained history.
    pub fn best_ever(&self) -> Option<f32> {
        self.records.iter().map(|r| r.best).reduce(f32::max)
    }

    /// Number of retained summaries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
