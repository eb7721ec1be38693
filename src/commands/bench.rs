//! Seeding benchmark command
//!
//! Measures how often a single generation attempt lands in the acceptable
//! band when seeded from a hub versus a uniformly random start. The gap is
//! the whole justification for the hub heuristic, so it is worth checking
//! against a real dictionary.

use crate::engine::LadderEngine;
use crate::puzzle::{CancellationToken, GeneratorConfig, PuzzleGenerator};
use std::time::{Duration, Instant};

/// Result of a seeding comparison run
pub struct BenchResult {
    pub trials: usize,
    pub hub_successes: usize,
    pub random_successes: usize,
    pub hub_count: usize,
    pub duration: Duration,
}

impl BenchResult {
    /// Fraction of hub-seeded attempts that produced an acceptable puzzle
    #[must_use]
    pub fn hub_rate(&self) -> f64 {
        self.hub_successes as f64 / self.trials as f64
    }

    /// Fraction of random-seeded attempts that produced an acceptable puzzle
    #[must_use]
    pub fn random_rate(&self) -> f64 {
        self.random_successes as f64 / self.trials as f64
    }
}

/// Compare hub-seeded and random-seeded single attempts over `trials` runs
#[must_use]
pub fn run_bench(engine: &LadderEngine, trials: usize) -> BenchResult {
    let began = Instant::now();
    let token = CancellationToken::new();
    let graph = engine.graph();

    let hub_only = PuzzleGenerator::new(GeneratorConfig {
        hub_attempts: 1,
        random_attempts: 0,
        ..engine.generator().config().clone()
    });
    let random_only = PuzzleGenerator::new(GeneratorConfig {
        hub_attempts: 0,
        random_attempts: 1,
        ..engine.generator().config().clone()
    });

    let hubs = hub_only.hub_words(graph);
    let mut rng = rand::rng();

    let hub_successes = (0..trials)
        .filter(|_| {
            hub_only
                .generate_with_hubs(graph, &hubs, &mut rng, &token)
                .is_some()
        })
        .count();

    let random_successes = (0..trials)
        .filter(|_| {
            random_only
                .generate_with_hubs(graph, &hubs, &mut rng, &token)
                .is_some()
        })
        .count();

    BenchResult {
        trials,
        hub_successes,
        random_successes,
        hub_count: hubs.len(),
        duration: began.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;
    use std::sync::Arc;

    #[test]
    fn bench_counts_stay_in_range() {
        let dictionary = words_from_slice(&[
            "AAA", "AAB", "ABB", "BBB", "BBC", "BCC", "CCC", "CCD", "CDD", "DDD", "EEE", "FFF",
        ]);
        let config = GeneratorConfig {
            min_chain_length: 4,
            max_chain_length: None,
            hub_min_neighbors: 2,
            ..GeneratorConfig::for_length(3)
        };
        let engine = Arc::new(LadderEngine::new(3, dictionary, config));

        let result = run_bench(&engine, 50);
        assert_eq!(result.trials, 50);
        assert!(result.hub_successes <= 50);
        assert!(result.random_successes <= 50);
        assert!(result.hub_rate() >= result.random_rate() - 0.3);
    }
}
