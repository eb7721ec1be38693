//! Puzzle generation
//!
//! Uniformly random word pairs are usually bad puzzles: either trivially close
//! or disconnected. The generator biases the start word toward "hubs" (words
//! with many neighbors), which lands in the target difficulty band within a
//! few tries on real dictionaries. A pure-random fallback covers word sets
//! where the hub scan comes up empty.

use super::cancel::CancellationToken;
use crate::core::{Chain, DEFAULT_MIN_CHAIN_LENGTH, Word};
use crate::graph::{DistanceMap, PathFinder, WordGraph};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;

/// One pre-validated puzzle: a shortest chain and its endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    chain: Chain,
    start: Word,
    end: Word,
}

impl Puzzle {
    /// Wrap a non-empty chain as a puzzle
    ///
    /// Returns `None` for an empty chain, which has no endpoints.
    #[must_use]
    pub fn from_chain(chain: Chain) -> Option<Self> {
        let start = chain.start()?.clone();
        let end = chain.end()?.clone();
        Some(Self { chain, start, end })
    }

    /// The full solution chain
    #[must_use]
    pub const fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Start word shown to the player
    #[must_use]
    pub const fn start(&self) -> &Word {
        &self.start
    }

    /// Target word of the puzzle
    #[must_use]
    pub const fn end(&self) -> &Word {
        &self.end
    }

    /// Number of substitutions in the solution
    #[must_use]
    pub fn steps(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }
}

/// Tuning knobs for puzzle generation
///
/// All attempt counts are hard bounds: generation is deterministic in
/// attempt-count terms regardless of host speed. Wall-clock limits, if
/// needed, belong to the caller.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Minimum acceptable chain length in words
    pub min_chain_length: usize,
    /// Optional maximum chain length, bounding puzzle difficulty
    pub max_chain_length: Option<usize>,
    /// A word is a hub when its neighbor count reaches this threshold
    pub hub_min_neighbors: usize,
    /// At most this many words are scanned for hubs
    pub hub_scan_budget: usize,
    /// Hub-seeded attempts before falling back to random starts
    pub hub_attempts: usize,
    /// Candidate target words sampled per attempt
    pub candidate_samples: usize,
    /// Pure-random fallback attempts before giving up
    pub random_attempts: usize,
}

impl GeneratorConfig {
    /// Preset tuned for one word length
    ///
    /// Short-word graphs are dense, so the hub bar is higher; longer words
    /// get a difficulty cap because their chains ramble.
    #[must_use]
    pub fn for_length(length: usize) -> Self {
        Self {
            min_chain_length: DEFAULT_MIN_CHAIN_LENGTH,
            max_chain_length: if length >= 5 { Some(8) } else { None },
            hub_min_neighbors: if length <= 4 { 6 } else { 5 },
            hub_scan_budget: 2000,
            hub_attempts: 30,
            candidate_samples: 100,
            random_attempts: 30,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_length(4)
    }
}

/// Produces acceptable-length puzzles from a word graph
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Create a generator with the given tuning
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The active tuning
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Scan for hub words: members whose degree meets the threshold
    ///
    /// The scan is capped at the configured budget and parallelized; degree
    /// counting is the expensive part on large word sets.
    #[must_use]
    pub fn hub_words(&self, graph: &WordGraph) -> Vec<Word> {
        let scanned = &graph.words()[..graph.len().min(self.config.hub_scan_budget)];

        scanned
            .par_iter()
            .filter(|word| graph.neighbor_count(word) >= self.config.hub_min_neighbors)
            .cloned()
            .collect()
    }

    /// Generate one puzzle, scanning for hubs first
    ///
    /// Convenience for one-shot callers; repeated generation should compute
    /// [`PuzzleGenerator::hub_words`] once and use
    /// [`PuzzleGenerator::generate_with_hubs`].
    #[must_use]
    pub fn generate(
        &self,
        graph: &WordGraph,
        rng: &mut impl Rng,
        token: &CancellationToken,
    ) -> Option<Puzzle> {
        let hubs = self.hub_words(graph);
        self.generate_with_hubs(graph, &hubs, rng, token)
    }

    /// Generate one puzzle from a precomputed hub set
    ///
    /// Bounded hub-seeded attempts, then bounded random-start attempts, then
    /// `None`. The token is polled between attempts; an attempt in progress
    /// always completes. `None` means "no puzzle this round", never a fatal
    /// condition: the caller retries on its own schedule.
    #[must_use]
    pub fn generate_with_hubs(
        &self,
        graph: &WordGraph,
        hubs: &[Word],
        rng: &mut impl Rng,
        token: &CancellationToken,
    ) -> Option<Puzzle> {
        let finder = PathFinder::new(graph);

        for _ in 0..self.config.hub_attempts {
            if token.is_cancelled() {
                return None;
            }
            let Some(start) = hubs.choose(rng).cloned() else {
                // No hubs in this word set; go straight to random starts
                break;
            };
            if let Some(puzzle) = self.attempt_from(graph, &finder, &start, rng) {
                return Some(puzzle);
            }
        }

        for _ in 0..self.config.random_attempts {
            if token.is_cancelled() {
                return None;
            }
            let start = graph.words().choose(rng)?.clone();
            if let Some(puzzle) = self.attempt_from(graph, &finder, &start, rng) {
                return Some(puzzle);
            }
        }

        None
    }

    /// One generation attempt from a fixed start word
    ///
    /// A single BFS from the start prices every possible target at once; the
    /// sampled candidates are then filtered against the acceptable band and
    /// one survivor is materialized into a full chain.
    fn attempt_from(
        &self,
        graph: &WordGraph,
        finder: &PathFinder<'_>,
        start: &Word,
        rng: &mut impl Rng,
    ) -> Option<Puzzle> {
        let distances = DistanceMap::compute(graph, start);

        let candidates: Vec<&Word> = (0..self.config.candidate_samples)
            .filter_map(|_| graph.words().choose(rng))
            .filter(|candidate| {
                distances
                    .distance_to(candidate)
                    .is_some_and(|d| self.in_band(d as usize + 1))
            })
            .collect();

        let end = candidates.choose(rng)?;
        let chain = finder.shortest_chain(start, end);

        if chain.is_acceptable(self.config.min_chain_length, self.config.max_chain_length) {
            Puzzle::from_chain(chain)
        } else {
            None
        }
    }

    fn in_band(&self, chain_length: usize) -> bool {
        chain_length >= self.config.min_chain_length
            && self
                .config
                .max_chain_length
                .is_none_or(|max| chain_length <= max)
    }
}
