//! Engine facade
//!
//! One `LadderEngine` serves one word length: it owns that length's graph,
//! distance oracle, and generator tuning. Instances are constructed
//! explicitly and handed to whoever needs them; there is no process-wide
//! shared engine. Work for different lengths runs on separate instances with
//! no shared mutable state between them.

use crate::core::{Chain, Word};
use crate::graph::{DistanceCacheStats, DistanceMap, DistanceOracle, PathFinder, WordGraph};
use crate::puzzle::{CancellationToken, GeneratorConfig, Puzzle, PuzzleGenerator};
use std::sync::{Arc, Mutex, PoisonError};

/// Word-ladder engine for one fixed word length
///
/// Interactive queries (validity, chains, distances) run synchronously on the
/// caller's thread; puzzle generation is cheap enough for a background worker
/// but too slow for a keystroke, so callers are expected to go through the
/// puzzle cache first.
pub struct LadderEngine {
    graph: WordGraph,
    oracle: Mutex<DistanceOracle>,
    generator: PuzzleGenerator,
}

impl LadderEngine {
    /// Build an engine over the supplied dictionary
    ///
    /// Words whose length does not match are dropped by graph construction.
    #[must_use]
    pub fn new(
        length: usize,
        dictionary: impl IntoIterator<Item = Word>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            graph: WordGraph::new(length, dictionary),
            oracle: Mutex::new(DistanceOracle::default()),
            generator: PuzzleGenerator::new(config),
        }
    }

    /// Build an engine with the per-length default tuning
    #[must_use]
    pub fn with_defaults(length: usize, dictionary: impl IntoIterator<Item = Word>) -> Self {
        Self::new(length, dictionary, GeneratorConfig::for_length(length))
    }

    /// The underlying word graph
    #[must_use]
    pub const fn graph(&self) -> &WordGraph {
        &self.graph
    }

    /// The puzzle generator bound to this engine's tuning
    #[must_use]
    pub const fn generator(&self) -> &PuzzleGenerator {
        &self.generator
    }

    /// Word length served by this engine
    #[must_use]
    pub const fn length(&self) -> usize {
        self.graph.length()
    }

    /// Dictionary membership test
    #[must_use]
    pub fn is_valid_word(&self, word: &Word) -> bool {
        self.graph.contains(word)
    }

    /// Shortest chain between two words; empty when none exists
    #[must_use]
    pub fn shortest_chain(&self, start: &Word, end: &Word) -> Chain {
        PathFinder::new(&self.graph).shortest_chain(start, end)
    }

    /// Distance map for `target`, served from the LRU cache when resident
    ///
    /// The returned map is a standalone `{target, distances}` pair; it stays
    /// valid however the cache evolves afterwards.
    pub fn precompute_distances(&self, target: &Word) -> Arc<DistanceMap> {
        self.lock_oracle().precompute(&self.graph, target)
    }

    /// Distance from `word` to `target`, precomputing if needed
    ///
    /// Callers issuing many queries against one target should hold the map
    /// from [`LadderEngine::precompute_distances`] instead.
    pub fn distance_to(&self, target: &Word, word: &Word) -> Option<u32> {
        self.precompute_distances(target).distance_to(word)
    }

    /// Distance cache counters, for tuning and tests
    pub fn distance_cache_stats(&self) -> DistanceCacheStats {
        self.lock_oracle().stats()
    }

    /// Generate one puzzle synchronously on the calling thread
    ///
    /// The direct fallback for a cold puzzle cache. `None` after the bounded
    /// attempt budget; the caller owns any retry-with-delay policy.
    #[must_use]
    pub fn generate_puzzle(&self, token: &CancellationToken) -> Option<Puzzle> {
        self.generator
            .generate(&self.graph, &mut rand::rng(), token)
    }

    fn lock_oracle(&self) -> std::sync::MutexGuard<'_, DistanceOracle> {
        // Oracle state is just a cache; a panic mid-update cannot corrupt it
        // beyond what clear() fixes, so poisoning is ignored.
        self.oracle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
