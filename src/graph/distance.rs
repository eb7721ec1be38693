//! Distance precomputation
//!
//! Interactive play re-queries "how far is this word from the target" on every
//! letter edit, so distances are computed once per target with a single BFS
//! from the target and memoized. The cache is LRU-bounded: word-set size per
//! length is bounded, so capacity times map size caps resident memory.

use super::word_graph::WordGraph;
use crate::core::Word;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default number of distance maps kept resident per oracle
pub const DEFAULT_DISTANCE_CACHE_CAPACITY: usize = 100;

/// Shortest distances from every reachable word to one fixed target
///
/// An explicit `{target, distances}` pair: queries carry no hidden "current
/// target" state, and a held map stays coherent even after the oracle moves
/// on to other targets.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    target: Word,
    distances: FxHashMap<Word, u32>,
}

impl DistanceMap {
    /// Build the map with a single-source BFS from `target`
    ///
    /// If `target` is not in the graph the map is empty and every query
    /// returns `None`.
    #[must_use]
    pub fn compute(graph: &WordGraph, target: &Word) -> Self {
        let mut distances = FxHashMap::default();

        if graph.contains(target) {
            distances.insert(target.clone(), 0);
            let mut queue = VecDeque::from([target.clone()]);

            while let Some(current) = queue.pop_front() {
                let next = distances[&current] + 1;
                for neighbor in graph.neighbors(&current) {
                    if !distances.contains_key(neighbor) {
                        distances.insert(neighbor.clone(), next);
                        queue.push_back(neighbor.clone());
                    }
                }
            }
        }

        Self {
            target: target.clone(),
            distances,
        }
    }

    /// The target word this map was computed for
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Edge distance from `word` to the target
    ///
    /// `None` when `word` is unreachable from the target (or the target was
    /// not a graph member).
    #[must_use]
    pub fn distance_to(&self, word: &Word) -> Option<u32> {
        self.distances.get(word).copied()
    }

    /// Number of words reachable from the target, target included
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }
}

/// Counters exposed for tuning and eviction tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceCacheStats {
    pub hits: u64,
    pub computations: u64,
}

struct CacheSlot {
    map: Arc<DistanceMap>,
    last_used: u64,
}

/// Memoizing distance-map provider with LRU eviction
///
/// Owns one bounded cache keyed by target word. Bound to one word length's
/// graph by its caller; cleared wholesale when the word set changes.
pub struct DistanceOracle {
    capacity: usize,
    cache: FxHashMap<Word, CacheSlot>,
    tick: u64,
    stats: DistanceCacheStats,
}

impl DistanceOracle {
    /// Create an oracle holding at most `capacity` distance maps
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            cache: FxHashMap::default(),
            tick: 0,
            stats: DistanceCacheStats::default(),
        }
    }

    /// Get the distance map for `target`, computing it on a cache miss
    ///
    /// A hit bumps the entry's recency; a miss runs the BFS and may evict the
    /// least-recently-used entry. Targets outside the graph are not cached:
    /// their maps are empty and cheap to rebuild.
    pub fn precompute(&mut self, graph: &WordGraph, target: &Word) -> Arc<DistanceMap> {
        self.tick += 1;

        if let Some(slot) = self.cache.get_mut(target) {
            slot.last_used = self.tick;
            self.stats.hits += 1;
            return Arc::clone(&slot.map);
        }

        let map = Arc::new(DistanceMap::compute(graph, target));
        self.stats.computations += 1;

        if !graph.contains(target) {
            return map;
        }

        if self.cache.len() >= self.capacity {
            self.evict_lru();
        }

        self.cache.insert(
            target.clone(),
            CacheSlot {
                map: Arc::clone(&map),
                last_used: self.tick,
            },
        );

        map
    }

    /// Whether a map for `target` is currently resident
    #[must_use]
    pub fn is_cached(&self, target: &Word) -> bool {
        self.cache.contains_key(target)
    }

    /// Number of resident maps
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// True when no maps are resident
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Hit/computation counters
    #[must_use]
    pub const fn stats(&self) -> DistanceCacheStats {
        self.stats
    }

    /// Drop all resident maps, e.g. when the word set changes
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Evict the entry with the smallest recency stamp
    fn evict_lru(&mut self) {
        let oldest = self
            .cache
            .iter()
            .min_by_key(|(_, slot)| slot.last_used)
            .map(|(word, _)| word.clone());

        if let Some(word) = oldest {
            self.cache.remove(&word);
        }
    }
}

impl Default for DistanceOracle {
    fn default() -> Self {
        Self::new(DEFAULT_DISTANCE_CACHE_CAPACITY)
    }
}
