//! Puzzle generation command
//!
//! Exercises the full supply path: register the engine with a puzzle cache,
//! warm it, and drain the requested number of puzzles. Shortfalls fall back
//! to direct generation, mirroring what a session layer does on a cache miss.

use crate::engine::LadderEngine;
use crate::puzzle::{CancellationToken, Puzzle, PuzzleCache};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a generation run
pub struct GenerateResult {
    pub puzzles: Vec<Puzzle>,
    pub requested: usize,
    pub served_from_cache: usize,
    pub duration: Duration,
}

/// Generate up to `count` puzzles for the engine's word length
///
/// Fewer than `count` puzzles means generation kept exhausting its attempt
/// budget; the word set is probably too sparse for the configured band.
#[must_use]
pub fn generate_puzzles(engine: &Arc<LadderEngine>, count: usize) -> GenerateResult {
    let began = Instant::now();
    let length = engine.length();

    let cache = PuzzleCache::new(count.max(1));
    cache.register(Arc::clone(engine));
    cache.refill_blocking(length);

    let mut puzzles = Vec::with_capacity(count);
    let mut served_from_cache = 0;
    let token = CancellationToken::new();

    while puzzles.len() < count {
        if let Some(puzzle) = cache.get_puzzle(length) {
            served_from_cache += 1;
            puzzles.push(puzzle);
        } else if let Some(puzzle) = engine.generate_puzzle(&token) {
            puzzles.push(puzzle);
        } else {
            break;
        }
    }

    GenerateResult {
        puzzles,
        requested: count,
        served_from_cache,
        duration: began.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GeneratorConfig;
    use crate::wordlists::words_from_slice;

    fn line_engine() -> Arc<LadderEngine> {
        let dictionary = words_from_slice(&[
            "AAA", "AAB", "ABB", "BBB", "BBC", "BCC", "CCC", "CCD", "CDD", "DDD",
        ]);
        let config = GeneratorConfig {
            min_chain_length: 4,
            max_chain_length: None,
            hub_min_neighbors: 2,
            ..GeneratorConfig::for_length(3)
        };
        Arc::new(LadderEngine::new(3, dictionary, config))
    }

    #[test]
    fn generates_requested_count() {
        let engine = line_engine();
        let result = generate_puzzles(&engine, 3);

        assert_eq!(result.puzzles.len(), 3);
        for puzzle in &result.puzzles {
            assert!(puzzle.chain().is_valid());
            assert!(engine.is_valid_word(puzzle.start()));
            assert!(engine.is_valid_word(puzzle.end()));
        }
    }

    #[test]
    fn sparse_dictionary_comes_up_short() {
        let engine = Arc::new(LadderEngine::with_defaults(
            3,
            words_from_slice(&["cat", "dig"]),
        ));
        let result = generate_puzzles(&engine, 2);

        assert!(result.puzzles.is_empty());
        assert_eq!(result.requested, 2);
    }
}
