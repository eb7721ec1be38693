//! Distance query command
//!
//! Precomputes distances to a target and answers batched queries against it.

use crate::core::Word;
use crate::engine::LadderEngine;

/// Result of a batched distance query
pub struct DistanceResult {
    pub target: Word,
    pub reachable: usize,
    pub queries: Vec<(Word, Option<u32>)>,
}

/// Query distances from each of `words` to `target`
///
/// One precompute covers all queries; this is the same access pattern the
/// interactive hint path uses on every letter edit.
#[must_use]
pub fn query_distances(engine: &LadderEngine, target: &Word, words: &[Word]) -> DistanceResult {
    let map = engine.precompute_distances(target);

    let queries = words
        .iter()
        .map(|word| (word.clone(), map.distance_to(word)))
        .collect();

    DistanceResult {
        target: target.clone(),
        reachable: map.reachable_count(),
        queries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn batched_queries_match_oracle() {
        let engine = LadderEngine::with_defaults(
            3,
            words_from_slice(&["cat", "cot", "dot", "dog", "cog"]),
        );

        let result = query_distances(
            &engine,
            &word("dog"),
            &[word("dog"), word("cot"), word("zzz")],
        );

        assert_eq!(result.queries[0].1, Some(0));
        assert_eq!(result.queries[1].1, Some(2));
        assert_eq!(result.queries[2].1, None);
        assert_eq!(result.reachable, 5);
    }
}
