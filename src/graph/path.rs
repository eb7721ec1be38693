//! Shortest-chain search
//!
//! Bidirectional breadth-first search over the word graph. Two frontiers grow
//! from the start and target words; each round expands one full layer of
//! whichever frontier is currently smaller, bounding exploration to roughly
//! b^(d/2) nodes instead of b^d for branch factor b and chain length d.
//! Expanding whole layers keeps both visited sets layer-complete, so the
//! round that first produces an overlap always contains a minimal meeting;
//! splicing through the best meeting of that round yields a shortest chain.

use super::word_graph::WordGraph;
use crate::core::{Chain, Word};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Shortest-path search over one word graph
///
/// Stateless between calls; borrows the graph for its lifetime.
pub struct PathFinder<'a> {
    graph: &'a WordGraph,
}

impl<'a> PathFinder<'a> {
    /// Create a finder over the given graph
    #[must_use]
    pub const fn new(graph: &'a WordGraph) -> Self {
        Self { graph }
    }

    /// Find a shortest chain from `start` to `end`
    ///
    /// Returns the empty chain when either endpoint is not in the graph or
    /// when the endpoints lie in disconnected clusters. Callers treat both
    /// cases the same way, so they share one signal.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::graph::{PathFinder, WordGraph};
    ///
    /// let words = ["CAT", "COT", "COG", "DOG"]
    ///     .iter()
    ///     .map(|s| Word::new(*s).unwrap());
    /// let graph = WordGraph::new(3, words);
    /// let finder = PathFinder::new(&graph);
    ///
    /// let chain = finder.shortest_chain(&Word::new("CAT").unwrap(), &Word::new("DOG").unwrap());
    /// assert_eq!(chain.len(), 4);
    /// ```
    #[must_use]
    pub fn shortest_chain(&self, start: &Word, end: &Word) -> Chain {
        if !self.graph.contains(start) || !self.graph.contains(end) {
            return Chain::empty();
        }

        if start == end {
            return Chain::new(vec![start.clone()]);
        }

        // Each visited map records the full partial path from its own
        // endpoint to the visited word, inclusive.
        let mut forward_queue = VecDeque::from([start.clone()]);
        let mut backward_queue = VecDeque::from([end.clone()]);
        let mut forward_paths: FxHashMap<Word, Vec<Word>> = FxHashMap::default();
        let mut backward_paths: FxHashMap<Word, Vec<Word>> = FxHashMap::default();
        forward_paths.insert(start.clone(), vec![start.clone()]);
        backward_paths.insert(end.clone(), vec![end.clone()]);

        while !forward_queue.is_empty() && !backward_queue.is_empty() {
            let expand_forward = forward_queue.len() <= backward_queue.len();

            let meeting = if expand_forward {
                Self::expand_layer(
                    self.graph,
                    &mut forward_queue,
                    &mut forward_paths,
                    &backward_paths,
                )
            } else {
                Self::expand_layer(
                    self.graph,
                    &mut backward_queue,
                    &mut backward_paths,
                    &forward_paths,
                )
            };

            if let Some(meeting) = meeting {
                return Self::splice(&forward_paths[&meeting], &backward_paths[&meeting]);
            }
        }

        Chain::empty()
    }

    /// Expand one complete layer of a frontier
    ///
    /// Dequeues every node of the current layer, recording each newly visited
    /// neighbor with its extended path. The layer always runs to completion:
    /// stopping at the first overlap with the opposite frontier can return a
    /// meeting one step longer than necessary, because a later node of the
    /// same layer may meet the other side closer in. Returns the meeting word
    /// with the smallest combined path length seen this layer, if any.
    fn expand_layer(
        graph: &WordGraph,
        queue: &mut VecDeque<Word>,
        own_paths: &mut FxHashMap<Word, Vec<Word>>,
        other_paths: &FxHashMap<Word, Vec<Word>>,
    ) -> Option<Word> {
        let mut best: Option<(usize, Word)> = None;

        // Nodes pushed during the loop belong to the next layer and stay
        // beyond the snapshot taken here.
        let layer_size = queue.len();
        for _ in 0..layer_size {
            let current = queue.pop_front()?;
            let current_path = own_paths[&current].clone();

            for neighbor in graph.neighbors(&current) {
                if own_paths.contains_key(neighbor) {
                    continue;
                }

                let mut path = current_path.clone();
                path.push(neighbor.clone());
                own_paths.insert(neighbor.clone(), path);

                if let Some(other_path) = other_paths.get(neighbor) {
                    let combined = own_paths[neighbor].len() + other_path.len();
                    if best.as_ref().is_none_or(|(len, _)| combined < *len) {
                        best = Some((combined, neighbor.clone()));
                    }
                }

                queue.push_back(neighbor.clone());
            }
        }

        best.map(|(_, meeting)| meeting)
    }

    /// Join the forward prefix with the reversed backward suffix
    ///
    /// Both partial paths end at the meeting word; it is kept once, from the
    /// forward side.
    fn splice(forward: &[Word], backward: &[Word]) -> Chain {
        let mut words = forward.to_vec();
        words.extend(backward.iter().rev().skip(1).cloned());
        Chain::new(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn graph_of(strs: &[&str]) -> WordGraph {
        let length = strs.first().map_or(0, |s| s.len());
        WordGraph::new(length, strs.iter().map(|s| Word::new(*s).unwrap()))
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    /// Reference single-direction BFS for cross-checking minimality
    fn bfs_distance(graph: &WordGraph, start: &Word, end: &Word) -> Option<usize> {
        let mut queue = VecDeque::from([(start.clone(), 0usize)]);
        let mut seen = rustc_hash::FxHashSet::default();
        seen.insert(start.clone());

        while let Some((current, dist)) = queue.pop_front() {
            if &current == end {
                return Some(dist);
            }
            for neighbor in graph.neighbors(&current) {
                if seen.insert(neighbor.clone()) {
                    queue.push_back((neighbor.clone(), dist + 1));
                }
            }
        }
        None
    }

    #[test]
    fn cat_to_dog_scenario() {
        let graph = graph_of(&["CAT", "COT", "DOT", "DOG", "COG", "CAP", "CAR", "CAB"]);
        let finder = PathFinder::new(&graph);

        let chain = finder.shortest_chain(&word("CAT"), &word("DOG"));
        assert_eq!(chain.len(), 4);
        assert!(chain.is_valid());
        assert_eq!(chain.start().unwrap().text(), "CAT");
        assert_eq!(chain.end().unwrap().text(), "DOG");
    }

    #[test]
    fn identical_endpoints_yield_singleton() {
        let graph = graph_of(&["CAT", "COT"]);
        let finder = PathFinder::new(&graph);

        let chain = finder.shortest_chain(&word("CAT"), &word("CAT"));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.start().unwrap().text(), "CAT");
    }

    #[test]
    fn adjacent_endpoints_yield_pair() {
        let graph = graph_of(&["CAT", "COT"]);
        let finder = PathFinder::new(&graph);

        let chain = finder.shortest_chain(&word("CAT"), &word("COT"));
        assert_eq!(chain.len(), 2);
        assert!(chain.is_valid());
    }

    #[test]
    fn missing_endpoint_returns_empty() {
        let graph = graph_of(&["CAT", "COT"]);
        let finder = PathFinder::new(&graph);

        assert!(finder.shortest_chain(&word("ZZZ"), &word("CAT")).is_empty());
        assert!(finder.shortest_chain(&word("CAT"), &word("ZZZ")).is_empty());
    }

    #[test]
    fn disconnected_clusters_return_empty() {
        // {CAT, COT} and {DIG, DUG} never connect
        let graph = graph_of(&["CAT", "COT", "DIG", "DUG"]);
        let finder = PathFinder::new(&graph);

        assert!(finder.shortest_chain(&word("CAT"), &word("DIG")).is_empty());
    }

    #[test]
    fn chains_match_reference_bfs_lengths() {
        let graph = graph_of(&[
            "CAT", "COT", "DOT", "DOG", "COG", "CAP", "CAR", "CAB", "CUT", "CUB", "COB", "BOG",
            "BAT", "BAG", "BIG", "BOT",
        ]);
        let finder = PathFinder::new(&graph);

        for start in graph.words() {
            for end in graph.words() {
                let chain = finder.shortest_chain(start, end);
                match bfs_distance(&graph, start, end) {
                    Some(dist) => {
                        assert_eq!(
                            chain.len(),
                            dist + 1,
                            "wrong length {} -> {}",
                            start,
                            end
                        );
                        assert!(chain.is_valid());
                        assert_eq!(chain.start().unwrap(), start);
                        assert_eq!(chain.end().unwrap(), end);
                    }
                    None => assert!(chain.is_empty()),
                }
            }
        }
    }

    fn random_graph(rng: &mut StdRng, length: usize, alphabet: &[u8], count: usize) -> WordGraph {
        let words = (0..count).map(|_| {
            let text: String = (0..length)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
                .collect();
            Word::new(text).unwrap()
        });
        WordGraph::new(length, words)
    }

    /// Dense random graphs over tiny alphabets produce layouts where both
    /// frontiers can touch in the middle of a layer, so cutting a layer short
    /// at the first overlap would surface here as an off-by-one chain length.
    #[test]
    fn chains_on_random_graphs_are_minimal_and_symmetric() {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (length, alphabet, count): (usize, &[u8], usize) = if seed % 2 == 0 {
                (3, b"ABCD", 20)
            } else {
                (4, b"ABC", 18)
            };
            let graph = random_graph(&mut rng, length, alphabet, count);
            let finder = PathFinder::new(&graph);

            for start in graph.words() {
                for end in graph.words() {
                    let chain = finder.shortest_chain(start, end);
                    match bfs_distance(&graph, start, end) {
                        Some(dist) => {
                            assert_eq!(
                                chain.len(),
                                dist + 1,
                                "wrong length {start} -> {end} (seed {seed})"
                            );
                            assert!(chain.is_valid());
                            assert_eq!(chain.start().unwrap(), start);
                            assert_eq!(chain.end().unwrap(), end);
                        }
                        None => assert!(chain.is_empty(), "{start} -> {end} (seed {seed})"),
                    }

                    let backward = finder.shortest_chain(end, start);
                    assert_eq!(
                        chain.len(),
                        backward.len(),
                        "asymmetric {start} <-> {end} (seed {seed})"
                    );
                }
            }
        }
    }

    #[test]
    fn chain_length_is_symmetric() {
        let graph = graph_of(&[
            "CAT", "COT", "DOT", "DOG", "COG", "CAP", "CAR", "CAB", "CUT", "CUB", "COB",
        ]);
        let finder = PathFinder::new(&graph);

        for start in graph.words() {
            for end in graph.words() {
                let forward = finder.shortest_chain(start, end);
                let backward = finder.shortest_chain(end, start);
                assert_eq!(forward.len(), backward.len());
            }
        }
    }
}
