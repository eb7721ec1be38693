//! Implicit word graph
//!
//! Nodes are the words of one fixed length; an edge connects two words that
//! differ in exactly one letter position. Edges are never materialized: the
//! adjacency predicate on `Word` is cheap enough to evaluate on demand, and
//! neighbor enumeration scans the word set.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Immutable view over the word set of one fixed length
///
/// Construction filters out words of the wrong length, so every stored word
/// satisfies the length invariant. The graph is rebuilt from scratch when the
/// session switches word length; it is never mutated in place.
#[derive(Debug, Clone)]
pub struct WordGraph {
    length: usize,
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordGraph {
    /// Build a graph over all supplied words of the given length
    ///
    /// Words of a different length are skipped; duplicates are kept once.
    /// Iteration order (and therefore BFS tie-breaking) follows first
    /// appearance in the input.
    #[must_use]
    pub fn new(length: usize, dictionary: impl IntoIterator<Item = Word>) -> Self {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for word in dictionary {
            if word.len() == length && index.insert(word.clone()) {
                words.push(word);
            }
        }

        Self { length, words, index }
    }

    /// The fixed word length of this graph
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of words in the graph
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the graph holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// All words, in graph iteration order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// All words one substitution away from `word`
    ///
    /// `word` itself need not be a member; the scan only consults the stored
    /// set. Returned in graph iteration order.
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<&Word> {
        self.words.iter().filter(|w| w.is_neighbor(word)).collect()
    }

    /// Degree of `word` in the graph
    ///
    /// Cheaper than [`WordGraph::neighbors`] when only the count matters,
    /// e.g. during the hub scan.
    #[must_use]
    pub fn neighbor_count(&self, word: &Word) -> usize {
        self.words.iter().filter(|w| w.is_neighbor(word)).count()
    }
}
