//! Word chains
//!
//! A Chain is an ordered sequence of words where each consecutive pair differs
//! in exactly one letter. Chains are the unit of puzzle difficulty: a chain of
//! N words takes N - 1 substitutions to solve.

use super::word::Word;
use std::fmt;

/// Default minimum acceptable chain length for generated puzzles
pub const DEFAULT_MIN_CHAIN_LENGTH: usize = 5;

/// An ordered word-ladder path from a start word to a target word
///
/// May be empty, which is the engine-wide signal for "no path found" or
/// "invalid endpoints". A non-empty chain always starts at the start word and
/// ends at the target; the degenerate start == target case is `[start]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chain {
    words: Vec<Word>,
}

impl Chain {
    /// Wrap an already-ordered word sequence
    ///
    /// The sequence is taken on trust; use [`Chain::is_valid`] to verify the
    /// one-substitution link invariant.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The empty chain, meaning "no path"
    #[must_use]
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Number of words in the chain
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no path was found
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First word of the chain, if any
    #[must_use]
    pub fn start(&self) -> Option<&Word> {
        self.words.first()
    }

    /// Last word of the chain, if any
    #[must_use]
    pub fn end(&self) -> Option<&Word> {
        self.words.last()
    }

    /// The words of the chain in order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check the structural invariant: non-empty and every consecutive pair
    /// one substitution apart
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.words.windows(2).all(|pair| pair[0].is_neighbor(&pair[1]))
    }

    /// Whether the chain length falls in the acceptable puzzle band
    ///
    /// `max_length` of `None` leaves the band unbounded above.
    #[must_use]
    pub fn is_acceptable(&self, min_length: usize, max_length: Option<usize>) -> bool {
        let n = self.words.len();
        n >= min_length && max_length.is_none_or(|max| n <= max)
    }
}

impl From<Vec<Word>> for Chain {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in &self.words {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{word}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(words: &[&str]) -> Chain {
        Chain::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn empty_chain() {
        let chain = Chain::empty();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.start().is_none());
        assert!(chain.end().is_none());
        assert!(!chain.is_valid());
    }

    #[test]
    fn singleton_chain_is_valid() {
        let chain = chain_of(&["CAT"]);
        assert!(chain.is_valid());
        assert_eq!(chain.start(), chain.end());
    }

    #[test]
    fn linked_chain_is_valid() {
        let chain = chain_of(&["CAT", "COT", "COG", "DOG"]);
        assert!(chain.is_valid());
        assert_eq!(chain.start().unwrap().text(), "CAT");
        assert_eq!(chain.end().unwrap().text(), "DOG");
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn broken_link_is_invalid() {
        // CAT -> DOG is two substitutions
        let chain = chain_of(&["CAT", "DOG"]);
        assert!(!chain.is_valid());
    }

    #[test]
    fn acceptable_band() {
        let chain = chain_of(&["CAT", "COT", "COG", "DOG", "DOT"]);
        assert!(chain.is_acceptable(5, None));
        assert!(chain.is_acceptable(5, Some(5)));
        assert!(!chain.is_acceptable(6, None));
        assert!(!chain.is_acceptable(2, Some(4)));
    }

    #[test]
    fn display_joins_with_arrows() {
        let chain = chain_of(&["CAT", "COT"]);
        assert_eq!(format!("{chain}"), "CAT -> COT");
    }
}
