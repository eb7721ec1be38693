//! Chain lookup command
//!
//! Finds a shortest transformation chain between two words.

use crate::core::{Chain, Word};
use crate::engine::LadderEngine;
use std::time::{Duration, Instant};

/// Result of a chain lookup
pub struct ChainResult {
    pub start: Word,
    pub end: Word,
    pub chain: Chain,
    pub duration: Duration,
}

impl ChainResult {
    /// Substitution steps in the found chain, if any
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        if self.chain.is_empty() {
            None
        } else {
            Some(self.chain.len() - 1)
        }
    }
}

/// Look up the shortest chain between `start` and `end`
///
/// An empty chain in the result means no path exists (or an endpoint is not
/// in the dictionary); the CLI reports both the same way.
#[must_use]
pub fn find_chain(engine: &LadderEngine, start: &Word, end: &Word) -> ChainResult {
    let began = Instant::now();
    let chain = engine.shortest_chain(start, end);

    ChainResult {
        start: start.clone(),
        end: end.clone(),
        chain,
        duration: began.elapsed(),
    }
}
