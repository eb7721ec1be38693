//! Hub listing command
//!
//! Shows the best-connected words of a graph, the seeds the generator prefers.

use crate::core::Word;
use crate::engine::LadderEngine;

/// Result of a hub scan
pub struct HubsResult {
    pub total_words: usize,
    pub threshold: usize,
    /// Hubs with their degree, best-connected first
    pub hubs: Vec<(Word, usize)>,
}

/// List up to `top` hub words with their neighbor counts
#[must_use]
pub fn list_hubs(engine: &LadderEngine, top: usize) -> HubsResult {
    let graph = engine.graph();
    let mut hubs: Vec<(Word, usize)> = engine
        .generator()
        .hub_words(graph)
        .into_iter()
        .map(|word| {
            let degree = graph.neighbor_count(&word);
            (word, degree)
        })
        .collect();

    hubs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hubs.truncate(top);

    HubsResult {
        total_words: graph.len(),
        threshold: engine.generator().config().hub_min_neighbors,
        hubs,
    }
}
