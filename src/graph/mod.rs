//! Word graph and search algorithms
//!
//! The implicit substitution graph, bidirectional shortest-chain search, and
//! the memoized distance oracle that backs interactive hint queries.

mod distance;
mod path;
mod word_graph;

pub use distance::{
    DEFAULT_DISTANCE_CACHE_CAPACITY, DistanceCacheStats, DistanceMap, DistanceOracle,
};
pub use path::PathFinder;
pub use word_graph::WordGraph;
