//! Command implementations

pub mod bench;
pub mod chain;
pub mod distance;
pub mod generate;
pub mod hubs;

pub use bench::{BenchResult, run_bench};
pub use chain::{ChainResult, find_chain};
pub use distance::{DistanceResult, query_distances};
pub use generate::{GenerateResult, generate_puzzles};
pub use hubs::{HubsResult, list_hubs};
