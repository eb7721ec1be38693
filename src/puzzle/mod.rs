//! Puzzle generation and supply
//!
//! The hub-seeded generator and the per-length cache that keeps pre-validated
//! puzzles ready ahead of demand.

pub mod cache;
mod cancel;
pub mod generator;

pub use cache::{DEFAULT_QUEUE_CAPACITY, PuzzleCache};
pub use cancel::CancellationToken;
pub use generator::{GeneratorConfig, Puzzle, PuzzleGenerator};
