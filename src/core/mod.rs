//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod chain;
mod word;

pub use chain::{Chain, DEFAULT_MIN_CHAIN_LENGTH};
pub use word::{Word, WordError};
