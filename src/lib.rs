//! Word Ladder Engine
//!
//! A word-ladder puzzle engine: shortest transformation chains over the
//! one-letter-substitution word graph, a memoized distance oracle for
//! interactive feedback, and a hub-seeded generator feeding a background
//! puzzle cache.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Word;
//! use word_ladder::engine::LadderEngine;
//! use word_ladder::wordlists::words_from_slice;
//!
//! let dictionary = words_from_slice(&["cat", "cot", "cog", "dog"]);
//! let engine = LadderEngine::with_defaults(3, dictionary);
//!
//! let chain = engine.shortest_chain(
//!     &Word::new("cat").unwrap(),
//!     &Word::new("dog").unwrap(),
//! );
//! assert_eq!(chain.len(), 4);
//! ```

// Core domain types
pub mod core;

// Word graph and search algorithms
pub mod graph;

// Puzzle generation and the ready-puzzle cache
pub mod puzzle;

// Engine facade, one instance per word length
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
