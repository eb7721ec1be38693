//! Word list loading
//!
//! Dictionaries come from outside the engine: a plain word file per run. This
//! module validates and normalizes them into [`crate::core::Word`] values.

pub mod loader;

pub use loader::{length_histogram, load_from_file, words_from_slice};
