//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_bench_result, print_chain_result, print_distance_result, print_generate_result,
    print_hubs_result,
};
