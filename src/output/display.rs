//! Display functions for command results

use super::formatters::{chain_to_arrows, format_duration, rate_bar};
use crate::commands::{BenchResult, ChainResult, DistanceResult, GenerateResult, HubsResult};
use colored::Colorize;

/// Print the result of a chain lookup
pub fn print_chain_result(result: &ChainResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Chain: {} → {}",
        result.start.text().bright_yellow().bold(),
        result.end.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match result.steps() {
        Some(steps) => {
            println!("\n  {}", chain_to_arrows(&result.chain).bright_white());
            println!(
                "\n{}",
                format!("✅ {steps} steps in {}", format_duration(result.duration))
                    .green()
                    .bold()
            );
        }
        None => {
            println!(
                "\n{}",
                "❌ No chain exists between these words".red().bold()
            );
        }
    }
}

/// Print the result of a batched distance query
pub fn print_distance_result(result: &DistanceResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Target: {}", result.target.text().bright_yellow().bold());
    println!("Reachable words: {}", result.reachable);
    println!("{}", "─".repeat(60).cyan());

    for (word, distance) in &result.queries {
        match distance {
            Some(d) => println!("  {:<12} {}", word.text(), format!("{d} steps").green()),
            None => println!("  {:<12} {}", word.text(), "unreachable".dimmed()),
        }
    }
}

/// Print the result of a generation run
pub fn print_generate_result(result: &GenerateResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Generated {}/{} puzzles in {} ({} from cache)",
        result.puzzles.len(),
        result.requested,
        format_duration(result.duration),
        result.served_from_cache
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, puzzle) in result.puzzles.iter().enumerate() {
        println!(
            "\n{}. {} → {} ({} steps)",
            i + 1,
            puzzle.start().text().bright_yellow().bold(),
            puzzle.end().text().bright_yellow().bold(),
            puzzle.steps()
        );
        println!("   {}", chain_to_arrows(puzzle.chain()).dimmed());
    }

    if result.puzzles.len() < result.requested {
        println!(
            "\n{}",
            "⚠ Generation exhausted its attempt budget before reaching the requested count"
                .yellow()
        );
    }
}

/// Print the result of a hub scan
pub fn print_hubs_result(result: &HubsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Hubs (degree ≥ {}) among {} words",
        result.threshold, result.total_words
    );
    println!("{}", "─".repeat(60).cyan());

    for (word, degree) in &result.hubs {
        println!(
            "  {:<12} {}",
            word.text().bright_white(),
            format!("{degree} neighbors").green()
        );
    }

    if result.hubs.is_empty() {
        println!("  {}", "No hubs at this threshold".dimmed());
    }
}

/// Print the result of a seeding benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Seeding benchmark: {} trials, {} hubs, {}",
        result.trials,
        result.hub_count,
        format_duration(result.duration)
    );
    println!("{}", "─".repeat(60).cyan());

    println!("  hub seeded    {}", rate_bar(result.hub_rate(), 30));
    println!("  random seeded {}", rate_bar(result.random_rate(), 30));

    if result.hub_rate() > result.random_rate() {
        println!("\n{}", "✅ Hub seeding comes out ahead".green().bold());
    } else {
        println!(
            "\n{}",
            "⚠ Hub seeding did not beat random on this dictionary".yellow()
        );
    }
}
