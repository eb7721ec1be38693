//! Word Ladder Engine - CLI
//!
//! Shortest-chain lookup, distance queries, and puzzle generation over an
//! externally supplied dictionary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use word_ladder::{
    commands::{find_chain, generate_puzzles, list_hubs, query_distances, run_bench},
    core::Word,
    engine::LadderEngine,
    output::{
        print_bench_result, print_chain_result, print_distance_result, print_generate_result,
        print_hubs_result,
    },
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word-ladder puzzle engine: shortest chains, distance maps, hub-seeded generation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a dictionary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "data/words.txt")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest transformation chain between two words
    Chain {
        /// Start word
        start: String,
        /// Target word
        end: String,
    },

    /// Show distances from words to a target
    Distance {
        /// Target word the distances are measured to
        target: String,
        /// Words to query; defaults to the target's neighbors
        words: Vec<String>,
    },

    /// Generate ready-to-play puzzles
    Generate {
        /// Word length to generate for
        #[arg(short, long)]
        length: usize,

        /// Number of puzzles
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },

    /// List the best-connected words of a length
    Hubs {
        /// Word length to scan
        #[arg(short, long)]
        length: usize,

        /// How many hubs to show
        #[arg(short, long, default_value_t = 20)]
        top: usize,
    },

    /// Compare hub-seeded vs random-seeded generation quality
    Bench {
        /// Word length to benchmark
        #[arg(short, long)]
        length: usize,

        /// Single-attempt trials per seeding strategy
        #[arg(short, long, default_value_t = 200)]
        trials: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_from_file(&cli.wordlist)
        .with_context(|| format!("failed to read wordlist '{}'", cli.wordlist))?;
    if dictionary.is_empty() {
        bail!("wordlist '{}' contains no valid words", cli.wordlist);
    }

    match cli.command {
        Commands::Chain { start, end } => {
            let start = parse_word(&start)?;
            let end = parse_word(&end)?;
            if start.len() != end.len() {
                bail!("'{start}' and '{end}' have different lengths");
            }

            let engine = LadderEngine::with_defaults(start.len(), dictionary);
            let result = find_chain(&engine, &start, &end);
            print_chain_result(&result);
        }

        Commands::Distance { target, words } => {
            let target = parse_word(&target)?;
            let engine = LadderEngine::with_defaults(target.len(), dictionary);

            let words = if words.is_empty() {
                engine
                    .graph()
                    .neighbors(&target)
                    .into_iter()
                    .cloned()
                    .collect()
            } else {
                words
                    .iter()
                    .map(|w| parse_word(w))
                    .collect::<Result<Vec<Word>>>()?
            };

            let result = query_distances(&engine, &target, &words);
            print_distance_result(&result);
        }

        Commands::Generate { length, count } => {
            let engine = Arc::new(LadderEngine::with_defaults(length, dictionary));
            if engine.graph().is_empty() {
                bail!("no words of length {length} in the wordlist");
            }

            let result = generate_puzzles(&engine, count);
            print_generate_result(&result);
        }

        Commands::Hubs { length, top } => {
            let engine = LadderEngine::with_defaults(length, dictionary);
            let result = list_hubs(&engine, top);
            print_hubs_result(&result);
        }

        Commands::Bench { length, trials } => {
            let engine = LadderEngine::with_defaults(length, dictionary);
            if engine.graph().is_empty() {
                bail!("no words of length {length} in the wordlist");
            }

            let result = run_bench(&engine, trials);
            print_bench_result(&result);
        }
    }

    Ok(())
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("invalid word '{text}'"))
}
