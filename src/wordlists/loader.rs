//! Word list loading utilities
//!
//! Dictionaries are supplied externally as plain text, one word per line.
//! Loading normalizes and validates; length filtering happens at graph
//! construction.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entries that fail validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "dog"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "CAT");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Count how many loaded words have each length
///
/// Handy for choosing which lengths are worth registering.
#[must_use]
pub fn length_histogram(words: &[Word]) -> Vec<(usize, usize)> {
    let mut counts: rustc_hash::FxHashMap<usize, usize> = rustc_hash::FxHashMap::default();
    for word in words {
        *counts.entry(word.len()).or_insert(0) += 1;
    }

    let mut histogram: Vec<(usize, usize)> = counts.into_iter().collect();
    histogram.sort_unstable();
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cat", "dog", "cot"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "DOG");
        assert_eq!(words[2].text(), "COT");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cat", "c4t", "", "dog"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "DOG");
    }

    #[test]
    fn length_histogram_groups_by_length() {
        let words = words_from_slice(&["cat", "dog", "word", "at"]);
        let histogram = length_histogram(&words);

        assert_eq!(histogram, vec![(2, 1), (3, 2), (4, 1)]);
    }

    #[test]
    fn load_from_file_missing_path_errors() {
        assert!(load_from_file("definitely/not/a/real/path.txt").is_err());
    }
}
