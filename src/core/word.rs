//! Ladder word representation
//!
//! A Word stores an uppercase fixed-length word and answers the one-letter-apart
//! adjacency test that defines edges in the word graph.

use std::fmt;

/// An uppercase ASCII word of some fixed length
///
/// Immutable once created. Words of different lengths may coexist; length
/// agreement is enforced by the graph that owns the word set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "CAT");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as raw bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty strings
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// One-substitution adjacency test
    ///
    /// True iff both words have the same length and differ in exactly one
    /// letter position. Short-circuits on length mismatch and bails out as
    /// soon as a second differing position is found.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cat = Word::new("CAT").unwrap();
    /// let cot = Word::new("COT").unwrap();
    /// let dog = Word::new("DOG").unwrap();
    ///
    /// assert!(cat.is_neighbor(&cot));
    /// assert!(!cat.is_neighbor(&dog));
    /// assert!(!cat.is_neighbor(&cat));
    /// ```
    #[must_use]
    pub fn is_neighbor(&self, other: &Self) -> bool {
        if self.text.len() != other.text.len() {
            return false;
        }

        let mut differences = 0;
        for (a, b) in self.bytes().iter().zip(other.bytes()) {
            if a != b {
                differences += 1;
                if differences > 1 {
                    return false;
                }
            }
        }

        differences == 1
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
