//! Phrase dictionaries.
//!
//! A [`Wordlist`] is an ordered, duplicate-free list of lowercase ASCII words
//! with a membership set alongside it. The builtin list is embedded from
//! `res/wordlist.txt` at compile time and parsed once on first use.
//!
//! File format, shared by the builtin list and custom dictionaries:
//!
//! ```text
//! # comments and blank lines are ignored
//! about
//! above
//! ...
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

/// Embedded builtin dictionary, one word per line.
const BUILTIN_WORDS: &str = include_str!("../res/wordlist.txt");

static BUILTIN: LazyLock<Wordlist> = LazyLock::new(|| {
    Wordlist::parse(BUILTIN_WORDS).unwrap_or_else(|e| panic!("builtin wordlist is malformed: {e}"))
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordlistError {
    #[error("wordlist contains no words")]
    Empty,
    #[error("line {line}: '{word}' is not a lowercase ASCII word")]
    InvalidWord { line: usize, word: String },
    #[error("word '{0}' appears more than once")]
    DuplicateWord(String),
}

/// A phrase dictionary.
///
/// Invariant: a `Wordlist` built by [`Wordlist::parse`] (and so the builtin
/// list) holds at least one word.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Wordlist {
    /// The embedded dictionary (2048 words, 11 bits per word).
    pub fn builtin() -> &'static Wordlist {
        &BUILTIN
    }

    /// Parse a newline-separated dictionary.
    ///
    /// Lines are trimmed, so `\r\n` files are accepted and no word ever
    /// carries a carriage return into a phrase.
    pub fn parse(text: &str) -> Result<Self, WordlistError> {
        let mut words = Vec::new();
        let mut index = HashSet::new();

        for (n, raw) in text.lines().enumerate() {
            let word = raw.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(WordlistError::InvalidWord { line: n + 1, word: word.to_string() });
            }
            if !index.insert(word.to_string()) {
                return Err(WordlistError::DuplicateWord(word.to_string()));
            }
            words.push(word.to_string());
        }

        if words.is_empty() {
            return Err(WordlistError::Empty);
        }
        Ok(Self { words, index })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a parsed list; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Pick one word uniformly at random; `None` only for an empty list.
    pub fn choose<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    /// Entropy in bits of a phrase of `no_of_words` words drawn from this list.
    pub fn entropy_bits(&self, no_of_words: usize) -> f64 {
        no_of_words as f64 * (self.len() as f64).log2()
    }
}
