//! Phrase generation and validation.
//!
//! A phrase is `no_of_words` dictionary words joined by single spaces. With
//! the builtin dictionary each word carries 11 bits: 12 words give 132 bits
//! and 24 words give 264 bits, enough to saturate a 32-byte key space.

use rand_core::{CryptoRng, OsRng, RngCore};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::wordlist::Wordlist;

/// Largest phrase `random_phrase` will build. Far beyond any useful entropy.
pub const MAX_WORDS: usize = 1024;

/// Phrase generation and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseError {
    /// Phrase has fewer words than expected.
    #[error("the phrase is too short ({found} words, expected at least {expected})")]
    TooShort { found: usize, expected: usize },
    /// Phrase contains a word that is not in the dictionary.
    #[error("the word '{0}' does not come from the dictionary")]
    NotInDictionary(String),
    /// Requested phrase length is above [`MAX_WORDS`].
    #[error("cannot generate {requested} words (at most {max})")]
    TooManyWords { requested: usize, max: usize },
    #[error("the dictionary has no words")]
    EmptyDictionary,
}

/// Generate a random phrase of `no_of_words` words from the builtin dictionary.
pub fn random_phrase(no_of_words: usize) -> Result<String, PhraseError> {
    Wordlist::builtin().random_phrase_with(&mut OsRng, no_of_words)
}

/// Validate `phrase` against the builtin dictionary.
///
/// Checks that every word comes from the dictionary and that there are at
/// least `expected_no_of_words` of them.
pub fn validate_phrase(phrase: &str, expected_no_of_words: usize) -> Result<(), PhraseError> {
    Wordlist::builtin().validate_phrase(phrase, expected_no_of_words)
}

/// Reject word counts above [`MAX_WORDS`].
pub fn check_word_count(no_of_words: usize) -> Result<usize, PhraseError> {
    if no_of_words > MAX_WORDS {
        return Err(PhraseError::TooManyWords { requested: no_of_words, max: MAX_WORDS });
    }
    Ok(no_of_words)
}

/// First 8 hex chars of `SHA256(phrase)`. Safe to log; the phrase is not.
pub fn fingerprint(phrase: &str) -> String {
    let digest = Sha256::digest(phrase.as_bytes());
    hex::encode(digest)[..8].to_string()
}

impl Wordlist {
    pub fn random_phrase_with<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        no_of_words: usize,
    ) -> Result<String, PhraseError> {
        let n = check_word_count(no_of_words)?;
        let words = (0..n)
            .map(|_| self.choose(rng))
            .collect::<Option<Vec<_>>>()
            .ok_or(PhraseError::EmptyDictionary)?;
        Ok(words.join(" "))
    }

    /// Dictionary membership is checked word by word before the length check,
    /// so an unknown word is reported even when the phrase is also too short.
    pub fn validate_phrase(&self, phrase: &str, expected_no_of_words: usize) -> Result<(), PhraseError> {
        let mut found = 0;
        for word in phrase.split_whitespace() {
            found += 1;
            if !self.contains(word) {
                return Err(PhraseError::NotInDictionary(word.to_string()));
            }
        }

        if found < expected_no_of_words {
            return Err(PhraseError::TooShort { found, expected: expected_no_of_words });
        }
        Ok(())
    }
}
