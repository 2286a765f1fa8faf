//! Brain-wallet phrases: dictionary, generation and validation, the loadable
//! phrase module, and the scripted demo. The CLI lives in `src/main.rs`.

pub mod config;
pub mod demo;
pub mod error;
pub mod logger;
pub mod module;
pub mod phrase;
pub mod wordlist;

pub use module::{PhraseModule, load};
pub use phrase::{MAX_WORDS, PhraseError, fingerprint, random_phrase, validate_phrase};
pub use wordlist::{Wordlist, WordlistError};
