//! Builtin backend — the dictionary embedded in the binary. No IO.

use rand_core::OsRng;

use crate::phrase::PhraseError;
use crate::wordlist::Wordlist;

#[derive(Debug, Clone, Copy)]
pub struct BuiltinBackend;

impl BuiltinBackend {
    pub fn wordlist(&self) -> &'static Wordlist {
        Wordlist::builtin()
    }

    pub fn random_phrase(&self, size: usize) -> Result<String, PhraseError> {
        self.wordlist().random_phrase_with(&mut OsRng, size)
    }
}
