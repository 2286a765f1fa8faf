//! Phrase module abstraction.
//!
//! `PhraseModule` is an enum over concrete dictionary backends. Callers load
//! one with [`load`] (the only async step) and then call `random_phrase` and
//! `validate_phrase` on it synchronously.
//!
//! Modules are shared immutable capabilities — clone them freely.

pub mod backends;

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::config::ModuleConfig;
use crate::phrase::PhraseError;
use crate::wordlist::{Wordlist, WordlistError};

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("unknown phrase module backend: {0}")]
    UnknownBackend(String),
    #[error("backend '{0}' needs a dictionary path")]
    MissingPath(String),
    #[error("cannot read dictionary {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dictionary {}: {source}", path.display())]
    Wordlist {
        path: PathBuf,
        #[source]
        source: WordlistError,
    },
}

// ── Module enum ───────────────────────────────────────────────────────────────

/// All available backends.
///
/// Adding a backend = new module in `backends/` + new variant + new arms.
#[derive(Debug, Clone)]
pub enum PhraseModule {
    Builtin(backends::builtin::BuiltinBackend),
    File(backends::file::FileBackend),
}

impl PhraseModule {
    /// Backend name as written in `[module] backend`.
    pub fn backend(&self) -> &'static str {
        match self {
            PhraseModule::Builtin(_) => "builtin",
            PhraseModule::File(_) => "file",
        }
    }

    pub fn wordlist(&self) -> &Wordlist {
        match self {
            PhraseModule::Builtin(b) => b.wordlist(),
            PhraseModule::File(b) => b.wordlist(),
        }
    }

    /// Generate a phrase of exactly `size` words from the OS CSPRNG.
    ///
    /// Fails only when `size` is above [`crate::phrase::MAX_WORDS`].
    pub fn random_phrase(&self, size: usize) -> Result<String, PhraseError> {
        match self {
            PhraseModule::Builtin(b) => b.random_phrase(size),
            PhraseModule::File(b) => b.random_phrase(size),
        }
    }

    /// Check that every word is in the dictionary and there are at least `size`.
    pub fn validate_phrase(&self, phrase: &str, size: usize) -> Result<(), PhraseError> {
        self.wordlist().validate_phrase(phrase, size)
    }
}

/// Load the phrase module selected by `config`.
pub async fn load(config: &ModuleConfig) -> Result<PhraseModule, ModuleError> {
    let module = backends::build(config).await?;
    info!(
        backend = module.backend(),
        words = module.wordlist().len(),
        "phrase module loaded"
    );
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn builtin_config() -> ModuleConfig {
        ModuleConfig { backend: "builtin".into(), path: None }
    }

    #[tokio::test]
    async fn load_builtin() {
        let m = load(&builtin_config()).await.unwrap();
        assert_eq!(m.backend(), "builtin");
        assert_eq!(m.wordlist().len(), 2048);
    }

    #[tokio::test]
    async fn builtin_round_trip() {
        let m = load(&builtin_config()).await.unwrap();
        let p = m.random_phrase(18).unwrap();
        assert_eq!(m.validate_phrase(&p, 18), Ok(()));
        assert_eq!(m.validate_phrase(&p, 17), Ok(()));
        assert_eq!(
            m.validate_phrase(&p, 19),
            Err(PhraseError::TooShort { found: 18, expected: 19 })
        );
    }

    #[tokio::test]
    async fn load_file_backend() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"north\nsouth\neast\nwest\n").unwrap();
        let cfg = ModuleConfig { backend: "file".into(), path: Some(f.path().to_path_buf()) };

        let m = load(&cfg).await.unwrap();
        assert_eq!(m.backend(), "file");
        assert_eq!(m.wordlist().len(), 4);

        let p = m.random_phrase(6).unwrap();
        assert!(p.split(' ').all(|w| ["north", "south", "east", "west"].contains(&w)));
        assert_eq!(m.validate_phrase(&p, 6), Ok(()));
        // Builtin words are not valid against a custom dictionary.
        assert!(m.validate_phrase("zebra", 1).is_err());
    }

    #[tokio::test]
    async fn oversized_phrase_is_an_error() {
        let m = load(&builtin_config()).await.unwrap();
        let max = crate::phrase::MAX_WORDS;
        assert_eq!(
            m.random_phrase(max + 1),
            Err(PhraseError::TooManyWords { requested: max + 1, max })
        );
    }

    #[tokio::test]
    async fn unknown_backend_errors() {
        let cfg = ModuleConfig { backend: "remote".into(), path: None };
        let err = load(&cfg).await.unwrap_err();
        assert!(matches!(err, ModuleError::UnknownBackend(ref b) if b == "remote"));
    }
}
