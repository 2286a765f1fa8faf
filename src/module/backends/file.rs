//! File backend — a custom newline-separated dictionary read from disk.
//!
//! The file is read once with `tokio::fs` when the module is loaded; the
//! parsed list is shared behind an `Arc` so clones stay cheap.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand_core::OsRng;
use tracing::debug;

use crate::module::ModuleError;
use crate::phrase::PhraseError;
use crate::wordlist::Wordlist;

#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    wordlist: Arc<Wordlist>,
}

impl FileBackend {
    pub async fn load(path: &Path) -> Result<Self, ModuleError> {
        let text = tokio::fs::read_to_string(path).await.map_err(|source| ModuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let wordlist = Wordlist::parse(&text).map_err(|source| ModuleError::Wordlist {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), words = wordlist.len(), "dictionary parsed");
        Ok(Self { path: path.to_path_buf(), wordlist: Arc::new(wordlist) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn random_phrase(&self, size: usize) -> Result<String, PhraseError> {
        self.wordlist.random_phrase_with(&mut OsRng, size)
    }
}
