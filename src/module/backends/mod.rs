//! Phrase module backends.
//!
//! `build(config)` is the factory — called once at startup.

pub mod builtin;
pub mod file;

use crate::config::ModuleConfig;
use crate::module::{ModuleError, PhraseModule};

/// Construct a `PhraseModule` from config.
pub async fn build(config: &ModuleConfig) -> Result<PhraseModule, ModuleError> {
    match config.backend.as_str() {
        "builtin" => Ok(PhraseModule::Builtin(builtin::BuiltinBackend)),
        "file" => {
            let path = config
                .path
                .as_deref()
                .ok_or_else(|| ModuleError::MissingPath(config.backend.clone()))?;
            let backend = file::FileBackend::load(path).await?;
            Ok(PhraseModule::File(backend))
        }
        _ => Err(ModuleError::UnknownBackend(config.backend.clone())),
    }
}
