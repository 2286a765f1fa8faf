//! Application-wide error types.

use thiserror::Error;

use crate::module::ModuleError;
use crate::phrase::PhraseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("usage error: {0}")]
    Usage(String),

    #[error("module error: {0}")]
    Module(#[from] ModuleError),

    #[error("invalid phrase: {0}")]
    Phrase(#[from] PhraseError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
