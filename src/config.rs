//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory (or
//! an explicit `--config` path), then applies `BRAINPHRASE_LOG_LEVEL` and
//! `BRAINPHRASE_WORDLIST` env overrides. Every section is optional.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;
use crate::phrase::MAX_WORDS;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Phrase module backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfig {
    /// `"builtin"` or `"file"`.
    pub backend: String,
    /// Dictionary path for the `"file"` backend (already expanded, no `~`).
    pub path: Option<PathBuf>,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// Default word count for `generate`, `validate` and `entropy`.
    pub phrase_words: usize,
    /// Word count used by the scripted demo.
    pub demo_words: usize,
    pub module: ModuleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            phrase_words: default_phrase_words(),
            demo_words: default_demo_words(),
            module: ModuleConfig {
                backend: default_backend(),
                path: None,
            },
        }
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    logging: RawLogging,
    #[serde(default)]
    phrase: RawPhrase,
    #[serde(default)]
    module: RawModule,
    #[serde(default)]
    demo: RawDemo,
}

#[derive(Deserialize)]
struct RawLogging {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Deserialize)]
struct RawPhrase {
    #[serde(default = "default_phrase_words")]
    words: usize,
}

#[derive(Deserialize)]
struct RawModule {
    #[serde(default = "default_backend")]
    backend: String,
    #[serde(default)]
    path: Option<String>,
}

#[derive(Deserialize)]
struct RawDemo {
    /// The original console demo used 18 words.
    #[serde(default = "default_demo_words")]
    words: usize,
}

impl Default for RawLogging {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

impl Default for RawPhrase {
    fn default() -> Self {
        Self { words: default_phrase_words() }
    }
}

impl Default for RawModule {
    fn default() -> Self {
        Self { backend: default_backend(), path: None }
    }
}

impl Default for RawDemo {
    fn default() -> Self {
        Self { words: default_demo_words() }
    }
}

fn default_log_level() -> String { "warn".to_string() }
fn default_phrase_words() -> usize { 12 }
fn default_demo_words() -> usize { 18 }
fn default_backend() -> String { "builtin".to_string() }

/// Load config, then apply env-var overrides.
///
/// With `path = None` the default location is tried and silently skipped if
/// absent; an explicit path must exist.
pub fn load(path: Option<&Path>) -> Result<Config, AppError> {
    let log_level_override = env::var("BRAINPHRASE_LOG_LEVEL").ok();
    let wordlist_override = env::var("BRAINPHRASE_WORDLIST").ok();

    load_or_default(
        path,
        Path::new(DEFAULT_CONFIG_PATH),
        log_level_override.as_deref(),
        wordlist_override.as_deref(),
    )
}

/// `load` with the default location and overrides passed in.
pub fn load_or_default(
    path: Option<&Path>,
    default_path: &Path,
    log_level_override: Option<&str>,
    wordlist_override: Option<&str>,
) -> Result<Config, AppError> {
    match path {
        Some(p) => load_from(p, log_level_override, wordlist_override),
        None if default_path.exists() => load_from(default_path, log_level_override, wordlist_override),
        None => resolve(RawConfig::default(), log_level_override, wordlist_override),
    }
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    log_level_override: Option<&str>,
    wordlist_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    let parsed = parse(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;
    resolve(parsed, log_level_override, wordlist_override)
}

fn parse(raw: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(raw)
}

fn resolve(
    parsed: RawConfig,
    log_level_override: Option<&str>,
    wordlist_override: Option<&str>,
) -> Result<Config, AppError> {
    let log_level = log_level_override.unwrap_or(&parsed.logging.log_level).to_string();

    // A wordlist override always means the file backend.
    let module = match wordlist_override {
        Some(p) => ModuleConfig { backend: "file".to_string(), path: Some(expand_home(p)) },
        None => ModuleConfig {
            backend: parsed.module.backend,
            path: parsed.module.path.as_deref().map(expand_home),
        },
    };

    if module.backend == "file" && module.path.is_none() {
        return Err(AppError::Config("[module] backend = \"file\" requires a path".into()));
    }

    for (key, words) in [("[phrase] words", parsed.phrase.words), ("[demo] words", parsed.demo.words)] {
        if words > MAX_WORDS {
            return Err(AppError::Config(format!("{key} = {words} is above the maximum of {MAX_WORDS}")));
        }
    }

    Ok(Config {
        log_level,
        phrase_words: parsed.phrase.words,
        demo_words: parsed.demo.words,
        module,
    })
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
