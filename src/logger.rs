//! Logging setup for the CLI.
//!
//! stdout carries phrases and JSON documents, so every log line goes to
//! stderr. Phrases themselves are never logged, only their fingerprints.
//!
//! Level precedence:
//!   1. `--log-level` flag (`prefer_level = true`)
//!   2. `RUST_LOG`
//!   3. `[logging] log_level` / `BRAINPHRASE_LOG_LEVEL` (`prefer_level = false`)
//!
//! Whichever source wins but fails to parse falls back to the other one.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber, writing to stderr.
pub fn init(level: &str, prefer_level: bool) -> Result<(), AppError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(level, prefer_level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

/// Pick the filter from `level` and the `RUST_LOG` value.
///
/// `rust_log` is passed in so precedence can be checked without touching the
/// process environment.
pub fn build_filter(level: &str, prefer_level: bool, rust_log: Option<&str>) -> Result<EnvFilter, AppError> {
    let from_level =
        EnvFilter::try_new(level).map_err(|e| format!("invalid log level '{level}': {e}"));
    let from_env = rust_log
        .map(|d| EnvFilter::try_new(d).map_err(|e| format!("invalid RUST_LOG '{d}': {e}")));

    let (first, fallback) = match from_env {
        Some(env) if !prefer_level => (env, Some(from_level)),
        Some(env) => (from_level, Some(env)),
        None => (from_level, None),
    };

    match (first, fallback) {
        (Ok(filter), _) | (Err(_), Some(Ok(filter))) => Ok(filter),
        (Err(e), Some(Err(other))) => Err(AppError::Logger(format!("{e}; {other}"))),
        (Err(e), None) => Err(AppError::Logger(e)),
    }
}

/// Validate a `--log-level` value before it is used.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    // `target=level` with an unknown level is a directive parse error.
    const BAD: &str = "brainphrase=loud";

    fn max_level(level: &str, prefer_level: bool, rust_log: Option<&str>) -> Option<LevelFilter> {
        build_filter(level, prefer_level, rust_log).unwrap().max_level_hint()
    }

    #[test]
    fn flag_beats_rust_log() {
        assert_eq!(max_level("debug", true, Some("error")), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn rust_log_beats_config_level() {
        assert_eq!(max_level("debug", false, Some("error")), Some(LevelFilter::ERROR));
    }

    #[test]
    fn config_level_used_without_rust_log() {
        assert_eq!(max_level("info", false, None), Some(LevelFilter::INFO));
        assert_eq!(max_level("trace", true, None), Some(LevelFilter::TRACE));
    }

    #[test]
    fn invalid_flag_falls_back_to_rust_log() {
        assert_eq!(max_level(BAD, true, Some("warn")), Some(LevelFilter::WARN));
    }

    #[test]
    fn invalid_rust_log_falls_back_to_config_level() {
        assert_eq!(max_level("info", false, Some(BAD)), Some(LevelFilter::INFO));
    }

    #[test]
    fn both_invalid_is_an_error() {
        let err = build_filter(BAD, false, Some(BAD)).unwrap_err();
        assert!(matches!(err, AppError::Logger(ref m) if m.contains("RUST_LOG") && m.contains("log level")));

        let err = build_filter(BAD, true, None).unwrap_err();
        assert!(matches!(err, AppError::Logger(ref m) if m.contains(BAD)));
    }

    #[test]
    fn parse_level_accepts_standard_names_only() {
        for l in ["error", "warn", "info", "debug", "trace", "off"] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
        assert!(parse_level("").is_err());
        assert!(parse_level("verbose").is_err());
    }

    #[test]
    fn init_succeeds_or_already_installed() {
        // Another test in this process may have installed the subscriber first.
        match init("info", true) {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
