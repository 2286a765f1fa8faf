//! `brainphrase` — generate and validate brain-wallet phrases.
//!
//! # Usage
//!
//! ```text
//! brainphrase [--config <path>] [--log-level <level>] [--json] <command>
//!
//! Commands:
//!   generate [<words>]                  print a random phrase
//!   validate [--words <n>] <phrase...>  check a phrase against the dictionary
//!   entropy [<words>]                   dictionary size and phrase entropy
//!   demo [<words>]                      run the scripted validation demo
//! ```
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse args
//!   3. Load config
//!   4. Init logger at configured level
//!   5. Load the phrase module (async)
//!   6. Run the command

use std::path::PathBuf;
use std::process::ExitCode;

use serde_json::json;
use tracing::info;

use brainphrase::{
    config, demo,
    error::AppError,
    logger,
    module::{self, PhraseModule},
    phrase::MAX_WORDS,
};

// ── CLI arg parsing ────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    log_level: Option<String>,
    json: bool,
    help: bool,
    command: Option<String>,
    rest: Vec<String>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Generate { words: Option<usize> },
    Validate { words: Option<usize>, phrase: String },
    Entropy { words: Option<usize> },
    Demo { words: Option<usize> },
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, AppError> {
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" if parsed.command.is_none() => {
                let p = iter.next().ok_or_else(|| usage("--config needs a path"))?;
                parsed.config = Some(PathBuf::from(p));
            }
            "--log-level" | "-l" if parsed.command.is_none() => {
                parsed.log_level = Some(iter.next().ok_or_else(|| usage("--log-level needs a value"))?);
            }
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            "--" => {
                parsed.rest.extend(iter);
                break;
            }
            _ if parsed.command.is_none() => parsed.command = Some(arg),
            _ => parsed.rest.push(arg),
        }
    }

    Ok(parsed)
}

fn build_command(cmd: &str, rest: &[String]) -> Result<Command, AppError> {
    match cmd {
        "generate" | "gen" => Ok(Command::Generate { words: optional_count(rest)? }),
        "entropy" => Ok(Command::Entropy { words: optional_count(rest)? }),
        "demo" => Ok(Command::Demo { words: optional_count(rest)? }),
        "validate" | "check" => {
            let mut words = None;
            let mut phrase = Vec::new();
            let mut iter = rest.iter();
            while let Some(arg) = iter.next() {
                match arg.as_str() {
                    "--words" | "-w" => {
                        let n = iter.next().ok_or_else(|| usage("--words needs a number"))?;
                        words = Some(parse_count(n)?);
                    }
                    _ => phrase.push(arg.as_str()),
                }
            }
            Ok(Command::Validate { words, phrase: phrase.join(" ") })
        }
        other => Err(usage(&format!(
            "unknown command: {other}\n  run 'brainphrase --help' for usage"
        ))),
    }
}

fn optional_count(rest: &[String]) -> Result<Option<usize>, AppError> {
    match rest {
        [] => Ok(None),
        [n] => parse_count(n).map(Some),
        _ => Err(usage("expected at most one word count")),
    }
}

fn parse_count(s: &str) -> Result<usize, AppError> {
    let n: usize = s.parse().map_err(|_| usage(&format!("not a word count: '{s}'")))?;
    if n > MAX_WORDS {
        return Err(usage(&format!("word count {n} is above the maximum of {MAX_WORDS}")));
    }
    Ok(n)
}

fn usage(msg: &str) -> AppError {
    AppError::Usage(msg.to_string())
}

fn print_help() {
    eprintln!("usage: brainphrase [--config <path>] [--log-level <level>] [--json] <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  generate [<words>]                  print a random phrase");
    eprintln!("  validate [--words <n>] <phrase...>  check a phrase against the dictionary");
    eprintln!("  entropy [<words>]                   dictionary size and phrase entropy");
    eprintln!("  demo [<words>]                      run the scripted validation demo");
    eprintln!();
    eprintln!("flags:");
    eprintln!("  --config, -c <path>      config file (default: config/default.toml)");
    eprintln!("  --log-level, -l <level>  override log level (beats RUST_LOG)");
    eprintln!("  --json                   machine-readable output");
    eprintln!("  --help, -h               print this help");
    eprintln!();
    eprintln!("env:");
    eprintln!("  BRAINPHRASE_LOG_LEVEL    override [logging] log_level");
    eprintln!("  BRAINPHRASE_WORDLIST     dictionary file, implies [module] backend = \"file\"");
}

// ── Commands ───────────────────────────────────────────────────────────────

fn generate(module: &PhraseModule, words: usize, as_json: bool) -> Result<ExitCode, AppError> {
    let phrase = module.random_phrase(words)?;
    info!(words, fingerprint = %brainphrase::fingerprint(&phrase), "phrase generated");
    if as_json {
        println!(
            "{}",
            json!({
                "phrase": phrase,
                "words": words,
                "entropy_bits": module.wordlist().entropy_bits(words),
            })
        );
    } else {
        println!("{phrase}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Returns whether the phrase is valid. Outside JSON mode an invalid phrase
/// is returned as an error so `main` prints it.
fn validate(module: &PhraseModule, phrase: &str, words: usize, as_json: bool) -> Result<bool, AppError> {
    let result = module.validate_phrase(phrase, words);
    info!(
        expected = words,
        fingerprint = %brainphrase::fingerprint(phrase),
        valid = result.is_ok(),
        "phrase validated"
    );
    if as_json {
        let body = match &result {
            Ok(()) => json!({ "valid": true }),
            Err(e) => json!({ "valid": false, "error": e.to_string() }),
        };
        println!("{body}");
        return Ok(result.is_ok());
    }
    result?;
    println!("ok  phrase is valid ({words} words expected)");
    Ok(true)
}

fn entropy(module: &PhraseModule, words: usize, as_json: bool) -> ExitCode {
    let wl = module.wordlist();
    let bits = wl.entropy_bits(words);
    if as_json {
        println!(
            "{}",
            json!({ "backend": module.backend(), "dictionary": wl.len(), "words": words, "entropy_bits": bits })
        );
    } else {
        println!("dictionary  {} words ({})", wl.len(), module.backend());
        println!("entropy     {bits:.1} bits for {words} words");
    }
    ExitCode::SUCCESS
}

fn run_demo(module: &PhraseModule, words: usize, as_json: bool) -> Result<ExitCode, AppError> {
    let report = demo::run(module, words)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("demo  {} words, fingerprint {}", report.words, report.fingerprint);
        for step in &report.steps {
            let mark = if step.met() { "ok " } else { "!! " };
            let outcome = match &step.outcome {
                demo::Outcome::Valid => "valid".to_string(),
                demo::Outcome::Invalid { error } => format!("invalid: {error}"),
            };
            println!("  {mark} {:<15} size {:>3}  {outcome}", step.label, step.size);
        }
    }
    Ok(if report.passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }
    let cmd_str = args
        .command
        .as_deref()
        .ok_or_else(|| usage("no command given\n  run 'brainphrase --help' for usage"))?;
    let cmd = build_command(cmd_str, &args.rest)?;

    let mut config = config::load(args.config.as_deref())?;
    let prefer_level = match args.log_level {
        Some(level) => {
            logger::parse_level(&level)?;
            config.log_level = level;
            true
        }
        None => false,
    };
    logger::init(&config.log_level, prefer_level)?;

    info!(
        backend = %config.module.backend,
        log_level = %config.log_level,
        "config loaded"
    );

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let module = rt.block_on(module::load(&config.module))?;

    match cmd {
        Command::Generate { words } => generate(&module, words.unwrap_or(config.phrase_words), args.json),
        Command::Validate { words, phrase } => {
            let valid = validate(&module, &phrase, words.unwrap_or(config.phrase_words), args.json)?;
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Entropy { words } => Ok(entropy(&module, words.unwrap_or(config.phrase_words), args.json)),
        Command::Demo { words } => run_demo(&module, words.unwrap_or(config.demo_words), args.json),
    }
}
