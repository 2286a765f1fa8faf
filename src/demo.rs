//! Scripted demo driver.
//!
//! Generates one phrase and runs a fixed sequence of validations against the
//! loaded [`PhraseModule`], recording each outcome. Validation failures are
//! caught and recorded; only a word count the module cannot generate is an
//! error.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::module::PhraseModule;
use crate::phrase::{PhraseError, fingerprint};

/// Phrase used to exercise dictionary rejection.
pub const DUMMY_PHRASE: &str = "test bd dd";
pub const DUMMY_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Valid,
    Invalid,
    /// Outcome is only recorded.
    Either,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Valid,
    Invalid { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoStep {
    pub label: &'static str,
    /// Expected word count passed to `validate_phrase`.
    pub size: usize,
    pub expect: Expectation,
    pub outcome: Outcome,
}

impl DemoStep {
    pub fn met(&self) -> bool {
        match (self.expect, &self.outcome) {
            (Expectation::Either, _) => true,
            (Expectation::Valid, Outcome::Valid) => true,
            (Expectation::Invalid, Outcome::Invalid { .. }) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub backend: &'static str,
    pub words: usize,
    /// Fingerprint of the generated phrase; the phrase itself is not kept.
    pub fingerprint: String,
    pub steps: Vec<DemoStep>,
}

impl DemoReport {
    pub fn passed(&self) -> bool {
        self.steps.iter().all(DemoStep::met)
    }
}

/// Run the scripted sequence with a phrase of `size` words.
///
/// `size` is bounded by [`crate::phrase::MAX_WORDS`], so `size + 1` cannot
/// overflow.
pub fn run(module: &PhraseModule, size: usize) -> Result<DemoReport, PhraseError> {
    let phrase = module.random_phrase(size)?;
    let fp = fingerprint(&phrase);
    info!(words = size, fingerprint = %fp, "demo phrase generated");

    let mut plan = vec![("exact size", phrase.as_str(), size, Expectation::Valid)];
    if let Some(smaller) = size.checked_sub(1) {
        plan.push(("size minus one", phrase.as_str(), smaller, Expectation::Either));
    }
    plan.push(("size plus one", phrase.as_str(), size + 1, Expectation::Invalid));
    plan.push(("dummy phrase", DUMMY_PHRASE, DUMMY_SIZE, Expectation::Invalid));

    let steps = plan
        .into_iter()
        .map(|(label, candidate, n, expect)| {
            let outcome = match module.validate_phrase(candidate, n) {
                Ok(()) => Outcome::Valid,
                Err(e) => Outcome::Invalid { error: e.to_string() },
            };
            let step = DemoStep { label, size: n, expect, outcome };
            if step.met() {
                debug!(step = label, size = n, outcome = ?step.outcome, "demo step");
            } else {
                warn!(step = label, size = n, outcome = ?step.outcome, "demo step did not match expectation");
            }
            step
        })
        .collect();

    Ok(DemoReport {
        backend: module.backend(),
        words: size,
        fingerprint: fp,
        steps,
    })
}
