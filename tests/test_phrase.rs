//! Public API checks mirroring the scripted demo sequence.

use std::io::Write;

use brainphrase::config::ModuleConfig;
use brainphrase::{PhraseError, Wordlist, demo, load, random_phrase, validate_phrase};

const DEMO_SIZE: usize = 18;

#[test]
fn exact_size_is_valid() {
    let ph = random_phrase(DEMO_SIZE).unwrap();
    assert_eq!(validate_phrase(&ph, DEMO_SIZE), Ok(()));
}

#[test]
fn smaller_size_is_valid() {
    let ph = random_phrase(DEMO_SIZE).unwrap();
    assert_eq!(validate_phrase(&ph, DEMO_SIZE - 1), Ok(()));
}

#[test]
fn larger_size_is_too_short() {
    let ph = random_phrase(DEMO_SIZE).unwrap();
    assert_eq!(
        validate_phrase(&ph, DEMO_SIZE + 1),
        Err(PhraseError::TooShort { found: DEMO_SIZE, expected: DEMO_SIZE + 1 })
    );
}

#[test]
fn dummy_phrase_is_rejected() {
    assert!(matches!(
        validate_phrase(demo::DUMMY_PHRASE, demo::DUMMY_SIZE),
        Err(PhraseError::NotInDictionary(_))
    ));
}

#[test]
fn generated_words_come_from_builtin() {
    let wl = Wordlist::builtin();
    let ph = random_phrase(64).unwrap();
    assert!(ph.split(' ').all(|w| wl.contains(w)));
}

#[tokio::test]
async fn demo_against_file_module() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "# tiny dictionary").unwrap();
    for w in ["amber", "birch", "cedar", "dune", "ember"] {
        writeln!(f, "{w}").unwrap();
    }

    let cfg = ModuleConfig { backend: "file".into(), path: Some(f.path().to_path_buf()) };
    let module = load(&cfg).await.unwrap();
    let report = demo::run(&module, 6).unwrap();

    assert_eq!(report.backend, "file");
    assert!(report.passed(), "{report:?}");
}

#[test]
fn oversized_request_is_an_error_not_a_panic() {
    let result = std::panic::catch_unwind(|| random_phrase(usize::MAX)).expect("must not panic");
    assert!(matches!(result, Err(PhraseError::TooManyWords { .. })));
    assert!(random_phrase(brainphrase::MAX_WORDS).is_ok());
}
