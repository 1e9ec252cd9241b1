//! Golden tests: translator output against the JSON fixtures in
//! `tests/golden/` at the workspace root.
//!
//! Run: cargo test -p vocal-en --test golden

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use vocal_en::translator::VocalTranslator;

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

fn load_golden<T: DeserializeOwned>(filename: &str) -> T {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/golden")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

#[derive(Deserialize)]
struct MorphologyCase {
    word: String,
    prefix: String,
    root: String,
    suffix: String,
}

#[derive(Deserialize)]
struct WordCase {
    word: String,
    intensity: u8,
    expected: String,
}

#[derive(Deserialize)]
struct LyricsCase {
    lyrics: String,
    intensity: u8,
    expected: String,
}

/// Collect every mismatch so one run reports them all.
fn report(kind: &str, failures: &[String]) {
    if !failures.is_empty() {
        panic!("{} {kind} mismatches:\n{}", failures.len(), failures.join("\n"));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_syllables() {
    let cases: BTreeMap<String, Vec<String>> = load_golden("syllables.json");
    let translator = VocalTranslator::default();

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|(word, expected)| {
            let actual = translator.syllabify(word);
            (actual != *expected)
                .then(|| format!("  {word:?}: expected {expected:?}, got {actual:?}"))
        })
        .collect();
    report("syllable", &failures);
}

#[test]
fn golden_morphology() {
    let cases: Vec<MorphologyCase> = load_golden("morphology.json");
    let translator = VocalTranslator::default();

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let a = translator.analyze_morphology(&case.word);
            let actual = (a.prefix.as_str(), a.root.as_str(), a.suffix.as_str());
            let expected = (case.prefix.as_str(), case.root.as_str(), case.suffix.as_str());
            (actual != expected || a.compound)
                .then(|| format!("  {:?}: expected {expected:?}, got {actual:?}", case.word))
        })
        .collect();
    report("morphology", &failures);
}

#[test]
fn golden_translations() {
    let cases: Vec<WordCase> = load_golden("translations.json");
    let translator = VocalTranslator::default();

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let actual = translator.translate_word(&case.word, case.intensity);
            (actual != case.expected).then(|| {
                format!(
                    "  {:?} @ {}: expected {:?}, got {actual:?}",
                    case.word, case.intensity, case.expected
                )
            })
        })
        .collect();
    report("translation", &failures);
}

#[test]
fn golden_lyrics() {
    let cases: Vec<LyricsCase> = load_golden("lyrics.json");
    let translator = VocalTranslator::default();

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let actual = translator.translate_lyrics(&case.lyrics, case.intensity);
            (actual != case.expected).then(|| {
                format!(
                    "  {:?} @ {}: expected {:?}, got {actual:?}",
                    case.lyrics, case.intensity, case.expected
                )
            })
        })
        .collect();
    report("lyrics", &failures);
}
