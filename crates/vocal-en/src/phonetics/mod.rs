// Phonetic normalization of a morpheme before syllable splitting
//
// Three passes over the lowercased text:
// 1. at most one word-initial consonant cluster
// 2. every multi-letter spelling pattern, globally, in table order
// 3. every silent-letter pattern, globally, at all intensities
//
// Patterns are compiled once. A pattern that fails to compile is logged
// and left out; normalization itself never fails.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::warn;
use vocal_core::intensity::{IntensityLevel, Transforms};

use crate::lexicon::{INITIAL_CLUSTERS, PHONETIC_PATTERNS, SILENT_PATTERNS};

/// Error compiling one table pattern.
#[derive(Debug, thiserror::Error)]
#[error("invalid pattern {pattern:?}: {source}")]
pub struct PatternError {
    pub pattern: &'static str,
    #[source]
    pub source: regex::Error,
}

/// Compile a table pattern.
pub fn compile_pattern(pattern: &'static str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError { pattern, source })
}

/// Compile every pattern, logging and dropping the ones that fail.
pub(crate) fn compile_all<T: Copy>(table: &[(&'static str, T)]) -> Vec<(Regex, T)> {
    table
        .iter()
        .filter_map(|&(pattern, value)| match compile_pattern(pattern) {
            Ok(regex) => Some((regex, value)),
            Err(e) => {
                warn!(error = %e, "skipping pattern");
                None
            }
        })
        .collect()
}

static PHONETIC_RULES: LazyLock<Vec<(Regex, Transforms)>> =
    LazyLock::new(|| compile_all(PHONETIC_PATTERNS));

static SILENT_RULES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_all(SILENT_PATTERNS));

/// Normalize a morpheme's spelling for the given bucket.
///
/// The result is lowercase. Empty input gives an empty string.
pub fn normalize_phonetics(word: &str, level: IntensityLevel) -> String {
    if word.is_empty() {
        return String::new();
    }
    let mut normalized = word.to_lowercase();

    if let Some((cluster, transforms)) = INITIAL_CLUSTERS
        .iter()
        .find(|(cluster, _)| normalized.starts_with(cluster))
    {
        normalized.replace_range(..cluster.len(), transforms.resolve(level));
    }

    for (regex, transforms) in PHONETIC_RULES.iter() {
        let replacement = transforms.resolve(level);
        normalized = regex
            .replace_all(&normalized, NoExpand(replacement))
            .into_owned();
    }

    for (regex, replacement) in SILENT_RULES.iter() {
        normalized = regex
            .replace_all(&normalized, NoExpand(replacement))
            .into_owned();
    }

    normalized
}
