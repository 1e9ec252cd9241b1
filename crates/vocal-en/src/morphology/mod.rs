// Morphological analysis: prefix/root/suffix split
//
// Affixes come from the morpheme tables. Matching is case-insensitive and
// first-match in table order; an affix only counts when the word (or, for
// suffixes, the root left after prefix removal) is longer than the affix
// by more than two characters.

use vocal_core::analysis::MorphologyAnalysis;
use vocal_core::character::{ends_with_ignore_case, starts_with_ignore_case};

use crate::lexicon::{PREFIXES, SUFFIXES};

/// Trait for morphological analysis backends.
pub trait MorphologyAnalyzer {
    /// Split `word` into prefix, root and suffix. Empty input gives an
    /// all-empty analysis.
    fn analyze(&self, word: &str) -> MorphologyAnalysis;
}

impl<M: MorphologyAnalyzer + ?Sized> MorphologyAnalyzer for &M {
    fn analyze(&self, word: &str) -> MorphologyAnalysis {
        (**self).analyze(word)
    }
}

/// Table-driven affix stripper.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffixAnalyzer;

impl AffixAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl MorphologyAnalyzer for AffixAnalyzer {
    fn analyze(&self, word: &str) -> MorphologyAnalysis {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return MorphologyAnalysis::default();
        }

        let prefix_len = PREFIXES
            .iter()
            .map(|&(prefix, _)| prefix)
            .find(|prefix| {
                starts_with_ignore_case(&chars, prefix) && chars.len() > prefix.chars().count() + 2
            })
            .map_or(0, |prefix| prefix.chars().count());
        let (prefix, rest) = chars.split_at(prefix_len);

        let suffix_len = SUFFIXES
            .iter()
            .map(|&(suffix, _)| suffix)
            .find(|suffix| {
                ends_with_ignore_case(rest, suffix) && rest.len() > suffix.chars().count() + 2
            })
            .map_or(0, |suffix| suffix.chars().count());
        if prefix_len == 0 && suffix_len == 0 {
            return MorphologyAnalysis::root_only(word);
        }
        let (root, suffix) = rest.split_at(rest.len() - suffix_len);

        MorphologyAnalysis {
            prefix: prefix.iter().collect(),
            root: root.iter().collect(),
            suffix: suffix.iter().collect(),
            compound: false,
        }
    }
}
