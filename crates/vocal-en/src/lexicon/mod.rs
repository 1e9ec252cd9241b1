// Lexical data tables and their lookup indexes.
//
// Tables are static slices so their order is visible in source; the
// keyed ones are indexed into hashbrown maps on first use. Nothing here
// is mutated after initialization.

mod exceptions;
mod phonetic;
mod syllable;

use std::sync::LazyLock;

use hashbrown::HashMap;
use vocal_core::enums::{ConsonantContext, VowelContext};
use vocal_core::intensity::Transforms;

pub(crate) use phonetic::{
    INITIAL_CLUSTERS, PHONETIC_PATTERNS, PREFIXES, SILENT_PATTERNS, SIMPLE_VOWEL_FALLBACK,
    SUFFIXES,
};
pub(crate) use syllable::{COMPOUNDS, CONSONANT_BLENDS, SYLLABLE_PATTERNS, SYLLABLE_PREFIXES};

static EXCEPTION_INDEX: LazyLock<HashMap<&'static str, Transforms>> =
    LazyLock::new(|| exceptions::EXCEPTION_WORDS.iter().copied().collect());

static VOWEL_PHONEME_INDEX: LazyLock<HashMap<&'static str, Transforms>> =
    LazyLock::new(|| phonetic::VOWEL_PHONEMES.iter().copied().collect());

static VOWEL_PATTERN_INDEX: LazyLock<HashMap<&'static str, (&'static str, VowelContext)>> =
    LazyLock::new(|| {
        phonetic::VOWEL_PATTERNS
            .iter()
            .map(|&(spelling, phoneme, context)| (spelling, (phoneme, context)))
            .collect()
    });

static SPLIT_EXCEPTION_INDEX: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| syllable::SPLIT_EXCEPTIONS.iter().copied().collect());

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Exception dictionary entry for a lowercase word.
pub fn exception_word(word: &str) -> Option<&'static Transforms> {
    EXCEPTION_INDEX.get(word)
}

/// Vowel phoneme entry for a phoneme symbol or context key.
pub fn vowel_phoneme(key: &str) -> Option<&'static Transforms> {
    VOWEL_PHONEME_INDEX.get(key)
}

/// Phoneme symbol and tag for a vowel spelling.
pub fn vowel_pattern(spelling: &str) -> Option<(&'static str, VowelContext)> {
    VOWEL_PATTERN_INDEX.get(spelling).copied()
}

/// Respelling of a consonant letter in `context`, if a rule exists.
pub fn consonant_rule(letter: char, context: ConsonantContext) -> Option<&'static Transforms> {
    phonetic::CONSONANT_RULES
        .iter()
        .find(|(l, _)| *l == letter)
        .and_then(|(_, contexts)| contexts.iter().find(|(c, _)| *c == context))
        .map(|(_, transforms)| transforms)
}

/// Whether any consonant rule exists for `letter`.
pub fn has_consonant_rule(letter: char) -> bool {
    phonetic::CONSONANT_RULES.iter().any(|(l, _)| *l == letter)
}

/// Prefix table entry for a lowercase prefix.
pub fn prefix_transforms(prefix: &str) -> Option<&'static Transforms> {
    PREFIXES.iter().find(|(p, _)| *p == prefix).map(|(_, t)| t)
}

/// Suffix table entry for a lowercase suffix.
pub fn suffix_transforms(suffix: &str) -> Option<&'static Transforms> {
    SUFFIXES.iter().find(|(s, _)| *s == suffix).map(|(_, t)| t)
}

/// Hand-tuned syllable split for a lowercase word.
pub fn split_exception(word: &str) -> Option<&'static [&'static str]> {
    SPLIT_EXCEPTION_INDEX.get(word).copied()
}

/// Compound parts for a lowercase word.
pub fn compound_parts(word: &str) -> Option<&'static [&'static str; 2]> {
    COMPOUNDS
        .iter()
        .find(|[a, b]| word.len() == a.len() + b.len() && word.starts_with(a) && word.ends_with(b))
}

/// Whether a lowercase pair is a vowel team (or listed ending).
pub fn is_vowel_team(pair: &str) -> bool {
    SYLLABLE_PATTERNS.contains(&pair)
}

/// Whether a lowercase pair is a consonant blend.
pub fn is_consonant_blend(pair: &str) -> bool {
    CONSONANT_BLENDS.contains(&pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocal_core::intensity::IntensityLevel;

    #[test]
    fn every_exception_key_is_lowercase() {
        for (word, _) in exceptions::EXCEPTION_WORDS {
            assert_eq!(*word, word.to_lowercase());
            assert!(!word.contains('\''), "{word} should be stored without apostrophe");
        }
    }

    #[test]
    fn exception_dictionary_size_and_coverage() {
        let words = exceptions::EXCEPTION_WORDS;
        assert!(words.len() > 100, "only {} exception words", words.len());
        for common in ["the", "and", "you", "to", "of", "a", "for", "was", "with", "they", "at"] {
            assert!(exception_word(common).is_some(), "{common} missing");
        }
        for contraction in ["youll", "well", "ill", "cant", "wont", "dont"] {
            assert!(exception_word(contraction).is_some(), "{contraction} missing");
        }
    }

    #[test]
    fn exception_keys_are_unique() {
        let mut keys: Vec<&str> = exceptions::EXCEPTION_WORDS.iter().map(|(w, _)| *w).collect();
        keys.sort_unstable();
        let total = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn exception_lookup() {
        let the = exception_word("the").map(|t| t.resolve(IntensityLevel::Moderate));
        assert_eq!(the, Some("dhuh"));
        assert!(exception_word("The").is_none());
        assert!(exception_word("zebra").is_none());
    }

    #[test]
    fn split_exception_templates_match_their_keys() {
        // Contractions lose the apostrophe in the template; every other
        // entry reassembles to its key.
        for (word, parts) in syllable::SPLIT_EXCEPTIONS {
            let joined: String = parts.concat();
            if word.contains('\'') {
                assert!(joined.len() < word.len() || joined == *word, "{word}");
            } else {
                assert_eq!(joined, *word);
            }
        }
    }

    #[test]
    fn syllable_patterns_sorted_longest_first() {
        let lengths: Vec<usize> = SYLLABLE_PATTERNS.iter().map(|p| p.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn two_letter_clusters_are_tried_first() {
        let first_match = |word: &str| {
            INITIAL_CLUSTERS
                .iter()
                .find(|(cluster, _)| word.starts_with(cluster))
                .map(|&(cluster, _)| cluster)
        };
        assert_eq!(first_match("scream"), Some("sc"));
        assert_eq!(first_match("spring"), Some("sp"));
        assert_eq!(first_match("strong"), Some("st"));
        assert_eq!(first_match("smile"), Some("sm"));
        assert_eq!(first_match("bring"), None);
    }

    #[test]
    fn consonant_rule_contexts() {
        let t_final = consonant_rule('t', ConsonantContext::SyllableFinal);
        assert_eq!(t_final.map(|t| t.resolve(IntensityLevel::Full)), Some(""));
        assert!(consonant_rule('p', ConsonantContext::BeforeConsonant).is_none());
        assert!(consonant_rule('r', ConsonantContext::SyllableInitial).is_none());
        assert!(has_consonant_rule('j'));
        assert!(!has_consonant_rule('h'));
    }

    #[test]
    fn vowel_pattern_resolves_to_a_phoneme_entry() {
        for (spelling, _, _) in phonetic::VOWEL_PATTERNS {
            let (phoneme, _) = vowel_pattern(spelling).unwrap();
            assert!(vowel_phoneme(phoneme).is_some(), "{spelling} -> {phoneme}");
        }
    }

    #[test]
    fn compounds() {
        assert_eq!(compound_parts("rainbow"), Some(&["rain", "bow"]));
        assert_eq!(compound_parts("rainbows"), None);
        assert!(is_vowel_team("ai"));
        assert!(!is_vowel_team("ia"));
        assert!(is_consonant_blend("st"));
        assert!(!is_consonant_blend("pp"));
    }
}
