// Character classification for English letters
//
// Two vowel sets are in use. The transform engine treats only a e i o u
// as vowels and handles `y` by context; the syllable splitter counts `y`
// as a vowel nucleus. Consonants never include `y`. All checks are ASCII
// only and case-insensitive.

// ---------------------------------------------------------------------------
// English phonological constants
// ---------------------------------------------------------------------------

/// English vowels (lowercase): a e i o u
const ENGLISH_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// English consonants (lowercase), `y` excluded.
const ENGLISH_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z',
];

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character is one of a, e, i, o, u (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    ENGLISH_VOWELS.contains(&c.to_ascii_lowercase())
}

/// Check whether a character can carry a syllable nucleus: a vowel or `y`.
pub fn is_syllable_vowel(c: char) -> bool {
    is_vowel(c) || c.eq_ignore_ascii_case(&'y')
}

/// Check whether a character is an English consonant (case-insensitive).
/// `y` is not a consonant here.
pub fn is_consonant(c: char) -> bool {
    ENGLISH_CONSONANTS.contains(&c.to_ascii_lowercase())
}

/// Check whether any character of `s` can carry a syllable nucleus.
pub fn has_syllable_vowel(s: &[char]) -> bool {
    s.iter().any(|&c| is_syllable_vowel(c))
}

// ---------------------------------------------------------------------------
// Simple case conversion
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character so that per-character comparisons stay aligned.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Case-insensitive prefix test on a character slice.
pub fn starts_with_ignore_case(word: &[char], prefix: &str) -> bool {
    let prefix_len = prefix.chars().count();
    word.len() >= prefix_len
        && word
            .iter()
            .zip(prefix.chars())
            .all(|(&w, p)| simple_lower(w) == p)
}

/// Case-insensitive suffix test on a character slice.
pub fn ends_with_ignore_case(word: &[char], suffix: &str) -> bool {
    let suffix_len = suffix.chars().count();
    if word.len() < suffix_len {
        return false;
    }
    word[word.len() - suffix_len..]
        .iter()
        .zip(suffix.chars())
        .all(|(&w, s)| simple_lower(w) == s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // -- Vowel / consonant tests --

    #[test]
    fn vowels_are_case_insensitive() {
        for c in ['a', 'E', 'i', 'O', 'u'] {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        assert!(!is_vowel('y'));
        assert!(!is_vowel('b'));
    }

    #[test]
    fn y_is_a_syllable_vowel_only() {
        assert!(is_syllable_vowel('y'));
        assert!(is_syllable_vowel('Y'));
        assert!(!is_consonant('y'));
        assert!(!is_vowel('y'));
    }

    #[test]
    fn consonants() {
        assert!(is_consonant('b'));
        assert!(is_consonant('Z'));
        assert!(!is_consonant('a'));
        assert!(!is_consonant('\''));
        assert!(!is_consonant('\u{00E7}')); // ç
    }

    #[test]
    fn has_syllable_vowel_detects_y() {
        assert!(has_syllable_vowel(&chars("rhythm")));
        assert!(!has_syllable_vowel(&chars("bcdfg")));
        assert!(!has_syllable_vowel(&[]));
    }

    // -- Affix matching --

    #[test]
    fn prefix_and_suffix_ignore_case() {
        assert!(starts_with_ignore_case(&chars("UNhappy"), "un"));
        assert!(!starts_with_ignore_case(&chars("u"), "un"));
        assert!(ends_with_ignore_case(&chars("RunnING"), "ing"));
        assert!(ends_with_ignore_case(&chars("singin'"), "in'"));
        assert!(!ends_with_ignore_case(&chars("ng"), "ing"));
    }
}
