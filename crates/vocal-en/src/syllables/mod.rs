// Syllable segmentation for English words
//
// The splitter works in layers:
// 1. Hand-tuned exception splits and known compounds (case mapped back
//    onto the input)
// 2. Prefix and ending extraction
// 3. A vowel/consonant scan over the remaining main part, with silent-e
//    (CVCe, VCe) words kept whole
// 4. Validation: every syllable must carry a vowel

use tracing::trace;
use vocal_core::analysis::SyllableResult;
use vocal_core::case::map_case_onto;
use vocal_core::character::{
    ends_with_ignore_case, has_syllable_vowel, is_consonant, is_syllable_vowel,
    starts_with_ignore_case,
};

use crate::lexicon::{self, SYLLABLE_PATTERNS, SYLLABLE_PREFIXES};

// ---------------------------------------------------------------------------
// Syllabifier trait
// ---------------------------------------------------------------------------

/// Trait for syllable segmentation backends.
///
/// The transform engine only needs this contract, so tests and alternative
/// splitters can be plugged in without touching the rules.
pub trait Syllabifier {
    /// Split a word into syllables. Empty input gives an empty result.
    fn split(&self, word: &str) -> SyllableResult;
}

impl<S: Syllabifier + ?Sized> Syllabifier for &S {
    fn split(&self, word: &str) -> SyllableResult {
        (**self).split(word)
    }
}

// ---------------------------------------------------------------------------
// EnglishSyllableSplitter
// ---------------------------------------------------------------------------

/// Rule-based English syllable splitter tuned for sung lyrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishSyllableSplitter;

impl EnglishSyllableSplitter {
    pub fn new() -> Self {
        Self
    }
}

impl Syllabifier for EnglishSyllableSplitter {
    fn split(&self, word: &str) -> SyllableResult {
        let chars: Vec<char> = word.chars().collect();
        match chars.len() {
            0 => return SyllableResult::default(),
            1 => return SyllableResult::from_syllables(vec![word.to_string()]),
            _ => {}
        }

        let lower = word.to_lowercase();
        if let Some(template) = lexicon::split_exception(&lower) {
            return SyllableResult::from_syllables(map_case_onto(word, template));
        }
        if let Some(parts) = lexicon::compound_parts(&lower) {
            return SyllableResult::from_syllables(map_case_onto(word, parts));
        }

        let syllables = rule_based(&chars);
        trace!(word, ?syllables, "rule-based split");
        SyllableResult::from_syllables(syllables)
    }
}

// ---------------------------------------------------------------------------
// Rule-based path
// ---------------------------------------------------------------------------

fn rule_based(word: &[char]) -> Vec<String> {
    let mut pieces: Vec<Vec<char>> = Vec::new();
    let mut remaining = word;

    if let Some(prefix_len) = extract_prefix(remaining) {
        pieces.push(remaining[..prefix_len].to_vec());
        remaining = &remaining[prefix_len..];
    }

    let ending_len = extract_ending(remaining).unwrap_or(0);
    let (main, ending) = remaining.split_at(remaining.len() - ending_len);

    if !main.is_empty() {
        pieces.extend(split_main_part(main));
    }
    if !ending.is_empty() {
        pieces.push(ending.to_vec());
    }

    validate(word, pieces)
}

/// Length of a leading syllable prefix, if the word is long enough and the
/// rest still has a vowel.
fn extract_prefix(word: &[char]) -> Option<usize> {
    SYLLABLE_PREFIXES.iter().find_map(|prefix| {
        let len = prefix.len();
        (starts_with_ignore_case(word, prefix)
            && word.len() > len + 2
            && has_syllable_vowel(&word[len..]))
        .then_some(len)
    })
}

/// Length of a trailing ending, longest first. Silent-e words keep their
/// ending.
fn extract_ending(word: &[char]) -> Option<usize> {
    if is_cvce(word) {
        return None;
    }
    SYLLABLE_PATTERNS.iter().find_map(|ending| {
        let len = ending.len();
        (ends_with_ignore_case(word, ending)
            && word.len() > len + 1
            && has_syllable_vowel(&word[..word.len() - len]))
        .then_some(len)
    })
}

/// CVC+e, CCVC+e or VC+e, optionally pluralized with "s"; 3 to 6 letters.
fn is_cvce(word: &[char]) -> bool {
    if !(3..=6).contains(&word.len()) {
        return false;
    }
    let stem = if ends_with_ignore_case(word, "es") {
        &word[..word.len() - 2]
    } else if ends_with_ignore_case(word, "e") {
        &word[..word.len() - 1]
    } else {
        return false;
    };

    let c = |i: usize| is_consonant(stem[i]);
    let v = |i: usize| is_syllable_vowel(stem[i]);
    match stem.len() {
        3 => c(0) && v(1) && c(2),
        4 => c(0) && c(1) && v(2) && c(3),
        2 => v(0) && c(1),
        _ => false,
    }
}

/// A trailing vowel + non-vowel + "e", as in "pirate".
fn has_vce_tail(word: &[char]) -> bool {
    let [.., v, c, e] = word else {
        return false;
    };
    let plain_vowel = |ch: char| "aeiou".contains(ch.to_ascii_lowercase());
    plain_vowel(*v) && !plain_vowel(*c) && e.eq_ignore_ascii_case(&'e')
}

fn split_main_part(word: &[char]) -> Vec<Vec<char>> {
    if word.len() <= 2 || is_cvce(word) {
        return vec![word.to_vec()];
    }

    if word.len() > 3 && has_vce_tail(word) {
        let (head, tail) = word.split_at(word.len() - 3);
        if !head.is_empty() && has_syllable_vowel(head) {
            let mut syllables = split_main_part(head);
            syllables.push(tail.to_vec());
            return syllables;
        }
    }

    scan(word)
}

/// Left-to-right scan. After each vowel the following consonant run
/// decides where the syllable ends.
fn scan(word: &[char]) -> Vec<Vec<char>> {
    let mut syllables: Vec<Vec<char>> = Vec::new();
    let mut current: Vec<char> = Vec::new();
    let mut i = 0;

    while i < word.len() {
        let ch = word[i];
        current.push(ch);

        if is_syllable_vowel(ch) {
            let mut j = i + 1;
            while j < word.len() && is_consonant(word[j]) {
                j += 1;
            }
            let consonants = j - i - 1;
            let mut break_after = false;

            if consonants == 1 && j == word.len() - 1 && word[j] == 'e' {
                // Single consonant plus final e: the rest belongs here.
                current.extend_from_slice(&word[i + 1..]);
                i = word.len() - 1;
            } else if j < word.len() && is_syllable_vowel(word[j]) {
                match consonants {
                    0 => {
                        let pair: String = [ch, word[i + 1]].iter().collect();
                        break_after = !lexicon::is_vowel_team(&pair.to_lowercase());
                    }
                    1 => break_after = true,
                    2 => {
                        let pair: String = word[i + 1..i + 3].iter().collect();
                        if !lexicon::is_consonant_blend(&pair.to_lowercase()) {
                            current.push(word[i + 1]);
                            i += 1;
                        }
                        break_after = true;
                    }
                    _ => {
                        current.push(word[i + 1]);
                        i += 1;
                        break_after = true;
                    }
                }
            }

            if break_after && current.len() > 1 {
                syllables.push(std::mem::take(&mut current));
            }
        }

        i += 1;
    }

    if !current.is_empty() {
        match syllables.last_mut() {
            Some(last) if !has_syllable_vowel(&current) => last.extend(current),
            _ => syllables.push(current),
        }
    }

    syllables
}

/// Fold vowel-less pieces into a neighbor. Falls back to the whole word.
fn validate(word: &[char], pieces: Vec<Vec<char>>) -> Vec<String> {
    let mut valid: Vec<Vec<char>> = Vec::new();
    let mut carry: Vec<char> = Vec::new();

    for piece in pieces {
        let mut piece = piece;
        if !carry.is_empty() {
            carry.append(&mut piece);
            piece = std::mem::take(&mut carry);
        }

        if has_syllable_vowel(&piece) {
            valid.push(piece);
        } else if let Some(last) = valid.last_mut() {
            last.extend(piece);
        } else {
            carry = piece;
        }
    }

    if valid.is_empty() {
        return vec![word.iter().collect()];
    }
    valid.into_iter().map(|s| s.into_iter().collect()).collect()
}
