// Intensity-graded transform engine
//
// Turns one morpheme into its respelling:
// 1. lowercase and adjust common endings (-ce, -y, -ies) from bucket 4 up
// 2. phonetic normalization
// 3. syllable split of the normalized text
// 4. per-syllable character scan: vowel spellings, single vowels, `y`,
//    consonants by position, everything else copied
// 5. at bucket 8, syllables are joined with '-'
//
// The checked entry point reports why a morpheme could not be handled;
// the plain entry point logs that and falls back to `simple_transform`.

use tracing::{debug, warn};
use vocal_core::character::{is_consonant, is_vowel};
use vocal_core::enums::ConsonantContext;
use vocal_core::intensity::{IntensityLevel, Transforms};

use crate::lexicon::{self, SIMPLE_VOWEL_FALLBACK};
use crate::phonetics::normalize_phonetics;
use crate::syllables::Syllabifier;

/// Separator placed between syllables at bucket 8.
pub const SYLLABLE_SEPARATOR: char = '-';

/// Longest vowel spelling tried before single letters.
const MAX_VOWEL_PATTERN_LEN: usize = 3;

/// Reasons the engine cannot handle a morpheme. Callers of
/// [`TransformEngine::transform_morpheme`] never see these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// Normalization removed every character.
    #[error("morpheme {0:?} is empty after phonetic normalization")]
    EmptyMorpheme(String),

    /// The syllable splitter returned nothing for non-empty text.
    #[error("no syllables found in {0:?}")]
    NoSyllables(String),
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for the transform engine.
#[derive(Debug, Clone, Copy)]
pub struct TransformOptions {
    /// Join syllables with [`SYLLABLE_SEPARATOR`] at bucket 8.
    pub hyphenate_syllables: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            hyphenate_syllables: true,
        }
    }
}

// ---------------------------------------------------------------------------
// TransformEngine
// ---------------------------------------------------------------------------

/// Morpheme respelling engine over a pluggable syllable splitter.
pub struct TransformEngine<S: Syllabifier> {
    splitter: S,
    options: TransformOptions,
}

impl<S: Syllabifier> TransformEngine<S> {
    pub fn new(splitter: S, options: TransformOptions) -> Self {
        Self { splitter, options }
    }

    /// The splitter the engine segments with.
    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    pub fn options(&self) -> TransformOptions {
        self.options
    }

    pub fn set_hyphenate_syllables(&mut self, value: bool) {
        self.options.hyphenate_syllables = value;
    }

    /// Respell a morpheme. Never fails: problems are logged and answered
    /// with [`simple_transform`].
    pub fn transform_morpheme(&self, morpheme: &str, level: IntensityLevel) -> String {
        match self.try_transform_morpheme(morpheme, level) {
            Ok(result) => result,
            Err(e) => {
                warn!(morpheme, error = %e, "transform failed, using simple transform");
                simple_transform(morpheme, level)
            }
        }
    }

    /// Respell a morpheme, reporting inputs the rules cannot handle.
    pub fn try_transform_morpheme(
        &self,
        morpheme: &str,
        level: IntensityLevel,
    ) -> Result<String, TransformError> {
        if morpheme.is_empty() {
            return Ok(String::new());
        }

        let adjusted = adjust_endings(&morpheme.to_lowercase(), level);
        let normalized = normalize_phonetics(&adjusted, level);
        if normalized.is_empty() {
            return Err(TransformError::EmptyMorpheme(morpheme.to_string()));
        }

        let syllables: Vec<Vec<char>> = self
            .splitter
            .split(&normalized)
            .syllables
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.chars().collect())
            .collect();
        if syllables.is_empty() {
            return Err(TransformError::NoSyllables(normalized));
        }
        debug!(morpheme, %normalized, syllables = syllables.len(), "transforming morpheme");

        let hyphenate = self.options.hyphenate_syllables && level == IntensityLevel::Full;
        let mut result = String::with_capacity(normalized.len() + syllables.len());
        for index in 0..syllables.len() {
            if hyphenate && index > 0 {
                result.push(SYLLABLE_SEPARATOR);
            }
            transform_syllable(&syllables, index, level, &mut result);
        }
        Ok(result)
    }
}

/// Respell one syllable into `out`.
fn transform_syllable(
    syllables: &[Vec<char>],
    index: usize,
    level: IntensityLevel,
    out: &mut String,
) {
    let syllable = &syllables[index];
    let is_last_syllable = index + 1 == syllables.len();
    let drop_final_e = is_last_syllable && has_silent_final_e(syllables);
    let mut i = 0;

    while i < syllable.len() {
        if let Some((len, respelled)) = match_vowel_spelling(syllable, i, level) {
            out.push_str(respelled);
            i += len;
            continue;
        }

        let ch = syllable[i];
        if drop_final_e && i + 1 == syllable.len() && ch.eq_ignore_ascii_case(&'e') {
            break;
        }
        if is_vowel(ch) {
            let transforms = contextual_vowel(syllable, i, is_last_syllable);
            match transforms {
                Some(t) => out.push_str(t.resolve(level)),
                None => {
                    let letter = ch.to_ascii_lowercase().to_string();
                    out.push_str(transform_vowel_phoneme(&letter, level));
                }
            }
        } else if ch.eq_ignore_ascii_case(&'y') {
            out.push_str(y_sound(syllable, i, level));
        } else if is_consonant(ch) {
            out.push_str(&transform_consonant_in_context(ch, syllables, index, i, level));
        } else {
            out.push(ch);
        }
        i += 1;
    }
}

// ---------------------------------------------------------------------------
// Vowels
// ---------------------------------------------------------------------------

/// Longest vowel spelling (3, then 2 letters) starting at `i`.
fn match_vowel_spelling(
    syllable: &[char],
    i: usize,
    level: IntensityLevel,
) -> Option<(usize, &'static str)> {
    (2..=MAX_VOWEL_PATTERN_LEN).rev().find_map(|len| {
        let candidate: String = syllable.get(i..i + len)?.iter().collect();
        let (phoneme, _) = lexicon::vowel_pattern(&candidate)?;
        let transforms = lexicon::vowel_phoneme(phoneme)?;
        Some((len, transforms.resolve(level)))
    })
}

/// Respelling of a vowel spelling or phoneme symbol.
///
/// Tries the spelling table, then a direct phoneme lookup, then (from
/// bucket 4) a plain single-vowel fallback. Otherwise the input is kept.
pub fn transform_vowel_phoneme<'a>(spelling: &'a str, level: IntensityLevel) -> &'a str {
    if let Some(t) = lexicon::vowel_pattern(spelling)
        .and_then(|(phoneme, _)| lexicon::vowel_phoneme(phoneme))
    {
        return t.resolve(level);
    }
    if let Some(t) = lexicon::vowel_phoneme(spelling) {
        return t.resolve(level);
    }
    if level >= IntensityLevel::Moderate {
        let mut letters = spelling.chars();
        if let (Some(letter), None) = (letters.next(), letters.next()) {
            if let Some(fallback) = SIMPLE_VOWEL_FALLBACK
                .iter()
                .find(|(v, _)| *v == letter)
                .map(|&(_, fallback)| fallback)
            {
                return fallback;
            }
        }
    }
    spelling
}

/// Phoneme entry for a single vowel in a specific spelling context:
/// a/o before "kes" or "tes", or any vowel of a final silent-e syllable.
fn contextual_vowel(
    syllable: &[char],
    i: usize,
    is_last_syllable: bool,
) -> Option<&'static Transforms> {
    let vowel = syllable[i].to_ascii_lowercase();
    let following: String = syllable[i + 1..]
        .iter()
        .take(3)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let key = match (vowel, following.as_str()) {
        ('a', "kes") => "a_akes".to_string(),
        ('a', "tes") => "a_ates".to_string(),
        ('o', "tes") => "o_otes".to_string(),
        ('o', "kes") => "o_okes".to_string(),
        _ if is_last_syllable && is_silent_e_syllable(syllable) => format!("{vowel}_cvce"),
        _ => return None,
    };
    lexicon::vowel_phoneme(&key)
}

/// The morpheme ends in an unsung `e`: its last syllable, or the whole
/// morpheme, is a silent-e shape.
fn has_silent_final_e(syllables: &[Vec<char>]) -> bool {
    let Some(last) = syllables.last() else {
        return false;
    };
    is_silent_e_syllable(last) || (syllables.len() > 1 && is_silent_e_syllable(&syllables.concat()))
}

/// CVC+e, CCVC+e or VC+e.
fn is_silent_e_syllable(syllable: &[char]) -> bool {
    let Some((last, stem)) = syllable.split_last() else {
        return false;
    };
    if !last.eq_ignore_ascii_case(&'e') {
        return false;
    }
    let c = |i: usize| is_consonant(stem[i]);
    let v = |i: usize| is_vowel(stem[i]);
    match stem.len() {
        2 => v(0) && c(1),
        3 => c(0) && v(1) && c(2),
        4 => c(0) && c(1) && v(2) && c(3),
        _ => false,
    }
}

/// `y` acts as a vowel after a consonant, at the end of the syllable, or
/// before a consonant. From bucket 4 that vowel is respelled.
fn y_sound(syllable: &[char], i: usize, level: IntensityLevel) -> &'static str {
    let prev = i.checked_sub(1).map(|p| syllable[p]);
    let next = syllable.get(i + 1).copied();
    let is_last = next.is_none();

    let acts_as_vowel = prev.is_some_and(is_consonant) || is_last || next.is_some_and(is_consonant);
    if !acts_as_vowel || level < IntensityLevel::Moderate {
        return "y";
    }
    if is_last || next.is_some_and(is_vowel) {
        "eh"
    } else {
        "e"
    }
}

// ---------------------------------------------------------------------------
// Consonants
// ---------------------------------------------------------------------------

/// Classify the position of a consonant in its syllable. A missing
/// syllable classifies as syllable-initial.
pub fn consonant_context(syllable: Option<&[char]>, position: usize) -> ConsonantContext {
    let Some(syllable) = syllable else {
        return ConsonantContext::SyllableInitial;
    };
    if position == 0 {
        return ConsonantContext::SyllableInitial;
    }
    if position + 1 == syllable.len() {
        return ConsonantContext::SyllableFinal;
    }

    let before = syllable.get(position - 1).copied();
    let after = syllable.get(position + 1).copied();
    if before.is_some_and(is_vowel) && after.is_some_and(is_vowel) {
        ConsonantContext::Intervocalic
    } else if after.is_some_and(|c| is_consonant(c) || c.eq_ignore_ascii_case(&'y')) {
        ConsonantContext::BeforeConsonant
    } else {
        ConsonantContext::SyllableInitial
    }
}

/// Respell a consonant by its position in syllable `syllable_index`.
/// Letters without a rule, or without a rule for that position, are kept.
pub fn transform_consonant_in_context(
    consonant: char,
    syllables: &[Vec<char>],
    syllable_index: usize,
    position_in_syllable: usize,
    level: IntensityLevel,
) -> String {
    let letter = consonant.to_ascii_lowercase();
    if !lexicon::has_consonant_rule(letter) {
        return consonant.to_string();
    }
    let syllable = syllables.get(syllable_index).map(Vec::as_slice);
    let context = consonant_context(syllable, position_in_syllable);
    match lexicon::consonant_rule(letter, context) {
        Some(t) => t.resolve(level).to_string(),
        None => consonant.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Ending adjustments and the simple fallback
// ---------------------------------------------------------------------------

/// Spelling adjustments for common endings, applied from bucket 4 in
/// sequence to lowercase text.
fn adjust_endings(lower: &str, level: IntensityLevel) -> String {
    let mut word = lower.to_string();
    if level < IntensityLevel::Moderate {
        return word;
    }
    if let Some(stem) = word.strip_suffix("ce") {
        word = format!("{stem}ss");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            word = format!("{stem}eh");
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        word = format!("{stem}ehs");
    }
    word
}

/// Conservative respelling used for very short words and as the fallback
/// when the engine gives up. Lowercase output.
pub fn simple_transform(word: &str, level: IntensityLevel) -> String {
    let mut result = word.to_lowercase();
    if level >= IntensityLevel::Moderate {
        result = result.replace("ee", "eh").replace("ea", "eh");
    }
    if level >= IntensityLevel::Full {
        const NON_I_VOWELS: &[char] = &['a', 'e', 'o', 'u'];
        result = replace_unless_followed_by(&result, 'i', NON_I_VOWELS, "ah");
        result = replace_unless_followed_by(&result, 'e', NON_I_VOWELS, "eh");
        result = replace_unless_followed_by(&result, 't', &['h'], "d");
    }
    result
}

/// Replace every `target` not directly followed by one of `blockers`.
fn replace_unless_followed_by(
    text: &str,
    target: char,
    blockers: &[char],
    replacement: &str,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == target && !chars.peek().is_some_and(|next| blockers.contains(next)) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllables::EnglishSyllableSplitter;
    use vocal_core::analysis::SyllableResult;

    use IntensityLevel::{Full, Minimal, Moderate};

    // -----------------------------------------------------------------------
    // Stub splitters
    // -----------------------------------------------------------------------

    /// Splitter that never finds a syllable.
    struct NullSplitter;

    impl Syllabifier for NullSplitter {
        fn split(&self, _word: &str) -> SyllableResult {
            SyllableResult::default()
        }
    }

    /// Splitter that keeps the whole word as one syllable.
    struct WholeWordSplitter;

    impl Syllabifier for WholeWordSplitter {
        fn split(&self, word: &str) -> SyllableResult {
            SyllableResult::from_syllables(vec![word.to_string()])
        }
    }

    fn engine() -> TransformEngine<EnglishSyllableSplitter> {
        TransformEngine::new(EnglishSyllableSplitter, TransformOptions::default())
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // -- Morpheme transforms --

    #[test]
    fn hello_by_intensity() {
        let e = engine();
        assert_eq!(e.transform_morpheme("hello", Minimal), "hello");
        assert_eq!(e.transform_morpheme("hello", Moderate), "hehlloh");
        assert_eq!(e.transform_morpheme("hello", Full), "hehl-lah");
    }

    #[test]
    fn final_t_is_dropped_at_full() {
        let e = engine();
        assert_eq!(e.transform_morpheme("cat", Minimal), "cat");
        assert_eq!(e.transform_morpheme("cat", Moderate), "cahd");
        assert_eq!(e.transform_morpheme("cat", Full), "cah");
    }

    #[test]
    fn initial_s_voices_at_full() {
        let e = engine();
        assert_eq!(e.transform_morpheme("sun", Minimal), "soon");
        assert_eq!(e.transform_morpheme("sun", Moderate), "sohn");
        assert_eq!(e.transform_morpheme("sun", Full), "zahn");
    }

    #[test]
    fn hyphenation_can_be_disabled() {
        let mut e = engine();
        e.set_hyphenate_syllables(false);
        assert!(!e.options().hyphenate_syllables);
        assert_eq!(e.transform_morpheme("hello", Full), "hehllah");
    }

    #[test]
    fn empty_morpheme() {
        assert_eq!(engine().try_transform_morpheme("", Full), Ok(String::new()));
    }

    #[test]
    fn erased_morpheme_falls_back() {
        let e = engine();
        assert_eq!(
            e.try_transform_morpheme("gh", Moderate),
            Err(TransformError::EmptyMorpheme("gh".to_string()))
        );
        assert_eq!(e.transform_morpheme("gh", Moderate), "gh");
    }

    #[test]
    fn no_syllables_falls_back() {
        let e = TransformEngine::new(NullSplitter, TransformOptions::default());
        assert_eq!(
            e.try_transform_morpheme("teeth", Moderate),
            Err(TransformError::NoSyllables("teeth".to_string()))
        );
        assert_eq!(e.transform_morpheme("teeth", Moderate), "tehth");
    }

    #[test]
    fn vowel_spelling_uses_phoneme_table() {
        let e = TransformEngine::new(WholeWordSplitter, TransformOptions::default());
        // "oo" -> u -> oo/oh/ah
        assert_eq!(e.transform_morpheme("moon", Minimal), "moon");
        assert_eq!(e.transform_morpheme("moon", Moderate), "mohn");
        assert_eq!(e.transform_morpheme("moon", Full), "mahn");
    }

    #[test]
    fn silent_final_e_is_not_sung() {
        let e = engine();
        assert_eq!(e.transform_morpheme("love", Moderate), "lohv");
        assert_eq!(e.transform_morpheme("make", Moderate), "mahg");
        assert_eq!(e.transform_morpheme("time", Moderate), "tihm");
        assert_eq!(e.transform_morpheme("stone", Moderate), "stohn");
        assert_eq!(e.transform_morpheme("home", Full), "hahm");
    }

    #[test]
    fn silent_e_of_a_split_morpheme() {
        /// Splitter that cuts before the last two letters.
        struct TailSplitter;

        impl Syllabifier for TailSplitter {
            fn split(&self, word: &str) -> SyllableResult {
                let cut = word.len().saturating_sub(2);
                let (head, tail) = word.split_at(cut);
                SyllableResult::from_syllables(vec![head.to_string(), tail.to_string()])
            }
        }

        let e = TransformEngine::new(TailSplitter, TransformOptions::default());
        assert_eq!(e.transform_morpheme("love", Moderate), "lohv");
    }

    #[test]
    fn sounded_final_e_is_kept() {
        let e = TransformEngine::new(WholeWordSplitter, TransformOptions::default());
        assert_eq!(e.transform_morpheme("me", Moderate), "meh");
        assert_eq!(e.transform_morpheme("be", Minimal), "be");
    }

    #[test]
    fn context_keyed_vowel() {
        let e = TransformEngine::new(WholeWordSplitter, TransformOptions::default());
        // a before "kes" uses a_akes; k between vowels is intervocalic.
        assert_eq!(e.transform_morpheme("makes", Moderate), "maegehz");
    }

    // -- Ending adjustments --

    #[test]
    fn endings_adjusted_from_moderate() {
        assert_eq!(adjust_endings("face", Minimal), "face");
        assert_eq!(adjust_endings("face", Moderate), "fass");
        assert_eq!(adjust_endings("happy", Moderate), "happeh");
        assert_eq!(adjust_endings("play", Moderate), "play");
        assert_eq!(adjust_endings("cities", Full), "citehs");
    }

    // -- Vowels --

    #[test]
    fn vowel_resolution_order() {
        assert_eq!(transform_vowel_phoneme("ea", Moderate), "ih");
        assert_eq!(transform_vowel_phoneme("\u{0254}", Minimal), "aw");
        assert_eq!(transform_vowel_phoneme("a", Moderate), "ah");
        assert_eq!(transform_vowel_phoneme("a", Minimal), "a");
        assert_eq!(transform_vowel_phoneme("xx", Full), "xx");
    }

    #[test]
    fn silent_e_syllables() {
        assert!(is_silent_e_syllable(&chars("home")));
        assert!(is_silent_e_syllable(&chars("ice")));
        assert!(is_silent_e_syllable(&chars("stone")));
        assert!(!is_silent_e_syllable(&chars("homes")));
        assert!(!is_silent_e_syllable(&chars("e")));
        assert!(has_silent_final_e(&[chars("lo"), chars("ve")]));
        assert!(!has_silent_final_e(&[chars("ma"), chars("ke"), chars("s")]));
        assert!(!has_silent_final_e(&[]));
    }

    #[test]
    fn y_by_position() {
        let sy = chars("sky");
        assert_eq!(y_sound(&sy, 2, Minimal), "y");
        assert_eq!(y_sound(&sy, 2, Moderate), "eh");
        let gym = chars("gym");
        assert_eq!(y_sound(&gym, 1, Full), "e");
        let yes = chars("yes");
        assert_eq!(y_sound(&yes, 0, Full), "y");
    }

    // -- Consonants --

    #[test]
    fn consonant_contexts() {
        let water = chars("water");
        assert_eq!(consonant_context(Some(&water), 0), ConsonantContext::SyllableInitial);
        assert_eq!(consonant_context(Some(&water), 2), ConsonantContext::Intervocalic);
        assert_eq!(consonant_context(Some(&water), 4), ConsonantContext::SyllableFinal);
        let best = chars("best");
        assert_eq!(consonant_context(Some(&best), 2), ConsonantContext::BeforeConsonant);
        assert_eq!(consonant_context(None, 3), ConsonantContext::SyllableInitial);
    }

    #[test]
    fn consonant_without_rule_is_kept() {
        let syllables = vec![chars("hello")];
        assert_eq!(transform_consonant_in_context('h', &syllables, 0, 0, Full), "h");
        assert_eq!(transform_consonant_in_context('l', &syllables, 0, 2, Full), "l");
    }

    #[test]
    fn consonant_without_context_rule_is_kept() {
        // p has no before-consonant rule.
        let syllables = vec![chars("apt")];
        assert_eq!(transform_consonant_in_context('p', &syllables, 0, 1, Full), "p");
    }

    #[test]
    fn consonant_rules_by_intensity() {
        let syllables = vec![chars("cat")];
        assert_eq!(transform_consonant_in_context('t', &syllables, 0, 2, Minimal), "t");
        assert_eq!(transform_consonant_in_context('t', &syllables, 0, 2, Moderate), "d");
        assert_eq!(transform_consonant_in_context('t', &syllables, 0, 2, Full), "");
        // Out-of-range syllable index falls back to syllable-initial.
        assert_eq!(transform_consonant_in_context('t', &syllables, 5, 2, Full), "d");
    }

    // -- Simple transform --

    #[test]
    fn simple_transform_by_intensity() {
        assert_eq!(simple_transform("It", Minimal), "it");
        assert_eq!(simple_transform("it", Moderate), "it");
        assert_eq!(simple_transform("it", Full), "ahd");
        assert_eq!(simple_transform("me", Full), "meh");
        assert_eq!(simple_transform("the", Full), "theh");
        assert_eq!(simple_transform("tea", Moderate), "teh");
    }

    #[test]
    fn lookahead_respects_blockers() {
        assert_eq!(replace_unless_followed_by("io", 'i', &['a', 'e', 'o', 'u'], "ah"), "io");
        assert_eq!(replace_unless_followed_by("thin", 't', &['h'], "d"), "thin");
        assert_eq!(replace_unless_followed_by("tat", 't', &['h'], "d"), "dad");
    }
}
