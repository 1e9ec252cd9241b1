// Word and lyrics translation
//
// `VocalTranslator` is the public entry point. It owns a syllable splitter
// (inside the transform engine), a morphology analyzer and the options.
// Translation never fails: every public method returns a plain value.

use tracing::debug;
use vocal_core::analysis::{MorphologyAnalysis, SyllableResult};
use vocal_core::intensity::{Intensity, IntensityLevel, Transforms};

use crate::lexicon;
use crate::morphology::{AffixAnalyzer, MorphologyAnalyzer};
use crate::syllables::{EnglishSyllableSplitter, Syllabifier};
use crate::tokenizer::{normalize_contractions, tokenize};
use crate::transform::{TransformEngine, TransformOptions, simple_transform};

/// Words this short skip morphology and the engine.
const SHORT_WORD_LEN: usize = 2;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for a [`VocalTranslator`].
#[derive(Debug, Clone, Copy)]
pub struct TranslatorOptions {
    /// Intensity used by [`VocalTranslator::translate`].
    pub default_intensity: Intensity,
    /// Consult the whole-word exception dictionary first.
    pub use_exception_dictionary: bool,
    /// Join syllables with '-' at the highest bucket.
    pub hyphenate_syllables: bool,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            default_intensity: Intensity::default(),
            use_exception_dictionary: true,
            hyphenate_syllables: true,
        }
    }
}

/// One word shown at each bucket's representative intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBreakdown {
    pub word: String,
    pub syllables: Vec<String>,
    pub morphology: MorphologyAnalysis,
    /// One entry per bucket, lowest first.
    pub translations: Vec<(IntensityLevel, String)>,
}

// ---------------------------------------------------------------------------
// VocalTranslator
// ---------------------------------------------------------------------------

/// English lyrics translator for vocal technique practice.
pub struct VocalTranslator<
    S: Syllabifier = EnglishSyllableSplitter,
    M: MorphologyAnalyzer = AffixAnalyzer,
> {
    engine: TransformEngine<S>,
    analyzer: M,
    options: TranslatorOptions,
}

impl VocalTranslator {
    /// Create a translator with the built-in English splitter and analyzer.
    pub fn new(options: TranslatorOptions) -> Self {
        Self::from_parts(EnglishSyllableSplitter, AffixAnalyzer, options)
    }
}

impl Default for VocalTranslator {
    fn default() -> Self {
        Self::new(TranslatorOptions::default())
    }
}

impl<S: Syllabifier, M: MorphologyAnalyzer> VocalTranslator<S, M> {
    /// Create a translator from explicit components.
    pub fn from_parts(splitter: S, analyzer: M, options: TranslatorOptions) -> Self {
        let engine = TransformEngine::new(
            splitter,
            TransformOptions {
                hyphenate_syllables: options.hyphenate_syllables,
            },
        );
        Self {
            engine,
            analyzer,
            options,
        }
    }

    pub fn options(&self) -> TranslatorOptions {
        self.options
    }

    pub fn set_default_intensity(&mut self, intensity: Intensity) {
        self.options.default_intensity = intensity;
    }

    pub fn set_use_exception_dictionary(&mut self, value: bool) {
        self.options.use_exception_dictionary = value;
    }

    pub fn set_hyphenate_syllables(&mut self, value: bool) {
        self.options.hyphenate_syllables = value;
        self.engine.set_hyphenate_syllables(value);
    }

    // -- Translation --

    /// Translate one word. The result is uppercase, except that empty,
    /// whitespace-only or punctuation-only input is returned unchanged.
    /// Any dial value is accepted and quantized to its bucket.
    pub fn translate_word(&self, word: &str, intensity: u8) -> String {
        self.translate_word_at(word, IntensityLevel::from_intensity(intensity))
    }

    /// Translate one word for a bucket.
    ///
    /// Punctuation around the word is dropped first and not put back.
    /// Input with nothing left after that is returned unchanged.
    pub fn translate_word_at(&self, word: &str, level: IntensityLevel) -> String {
        if word.trim().is_empty() {
            return word.to_string();
        }
        let cleaned = clean_word(word);
        if cleaned.is_empty() {
            return word.to_string();
        }

        let lower = cleaned.to_lowercase();
        if self.options.use_exception_dictionary {
            if let Some(transforms) = lexicon::exception_word(&lower) {
                return transforms.resolve(level).to_uppercase();
            }
        }

        if cleaned.chars().count() <= SHORT_WORD_LEN {
            return simple_transform(cleaned, level).to_uppercase();
        }

        let analysis = self.analyzer.analyze(cleaned);
        debug!(
            word = cleaned,
            prefix = %analysis.prefix,
            root = %analysis.root,
            suffix = %analysis.suffix,
            "morphology"
        );

        let mut result = self.transform_affix(&analysis.prefix, lexicon::prefix_transforms, level);
        result.push_str(&self.engine.transform_morpheme(&analysis.root, level));
        result.push_str(&self.transform_affix(&analysis.suffix, lexicon::suffix_transforms, level));

        if result.is_empty() {
            return cleaned.to_uppercase();
        }
        result.to_uppercase()
    }

    /// Affixes use their table entry when there is one, else the engine.
    fn transform_affix(
        &self,
        affix: &str,
        lookup: fn(&str) -> Option<&'static Transforms>,
        level: IntensityLevel,
    ) -> String {
        if affix.is_empty() {
            return String::new();
        }
        match lookup(&affix.to_lowercase()) {
            Some(transforms) => transforms.resolve(level).to_string(),
            None => self.engine.transform_morpheme(affix, level),
        }
    }

    /// Translate multi-line lyrics. Line breaks are kept; whitespace-only
    /// lines come back empty; separators are copied through.
    pub fn translate_lyrics(&self, lyrics: &str, intensity: u8) -> String {
        let level = IntensityLevel::from_intensity(intensity);
        lyrics
            .split('\n')
            .map(|line| self.translate_line(line, level))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Translate lyrics at the configured default intensity.
    pub fn translate(&self, lyrics: &str) -> String {
        self.translate_lyrics(lyrics, self.options.default_intensity.value())
    }

    fn translate_line(&self, line: &str, level: IntensityLevel) -> String {
        if line.trim().is_empty() {
            return String::new();
        }
        tokenize(&normalize_contractions(line))
            .into_iter()
            .map(|token| {
                if token.is_word() {
                    self.translate_word_at(&token.text, level)
                } else {
                    token.text
                }
            })
            .collect()
    }

    // -- Analysis --

    /// Syllables of a word, case preserved.
    pub fn syllabify(&self, word: &str) -> Vec<String> {
        self.split_syllables(word).syllables
    }

    /// Syllables of a word with their boundary offsets.
    pub fn split_syllables(&self, word: &str) -> SyllableResult {
        self.engine.splitter().split(word)
    }

    pub fn analyze_morphology(&self, word: &str) -> MorphologyAnalysis {
        self.analyzer.analyze(word)
    }

    /// Syllables, morphology and the translation at each bucket.
    pub fn word_breakdown(&self, word: &str) -> WordBreakdown {
        let translations = IntensityLevel::ALL
            .iter()
            .map(|&level| (level, self.translate_word(word, level.representative())))
            .collect();
        WordBreakdown {
            word: word.to_string(),
            syllables: self.syllabify(word),
            morphology: self.analyze_morphology(word),
            translations,
        }
    }
}

// ---------------------------------------------------------------------------
// Punctuation cleanup
// ---------------------------------------------------------------------------

/// Letters, digits and '_'.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// The singable part of a word, punctuation dropped.
///
/// Leading non-name characters go first. Trailing ones go next when what
/// remains is names and apostrophes only, so "singin'" loses its g-drop
/// apostrophe while "rock-n-roll!" keeps everything after the first step.
/// A single trailing apostrophe left after that is dropped unless the word
/// holds another one. May return an empty string.
fn clean_word(word: &str) -> &str {
    let mut cleaned = word.trim_start_matches(|c: char| !is_name_char(c));

    let body = cleaned.trim_end_matches(|c: char| !is_name_char(c));
    if !body.is_empty() && body.chars().all(|c| is_name_char(c) || c == '\'') {
        cleaned = body;
    }

    if let Some(stem) = cleaned.strip_suffix('\'') {
        if !stem.is_empty() && !stem.contains('\'') {
            cleaned = stem;
        }
    }
    cleaned
}
