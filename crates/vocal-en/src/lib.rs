// vocal-en: English language module for the vocal technique translator.
//
// Pipeline per word: exception dictionary, morphology split, phonetic
// normalization, syllable split, intensity-graded per-character rules.
// `translator::VocalTranslator` ties the stages together.

pub mod lexicon;
pub mod morphology;
pub mod phonetics;
pub mod syllables;
pub mod tokenizer;
pub mod transform;
pub mod translator;
