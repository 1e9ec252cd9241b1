// Lyric line preparation: contraction normalization and tokenization
//
// A line is cut into word tokens (runs of ASCII letters, digits, '_',
// apostrophes and hyphens) and separator tokens (whitespace runs and
// single punctuation characters). Concatenating the tokens gives the
// line back.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use vocal_core::token::LyricToken;

use crate::phonetics::compile_all;

/// Contractions rewritten before tokenization, case-insensitive, in
/// this order. The apostrophe is dropped so the word is sung as one unit.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("(?i)you'll", "youll"),
    ("(?i)we'll", "well"),
    ("(?i)i'll", "ill"),
    ("(?i)can't", "cant"),
    ("(?i)won't", "wont"),
    ("(?i)don't", "dont"),
    ("(?i)didn't", "didnt"),
    ("(?i)wouldn't", "wouldnt"),
    ("(?i)couldn't", "couldnt"),
    ("(?i)shouldn't", "shouldnt"),
    ("(?i)must've", "mustve"),
    ("(?i)would've", "wouldve"),
    ("(?i)could've", "couldve"),
    ("(?i)should've", "shouldve"),
];

static CONTRACTION_RULES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_all(CONTRACTIONS));

/// Rewrite known contractions in a line.
pub fn normalize_contractions(line: &str) -> String {
    let mut normalized = line.to_string();
    for (regex, replacement) in CONTRACTION_RULES.iter() {
        normalized = regex
            .replace_all(&normalized, NoExpand(replacement))
            .into_owned();
    }
    normalized
}

/// Characters that may appear inside a word token.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '-')
}

/// Split a line into word and separator tokens.
pub fn tokenize(line: &str) -> Vec<LyricToken> {
    let mut tokens = Vec::new();
    let mut rest = line;

    while let Some(first) = rest.chars().next() {
        let end = if is_word_char(first) {
            rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len())
        } else if first.is_whitespace() {
            rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len())
        } else {
            first.len_utf8()
        };

        let (text, tail) = rest.split_at(end);
        if is_word_char(first) {
            tokens.push(LyricToken::word(text));
        } else {
            tokens.push(LyricToken::separator(text));
        }
        rest = tail;
    }

    tokens
}
