// Shared enums: lyric token kinds, consonant contexts, vowel pattern tags

/// Kind of a lyric token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of word characters (letters, digits, underscore, apostrophe, hyphen).
    Word,
    /// Whitespace run or a single punctuation/other character.
    Separator,
}

/// Position class of a consonant inside its syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsonantContext {
    /// First character of the syllable. Also the fallback context.
    SyllableInitial,
    /// Between two vowels.
    Intervocalic,
    /// Last character of the syllable.
    SyllableFinal,
    /// Directly followed by a consonant.
    BeforeConsonant,
}

/// Descriptive tag carried by vowel spelling patterns. Not used for
/// rule selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelContext {
    LongE,
    LongU,
    LongO,
    Diphthong,
}
