// Lyric tokens

use crate::enums::TokenKind;

/// A piece of a lyric line. Concatenating the `text` of all tokens of a
/// line yields the line again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricToken {
    /// Whether this token is translated or copied through.
    pub kind: TokenKind,

    /// The text content of this token.
    pub text: String,
}

impl LyricToken {
    /// Create a word token.
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Word,
            text: text.into(),
        }
    }

    /// Create a separator token.
    pub fn separator(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Separator,
            text: text.into(),
        }
    }

    /// True for word tokens.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}
