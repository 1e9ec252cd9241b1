// Analysis result types: morphology split and syllable split

// ---------------------------------------------------------------------------
// MorphologyAnalysis
// ---------------------------------------------------------------------------

/// A word split into an optional prefix, a root and an optional suffix.
///
/// Affixes keep the casing of the analyzed word. Absent affixes are empty
/// strings, so `prefix + root + suffix` always reproduces the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphologyAnalysis {
    pub prefix: String,
    pub root: String,
    pub suffix: String,
    /// Reserved for compound detection. Always false at present.
    pub compound: bool,
}

impl MorphologyAnalysis {
    /// Analysis of a word with no recognized affixes.
    pub fn root_only(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// SyllableResult
// ---------------------------------------------------------------------------

/// A word split into syllables.
///
/// `boundaries[i]` is the character offset at which syllable `i` ends; the
/// last syllable has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableResult {
    pub syllables: Vec<String>,
    pub boundaries: Vec<usize>,
}

impl SyllableResult {
    /// Build a result and derive the boundaries from the syllable lengths.
    pub fn from_syllables(syllables: Vec<String>) -> Self {
        let mut boundaries = Vec::with_capacity(syllables.len().saturating_sub(1));
        let mut offset = 0;
        if let Some((_, init)) = syllables.split_last() {
            for syllable in init {
                offset += syllable.chars().count();
                boundaries.push(offset);
            }
        }
        Self {
            syllables,
            boundaries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// Join the syllables with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.syllables.join(separator)
    }
}
