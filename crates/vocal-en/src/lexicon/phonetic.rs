// Phonetic rule tables used by the normalizer and the transform engine.
//
// Table order is significant wherever matching is first-match (morphemes,
// initial clusters) or sequential (phonetic and silent patterns).

use vocal_core::enums::{ConsonantContext, VowelContext};
use vocal_core::intensity::Transforms;

use ConsonantContext::{BeforeConsonant, Intervocalic, SyllableFinal, SyllableInitial};

const fn t(minimal: &'static str, moderate: &'static str, full: &'static str) -> Transforms {
    Transforms::new(minimal, moderate, full)
}

// ---------------------------------------------------------------------------
// Vowels
// ---------------------------------------------------------------------------

/// Phoneme symbol (or context key) -> respelling per bucket.
///
/// Keys of the form `<vowel>_<context>` are consulted by the engine for
/// single vowels in a matching spelling context before the plain letter.
pub(crate) const VOWEL_PHONEMES: &[(&str, Transforms)] = &[
    ("i", t("i", "ih", "eh")),
    ("\u{026A}", t("i", "ih", "eh")), // ɪ
    ("e", t("e", "eh", "eh")),
    ("\u{025B}", t("eh", "eh", "ah")), // ɛ
    ("\u{00E6}", t("a", "ah", "ah")),  // æ
    ("a_akes", t("a", "ae", "ah")),
    ("a_ates", t("a", "ae", "ah")),
    ("o_otes", t("o", "oh", "ah")),
    ("o_okes", t("o", "oh", "ah")),
    ("\u{0259}", t("uh", "ah", "ah")), // ə
    ("\u{028C}", t("uh", "ah", "ah")), // ʌ
    ("\u{0251}", t("ah", "ah", "ah")), // ɑ
    ("\u{0254}", t("aw", "oh", "ah")), // ɔ
    ("y", t("y", "eh", "e")),
    ("o", t("o", "oh", "ah")),
    ("o_cvce", t("o", "oh", "ah")),
    ("\u{028A}", t("oo", "uh", "ah")), // ʊ
    ("u", t("oo", "oh", "ah")),
    ("a\u{026A}", t("ai", "ah", "ah")), // aɪ
    ("a\u{028A}", t("ow", "ah", "ah")), // aʊ
    ("\u{0254}\u{026A}", t("oy", "oh", "ah")), // ɔɪ
    ("e\u{026A}", t("ay", "eh", "ae")), // eɪ
    ("o\u{028A}", t("oh", "oh", "ah")), // oʊ
];

/// Vowel spelling -> (phoneme symbol, descriptive tag).
pub(crate) const VOWEL_PATTERNS: &[(&str, &str, VowelContext)] = &[
    ("ee", "i", VowelContext::LongE),
    ("ea", "i", VowelContext::LongE),
    ("ie", "i", VowelContext::LongE),
    ("oo", "u", VowelContext::LongU),
    ("ou", "a\u{028A}", VowelContext::Diphthong),
    ("ow", "a\u{028A}", VowelContext::Diphthong),
    ("ai", "e\u{026A}", VowelContext::Diphthong),
    ("ay", "e\u{026A}", VowelContext::Diphthong),
    ("ey", "e\u{026A}", VowelContext::Diphthong),
    ("oi", "\u{0254}\u{026A}", VowelContext::Diphthong),
    ("oy", "\u{0254}\u{026A}", VowelContext::Diphthong),
    ("au", "\u{0254}", VowelContext::LongO),
    ("aw", "\u{0254}", VowelContext::LongO),
];

/// Fallback respelling for bare vowels at bucket 4 and above.
pub(crate) const SIMPLE_VOWEL_FALLBACK: &[(char, &str)] =
    &[('a', "ah"), ('e', "eh"), ('i', "ae"), ('o', "oh"), ('u', "ah")];

// ---------------------------------------------------------------------------
// Consonants
// ---------------------------------------------------------------------------

/// Consonant letter -> context -> respelling. Missing contexts leave the
/// letter unchanged.
pub(crate) const CONSONANT_RULES: &[(char, &[(ConsonantContext, Transforms)])] = &[
    (
        't',
        &[
            (SyllableInitial, t("t", "t", "d")),
            (Intervocalic, t("t", "d", "d")),
            (SyllableFinal, t("t", "d", "")),
            (BeforeConsonant, t("t", "d", "d")),
        ],
    ),
    (
        'k',
        &[
            (SyllableInitial, t("k", "g", "g")),
            (Intervocalic, t("k", "g", "g")),
            (SyllableFinal, t("k", "g", "g")),
            (BeforeConsonant, t("k", "g", "g")),
        ],
    ),
    (
        'p',
        &[
            (SyllableInitial, t("p", "b", "b")),
            (Intervocalic, t("p", "b", "b")),
            (SyllableFinal, t("p", "b", "b")),
        ],
    ),
    (
        'f',
        &[
            (SyllableInitial, t("f", "v", "v")),
            (Intervocalic, t("f", "v", "v")),
            (SyllableFinal, t("f", "v", "v")),
        ],
    ),
    (
        's',
        &[
            (SyllableInitial, t("s", "s", "z")),
            (Intervocalic, t("s", "z", "z")),
            (SyllableFinal, t("s", "z", "z")),
            (BeforeConsonant, t("s", "s", "z")),
        ],
    ),
    (
        'g',
        &[
            (SyllableInitial, t("g", "g", "g")),
            (Intervocalic, t("g", "g", "g")),
            (SyllableFinal, t("g", "g", "g")),
        ],
    ),
    (
        'b',
        &[
            (SyllableInitial, t("b", "b", "b")),
            (Intervocalic, t("b", "b", "b")),
            (SyllableFinal, t("b", "b", "b")),
        ],
    ),
    (
        'd',
        &[
            (SyllableInitial, t("d", "d", "d")),
            (Intervocalic, t("d", "d", "d")),
            (SyllableFinal, t("d", "d", "")),
        ],
    ),
    (
        'j',
        &[
            (SyllableInitial, t("j", "j", "zh")),
            (Intervocalic, t("j", "zh", "zh")),
            (SyllableFinal, t("j", "zh", "zh")),
        ],
    ),
    (
        'v',
        &[
            (SyllableInitial, t("v", "v", "v")),
            (Intervocalic, t("v", "v", "v")),
            (SyllableFinal, t("v", "v", "v")),
        ],
    ),
    (
        'z',
        &[
            (SyllableInitial, t("z", "z", "z")),
            (Intervocalic, t("z", "z", "z")),
            (SyllableFinal, t("z", "z", "z")),
        ],
    ),
];

// ---------------------------------------------------------------------------
// Morphemes
// ---------------------------------------------------------------------------

/// Suffixes in match order. The first one that fits wins.
pub(crate) const SUFFIXES: &[(&str, Transforms)] = &[
    ("ing", t("ing", "eeng", "ahng")),
    ("ed", t("ed", "d", "d")),
    ("er", t("er", "uhr", "ahr")),
    ("est", t("est", "ehst", "ahst")),
    ("ly", t("ly", "leh", "leh")),
    ("tion", t("tion", "shun", "shahn")),
    ("sion", t("sion", "zhuhn", "zhahn")),
    ("ness", t("ness", "nehs", "nahs")),
    ("ment", t("ment", "mehnt", "mahnt")),
    ("ful", t("ful", "fool", "fahl")),
    ("less", t("less", "lehs", "lahs")),
    ("able", t("able", "uhbuhl", "ahbahl")),
    ("ible", t("ible", "uhbuhl", "ahbahl")),
    ("ies", t("ies", "aez", "ahz")),
    ("in'", t("in'", "ehn'", "ahn'")),
];

/// Prefixes in match order. The first one that fits wins.
pub(crate) const PREFIXES: &[(&str, Transforms)] = &[
    ("un", t("un", "uhn", "ahn")),
    ("re", t("re", "ree", "rae")),
    ("pre", t("pre", "pree", "brae")),
    ("dis", t("dis", "dihs", "dahs")),
    ("over", t("over", "oh-vuhr", "ah-vahr")),
    ("any", t("a-ny", "eh-neh", "ah-nah")),
];

// ---------------------------------------------------------------------------
// Normalizer patterns
// ---------------------------------------------------------------------------

/// Multi-letter spellings, applied globally in this order. A trailing `$`
/// anchors the pattern to the end of the morpheme.
pub(crate) const PHONETIC_PATTERNS: &[(&str, Transforms)] = &[
    ("ph", t("f", "f", "f")),
    ("gh", t("", "", "")),
    ("ch", t("ch", "ch", "ch")),
    ("th", t("th", "th", "d")),
    ("sh", t("sh", "sh", "zh")),
    ("wh", t("w", "w", "w")),
    ("ck", t("k", "k", "g")),
    ("dge", t("j", "j", "zh")),
    ("tch", t("ch", "ch", "ch")),
    ("nds", t("nds", "nz", "nz")),
    ("nts", t("nts", "ns", "ns")),
    ("lds", t("lds", "lz", "lz")),
    ("rds", t("rds", "rz", "rz")),
    ("mps", t("mps", "ms", "ms")),
    ("nks", t("nks", "ngs", "ngs")),
    ("sts", t("sts", "ss", "s")),
    ("sks", t("sks", "sks", "ss")),
    ("st$", t("st", "zt", "zd")),
    ("ill$", t("ill", "ehl", "ahl")),
    ("ll$", t("ll", "l", "w")),
    ("ss$", t("ss", "ss", "z")),
    ("ty$", t("ty", "tae", "teh")),
    ("ight$", t("ight", "aed", "nahd")),
    ("where$", t("where", "wehr", "wahr")),
];

/// Word-initial consonant clusters. Only the first match is applied.
///
/// The two-letter clusters come first, so "spr" and "str" respell the
/// same way through "sp" and "st", and "scr" loses its c ("zr").
pub(crate) const INITIAL_CLUSTERS: &[(&str, Transforms)] = &[
    ("sc", t("sc", "sc", "z")),
    ("sp", t("sp", "sp", "zb")),
    ("st", t("st", "st", "zd")),
    ("sw", t("sw", "sw", "zw")),
    ("sn", t("sn", "sn", "zn")),
    ("sl", t("sl", "sl", "zl")),
    ("sk", t("sk", "sk", "zg")),
    ("sm", t("sm", "sm", "zm")),
    ("spr", t("spr", "spr", "zbr")),
    ("str", t("str", "str", "zdr")),
    ("scr", t("scr", "scr", "zgr")),
];

/// Silent-letter spellings with fixed replacements, applied at every
/// intensity after the phonetic patterns.
pub(crate) const SILENT_PATTERNS: &[(&str, &str)] = &[
    ("mb$", "m"),
    ("ght", "t"),
    ("kn", "n"),
    ("wr", "r"),
    ("gn", "n"),
    ("bt$", "t"),
    ("sc", "s"),
    ("ps", "s"),
    ("rh", "r"),
];
