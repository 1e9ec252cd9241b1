// Syllable splitter tables: hand-tuned splits, compounds, prefixes,
// endings and vowel teams, consonant blends.

/// Hand-tuned splits for singing clarity. Keys are lowercase.
pub(crate) const SPLIT_EXCEPTIONS: &[(&str, &[&str])] = &[
    ("people", &["peo", "ple"]),
    ("create", &["cre", "ate"]),
    ("realize", &["re", "al", "ize"]),
    ("area", &["ar", "e", "a"]),
    ("idea", &["i", "de", "a"]),
    ("beautiful", &["beau", "ti", "ful"]),
    ("family", &["fam", "i", "ly"]),
    ("different", &["dif", "fer", "ent"]),
    ("every", &["ev", "ery"]),
    ("little", &["lit", "tle"]),
    ("business", &["bus", "i", "ness"]),
    ("interest", &["in", "ter", "est"]),
    ("experience", &["ex", "per", "i", "ence"]),
    ("remember", &["re", "mem", "ber"]),
    ("together", &["to", "geth", "er"]),
    ("important", &["im", "por", "tant"]),
    ("actually", &["ac", "tu", "al", "ly"]),
    ("especially", &["es", "pec", "ial", "ly"]),
    ("usually", &["u", "su", "al", "ly"]),
    ("finally", &["fi", "nal", "ly"]),
    // -- Music vocabulary --
    ("music", &["mu", "sic"]),
    ("melody", &["mel", "o", "dy"]),
    ("harmony", &["har", "mo", "ny"]),
    ("rhythm", &["rhyth", "m"]),
    ("vocal", &["vo", "cal"]),
    ("piano", &["pi", "an", "o"]),
    ("guitar", &["gui", "tar"]),
    // -- Contractions --
    ("you'll", &["you", "ll"]),
    ("we'll", &["we", "ll"]),
    ("they'll", &["they", "ll"]),
    ("i'll", &["i", "ll"]),
    ("don't", &["don", "t"]),
    ("won't", &["won", "t"]),
    ("can't", &["can", "t"]),
    ("couldn't", &["could", "n't"]),
    ("wouldn't", &["would", "n't"]),
    ("shouldn't", &["should", "n't"]),
    ("hasn't", &["has", "n't"]),
    ("haven't", &["have", "n't"]),
    ("wasn't", &["was", "n't"]),
    ("weren't", &["were", "n't"]),
    ("isn't", &["is", "n't"]),
    ("aren't", &["are", "n't"]),
    ("you're", &["you", "re"]),
    ("we're", &["we", "re"]),
    ("they're", &["they", "re"]),
    ("you've", &["you", "ve"]),
    ("we've", &["we", "ve"]),
    ("they've", &["they", "ve"]),
    ("i've", &["i", "ve"]),
    ("he's", &["he", "s"]),
    ("she's", &["she", "s"]),
    ("it's", &["it", "s"]),
    ("what's", &["what", "s"]),
    ("that's", &["that", "s"]),
    ("there's", &["there", "s"]),
    ("here's", &["here", "s"]),
];

/// Compounds with an obvious boundary.
pub(crate) const COMPOUNDS: &[[&str; 2]] = &[
    ["some", "thing"],
    ["every", "thing"],
    ["with", "out"],
    ["break", "fast"],
    ["sun", "shine"],
    ["rain", "bow"],
    ["birth", "day"],
    ["week", "end"],
];

/// Prefixes that form their own syllable, in match order.
pub(crate) const SYLLABLE_PREFIXES: &[&str] = &[
    "anti", "auto", "bio", "co", "de", "dis", "em", "en", "fore", "in", "im", "inter", "mid",
    "mis", "non", "over", "pre", "pro", "re", "semi", "sub", "super", "trans", "un", "under",
];

/// Endings that form their own syllable together with vowel teams that
/// must not be split, longest first. Both lookups share this list.
pub(crate) const SYLLABLE_PATTERNS: &[&str] = &[
    // 4 letters
    "tion", "sion", "ture", "sure", "ment", "ness", "less", "ious", "able", "ible", "ance", "ence",
    // 3 letters
    "ful", "ing", "est", "ity", "ous", "ant", "ent", "ive", "ize", "eau", "ieu",
    // 2 letters
    "ed", "er", "ly", "ty", "oi", "oy", "ou", "ow", "au", "aw", "oo", "ee", "ea", "ai", "ay", "oa",
    "oe", "ue", "ui", "ey",
];

/// Consonant pairs kept together at the start of a syllable.
pub(crate) const CONSONANT_BLENDS: &[&str] = &[
    "bl", "br", "ch", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "ph", "pl", "pr", "sc", "sh", "sk",
    "sl", "sm", "sn", "sp", "st", "sw", "th", "tr", "tw", "wh", "wr",
];
