// vocal-core: shared types for the vocal technique translator.
//
// Intensity buckets and transformation records, character classes,
// case mapping, analysis results and lyric tokens. No language rules
// live here; see vocal-en for the English module.

pub mod analysis;
pub mod case;
pub mod character;
pub mod enums;
pub mod intensity;
pub mod token;
