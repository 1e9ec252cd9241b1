// Intensity dial, intensity buckets and per-bucket transformation records
//
// The user-facing dial runs from 1 to 10. Rules only distinguish three
// buckets (1, 4, 8); there is no interpolation between them.

use std::fmt;
use std::str::FromStr;

/// Lowest accepted dial value.
pub const MIN_INTENSITY: u8 = 1;

/// Highest accepted dial value.
pub const MAX_INTENSITY: u8 = 10;

/// Dial value used when nothing else is configured.
pub const DEFAULT_INTENSITY: u8 = 5;

/// Error returned when a user-supplied intensity is not a dial value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntensityError {
    /// The value parsed but lies outside 1..=10.
    #[error("intensity {0} is out of range (1-10)")]
    OutOfRange(u8),

    /// The text is not a number.
    #[error("invalid intensity: {0:?}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// IntensityLevel
// ---------------------------------------------------------------------------

/// The three rule buckets. Discriminants are the bucket numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntensityLevel {
    /// Bucket 1: dial values up to 3.
    Minimal = 1,
    /// Bucket 4: dial values 4 through 7.
    Moderate = 4,
    /// Bucket 8: dial values 8 and above.
    Full = 8,
}

impl IntensityLevel {
    /// All buckets, lowest first.
    pub const ALL: [IntensityLevel; 3] = [Self::Minimal, Self::Moderate, Self::Full];

    /// Quantize a dial value. Total over `u8`: 0 maps to `Minimal`,
    /// anything above 10 to `Full`.
    pub fn from_intensity(intensity: u8) -> Self {
        match intensity {
            0..=3 => Self::Minimal,
            4..=7 => Self::Moderate,
            _ => Self::Full,
        }
    }

    /// The bucket number (1, 4 or 8).
    pub fn bucket(self) -> u8 {
        self as u8
    }

    /// A dial value inside this bucket, as shown in word breakdowns.
    pub fn representative(self) -> u8 {
        match self {
            Self::Minimal => 1,
            Self::Moderate => 5,
            Self::Full => 9,
        }
    }

    /// Human-readable bucket name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Moderate => "Moderate",
            Self::Full => "Full",
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Intensity (validated dial value)
// ---------------------------------------------------------------------------

/// A dial value checked to lie in 1..=10.
///
/// Translation functions accept any `u8` and quantize it; this type is for
/// configuration surfaces (CLI flags, environment, JS callers) that should
/// reject nonsense instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Intensity(u8);

impl Intensity {
    /// Validate a dial value.
    pub fn new(value: u8) -> Result<Self, IntensityError> {
        if (MIN_INTENSITY..=MAX_INTENSITY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(IntensityError::OutOfRange(value))
        }
    }

    /// The raw dial value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The bucket this dial value falls into.
    pub fn level(self) -> IntensityLevel {
        IntensityLevel::from_intensity(self.0)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(DEFAULT_INTENSITY)
    }
}

impl FromStr for Intensity {
    type Err = IntensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed
            .parse()
            .map_err(|_| IntensityError::Invalid(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

/// Replacement strings for one table entry, per bucket.
///
/// The bucket-1 value is mandatory; the other buckets fall back to it when
/// absent. An empty string is a real value and deletes the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transforms {
    pub minimal: &'static str,
    pub moderate: Option<&'static str>,
    pub full: Option<&'static str>,
}

impl Transforms {
    /// Entry with a value for every bucket.
    pub const fn new(minimal: &'static str, moderate: &'static str, full: &'static str) -> Self {
        Self {
            minimal,
            moderate: Some(moderate),
            full: Some(full),
        }
    }

    /// Replacement for `level`, falling back to the bucket-1 value.
    pub fn resolve(&self, level: IntensityLevel) -> &'static str {
        match level {
            IntensityLevel::Minimal => self.minimal,
            IntensityLevel::Moderate => self.moderate.unwrap_or(self.minimal),
            IntensityLevel::Full => self.full.unwrap_or(self.minimal),
        }
    }
}
