// WASM bindings for the vocal technique lyrics translator.
//
// Provides a `WasmVocalTranslator` class exported via wasm-bindgen that
// wraps `VocalTranslator` from vocal-en. Structured results (morphology,
// word breakdown) are serialized to JavaScript values using
// serde-wasm-bindgen. Intensities from JavaScript are validated to 1-10.
//
// Usage from JavaScript:
//
//   const translator = new WasmVocalTranslator();
//   translator.translateWord("hello", 5);        // => "HEHLLOH"
//   translator.translateLyrics("Hello\nWorld", 9);
//   translator.syllabify("computer");            // => ["co", "mput", "er"]
//   translator.analyzeMorphology("unhappy");     // => { prefix: "un", root: "happy", ... }
//   translator.wordBreakdown("hello");
//   // => { word, syllables, morphology, translations }
//   translator.intensityLevel(6);                // => 4

use serde::Serialize;
use wasm_bindgen::prelude::*;

use vocal_core::analysis::MorphologyAnalysis;
use vocal_core::intensity::{Intensity, IntensityError};
use vocal_en::translator::{TranslatorOptions, VocalTranslator, WordBreakdown};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a morphology analysis.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsMorphology {
    prefix: String,
    root: String,
    suffix: String,
    compound: bool,
}

impl From<MorphologyAnalysis> for JsMorphology {
    fn from(a: MorphologyAnalysis) -> Self {
        Self {
            prefix: a.prefix,
            root: a.root,
            suffix: a.suffix,
            compound: a.compound,
        }
    }
}

/// Serializable translation at one bucket.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLevelTranslation {
    level: String,
    bucket: u8,
    intensity: u8,
    translation: String,
}

/// Serializable representation of a word breakdown.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsWordBreakdown {
    word: String,
    syllables: Vec<String>,
    morphology: JsMorphology,
    translations: Vec<JsLevelTranslation>,
}

impl From<WordBreakdown> for JsWordBreakdown {
    fn from(b: WordBreakdown) -> Self {
        Self {
            word: b.word,
            syllables: b.syllables,
            morphology: b.morphology.into(),
            translations: b
                .translations
                .into_iter()
                .map(|(level, translation)| JsLevelTranslation {
                    level: level.label().to_string(),
                    bucket: level.bucket(),
                    intensity: level.representative(),
                    translation,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn intensity_error_to_js(e: IntensityError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmVocalTranslator
// ============================================================================

/// Vocal technique lyrics translator for WebAssembly.
#[wasm_bindgen]
pub struct WasmVocalTranslator {
    translator: VocalTranslator,
}

#[wasm_bindgen]
impl WasmVocalTranslator {
    /// Create a translator with default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmVocalTranslator {
        WasmVocalTranslator {
            translator: VocalTranslator::new(TranslatorOptions::default()),
        }
    }

    /// Translate a single word. `intensity` must be 1-10.
    #[wasm_bindgen(js_name = "translateWord")]
    pub fn translate_word(&self, word: &str, intensity: u8) -> Result<String, JsError> {
        let intensity = Intensity::new(intensity).map_err(intensity_error_to_js)?;
        Ok(self.translator.translate_word(word, intensity.value()))
    }

    /// Translate multi-line lyrics. `intensity` must be 1-10.
    #[wasm_bindgen(js_name = "translateLyrics")]
    pub fn translate_lyrics(&self, lyrics: &str, intensity: u8) -> Result<String, JsError> {
        let intensity = Intensity::new(intensity).map_err(intensity_error_to_js)?;
        Ok(self.translator.translate_lyrics(lyrics, intensity.value()))
    }

    /// Split a word into syllables.
    pub fn syllabify(&self, word: &str) -> Vec<String> {
        self.translator.syllabify(word)
    }

    /// Prefix/root/suffix analysis as `{ prefix, root, suffix, compound }`.
    #[wasm_bindgen(js_name = "analyzeMorphology")]
    pub fn analyze_morphology(&self, word: &str) -> Result<JsValue, JsError> {
        to_js(&JsMorphology::from(self.translator.analyze_morphology(word)))
    }

    /// Syllables, morphology and one translation per bucket.
    ///
    /// `translations` entries carry `level` ("Minimal", "Moderate",
    /// "Full"), `bucket`, the representative `intensity` and `translation`.
    #[wasm_bindgen(js_name = "wordBreakdown")]
    pub fn word_breakdown(&self, word: &str) -> Result<JsValue, JsError> {
        to_js(&JsWordBreakdown::from(self.translator.word_breakdown(word)))
    }

    /// Bucket number (1, 4 or 8) for a dial value 1-10.
    #[wasm_bindgen(js_name = "intensityLevel")]
    pub fn intensity_level(&self, intensity: u8) -> Result<u8, JsError> {
        Intensity::new(intensity)
            .map(|i| i.level().bucket())
            .map_err(intensity_error_to_js)
    }

    /// Set whether syllables are joined with '-' at intensity 8 and above.
    #[wasm_bindgen(js_name = "setHyphenateSyllables")]
    pub fn set_hyphenate_syllables(&mut self, value: bool) {
        self.translator.set_hyphenate_syllables(value);
    }

    /// Set whether the whole-word exception dictionary is consulted.
    #[wasm_bindgen(js_name = "setUseExceptionDictionary")]
    pub fn set_use_exception_dictionary(&mut self, value: bool) {
        self.translator.set_use_exception_dictionary(value);
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl Default for WasmVocalTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocal_core::intensity::IntensityLevel;

    #[test]
    fn morphology_dto() {
        let dto = JsMorphology::from(VocalTranslator::default().analyze_morphology("unhappy"));
        assert_eq!(
            dto,
            JsMorphology {
                prefix: "un".to_string(),
                root: "happy".to_string(),
                suffix: String::new(),
                compound: false,
            }
        );
    }

    #[test]
    fn breakdown_dto_lists_each_bucket() {
        let dto = JsWordBreakdown::from(VocalTranslator::default().word_breakdown("the"));
        let levels: Vec<(&str, u8, u8)> = dto
            .translations
            .iter()
            .map(|t| (t.level.as_str(), t.bucket, t.intensity))
            .collect();
        assert_eq!(
            levels,
            vec![("Minimal", 1, 1), ("Moderate", 4, 5), ("Full", 8, 9)]
        );
        assert_eq!(dto.translations[1].translation, "DHUH");
    }

    #[test]
    fn bucket_of_representative_intensities() {
        for level in IntensityLevel::ALL {
            let intensity = Intensity::new(level.representative()).unwrap();
            assert_eq!(intensity.level().bucket(), level.bucket());
        }
    }

    #[test]
    fn version_matches_package() {
        assert_eq!(WasmVocalTranslator::get_version(), env!("CARGO_PKG_VERSION"));
    }
}
