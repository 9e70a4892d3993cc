//! Transliteration result record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Script;

/// Outcome of one transliteration request
///
/// Created per call and handed to the caller, who may store or discard it.
/// A `detected_script` of `None` means no supported script was found and
/// `transliterated_text` equals `original_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransliterationResult {
    /// Text as supplied by the caller
    pub original_text: String,
    /// Script the text was read as (None = detection failed)
    pub detected_script: Option<Script>,
    /// Text rendered in the target script
    pub transliterated_text: String,
    /// Script requested by the caller
    pub target_script: Script,
    /// Share of the text converted (0.0 - 1.0); 0.0 when nothing was read
    /// as the detected script
    #[serde(default)]
    pub confidence: f32,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Reference to the captured image, if the caller tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

impl TransliterationResult {
    pub fn new(
        original_text: impl Into<String>,
        detected_script: Option<Script>,
        transliterated_text: impl Into<String>,
        target_script: Script,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            detected_script,
            transliterated_text: transliterated_text.into(),
            target_script,
            confidence: 0.0,
            timestamp: Utc::now(),
            image_uri: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    /// Whether a supported script was found in the original text
    pub fn was_detected(&self) -> bool {
        self.detected_script.is_some()
    }

    /// Whether the output is the input unchanged
    pub fn is_identity(&self) -> bool {
        self.original_text == self.transliterated_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamped() {
        let result =
            TransliterationResult::new("राम", Some(Script::Devanagari), "ராம", Script::Tamil);
        assert_eq!(result.clone().with_confidence(1.7).confidence, 1.0);
        assert_eq!(result.clone().with_confidence(-0.2).confidence, 0.0);
        assert_eq!(result.with_confidence(f32::NAN).confidence, 0.0);
    }

    #[test]
    fn test_detection_flags() {
        let result = TransliterationResult::new("12:30pm", None, "12:30pm", Script::Tamil);
        assert!(!result.was_detected());
        assert!(result.is_identity());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result =
            TransliterationResult::new("राम", Some(Script::Devanagari), "ராம", Script::Tamil)
                .with_confidence(0.5)
                .with_image_uri("content://captures/42");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"detected_script\":\"devanagari\""));
        assert!(json.contains("\"target_script\":\"tamil\""));

        let parsed: TransliterationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_image_uri_omitted_when_absent() {
        let result = TransliterationResult::new("a", None, "a", Script::Bengali);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("image_uri"));
    }
}
