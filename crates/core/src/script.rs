//! The eight supported Indian scripts
//!
//! Each script owns one Unicode block. Detection is a scan over code points:
//! the first code point that falls inside any of the eight blocks decides the
//! script. Mixed-script text is therefore classified by whichever script
//! appears first, not by majority.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Error, Language};

/// Indian scripts supported for detection and transliteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Devanagari,
    Tamil,
    Bengali,
    Telugu,
    Kannada,
    Malayalam,
    Gurmukhi,
    Gujarati,
}

impl Script {
    /// ISO 15924 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Devanagari => "Deva",
            Self::Tamil => "Taml",
            Self::Bengali => "Beng",
            Self::Telugu => "Telu",
            Self::Kannada => "Knda",
            Self::Malayalam => "Mlym",
            Self::Gurmukhi => "Guru",
            Self::Gujarati => "Gujr",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Devanagari => "Devanagari",
            Self::Tamil => "Tamil",
            Self::Bengali => "Bengali",
            Self::Telugu => "Telugu",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Gurmukhi => "Gurmukhi",
            Self::Gujarati => "Gujarati",
        }
    }

    /// Name of the script written in the script itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Devanagari => "देवनागरी",
            Self::Tamil => "தமிழ்",
            Self::Bengali => "বাংলা",
            Self::Telugu => "తెలుగు",
            Self::Kannada => "ಕನ್ನಡ",
            Self::Malayalam => "മലയാളം",
            Self::Gurmukhi => "ਗੁਰਮੁਖੀ",
            Self::Gujarati => "ગુજરાતી",
        }
    }

    /// Languages conventionally written in this script
    pub fn languages(&self) -> &'static [Language] {
        match self {
            Self::Devanagari => &[
                Language::Hindi,
                Language::Marathi,
                Language::Sanskrit,
                Language::Nepali,
            ],
            Self::Tamil => &[Language::Tamil],
            Self::Bengali => &[Language::Bengali, Language::Assamese],
            Self::Telugu => &[Language::Telugu],
            Self::Kannada => &[Language::Kannada],
            Self::Malayalam => &[Language::Malayalam],
            Self::Gurmukhi => &[Language::Punjabi],
            Self::Gujarati => &[Language::Gujarati],
        }
    }

    /// Unicode block for this script (inclusive)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Devanagari => (0x0900, 0x097F),
            Self::Bengali => (0x0980, 0x09FF),
            Self::Gurmukhi => (0x0A00, 0x0A7F),
            Self::Gujarati => (0x0A80, 0x0AFF),
            Self::Tamil => (0x0B80, 0x0BFF),
            Self::Telugu => (0x0C00, 0x0C7F),
            Self::Kannada => (0x0C80, 0x0CFF),
            Self::Malayalam => (0x0D00, 0x0D7F),
        }
    }

    /// Check if a character belongs to this script's block
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// Script whose block contains `c`, if any
    pub fn of_char(c: char) -> Option<Self> {
        Self::all().iter().copied().find(|script| script.contains_char(c))
    }

    /// Detect the script of `text`
    ///
    /// Returns the script of the first code point that falls inside one of
    /// the supported blocks. Text without any such code point (including
    /// empty text) yields `None`.
    pub fn detect(text: &str) -> Option<Self> {
        text.chars().find_map(Self::of_char)
    }

    /// Look up a script by its ISO 15924 code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .iter()
            .copied()
            .find(|script| script.code().eq_ignore_ascii_case(code))
    }

    /// Parse from a code, a script name, or the name of a language written in it
    pub fn from_str_loose(s: &str) -> Option<Self> {
        if let Some(script) = Self::from_code(s) {
            return Some(script);
        }

        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "devanagari" | "nagari" => Some(Self::Devanagari),
            "tamil" => Some(Self::Tamil),
            "bengali" | "bangla" => Some(Self::Bengali),
            "telugu" => Some(Self::Telugu),
            "kannada" => Some(Self::Kannada),
            "malayalam" => Some(Self::Malayalam),
            "gurmukhi" => Some(Self::Gurmukhi),
            "gujarati" => Some(Self::Gujarati),
            _ => Language::from_str_loose(&lowered).map(|language| language.script()),
        }
    }

    /// Get all supported scripts
    pub fn all() -> &'static [Script] {
        &[
            Self::Devanagari,
            Self::Tamil,
            Self::Bengali,
            Self::Telugu,
            Self::Kannada,
            Self::Malayalam,
            Self::Gurmukhi,
            Self::Gujarati,
        ]
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Script {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| Error::UnknownScript(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_metadata() {
        assert_eq!(Script::Devanagari.code(), "Deva");
        assert_eq!(Script::Gurmukhi.code(), "Guru");
        assert_eq!(Script::Tamil.native_name(), "தமிழ்");
        assert_eq!(Script::Bengali.to_string(), "Bengali");
    }

    #[test]
    fn test_ranges_are_disjoint() {
        let all = Script::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                let (a_start, a_end) = a.unicode_range();
                let (b_start, b_end) = b.unicode_range();
                assert!(a_end < b_start || b_end < a_start, "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn test_script_detect() {
        assert_eq!(Script::detect("नमस्ते"), Some(Script::Devanagari));
        assert_eq!(Script::detect("வணக்கம்"), Some(Script::Tamil));
        assert_eq!(Script::detect("নমস্কার"), Some(Script::Bengali));
        assert_eq!(Script::detect("నమస్కారం"), Some(Script::Telugu));
        assert_eq!(Script::detect("ನಮಸ್ಕಾರ"), Some(Script::Kannada));
        assert_eq!(Script::detect("നമസ്കാരം"), Some(Script::Malayalam));
        assert_eq!(Script::detect("ਸਤ ਸ੍ਰੀ ਅਕਾਲ"), Some(Script::Gurmukhi));
        assert_eq!(Script::detect("નમસ્તે"), Some(Script::Gujarati));
    }

    #[test]
    fn test_detect_without_script_characters() {
        assert_eq!(Script::detect(""), None);
        assert_eq!(Script::detect("12:30pm"), None);
        assert_eq!(Script::detect("STOP!"), None);
    }

    #[test]
    fn test_detect_first_match_wins() {
        // Tamil appears first, Devanagari is the majority
        assert_eq!(Script::detect("க नमस्ते नमस्ते"), Some(Script::Tamil));
        // Latin prefix is skipped, not counted
        assert_eq!(Script::detect("STOP रुकिए"), Some(Script::Devanagari));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Script::from_code("Deva"), Some(Script::Devanagari));
        assert_eq!(Script::from_code("mlym"), Some(Script::Malayalam));
        assert_eq!(Script::from_code("Orya"), None);
    }

    #[test]
    fn test_from_str_loose() {
        assert_eq!(Script::from_str_loose("tamil"), Some(Script::Tamil));
        assert_eq!(Script::from_str_loose("hindi"), Some(Script::Devanagari));
        assert_eq!(Script::from_str_loose("punjabi"), Some(Script::Gurmukhi));
        assert_eq!(Script::from_str_loose("GUJR"), Some(Script::Gujarati));
        assert_eq!(Script::from_str_loose("latin"), None);
    }

    #[test]
    fn test_from_str_error() {
        assert_eq!("Knda".parse::<Script>(), Ok(Script::Kannada));
        assert_eq!(
            "klingon".parse::<Script>(),
            Err(Error::UnknownScript("klingon".to_string()))
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Script::Gurmukhi).unwrap();
        assert_eq!(json, "\"gurmukhi\"");
        let parsed: Script = serde_json::from_str("\"kannada\"").unwrap();
        assert_eq!(parsed, Script::Kannada);
    }
}
