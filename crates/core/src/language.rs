//! Languages written in the supported scripts
//!
//! Only languages whose conventional script is one of the eight supported
//! scripts are listed. A script may serve several languages (Devanagari is
//! shared by Hindi, Marathi, Sanskrit and Nepali).

use serde::{Deserialize, Serialize};

use crate::Script;

/// Languages conventionally written in a supported script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hindi,
    Marathi,
    Sanskrit,
    Nepali,
    Tamil,
    Bengali,
    Assamese,
    Telugu,
    Kannada,
    Malayalam,
    Punjabi,
    Gujarati,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::Marathi => "mr",
            Self::Sanskrit => "sa",
            Self::Nepali => "ne",
            Self::Tamil => "ta",
            Self::Bengali => "bn",
            Self::Assamese => "as",
            Self::Telugu => "te",
            Self::Kannada => "kn",
            Self::Malayalam => "ml",
            Self::Punjabi => "pa",
            Self::Gujarati => "gu",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hindi => "Hindi",
            Self::Marathi => "Marathi",
            Self::Sanskrit => "Sanskrit",
            Self::Nepali => "Nepali",
            Self::Tamil => "Tamil",
            Self::Bengali => "Bengali",
            Self::Assamese => "Assamese",
            Self::Telugu => "Telugu",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Punjabi => "Punjabi",
            Self::Gujarati => "Gujarati",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::Hindi | Self::Marathi | Self::Sanskrit | Self::Nepali => Script::Devanagari,
            Self::Tamil => Script::Tamil,
            Self::Bengali | Self::Assamese => Script::Bengali,
            Self::Telugu => Script::Telugu,
            Self::Kannada => Script::Kannada,
            Self::Malayalam => Script::Malayalam,
            Self::Punjabi => Script::Gurmukhi,
            Self::Gujarati => Script::Gujarati,
        }
    }

    /// Parse from string (case-insensitive code or name)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            "mr" | "mar" | "marathi" => Some(Self::Marathi),
            "sa" | "san" | "sanskrit" => Some(Self::Sanskrit),
            "ne" | "nep" | "nepali" => Some(Self::Nepali),
            "ta" | "tam" | "tamil" => Some(Self::Tamil),
            "bn" | "ben" | "bengali" | "bangla" => Some(Self::Bengali),
            "as" | "asm" | "assamese" => Some(Self::Assamese),
            "te" | "tel" | "telugu" => Some(Self::Telugu),
            "kn" | "kan" | "kannada" => Some(Self::Kannada),
            "ml" | "mal" | "malayalam" => Some(Self::Malayalam),
            "pa" | "pan" | "punjabi" | "panjabi" => Some(Self::Punjabi),
            "gu" | "guj" | "gujarati" => Some(Self::Gujarati),
            _ => None,
        }
    }

    /// Get all languages
    pub fn all() -> &'static [Language] {
        &[
            Self::Hindi,
            Self::Marathi,
            Self::Sanskrit,
            Self::Nepali,
            Self::Tamil,
            Self::Bengali,
            Self::Assamese,
            Self::Telugu,
            Self::Kannada,
            Self::Malayalam,
            Self::Punjabi,
            Self::Gujarati,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Punjabi.code(), "pa");
        assert_eq!(Language::Assamese.code(), "as");
    }

    #[test]
    fn test_language_script() {
        assert_eq!(Language::Marathi.script(), Script::Devanagari);
        assert_eq!(Language::Assamese.script(), Script::Bengali);
        assert_eq!(Language::Punjabi.script(), Script::Gurmukhi);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str_loose("hi"), Some(Language::Hindi));
        assert_eq!(Language::from_str_loose(" Tamil "), Some(Language::Tamil));
        assert_eq!(Language::from_str_loose("bangla"), Some(Language::Bengali));
        assert_eq!(Language::from_str_loose("english"), None);
    }

    #[test]
    fn test_every_language_listed_by_its_script() {
        for language in Language::all() {
            assert!(
                language.script().languages().contains(language),
                "{} missing from {} languages",
                language,
                language.script()
            );
        }
    }
}
