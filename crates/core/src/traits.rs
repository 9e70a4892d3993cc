//! Transliteration interface
//!
//! Implementations:
//! - `PhoneticTransliterator` (streetlight-transliteration) - table-driven
//!   conversion through a phonetic intermediate
//! - `NoopTransliterator` - pass-through (disabled)
//!
//! # Example
//!
//! ```ignore
//! let transliterator: Arc<dyn Transliterator> = create_transliterator(&config);
//! let tamil = transliterator.transliterate("राम", Script::Tamil, None);
//! // "ராம"
//! ```

use crate::Script;

/// Converts text between supported scripts
///
/// Both operations are pure and infallible: text that cannot be converted
/// comes back unchanged.
pub trait Transliterator: Send + Sync + 'static {
    /// Detect the script of `text` (first supported code point wins)
    fn detect_script(&self, text: &str) -> Option<Script> {
        Script::detect(text)
    }

    /// Render `text` in `target`
    ///
    /// # Arguments
    /// * `text` - Text to convert
    /// * `target` - Script to render into
    /// * `source` - Script the text is written in; detected when `None`
    fn transliterate(&self, text: &str, target: Script, source: Option<Script>) -> String;

    /// Check if transliteration is enabled
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Pass-through transliterator
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransliterator;

impl NoopTransliterator {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for NoopTransliterator {
    fn transliterate(&self, text: &str, _target: Script, _source: Option<Script>) -> String {
        text.to_string()
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_passthrough() {
        let noop = NoopTransliterator::new();
        assert_eq!(noop.transliterate("राम", Script::Tamil, None), "राम");
        assert!(!noop.is_enabled());
    }

    #[test]
    fn test_default_detection() {
        let noop = NoopTransliterator::new();
        assert_eq!(noop.detect_script("ராம"), Some(Script::Tamil));
        assert_eq!(noop.detect_script("12:30pm"), None);
    }
}
