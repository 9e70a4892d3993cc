//! Script-to-script transliteration through the phonetic intermediate

use serde::Serialize;
use streetlight_config::FallbackPolicy;
use streetlight_core::{Script, Transliterator};

use crate::render::render;
use crate::romanize;
use crate::segment::segment;
use crate::table::table;

/// Pipeline stage that gave up on a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// The source table has no reading for it
    Segment,
    /// The target script cannot write one of its sounds
    Render,
}

/// Source cluster copied to the output unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmappedCluster {
    pub text: String,
    /// Byte offset in the input
    pub offset: usize,
    pub stage: Stage,
}

impl UnmappedCluster {
    pub fn new(text: impl Into<String>, offset: usize, stage: Stage) -> Self {
        Self {
            text: text.into(),
            offset,
            stage,
        }
    }
}

/// Detailed outcome of one conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transliteration {
    pub text: String,
    /// Script the input was read as (None = nothing recognised)
    pub source: Option<Script>,
    pub unmapped: Vec<UnmappedCluster>,
    /// Share of source clusters written in the target script: 1.0 when
    /// `source` is already the target, 0.0 when no cluster was read
    pub coverage: f32,
}

impl Transliteration {
    fn unchanged(text: &str, source: Option<Script>, coverage: f32) -> Self {
        Self {
            text: text.to_string(),
            source,
            unmapped: Vec::new(),
            coverage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unmapped.is_empty()
    }
}

/// Table-driven transliterator
///
/// Holds no state besides its fallback policy; the mapping tables are
/// process-wide and immutable, so one engine can serve any number of
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransliterationEngine {
    fallback: FallbackPolicy,
}

impl TransliterationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(fallback: FallbackPolicy) -> Self {
        Self { fallback }
    }

    /// First supported script found in `text`
    pub fn detect_script(&self, text: &str) -> Option<Script> {
        Script::detect(text)
    }

    /// Render `text` in `target`, detecting the source when not given
    pub fn transliterate(&self, text: &str, target: Script, source: Option<Script>) -> String {
        self.transliterate_detailed(text, target, source).text
    }

    /// Like [`transliterate`](Self::transliterate), also reporting which
    /// clusters were copied through and how much of the text converted
    pub fn transliterate_detailed(
        &self,
        text: &str,
        target: Script,
        source: Option<Script>,
    ) -> Transliteration {
        let Some(source) = source.or_else(|| Script::detect(text)) else {
            tracing::debug!(target_script = %target, "No supported script found, returning input");
            return Transliteration::unchanged(text, None, 0.0);
        };

        if source == target {
            return Transliteration::unchanged(text, Some(source), 1.0);
        }

        let tokens = segment(text, table(source));
        let rendering = render(&tokens, table(target), self.fallback);

        // No clusters means nothing was read as `source`; the text is unchanged
        let total = rendering.rendered + rendering.unmapped.len();
        let coverage = if total == 0 {
            0.0
        } else {
            rendering.rendered as f32 / total as f32
        };

        tracing::debug!(
            source_script = %source,
            target_script = %target,
            clusters = total,
            unmapped = rendering.unmapped.len(),
            "Transliterated"
        );

        Transliteration {
            text: rendering.text,
            source: Some(source),
            unmapped: rendering.unmapped,
            coverage,
        }
    }

    /// ISO 15919 Latin spelling of `text` (the phonetic intermediate)
    pub fn romanize(&self, text: &str, source: Option<Script>) -> String {
        romanize::romanize(text, source)
    }
}

impl Transliterator for TransliterationEngine {
    fn detect_script(&self, text: &str) -> Option<Script> {
        TransliterationEngine::detect_script(self, text)
    }

    fn transliterate(&self, text: &str, target: Script, source: Option<Script>) -> String {
        TransliterationEngine::transliterate(self, text, target, source)
    }
}
