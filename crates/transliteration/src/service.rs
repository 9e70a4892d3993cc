//! Request-level entry point
//!
//! Wraps the engine with the caller-facing contract: detect the source when
//! the caller has not, convert, and hand back a [`TransliterationResult`].
//! Keeps no history; storing results is up to the caller.

use std::sync::Arc;

use streetlight_config::TransliterationConfig;
use streetlight_core::{NoopTransliterator, Script, TransliterationResult, Transliterator};

use crate::engine::TransliterationEngine;

/// Create transliterator based on config
pub fn create_transliterator(config: &TransliterationConfig) -> Arc<dyn Transliterator> {
    if config.enabled {
        tracing::debug!(fallback = ?config.fallback, "Using phonetic transliterator");
        Arc::new(TransliterationEngine::with_fallback(config.fallback))
    } else {
        tracing::info!("Transliteration disabled, using pass-through");
        Arc::new(NoopTransliterator::new())
    }
}

/// Builds [`TransliterationResult`]s for callers
#[derive(Debug, Clone)]
pub struct TransliterationService {
    /// None when disabled in configuration
    engine: Option<TransliterationEngine>,
    default_target: Script,
}

impl TransliterationService {
    pub fn new(config: &TransliterationConfig) -> Self {
        Self {
            engine: config
                .enabled
                .then(|| TransliterationEngine::with_fallback(config.fallback)),
            default_target: config.default_target,
        }
    }

    pub fn default_target(&self) -> Script {
        self.default_target
    }

    pub fn is_enabled(&self) -> bool {
        self.engine.is_some()
    }

    /// Detect the script of `text`
    pub fn detect_script(&self, text: &str) -> Option<Script> {
        Script::detect(text)
    }

    /// Convert `text` to `target`
    ///
    /// `detected` is the source script if the caller already knows it.
    /// Confidence is the share of clusters converted: 1.0 when the text is
    /// already in `target`, 0.0 when no script was recognised or the
    /// service is disabled.
    pub fn transliterate(
        &self,
        text: &str,
        target: Script,
        detected: Option<Script>,
    ) -> TransliterationResult {
        let Some(engine) = &self.engine else {
            let detected = detected.or_else(|| Script::detect(text));
            return TransliterationResult::new(text, detected, text, target);
        };

        let outcome = engine.transliterate_detailed(text, target, detected);

        if !outcome.unmapped.is_empty() {
            let clusters: Vec<&str> = outcome.unmapped.iter().map(|u| u.text.as_str()).collect();
            tracing::warn!(
                source_script = ?outcome.source,
                target_script = %target,
                unmapped = ?clusters,
                "Clusters left untransliterated"
            );
        }

        tracing::debug!(
            chars = text.chars().count(),
            source_script = ?outcome.source,
            target_script = %target,
            coverage = outcome.coverage,
            "Transliteration request"
        );

        TransliterationResult::new(text, outcome.source, outcome.text, target)
            .with_confidence(outcome.coverage)
    }

    /// Convert `text` to the configured default target
    pub fn transliterate_to_default(&self, text: &str) -> TransliterationResult {
        self.transliterate(text, self.default_target, None)
    }
}

impl Default for TransliterationService {
    fn default() -> Self {
        Self::new(&TransliterationConfig::default())
    }
}
