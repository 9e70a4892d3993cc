//! Transliteration configuration

use serde::{Deserialize, Deserializer, Serialize};
use streetlight_core::Script;

/// What to do when the target script has no letter for a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Substitute the nearest sound the target can write (ḻ → ḷ → l)
    #[default]
    Approximate,
    /// Leave the source cluster untouched
    Passthrough,
}

/// Transliteration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterationConfig {
    /// Disabled = every request returns its input unchanged
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Target script when the caller does not choose one
    #[serde(
        default = "default_target",
        deserialize_with = "deserialize_script_loose"
    )]
    pub default_target: Script,

    /// Handling of sounds missing from the target script
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

fn default_true() -> bool {
    true
}

fn default_target() -> Script {
    Script::Devanagari
}

impl Default for TransliterationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_target: default_target(),
            fallback: FallbackPolicy::default(),
        }
    }
}

/// Accepts ISO 15924 codes ("Taml"), script names and language names
fn deserialize_script_loose<'de, D>(deserializer: D) -> Result<Script, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Script::from_str_loose(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown script: {}", raw)))
}
