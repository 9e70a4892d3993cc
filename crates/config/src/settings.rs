//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{ConfigError, TransliterationConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Prefix of environment variable overrides
const ENV_PREFIX: &str = "STREETLIGHT";

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Transliteration engine configuration
    #[serde(default)]
    pub transliteration: TransliterationConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_observability()?;

        if !self.transliteration.enabled {
            if self.environment.is_strict() {
                return Err(ConfigError::InvalidValue {
                    field: "transliteration.enabled".to_string(),
                    message: format!(
                        "Transliteration cannot be disabled in {:?}",
                        self.environment
                    ),
                });
            }
            tracing::warn!("Transliteration disabled, requests will pass through unchanged");
        }

        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Must be one of {}, got {}",
                    LOG_LEVELS.join(", "),
                    self.observability.log_level
                ),
            });
        }
        Ok(())
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from `config/` in the working directory
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings from `dir`
///
/// Reads `dir/default.*`, then `dir/{env}.*`, then `STREETLIGHT_*`
/// environment variables (nested keys joined with `__`, e.g.
/// `STREETLIGHT_TRANSLITERATION__DEFAULT_TARGET=Taml`). Missing files are
/// skipped.
pub fn load_settings_from(dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    load_layers(dir, env, ENV_PREFIX)
}

fn load_layers(dir: &Path, env: Option<&str>, env_prefix: &str) -> Result<Settings, ConfigError> {
    if !dir.is_dir() {
        tracing::debug!(
            dir = %dir.display(),
            "Config directory absent, using defaults and environment"
        );
    }

    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::from(dir.join("default")).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        validate_env_name(env_name)?;
        builder = builder.add_source(File::from(dir.join(env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}

/// Environment names select a file next to `default`, nothing else
fn validate_env_name(name: &str) -> Result<(), ConfigError> {
    let plain = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if plain {
        Ok(())
    } else {
        Err(ConfigError::Environment(format!(
            "invalid environment name {:?}",
            name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FallbackPolicy;
    use std::fs;
    use streetlight_core::Script;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
        assert_eq!(settings.transliteration.default_target, Script::Devanagari);
        assert_eq!(settings.observability.log_level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_log_level_validation() {
        let mut settings = Settings::default();
        settings.observability.log_level = "verbose".to_string();
        assert!(settings.validate().is_err());

        settings.observability.log_level = "DEBUG".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_disabled_rejected_in_production() {
        let mut settings = Settings::default();
        settings.transliteration.enabled = false;
        assert!(settings.validate().is_ok());

        settings.environment = RuntimeEnvironment::Production;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
[transliteration]
default_target = "Mlym"
fallback = "passthrough"

[observability]
log_json = true
"#,
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(settings.transliteration.default_target, Script::Malayalam);
        assert_eq!(settings.transliteration.fallback, FallbackPolicy::Passthrough);
        assert!(settings.observability.log_json);
        assert_eq!(settings.observability.log_level, "info");
    }

    #[test]
    fn test_environment_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[transliteration]\ndefault_target = \"Deva\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.yaml"),
            "transliteration:\n  default_target: kannada\n",
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), Some("staging")).unwrap();
        assert_eq!(settings.transliteration.default_target, Script::Kannada);
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("absent"), Some("production")).unwrap();
        assert_eq!(settings.transliteration.default_target, Script::Devanagari);
    }

    #[test]
    fn test_invalid_file_value_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[observability]\nlog_level = \"loud\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_settings_from(dir.path(), None),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_environment_variables_override_files() {
        // Own prefix so settings loaded by other tests never see the variable
        let prefix = "STREETLIGHT_SETTINGS_TEST";
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[transliteration]\ndefault_target = \"Deva\"\n",
        )
        .unwrap();

        std::env::set_var(format!("{prefix}_TRANSLITERATION__DEFAULT_TARGET"), "Taml");
        let loaded = load_layers(dir.path(), None, prefix);
        std::env::remove_var(format!("{prefix}_TRANSLITERATION__DEFAULT_TARGET"));

        assert_eq!(loaded.unwrap().transliteration.default_target, Script::Tamil);
    }

    #[test]
    fn test_environment_name_must_be_plain() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings_from(dir.path(), Some("staging")).is_ok());
        assert!(matches!(
            load_settings_from(dir.path(), Some("../secrets")),
            Err(ConfigError::Environment(_))
        ));
        assert!(matches!(
            load_settings_from(dir.path(), Some("")),
            Err(ConfigError::Environment(_))
        ));
    }

    #[test]
    fn test_settings_serialize_to_toml() {
        let rendered = toml::to_string(&Settings::default()).unwrap();
        assert!(rendered.contains("default_target = \"devanagari\""));
    }
}
