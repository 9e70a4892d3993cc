//! Configuration management for the sign transliterator
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default.*`, `config/{env}.*`)
//! - Environment variables (STREETLIGHT_ prefix, `__` separator)
//! - Runtime overrides
//!
//! Priority: env vars > config/{env} > config/default > built-in defaults

pub mod settings;
pub mod transliteration;

pub use settings::{
    load_settings, load_settings_from, ObservabilityConfig, RuntimeEnvironment, Settings,
};
pub use transliteration::{FallbackPolicy, TransliterationConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => ConfigError::FileNotFound(key),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}

impl From<ConfigError> for streetlight_core::Error {
    fn from(err: ConfigError) -> Self {
        streetlight_core::Error::Config(err.to_string())
    }
}
