//! Error types
//!
//! Detection failure and unmapped clusters are normal outcomes and never
//! surface here. These errors cover the edges: parsing user-supplied script
//! names and loading configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown script: {0}")]
    UnknownScript(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
