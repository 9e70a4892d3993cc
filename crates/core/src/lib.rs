//! Core types for the Streetlight sign transliterator
//!
//! This crate provides the foundational types shared by every other crate:
//! - Script definitions for the eight supported Indian scripts
//! - Languages conventionally written in each script
//! - The `TransliterationResult` record handed to callers
//! - The `Transliterator` trait for pluggable engines
//! - Error types

pub mod error;
pub mod language;
pub mod result;
pub mod script;
pub mod traits;

pub use error::{Error, Result};
pub use language::Language;
pub use result::TransliterationResult;
pub use script::Script;
pub use traits::{NoopTransliterator, Transliterator};
