//! Transliteration between Indian scripts
//!
//! Text is read into a script-independent phonetic alphabet and written out
//! in the target script:
//!
//! ```text
//! source text --segment--> tokens (phonetic units + literals) --render--> target text
//! ```
//!
//! Features:
//! - Devanagari, Tamil, Bengali, Telugu, Kannada, Malayalam, Gurmukhi and
//!   Gujarati, in every direction
//! - Nearest-sound substitution when the target lacks a letter
//! - Text outside the source script (digits, Latin, punctuation) kept as is
//! - ISO 15919 romanization of the intermediate
//!
//! # Example
//!
//! ```
//! use streetlight_core::Script;
//! use streetlight_transliteration::TransliterationEngine;
//!
//! let engine = TransliterationEngine::new();
//! assert_eq!(engine.transliterate("राम", Script::Tamil, None), "ராம");
//! assert_eq!(engine.romanize("राम", None), "rāma");
//! ```

pub mod engine;
pub mod phonetic;
pub mod render;
pub mod romanize;
pub mod segment;
pub mod service;
pub mod table;

pub use engine::{
    Stage, Transliteration, TransliterationEngine, TransliterationEngine as PhoneticTransliterator,
    UnmappedCluster,
};
pub use phonetic::{Consonant, Modifier, PhoneticUnit, Vowel};
pub use romanize::romanize;
pub use service::{create_transliterator, TransliterationService};
pub use table::{table, MappingTable};
