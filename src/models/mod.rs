//! Data models module
//!
//! This module contains the translation data structures shared across the library

pub mod translation;

// Re-export commonly used models
pub use translation::{
    table_from_json, Locale, PluralOptions, TranslationTable, TranslationTree, VarValue, Variables,
};
