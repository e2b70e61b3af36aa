//! mini-i18n
//!
//! A minimal internationalization library for resolving human-readable text
//! by locale. It provides dotted-key lookup over nested translation trees,
//! fallback-locale resolution, singular/plural phrasing selection from a
//! numeric count, and `{{ name }}` template interpolation, without pulling
//! in a heavyweight i18n framework.

pub mod config;
pub mod models;
pub mod translator;
pub mod utils;

// Re-export commonly used types
pub use config::{LocaleSettings, TranslatorOptions};
pub use models::{
    table_from_json, Locale, PluralOptions, TranslationTable, TranslationTree, VarValue, Variables,
};
pub use utils::errors::{I18nError, Result};
pub use utils::interpolate::interpolate;

// Re-export the main component for easy access
pub use translator::Translator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

/// Create a translator with default options (no fallback locale, debug off).
///
/// Convenience wrapper around [`TranslatorOptions::new`] and
/// [`Translator::new`] for the common single-step case.
pub fn create_translator(locale: impl Into<String>, translations: TranslationTable) -> Translator {
    Translator::new(TranslatorOptions::new(locale, translations))
}
