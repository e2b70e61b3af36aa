//! Error handling for mini-i18n
//!
//! The resolution engine itself never fails: missing keys, locales and
//! variables all degrade to best-effort strings. Errors exist only at the
//! API boundary, when converting untyped JSON into translation trees or
//! loading settings.

use thiserror::Error;

/// Main error type for mini-i18n operations
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Invalid translation data: {0}")]
    InvalidTranslations(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for mini-i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;
