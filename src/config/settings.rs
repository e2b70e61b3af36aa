//! Translator settings management
//!
//! This module defines the construction-time options for the translator and
//! provides methods for loading locale settings from configuration files
//! and environment variables.

use serde::{Deserialize, Serialize};

use crate::models::TranslationTable;
use crate::utils::errors::Result;

/// Construction-time options for [`Translator`](crate::Translator).
///
/// The locale and translation table are mandatory; the fallback locale and
/// debug flag are optional and settable through the chainable methods.
#[derive(Debug, Clone)]
pub struct TranslatorOptions {
    /// Initial locale; need not exist in the translation table
    pub locale: String,
    /// Full translation table, one tree per locale
    pub translations: TranslationTable,
    /// Secondary locale consulted when the current locale has no translation
    pub fallback_locale: Option<String>,
    /// Emit trace-level resolution diagnostics
    pub debug: bool,
}

impl TranslatorOptions {
    /// Create options with an initial locale and translation table
    pub fn new(locale: impl Into<String>, translations: TranslationTable) -> Self {
        Self {
            locale: locale.into(),
            translations,
            fallback_locale: None,
            debug: false,
        }
    }

    /// Set the fallback locale
    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    /// Enable or disable debug diagnostics
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Locale settings loadable from configuration sources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocaleSettings {
    pub default_locale: String,
    pub fallback_locale: Option<String>,
    pub debug: bool,
}

impl LocaleSettings {
    /// Load settings from an optional `mini-i18n` configuration file and
    /// `MINI_I18N_*` environment variables
    pub fn new() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("default_locale", "en")?
            .set_default("debug", false)?
            .add_source(config::File::with_name("mini-i18n").required(false))
            .add_source(config::Environment::with_prefix("MINI_I18N"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Combine these settings with a translation table into construction
    /// options
    pub fn into_options(self, translations: TranslationTable) -> TranslatorOptions {
        let mut options = TranslatorOptions::new(self.default_locale, translations).debug(self.debug);
        if let Some(fallback) = self.fallback_locale {
            options = options.fallback_locale(fallback);
        }
        options
    }
}
