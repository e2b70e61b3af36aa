//! The translation resolution engine
//!
//! Owns the current locale, the optional fallback locale, and the full
//! translation table. Resolution is a pure computation over in-memory data:
//! no I/O, no allocation beyond the returned string, and no error paths.
//! Every failure mode (missing key, missing locale, type mismatch during
//! descent) degrades to a best-effort display string.

use tracing::{debug, warn};

use crate::config::TranslatorOptions;
use crate::models::{PluralOptions, TranslationTable, VarValue, Variables};
use crate::utils::interpolate::interpolate;

/// Suffix appended to a key when a plural form is looked up
const PLURAL_SUFFIX: &str = "_plural";

/// The translation resolution engine.
///
/// Construction never fails; a locale absent from the translation table
/// only surfaces later as missing-translation behavior. The translation
/// table is immutable once supplied, and the current locale is the only
/// mutable state.
///
/// A single instance is not safe for concurrent locale mutation:
/// [`set_locale`](Translator::set_locale) followed by
/// [`t`](Translator::t) is not atomic as a pair, so concurrent callers
/// need external synchronization if they mutate the locale.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Current locale; changed via the setter, any string accepted
    locale: String,
    /// Secondary locale consulted when the current locale misses
    fallback_locale: Option<String>,
    /// Loaded translations by locale
    translations: TranslationTable,
    /// Emit trace-level resolution diagnostics
    debug: bool,
}

impl Translator {
    /// Create a new translator from construction options
    pub fn new(options: TranslatorOptions) -> Self {
        Self {
            locale: options.locale,
            fallback_locale: options.fallback_locale,
            translations: options.translations,
            debug: options.debug,
        }
    }

    /// Get the current locale identifier
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Replace the current locale unconditionally.
    ///
    /// Any string is accepted, including locales absent from the
    /// translation table; subsequent lookups then fall through to the
    /// fallback locale or to raw-key behavior.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Resolve a dotted key path to a translated, interpolated string.
    ///
    /// When `variables` carries a numeric `count` that is not 1 and a
    /// `<key>_plural` translation exists under the current or fallback
    /// locale, the plural form is preferred. The full precedence order is:
    /// current-locale plural, current-locale singular, fallback-locale
    /// plural, fallback-locale singular, and finally the raw key itself.
    ///
    /// Returning the requested key verbatim is the deliberate last-resort
    /// display value, not a failure signal. A key that legitimately
    /// translates to itself is therefore indistinguishable from a missing
    /// translation; callers that need the distinction must compare the
    /// result to the key themselves.
    pub fn t(&self, key: &str, variables: Option<&Variables>) -> String {
        let lookup_key = self.effective_key(key, variables);

        let template = self.lookup(&self.locale, &lookup_key).or_else(|| {
            self.fallback_locale
                .as_deref()
                .and_then(|fallback| self.lookup(fallback, &lookup_key))
        });

        match template {
            Some(template) => {
                if self.debug {
                    debug!(key = key, lookup_key = %lookup_key, locale = %self.locale, "Resolved translation");
                }
                interpolate(template, variables)
            }
            None => {
                warn!(key = key, locale = %self.locale, "Translation not found, returning key");
                key.to_string()
            }
        }
    }

    /// Select and interpolate a plural template without any key lookup.
    ///
    /// The `zero` template wins for a count of 0 when supplied, `one` for a
    /// count of exactly 1, and `other` everywhere else. The interpolation
    /// variables are `count` plus every field of `options`, so extra named
    /// placeholders ride along next to the templates themselves.
    pub fn plural(&self, count: i64, options: &PluralOptions) -> String {
        let template = match (count, options.zero.as_deref()) {
            (0, Some(zero)) => zero,
            (1, _) => options.one.as_str(),
            _ => options.other.as_str(),
        };

        let mut vars = Variables::new();
        vars.insert("count".to_string(), VarValue::Int(count));
        vars.insert("one".to_string(), VarValue::Str(options.one.clone()));
        vars.insert("other".to_string(), VarValue::Str(options.other.clone()));
        if let Some(zero) = &options.zero {
            vars.insert("zero".to_string(), VarValue::Str(zero.clone()));
        }
        for (name, value) in &options.vars {
            vars.insert(name.clone(), value.clone());
        }

        interpolate(template, Some(&vars))
    }

    /// Derive the effective lookup key, preferring `<key>_plural` when the
    /// count variable is numeric and not 1 and the plural form actually
    /// resolves under the current or fallback locale.
    fn effective_key(&self, key: &str, variables: Option<&Variables>) -> String {
        let count = variables
            .and_then(|vars| vars.get("count"))
            .and_then(VarValue::as_number);

        if let Some(count) = count {
            if count != 1.0 {
                let plural_key = format!("{key}{PLURAL_SUFFIX}");
                let exists = self.lookup(&self.locale, &plural_key).is_some()
                    || self
                        .fallback_locale
                        .as_deref()
                        .is_some_and(|fallback| self.lookup(fallback, &plural_key).is_some());
                if exists {
                    return plural_key;
                }
            }
        }

        key.to_string()
    }

    /// Descend one locale's tree; `None` covers a missing locale as well as
    /// every failed descent
    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.translations.get(locale)?.resolve(key)
    }
}
