//! Shared test fixtures
//!
//! Builds the translation tables and translators used by the integration
//! tests.

use mini_i18n::{table_from_json, TranslationTable, Translator, TranslatorOptions, VarValue, Variables};
use serde_json::json;

/// Two-locale table: full English catalog, partial Spanish catalog
pub fn demo_table() -> TranslationTable {
    table_from_json(json!({
        "en": {
            "global": { "title": "mini-i18n Demo" },
            "user": {
                "greeting": "Hello, {{name}}!",
                "roles": { "admin": "Administrator" }
            },
            "messages": {
                "unread": "You have one unread message.",
                "unread_plural": "You have {{count}} unread messages."
            },
            "items": {
                "cart": "One item in cart",
                "cart_plural": "{{count}} items in cart"
            }
        },
        "es": {
            "global": { "title": "Demostración de mini-i18n" },
            "user": {
                "greeting": "¡Hola, {{name}}!",
                "roles": { "admin": "Administrador" }
            },
            "messages": {
                "unread": "Tienes un mensaje no leído."
            }
        }
    }))
    .expect("demo table should deserialize")
}

/// English translator without a fallback locale
pub fn english_translator() -> Translator {
    Translator::new(TranslatorOptions::new("en", demo_table()))
}

/// Spanish translator falling back to English
pub fn spanish_translator() -> Translator {
    Translator::new(TranslatorOptions::new("es", demo_table()).fallback_locale("en"))
}

/// Build a variable map from name/value pairs
pub fn vars(entries: &[(&str, VarValue)]) -> Variables {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
