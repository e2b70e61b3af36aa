//! Configuration management module
//!
//! This module defines the translator construction options and supports
//! loading locale settings from configuration files and environment variables.

pub mod settings;

pub use settings::{LocaleSettings, TranslatorOptions};
