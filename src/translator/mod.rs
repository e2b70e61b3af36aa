//! Translation resolution module
//!
//! This module provides the core resolution engine: keyed lookup with
//! fallback-locale precedence, plural-key derivation from a count variable,
//! and explicit plural selection.

pub mod engine;

// Re-export the engine
pub use engine::Translator;
