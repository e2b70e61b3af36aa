//! Translation data model
//!
//! Defines the nested translation tree, the per-locale translation table,
//! and the variable values passed to interpolation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::utils::errors::Result;

/// Locale identifier (e.g., `"en"`, `"es"`)
pub type Locale = String;

/// One locale's catalog: a recursive mapping from key segments to either a
/// leaf template string or a nested subtree.
///
/// Deserializes directly from nested JSON string maps thanks to the
/// untagged representation:
///
/// ```
/// use mini_i18n::TranslationTree;
///
/// let tree: TranslationTree = serde_json::from_str(
///     r#"{"user": {"greeting": "Hello, {{name}}!"}}"#,
/// ).unwrap();
/// assert_eq!(tree.resolve("user.greeting"), Some("Hello, {{name}}!"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationTree {
    /// A terminal template string
    Leaf(String),
    /// A nested subtree
    Node(HashMap<String, TranslationTree>),
}

impl TranslationTree {
    /// Resolve a dotted key path against this tree.
    ///
    /// Each dot-separated segment descends one level. The lookup fails
    /// closed: a missing segment, a leaf in an intermediate position, or a
    /// subtree in the terminal position all yield `None`.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let mut current = self;
        for segment in key.split('.') {
            match current {
                TranslationTree::Node(children) => current = children.get(segment)?,
                TranslationTree::Leaf(_) => return None,
            }
        }
        match current {
            TranslationTree::Leaf(text) => Some(text),
            TranslationTree::Node(_) => None,
        }
    }

    /// Build a tree from an untyped JSON value.
    ///
    /// Only strings and objects are valid tree content; numbers, booleans,
    /// arrays and nulls are rejected.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Recursively count leaf entries in this tree
    pub fn leaf_count(&self) -> usize {
        match self {
            TranslationTree::Leaf(_) => 1,
            TranslationTree::Node(children) => children.values().map(Self::leaf_count).sum(),
        }
    }
}

/// The full translation table: one tree per locale, supplied once at
/// construction and never mutated by the engine.
pub type TranslationTable = HashMap<Locale, TranslationTree>;

/// Build a translation table from an untyped JSON object keyed by locale
pub fn table_from_json(value: serde_json::Value) -> Result<TranslationTable> {
    Ok(serde_json::from_value(value)?)
}

/// A primitive value supplied for placeholder substitution
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Explicitly absent; the placeholder is preserved in the output
    Null,
}

impl VarValue {
    /// Display string used when substituting a placeholder.
    ///
    /// Returns `None` for [`VarValue::Null`], which behaves the same as a
    /// variable that was never supplied.
    pub fn to_display(&self) -> Option<String> {
        match self {
            VarValue::Str(s) => Some(s.clone()),
            VarValue::Int(i) => Some(i.to_string()),
            VarValue::Float(f) => Some(f.to_string()),
            VarValue::Bool(b) => Some(b.to_string()),
            VarValue::Null => None,
        }
    }

    /// Numeric view of the value, used for plural-count detection.
    ///
    /// Only `Int` and `Float` qualify; booleans and numeric-looking strings
    /// never enable pluralization.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            VarValue::Int(i) => Some(*i as f64),
            VarValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::Str(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::Str(value)
    }
}

impl From<i64> for VarValue {
    fn from(value: i64) -> Self {
        VarValue::Int(value)
    }
}

impl From<i32> for VarValue {
    fn from(value: i32) -> Self {
        VarValue::Int(value as i64)
    }
}

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        VarValue::Float(value)
    }
}

impl From<bool> for VarValue {
    fn from(value: bool) -> Self {
        VarValue::Bool(value)
    }
}

/// Variables for placeholder substitution, passed per call and never stored
pub type Variables = HashMap<String, VarValue>;

/// Literal templates for explicit plural selection via
/// [`Translator::plural`](crate::Translator::plural).
///
/// `vars` carries arbitrary extra named placeholders; the `one`/`other`/
/// `zero` template strings themselves are also exposed to interpolation,
/// alongside the count.
#[derive(Debug, Clone, Default)]
pub struct PluralOptions {
    /// Template used when the count is exactly 1
    pub one: String,
    /// Template used for every other count
    pub other: String,
    /// Optional template used when the count is 0
    pub zero: Option<String>,
    /// Extra named placeholders available to the selected template
    pub vars: Variables,
}

impl PluralOptions {
    /// Create options with the two mandatory templates
    pub fn new(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
            zero: None,
            vars: Variables::new(),
        }
    }

    /// Set the template used when the count is 0
    pub fn zero(mut self, zero: impl Into<String>) -> Self {
        self.zero = Some(zero.into());
        self
    }

    /// Add an extra named placeholder value
    pub fn var(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}
