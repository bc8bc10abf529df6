//! Key-path resolution
//!
//! A pure lookup over two immutable tables: the active language first, the
//! fallback second, and the key itself when both miss. A visible raw key is
//! the intended symptom of a missing translation.

use std::collections::HashMap;
use std::sync::LazyLock;
use regex::{Captures, Regex};
use serde_json::Value;
use super::loader::TranslationTable;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// Outcome of resolving a key path
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A string leaf after placeholder substitution
    Text(String),
    /// An array leaf, e.g. a feature list
    List(Vec<String>),
    /// Any other truthy leaf or a subtree
    Value(Value),
    /// Unresolved in both tables (or a falsy leaf): the path itself
    Key(String),
}

impl Resolved {
    /// Text to display, or `None` when the value has no text form
    pub fn into_text(self) -> Option<String> {
        match self {
            Resolved::Text(text) | Resolved::Key(text) => Some(text),
            Resolved::List(items) => Some(items.join("\n")),
            Resolved::Value(Value::Object(_)) => None,
            Resolved::Value(value) => Some(value.to_string()),
        }
    }

    /// Items of a list leaf; any other text becomes a single item
    pub fn into_list(self) -> Vec<String> {
        match self {
            Resolved::List(items) => items,
            other => other.into_text().into_iter().collect(),
        }
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Resolved::Key(_))
    }
}

/// Walk `path` through `table`; `None` at the first missing segment
pub fn lookup<'a>(table: Option<&'a TranslationTable>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = table?.get(first)?;

    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Resolve `path` against the active table, then the fallback table
pub fn resolve(
    active: Option<&TranslationTable>,
    fallback: Option<&TranslationTable>,
    path: &str,
    params: &TranslationParams,
) -> Resolved {
    let value = match lookup(active, path).or_else(|| lookup(fallback, path)) {
        Some(value) => value,
        None => return Resolved::Key(path.to_string()),
    };

    match value {
        Value::Array(items) => Resolved::List(items.iter().map(leaf_text).collect()),
        Value::String(template) => Resolved::Text(interpolate(template, params)),
        Value::Null | Value::Bool(false) => Resolved::Key(path.to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => Resolved::Key(path.to_string()),
        other => Resolved::Value(other.clone()),
    }
}

/// Replace `{name}` tokens with non-empty params; unknown tokens stay literal
pub fn interpolate(template: &str, params: &TranslationParams) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            match params.get(&caps[1]) {
                Some(value) if !value.is_empty() => value.clone(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
