//! Mapping helpers over JSON values
//!
//! Lookups here follow one rule throughout: a key whose value is `null` is
//! treated exactly like a key that is not there. JSON arrays are viewed as
//! mappings keyed by their decimal indices.
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

/// Ordered string-keyed mapping used for sources and results
pub type Mapping = Map<String, Value>;

/// Look up `key` in a mapping-like value
///
/// Returns `None` when the container is not indexable, when the key is
/// missing, or when the stored value is `null`.
pub fn lookup<'a>(container: &'a Value, key: &str) -> Option<&'a Value> {
    let found = match container {
        Value::Object(map) => map.get(key),
        Value::Array(items) => parse_index(key).and_then(|index| items.get(index)),
        _ => None,
    };
    found.filter(|value| !value.is_null())
}

/// Look up `key` and clone the result, falling back to `default`
pub fn lookup_or(container: &Value, key: &str, default: &Value) -> Value {
    lookup(container, key).unwrap_or(default).clone()
}

/// True when `key` is written as a non-negative integer (`"0"`, `"12"`)
pub fn is_index(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a canonical array index; `"01"` is a key, not an index
pub fn parse_index(key: &str) -> Option<usize> {
    if !is_index(key) || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    key.parse().ok()
}

/// Ordered `(key, value)` view of an object or array
///
/// Arrays yield their decimal indices as keys. Scalars have no entries.
pub fn entries(value: &Value) -> Option<Vec<(String, &Value)>> {
    match value {
        Value::Object(map) => Some(map.iter().map(|(k, v)| (k.clone(), v)).collect()),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(index, v)| (index.to_string(), v))
                .collect(),
        ),
        _ => None,
    }
}

/// True for values that can act as a source mapping
pub fn is_mapping_like(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Coerce an arbitrary value into a mapping key
///
/// Strings are used as-is, numbers by their decimal text, `true` becomes
/// `"1"`, `false` and `null` become `""`, and compound values use their
/// compact JSON text.
pub fn coerce_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// A one-level `outer.inner` accessor
///
/// Only the first `.` separates the two parts, so `"a.b.c"` reads the
/// literal key `"b.c"` inside `a` and never descends to `a.b.c`. A leading
/// dot does not count: `".a"` is a plain key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
    /// Key read from the source mapping
    pub outer: String,
    /// Key read from the nested mapping, and the default result key
    pub inner: String,
}

impl DottedPath {
    /// Split `spec` into a dotted path, if it is one
    pub fn parse(spec: &str) -> Option<Self> {
        match spec.split_once('.') {
            Some((outer, inner)) if !outer.is_empty() => Some(Self {
                outer: outer.to_string(),
                inner: inner.to_string(),
            }),
            _ => None,
        }
    }

    /// Resolve `source[outer][inner]`
    pub fn resolve<'a>(&self, source: &'a Value) -> Option<&'a Value> {
        lookup(source, &self.outer).and_then(|nested| lookup(nested, &self.inner))
    }
}

impl std::fmt::Display for DottedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.outer, self.inner)
    }
}
