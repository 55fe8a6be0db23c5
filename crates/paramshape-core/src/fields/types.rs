//! Core field entry type
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use crate::value::{lookup, DottedPath, Mapping};
use serde_json::Value;

/// One classified entry of a field specification
///
/// Every variant writes exactly one key into the result. Missing or `null`
/// source values resolve to the entry's default, or to `null` when the
/// entry has none.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEntry {
    /// `"key"`: copy `source[key]` to `result[key]`
    Key(String),
    /// `"outer.inner"`: copy `source[outer][inner]` to `result[inner]`
    Nested(DottedPath),
    /// `["key", default]`: copy `source[key]` to `result[key]`
    KeyOr {
        key: String,
        default: Value,
    },
    /// `{"key": "alias", "0": default}`: copy `source[key]` to `result[alias]`
    AliasOr {
        key: String,
        alias: String,
        default: Value,
    },
    /// `"key" => "alias"`: copy `source[key]` to `result[alias]`
    Alias {
        key: String,
        alias: String,
    },
    /// `"outer.inner" => "alias"`: copy `source[outer][inner]` to `result[alias]`
    NestedAlias {
        path: DottedPath,
        alias: String,
    },
}

impl FieldEntry {
    /// The key this entry writes in the result
    pub fn target_key(&self) -> &str {
        match self {
            FieldEntry::Key(key) | FieldEntry::KeyOr { key, .. } => key,
            FieldEntry::Nested(path) => &path.inner,
            FieldEntry::AliasOr { alias, .. }
            | FieldEntry::Alias { alias, .. }
            | FieldEntry::NestedAlias { alias, .. } => alias,
        }
    }

    /// Resolve the value this entry reads from `source`
    pub fn resolve(&self, source: &Value) -> Value {
        let found = match self {
            FieldEntry::Key(key) | FieldEntry::Alias { key, .. } => lookup(source, key),
            FieldEntry::Nested(path) | FieldEntry::NestedAlias { path, .. } => path.resolve(source),
            FieldEntry::KeyOr { key, default } | FieldEntry::AliasOr { key, default, .. } => {
                return lookup(source, key).unwrap_or(default).clone();
            }
        };
        found.cloned().unwrap_or(Value::Null)
    }

    /// Write this entry's value into `result`, overwriting any existing key
    pub fn apply(&self, source: &Value, result: &mut Mapping) {
        let value = self.resolve(source);
        result.insert(self.target_key().to_string(), value);
    }
}
