//! Shape classification for field specifications
//!
//! Entries of a field list are told apart by their key and the shape of
//! their value:
//!
//! | key        | value                  | entry                         |
//! |------------|------------------------|-------------------------------|
//! | index      | array or object        | [`FieldEntry::KeyOr`] / [`FieldEntry::AliasOr`] |
//! | index      | dotted string          | [`FieldEntry::Nested`]        |
//! | index      | any other scalar       | [`FieldEntry::Key`]           |
//! | name       | (alias)                | [`FieldEntry::Alias`]         |
//! | `a.b` name | (alias)                | [`FieldEntry::NestedAlias`]   |
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use super::types::FieldEntry;
use crate::error::{Error, Result};
use crate::value::{coerce_key, entries, is_index, DottedPath};
use serde_json::Value;

/// Classify every entry of a field list, in iteration order
///
/// Arrays contribute positional entries only. Objects contribute positional
/// entries for digit-only keys and alias entries for every other key.
/// Scalars have no entries.
pub fn classify_entries(field: &Value) -> Result<Vec<FieldEntry>> {
    entries(field)
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| classify_entry(&key, value))
        .collect()
}

/// Classify a single `(key, value)` entry of a field list
pub fn classify_entry(key: &str, value: &Value) -> Result<FieldEntry> {
    if !is_index(key) {
        let alias = coerce_key(value);
        return Ok(match DottedPath::parse(key) {
            Some(path) => FieldEntry::NestedAlias { path, alias },
            None => FieldEntry::Alias {
                key: key.to_string(),
                alias,
            },
        });
    }

    match value {
        Value::Array(_) | Value::Object(_) => classify_with_default(key, value),
        scalar => Ok(named_entry(coerce_key(scalar))),
    }
}

/// Classify a bare field name, honouring one-level dotted paths
pub fn named_entry(name: String) -> FieldEntry {
    match DottedPath::parse(&name) {
        Some(path) => FieldEntry::Nested(path),
        None => FieldEntry::Key(name),
    }
}

/// Classify a positional element that carries its own default
///
/// The last element is always the default. What remains either has a
/// non-null element at position `0` (the source key) or its first entry
/// is a `key => alias` pair.
fn classify_with_default(position: &str, value: &Value) -> Result<FieldEntry> {
    let mut rest = entries(value).unwrap_or_default();
    let default = rest
        .pop()
        .map(|(_, default)| default.clone())
        .unwrap_or(Value::Null);

    if let Some((_, key)) = rest.iter().find(|(k, v)| k == "0" && !v.is_null()) {
        return Ok(FieldEntry::KeyOr {
            key: coerce_key(key),
            default,
        });
    }

    match rest.into_iter().next() {
        Some((key, alias)) => Ok(FieldEntry::AliasOr {
            key,
            alias: coerce_key(alias),
            default,
        }),
        None => Err(Error::EmptyFieldSpec {
            position: position.to_string(),
        }),
    }
}
