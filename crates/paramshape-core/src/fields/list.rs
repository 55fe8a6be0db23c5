//! Fluent builder for field lists
//!
//! [`FieldList`] writes the same data a hand-written JSON field list would
//! contain, so the result can be stored, logged or sent over the wire and
//! classified later like any other spec value.
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use crate::value::Mapping;
use serde_json::{json, Value};

/// Builder for a field-list specification
///
/// # Example
///
/// ```
/// use paramshape_core::FieldList;
/// use serde_json::json;
///
/// let spec = FieldList::new()
///     .key("id")
///     .key_or("role", "guest")
///     .alias("nick", "name")
///     .nested("address", "city")
///     .into_value();
///
/// assert_eq!(spec, json!({
///     "0": "id",
///     "1": ["role", "guest"],
///     "nick": "name",
///     "2": "address.city",
/// }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldList {
    entries: Mapping,
    next_index: usize,
}

impl FieldList {
    /// Create an empty field list
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `key` under the same name
    pub fn key(self, key: impl Into<String>) -> Self {
        self.positional(Value::String(key.into()))
    }

    /// Copy `key`, falling back to `default`
    pub fn key_or(self, key: impl Into<String>, default: impl Into<Value>) -> Self {
        self.positional(json!([key.into(), default.into()]))
    }

    /// Copy `outer.inner`, stored under `inner`
    pub fn nested(self, outer: &str, inner: &str) -> Self {
        self.positional(Value::String(format!("{}.{}", outer, inner)))
    }

    /// Copy `key`, stored under `alias`
    ///
    /// `key` must not be written as an integer; such keys are positional.
    pub fn alias(mut self, key: impl Into<String>, alias: impl Into<String>) -> Self {
        self.entries.insert(key.into(), Value::String(alias.into()));
        self
    }

    /// Copy `key` under `alias`, falling back to `default`
    pub fn alias_or(
        self,
        key: impl Into<String>,
        alias: impl Into<String>,
        default: impl Into<Value>,
    ) -> Self {
        let mut element = Mapping::new();
        element.insert(key.into(), Value::String(alias.into()));
        element.insert("0".to_string(), default.into());
        self.positional(Value::Object(element))
    }

    /// Copy `outer.inner`, stored under `alias`
    pub fn nested_alias(self, outer: &str, inner: &str, alias: impl Into<String>) -> Self {
        self.alias(format!("{}.{}", outer, inner), alias)
    }

    /// Number of entries written so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been written
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the list as a spec value
    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }

    fn positional(mut self, value: Value) -> Self {
        self.entries.insert(self.next_index.to_string(), value);
        self.next_index += 1;
        self
    }
}

impl From<FieldList> for Value {
    fn from(list: FieldList) -> Self {
        list.into_value()
    }
}
