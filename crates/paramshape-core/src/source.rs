//! Source values for the mapping builder
//!
//! A source is either a plain JSON value or a domain object that knows how
//! to turn itself into a mapping. Both are normalized to a `Value` before
//! any field specification is applied.
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use crate::value::Mapping;
use serde_json::Value;
use std::fmt;

/// Capability for objects that can present themselves as a mapping
///
/// # Example
///
/// ```
/// use paramshape_core::{Mapping, ToMapping};
/// use serde_json::json;
///
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// impl ToMapping for User {
///     fn to_mapping(&self) -> Mapping {
///         let mut map = Mapping::new();
///         map.insert("id".to_string(), json!(self.id));
///         map.insert("name".to_string(), json!(self.name));
///         map
///     }
/// }
/// ```
pub trait ToMapping {
    /// Produce the mapping view of this object
    fn to_mapping(&self) -> Mapping;
}

impl ToMapping for Mapping {
    fn to_mapping(&self) -> Mapping {
        self.clone()
    }
}

/// The left-hand element of a builder pair
pub enum Source<'a> {
    /// A raw value: a mapping, a key string, or any other JSON value
    Value(Value),
    /// An object converted through [`ToMapping`] before use
    Convertible(&'a dyn ToMapping),
}

impl<'a> Source<'a> {
    /// Wrap an object that exposes the [`ToMapping`] capability
    pub fn convertible(object: &'a dyn ToMapping) -> Self {
        Source::Convertible(object)
    }

    /// Normalize into the value the builder reads from
    pub fn into_value(self) -> Value {
        match self {
            Source::Value(value) => value,
            Source::Convertible(object) => Value::Object(object.to_mapping()),
        }
    }

    /// Normalize without consuming the source
    pub fn to_value(&self) -> Value {
        match self {
            Source::Value(value) => value.clone(),
            Source::Convertible(object) => Value::Object(object.to_mapping()),
        }
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Source::Convertible(_) => f.write_str("Convertible(..)"),
        }
    }
}

impl From<Value> for Source<'_> {
    fn from(value: Value) -> Self {
        Source::Value(value)
    }
}

impl From<Mapping> for Source<'_> {
    fn from(map: Mapping) -> Self {
        Source::Value(Value::Object(map))
    }
}

impl From<&str> for Source<'_> {
    fn from(key: &str) -> Self {
        Source::Value(Value::String(key.to_string()))
    }
}

impl From<String> for Source<'_> {
    fn from(key: String) -> Self {
        Source::Value(Value::String(key))
    }
}
