//! Pair and directive types for the mapping builder
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::fields::{classify_entries, named_entry, FieldEntry};
use crate::source::Source;
use crate::value::{coerce_key, entries, is_mapping_like, Mapping};
use serde_json::Value;

/// One `(source, spec)` argument pair
#[derive(Debug)]
pub struct Pair<'a> {
    /// Value read from, or the key to assign when it is a string
    pub source: Source<'a>,
    /// How to read from the source
    pub spec: Value,
}

impl<'a> Pair<'a> {
    /// Create a new pair
    pub fn new(source: impl Into<Source<'a>>, spec: impl Into<Value>) -> Self {
        Self {
            source: source.into(),
            spec: spec.into(),
        }
    }
}

/// What a single pair does to the result
///
/// Classification takes the first matching rule:
///
/// 1. a string source assigns the spec as a literal value under that key;
/// 2. a mapping source with a `true` spec is merged into the result;
/// 3. an array or object spec is a field list;
/// 4. anything else names a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive<'a> {
    /// `result[key] = value`
    Assign {
        key: &'a str,
        value: &'a Value,
    },
    /// `result = result ∪ source`, source keys win
    Merge,
    /// Apply every entry of a field list
    Fields(Vec<FieldEntry>),
    /// Apply a single named field
    Field(FieldEntry),
}

impl<'a> Directive<'a> {
    /// Classify a normalized `(source, spec)` pair
    pub fn classify(source: &'a Value, spec: &'a Value) -> Result<Self> {
        if let Value::String(key) = source {
            return Ok(Directive::Assign { key, value: spec });
        }

        if is_mapping_like(source) && *spec == Value::Bool(true) {
            return Ok(Directive::Merge);
        }

        if is_mapping_like(spec) {
            return classify_entries(spec).map(Directive::Fields);
        }

        if !spec.is_string() {
            log::warn!("Non-string field spec {} coerced to a key name", spec);
        }
        Ok(Directive::Field(named_entry(coerce_key(spec))))
    }

    /// Short rule name, used in trace output
    pub fn rule(&self) -> &'static str {
        match self {
            Directive::Assign { .. } => "assign",
            Directive::Merge => "merge",
            Directive::Fields(_) => "fields",
            Directive::Field(_) => "field",
        }
    }

    /// Write this directive's effect into `result`
    pub fn apply(&self, source: &Value, result: &mut Mapping) {
        match self {
            Directive::Assign { key, value } => {
                result.insert((*key).to_string(), (*value).clone());
            }
            Directive::Merge => {
                for (key, value) in entries(source).unwrap_or_default() {
                    result.insert(key, value.clone());
                }
            }
            Directive::Fields(fields) => {
                for field in fields {
                    field.apply(source, result);
                }
            }
            Directive::Field(field) => field.apply(source, result),
        }
    }
}
