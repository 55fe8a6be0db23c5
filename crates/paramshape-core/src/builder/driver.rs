//! Pair iteration and the public build entry points
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use super::types::{Directive, Pair};
use crate::error::{Error, Result};
use crate::source::Source;
use crate::value::Mapping;
use serde_json::Value;

/// Build a mapping from typed `(source, spec)` pairs
///
/// A pair whose source or spec is `null` ends the stream, exactly as in
/// [`build_flat`]; pairs after it are not applied.
///
/// # Example
///
/// ```
/// use paramshape_core::{build, FieldList, Pair};
/// use serde_json::json;
///
/// let request = json!({"q": "rust", "page": null, "filter": {"lang": "en"}});
///
/// let result = build([
///     Pair::new(request, FieldList::new()
///         .alias("q", "query")
///         .key_or("page", 1)
///         .nested("filter", "lang")),
///     Pair::new("source", "search"),
/// ]).unwrap();
///
/// assert_eq!(serde_json::Value::Object(result), json!({
///     "query": "rust",
///     "page": 1,
///     "lang": "en",
///     "source": "search",
/// }));
/// ```
pub fn build<'a, I>(pairs: I) -> Result<Mapping>
where
    I: IntoIterator<Item = Pair<'a>>,
{
    let mut result = Mapping::new();
    let mut count = 0;

    for (index, pair) in pairs.into_iter().enumerate() {
        let source = pair.source.into_value();
        if ends_stream(index, &source, &pair.spec) {
            break;
        }
        apply_pair(index, &source, &pair.spec, &mut result)?;
        count += 1;
    }

    tracing::debug!(pairs = count, keys = result.len(), "Mapping built");
    Ok(result)
}

/// Build a mapping from a flattened argument list
///
/// Arguments are consumed two at a time. A missing or `null` element ends
/// the stream; whatever has been built so far is returned.
pub fn build_flat(args: &[Value]) -> Result<Mapping> {
    let mut result = Mapping::new();
    let mut count = 0;

    for (index, pair) in args.chunks(2).enumerate() {
        let [source, spec] = pair else {
            tracing::trace!(pair = index, "Odd trailing argument ignored");
            break;
        };
        if ends_stream(index, source, spec) {
            break;
        }
        apply_pair(index, source, spec, &mut result)?;
        count += 1;
    }

    tracing::debug!(pairs = count, keys = result.len(), "Mapping built from flat arguments");
    Ok(result)
}

/// Parse flattened builder arguments from JSON text
///
/// The text must hold a single JSON array.
pub fn parse_arguments(text: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(args) => Ok(args),
        other => Err(Error::invalid_arguments(format!(
            "expected a JSON array of arguments, found {}",
            value_kind(&other)
        ))),
    }
}

/// Builder that collects pairs and can be built any number of times
///
/// Building never consumes or mutates the collected pairs, so repeated
/// calls return equal mappings.
#[derive(Debug, Default)]
pub struct MappingBuilder<'a> {
    pairs: Vec<Pair<'a>>,
}

impl<'a> MappingBuilder<'a> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Add a `(source, spec)` pair
    pub fn pair(mut self, source: impl Into<Source<'a>>, spec: impl Into<Value>) -> Self {
        self.pairs.push(Pair::new(source, spec));
        self
    }

    /// Assign a literal value under `key`
    ///
    /// A `null` value ends the pair stream like any other null argument.
    pub fn assign(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key: String = key.into();
        self.pair(key, value)
    }

    /// Merge every key of `source` into the result
    pub fn merge(self, source: impl Into<Source<'a>>) -> Self {
        self.pair(source, true)
    }

    /// Number of pairs collected
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no pairs have been added
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Build the mapping, stopping at the first pair holding a `null`
    pub fn build(&self) -> Result<Mapping> {
        let mut result = Mapping::new();
        let mut count = 0;

        for (index, pair) in self.pairs.iter().enumerate() {
            let source = pair.source.to_value();
            if ends_stream(index, &source, &pair.spec) {
                break;
            }
            apply_pair(index, &source, &pair.spec, &mut result)?;
            count += 1;
        }

        tracing::debug!(pairs = count, keys = result.len(), "Mapping built");
        Ok(result)
    }
}

fn ends_stream(index: usize, source: &Value, spec: &Value) -> bool {
    let ends = source.is_null() || spec.is_null();
    if ends {
        tracing::trace!(pair = index, "Null argument ends the stream");
    }
    ends
}

fn apply_pair(index: usize, source: &Value, spec: &Value, result: &mut Mapping) -> Result<()> {
    let directive = Directive::classify(source, spec).map_err(|e| {
        tracing::debug!(pair = index, error = %e, "Pair rejected");
        e
    })?;

    tracing::trace!(pair = index, rule = directive.rule(), "Applying pair");
    directive.apply(source, result);
    Ok(())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
