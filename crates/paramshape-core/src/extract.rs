//! Field extraction with defaults
//!
//! A flat, non-recursive companion to the builder: read a list of keys
//! from a mapping, falling back to per-field defaults.
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::value::{coerce_key, Mapping};
use serde::Serialize;
use serde_json::Value;

/// One field to extract
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDescriptor {
    /// Extract `key`, `null` when absent
    Key(String),
    /// Extract `key`, `default` when absent
    WithDefault {
        key: String,
        default: Value,
    },
}

impl FieldDescriptor {
    /// Create a descriptor with a default value
    pub fn with_default(key: impl Into<String>, default: impl Into<Value>) -> Self {
        FieldDescriptor::WithDefault {
            key: key.into(),
            default: default.into(),
        }
    }

    /// The key read from the source
    pub fn key(&self) -> &str {
        match self {
            FieldDescriptor::Key(key) | FieldDescriptor::WithDefault { key, .. } => key,
        }
    }

    /// The fallback value, `null` when none was given
    pub fn default_value(&self) -> Value {
        match self {
            FieldDescriptor::Key(_) => Value::Null,
            FieldDescriptor::WithDefault { default, .. } => default.clone(),
        }
    }

    /// Classify a loosely typed descriptor
    ///
    /// Accepts `"key"`, `["key"]` and `["key", default]`.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(key) => Ok(FieldDescriptor::Key(key.clone())),
            Value::Array(items) => match items.as_slice() {
                [key] => Ok(FieldDescriptor::Key(coerce_key(key))),
                [key, default] => Ok(FieldDescriptor::WithDefault {
                    key: coerce_key(key),
                    default: default.clone(),
                }),
                _ => Err(Error::invalid_descriptor(format!(
                    "expected one or two elements, found {}",
                    items.len()
                ))),
            },
            other => Err(Error::invalid_descriptor(format!(
                "expected a key name or [key, default], found {}",
                other
            ))),
        }
    }

    fn resolve(&self, param: &Mapping) -> Value {
        match param.get(self.key()).filter(|value| !value.is_null()) {
            Some(value) => value.clone(),
            None => self.default_value(),
        }
    }
}

impl From<&str> for FieldDescriptor {
    fn from(key: &str) -> Self {
        FieldDescriptor::Key(key.to_string())
    }
}

impl From<String> for FieldDescriptor {
    fn from(key: String) -> Self {
        FieldDescriptor::Key(key)
    }
}

/// Result of [`extract`]: keyed by field name, or positional
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Extracted {
    /// Field name to value
    Mapping(Mapping),
    /// Values in descriptor order
    Sequence(Vec<Value>),
}

impl Extracted {
    /// Borrow the mapping form
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Extracted::Mapping(map) => Some(map),
            Extracted::Sequence(_) => None,
        }
    }

    /// Borrow the sequence form
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Extracted::Mapping(_) => None,
            Extracted::Sequence(values) => Some(values),
        }
    }

    /// Number of extracted values
    pub fn len(&self) -> usize {
        match self {
            Extracted::Mapping(map) => map.len(),
            Extracted::Sequence(values) => values.len(),
        }
    }

    /// True when nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert into a plain JSON value
    pub fn into_value(self) -> Value {
        match self {
            Extracted::Mapping(map) => Value::Object(map),
            Extracted::Sequence(values) => Value::Array(values),
        }
    }
}

impl From<Extracted> for Value {
    fn from(extracted: Extracted) -> Self {
        extracted.into_value()
    }
}

/// Extract `fields` from `param`
///
/// - an empty `param` yields an empty mapping;
/// - an empty `fields` list yields a copy of `param`;
/// - otherwise each field resolves to `param[key]`, or to its default when
///   the key is missing or `null`. With `key_value` the result is keyed by
///   field name, without it the values are returned in descriptor order.
///
/// # Example
///
/// ```
/// use paramshape_core::{extract, FieldDescriptor};
/// use serde_json::json;
///
/// let param = json!({"a": 1}).as_object().cloned().unwrap();
/// let fields = [
///     FieldDescriptor::with_default("a", 9),
///     FieldDescriptor::with_default("b", 9),
/// ];
///
/// let result = extract(&param, &fields, true).into_value();
/// assert_eq!(result, json!({"a": 1, "b": 9}));
/// ```
pub fn extract(param: &Mapping, fields: &[FieldDescriptor], key_value: bool) -> Extracted {
    if param.is_empty() {
        return Extracted::Mapping(Mapping::new());
    }
    if fields.is_empty() {
        return Extracted::Mapping(param.clone());
    }

    if key_value {
        Extracted::Mapping(
            fields
                .iter()
                .map(|field| (field.key().to_string(), field.resolve(param)))
                .collect(),
        )
    } else {
        Extracted::Sequence(extract_values(param, fields))
    }
}

/// Extract `fields` from `param` as values in descriptor order
pub fn extract_values(param: &Mapping, fields: &[FieldDescriptor]) -> Vec<Value> {
    fields.iter().map(|field| field.resolve(param)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Mapping {
        value.as_object().cloned().expect("fixture must be an object")
    }

    #[test]
    fn test_defaults_fill_missing_keys() {
        let param = mapping(json!({"a": 1}));
        let fields = [
            FieldDescriptor::with_default("a", 9),
            FieldDescriptor::with_default("b", 9),
        ];
        assert_eq!(extract(&param, &fields, true).into_value(), json!({"a": 1, "b": 9}));
    }

    #[test]
    fn test_plain_keys_default_to_null() {
        let param = mapping(json!({"a": 1, "n": null}));
        let fields = [FieldDescriptor::from("a"), "n".into(), "z".into()];
        assert_eq!(
            extract(&param, &fields, true).into_value(),
            json!({"a": 1, "n": null, "z": null})
        );
    }

    #[test]
    fn test_empty_fields_returns_copy() {
        let param = mapping(json!({"a": 1, "b": [2]}));
        let result = extract(&param, &[], true);
        assert_eq!(result, Extracted::Mapping(param.clone()));
        assert_eq!(extract(&param, &[], false), Extracted::Mapping(param));
    }

    #[test]
    fn test_empty_param_returns_empty_mapping() {
        let fields = [FieldDescriptor::with_default("a", 1)];
        let result = extract(&Mapping::new(), &fields, false);
        assert_eq!(result, Extracted::Mapping(Mapping::new()));
        assert!(result.is_empty());
    }

    #[test]
    fn test_sequence_form_keeps_descriptor_order() {
        let param = mapping(json!({"x": 1, "y": 2}));
        let fields = [FieldDescriptor::from("y"), "missing".into(), "x".into()];
        let result = extract(&param, &fields, false);
        assert_eq!(result.as_sequence(), Some(&[json!(2), Value::Null, json!(1)][..]));
        assert!(result.as_mapping().is_none());
        assert_eq!(extract_values(&param, &fields).len(), 3);
    }

    #[test]
    fn test_descriptor_from_value() {
        assert_eq!(
            FieldDescriptor::from_value(&json!("a")).unwrap(),
            FieldDescriptor::Key("a".to_string())
        );
        assert_eq!(
            FieldDescriptor::from_value(&json!(["a"])).unwrap(),
            FieldDescriptor::Key("a".to_string())
        );
        assert_eq!(
            FieldDescriptor::from_value(&json!(["a", {"d": 1}])).unwrap(),
            FieldDescriptor::with_default("a", json!({"d": 1}))
        );
        assert!(FieldDescriptor::from_value(&json!([])).is_err());
        assert!(FieldDescriptor::from_value(&json!(["a", 1, 2])).is_err());
        assert!(FieldDescriptor::from_value(&json!(3)).is_err());
    }

    #[test]
    fn test_serialize_untagged() {
        let mapping_form = Extracted::Mapping(mapping(json!({"a": 1})));
        assert_eq!(serde_json::to_value(&mapping_form).unwrap(), json!({"a": 1}));

        let sequence_form = Extracted::Sequence(vec![json!(1), Value::Null]);
        assert_eq!(serde_json::to_value(&sequence_form).unwrap(), json!([1, null]));
    }
}
