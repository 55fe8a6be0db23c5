//! Extract-and-remove helper
//!
//! [`eject`] is the only operation in this crate that mutates its input:
//! ejected keys are removed from the caller's mapping. The order of the
//! remaining keys is preserved.
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use crate::value::{coerce_key, Mapping};
use serde_json::Value;

/// The key or keys to eject
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EjectKey {
    /// Eject a single key and return its value
    One(String),
    /// Eject several keys and return their values in this order
    Many(Vec<String>),
}

impl EjectKey {
    /// Classify a loosely typed key
    ///
    /// Strings become [`EjectKey::One`], arrays become [`EjectKey::Many`]
    /// (non-string elements are coerced to keys), anything else is `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(key) => Some(EjectKey::One(key.clone())),
            Value::Array(keys) => Some(EjectKey::Many(keys.iter().map(coerce_key).collect())),
            _ => None,
        }
    }

    /// True for an empty key name or an empty key list
    pub fn is_empty(&self) -> bool {
        match self {
            EjectKey::One(key) => key.is_empty(),
            EjectKey::Many(keys) => keys.is_empty(),
        }
    }
}

impl From<&str> for EjectKey {
    fn from(key: &str) -> Self {
        EjectKey::One(key.to_string())
    }
}

impl From<String> for EjectKey {
    fn from(key: String) -> Self {
        EjectKey::One(key)
    }
}

impl From<Vec<String>> for EjectKey {
    fn from(keys: Vec<String>) -> Self {
        EjectKey::Many(keys)
    }
}

impl From<&[&str]> for EjectKey {
    fn from(keys: &[&str]) -> Self {
        EjectKey::Many(keys.iter().map(|key| (*key).to_string()).collect())
    }
}

/// Remove and return the value(s) stored under `key`
///
/// - a single key returns its value, or `null` when absent;
/// - a key list returns the values in list order, `null` for absent keys.
///   When that list holds at most one value, the value itself (or `null`)
///   is returned instead of a one-element array;
/// - an empty key or key list returns `null` and leaves `param` untouched.
///
/// A key that is present with a `null` value is still removed.
///
/// # Example
///
/// ```
/// use paramshape_core::{eject, EjectKey};
/// use serde_json::json;
///
/// let mut param = json!({"a": 1, "b": 2}).as_object().cloned().unwrap();
/// let keys: &[&str] = &["a", "b", "c"];
///
/// assert_eq!(eject(&mut param, &EjectKey::from(keys)), json!([1, 2, null]));
/// assert!(param.is_empty());
/// ```
pub fn eject(param: &mut Mapping, key: &EjectKey) -> Value {
    if key.is_empty() {
        return Value::Null;
    }

    match key {
        EjectKey::One(key) => param.shift_remove(key).unwrap_or(Value::Null),
        EjectKey::Many(keys) => {
            let mut values: Vec<Value> = keys
                .iter()
                .map(|key| param.shift_remove(key).unwrap_or(Value::Null))
                .collect();
            if values.len() <= 1 {
                values.pop().unwrap_or(Value::Null)
            } else {
                Value::Array(values)
            }
        }
    }
}

/// [`eject`] for a loosely typed key; unsupported key shapes return `null`
pub fn eject_value(param: &mut Mapping, key: &Value) -> Value {
    match EjectKey::from_value(key) {
        Some(key) => eject(param, &key),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Mapping {
        value.as_object().cloned().expect("fixture must be an object")
    }

    #[test]
    fn test_eject_single_key() {
        let mut param = mapping(json!({"a": 1}));
        assert_eq!(eject(&mut param, &"a".into()), json!(1));
        assert!(param.is_empty());
        assert_eq!(eject(&mut param, &"a".into()), Value::Null);
    }

    #[test]
    fn test_eject_from_empty() {
        let mut param = Mapping::new();
        assert_eq!(eject(&mut param, &"a".into()), Value::Null);
    }

    #[test]
    fn test_eject_many_returns_ordered_values() {
        let mut param = mapping(json!({"a": 1, "b": 2}));
        let keys = EjectKey::Many(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(eject(&mut param, &keys), json!([1, 2, null]));
        assert!(param.is_empty());
    }

    #[test]
    fn test_eject_many_with_one_key_unwraps() {
        let mut param = mapping(json!({"a": 1, "b": 2}));
        let keys = EjectKey::Many(vec!["b".into()]);
        assert_eq!(eject(&mut param, &keys), json!(2));
        assert_eq!(Value::Object(param), json!({"a": 1}));
    }

    #[test]
    fn test_eject_preserves_remaining_order() {
        let mut param = mapping(json!({"a": 1, "b": 2, "c": 3, "d": 4}));
        eject(&mut param, &"b".into());
        let keys: Vec<&str> = param.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_eject_removes_null_values() {
        let mut param = mapping(json!({"n": null, "k": 1}));
        assert_eq!(eject(&mut param, &"n".into()), Value::Null);
        assert!(!param.contains_key("n"));
    }

    #[test]
    fn test_empty_keys_do_not_mutate() {
        let mut param = mapping(json!({"": 1, "a": 2}));
        assert_eq!(eject(&mut param, &"".into()), Value::Null);
        assert_eq!(eject(&mut param, &EjectKey::Many(vec![])), Value::Null);
        assert_eq!(param.len(), 2);
    }

    #[test]
    fn test_eject_value_shapes() {
        let mut param = mapping(json!({"a": 1, "b": 2, "3": "three"}));
        assert_eq!(eject_value(&mut param, &json!(true)), Value::Null);
        assert_eq!(eject_value(&mut param, &json!({"a": 1})), Value::Null);
        assert_eq!(param.len(), 3);

        assert_eq!(eject_value(&mut param, &json!([3, "a"])), json!(["three", 1]));
        assert_eq!(eject_value(&mut param, &json!("b")), json!(2));
        assert!(param.is_empty());
    }
}
