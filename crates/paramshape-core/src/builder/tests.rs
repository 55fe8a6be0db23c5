//! Tests for the mapping builder
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use super::*;
use crate::error::Error;
use crate::fields::FieldList;
use crate::source::{Source, ToMapping};
use crate::value::Mapping;
use serde_json::{json, Value};

fn built(pairs: Vec<Pair<'_>>) -> Value {
    Value::Object(build(pairs).expect("build should succeed"))
}

fn built_flat(args: Value) -> Value {
    let args = args.as_array().cloned().expect("test arguments must be an array");
    Value::Object(build_flat(&args).expect("build should succeed"))
}

#[test]
fn test_string_source_assigns_literal() {
    assert_eq!(built(vec![Pair::new("x", 5)]), json!({"x": 5}));
}

#[test]
fn test_string_source_keeps_dotted_value_verbatim() {
    let result = built(vec![Pair::new("path", "a.b"), Pair::new("list", json!([1, 2]))]);
    assert_eq!(result, json!({"path": "a.b", "list": [1, 2]}));
}

#[test]
fn test_merge_overwrites_existing_keys_in_place() {
    let result = built_flat(json!([
        "a", 0,
        "z", 1,
        {"a": 1, "b": 2}, true
    ]));
    assert_eq!(result, json!({"a": 1, "z": 1, "b": 2}));

    let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["a", "z", "b"]);
}

#[test]
fn test_merge_copies_null_values() {
    let result = built(vec![Pair::new(json!({"gone": null}), true)]);
    assert_eq!(result, json!({"gone": null}));
}

#[test]
fn test_merge_of_array_source_uses_indices() {
    let result = built(vec![Pair::new(json!(["x", "y"]), true)]);
    assert_eq!(result, json!({"0": "x", "1": "y"}));
}

#[test]
fn test_merge_requires_literal_true() {
    let result = built(vec![Pair::new(json!({"a": 1}), false)]);
    assert_eq!(result, json!({"": null}));
}

#[test]
fn test_field_list_mixed_entries() {
    let source = json!({
        "a": 1,
        "c": "see",
        "d": {"e": "nested"},
        "src": "renamed",
    });
    let spec = json!({
        "0": "a",
        "1": ["b", 7],
        "2": {"c": "alias", "0": "unused"},
        "3": {"missing": "alias2", "0": "fallback"},
        "4": "d.e",
        "src": "dst",
        "d.e": "deep",
    });

    let result = built(vec![Pair::new(source, spec)]);
    assert_eq!(
        result,
        json!({
            "a": 1,
            "b": 7,
            "alias": "see",
            "alias2": "fallback",
            "e": "nested",
            "dst": "renamed",
            "deep": "nested",
        })
    );
}

#[test]
fn test_field_list_as_array() {
    let source = json!({"id": 3, "tags": ["x"]});
    let result = built(vec![Pair::new(source, json!(["id", "tags", "absent"]))]);
    assert_eq!(result, json!({"id": 3, "tags": ["x"], "absent": null}));
}

#[test]
fn test_default_applies_to_null_source_values() {
    let source = json!({"page": null});
    let result = built(vec![Pair::new(source, json!([["page", 1]]))]);
    assert_eq!(result, json!({"page": 1}));
}

#[test]
fn test_single_field_name() {
    let source = json!({"user": {"name": "ada"}, "age": 36});
    let result = built(vec![
        Pair::new(source.clone(), "user.name"),
        Pair::new(source.clone(), "age"),
        Pair::new(source, "missing"),
    ]);
    assert_eq!(result, json!({"name": "ada", "age": 36, "missing": null}));
}

#[test]
fn test_dotted_path_into_non_mapping_is_null() {
    let source = json!({"user": "flat"});
    let result = built(vec![Pair::new(source, "user.name")]);
    assert_eq!(result, json!({"name": null}));
}

#[test]
fn test_non_string_field_is_coerced() {
    let source = json!({"1": "one", "2.5": "ignored"});
    let result = built(vec![Pair::new(source, 1)]);
    assert_eq!(result, json!({"1": "one"}));
}

#[test]
fn test_non_mapping_source_yields_nulls() {
    let result = built(vec![Pair::new(json!(42), json!(["a", ["b", "d"]]))]);
    assert_eq!(result, json!({"a": null, "b": "d"}));
}

#[test]
fn test_later_pairs_overwrite_earlier_keys() {
    let result = built(vec![
        Pair::new("k", "first"),
        Pair::new(json!({"k": "second"}), "k"),
    ]);
    assert_eq!(result, json!({"k": "second"}));
}

#[test]
fn test_empty_default_element_fails_fast() {
    let err = build(vec![Pair::new(json!({"a": 1}), json!([["a"]]))]).unwrap_err();
    assert!(matches!(err, Error::EmptyFieldSpec { .. }));
}

#[test]
fn test_flat_stops_at_odd_boundary() {
    let result = built_flat(json!(["a", 1, "b"]));
    assert_eq!(result, json!({"a": 1}));
}

#[test]
fn test_flat_stops_at_null_argument() {
    let result = built_flat(json!(["a", 1, "b", null, "c", 3]));
    assert_eq!(result, json!({"a": 1}));

    let result = built_flat(json!([null, "x", "c", 3]));
    assert_eq!(result, json!({}));
}

#[test]
fn test_typed_build_stops_at_null_source() {
    let result = built(vec![Pair::new(Value::Null, "x"), Pair::new("c", 3)]);
    assert_eq!(result, json!({}));
    assert_eq!(result, built_flat(json!([null, "x", "c", 3])));
}

#[test]
fn test_typed_build_stops_at_null_spec() {
    let result = built(vec![
        Pair::new("a", 1),
        Pair::new(json!({"b": 2}), Value::Null),
        Pair::new("c", 3),
    ]);
    assert_eq!(result, json!({"a": 1}));
}

#[test]
fn test_mapping_builder_stops_at_null_like_flat_build() {
    let builder = MappingBuilder::new()
        .assign("a", 1)
        .assign("b", Value::Null)
        .assign("c", 3);
    let result = builder.build().unwrap();
    assert_eq!(Value::Object(result), built_flat(json!(["a", 1, "b", null, "c", 3])));

    let builder = MappingBuilder::new().pair(Value::Null, "x").assign("c", 3);
    assert!(builder.build().unwrap().is_empty());
}

#[test]
fn test_flat_empty_arguments() {
    assert_eq!(built_flat(json!([])), json!({}));
}

struct Account {
    id: u64,
    email: String,
}

impl ToMapping for Account {
    fn to_mapping(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("id".to_string(), json!(self.id));
        map.insert("email".to_string(), json!(self.email));
        map
    }
}

#[test]
fn test_convertible_source() {
    let account = Account {
        id: 7,
        email: "a@example.com".to_string(),
    };
    let result = built(vec![
        Pair::new(Source::convertible(&account), FieldList::new().alias("id", "account_id")),
        Pair::new(Source::convertible(&account), true),
    ]);
    assert_eq!(
        result,
        json!({"account_id": 7, "id": 7, "email": "a@example.com"})
    );
}

#[test]
fn test_mapping_builder_is_repeatable() {
    let request = json!({"q": "rust", "limit": "10"});
    let builder = MappingBuilder::new()
        .pair(request.clone(), FieldList::new().alias("q", "query").key_or("limit", 20))
        .assign("version", 2)
        .merge(json!({"trace": true}));

    assert_eq!(builder.len(), 3);
    assert!(!builder.is_empty());

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        Value::Object(first),
        json!({"query": "rust", "limit": "10", "version": 2, "trace": true})
    );
}

#[test]
fn test_empty_builder() {
    let builder = MappingBuilder::new();
    assert!(builder.is_empty());
    assert!(builder.build().unwrap().is_empty());
}

#[test]
fn test_directive_classification() {
    let mapping = json!({"a": 1});
    let key = json!("k");

    assert_eq!(Directive::classify(&key, &mapping).unwrap().rule(), "assign");
    assert_eq!(Directive::classify(&mapping, &json!(true)).unwrap(), Directive::Merge);
    assert_eq!(Directive::classify(&mapping, &json!(["a"])).unwrap().rule(), "fields");
    assert_eq!(Directive::classify(&mapping, &json!("a")).unwrap().rule(), "field");
    assert_eq!(Directive::classify(&json!(1), &json!(true)).unwrap().rule(), "field");
}

#[test]
fn test_parse_arguments() {
    let args = parse_arguments(r#"["k", 1, {"a": 1}, true]"#).unwrap();
    assert_eq!(args.len(), 4);

    let err = parse_arguments(r#"{"a": 1}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidArguments { .. }));
    assert!(err.to_string().contains("an object"));

    let err = parse_arguments("[1,").unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
}
