//! Tests for field classification and the field list builder
//!
//! Copyright (c) 2025 Paramshape Team
//! Licensed under the Apache-2.0 license

use super::*;
use crate::error::Error;
use crate::value::{DottedPath, Mapping};
use serde_json::{json, Value};

fn path(outer: &str, inner: &str) -> DottedPath {
    DottedPath {
        outer: outer.to_string(),
        inner: inner.to_string(),
    }
}

#[test]
fn test_positional_plain_key() {
    let entry = classify_entry("0", &json!("name")).unwrap();
    assert_eq!(entry, FieldEntry::Key("name".to_string()));
}

#[test]
fn test_positional_dotted_key() {
    let entry = classify_entry("3", &json!("user.email")).unwrap();
    assert_eq!(entry, FieldEntry::Nested(path("user", "email")));
    assert_eq!(entry.target_key(), "email");
}

#[test]
fn test_positional_scalar_is_coerced() {
    let entry = classify_entry("0", &json!(42)).unwrap();
    assert_eq!(entry, FieldEntry::Key("42".to_string()));
}

#[test]
fn test_positional_key_with_default() {
    let entry = classify_entry("1", &json!(["page", 1])).unwrap();
    assert_eq!(
        entry,
        FieldEntry::KeyOr {
            key: "page".to_string(),
            default: json!(1),
        }
    );
}

#[test]
fn test_extra_elements_before_default_are_ignored() {
    let entry = classify_entry("0", &json!(["page", "ignored", 10])).unwrap();
    assert_eq!(
        entry,
        FieldEntry::KeyOr {
            key: "page".to_string(),
            default: json!(10),
        }
    );
}

#[test]
fn test_positional_alias_with_default() {
    let entry = classify_entry("2", &json!({"uid": "user_id", "0": 0})).unwrap();
    assert_eq!(
        entry,
        FieldEntry::AliasOr {
            key: "uid".to_string(),
            alias: "user_id".to_string(),
            default: json!(0),
        }
    );
    assert_eq!(entry.target_key(), "user_id");
}

#[test]
fn test_keyed_alias() {
    let entry = classify_entry("nick", &json!("name")).unwrap();
    assert_eq!(
        entry,
        FieldEntry::Alias {
            key: "nick".to_string(),
            alias: "name".to_string(),
        }
    );
}

#[test]
fn test_keyed_dotted_alias() {
    let entry = classify_entry("profile.age", &json!("years")).unwrap();
    assert_eq!(
        entry,
        FieldEntry::NestedAlias {
            path: path("profile", "age"),
            alias: "years".to_string(),
        }
    );
}

#[test]
fn test_single_element_default_fails_fast() {
    let err = classify_entry("4", &json!(["lonely"])).unwrap_err();
    match err {
        Error::EmptyFieldSpec { position } => assert_eq!(position, "4"),
        other => panic!("unexpected error: {other}"),
    }

    assert!(classify_entry("0", &json!([])).is_err());
    assert!(classify_entry("0", &json!({})).is_err());
}

#[test]
fn test_null_first_element_falls_back_to_alias_form() {
    let entry = classify_entry("0", &json!([null, "fallback"])).unwrap();
    assert_eq!(
        entry,
        FieldEntry::AliasOr {
            key: "0".to_string(),
            alias: String::new(),
            default: json!("fallback"),
        }
    );
}

#[test]
fn test_classify_entries_preserves_order() {
    let entries = classify_entries(&json!({
        "0": "a",
        "src": "dst",
        "1": ["b", 2],
        "2": "c.d",
    }))
    .unwrap();

    let targets: Vec<&str> = entries.iter().map(FieldEntry::target_key).collect();
    assert_eq!(targets, vec!["a", "dst", "b", "d"]);
}

#[test]
fn test_classify_entries_of_array_are_positional() {
    let entries = classify_entries(&json!(["a", ["b", 1], "c.d"])).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], FieldEntry::Key("a".to_string()));
    assert_eq!(entries[2], FieldEntry::Nested(path("c", "d")));
}

#[test]
fn test_classify_entries_of_scalar_is_empty() {
    assert!(classify_entries(&json!("a")).unwrap().is_empty());
}

#[test]
fn test_resolve_and_apply() {
    let source = json!({"a": 1, "n": null, "user": {"id": 9}});
    let mut result = Mapping::new();

    FieldEntry::Key("a".to_string()).apply(&source, &mut result);
    FieldEntry::Key("n".to_string()).apply(&source, &mut result);
    FieldEntry::KeyOr {
        key: "n".to_string(),
        default: json!("dflt"),
    }
    .apply(&source, &mut result);
    FieldEntry::NestedAlias {
        path: path("user", "id"),
        alias: "uid".to_string(),
    }
    .apply(&source, &mut result);

    assert_eq!(
        Value::Object(result),
        json!({"a": 1, "n": "dflt", "uid": 9})
    );
}

#[test]
fn test_field_list_round_trips_through_classification() {
    let spec = FieldList::new()
        .key("id")
        .key_or("limit", 20)
        .alias("q", "query")
        .alias_or("sort", "order", "asc")
        .nested("filter", "status")
        .nested_alias("filter", "owner", "owner_id");

    assert_eq!(spec.len(), 6);

    let entries = classify_entries(&spec.into_value()).unwrap();
    let targets: Vec<&str> = entries.iter().map(FieldEntry::target_key).collect();
    assert_eq!(
        targets,
        vec!["id", "limit", "query", "order", "status", "owner_id"]
    );
}

#[test]
fn test_empty_field_list() {
    let list = FieldList::new();
    assert!(list.is_empty());
    assert_eq!(Value::from(list), json!({}));
}
