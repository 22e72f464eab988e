//! Doc integration tests
//!
//! Path get/set/has/unset against a Doc, insertion order, and JSON conversion.

use dotstore::doc::{Doc, PathBuf, Value};

fn path(s: &str) -> PathBuf {
    s.parse().unwrap()
}

#[test]
fn test_doc_round_trip_values() {
    let mut doc = Doc::new();
    let nested = Doc::new().with("inner", "value");
    let cases = [
        ("scalar.text", Value::from("hello")),
        ("scalar.number", Value::from(42)),
        ("scalar.flag", Value::from(true)),
        ("scalar.null", Value::Null),
        ("list", Value::from(vec![1, 2, 3])),
        ("nested.map", Value::from(nested)),
    ];

    for (p, value) in &cases {
        doc.set(&path(p), value.clone()).unwrap();
    }
    for (p, value) in &cases {
        assert_eq!(doc.get(&path(p)), Some(value), "round trip failed for {p}");
    }
}

#[test]
fn test_doc_deep_set_keeps_siblings() {
    let mut doc = Doc::new();
    doc.set(&path("user.name"), "Alice").unwrap();
    doc.set(&path("user.age"), 30).unwrap();

    let user = doc.get_key("user").and_then(Value::as_map).unwrap();
    assert_eq!(user.keys().collect::<Vec<_>>(), vec!["name", "age"]);
}

#[test]
fn test_doc_scalar_coercion_is_destructive() {
    let mut doc = Doc::new();
    doc.set(&path("config"), 1).unwrap();
    doc.set(&path("config.mode.level"), "high").unwrap();

    assert_eq!(doc.get(&path("config.mode.level")), Some(&Value::from("high")));
    assert_eq!(doc.get_key("config").and_then(Value::as_number), None);
}

#[test]
fn test_doc_reinsert_moves_key_to_end() {
    let mut doc = Doc::new().with("a", 1).with("b", 2).with("c", 3);
    doc.unset(&path("a"));
    doc.set(&path("a"), 1).unwrap();

    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["b", "c", "a"]);
}

#[test]
fn test_doc_from_iterator_and_display() {
    let doc: Doc = [("x", 1), ("y", 2)].into_iter().collect();
    assert_eq!(doc.to_string(), r#"{"x":1,"y":2}"#);
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_doc_get_mut_edits_in_place() {
    let mut doc = Doc::new();
    doc.set(&path("counter.value"), 1).unwrap();

    if let Some(Value::Number(n)) = doc.get_mut(&path("counter.value")) {
        *n += 1.0;
    }
    assert_eq!(doc.get(&path("counter.value")), Some(&Value::from(2)));
}
