//! all/keys/values/key_at/value_at/to_object ordering and bounds.

use dotstore::doc::{Doc, Value};

use crate::helpers::*;

fn abc() -> TestStore {
    store_with_entries(&[
        ("a", Value::from(1)),
        ("b", Value::from(2)),
        ("c", Value::from(3)),
    ])
}

#[test]
fn test_all_preserves_insertion_order() {
    let store = abc();
    assert_eq!(keys_of(&store), vec!["a", "b", "c"]);
    assert_eq!(
        store.values().unwrap(),
        vec![Value::from(1), Value::from(2), Value::from(3)]
    );
}

#[test]
fn test_order_unaffected_by_churn_elsewhere() {
    let mut store = abc();
    store.set("d", 4).unwrap();
    store.del("d").unwrap();
    store.set("e", 5).unwrap();
    store.del("e").unwrap();

    assert_eq!(keys_of(&store), vec!["a", "b", "c"]);
}

#[test]
fn test_readded_key_moves_to_end() {
    let mut store = abc();
    store.del("a").unwrap();
    store.set("a", 1).unwrap();

    assert_eq!(store.keys().unwrap(), vec!["b", "c", "a"]);
}

#[test]
fn test_all_with_limit() {
    let store = abc();
    let entries = store.all(2).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].key, "b");

    assert_eq!(store.all(10).unwrap().len(), 3);
    assert_eq!(store.all(0).unwrap().len(), 3);
}

#[test]
fn test_key_and_value_at() {
    let store = abc();
    assert_eq!(store.key_at(0).unwrap(), "a");
    assert_eq!(store.key_at(2).unwrap(), "c");
    assert_eq!(store.value_at(1).unwrap(), Value::from(2));
}

#[test]
fn test_index_at_count_is_out_of_range() {
    let store = abc();
    assert!(store.value_at(3).unwrap_err().is_index_out_of_range());
    assert!(store.key_at(3).unwrap_err().is_index_out_of_range());
    assert!(store.value_at(100).unwrap_err().is_index_out_of_range());
}

#[test]
fn test_index_on_empty_store() {
    let store = test_store();
    assert!(store.key_at(0).unwrap_err().is_index_out_of_range());
}

#[test]
fn test_to_object_reconstructs_document() {
    let mut store = test_store();
    store.set("nova.version", "1.0.0").unwrap();
    store.set("count", 2).unwrap();

    let expected = Doc::new()
        .with("nova", Doc::new().with("version", "1.0.0"))
        .with("count", 2);
    let object = store.to_object().unwrap();
    assert_eq!(object, expected);
    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["nova", "count"]);
}
