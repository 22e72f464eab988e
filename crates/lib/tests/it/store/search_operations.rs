//! filter/find/find_update/find_delete/for_each.

use dotstore::doc::{Doc, Value};

use crate::helpers::*;

fn users() -> TestStore {
    store_with_entries(&[
        ("alice", Value::from(Doc::new().with("age", 31).with("admin", true))),
        ("bob", Value::from(Doc::new().with("age", 17).with("admin", false))),
        ("carol", Value::from(Doc::new().with("age", 45).with("admin", false))),
    ])
}

fn age(value: &Value) -> f64 {
    value
        .as_map()
        .and_then(|user| user.get_key("age"))
        .and_then(Value::as_number)
        .unwrap_or_default()
}

#[test]
fn test_filter_returns_matches_in_order() {
    let store = users();
    let adults = store.filter(|value, _| age(value) >= 18.0).unwrap();

    assert_eq!(adults.len(), 2);
    assert_eq!(age(&adults[0]), 31.0);
    assert_eq!(age(&adults[1]), 45.0);
}

#[test]
fn test_filter_by_index() {
    let store = users();
    let odd = store.filter(|_, index| index % 2 == 1).unwrap();
    assert_eq!(odd.len(), 1);
    assert_eq!(age(&odd[0]), 17.0);
}

#[test]
fn test_find_first_match() {
    let store = users();
    let found = store.find(|value, _| age(value) > 30.0).unwrap();
    assert_eq!(found.map(|v| age(&v)), Some(31.0));

    assert_eq!(store.find(|value, _| age(value) > 100.0).unwrap(), None);
}

#[test]
fn test_find_update_replaces_matching_entries() {
    let mut store = users();
    let updated = store
        .find_update("redacted", |entry| entry.key != "alice")
        .unwrap();

    assert_eq!(updated, 2);
    assert_eq!(store.get("bob").unwrap(), Some(Value::from("redacted")));
    assert_eq!(store.get("carol").unwrap(), Some(Value::from("redacted")));
    assert!(store.get("alice").unwrap().unwrap().is_map());
    assert_eq!(keys_of(&store), vec!["alice", "bob", "carol"]);
    assert_eq!(store.size(), 3);
}

#[test]
fn test_find_delete_removes_matching_entries() {
    let mut store = users();
    let deleted = store
        .find_delete(|entry| age(&entry.value) < 40.0)
        .unwrap();

    assert_eq!(deleted, 2);
    assert_eq!(keys_of(&store), vec!["carol"]);
    assert_eq!(store.size(), 1);
}

#[test]
fn test_find_delete_without_matches() {
    let mut store = users();
    assert_eq!(store.find_delete(|_| false).unwrap(), 0);
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn test_for_each_visits_in_order() {
    let store = users();
    let mut visited = Vec::new();
    store
        .for_each(|value, index| visited.push((index, age(value))))
        .unwrap();

    assert_eq!(visited, vec![(0, 31.0), (1, 17.0), (2, 45.0)]);
}
