use std::sync::Arc;

use dotstore::{
    Store,
    doc::Value,
    provider::{InMemory, Provider},
};

#[test]
fn test_stores_sharing_a_provider_see_each_others_writes() {
    let provider = Arc::new(InMemory::new());
    let mut first = Store::open(provider.clone());
    let second = Store::open(provider.clone());

    first.set("shared.flag", true).unwrap();
    assert_eq!(second.get("shared.flag").unwrap(), Some(Value::Bool(true)));
}

#[test]
fn test_last_write_wins_between_stores() {
    let provider = Arc::new(InMemory::new());
    let mut first = Store::open(provider.clone());
    let mut second = Store::open(provider.clone());

    first.set("value", 1).unwrap();
    second.set("value", 2).unwrap();

    assert_eq!(first.get("value").unwrap(), Some(Value::from(2)));
    // Each store counts only its own sets
    assert_eq!(first.size(), 1);
    assert_eq!(second.size(), 1);
}

#[test]
fn test_external_changes_are_visible_without_reconciling_size() {
    let provider = Arc::new(InMemory::new());
    let store = Store::open(provider.clone());

    let doc = provider.load().unwrap().with("external", "yes");
    provider.write(&doc).unwrap();

    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.size(), 0);
}
