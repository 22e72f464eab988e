use std::fs;

use dotstore::{
    Store,
    doc::Value,
    provider::{JsonFile, Provider, ProviderError},
};

#[test]
fn test_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("db.json");

    {
        let mut store = Store::open(JsonFile::new(&file));
        store.set("nova.version", "1.0.0").unwrap();
        store.push("nova.tags", ["x", "y"]).unwrap();
    }

    let store = Store::open(JsonFile::new(&file));
    assert_eq!(store.get("nova.version").unwrap(), Some(Value::from("1.0.0")));
    assert_eq!(
        store.get("nova.tags").unwrap(),
        Some(Value::from(vec!["x", "y"]))
    );
}

#[test]
fn test_file_contents_are_plain_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("db.json");

    let mut store = Store::open(JsonFile::new(&file));
    store.set("b", 1).unwrap();
    store.set("a.c", 2.5).unwrap();

    let contents = fs::read_to_string(&file).unwrap();
    assert_eq!(contents, r#"{"b":1,"a":{"c":2.5}}"#);
}

#[test]
fn test_pretty_output() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("db.json");

    let mut store = Store::open(JsonFile::new(&file).pretty(true));
    store.set("key", "value").unwrap();

    let contents = fs::read_to_string(&file).unwrap();
    assert!(contents.contains('\n'));
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["key"], "value");
}

#[test]
fn test_corrupt_file_reports_provider_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("db.json");
    fs::write(&file, "{not json").unwrap();

    let store = Store::open(JsonFile::new(&file));
    let err = store.get("anything").unwrap_err();
    assert!(err.is_provider_error());
    assert_eq!(err.module(), "provider");
    assert!(matches!(
        err,
        dotstore::Error::Provider(ProviderError::DeserializationFailed { .. })
    ));
}

#[test]
fn test_failed_mutation_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("db.json");

    let mut store = Store::open(JsonFile::new(&file));
    store.set("name", "text").unwrap();
    let before = fs::read_to_string(&file).unwrap();

    assert!(store.add("name", 1.0, false).unwrap_err().is_type_error());
    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn test_no_temporary_files_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    let provider = JsonFile::new(dir.path().join("db.json"));
    for _ in 0..3 {
        provider.write(&provider.load().unwrap().with("k", 1)).unwrap();
    }

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["db.json"]);
}
