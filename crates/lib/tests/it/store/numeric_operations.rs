//! add/sub/increment/decrement.

use dotstore::doc::Value;

use crate::helpers::*;

#[test]
fn test_add_to_existing_number() {
    let mut store = test_store();
    store.set("n", 2).unwrap();

    assert_eq!(store.add("n", 3.0, false).unwrap(), 5.0);
    assert_eq!(store.get("n").unwrap(), Some(Value::from(5)));
}

#[test]
fn test_sub_clamps_to_zero_by_default() {
    let mut store = test_store();
    store.set("n", 2).unwrap();

    assert_eq!(store.sub("n", 5.0, false).unwrap(), 0.0);
    assert_eq!(store.get("n").unwrap(), Some(Value::from(0)));
}

#[test]
fn test_sub_allows_negative_when_asked() {
    let mut store = test_store();
    store.set("n", 2).unwrap();

    assert_eq!(store.sub("n", 5.0, true).unwrap(), -3.0);
    assert_eq!(store.get("n").unwrap(), Some(Value::from(-3)));
}

#[test]
fn test_results_below_one_collapse_to_zero() {
    let mut store = test_store();
    store.set("n", 1).unwrap();

    assert_eq!(store.sub("n", 0.5, false).unwrap(), 0.0);
    store.set("m", 1).unwrap();
    assert_eq!(store.sub("m", 0.5, true).unwrap(), 0.5);
}

#[test]
fn test_add_on_absent_starts_from_zero() {
    let mut store = test_store();
    assert_eq!(store.add("stats.visits", 4.0, false).unwrap(), 4.0);
    assert_eq!(store.get("stats.visits").unwrap(), Some(Value::from(4)));
}

#[test]
fn test_increment_and_decrement() {
    let mut store = test_store();
    store.increment("c").unwrap();
    store.increment("c").unwrap();
    assert_eq!(store.get("c").unwrap(), Some(Value::from(2)));

    store.decrement("c").unwrap();
    store.decrement("c").unwrap();
    store.decrement("c").unwrap();
    assert_eq!(store.get("c").unwrap(), Some(Value::from(0)));
}

#[test]
fn test_numeric_ops_reject_non_numbers() {
    let mut store = test_store();
    store.set("s", "5").unwrap();
    store.set("l", vec![1]).unwrap();

    assert!(store.add("s", 1.0, false).unwrap_err().is_type_error());
    assert!(store.sub("l", 1.0, false).unwrap_err().is_type_error());
    assert_eq!(store.get("s").unwrap(), Some(Value::from("5")));
}

#[test]
fn test_non_finite_amount_is_invalid_argument() {
    let mut store = test_store();
    store.set("n", 1).unwrap();

    assert!(store.add("n", f64::NAN, true).unwrap_err().is_invalid_argument());
    assert!(store.sub("n", f64::INFINITY, true).unwrap_err().is_invalid_argument());
    assert_eq!(store.get("n").unwrap(), Some(Value::from(1)));
}

#[test]
fn test_numeric_ops_leave_size_alone() {
    let mut store = test_store();
    store.set("n", 1).unwrap();
    store.add("n", 1.0, false).unwrap();
    store.add("other", 1.0, false).unwrap();
    assert_eq!(store.size(), 1);
}
