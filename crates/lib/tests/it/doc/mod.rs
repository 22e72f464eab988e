//! Document model integration tests
//!
//! Tests for Doc, Value and path handling used directly, without a store.

mod doc_tests;
mod path_tests;
