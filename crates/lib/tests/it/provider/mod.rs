//! Provider integration tests
//!
//! Tests for the Provider trait implementations and for stores that share or
//! reopen the same backing storage.

mod json_file;
mod shared;
