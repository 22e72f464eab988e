//! Store integration tests
//!
//! This module tests the Store engine against the provider selected by
//! TEST_PROVIDER. Tests are organized by operation family.

mod enumeration;
mod numeric_operations;
mod search_operations;
