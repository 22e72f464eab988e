//! Error types for store operations.
//!
//! Path validation failures are reported separately through
//! [`PathError`](crate::doc::PathError); everything the store itself rejects
//! is a [`StoreError`].

use thiserror::Error;

/// Errors raised by [`Store`](super::Store) operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// The soft capacity has been reached; no further `set` is accepted.
    #[error("Store capacity of {capacity} set operations exceeded")]
    CapacityExceeded { capacity: usize },

    /// An entry index at or beyond the number of entries.
    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// The value at a path has the wrong type for the operation.
    #[error("Type mismatch at '{path}': expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// The operation requires a value at a path where there is none.
    #[error("No value at '{path}'")]
    NotFound { path: String },

    /// An argument the type system cannot rule out, such as a non-finite amount.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl StoreError {
    /// Check if this error indicates a value was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, StoreError::TypeMismatch { .. })
    }

    /// Check if this error is the soft capacity being reached
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, StoreError::CapacityExceeded { .. })
    }

    /// Check if this error is an entry index out of range
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, StoreError::IndexOutOfRange { .. })
    }

    /// Check if this error is an invalid argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StoreError::InvalidArgument { .. })
    }

    /// Get the path if this error concerns a specific path
    pub fn path(&self) -> Option<&str> {
        match self {
            StoreError::TypeMismatch { path, .. } | StoreError::NotFound { path } => Some(path),
            _ => None,
        }
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
