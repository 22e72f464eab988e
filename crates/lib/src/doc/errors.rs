//! Error types for document writes.

use thiserror::Error;

/// Errors raised when writing into a [`Doc`](super::Doc).
///
/// Reads never fail. A write only fails when the path runs into an existing
/// list with a segment that does not address one of its slots; the list is
/// left as it was.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocError {
    /// A list was addressed with a segment that is not a numeric index.
    #[error("List at '{path}' cannot be addressed by '{segment}'")]
    NotAnIndex {
        /// Path of the list
        path: String,
        /// The offending segment
        segment: String,
    },

    /// A list index past the end of the list.
    #[error("Index {index} out of range for list of length {len} at '{path}'")]
    IndexOutOfRange {
        /// Path of the list
        path: String,
        index: usize,
        len: usize,
    },
}

impl DocError {
    /// Check if this error is a non-index segment used against a list
    pub fn is_type_error(&self) -> bool {
        matches!(self, DocError::NotAnIndex { .. })
    }

    /// Check if this error is a list index out of range
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, DocError::IndexOutOfRange { .. })
    }

    /// Path of the list the write ran into
    pub fn path(&self) -> &str {
        match self {
            DocError::NotAnIndex { path, .. } | DocError::IndexOutOfRange { path, .. } => path,
        }
    }
}

// Conversion from DocError to the main Error type
impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}
