//! Provider error types.
//!
//! This module defines structured error types for loading and persisting
//! documents, providing context about which file or lock was involved.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while a provider loads or writes a document.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider's internal lock was poisoned by a panicking writer.
    #[error("Provider lock poisoned")]
    LockPoisoned,

    /// Reading or writing the backing file failed.
    #[error("File I/O error on {}", path.display())]
    FileIo {
        /// The file being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold valid JSON.
    #[error("Failed to decode {}", path.display())]
    DeserializationFailed {
        /// The file being decoded
        path: PathBuf,
        /// The underlying decoding error
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the document failed.
    #[error("Failed to encode document for {}", path.display())]
    SerializationFailed {
        /// The file being written
        path: PathBuf,
        /// The underlying encoding error
        #[source]
        source: serde_json::Error,
    },

    /// The backing file holds valid data whose root is not a mapping.
    #[error("Document root in {} must be an object, found {actual}", path.display())]
    InvalidRoot {
        /// The file being decoded
        path: PathBuf,
        /// Type name of the root that was found
        actual: String,
    },

    /// Replacing the backing file with the freshly written temporary failed.
    #[error("Failed to persist {}", path.display())]
    Persist {
        /// The file being replaced
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ProviderError {
    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            ProviderError::FileIo { .. } | ProviderError::Persist { .. }
        )
    }

    /// Check if this error indicates the stored data could not be understood.
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            ProviderError::DeserializationFailed { .. } | ProviderError::InvalidRoot { .. }
        )
    }

    /// Get the file path if this error concerns a file.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ProviderError::FileIo { path, .. }
            | ProviderError::DeserializationFailed { path, .. }
            | ProviderError::SerializationFailed { path, .. }
            | ProviderError::InvalidRoot { path, .. }
            | ProviderError::Persist { path, .. } => Some(path),
            ProviderError::LockPoisoned => None,
        }
    }
}

// Conversion from ProviderError to the main Error type
impl From<ProviderError> for crate::Error {
    fn from(err: ProviderError) -> Self {
        crate::Error::Provider(err)
    }
}
