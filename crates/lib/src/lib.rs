//!
//! dotstore: an embedded, path-addressable document store.
//! This library lets a caller read and write deeply nested values inside a single
//! JSON-like document using dotted paths, with persistence delegated to a pluggable provider.
//!
//! ## Core Concepts
//!
//! * **Values (`doc::Value`)**: A closed set of storable values: null, booleans, numbers, text, lists and nested mappings.
//! * **Documents (`doc::Doc`)**: An insertion-ordered mapping; the root of every store is one.
//! * **Paths (`doc::PathBuf`)**: Dot-separated key sequences such as `"user.profile.name"`, validated on parse.
//! * **Providers (`provider::Provider`)**: A pluggable storage layer that loads and writes the whole document.
//!     * **InMemory (`provider::InMemory`)**: Keeps the document in process memory.
//!     * **JsonFile (`provider::JsonFile`)**: Keeps the document in a JSON file, replaced atomically on write.
//! * **Store (`store::Store`)**: The engine. Every operation loads the document, works on it in memory and writes it back.
//!
//! ## Example
//!
//! ```
//! use dotstore::{Store, provider::InMemory};
//!
//! let mut store = Store::open(InMemory::new());
//! store.set("nova.version", "1.0.0")?;
//! store.push("nova.tags", ["x", "y", "z"])?;
//! store.pull("nova.tags", |value, _, _| *value == "y")?;
//!
//! assert_eq!(store.get("nova.version")?.unwrap(), "1.0.0");
//! assert_eq!(store.all(0)?.len(), 1);
//! # Ok::<(), dotstore::Error>(())
//! ```

pub mod doc;
pub mod provider;
pub mod store;

/// Re-export the `Store` struct for easier access.
pub use store::Store;

/// Result type used throughout the dotstore library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotstore library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Path validation errors from the doc module
    #[error(transparent)]
    Path(doc::PathError),

    /// Rejected document writes from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured provider errors from the provider module
    #[error(transparent)]
    Provider(provider::ProviderError),
}

// Conversion from PathError to the main Error type
impl From<doc::PathError> for Error {
    fn from(err: doc::PathError) -> Self {
        Error::Path(err)
    }
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) | Error::Doc(_) => "doc",
            Error::Store(_) => "store",
            Error::Provider(_) => "provider",
        }
    }

    /// Check if this error indicates a value was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a rejected path.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_type_error(),
            Error::Doc(doc_err) => doc_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is the soft capacity being reached.
    pub fn is_capacity_exceeded(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_capacity_exceeded(),
            _ => false,
        }
    }

    /// Check if this error is an entry or list index out of range.
    pub fn is_index_out_of_range(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_index_out_of_range(),
            Error::Doc(doc_err) => doc_err.is_index_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error is an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_invalid_argument(),
            _ => false,
        }
    }

    /// Check if this error came from the persistence layer.
    pub fn is_provider_error(&self) -> bool {
        matches!(self, Error::Provider(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Provider(provider_err) => provider_err.is_io_error(),
            _ => false,
        }
    }
}
