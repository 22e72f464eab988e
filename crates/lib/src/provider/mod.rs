//! Persistence providers for dotstore documents.
//!
//! This module provides the [`Provider`] trait and its implementations.
//!
//! A provider owns the document between store operations. It knows how to
//! produce the whole current tree and how to replace the whole stored tree;
//! it never sees paths or partial updates. This keeps the store independent of
//! the storage format, so any backend that can load and write a full [`Doc`]
//! can be plugged in.

use crate::Result;
use crate::doc::Doc;

pub mod errors;
mod in_memory;
mod json_file;

pub use errors::ProviderError;
pub use in_memory::InMemory;
pub use json_file::JsonFile;

/// Storage abstraction for a single document.
///
/// Implementations must be `Send` and `Sync` so a store can be moved across
/// threads; they guard their own state.
pub trait Provider: Send + Sync {
    /// Loads the full current document.
    ///
    /// # Returns
    /// The stored document, or an empty document if nothing has been written yet.
    fn load(&self) -> Result<Doc>;

    /// Persists the full document, replacing all prior content.
    ///
    /// A failed write must leave the previously stored document intact for
    /// subsequent calls to [`load`](Provider::load).
    fn write(&self, doc: &Doc) -> Result<()>;
}

impl<P: Provider + ?Sized> Provider for Box<P> {
    fn load(&self) -> Result<Doc> {
        (**self).load()
    }

    fn write(&self, doc: &Doc) -> Result<()> {
        (**self).write(doc)
    }
}

impl<P: Provider + ?Sized> Provider for std::sync::Arc<P> {
    fn load(&self) -> Result<Doc> {
        (**self).load()
    }

    fn write(&self, doc: &Doc) -> Result<()> {
        (**self).write(doc)
    }
}
