//! In-memory provider implementation
//!
//! Keeps the document in process memory. Suitable for testing, or for callers
//! that handle persistence themselves via [`InMemory::snapshot`].

use std::sync::RwLock;

use super::{Provider, ProviderError};
use crate::Result;
use crate::doc::Doc;

/// A provider that holds the document behind a `RwLock`.
#[derive(Debug, Default)]
pub struct InMemory {
    doc: RwLock<Doc>,
}

impl InMemory {
    /// Creates a new provider holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider seeded with an existing document.
    pub fn with_doc(doc: Doc) -> Self {
        Self {
            doc: RwLock::new(doc),
        }
    }

    /// Returns a copy of the currently stored document.
    pub fn snapshot(&self) -> Result<Doc> {
        self.load()
    }
}

impl Provider for InMemory {
    fn load(&self) -> Result<Doc> {
        let doc = self.doc.read().map_err(|_| ProviderError::LockPoisoned)?;
        tracing::trace!(keys = doc.len(), "Loaded in-memory document");
        Ok(doc.clone())
    }

    fn write(&self, doc: &Doc) -> Result<()> {
        let mut stored = self.doc.write().map_err(|_| ProviderError::LockPoisoned)?;
        *stored = doc.clone();
        tracing::trace!(keys = doc.len(), "Wrote in-memory document");
        Ok(())
    }
}
