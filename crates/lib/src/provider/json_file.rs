//! JSON file provider implementation
//!
//! Stores the document as a single JSON object in a file. Writes go to a
//! temporary file in the same directory which is then renamed over the target,
//! so a reader never observes a half-written file.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use super::{Provider, ProviderError};
use crate::Result;
use crate::doc::{Doc, Value};

/// A provider backed by a JSON file on disk.
///
/// A missing or empty file reads as an empty document. The file is created on
/// the first write.
///
/// # Example
///
/// ```no_run
/// use dotstore::{Store, provider::JsonFile};
///
/// let mut store = Store::open(JsonFile::new("settings.json").pretty(true));
/// store.set("ui.theme", "dark")?;
/// # Ok::<(), dotstore::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
    pretty: bool,
}

impl JsonFile {
    /// Creates a provider for the file at `path`. Compact output by default.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Enables or disables pretty-printed output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// The file this provider reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn io_error(&self, source: std::io::Error) -> ProviderError {
        ProviderError::FileIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl Provider for JsonFile {
    fn load(&self) -> Result<Doc> {
        if !self.path.exists() {
            tracing::trace!(path = %self.path.display(), "No file yet, loading empty document");
            return Ok(Doc::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if contents.trim().is_empty() {
            return Ok(Doc::new());
        }

        let value: Value =
            serde_json::from_str(&contents).map_err(|source| ProviderError::DeserializationFailed {
                path: self.path.clone(),
                source,
            })?;

        match value {
            Value::Map(doc) => {
                tracing::trace!(path = %self.path.display(), keys = doc.len(), "Loaded document");
                Ok(doc)
            }
            other => Err(ProviderError::InvalidRoot {
                path: self.path.clone(),
                actual: other.type_name().to_string(),
            }
            .into()),
        }
    }

    fn write(&self, doc: &Doc) -> Result<()> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(doc)
        } else {
            serde_json::to_vec(doc)
        }
        .map_err(|source| ProviderError::SerializationFailed {
            path: self.path.clone(),
            source,
        })?;

        let directory = self.directory();
        if !directory.exists() {
            tracing::debug!(directory = %directory.display(), "Creating directory for document");
            fs::create_dir_all(directory).map_err(|e| self.io_error(e))?;
        }

        let mut file = NamedTempFile::new_in(directory).map_err(|e| self.io_error(e))?;
        file.write_all(&encoded).map_err(|e| self.io_error(e))?;
        file.as_file().sync_all().map_err(|e| self.io_error(e))?;
        file.persist(&self.path)
            .map_err(|e| ProviderError::Persist {
                path: self.path.clone(),
                source: e.error,
            })?;

        tracing::trace!(path = %self.path.display(), bytes = encoded.len(), "Wrote document");
        Ok(())
    }
}
