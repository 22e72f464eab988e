//! The path-addressed document store.
//!
//! [`Store`] reads and writes values inside a single document using dotted
//! paths, delegating persistence to a [`Provider`]. Every operation loads the
//! whole document from the provider, works on it in memory and, if it changed
//! anything, writes the whole document back. Nothing is cached between calls.
//!
//! # Usage
//!
//! ```
//! use dotstore::{Store, doc::Value, provider::InMemory};
//!
//! let mut store = Store::open(InMemory::new());
//! store.set("nova.version", "1.0.0")?;
//!
//! assert_eq!(store.get("nova.version")?, Some(Value::from("1.0.0")));
//! assert_eq!(store.key_at(0)?, "nova");
//! # Ok::<(), dotstore::Error>(())
//! ```
//!
//! # Concurrency
//!
//! There is no locking around the load/write pair. Two stores sharing a
//! backend race with last-write-wins semantics; callers needing atomic
//! multi-step updates must serialize their own calls.

use std::fmt;

use tracing::{debug, warn};

use crate::Result;
use crate::doc::{Doc, PathBuf, Value};
use crate::provider::Provider;

mod config;
pub mod errors;
mod types;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use types::{Entry, TypeTag};

/// An embedded document store addressed by dotted paths.
///
/// Besides the provider the store keeps one piece of state: an advisory size
/// counter, incremented by every successful [`set`](Store::set) and
/// decremented by every removal. It only enforces
/// [`StoreConfig::soft_capacity`] and is never reconciled with the actual
/// contents of the document, so it drifts after deep-path writes or external
/// changes to the backing storage.
pub struct Store {
    provider: Box<dyn Provider>,
    config: StoreConfig,
    size: usize,
}

impl Store {
    /// Opens a store over `provider` with the default configuration.
    pub fn open(provider: impl Provider + 'static) -> Self {
        Self::with_config(provider, StoreConfig::default())
    }

    /// Opens a store over `provider` with an explicit configuration.
    pub fn with_config(provider: impl Provider + 'static, config: StoreConfig) -> Self {
        Self {
            provider: Box::new(provider),
            config,
            size: 0,
        }
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The provider backing this store.
    pub fn provider(&self) -> &dyn Provider {
        self.provider.as_ref()
    }

    /// Current value of the advisory size counter.
    pub fn size(&self) -> usize {
        self.size
    }

    fn check_capacity(&self, size: usize) -> Result<()> {
        if self.config.is_capped() && size >= self.config.soft_capacity {
            warn!(
                capacity = self.config.soft_capacity,
                size, "Rejecting set: soft capacity reached"
            );
            return Err(StoreError::CapacityExceeded {
                capacity: self.config.soft_capacity,
            }
            .into());
        }
        Ok(())
    }

    // ===== Core path operations =====

    /// Writes `value` at `path`, creating intermediate mappings as needed.
    ///
    /// # Errors
    /// - `InvalidPath` if `path` is empty or has an empty segment
    /// - [`StoreError::CapacityExceeded`] if the soft capacity is reached
    /// - [`DocError`](crate::doc::DocError) if `path` runs into a list with a
    ///   segment that is not an in-bounds index; the list is left intact
    pub fn set(&mut self, path: impl AsRef<str>, value: impl Into<Value>) -> Result<()> {
        let path = parse_path(path)?;
        let mut doc = self.provider.load()?;
        self.set_in(&mut doc, &path, value.into())
    }

    /// Writes `value` into an already loaded `doc`, persists it and counts the set.
    fn set_in(&mut self, doc: &mut Doc, path: &PathBuf, value: Value) -> Result<()> {
        self.check_capacity(self.size)?;

        doc.set(path, value)?;
        self.provider.write(doc)?;

        self.size += 1;
        debug!(path = %path, size = self.size, "Set value");
        Ok(())
    }

    /// Reads the value at `path`, or `None` if nothing is stored there.
    pub fn get(&self, path: impl AsRef<str>) -> Result<Option<Value>> {
        let path = parse_path(path)?;
        let doc = self.provider.load()?;
        Ok(doc.get(&path).cloned())
    }

    /// Returns true if a value, including an explicit null, is stored at `path`.
    pub fn has(&self, path: impl AsRef<str>) -> Result<bool> {
        let path = parse_path(path)?;
        let doc = self.provider.load()?;
        Ok(doc.has(&path))
    }

    /// Alias for [`has`](Store::has).
    pub fn exists(&self, path: impl AsRef<str>) -> Result<bool> {
        self.has(path)
    }

    /// Replaces the value at `path`, or sets it if absent.
    ///
    /// Replacing an existing value counts as a removal followed by a set, so
    /// the size counter ends where it started. The key keeps its position.
    pub fn update(&mut self, path: impl AsRef<str>, value: impl Into<Value>) -> Result<()> {
        let path = parse_path(path)?;
        let mut doc = self.provider.load()?;
        if !doc.has(&path) {
            return self.set_in(&mut doc, &path, value.into());
        }

        let size = self.size.saturating_sub(1);
        self.check_capacity(size)?;

        doc.set(&path, value)?;
        self.provider.write(&doc)?;

        self.size = size + 1;
        debug!(path = %path, "Updated value");
        Ok(())
    }

    /// Removes the value at `path`, returning whether anything was removed.
    ///
    /// Intermediate containers left empty are kept.
    pub fn del(&mut self, path: impl AsRef<str>) -> Result<bool> {
        let path = parse_path(path)?;
        let mut doc = self.provider.load()?;
        if doc.unset(&path).is_none() {
            debug!(path = %path, "Nothing to delete");
            return Ok(false);
        }

        self.provider.write(&doc)?;
        self.size = self.size.saturating_sub(1);
        debug!(path = %path, size = self.size, "Deleted value");
        Ok(true)
    }

    /// Writes an empty document and resets the size counter.
    pub fn clear(&mut self) -> Result<()> {
        self.provider.write(&Doc::new())?;
        self.size = 0;
        debug!("Cleared store");
        Ok(())
    }

    // ===== Enumeration =====

    /// Returns the top-level entries in insertion order.
    ///
    /// A `limit` of 0 returns every entry; otherwise at most `limit` entries.
    pub fn all(&self, limit: usize) -> Result<Vec<Entry>> {
        let doc = self.provider.load()?;
        let limit = if limit > 0 { limit } else { usize::MAX };
        Ok(doc.into_iter().take(limit).map(Entry::from).collect())
    }

    /// The top-level keys in insertion order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let doc = self.provider.load()?;
        Ok(doc.keys().cloned().collect())
    }

    /// The top-level values in insertion order.
    pub fn values(&self) -> Result<Vec<Value>> {
        let doc = self.provider.load()?;
        Ok(doc.into_iter().map(|(_, value)| value).collect())
    }

    /// The actual number of top-level entries, unlike [`size`](Store::size).
    pub fn count(&self) -> Result<usize> {
        Ok(self.provider.load()?.len())
    }

    fn entry_at(&self, index: usize) -> Result<Entry> {
        let mut entries = self.all(0)?;
        let len = entries.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len }.into());
        }
        Ok(entries.swap_remove(index))
    }

    /// The key of the `index`-th entry in [`all`](Store::all) order.
    ///
    /// # Errors
    /// [`StoreError::IndexOutOfRange`] if `index` is at or past the entry count.
    pub fn key_at(&self, index: usize) -> Result<String> {
        Ok(self.entry_at(index)?.key)
    }

    /// The value of the `index`-th entry in [`all`](Store::all) order.
    ///
    /// # Errors
    /// [`StoreError::IndexOutOfRange`] if `index` is at or past the entry count.
    pub fn value_at(&self, index: usize) -> Result<Value> {
        Ok(self.entry_at(index)?.value)
    }

    /// Rebuilds the document from its entries.
    pub fn to_object(&self) -> Result<Doc> {
        Ok(self.all(0)?.into_iter().map(<(String, Value)>::from).collect())
    }

    // ===== Search and iteration =====

    /// Returns the top-level values matching `predicate(value, index)`, in order.
    pub fn filter<F>(&self, mut predicate: F) -> Result<Vec<Value>>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        Ok(self
            .values()?
            .into_iter()
            .enumerate()
            .filter(|(index, value)| predicate(value, *index))
            .map(|(_, value)| value)
            .collect())
    }

    /// Returns the first top-level value matching `predicate(value, index)`.
    pub fn find<F>(&self, mut predicate: F) -> Result<Option<Value>>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        Ok(self
            .values()?
            .into_iter()
            .enumerate()
            .find(|(index, value)| predicate(value, *index))
            .map(|(_, value)| value))
    }

    /// Replaces the value of every entry matching `predicate` with `new_value`.
    ///
    /// Matching entries keep their positions. Returns the number replaced.
    pub fn find_update<F>(&mut self, new_value: impl Into<Value>, mut predicate: F) -> Result<usize>
    where
        F: FnMut(&Entry) -> bool,
    {
        let new_value = new_value.into();
        let mut doc = self.provider.load()?;
        let matched = matching_keys(&doc, &mut predicate);
        if matched.is_empty() {
            return Ok(0);
        }

        for key in &matched {
            doc.insert(key.as_str(), new_value.clone());
        }
        self.provider.write(&doc)?;

        debug!(count = matched.len(), "Updated matching entries");
        Ok(matched.len())
    }

    /// Deletes every entry matching `predicate`. Returns the number deleted.
    pub fn find_delete<F>(&mut self, mut predicate: F) -> Result<usize>
    where
        F: FnMut(&Entry) -> bool,
    {
        let mut doc = self.provider.load()?;
        let matched = matching_keys(&doc, &mut predicate);
        if matched.is_empty() {
            return Ok(0);
        }

        for key in &matched {
            doc.remove_key(key);
        }
        self.provider.write(&doc)?;

        self.size = self.size.saturating_sub(matched.len());
        debug!(count = matched.len(), size = self.size, "Deleted matching entries");
        Ok(matched.len())
    }

    /// Calls `visitor(value, index)` for every top-level value, in order.
    pub fn for_each<F>(&self, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Value, usize),
    {
        for (index, value) in self.values()?.iter().enumerate() {
            visitor(value, index);
        }
        Ok(())
    }

    // ===== List operations =====

    /// Sets `path` to a list of exactly `values`.
    ///
    /// Any list already stored there is replaced, not extended; use
    /// [`append`](Store::append) to add to the end of an existing list.
    ///
    /// # Errors
    /// [`StoreError::TypeMismatch`] if a non-list value is stored at `path`.
    pub fn push<I>(&mut self, path: impl AsRef<str>, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let path = parse_path(path)?;
        let mut doc = self.provider.load()?;
        if let Some(existing) = doc.get(&path) {
            expect_list(&path, existing)?;
        }

        let list: Vec<Value> = values.into_iter().map(Into::into).collect();
        debug!(path = %path, len = list.len(), "Replacing list");
        doc.set(&path, Value::List(list))?;
        self.provider.write(&doc)
    }

    /// Appends `values` to the list at `path`, creating the list if absent.
    ///
    /// Returns the new length of the list.
    ///
    /// # Errors
    /// [`StoreError::TypeMismatch`] if a non-list value is stored at `path`.
    pub fn append<I>(&mut self, path: impl AsRef<str>, values: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let path = parse_path(path)?;
        let mut doc = self.provider.load()?;
        let mut list = match doc.get(&path) {
            Some(existing) => expect_list(&path, existing)?.to_vec(),
            None => Vec::new(),
        };

        list.extend(values.into_iter().map(Into::into));
        let len = list.len();
        doc.set(&path, Value::List(list))?;
        self.provider.write(&doc)?;

        debug!(path = %path, len, "Appended to list");
        Ok(len)
    }

    /// Removes every element of the list at `path` for which
    /// `predicate(value, index, list)` is true. Returns the number removed.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] if nothing is stored at `path`
    /// - [`StoreError::TypeMismatch`] if the value at `path` is not a list
    pub fn pull<F>(&mut self, path: impl AsRef<str>, mut predicate: F) -> Result<usize>
    where
        F: FnMut(&Value, usize, &[Value]) -> bool,
    {
        let path = parse_path(path)?;
        let mut doc = self.provider.load()?;
        let list = match doc.get(&path) {
            Some(existing) => expect_list(&path, existing)?,
            None => {
                return Err(StoreError::NotFound {
                    path: path.to_string(),
                }
                .into());
            }
        };

        let kept: Vec<Value> = list
            .iter()
            .enumerate()
            .filter(|(index, value)| !predicate(value, *index, list))
            .map(|(_, value)| value.clone())
            .collect();
        let removed = list.len() - kept.len();

        doc.set(&path, Value::List(kept))?;
        self.provider.write(&doc)?;

        debug!(path = %path, removed, "Pulled from list");
        Ok(removed)
    }

    // ===== Numeric operations =====

    /// Adds `amount` to the number at `path` and returns the stored result.
    ///
    /// An absent value counts as 0. Unless `allow_negative` is set, any result
    /// below 1 is stored as 0.
    ///
    /// # Errors
    /// - [`StoreError::TypeMismatch`] if the value at `path` is not a number
    /// - [`StoreError::InvalidArgument`] if `amount` is not finite
    pub fn add(&mut self, path: impl AsRef<str>, amount: f64, allow_negative: bool) -> Result<f64> {
        self.accumulate(path, amount, allow_negative)
    }

    /// Subtracts `amount` from the number at `path`; see [`add`](Store::add).
    pub fn sub(&mut self, path: impl AsRef<str>, amount: f64, allow_negative: bool) -> Result<f64> {
        self.accumulate(path, -amount, allow_negative)
    }

    /// Adds 1, clamping at 0.
    pub fn increment(&mut self, path: impl AsRef<str>) -> Result<f64> {
        self.add(path, 1.0, false)
    }

    /// Subtracts 1, clamping at 0.
    pub fn decrement(&mut self, path: impl AsRef<str>) -> Result<f64> {
        self.sub(path, 1.0, false)
    }

    fn accumulate(
        &mut self,
        path: impl AsRef<str>,
        delta: f64,
        allow_negative: bool,
    ) -> Result<f64> {
        let path = parse_path(path)?;
        if !delta.is_finite() {
            return Err(StoreError::InvalidArgument {
                reason: format!("amount must be a finite number, got {delta}"),
            }
            .into());
        }

        let mut doc = self.provider.load()?;
        let current = match doc.get(&path) {
            None => 0.0,
            Some(Value::Number(n)) => *n,
            Some(other) => {
                return Err(StoreError::TypeMismatch {
                    path: path.to_string(),
                    expected: "number".to_string(),
                    actual: other.type_name().to_string(),
                }
                .into());
            }
        };

        let mut result = current + delta;
        if !allow_negative && result < 1.0 {
            result = 0.0;
        }

        doc.set(&path, result)?;
        self.provider.write(&doc)?;

        debug!(path = %path, current, result, "Accumulated number");
        Ok(result)
    }

    // ===== Introspection =====

    /// Classifies the value at `path`; see [`TypeTag`].
    pub fn type_of(&self, path: impl AsRef<str>) -> Result<TypeTag> {
        let path = parse_path(path)?;
        let doc = self.provider.load()?;
        Ok(TypeTag::of(doc.get(&path)))
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.config)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

fn parse_path(path: impl AsRef<str>) -> Result<PathBuf> {
    Ok(PathBuf::parse(path.as_ref())?)
}

fn expect_list<'a>(path: &PathBuf, value: &'a Value) -> Result<&'a [Value]> {
    value.as_list().ok_or_else(|| {
        StoreError::TypeMismatch {
            path: path.to_string(),
            expected: "list".to_string(),
            actual: value.type_name().to_string(),
        }
        .into()
    })
}

fn matching_keys<F>(doc: &Doc, predicate: &mut F) -> Vec<String>
where
    F: FnMut(&Entry) -> bool,
{
    doc.iter()
        .map(|(key, value)| Entry::new(key.as_str(), value.clone()))
        .filter(|entry| predicate(entry))
        .map(|entry| entry.key)
        .collect()
}
