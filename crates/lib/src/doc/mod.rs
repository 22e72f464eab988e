//! Document tree and path-addressed access.
//!
//! This module provides the in-memory document model used by the store:
//!
//! - [`Doc`] - an insertion-ordered mapping from keys to [`Value`]s; the root
//!   of every document is a `Doc`
//! - [`Value`] - the closed set of storable values
//! - [`PathBuf`] - a validated dotted path such as `"user.profile.name"`
//!
//! # Usage
//!
//! ```
//! use dotstore::doc::{Doc, PathBuf, Value};
//!
//! let mut doc = Doc::new();
//! let path: PathBuf = "user.profile.name".parse()?;
//! doc.set(&path, "Alice")?;
//!
//! assert_eq!(doc.get(&path), Some(&Value::from("Alice")));
//! assert!(doc.get_key("user").unwrap().is_map());
//! # Ok::<(), dotstore::Error>(())
//! ```
//!
//! # Traversal rules
//!
//! Reads never fail: a missing key, an out-of-range or non-numeric list index,
//! or a leaf value met before the path is exhausted all read as absent.
//!
//! Writes create every missing intermediate container as a mapping. A leaf
//! value that sits where a container is needed is replaced by an empty mapping,
//! discarding the leaf. A list is descended into when the segment is an
//! in-bounds index; at the final segment an index equal to the list length
//! appends. Any other segment against a list fails with a [`DocError`] and
//! leaves the document unchanged.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod errors;
pub mod path;
pub mod value;

pub use errors::DocError;
pub use path::{PathBuf, PathError};
pub use value::Value;

use path::parse_index;

/// An insertion-ordered mapping of string keys to values.
///
/// Key order is observable: iteration yields keys in the order they were
/// first inserted. Replacing the value of an existing key keeps its position;
/// removing a key and inserting it again moves it to the end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Doc {
    children: IndexMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    /// Returns true if the document has no keys.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of top-level keys.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if a top-level key exists.
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.children.contains_key(key.as_ref())
    }

    /// Gets a top-level value by key. The key is not interpreted as a path.
    pub fn get_key(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.children.get(key.as_ref())
    }

    /// Gets a mutable top-level value by key.
    pub fn get_key_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.children.get_mut(key.as_ref())
    }

    /// Gets the key/value pair at a position in insertion order.
    pub fn get_index(&self, index: usize) -> Option<(&String, &Value)> {
        self.children.get_index(index)
    }

    /// Inserts a top-level key, returning the previous value.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a top-level key, preserving the order of the remaining keys.
    pub fn remove_key(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.children.shift_remove(key.as_ref())
    }

    /// Builder-style insert of a top-level key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns an iterator over key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Returns a mutable iterator over key/value pairs in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.children.iter_mut()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Reads the value at a path. Never fails; see the module docs.
    pub fn get(&self, path: &PathBuf) -> Option<&Value> {
        let mut current = self.children.get(path.first())?;
        for segment in path.segments().skip(1) {
            current = child(current, segment)?;
        }
        Some(current)
    }

    /// Reads a mutable reference to the value at a path.
    pub fn get_mut(&mut self, path: &PathBuf) -> Option<&mut Value> {
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut current = self.children.get_mut(first)?;
        for segment in segments {
            current = child_mut(current, segment)?;
        }
        Some(current)
    }

    /// Returns true if the path resolves to a value, including an explicit null.
    pub fn has(&self, path: &PathBuf) -> bool {
        self.get(path).is_some()
    }

    /// Writes a value at a path, returning the value it replaced.
    ///
    /// Missing intermediate containers are created as mappings and leaf values
    /// in the way are overwritten; see the module docs.
    ///
    /// # Errors
    /// [`DocError`] if the path meets a list with a segment that is not an
    /// in-bounds index. The document is unchanged in that case.
    pub fn set(
        &mut self,
        path: &PathBuf,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, DocError> {
        let value = value.into();
        if path.is_top_level() {
            return Ok(self.insert(path.first(), value));
        }

        let mut slot = self
            .children
            .entry(path.first().to_string())
            .or_insert_with(|| Value::Map(Doc::new()));
        for (depth, segment) in path.parent_segments().iter().enumerate().skip(1) {
            slot = descend(slot, segment).map_err(|len| list_error(path, depth, segment, len))?;
        }

        let last = path.len() - 1;
        assign(slot, path.last(), value).map_err(|len| list_error(path, last, path.last(), len))
    }

    /// Removes the value at a path, returning it if something was removed.
    ///
    /// Containers left empty by the removal are kept.
    pub fn unset(&mut self, path: &PathBuf) -> Option<Value> {
        let Some(parent) = path.parent() else {
            return self.remove_key(path.first());
        };

        match self.get_mut(&parent)? {
            Value::Map(doc) => doc.remove_key(path.last()),
            Value::List(list) => {
                let index = parse_index(path.last()).filter(|i| *i < list.len())?;
                Some(list.remove(index))
            }
            _ => None,
        }
    }

    /// Converts to a compact JSON string.
    pub fn to_json_string(&self) -> String {
        Value::Map(self.clone()).to_json_string()
    }
}

/// Looks up one segment inside a container value.
fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Map(doc) => doc.get_key(segment),
        Value::List(list) => parse_index(segment).and_then(|index| list.get(index)),
        _ => None,
    }
}

fn child_mut<'a>(value: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match value {
        Value::Map(doc) => doc.get_key_mut(segment),
        Value::List(list) => parse_index(segment).and_then(|index| list.get_mut(index)),
        _ => None,
    }
}

/// Replaces anything that is not a mapping with an empty one.
fn ensure_map(slot: &mut Value) -> &mut Doc {
    if !slot.is_map() {
        *slot = Value::Map(Doc::new());
    }
    match slot {
        Value::Map(doc) => doc,
        _ => unreachable!("slot was just replaced with a map"),
    }
}

/// Steps into `segment` of the container at `slot`, creating it if needed.
///
/// Fails with the list length if `slot` is a list and `segment` is not an
/// in-bounds index.
fn descend<'a>(slot: &'a mut Value, segment: &str) -> Result<&'a mut Value, usize> {
    match slot {
        Value::List(list) => {
            let len = list.len();
            match parse_index(segment) {
                Some(index) if index < len => Ok(&mut list[index]),
                _ => Err(len),
            }
        }
        other => Ok(ensure_map(other)
            .children
            .entry(segment.to_string())
            .or_insert_with(|| Value::Map(Doc::new()))),
    }
}

/// Stores `value` under the final `segment` of the container at `slot`.
///
/// An index equal to the length of a list appends.
fn assign(slot: &mut Value, segment: &str, value: Value) -> Result<Option<Value>, usize> {
    match slot {
        Value::List(list) => {
            let len = list.len();
            match parse_index(segment) {
                Some(index) if index == len => {
                    list.push(value);
                    Ok(None)
                }
                Some(index) if index < len => Ok(Some(std::mem::replace(&mut list[index], value))),
                _ => Err(len),
            }
        }
        other => Ok(ensure_map(other).insert(segment, value)),
    }
}

/// Builds the error for `segment`, found at position `depth` of `path`,
/// addressing a list of length `len`.
fn list_error(path: &PathBuf, depth: usize, segment: &str, len: usize) -> DocError {
    let list_path = path.segments().take(depth).collect::<Vec<_>>().join(".");
    match parse_index(segment) {
        Some(index) => DocError::IndexOutOfRange {
            path: list_path,
            index,
            len,
        },
        None => DocError::NotAnIndex {
            path: list_path,
            segment: segment.to_string(),
        },
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl<K, V> FromIterator<(K, V)> for Doc
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut doc = Doc::new();
        for (key, value) in iter {
            doc.insert(key, value);
        }
        doc
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Doc {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
