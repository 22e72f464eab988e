//! Value types returned by store queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::doc::Value;

/// A top-level key of the document together with everything stored under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The top-level key
    pub key: String,
    /// The value stored under the key, including any nested containers
    pub value: Value,
}

impl Entry {
    /// Creates an entry from anything convertible into a key and a value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<(String, Value)> for Entry {
    fn from((key, value): (String, Value)) -> Self {
        Self { key, value }
    }
}

impl From<Entry> for (String, Value) {
    fn from(entry: Entry) -> Self {
        (entry.key, entry.value)
    }
}

/// Coarse type classification of the value at a path.
///
/// Numbers are split by whether they are usable: `NaN`, `finite`, or plain
/// `number` for the infinities. The `Display` form is the lowercase tag name
/// (`NaN` keeps its capitalization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// A list
    Array,
    /// A number that is NaN
    NaN,
    /// A finite number
    Finite,
    /// An infinite number
    Number,
    /// A text string
    String,
    /// A boolean
    Boolean,
    /// An explicit null
    Null,
    /// A nested mapping
    Object,
    /// Nothing is stored at the path
    Undefined,
}

impl TypeTag {
    /// Classifies an optional value.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => TypeTag::Undefined,
            Some(Value::List(_)) => TypeTag::Array,
            Some(Value::Number(n)) if n.is_nan() => TypeTag::NaN,
            Some(Value::Number(n)) if n.is_finite() => TypeTag::Finite,
            Some(Value::Number(_)) => TypeTag::Number,
            Some(Value::Text(_)) => TypeTag::String,
            Some(Value::Bool(_)) => TypeTag::Boolean,
            Some(Value::Null) => TypeTag::Null,
            Some(Value::Map(_)) => TypeTag::Object,
        }
    }

    /// The tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Array => "array",
            TypeTag::NaN => "NaN",
            TypeTag::Finite => "finite",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Boolean => "boolean",
            TypeTag::Null => "null",
            TypeTag::Object => "object",
            TypeTag::Undefined => "undefined",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
