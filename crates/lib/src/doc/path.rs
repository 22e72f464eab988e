//! Path types for hierarchical document access.
//!
//! A path addresses a value nested inside a [`Doc`](super::Doc) by naming one
//! key per nesting level, separated by dots: `"user.profile.name"`.
//!
//! The grammar is deliberately small:
//! - segments are separated by `.` and there is no escape for a literal dot
//! - a path has at least one segment
//! - no segment may be empty, so `""`, `".a"`, `"a."` and `"a..b"` are rejected
//! - there is no bracket syntax; a list element is addressed by a plain
//!   numeric segment (`"tags.0"`)
//!
//! # Usage
//!
//! ```rust
//! use dotstore::doc::PathBuf;
//!
//! let path: PathBuf = "user.profile.name".parse()?;
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.last(), "name");
//!
//! assert!("user..name".parse::<PathBuf>().is_err());
//! # Ok::<(), dotstore::doc::PathError>(())
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Error type for path validation failures.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty.
    #[error("Invalid path: path is empty")]
    Empty,

    /// One of the dot-separated segments was empty.
    #[error("Invalid path '{path}': segment {index} is empty")]
    EmptySegment {
        /// The rejected path string
        path: String,
        /// Zero-based position of the first empty segment
        index: usize,
    },
}

impl PathError {
    /// The rejected path string, if there was one.
    pub fn path(&self) -> Option<&str> {
        match self {
            PathError::Empty => None,
            PathError::EmptySegment { path, .. } => Some(path),
        }
    }
}

/// An owned, validated path.
///
/// Always holds at least one segment and none of its segments are empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathBuf {
    segments: Vec<String>,
}

impl PathBuf {
    /// Parses and validates a path string.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();
        for (index, segment) in input.split(SEPARATOR).enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment {
                    path: input.to_string(),
                    index,
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the number of segments. Never zero.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; a validated path has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first segment, i.e. the top-level key this path lives under.
    pub fn first(&self) -> &str {
        &self.segments[0]
    }

    /// The final segment, i.e. the key assigned or removed by a write.
    pub fn last(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// All segments except the last one.
    pub fn parent_segments(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Returns `true` if this path addresses a top-level key.
    pub fn is_top_level(&self) -> bool {
        self.segments.len() == 1
    }

    /// Returns the parent path, or `None` for a top-level path.
    pub fn parent(&self) -> Option<PathBuf> {
        if self.is_top_level() {
            None
        } else {
            Some(PathBuf {
                segments: self.parent_segments().to_vec(),
            })
        }
    }

    /// Appends one segment, returning a new path.
    pub fn join(&self, segment: &str) -> Result<PathBuf, PathError> {
        let suffix = PathBuf::parse(segment)?;
        let mut segments = self.segments.clone();
        segments.extend(suffix.segments);
        Ok(PathBuf { segments })
    }
}

impl FromStr for PathBuf {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathBuf::parse(s)
    }
}

impl TryFrom<&str> for PathBuf {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PathBuf::parse(s)
    }
}

impl TryFrom<String> for PathBuf {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PathBuf::parse(&s)
    }
}

impl TryFrom<&String> for PathBuf {
    type Error = PathError;

    fn try_from(s: &String) -> Result<Self, Self::Error> {
        PathBuf::parse(s)
    }
}

impl TryFrom<&PathBuf> for PathBuf {
    type Error = PathError;

    fn try_from(path: &PathBuf) -> Result<Self, Self::Error> {
        Ok(path.clone())
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Parses a list index segment.
///
/// Only plain decimal digits are accepted, so `"+1"` and `" 1"` are not indices.
pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
