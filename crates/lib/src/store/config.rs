//! Store configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Store`](super::Store).
///
/// # Example
///
/// ```
/// use dotstore::store::StoreConfig;
///
/// // Unlimited (default)
/// let config = StoreConfig::default();
/// assert_eq!(config.soft_capacity, 0);
///
/// let config = StoreConfig::default().with_soft_capacity(100);
/// assert!(config.is_capped());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of `set` operations a store accepts; 0 means unlimited.
    ///
    /// Counted per store instance, not derived from the document's contents.
    pub soft_capacity: usize,
}

impl StoreConfig {
    /// Sets the soft capacity.
    pub fn with_soft_capacity(mut self, soft_capacity: usize) -> Self {
        self.soft_capacity = soft_capacity;
        self
    }

    /// Returns true if a soft capacity is in effect.
    pub fn is_capped(&self) -> bool {
        self.soft_capacity > 0
    }
}
