//! Per-agent key-value store
//!
//! A [`Store`] is the blackboard of a single agent: string keys mapped to
//! opaque [`Value`]s. It is a bare map. Protection, argument shapes and
//! output handling belong to the actions layered on top of it.
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Exclusively owned by its agent; mutation needs `&mut self`
//! - Iteration order is unspecified and must not be relied upon

use blackboard_core::Value;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Key-value blackboard owned by one agent
///
/// # Example
///
/// ```
/// use blackboard_core::Value;
/// use blackboard_storage::Store;
///
/// let mut store = Store::new();
/// store.put("answer", Value::Int(42));
/// assert_eq!(store.get("answer"), Some(&Value::Int(42)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    data: FxHashMap<String, Value>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
        }
    }

    /// Create a store with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Get the value stored under `key`
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Store `value` under `key`, returning the value it replaced
    ///
    /// Always overwrites. Deciding whether a key may be written is the
    /// caller's job.
    #[inline]
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    /// Remove `key`, returning its value if it was present
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Check if a key exists
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over keys in unspecified order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.keys().map(String::as_str)
    }

    /// Iterate over values in unspecified order
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.data.values()
    }

    /// Iterate over entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keep only the entries whose key satisfies `keep`
    ///
    /// `keep` is called exactly once per key. Returns the number of
    /// entries removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.data.len();
        self.data.retain(|k, _| keep(k));
        let removed = before - self.data.len();
        trace!(removed, remaining = self.data.len(), "store retain");
        removed
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        trace!(removed = self.data.len(), "store clear");
        self.data.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for Store
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Store::new();
        store.extend(iter);
        store
    }
}

impl<K, V> Extend<(K, V)> for Store
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}
