//! Per-instance keyed storage.
//!
//! Each mounted instance carries a [`DataStore`], a small JSON scrapbook
//! features use to persist bookkeeping across resolutions on the same
//! instance: dispatched events, redirect targets, render flags. The store is
//! instance-local and never shared between instances.

use hashbrown::HashMap;
use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// StoreError
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised by [`DataStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// [`push`](DataStore::push) targeted a key holding a non-array value.
    #[error("store entry '{key}' is not an array")]
    NotAnArray {
        /// The offending key.
        key: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// DataStore
// ─────────────────────────────────────────────────────────────────────────────

/// Keyed JSON storage scoped to a single component instance.
#[derive(Debug, Default, Clone)]
pub struct DataStore {
    /// Stored entries by key.
    entries: HashMap<String, Value>,
}

impl DataStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under a key, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Looks up the value stored under a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Checks if a key holds a value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Appends a value to the array stored under a key, creating an empty
    /// array first if the key is vacant.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAnArray`] if the key already holds a
    /// non-array value. The store is left unchanged in that case.
    pub fn push(&mut self, key: impl Into<String>, value: Value) -> Result<(), StoreError> {
        let key = key.into();
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            _ => Err(StoreError::NotAnArray { key }),
        }
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
