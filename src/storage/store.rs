//! Typed store facade.
//!
//! Wraps a [`KeyValueBackend`] and layers serde-typed accessors over the raw
//! JSON-value contract. The facade is cheap to clone and hides which engine
//! backs the instance.

use crate::storage::filesystem::FilesystemBackend;
use crate::storage::traits::{EntryVisitor, KeyValueBackend};
use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Facade over a single named store instance.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueBackend>,
}

impl Store {
    /// Creates a store over the given engine.
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Opens a filesystem store at `<dir>/<name>.json`.
    ///
    /// The file is created lazily on the first write.
    #[must_use]
    pub fn open(dir: impl Into<PathBuf>, name: &str) -> Self {
        Self::new(Arc::new(FilesystemBackend::new(dir, name)))
    }

    /// Serializes `value` and stores it under `key`, overwriting silently.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` when serialization or the engine write fails.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|e| Error::StorageWrite {
            operation: "serialize_value".to_string(),
            cause: format!("{key}: {e}"),
        })?;
        self.backend.set(key, &value)
    }

    /// Retrieves and decodes the value for `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageRead` when the engine read or decoding fails.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key)? {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| Error::StorageRead {
                    operation: "deserialize_value".to_string(),
                    cause: format!("{key}: {e}"),
                }),
        }
    }

    /// Retrieves the raw JSON value for `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageRead` when the engine read fails.
    pub fn get_raw(&self, key: &str) -> Result<Option<Value>> {
        self.backend.get(key)
    }

    /// Deletes `key` if present. Returns `false` (not an error) when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` when the engine write fails.
    pub fn remove(&self, key: &str) -> Result<bool> {
        self.backend.remove(key)
    }

    /// Deletes every key in the instance.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` when the engine write fails.
    pub fn clear(&self) -> Result<()> {
        self.backend.clear()
    }

    /// Lists all stored keys in the engine's native order.
    ///
    /// # Errors
    ///
    /// Returns `StorageRead` when the engine read fails.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.backend.keys()
    }

    /// Returns the number of stored keys.
    ///
    /// # Errors
    ///
    /// Returns `StorageRead` when the engine read fails.
    pub fn len(&self) -> Result<usize> {
        self.backend.len()
    }

    /// Returns true when no keys are stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageRead` when the engine read fails.
    pub fn is_empty(&self) -> Result<bool> {
        self.backend.is_empty()
    }

    /// Invokes `visitor(value, key, index)` once per stored entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageRead` when the engine read fails.
    pub fn for_each(&self, visitor: &mut EntryVisitor<'_>) -> Result<()> {
        self.backend.for_each(visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;
    use crate::storage::memory::MemoryBackend;
    use serde_json::json;

    fn memory_store() -> Store {
        Store::new(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn test_typed_roundtrip() {
        let store = memory_store();
        let movies = vec![
            Movie::new("Inception".to_string(), "2010".to_string()),
            Movie::new("Heat".to_string(), "1995".to_string()),
        ];

        store.set("movies", &movies).unwrap();
        let loaded: Option<Vec<Movie>> = store.get("movies").unwrap();

        assert_eq!(loaded, Some(movies));
    }

    #[test]
    fn test_get_absent_is_none() {
        let store = memory_store();
        let loaded: Option<Vec<Movie>> = store.get("movies").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_type_mismatch_is_a_read_error() {
        let store = memory_store();
        store.set("movies", "not a list").unwrap();

        let result: Result<Option<Vec<Movie>>> = store.get("movies");
        assert!(matches!(result, Err(Error::StorageRead { .. })));
    }

    #[test]
    fn test_raw_access_and_remove() {
        let store = memory_store();
        store.set("k", &json!({"a": 1})).unwrap();

        assert_eq!(store.get_raw("k").unwrap(), Some(json!({"a": 1})));
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
    }

    #[test]
    fn test_clear_keys_len() {
        let store = memory_store();
        store.set("a", &1).unwrap();
        store.set("b", &2).unwrap();

        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(store.keys().unwrap().len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty().unwrap());
    }
}
