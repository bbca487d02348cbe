//! In-memory store engine for testing.
//!
//! Provides a fast, non-persistent implementation of
//! [`KeyValueBackend`] for unit tests and ephemeral use. Data does not
//! survive the process.

use crate::storage::traits::{EntryVisitor, KeyValueBackend};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

type StoreMap = BTreeMap<String, Value>;

/// In-memory key-value store.
///
/// Uses `RwLock` for thread-safe access with reader-writer semantics.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<StoreMap>,
}

impl MemoryBackend {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, StoreMap>> {
        self.entries.read().map_err(|e| Error::StorageRead {
            operation: "lock_store".to_string(),
            cause: e.to_string(),
        })
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, StoreMap>> {
        self.entries.write().map_err(|e| Error::StorageWrite {
            operation: "lock_store".to_string(),
            cause: e.to_string(),
        })
    }
}

impl KeyValueBackend for MemoryBackend {
    fn set(&self, key: &str, value: &Value) -> Result<()> {
        self.write_guard()?.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_guard()?.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.write_guard()?.remove(key).is_some())
    }

    fn clear(&self) -> Result<()> {
        self.write_guard()?.clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.read_guard()?.keys().cloned().collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read_guard()?.len())
    }

    fn for_each(&self, visitor: &mut EntryVisitor<'_>) -> Result<()> {
        for (index, (key, value)) in self.read_guard()?.iter().enumerate() {
            visitor(value, key, index);
        }
        Ok(())
    }
}
