//! Filesystem-backed store engine.
//!
//! Persists one named store instance as a single JSON object file mapping
//! keys to arbitrary JSON values. Initialization is lazy: nothing touches
//! the disk until the first write, and a missing file reads as an empty
//! store. Every operation is a full read or a full read-modify-write of the
//! file.

use crate::storage::traits::{EntryVisitor, KeyValueBackend};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

type StoreMap = BTreeMap<String, Value>;

/// Filesystem-backed key-value store.
pub struct FilesystemBackend {
    /// Path of the store file (`<dir>/<name>.json`).
    path: PathBuf,
}

impl FilesystemBackend {
    /// Creates a backend over `<dir>/<name>.json` without touching the disk.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, name: &str) -> Self {
        Self {
            path: dir.into().join(format!("{name}.json")),
        }
    }

    /// Returns the store file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<StoreMap> {
        if !self.path.exists() {
            return Ok(StoreMap::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| Error::StorageRead {
            operation: "read_store_file".to_string(),
            cause: format!("{}: {}", self.path.display(), e),
        })?;

        if raw.trim().is_empty() {
            return Ok(StoreMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| Error::StorageRead {
            operation: "parse_store_file".to_string(),
            cause: format!("{}: {}", self.path.display(), e),
        })
    }

    fn write_map(&self, map: &StoreMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::StorageWrite {
                operation: "create_store_dir".to_string(),
                cause: e.to_string(),
            })?;
        }

        let json = serde_json::to_string_pretty(map).map_err(|e| Error::StorageWrite {
            operation: "serialize_store".to_string(),
            cause: e.to_string(),
        })?;

        fs::write(&self.path, json).map_err(|e| Error::StorageWrite {
            operation: "write_store_file".to_string(),
            cause: format!("{}: {}", self.path.display(), e),
        })
    }
}

impl KeyValueBackend for FilesystemBackend {
    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.clone());
        self.write_map(&map)
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut map = self.read_map()?;
        if map.remove(key).is_none() {
            return Ok(false);
        }
        self.write_map(&map)?;
        Ok(true)
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            self.write_map(&StoreMap::new())?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.read_map()?.keys().cloned().collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read_map()?.len())
    }

    fn for_each(&self, visitor: &mut EntryVisitor<'_>) -> Result<()> {
        for (index, (key, value)) in self.read_map()?.iter().enumerate() {
            visitor(value, key, index);
        }
        Ok(())
    }
}
