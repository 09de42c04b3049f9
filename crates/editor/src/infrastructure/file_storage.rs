//! File-backed storage provider
//!
//! Stores key-value pairs as a JSON object in a single file, by default at:
//! - Linux: ~/.config/trainercard/storage.json
//! - macOS: ~/Library/Application Support/io.trainercard.trainercard/storage.json
//! - Windows: C:\Users\<User>\AppData\Roaming\trainercard\trainercard\config\storage.json

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use directories::ProjectDirs;

use crate::ports::{StorageError, StorageProvider};

const STORAGE_FILE: &str = "storage.json";

pub struct FileStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory copy of the file contents
    cache: RwLock<BTreeMap<String, String>>,
}

impl FileStorageProvider {
    /// Platform config directory location, or the working directory when the
    /// platform has none.
    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("io", "trainercard", "trainercard") {
            Some(dirs) => dirs.config_dir().join(STORAGE_FILE),
            None => PathBuf::from("trainercard_storage.json"),
        }
    }

    /// Open the storage file at `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file is logged
    /// and also starts empty; it is overwritten on the next save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let storage_path = path.into();

        let cache = if storage_path.exists() {
            match read_map(&storage_path) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %storage_path.display(), error = %e, "Failed to read storage file");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %storage_path.display(), keys = cache.len(), "File storage initialized");

        Self {
            storage_path,
            cache: RwLock::new(cache),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Write the cache to disk
    fn persist(&self, cache: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(cache)?;
        fs::write(&self.storage_path, data)?;
        Ok(())
    }
}

fn read_map(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.cache.write().map_err(|_| StorageError::LockPoisoned)?;
        guard.insert(key.to_string(), value.to_string());
        self.persist(&guard)
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.cache.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.cache.write().map_err(|_| StorageError::LockPoisoned)?;
        if guard.remove(key).is_some() {
            self.persist(&guard)?;
        }
        Ok(())
    }
}
