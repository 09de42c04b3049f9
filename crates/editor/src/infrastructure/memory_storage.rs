//! In-memory storage provider for ephemeral runs and tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{StorageError, StorageProvider};

/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data
            .write()
            .map_err(|_| StorageError::LockPoisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .data
            .read()
            .map_err(|_| StorageError::LockPoisoned)?
            .get(key)
            .cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.data
            .write()
            .map_err(|_| StorageError::LockPoisoned)?
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let storage = MemoryStorageProvider::new();
        let other = storage.clone();
        storage.save("key", "value").unwrap();
        assert_eq!(other.load("key").unwrap().as_deref(), Some("value"));
        other.remove("key").unwrap();
        assert_eq!(storage.load("key").unwrap(), None);
    }
}
