//! Persistent storage port
//!
//! The editor keeps a single document per key. Adapters decide where the
//! bytes live (a JSON file on disk, memory for tests).

use thiserror::Error;

/// Failure of a storage adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Key-value document storage (file-based or in-memory)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value under the given key
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Load a string value by key, `None` if nothing is stored
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove a value by key
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: StorageProvider + ?Sized> StorageProvider for Box<T> {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Storage key constants
pub mod storage_keys {
    /// The one persisted trainer card document
    pub const TRAINER_CARD: &str = "trainer_card_pro_data";
}
