//! Port traits implemented by the infrastructure layer.

mod storage;

#[cfg(any(test, feature = "testing"))]
pub use storage::MockStorageProvider;
pub use storage::{storage_keys, StorageError, StorageProvider};
