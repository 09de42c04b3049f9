//! Storage adapters.

mod file_storage;
mod memory_storage;

pub use file_storage::FileStorageProvider;
pub use memory_storage::MemoryStorageProvider;
