//! Editor configuration
//!
//! Read from environment variables, optionally seeded from a `.env` file:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TRAINERCARD_STORAGE` | `file` or `memory` | `file` |
//! | `TRAINERCARD_STORAGE_PATH` | storage file for the `file` backend | platform config dir |
//! | `TRAINERCARD_LOG` | tracing filter | `trainercard_editor=info` |

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::infrastructure::FileStorageProvider;

pub const DEFAULT_LOG_FILTER: &str = "trainercard_editor=info,trainercard_domain=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    File(PathBuf),
    /// Nothing outlives the process
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub storage: StorageBackend,
    pub log_filter: String,
}

impl EditorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let storage = match non_empty("TRAINERCARD_STORAGE").as_deref() {
            None | Some("file") => StorageBackend::File(
                non_empty("TRAINERCARD_STORAGE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(FileStorageProvider::default_path),
            ),
            Some("memory") => StorageBackend::Memory,
            Some(other) => bail!("TRAINERCARD_STORAGE must be 'file' or 'memory', got '{other}'"),
        };

        Ok(Self {
            storage,
            log_filter: non_empty("TRAINERCARD_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

/// Load `.env.local` then `.env` from the working directory, if present.
///
/// Variables already set in the environment are never overridden.
pub fn load_dotenv() {
    for filename in [".env.local", ".env"] {
        let path = PathBuf::from(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                eprintln!("Ignoring {filename}: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<EditorConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EditorConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_file_storage_in_config_dir() {
        let config = config(&[]).unwrap();
        assert_eq!(config.storage, StorageBackend::File(FileStorageProvider::default_path()));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn explicit_storage_path() {
        let config = config(&[("TRAINERCARD_STORAGE_PATH", "/tmp/card.json")]).unwrap();
        assert_eq!(config.storage, StorageBackend::File(PathBuf::from("/tmp/card.json")));
    }

    #[test]
    fn memory_backend_and_log_filter() {
        let config = config(&[
            ("TRAINERCARD_STORAGE", "memory"),
            ("TRAINERCARD_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(config(&[("TRAINERCARD_STORAGE", "sqlite")]).is_err());
    }
}
