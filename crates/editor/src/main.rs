//! Trainer Card Editor - command line entry point.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trainercard_editor::application::TrainerCardSession;
use trainercard_editor::cli;
use trainercard_editor::config::{load_dotenv, EditorConfig, StorageBackend, DEFAULT_LOG_FILTER};
use trainercard_editor::infrastructure::{FileStorageProvider, MemoryStorageProvider};
use trainercard_editor::ports::StorageProvider;

fn main() -> Result<()> {
    load_dotenv();
    let config = EditorConfig::from_env()?;

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let storage: Box<dyn StorageProvider> = match &config.storage {
        StorageBackend::File(path) => {
            tracing::debug!(path = %path.display(), "Using file storage");
            Box::new(FileStorageProvider::open(path.clone()))
        }
        StorageBackend::Memory => Box::new(MemoryStorageProvider::new()),
    };

    let mut session = TrainerCardSession::open(storage);
    cli::run(&mut session, std::env::args().skip(1), &mut std::io::stdout().lock())
}

