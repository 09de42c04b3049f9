//! Application layer - the editing session.

mod session;

pub use session::{export_file_name, ExportedSheet, ImportError, TrainerCardSession};
