//! Common utility functions shared across the trainer card crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Never fail on user data** - malformed input degrades to a safe value

pub mod lenient;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use lenient::{coerce_i64, coerce_non_negative};
pub use string::{file_slug, non_blank};
