//! Trainer card editor: storage adapters, the editing session and the
//! `trainercard` command line.

pub mod application;
pub mod cli;
pub mod config;
pub mod infrastructure;
pub mod ports;
