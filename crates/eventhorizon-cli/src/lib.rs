//! CLI, event input, export commands
//!
//! This crate provides the `eventhorizon` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use input::ExportInput;
