//! Debrief CLI library.
//!
//! This library provides the core functionality for the debrief
//! command-line tool: argument parsing, configuration layering, document
//! loading, report rendering, and console output.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod render;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Console;
