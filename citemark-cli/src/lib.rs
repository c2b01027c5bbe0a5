//! citemark CLI library
//!
//! This library provides the command-line interface that finds legal
//! citations and statute references in text files and styles them.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
