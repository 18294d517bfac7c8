//! CLI interface for autocorrect-trie
//!
//! Compiles dictionary files into a firmware header and reports table
//! statistics.

pub mod args;
pub mod commands;
pub mod config;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::execute;
pub use config::{config_dir, CompilerConfig};
