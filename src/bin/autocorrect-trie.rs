//! autocorrect-trie - compile autocorrection dictionaries for keyboard firmware
//!
//! Reads `typo -> correction` dictionaries and writes the packed trie the
//! firmware scans at runtime.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use autocorrect_trie::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("autocorrect_trie=debug")
    } else if cli.quiet {
        EnvFilter::new("autocorrect_trie=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("autocorrect_trie=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
