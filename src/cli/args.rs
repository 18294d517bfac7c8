//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "autocorrect-trie")]
#[command(about = "Compile autocorrection dictionaries into firmware lookup tables")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Compile dictionaries and write the data file
    Compile {
        /// Dictionary files, at most 8
        #[arg(required = true)]
        dicts: Vec<PathBuf>,

        /// Output file (defaults to autocorrect_data.<ext> next to the first dictionary)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,

        /// Newline-delimited list of correctly spelled words
        #[arg(short, long)]
        word_list: Option<PathBuf>,

        /// Treat dictionary warnings as errors
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Show table statistics without writing anything
    Inspect {
        /// Dictionary files, or a compiled .json/.bin artifact
        #[arg(required = true)]
        dicts: Vec<PathBuf>,

        /// Newline-delimited list of correctly spelled words
        #[arg(short, long)]
        word_list: Option<PathBuf>,
    },
}

/// Artifact written by `compile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// C header for firmware builds
    #[default]
    Header,
    /// JSON artifact
    Json,
    /// Bincode artifact
    Bincode,
}

impl OutputFormat {
    /// File extension written for this format.
    pub fn extension(self) -> &'static str {
        use crate::serialization::{
            BincodeSerializer, CHeaderSerializer, JsonSerializer, OutputSerializer,
        };
        match self {
            Self::Header => CHeaderSerializer::EXTENSION,
            Self::Json => JsonSerializer::EXTENSION,
            Self::Bincode => BincodeSerializer::EXTENSION,
        }
    }

    /// Format implied by a file extension, if it is a reloadable artifact.
    pub fn from_artifact_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(Self::Json),
            "bin" => Some(Self::Bincode),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Json => write!(f, "json"),
            Self::Bincode => write!(f, "bincode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compile() {
        let cli = Cli::try_parse_from([
            "autocorrect-trie",
            "compile",
            "a.txt",
            "b.txt",
            "-f",
            "json",
            "--deny-warnings",
        ])
        .unwrap();
        match cli.command {
            Commands::Compile {
                dicts,
                format,
                deny_warnings,
                output,
                ..
            } => {
                assert_eq!(dicts.len(), 2);
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(deny_warnings);
                assert!(output.is_none());
            }
            Commands::Inspect { .. } => panic!("expected compile"),
        }
    }

    #[test]
    fn test_compile_requires_dictionary() {
        assert!(Cli::try_parse_from(["autocorrect-trie", "compile"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["autocorrect-trie", "inspect", "a.txt", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(Cli::try_parse_from(["autocorrect-trie", "inspect", "a.txt", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Header.extension(), "h");
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Bincode.extension(), "bin");
        assert_eq!(OutputFormat::from_artifact_extension("bin"), Some(OutputFormat::Bincode));
        assert_eq!(OutputFormat::from_artifact_extension("txt"), None);
    }
}
