//! Config file loading

use super::args::OutputFormat;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name looked up inside [`config_dir`].
pub const CONFIG_FILE: &str = "config.json";

/// Get the configuration directory for autocorrect-trie
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join("autocorrect-trie"))
}

/// Settings read from the JSON config file.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Newline-delimited list of correctly spelled words
    pub word_list: Option<PathBuf>,
    /// Default output format
    pub format: Option<OutputFormat>,
    /// Typos shorter than this raise a warning
    pub min_typo_length: Option<usize>,
    /// Treat dictionary warnings as errors
    pub deny_warnings: bool,
}

impl CompilerConfig {
    /// Load the config from `custom_path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(custom_path: Option<&Path>) -> Result<Self> {
        match custom_path {
            Some(path) => Self::load_from(path),
            None => {
                let path = match config_dir() {
                    Ok(dir) => dir.join(CONFIG_FILE),
                    Err(_) => return Ok(Self::default()),
                };
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load the config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
