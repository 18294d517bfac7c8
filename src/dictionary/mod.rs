//! Autocorrection dictionaries and their source format.
//!
//! # Format
//!
//! One `typo -> correction` pair per line. Blank lines and lines starting
//! with `#` are ignored, and surrounding whitespace is trimmed:
//!
//! ```text
//! # Common typos
//! :thier        -> their
//! fitler        -> filter
//! lenght        -> length
//! widht         -> width
//! ```
//!
//! Typos are lowercased and may only contain `a`-`z`, `'` and the word
//! boundary `:` (a space inside a typo is read as `:`). A boundary at the
//! start only matches at the beginning of a word; at the end, only when the
//! word is finished.

pub mod parser;
pub mod validate;
pub mod wordlist;

pub use parser::{parse_lines, DictionaryLine};
pub use validate::{LoadOptions, LoadWarning};
pub use wordlist::WordList;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::DictionaryError;

/// Longest typo the firmware buffer can hold.
pub const MAX_TYPO_LEN: usize = 127;

/// A typo and the text that replaces it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct AutocorrectPair {
    /// Mistyped text, possibly with leading/trailing word boundaries
    pub typo: String,
    /// Intended text
    pub correction: String,
}

impl AutocorrectPair {
    /// Create a pair.
    pub fn new(typo: impl Into<String>, correction: impl Into<String>) -> Self {
        AutocorrectPair {
            typo: typo.into(),
            correction: correction.into(),
        }
    }

    /// Raw typo length in characters, boundary markers included.
    #[inline]
    pub fn typo_len(&self) -> usize {
        self.typo.chars().count()
    }
}

/// A named, validated list of pairs ready for compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    /// Name used in diagnostics and generated comments (usually the path)
    pub name: String,
    /// Pairs in source order
    pub pairs: Vec<AutocorrectPair>,
}

impl Dictionary {
    /// Create a dictionary from already validated pairs.
    pub fn new(name: impl Into<String>, pairs: Vec<AutocorrectPair>) -> Self {
        Dictionary {
            name: name.into(),
            pairs,
        }
    }

    /// Read and validate a dictionary file.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read, or any
    /// syntax/validation error from [`Dictionary::from_reader`].
    pub fn load<P: AsRef<Path>>(
        path: P,
        words: &WordList,
        options: &LoadOptions,
    ) -> Result<LoadedDictionary, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(path.display().to_string(), BufReader::new(file), words, options)
    }

    /// Parse and validate a dictionary from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns the first syntax or validation error; see [`validate::validate`].
    pub fn from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        words: &WordList,
        options: &LoadOptions,
    ) -> Result<LoadedDictionary, DictionaryError> {
        let name = name.into();
        let lines = parse_lines(reader)?;
        let (pairs, warnings) = validate::validate(lines, words, options)?;
        Ok(LoadedDictionary {
            dictionary: Dictionary { name, pairs },
            warnings,
        })
    }
}

/// A dictionary together with the warnings raised while loading it.
#[derive(Clone, Debug)]
pub struct LoadedDictionary {
    /// The validated dictionary
    pub dictionary: Dictionary,
    /// Non-fatal findings, in line order
    pub warnings: Vec<LoadWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader() {
        let source = "\
# typos
:thier        -> their
fitler        -> filter

lenght        -> length
";
        let loaded = Dictionary::from_reader(
            "inline",
            source.as_bytes(),
            &WordList::fallback(),
            &LoadOptions::default(),
        )
        .unwrap();

        assert_eq!(loaded.dictionary.name, "inline");
        assert_eq!(
            loaded.dictionary.pairs,
            vec![
                AutocorrectPair::new(":thier", "their"),
                AutocorrectPair::new("fitler", "filter"),
                AutocorrectPair::new("lenght", "length"),
            ]
        );
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dictionary::load(
            "/nonexistent/autocorrect_dict.txt",
            &WordList::fallback(),
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }

    #[test]
    fn test_typo_len_counts_chars() {
        assert_eq!(AutocorrectPair::new(":teh:", "the").typo_len(), 5);
    }
}
