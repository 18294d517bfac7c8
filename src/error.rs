//! Error types for dictionary loading and table compilation.
//!
//! Every error here aborts compilation; there is no partial output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning validated pairs into a serialized table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The backspace count for a pair falls outside `0..=63`.
    ///
    /// The pair is too divergent to be expressed as a leaf.
    #[error(
        "cannot encode \"{typo}\" -> \"{correction}\": needs {backspaces} backspaces, \
         which is outside 0..=63"
    )]
    EditOverflow {
        /// Raw typo, boundary markers included
        typo: String,
        /// Correction text
        correction: String,
        /// Computed backspace count
        backspaces: i64,
    },

    /// The part of the correction stored in the table is not ASCII.
    #[error("correction \"{correction}\" for typo \"{typo}\" must be ASCII")]
    NonAsciiCorrection {
        /// Raw typo
        typo: String,
        /// Correction text
        correction: String,
    },

    /// Even 3-byte node links cannot address the dictionary.
    #[error(
        "dictionary \"{dictionary}\" is too large: {size} bytes exceeds the 16MB node link limit; \
         try reducing the dictionary to fewer entries"
    )]
    WidthOverflow {
        /// Dictionary name
        dictionary: String,
        /// Size computed under the widest link width
        size: u64,
    },

    /// A resolved link does not fit the chosen width.
    ///
    /// This indicates a bug in offset assignment, not a data problem.
    #[error("node link offset {offset} does not fit in {width} bytes")]
    LinkOutOfRange {
        /// Offending byte offset
        offset: u64,
        /// Link width in bytes
        width: usize,
    },

    /// Serialized bytes disagree with the computed layout.
    #[error("serialized table is {actual} bytes but layout computed {expected}")]
    SizeMismatch {
        /// Size from layout
        expected: u64,
        /// Size actually emitted
        actual: u64,
    },

    /// A typo contains a character outside the alphabet.
    #[error("typo \"{typo}\" contains unsupported character {ch:?}")]
    InvalidCharacter {
        /// Offending typo
        typo: String,
        /// Offending character
        ch: char,
    },

    /// A typo's trie path ends inside, or passes through, another typo's path.
    #[error("typo \"{typo}\" overlaps another typo in the trie")]
    OverlappingTypo {
        /// Typo being inserted
        typo: String,
    },

    /// A typo is empty once inserted.
    #[error("empty typo for correction \"{correction}\"")]
    EmptyTypo {
        /// Correction of the empty typo
        correction: String,
    },

    /// A dictionary contains no pairs.
    #[error("dictionary \"{dictionary}\" has no autocorrection entries")]
    EmptyDictionary {
        /// Dictionary name
        dictionary: String,
    },

    /// No dictionaries were given.
    #[error("at least one dictionary must be provided")]
    NoDictionaries,

    /// More dictionaries than the firmware can index.
    #[error("{count} dictionaries given, but at most 8 can be indexed")]
    TooManyDictionaries {
        /// Number of dictionaries given
        count: usize,
    },
}

/// Errors raised while reading and validating a dictionary source file.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Failed to read the dictionary.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Reader error without an associated path.
    #[error("I/O error: {0}")]
    Read(#[from] std::io::Error),

    /// Line is not of the form `typo -> correction`.
    #[error("line {line}: invalid syntax: \"{text}\"")]
    InvalidSyntax {
        /// 1-based line number
        line: usize,
        /// Trimmed line content
        text: String,
    },

    /// Typo contains a character outside the alphabet.
    #[error("line {line}: typo \"{typo}\" has characters other than {allowed}")]
    InvalidCharacter {
        /// 1-based line number
        line: usize,
        /// Offending typo
        typo: String,
        /// The accepted characters
        allowed: String,
    },

    /// Two typos contain one another, so the longer would never trigger.
    #[error(
        "line {line}: typos may not be substrings of one another, otherwise the longer typo \
         would never trigger: \"{typo}\" vs. \"{other}\""
    )]
    SubstringTypo {
        /// 1-based line number
        line: usize,
        /// Typo on this line
        typo: String,
        /// Earlier conflicting typo
        other: String,
    },

    /// Typo is longer than the firmware buffer allows.
    #[error("line {line}: typo exceeds {max} chars: \"{typo}\"")]
    TypoTooLong {
        /// 1-based line number
        line: usize,
        /// Offending typo
        typo: String,
        /// Maximum length
        max: usize,
    },
}

/// A specialized `Result` type for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
