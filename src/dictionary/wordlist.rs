//! Correctly spelled words, used to catch typos that would fire on real text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::alphabet::WORD_BOUNDARY;
use crate::error::DictionaryError;

/// Words used when no word list is available.
///
/// Each one contains a common typo as a substring.
const FALLBACK_WORDS: &[&str] = &[
    "information",
    "available",
    "international",
    "language",
    "loosest",
    "reference",
    "wealthier",
    "entertainment",
    "association",
    "provides",
    "technology",
    "statehood",
];

/// A set of lowercase alphabetic words.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    // Sorted so warnings come out in a stable order.
    words: Vec<String>,
    set: FxHashSet<String>,
}

/// How a typo collides with a correctly spelled word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Collision<'a> {
    /// A `:word:` typo is itself a word.
    CorrectlySpelled,
    /// The typo would match while typing this word.
    FalseTrigger(&'a str),
}

impl WordList {
    /// Build a word list, keeping only purely alphabetic entries, lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FxHashSet::default();
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() && word.chars().all(char::is_alphabetic) {
                set.insert(word.to_lowercase());
            }
        }
        let mut words: Vec<String> = set.iter().cloned().collect();
        words.sort_unstable();
        WordList { words, set }
    }

    /// The small built-in list.
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_WORDS)
    }

    /// An empty list; disables collision checks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let io_err = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_err)?;
        Ok(Self::from_words(lines))
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    /// Find the words `typo` would wrongly fire on.
    ///
    /// The boundary markers decide how the typo can match a word:
    ///
    /// | Typo    | Collides with                       |
    /// |---------|-------------------------------------|
    /// | `:w:`   | `w` itself                          |
    /// | `:w`    | words starting with `w`             |
    /// | `w:`    | words ending with `w`               |
    /// | `w`     | words containing `w`                |
    pub fn collisions(&self, typo: &str) -> Vec<Collision<'_>> {
        let leading = typo.starts_with(WORD_BOUNDARY);
        let trailing = typo.ends_with(WORD_BOUNDARY);
        let core = typo.strip_prefix(WORD_BOUNDARY).unwrap_or(typo);
        let core = core.strip_suffix(WORD_BOUNDARY).unwrap_or(core);

        match (leading, trailing) {
            (true, true) => {
                if self.contains(core) {
                    vec![Collision::CorrectlySpelled]
                } else {
                    Vec::new()
                }
            }
            (true, false) => self.matching(|w| w.starts_with(core)),
            (false, true) => self.matching(|w| w.ends_with(core)),
            (false, false) => self.matching(|w| w.contains(core)),
        }
    }

    fn matching<F>(&self, pred: F) -> Vec<Collision<'_>>
    where
        F: Fn(&str) -> bool,
    {
        self.words
            .iter()
            .filter(|w| pred(w))
            .map(|w| Collision::FalseTrigger(w.as_str()))
            .collect()
    }
}
