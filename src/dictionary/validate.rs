//! Validation of parsed dictionary lines.
//!
//! Errors stop loading; warnings are collected and logged.

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::warn;

use super::parser::DictionaryLine;
use super::wordlist::{Collision, WordList};
use super::{AutocorrectPair, MAX_TYPO_LEN};
use crate::alphabet::{is_typo_char, typo_alphabet};
use crate::error::DictionaryError;

/// Knobs for dictionary validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Typos shorter than this raise [`LoadWarning::ShortTypo`]
    pub min_typo_length: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions { min_typo_length: 5 }
    }
}

/// A non-fatal finding about a dictionary line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadWarning {
    /// The typo already appeared; this line was ignored.
    DuplicateTypo {
        /// 1-based line number
        line: usize,
        /// Repeated typo
        typo: String,
    },
    /// The typo is short enough to fire by accident.
    ShortTypo {
        /// 1-based line number
        line: usize,
        /// Offending typo
        typo: String,
        /// Recommended minimum length
        min: usize,
    },
    /// A `:word:` typo is a correctly spelled word.
    CorrectlySpelled {
        /// 1-based line number
        line: usize,
        /// Offending typo
        typo: String,
    },
    /// The typo would fire while typing a correctly spelled word.
    FalseTrigger {
        /// 1-based line number
        line: usize,
        /// Offending typo
        typo: String,
        /// Word that would be corrupted
        word: String,
    },
}

impl LoadWarning {
    /// Line the warning refers to.
    pub fn line(&self) -> usize {
        match self {
            LoadWarning::DuplicateTypo { line, .. }
            | LoadWarning::ShortTypo { line, .. }
            | LoadWarning::CorrectlySpelled { line, .. }
            | LoadWarning::FalseTrigger { line, .. } => *line,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::DuplicateTypo { line, typo } => {
                write!(f, "line {line}: ignoring duplicate typo: \"{typo}\"")
            }
            LoadWarning::ShortTypo { line, typo, min } => write!(
                f,
                "line {line}: it is suggested that typos are at least {min} characters long \
                 to avoid false triggers: \"{typo}\""
            ),
            LoadWarning::CorrectlySpelled { line, typo } => write!(
                f,
                "line {line}: typo \"{typo}\" is a correctly spelled dictionary word"
            ),
            LoadWarning::FalseTrigger { line, typo, word } => write!(
                f,
                "line {line}: typo \"{typo}\" would falsely trigger on correctly spelled \
                 word \"{word}\""
            ),
        }
    }
}

/// Validate parsed lines in order, returning accepted pairs and warnings.
///
/// For each line:
///
/// 1. a repeated typo is skipped with [`LoadWarning::DuplicateTypo`],
/// 2. characters outside the alphabet are an error,
/// 3. a typo containing, or contained in, an earlier typo is an error,
/// 4. a typo shorter than `options.min_typo_length` is a warning,
/// 5. a typo longer than [`MAX_TYPO_LEN`] is an error,
/// 6. collisions with `words` are warnings.
///
/// # Errors
///
/// The first [`DictionaryError`] found.
pub fn validate(
    lines: Vec<DictionaryLine>,
    words: &WordList,
    options: &LoadOptions,
) -> Result<(Vec<AutocorrectPair>, Vec<LoadWarning>), DictionaryError> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut accepted: Vec<String> = Vec::with_capacity(lines.len());
    let mut pairs = Vec::with_capacity(lines.len());
    let mut warnings = Vec::new();

    for DictionaryLine {
        line,
        typo,
        correction,
    } in lines
    {
        if seen.contains(&typo) {
            push_warning(&mut warnings, LoadWarning::DuplicateTypo { line, typo });
            continue;
        }

        if !typo.chars().all(is_typo_char) {
            return Err(DictionaryError::InvalidCharacter {
                line,
                typo,
                allowed: typo_alphabet().collect(),
            });
        }

        if let Some(other) = accepted
            .iter()
            .find(|other| other.contains(typo.as_str()) || typo.contains(other.as_str()))
        {
            return Err(DictionaryError::SubstringTypo {
                line,
                typo,
                other: other.clone(),
            });
        }

        let len = typo.chars().count();
        if len < options.min_typo_length {
            push_warning(
                &mut warnings,
                LoadWarning::ShortTypo {
                    line,
                    typo: typo.clone(),
                    min: options.min_typo_length,
                },
            );
        }
        if len > MAX_TYPO_LEN {
            return Err(DictionaryError::TypoTooLong {
                line,
                typo,
                max: MAX_TYPO_LEN,
            });
        }

        for collision in words.collisions(&typo) {
            let warning = match collision {
                Collision::CorrectlySpelled => LoadWarning::CorrectlySpelled {
                    line,
                    typo: typo.clone(),
                },
                Collision::FalseTrigger(word) => LoadWarning::FalseTrigger {
                    line,
                    typo: typo.clone(),
                    word: word.to_string(),
                },
            };
            push_warning(&mut warnings, warning);
        }

        seen.insert(typo.clone());
        accepted.push(typo.clone());
        pairs.push(AutocorrectPair { typo, correction });
    }

    Ok((pairs, warnings))
}

fn push_warning(warnings: &mut Vec<LoadWarning>, warning: LoadWarning) {
    warn!("{warning}");
    warnings.push(warning);
}
