//! Line parser for `typo -> correction` dictionary files.

use std::io::BufRead;

use crate::alphabet::WORD_BOUNDARY;
use crate::error::DictionaryError;

/// Separator between typo and correction.
pub const ARROW: &str = "->";

/// A parsed, not yet validated, dictionary line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictionaryLine {
    /// 1-based line number
    pub line: usize,
    /// Lowercased typo with inner spaces turned into word boundaries
    pub typo: String,
    /// Correction as written
    pub correction: String,
}

/// Parse a single line.
///
/// Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns [`DictionaryError::InvalidSyntax`] if the line has no `->` or an
/// empty typo.
pub fn parse_line(line: usize, text: &str) -> Result<Option<DictionaryLine>, DictionaryError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let (typo, correction) = text
        .split_once(ARROW)
        .map(|(t, c)| (t.trim(), c.trim()))
        .filter(|(t, _)| !t.is_empty())
        .ok_or_else(|| DictionaryError::InvalidSyntax {
            line,
            text: text.to_string(),
        })?;

    let typo = typo.to_lowercase().replace(' ', &WORD_BOUNDARY.to_string());

    Ok(Some(DictionaryLine {
        line,
        typo,
        correction: correction.to_string(),
    }))
}

/// Parse every line of `reader`.
///
/// # Errors
///
/// Fails on the first read or syntax error.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<DictionaryLine>, DictionaryError> {
    let mut lines = Vec::new();
    for (idx, text) in reader.lines().enumerate() {
        if let Some(parsed) = parse_line(idx + 1, &text?)? {
            lines.push(parsed);
        }
    }
    Ok(lines)
}
