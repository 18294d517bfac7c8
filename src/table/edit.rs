//! Minimal edit between a typo and its correction.
//!
//! The firmware intercepts the key that completes a typo, so at match time the
//! text before the cursor is the typo minus its last character. A leaf stores
//! how many of those characters to erase and what to type instead:
//!
//! ```text
//! typo "thier", correction "their"
//! shared prefix "th" (i = 2)
//! typed so far  "thie"  -> erase 2 -> "th" -> type "eir" -> "their"
//! ```
//!
//! A trailing word boundary means the completing key is the space itself, so
//! the whole stripped typo is on screen and one more backspace is needed. A
//! leading boundary is never typed into the buffer and does not change the
//! count.

use crate::alphabet::{LEAF_FLAG, MAX_CODE, WORD_BOUNDARY};
use crate::dictionary::AutocorrectPair;
use crate::error::{CompileError, Result};

/// Backspace count and replacement suffix for one leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    /// Characters to erase before typing the suffix, `0..=63`
    pub backspaces: u8,
    /// Tail of the correction after the shared prefix
    pub suffix: String,
}

impl Edit {
    /// Compute the edit for a pair.
    ///
    /// # Errors
    ///
    /// - [`CompileError::EditOverflow`] if the backspace count is outside `0..=63`
    /// - [`CompileError::NonAsciiCorrection`] if the suffix is not ASCII
    pub fn for_pair(pair: &AutocorrectPair) -> Result<Self> {
        let typo = pair.typo.as_str();
        let correction = pair.correction.as_str();

        let word_boundary_ending = typo.ends_with(WORD_BOUNDARY);
        let stripped = typo.trim_matches(WORD_BOUNDARY);

        let shared: Vec<(usize, char)> = stripped
            .chars()
            .zip(correction.char_indices())
            .take_while(|(a, (_, b))| a == b)
            .map(|(_, ic)| ic)
            .collect();
        let i = shared.len();
        let split = shared
            .last()
            .map(|(pos, c)| pos + c.len_utf8())
            .unwrap_or(0);

        let backspaces =
            stripped.chars().count() as i64 - i as i64 - 1 + i64::from(word_boundary_ending);
        if !(0..=i64::from(MAX_CODE)).contains(&backspaces) {
            return Err(CompileError::EditOverflow {
                typo: typo.to_string(),
                correction: correction.to_string(),
                backspaces,
            });
        }

        let suffix = &correction[split..];
        if !suffix.is_ascii() {
            return Err(CompileError::NonAsciiCorrection {
                typo: typo.to_string(),
                correction: correction.to_string(),
            });
        }

        Ok(Edit {
            backspaces: backspaces as u8,
            suffix: suffix.to_string(),
        })
    }

    /// Leaf payload: `0x80 | backspaces`, the suffix bytes, then a 0 terminator.
    pub fn payload(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.suffix.len() + 2);
        data.push(LEAF_FLAG | self.backspaces);
        data.extend_from_slice(self.suffix.as_bytes());
        data.push(0);
        data
    }

    /// Serialized length of the leaf payload.
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.suffix.len() + 2
    }

    /// Apply the edit to the text on screen when the completing key is
    /// pressed, as the firmware does.
    ///
    /// Returns `None` if there are fewer characters than backspaces.
    pub fn apply(&self, typed: &str) -> Option<String> {
        let mut chars: Vec<char> = typed.chars().collect();
        let keep = chars.len().checked_sub(self.backspaces as usize)?;
        chars.truncate(keep);
        let mut out: String = chars.into_iter().collect();
        out.push_str(&self.suffix);
        Some(out)
    }

    /// Text on screen, relative to the word, when `typo` is completed: the
    /// stripped typo minus the completing character, or the whole stripped
    /// typo when the completing key is a trailing boundary.
    pub fn typed_before_trigger(typo: &str) -> &str {
        let stripped = typo.trim_matches(WORD_BOUNDARY);
        if typo.ends_with(WORD_BOUNDARY) {
            stripped
        } else {
            match stripped.char_indices().last() {
                Some((pos, _)) => &stripped[..pos],
                None => stripped,
            }
        }
    }
}
