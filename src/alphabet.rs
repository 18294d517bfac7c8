//! Character codec for typo alphabets.
//!
//! Typo characters are stored as USB HID keycodes, which is what the firmware
//! sees when a key is pressed. Every code fits in 6 bits so the top two bits
//! of a table byte stay free for the node type flags:
//!
//! ```text
//! 1xxxxxxx  leaf (low 6 bits = backspace count)
//! 01xxxxxx  first character of a branch node
//! 00xxxxxx  chain character (or any later branch character)
//! ```

/// Placeholder for whitespace/punctuation at the start or end of a typo.
pub const WORD_BOUNDARY: char = ':';

/// Keycode of `a`; letters map to the contiguous run `KC_A..=KC_A + 25`.
pub const KC_A: u8 = 0x04;

/// Keycode of the space bar, used for [`WORD_BOUNDARY`].
pub const KC_SPC: u8 = 0x2C;

/// Keycode of the apostrophe/quote key.
pub const KC_QUOT: u8 = 0x34;

/// Set on the first byte of a leaf entry.
pub const LEAF_FLAG: u8 = 0x80;

/// Set on the first character byte of a branch entry.
pub const BRANCH_FLAG: u8 = 0x40;

/// Largest code that leaves both flag bits clear.
pub const MAX_CODE: u8 = 0x3F;

/// Encode a typo character, returning `None` for characters outside the
/// alphabet (`a`-`z`, `'` and [`WORD_BOUNDARY`]).
#[inline]
pub fn encode_char(c: char) -> Option<u8> {
    match c {
        'a'..='z' => Some(KC_A + (c as u8 - b'a')),
        '\'' => Some(KC_QUOT),
        WORD_BOUNDARY => Some(KC_SPC),
        _ => None,
    }
}

/// Whether `c` may appear in a typo.
#[inline]
pub fn is_typo_char(c: char) -> bool {
    encode_char(c).is_some()
}

/// All characters accepted in a typo, in the order used by error messages.
pub fn typo_alphabet() -> impl Iterator<Item = char> {
    ['\'', WORD_BOUNDARY].into_iter().chain('a'..='z')
}
