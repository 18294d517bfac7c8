//! Byte offset assignment and node link width selection.
//!
//! Branch entries grow with the link width, so offsets depend on the width
//! they are encoded with. Each candidate width is tried in order by walking
//! the table once; the first width whose running offset never exceeds its
//! addressable maximum wins:
//!
//! | Width | Max offset  |
//! |-------|-------------|
//! | 2     | 65,535      |
//! | 3     | 16,777,215  |
//!
//! There is no 4-byte fallback.

use tracing::info;

use super::TableEntry;
use crate::error::{CompileError, Result};

/// Number of bytes used to encode a node link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "u8", try_from = "u8")
)]
pub enum LinkWidth {
    /// 16-bit links, tables up to 64KB
    Two,
    /// 24-bit links, tables up to 16MB
    Three,
}

impl LinkWidth {
    /// Widths to try, narrowest first.
    pub const CANDIDATES: [LinkWidth; 2] = [LinkWidth::Two, LinkWidth::Three];

    /// Link size in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            LinkWidth::Two => 2,
            LinkWidth::Three => 3,
        }
    }

    /// Largest offset a link of this width can hold.
    #[inline]
    pub const fn max_offset(self) -> u64 {
        (1u64 << (8 * self.bytes())) - 1
    }

    /// Encode `offset` as a little-endian link.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::LinkOutOfRange`] if the offset does not fit.
    pub fn encode(self, offset: u64) -> Result<Vec<u8>> {
        if offset > self.max_offset() {
            return Err(CompileError::LinkOutOfRange {
                offset,
                width: self.bytes(),
            });
        }
        Ok(offset.to_le_bytes()[..self.bytes()].to_vec())
    }
}

impl From<LinkWidth> for u8 {
    fn from(width: LinkWidth) -> u8 {
        width.bytes() as u8
    }
}

impl TryFrom<u8> for LinkWidth {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            2 => Ok(LinkWidth::Two),
            3 => Ok(LinkWidth::Three),
            other => Err(format!("unsupported link width: {other}")),
        }
    }
}

impl std::fmt::Display for LinkWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

/// Final placement of a table's entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Chosen link width
    pub width: LinkWidth,
    /// Byte offset of each entry, in table order
    pub offsets: Vec<u32>,
    /// Total serialized size
    pub size: u32,
}

impl Layout {
    /// Lay out `entries` with the narrowest link width that fits.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::WidthOverflow`] naming `dictionary` if no
    /// candidate width can address the table.
    pub fn resolve(dictionary: &str, entries: &[TableEntry]) -> Result<Self> {
        let mut size = 0;
        for width in LinkWidth::CANDIDATES {
            match try_assign_offsets(entries, width) {
                Ok(layout) => return Ok(layout),
                Err(overflow) => {
                    size = overflow;
                    if width == LinkWidth::Two {
                        info!(
                            dictionary,
                            "autocorrection table exceeds 64KB, switching to 3-byte node links"
                        );
                    }
                }
            }
        }
        Err(CompileError::WidthOverflow {
            dictionary: dictionary.to_string(),
            size,
        })
    }
}

/// Assign offsets under `width`.
///
/// On overflow returns the running size at the point the maximum offset was
/// exceeded, which is a lower bound on the table size.
pub fn try_assign_offsets(
    entries: &[TableEntry],
    width: LinkWidth,
) -> std::result::Result<Layout, u64> {
    let max_offset = width.max_offset();
    let mut offsets = Vec::with_capacity(entries.len());
    let mut byte_offset: u64 = 0;

    for entry in entries {
        offsets.push(byte_offset as u32);
        byte_offset += entry.serialized_len(width) as u64;
        if byte_offset > max_offset {
            return Err(byte_offset);
        }
    }

    Ok(Layout {
        width,
        offsets,
        size: byte_offset as u32,
    })
}
