//! Serialized autocorrection tables.
//!
//! A table is the flattened form of a reversed [`Trie`]: a depth-first list of
//! entries, each one of three kinds.
//!
//! ```text
//! Leaf    [0x80 | backspaces] [suffix bytes...] [0x00]
//! Chain   [code] [code] ... [0x00]                      next entry follows
//! Branch  [0x40 | code] [link] [code] [link] ... [0x00]
//! ```
//!
//! Links are little-endian byte offsets from the start of the dictionary's
//! own region, all with the same width (see [`layout`]). Every link points
//! forward: a parent is always placed before the subtrees it references.

pub mod compress;
pub mod edit;
pub mod encode;
pub mod layout;

use std::fmt;

use tracing::debug;

use crate::dictionary::AutocorrectPair;
use crate::error::{CompileError, Result};
use crate::trie::Trie;
use edit::Edit;
use layout::{Layout, LinkWidth};

/// Position of an entry in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub usize);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node of the compressed trie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEntry {
    /// A typo ends here.
    Leaf {
        /// Index of the pair in the source dictionary
        pair: usize,
        /// Backspaces and replacement suffix
        edit: Edit,
    },
    /// A run of single-child nodes.
    ///
    /// The continuation is not serialized; it is always the next entry.
    Chain {
        /// Keycodes in match order (reverse typo order)
        codes: Vec<u8>,
        /// Entry the chain continues into, always the one right after it
        next: EntryId,
    },
    /// A node with two or more children.
    Branch {
        /// (keycode, child) pairs by ascending keycode
        children: Vec<(u8, EntryId)>,
    },
}

/// Kind of a [`TableEntry`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// See [`TableEntry::Leaf`]
    Leaf,
    /// See [`TableEntry::Chain`]
    Chain,
    /// See [`TableEntry::Branch`]
    Branch,
}

impl TableEntry {
    /// The entry's kind.
    pub fn kind(&self) -> EntryKind {
        match self {
            TableEntry::Leaf { .. } => EntryKind::Leaf,
            TableEntry::Chain { .. } => EntryKind::Chain,
            TableEntry::Branch { .. } => EntryKind::Branch,
        }
    }

    /// Number of bytes this entry occupies under `width`.
    pub fn serialized_len(&self, width: LinkWidth) -> usize {
        match self {
            TableEntry::Leaf { edit, .. } => edit.payload_len(),
            TableEntry::Chain { codes, .. } => codes.len() + 1,
            TableEntry::Branch { children } => children.len() * (1 + width.bytes()) + 1,
        }
    }

    /// Entries this one refers to, implicit chain continuations included.
    pub fn links(&self) -> Vec<EntryId> {
        match self {
            TableEntry::Leaf { .. } => Vec::new(),
            TableEntry::Chain { next, .. } => vec![*next],
            TableEntry::Branch { children } => children.iter().map(|(_, id)| *id).collect(),
        }
    }
}

/// Count of entries by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryCounts {
    /// Leaf entries, one per pair
    pub leaves: usize,
    /// Chain entries
    pub chains: usize,
    /// Branch entries
    pub branches: usize,
}

/// A compiled autocorrection table for one dictionary.
#[derive(Clone, Debug)]
pub struct AutocorrectTable {
    name: String,
    pairs: Vec<AutocorrectPair>,
    entries: Vec<TableEntry>,
    layout: Layout,
    data: Vec<u8>,
    min_typo_len: u16,
    max_typo_len: u16,
}

impl AutocorrectTable {
    /// Compile a dictionary's pairs into a serialized table.
    ///
    /// `name` only appears in diagnostics.
    ///
    /// # Errors
    ///
    /// Any [`CompileError`] from building, compressing, laying out or
    /// encoding the table. An empty `pairs` is [`CompileError::EmptyDictionary`].
    pub fn compile(name: impl Into<String>, pairs: &[AutocorrectPair]) -> Result<Self> {
        let name = name.into();
        if pairs.is_empty() {
            return Err(CompileError::EmptyDictionary { dictionary: name });
        }

        let trie = Trie::from_pairs(pairs)?;
        let entries = compress::compress(&trie)?;
        let layout = Layout::resolve(&name, &entries)?;
        let data = encode::encode_entries(&entries, &layout)?;

        let lengths = pairs.iter().map(|p| p.typo_len());
        let min_typo_len = saturate_u16(lengths.clone().min().unwrap_or(0));
        let max_typo_len = saturate_u16(lengths.max().unwrap_or(0));

        debug!(
            dictionary = %name,
            pairs = pairs.len(),
            entries = entries.len(),
            bytes = data.len(),
            link_width = layout.width.bytes(),
            "compiled autocorrection table"
        );

        Ok(AutocorrectTable {
            name,
            pairs: trie.pairs().to_vec(),
            entries,
            layout,
            data,
            min_typo_len,
            max_typo_len,
        })
    }

    /// Dictionary name given at compile time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source pairs, in dictionary order.
    pub fn pairs(&self) -> &[AutocorrectPair] {
        &self.pairs
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Final layout: link width and per-entry offsets.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Byte offset of an entry within this table.
    pub fn offset_of(&self, id: EntryId) -> u32 {
        self.layout.offsets[id.0]
    }

    /// Serialized bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Serialized size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Width of node links.
    pub fn link_width(&self) -> LinkWidth {
        self.layout.width
    }

    /// Length of the shortest raw typo, boundary markers included.
    pub fn min_typo_len(&self) -> u16 {
        self.min_typo_len
    }

    /// Length of the longest raw typo, boundary markers included.
    pub fn max_typo_len(&self) -> u16 {
        self.max_typo_len
    }

    /// Number of entries of each kind.
    pub fn entry_counts(&self) -> EntryCounts {
        self.entries
            .iter()
            .fold(EntryCounts::default(), |mut counts, entry| {
                match entry.kind() {
                    EntryKind::Leaf => counts.leaves += 1,
                    EntryKind::Chain => counts.chains += 1,
                    EntryKind::Branch => counts.branches += 1,
                }
                counts
            })
    }
}

fn saturate_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(items: &[(&str, &str)]) -> Result<AutocorrectTable> {
        let pairs: Vec<_> = items.iter().map(|(t, c)| AutocorrectPair::new(*t, *c)).collect();
        AutocorrectTable::compile("test", &pairs)
    }

    #[test]
    fn test_single_pair_is_chain_then_leaf() {
        let table = compile(&[("teh", "the")]).unwrap();
        assert_eq!(table.entries().len(), 2);
        assert_eq!(
            table.entries()[0],
            TableEntry::Chain {
                codes: vec![0x0B, 0x08, 0x17],
                next: EntryId(1)
            }
        );
        assert_eq!(
            table.data(),
            &[0x0B, 0x08, 0x17, 0x00, 129, b'h', b'e', 0x00]
        );
        assert_eq!(table.link_width(), LinkWidth::Two);
    }

    #[test]
    fn test_typo_lengths_include_boundaries() {
        let table = compile(&[(":thier", "their"), ("fitler", "filter"), ("widht:", "width")])
            .unwrap();
        assert_eq!(table.min_typo_len(), 6);
        assert_eq!(table.max_typo_len(), 6);

        let table = compile(&[(":teh:", "the"), ("acommodate", "accommodate")]).unwrap();
        assert_eq!(table.min_typo_len(), 5);
        assert_eq!(table.max_typo_len(), 10);
    }

    #[test]
    fn test_empty_dictionary() {
        let err = compile(&[]).unwrap_err();
        assert_eq!(
            err,
            CompileError::EmptyDictionary {
                dictionary: "test".to_string()
            }
        );
    }

    #[test]
    fn test_entry_counts() {
        let table = compile(&[("teh", "the"), ("hte", "the")]).unwrap();
        let counts = table.entry_counts();
        assert_eq!(counts.leaves, 2);
        assert_eq!(counts.branches, 1);
        assert_eq!(counts.chains, 2);
        assert_eq!(table.size(), table.layout().size as usize);
    }

    #[test]
    fn test_offsets_follow_entry_lengths() {
        let table = compile(&[("teh", "the"), ("hte", "the"), ("fitler", "filter")]).unwrap();
        let width = table.link_width();
        let mut expected = 0u32;
        for (i, entry) in table.entries().iter().enumerate() {
            assert_eq!(table.offset_of(EntryId(i)), expected);
            expected += entry.serialized_len(width) as u32;
        }
        assert_eq!(expected as usize, table.size());
    }
}
