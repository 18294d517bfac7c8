//! # autocorrect-trie
//!
//! Compiles `typo -> correction` dictionaries into the compact trie encoding
//! scanned by keyboard firmware autocorrection.
//!
//! The firmware keeps a small buffer of recently typed keys and, on every
//! keypress, walks a trie *backwards* from the cursor. When it reaches a leaf
//! it sends a number of backspaces followed by the tail of the correction.
//! This crate produces that trie:
//!
//! 1. typos are inserted back-to-front into an arena trie ([`trie`]),
//! 2. the trie is flattened into leaf, chain and branch entries ([`table`]),
//! 3. each leaf stores the minimal edit (backspaces + suffix) for its pair,
//! 4. entries are laid out with the narrowest node link width that fits,
//! 5. all dictionaries are concatenated with a metadata table ([`compiler`]).
//!
//! ## Example
//!
//! ```rust
//! use autocorrect_trie::prelude::*;
//!
//! let pairs = vec![
//!     AutocorrectPair::new("teh", "the"),
//!     AutocorrectPair::new(":thier", "their"),
//! ];
//! let table = AutocorrectTable::compile("default", &pairs).unwrap();
//!
//! assert_eq!(table.link_width(), LinkWidth::Two);
//! assert_eq!(table.min_typo_len(), 3);
//! assert_eq!(table.max_typo_len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod compiler;
pub mod dictionary;
pub mod error;
pub mod table;
pub mod trie;

#[cfg(feature = "serialization")]
pub mod serialization;

/// Command-line front end
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::alphabet::{encode_char, WORD_BOUNDARY};
    pub use crate::compiler::{compile, CompiledOutput, DictionaryMetadata, MAX_DICTIONARIES};
    pub use crate::dictionary::{
        AutocorrectPair, Dictionary, LoadOptions, LoadWarning, LoadedDictionary, WordList,
    };
    pub use crate::error::{CompileError, DictionaryError};
    pub use crate::table::edit::Edit;
    pub use crate::table::layout::{Layout, LinkWidth};
    pub use crate::table::{AutocorrectTable, EntryId, TableEntry};
    pub use crate::trie::{Trie, TrieBuilder};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        BincodeSerializer, CHeaderSerializer, JsonSerializer, OutputDeserializer,
        OutputSerializer,
    };
}
