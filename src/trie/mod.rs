//! Reversed-suffix trie over typo keycodes.
//!
//! Typos are inserted last character first, because the firmware matches
//! backwards from the cursor. Nodes live in a single arena and refer to their
//! children by index; node 0 is the root.

pub mod builder;

pub use builder::TrieBuilder;

use crate::dictionary::AutocorrectPair;

/// Index of a node in the [`Trie`] arena.
pub type NodeId = usize;

/// A node in the reversed trie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Edges to child nodes: (keycode, target node), sorted by keycode
    pub edges: Vec<(u8, NodeId)>,
    /// Index of the pair whose typo ends at this node
    pub terminal: Option<usize>,
}

impl TrieNode {
    /// Whether a typo ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// Find the child reached by `code`.
    #[inline]
    pub fn child(&self, code: u8) -> Option<NodeId> {
        self.edges
            .binary_search_by_key(&code, |(c, _)| *c)
            .ok()
            .map(|pos| self.edges[pos].1)
    }
}

/// An immutable reversed trie, produced by [`TrieBuilder::build`].
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    pairs: Vec<AutocorrectPair>,
}

impl Trie {
    /// Build a trie from pairs in order.
    ///
    /// # Errors
    ///
    /// See [`TrieBuilder::insert`].
    pub fn from_pairs<'a, I>(pairs: I) -> crate::error::Result<Self>
    where
        I: IntoIterator<Item = &'a AutocorrectPair>,
    {
        let mut builder = TrieBuilder::new();
        for pair in pairs {
            builder.insert(pair.clone())?;
        }
        Ok(builder.build())
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.nodes[0]
    }

    /// Get a node by index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The pairs stored at terminal nodes, in insertion order.
    pub fn pairs(&self) -> &[AutocorrectPair] {
        &self.pairs
    }

    /// The pair stored at a terminal node.
    pub fn terminal_pair(&self, id: NodeId) -> Option<&AutocorrectPair> {
        self.nodes[id].terminal.map(|idx| &self.pairs[idx])
    }

    /// Whether the trie holds no typos.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Follow a sequence of keycodes from the root.
    pub fn walk<I>(&self, codes: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = u8>,
    {
        codes
            .into_iter()
            .try_fold(0, |node, code| self.nodes[node].child(code))
    }

    /// Look up the pair for a typo, walking its characters in reverse.
    pub fn get(&self, typo: &str) -> Option<&AutocorrectPair> {
        let codes: Option<Vec<u8>> = typo.chars().rev().map(crate::alphabet::encode_char).collect();
        let node = self.walk(codes?)?;
        self.terminal_pair(node)
    }

    /// Depth of the shallowest terminal reached when walking the reversed
    /// typo, used to check that no typo's path stops inside another.
    pub fn first_terminal_depth(&self, typo: &str) -> Option<usize> {
        let mut node = 0;
        for (depth, c) in typo.chars().rev().enumerate() {
            node = self.nodes[node].child(crate::alphabet::encode_char(c)?)?;
            if self.nodes[node].is_terminal() {
                return Some(depth + 1);
            }
        }
        None
    }
}
