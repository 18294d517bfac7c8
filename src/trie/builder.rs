//! Incremental construction of the reversed trie.

use super::{NodeId, Trie, TrieNode};
use crate::alphabet::encode_char;
use crate::dictionary::AutocorrectPair;
use crate::error::{CompileError, Result};

/// Builder for constructing a [`Trie`] from autocorrection pairs.
///
/// The dictionary loader already rejects characters outside the alphabet and
/// typos that contain one another. The builder re-checks both, since either
/// would leave a leaf unreachable.
pub struct TrieBuilder {
    nodes: Vec<TrieNode>,
    pairs: Vec<AutocorrectPair>,
}

impl TrieBuilder {
    /// Create a new builder holding only the root.
    pub fn new() -> Self {
        TrieBuilder {
            nodes: vec![TrieNode::default()],
            pairs: Vec::new(),
        }
    }

    /// Insert a pair, descending by the typo's keycodes in reverse order.
    ///
    /// # Errors
    ///
    /// - [`CompileError::EmptyTypo`] if the typo is empty
    /// - [`CompileError::InvalidCharacter`] for characters outside the alphabet
    /// - [`CompileError::OverlappingTypo`] if the path passes through an
    ///   existing terminal or ends on an existing node
    pub fn insert(&mut self, pair: AutocorrectPair) -> Result<()> {
        if pair.typo.is_empty() {
            return Err(CompileError::EmptyTypo {
                correction: pair.correction,
            });
        }

        // Encode up front so a bad character never leaves dangling nodes.
        let codes = pair
            .typo
            .chars()
            .rev()
            .map(|c| {
                encode_char(c).ok_or_else(|| CompileError::InvalidCharacter {
                    typo: pair.typo.clone(),
                    ch: c,
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        let mut node: NodeId = 0;
        for code in codes {
            if self.nodes[node].is_terminal() {
                return Err(CompileError::OverlappingTypo { typo: pair.typo });
            }
            node = self.child_or_insert(node, code);
        }

        let target = &mut self.nodes[node];
        if target.is_terminal() || !target.edges.is_empty() {
            return Err(CompileError::OverlappingTypo { typo: pair.typo });
        }
        target.terminal = Some(self.pairs.len());
        self.pairs.push(pair);
        Ok(())
    }

    /// Finish building and return the trie.
    pub fn build(self) -> Trie {
        Trie {
            nodes: self.nodes,
            pairs: self.pairs,
        }
    }

    fn child_or_insert(&mut self, parent: NodeId, code: u8) -> NodeId {
        match self.nodes[parent]
            .edges
            .binary_search_by_key(&code, |(c, _)| *c)
        {
            Ok(pos) => self.nodes[parent].edges[pos].1,
            Err(pos) => {
                let new_idx = self.nodes.len();
                self.nodes.push(TrieNode::default());
                self.nodes[parent].edges.insert(pos, (code, new_idx));
                new_idx
            }
        }
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_incremental() {
        let mut builder = TrieBuilder::new();
        builder.insert(AutocorrectPair::new("lenght", "length")).unwrap();
        builder.insert(AutocorrectPair::new("widht", "width")).unwrap();
        builder.insert(AutocorrectPair::new("ouput", "output")).unwrap();

        let trie = builder.build();
        assert_eq!(trie.pairs().len(), 3);
        assert_eq!(trie.get("widht").unwrap().correction, "width");
        assert_eq!(trie.get("lenght").unwrap().correction, "length");
    }

    #[test]
    fn test_rejects_invalid_character() {
        let mut builder = TrieBuilder::new();
        let err = builder.insert(AutocorrectPair::new("te-h", "the")).unwrap_err();
        assert_eq!(
            err,
            CompileError::InvalidCharacter {
                typo: "te-h".to_string(),
                ch: '-'
            }
        );
    }

    #[test]
    fn test_rejects_suffix_of_existing_typo() {
        // "eh" reversed is a prefix of "teh" reversed: it would end on an inner node.
        let mut builder = TrieBuilder::new();
        builder.insert(AutocorrectPair::new("teh", "the")).unwrap();
        let err = builder.insert(AutocorrectPair::new("eh", "x")).unwrap_err();
        assert!(matches!(err, CompileError::OverlappingTypo { .. }));
    }

    #[test]
    fn test_rejects_path_through_terminal() {
        let mut builder = TrieBuilder::new();
        builder.insert(AutocorrectPair::new("teh", "the")).unwrap();
        let err = builder.insert(AutocorrectPair::new("steh", "x")).unwrap_err();
        assert!(matches!(err, CompileError::OverlappingTypo { .. }));
    }

    #[test]
    fn test_rejects_duplicate() {
        let mut builder = TrieBuilder::new();
        builder.insert(AutocorrectPair::new("teh", "the")).unwrap();
        let err = builder.insert(AutocorrectPair::new("teh", "ten")).unwrap_err();
        assert!(matches!(err, CompileError::OverlappingTypo { .. }));
    }

    #[test]
    fn test_rejects_empty_typo() {
        let mut builder = TrieBuilder::new();
        assert!(matches!(
            builder.insert(AutocorrectPair::new("", "x")),
            Err(CompileError::EmptyTypo { .. })
        ));
    }

    #[test]
    fn test_failed_insert_keeps_earlier_pairs() {
        let mut builder = TrieBuilder::new();
        builder.insert(AutocorrectPair::new("teh", "the")).unwrap();
        assert!(builder.insert(AutocorrectPair::new("3ab", "the")).is_err());
        let trie = builder.build();
        assert_eq!(trie.pairs().len(), 1);
        assert_eq!(trie.node_count(), 4);
    }
}
