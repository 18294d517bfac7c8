//! Flattening the reversed trie into table entries.
//!
//! Nodes are classified in priority order:
//!
//! 1. a terminal node becomes a [`TableEntry::Leaf`],
//! 2. a node with one child starts a [`TableEntry::Chain`] that absorbs every
//!    following single-child, non-terminal node,
//! 3. anything else becomes a [`TableEntry::Branch`].
//!
//! Entries are appended in depth-first pre-order, so every link points to an
//! entry after its source and a chain's continuation is always the entry
//! right after the chain.

use super::edit::Edit;
use super::{EntryId, TableEntry};
use crate::error::Result;
use crate::trie::{NodeId, Trie};

/// Flatten `trie` into entries in table order.
///
/// # Errors
///
/// Propagates [`Edit::for_pair`] errors for leaves.
pub fn compress(trie: &Trie) -> Result<Vec<TableEntry>> {
    let mut table = Vec::with_capacity(trie.node_count());
    traverse(trie, 0, &mut table)?;
    Ok(table)
}

fn traverse(trie: &Trie, node_id: NodeId, table: &mut Vec<TableEntry>) -> Result<EntryId> {
    let id = EntryId(table.len());
    let node = trie.node(node_id);

    if let Some(pair) = node.terminal {
        let edit = Edit::for_pair(&trie.pairs()[pair])?;
        table.push(TableEntry::Leaf { pair, edit });
        return Ok(id);
    }

    if let [(code, child)] = node.edges.as_slice() {
        // Long runs of single-child nodes are common; store them as one entry.
        let mut codes = vec![*code];
        let mut current = *child;
        loop {
            let next = trie.node(current);
            match next.edges.as_slice() {
                [(code, child)] if !next.is_terminal() => {
                    codes.push(*code);
                    current = *child;
                }
                _ => break,
            }
        }

        table.push(TableEntry::Chain {
            codes,
            next: EntryId(id.0 + 1),
        });
        let next = traverse(trie, current, table)?;
        debug_assert_eq!(next.0, id.0 + 1, "chain continuation must follow the chain");
        return Ok(id);
    }

    table.push(TableEntry::Branch {
        children: Vec::with_capacity(node.edges.len()),
    });
    for &(code, child) in &node.edges {
        let link = traverse(trie, child, table)?;
        if let TableEntry::Branch { children } = &mut table[id.0] {
            children.push((code, link));
        }
    }
    Ok(id)
}
