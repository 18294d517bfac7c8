//! Rendering laid-out entries to bytes.

use super::layout::Layout;
use super::TableEntry;
use crate::alphabet::BRANCH_FLAG;
use crate::error::{CompileError, Result};

/// Serialize `entries` under a finalized `layout`.
///
/// # Errors
///
/// - [`CompileError::LinkOutOfRange`] if a branch link does not fit the width
/// - [`CompileError::SizeMismatch`] if the output disagrees with the layout
pub fn encode_entries(entries: &[TableEntry], layout: &Layout) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(layout.size as usize);
    for entry in entries {
        encode_entry(entry, layout, &mut data)?;
    }

    if data.len() as u64 != u64::from(layout.size) {
        return Err(CompileError::SizeMismatch {
            expected: u64::from(layout.size),
            actual: data.len() as u64,
        });
    }
    Ok(data)
}

/// Append one entry's bytes to `out`.
pub fn encode_entry(entry: &TableEntry, layout: &Layout, out: &mut Vec<u8>) -> Result<()> {
    match entry {
        TableEntry::Leaf { edit, .. } => out.extend(edit.payload()),
        TableEntry::Chain { codes, .. } => {
            out.extend_from_slice(codes);
            out.push(0);
        }
        TableEntry::Branch { children } => {
            for (i, (code, child)) in children.iter().enumerate() {
                let flag = if i == 0 { BRANCH_FLAG } else { 0 };
                out.push(code | flag);
                let offset = layout.offsets.get(child.0).copied().ok_or(
                    CompileError::LinkOutOfRange {
                        offset: child.0 as u64,
                        width: layout.width.bytes(),
                    },
                )?;
                out.extend(layout.width.encode(u64::from(offset))?);
            }
            out.push(0);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::edit::Edit;
    use crate::table::layout::{try_assign_offsets, LinkWidth};
    use crate::table::EntryId;

    fn sample() -> Vec<TableEntry> {
        vec![
            TableEntry::Branch {
                children: vec![(0x08, EntryId(1)), (0x0B, EntryId(2))],
            },
            TableEntry::Leaf {
                pair: 0,
                edit: Edit {
                    backspaces: 2,
                    suffix: "the".to_string(),
                },
            },
            TableEntry::Chain {
                codes: vec![0x08, 0x17],
                next: EntryId(3),
            },
            TableEntry::Leaf {
                pair: 1,
                edit: Edit {
                    backspaces: 1,
                    suffix: "a".to_string(),
                },
            },
        ]
    }

    #[test]
    fn test_encode_two_byte_links() {
        let entries = sample();
        let layout = try_assign_offsets(&entries, LinkWidth::Two).unwrap();
        assert_eq!(layout.offsets, vec![0, 7, 12, 15]);

        let data = encode_entries(&entries, &layout).unwrap();
        assert_eq!(
            data,
            vec![
                0x48, 7, 0, 0x0B, 12, 0, 0, // branch
                130, b't', b'h', b'e', 0, // leaf
                0x08, 0x17, 0, // chain
                129, b'a', 0, // leaf
            ]
        );
    }

    #[test]
    fn test_encode_three_byte_links() {
        let entries = sample();
        let layout = try_assign_offsets(&entries, LinkWidth::Three).unwrap();
        let data = encode_entries(&entries, &layout).unwrap();
        assert_eq!(&data[..9], &[0x48, 9, 0, 0, 0x0B, 14, 0, 0, 0]);
        assert_eq!(data.len(), layout.size as usize);
    }

    #[test]
    fn test_only_first_branch_byte_flagged() {
        let entries = sample();
        let layout = try_assign_offsets(&entries, LinkWidth::Two).unwrap();
        let data = encode_entries(&entries, &layout).unwrap();
        assert_eq!(data[0] & BRANCH_FLAG, BRANCH_FLAG);
        assert_eq!(data[3] & BRANCH_FLAG, 0);
    }

    #[test]
    fn test_layout_mismatch_detected() {
        let entries = sample();
        let mut layout = try_assign_offsets(&entries, LinkWidth::Two).unwrap();
        layout.size += 1;
        assert!(matches!(
            encode_entries(&entries, &layout),
            Err(CompileError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_dangling_link_detected() {
        let entries = vec![TableEntry::Branch {
            children: vec![(0x04, EntryId(5)), (0x05, EntryId(6))],
        }];
        let layout = try_assign_offsets(&entries, LinkWidth::Two).unwrap();
        assert!(matches!(
            encode_entries(&entries, &layout),
            Err(CompileError::LinkOutOfRange { .. })
        ));
    }
}
