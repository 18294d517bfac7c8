//! Byte-level reader for compiled tables, mirroring the firmware's scan.

#![allow(dead_code)]

use autocorrect_trie::prelude::*;

const LEAF: u8 = 0x80;
const BRANCH: u8 = 0x40;
const CODE_MASK: u8 = 0x3F;

/// What a structural walk of a region found.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RegionSummary {
    pub leaves: usize,
    pub chains: usize,
    pub branches: usize,
    /// Offsets of every entry visited, in visit order
    pub entry_offsets: Vec<usize>,
}

fn read_link(data: &[u8], at: usize, width: usize) -> usize {
    (0..width).fold(0, |acc, i| acc | (data[at + i] as usize) << (8 * i))
}

/// Walk a region from offset 0, checking flags, links and terminators.
///
/// Panics with a description of the first malformed byte.
pub fn check_region(data: &[u8], width: LinkWidth) -> RegionSummary {
    let mut summary = RegionSummary::default();
    visit(data, 0, width.bytes(), &mut summary);
    summary
}

fn visit(data: &[u8], state: usize, width: usize, summary: &mut RegionSummary) {
    assert!(state < data.len(), "entry offset {state} outside region of {}", data.len());
    summary.entry_offsets.push(state);
    let first = data[state];

    if first & LEAF != 0 {
        let end = data[state + 1..]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or_else(|| panic!("unterminated leaf at {state}"));
        assert!(data[state + 1..state + 1 + end].is_ascii());
        summary.leaves += 1;
    } else if first & BRANCH != 0 {
        summary.branches += 1;
        let mut pos = state;
        let mut code = first & CODE_MASK;
        let mut previous = None;
        while code != 0 {
            assert!(code <= CODE_MASK, "branch code {code:#x} at {pos} has flag bits");
            if let Some(prev) = previous {
                assert!(code > prev, "branch children out of order at {pos}");
            }
            previous = Some(code);
            let link = read_link(data, pos + 1, width);
            assert!(link > state, "link at {pos} points backwards to {link}");
            assert!(link < data.len(), "link at {pos} points past the region to {link}");
            visit(data, link, width, summary);
            pos += 1 + width;
            code = data[pos];
        }
    } else {
        assert_ne!(first, 0, "empty chain at {state}");
        summary.chains += 1;
        let mut pos = state;
        while data[pos] != 0 {
            assert!(data[pos] <= CODE_MASK, "chain byte {:#x} at {pos} has flag bits", data[pos]);
            pos += 1;
        }
        visit(data, pos + 1, width, summary);
    }
}

/// The leaf the firmware would reach after `typed` keycodes, last key last.
///
/// Returns the backspace count and replacement suffix.
pub fn lookup(data: &[u8], width: LinkWidth, typed: &[u8]) -> Option<(u8, String)> {
    let width = width.bytes();
    let mut state = 0;
    let mut code = data[state];

    for &key in typed.iter().rev() {
        if code & BRANCH != 0 {
            code &= CODE_MASK;
            while code != key {
                if code == 0 {
                    return None;
                }
                state += 1 + width;
                code = data[state];
            }
            state = read_link(data, state + 1, width);
        } else if code != key {
            return None;
        } else {
            state += 1;
            if data[state] == 0 {
                state += 1;
            }
        }

        code = data[state];
        if code & LEAF != 0 {
            let end = state + 1 + data[state + 1..].iter().position(|&b| b == 0)?;
            let suffix = String::from_utf8(data[state + 1..end].to_vec()).ok()?;
            return Some((code & CODE_MASK, suffix));
        }
    }
    None
}

/// Keycodes the firmware buffer holds when `typo` is completed.
pub fn typed_codes(typo: &str) -> Vec<u8> {
    typo.chars()
        .map(|c| encode_char(c).expect("typo character outside the alphabet"))
        .collect()
}

/// Replay every pair against the region and check the on-screen result.
pub fn assert_corrects_all(data: &[u8], width: LinkWidth, pairs: &[AutocorrectPair]) {
    for pair in pairs {
        let (backspaces, suffix) = lookup(data, width, &typed_codes(&pair.typo))
            .unwrap_or_else(|| panic!("no leaf for typo {:?}", pair.typo));
        let edit = Edit { backspaces, suffix };
        let on_screen = Edit::typed_before_trigger(&pair.typo);
        assert_eq!(
            edit.apply(on_screen).as_deref(),
            Some(pair.correction.as_str()),
            "typo {:?}",
            pair.typo
        );
    }
}
