//! Compiling several dictionaries into one data array.
//!
//! The firmware can switch between up to [`MAX_DICTIONARIES`] tables at
//! runtime. Their regions are concatenated in the order given, and a parallel
//! metadata table records where each one starts and how to read it.

use tracing::debug;

use crate::dictionary::{AutocorrectPair, Dictionary};
use crate::error::{CompileError, Result};
use crate::table::layout::LinkWidth;
use crate::table::{AutocorrectTable, EntryCounts};

/// Most dictionaries the firmware can index.
pub const MAX_DICTIONARIES: usize = 8;

/// Where one dictionary lives in [`CompiledOutput::data`] and how to read it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DictionaryMetadata {
    /// Dictionary name
    pub name: String,
    /// Start of the region within the data array
    pub offset: u32,
    /// Shortest raw typo length
    pub min_length: u16,
    /// Longest raw typo length
    pub max_length: u16,
    /// Region length in bytes
    pub size: u32,
    /// Node link width
    pub link_width: LinkWidth,
    /// Source pairs, kept for generated comments
    pub pairs: Vec<AutocorrectPair>,
}

/// The compiled artifact: concatenated tables plus metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CompiledOutput {
    /// Per-dictionary metadata, in concatenation order
    pub dictionaries: Vec<DictionaryMetadata>,
    /// All regions back to back
    pub data: Vec<u8>,
}

impl CompiledOutput {
    /// Number of dictionaries.
    pub fn dictionary_count(&self) -> usize {
        self.dictionaries.len()
    }

    /// Total number of pairs across dictionaries.
    pub fn entry_count(&self) -> usize {
        self.dictionaries.iter().map(|d| d.pairs.len()).sum()
    }

    /// Longest typo across dictionaries; sizes the firmware's typing buffer.
    pub fn typo_buffer_size(&self) -> u16 {
        self.dictionaries
            .iter()
            .map(|d| d.max_length)
            .max()
            .unwrap_or(0)
    }

    /// The bytes of one dictionary's region.
    pub fn region(&self, index: usize) -> Option<&[u8]> {
        let meta = self.dictionaries.get(index)?;
        let start = meta.offset as usize;
        self.data.get(start..start + meta.size as usize)
    }
}

/// Summary of one compiled table, for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableStats {
    /// Dictionary name
    pub name: String,
    /// Number of pairs
    pub pairs: usize,
    /// Entries by kind
    pub entries: EntryCounts,
    /// Serialized size
    pub size: usize,
    /// Node link width
    pub link_width: LinkWidth,
    /// Shortest raw typo length
    pub min_length: u16,
    /// Longest raw typo length
    pub max_length: u16,
}

impl From<&AutocorrectTable> for TableStats {
    fn from(table: &AutocorrectTable) -> Self {
        TableStats {
            name: table.name().to_string(),
            pairs: table.pairs().len(),
            entries: table.entry_counts(),
            size: table.size(),
            link_width: table.link_width(),
            min_length: table.min_typo_len(),
            max_length: table.max_typo_len(),
        }
    }
}

/// Compile each dictionary to a table, without concatenating.
///
/// # Errors
///
/// - [`CompileError::NoDictionaries`] / [`CompileError::TooManyDictionaries`]
///   if the count is outside `1..=8`
/// - the first error from [`AutocorrectTable::compile`]
pub fn compile_tables(dictionaries: &[Dictionary]) -> Result<Vec<AutocorrectTable>> {
    check_count(dictionaries.len())?;
    dictionaries
        .iter()
        .map(|d| AutocorrectTable::compile(d.name.clone(), &d.pairs))
        .collect()
}

/// Compile and concatenate dictionaries.
///
/// # Errors
///
/// See [`compile_tables`]. Nothing is produced unless every dictionary
/// compiles.
pub fn compile(dictionaries: &[Dictionary]) -> Result<CompiledOutput> {
    let tables = compile_tables(dictionaries)?;
    concatenate(&tables)
}

/// Concatenate compiled tables into one artifact.
///
/// # Errors
///
/// Returns [`CompileError::TooManyDictionaries`] / [`CompileError::NoDictionaries`]
/// on a bad count.
pub fn concatenate(tables: &[AutocorrectTable]) -> Result<CompiledOutput> {
    check_count(tables.len())?;

    let total: usize = tables.iter().map(AutocorrectTable::size).sum();
    let mut data = Vec::with_capacity(total);
    let mut dictionaries = Vec::with_capacity(tables.len());

    for table in tables {
        // At most 8 tables, each bounded by 3-byte links, so offsets fit in u32.
        let offset = data.len() as u32;
        data.extend_from_slice(table.data());
        dictionaries.push(DictionaryMetadata {
            name: table.name().to_string(),
            offset,
            min_length: table.min_typo_len(),
            max_length: table.max_typo_len(),
            size: table.layout().size,
            link_width: table.link_width(),
            pairs: table.pairs().to_vec(),
        });
    }

    let output = CompiledOutput { dictionaries, data };
    debug!(
        dictionaries = output.dictionary_count(),
        entries = output.entry_count(),
        bytes = output.data.len(),
        "concatenated autocorrection tables"
    );
    Ok(output)
}

fn check_count(count: usize) -> Result<()> {
    match count {
        0 => Err(CompileError::NoDictionaries),
        n if n > MAX_DICTIONARIES => Err(CompileError::TooManyDictionaries { count: n }),
        _ => Ok(()),
    }
}
