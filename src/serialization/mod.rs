//! Writing compiled autocorrection data.
//!
//! The firmware consumes a generated C header ([`CHeaderSerializer`]). The
//! same [`CompiledOutput`] can also be stored as JSON or bincode, which can be
//! read back for inspection.
//!
//! # Example
//!
//! ```rust,ignore
//! use autocorrect_trie::prelude::*;
//! use std::fs::File;
//!
//! let output = compile(&dictionaries)?;
//!
//! let file = File::create("autocorrect_data.h")?;
//! CHeaderSerializer::serialize(&output, file)?;
//! ```

use crate::compiler::{CompiledOutput, MAX_DICTIONARIES};
use std::io::{Read, Write};

mod bincode_impl;
mod header_impl;
mod json_impl;

pub use self::bincode_impl::BincodeSerializer;
pub use self::header_impl::CHeaderSerializer;
pub use self::json_impl::JsonSerializer;

/// Trait for writing a compiled artifact.
pub trait OutputSerializer {
    /// Conventional file extension, without the dot.
    const EXTENSION: &'static str;

    /// Serialize `output` to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(output: &CompiledOutput, writer: W) -> Result<(), SerializationError>;
}

/// Trait for formats that can be read back.
pub trait OutputDeserializer {
    /// Deserialize an artifact and check that its metadata is consistent.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or
    /// [`SerializationError::Inconsistent`] if the metadata does not
    /// describe the data array.
    fn deserialize<R: Read>(reader: R) -> Result<CompiledOutput, SerializationError>;
}

/// Errors that can occur while writing or reading an artifact.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    /// Metadata does not match the data array
    #[error("inconsistent autocorrect data: {0}")]
    Inconsistent(String),
}

/// Check that regions are contiguous, in order, and cover the data exactly.
pub fn check_consistency(output: &CompiledOutput) -> Result<(), SerializationError> {
    let count = output.dictionary_count();
    if count == 0 || count > MAX_DICTIONARIES {
        return Err(SerializationError::Inconsistent(format!(
            "{count} dictionaries, expected 1..={MAX_DICTIONARIES}"
        )));
    }

    let mut expected: u64 = 0;
    for meta in &output.dictionaries {
        if u64::from(meta.offset) != expected {
            return Err(SerializationError::Inconsistent(format!(
                "dictionary \"{}\" starts at {}, expected {expected}",
                meta.name, meta.offset
            )));
        }
        expected += u64::from(meta.size);
    }

    if expected != output.data.len() as u64 {
        return Err(SerializationError::Inconsistent(format!(
            "regions cover {expected} bytes but data has {}",
            output.data.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile;
    use crate::dictionary::{AutocorrectPair, Dictionary};

    fn sample() -> CompiledOutput {
        compile(&[
            Dictionary::new("main", vec![AutocorrectPair::new("teh", "the")]),
            Dictionary::new(
                "extra",
                vec![
                    AutocorrectPair::new(":thier", "their"),
                    AutocorrectPair::new("fitler", "filter"),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_bincode_roundtrip() {
        let output = sample();
        let mut buffer = Vec::new();

        BincodeSerializer::serialize(&output, &mut buffer).unwrap();
        let loaded = BincodeSerializer::deserialize(&buffer[..]).unwrap();

        assert_eq!(loaded, output);
    }

    #[test]
    fn test_json_roundtrip() {
        let output = sample();
        let mut buffer = Vec::new();

        JsonSerializer::serialize(&output, &mut buffer).unwrap();
        let loaded = JsonSerializer::deserialize(&buffer[..]).unwrap();

        assert_eq!(loaded, output);
    }

    #[test]
    fn test_consistency_detects_gap() {
        let mut output = sample();
        output.dictionaries[1].offset += 1;
        assert!(matches!(
            check_consistency(&output),
            Err(SerializationError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_consistency_detects_truncated_data() {
        let mut output = sample();
        output.data.pop();
        assert!(check_consistency(&output).is_err());
    }

    #[test]
    fn test_deserialize_rejects_inconsistent() {
        let mut output = sample();
        output.dictionaries[0].size += 3;
        let mut buffer = Vec::new();
        JsonSerializer::serialize(&output, &mut buffer).unwrap();
        assert!(JsonSerializer::deserialize(&buffer[..]).is_err());
    }
}
