//! Bincode serializer for compact binary format.

use crate::compiler::CompiledOutput;
use std::io::{Read, Write};

use super::{check_consistency, OutputDeserializer, OutputSerializer, SerializationError};

/// Bincode serializer for compact binary format.
///
/// Stores the whole [`CompiledOutput`], source pairs included, so it can be
/// reloaded and regenerated into a header later.
pub struct BincodeSerializer;

impl OutputSerializer for BincodeSerializer {
    const EXTENSION: &'static str = "bin";

    fn serialize<W: Write>(output: &CompiledOutput, mut writer: W) -> Result<(), SerializationError> {
        bincode::serialize_into(&mut writer, output)?;
        Ok(())
    }
}

impl OutputDeserializer for BincodeSerializer {
    fn deserialize<R: Read>(mut reader: R) -> Result<CompiledOutput, SerializationError> {
        let output: CompiledOutput = bincode::deserialize_from(&mut reader)?;
        check_consistency(&output)?;
        Ok(output)
    }
}
