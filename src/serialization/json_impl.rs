//! JSON serializer for human-readable output.

use crate::compiler::CompiledOutput;
use std::io::{Read, Write};

use super::{check_consistency, OutputDeserializer, OutputSerializer, SerializationError};

/// JSON serializer for human-readable output.
pub struct JsonSerializer;

impl OutputSerializer for JsonSerializer {
    const EXTENSION: &'static str = "json";

    fn serialize<W: Write>(output: &CompiledOutput, mut writer: W) -> Result<(), SerializationError> {
        serde_json::to_writer_pretty(&mut writer, output)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl OutputDeserializer for JsonSerializer {
    fn deserialize<R: Read>(mut reader: R) -> Result<CompiledOutput, SerializationError> {
        let output: CompiledOutput = serde_json::from_reader(&mut reader)?;
        check_consistency(&output)?;
        Ok(output)
    }
}
