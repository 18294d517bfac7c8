//! C header output for firmware builds.

use crate::compiler::CompiledOutput;
use std::fmt::Write as _;
use std::io::Write;

use super::{OutputSerializer, SerializationError};

/// Column limit for the wrapped data array.
const WRAP_WIDTH: usize = 100;
const INDENT: &str = "    ";

/// Writes a `#pragma once` header with the metadata arrays and the data
/// array as `PROGMEM` constants.
///
/// The header opens with a comment listing every pair, grouped by
/// dictionary.
pub struct CHeaderSerializer;

impl OutputSerializer for CHeaderSerializer {
    const EXTENSION: &'static str = "h";

    fn serialize<W: Write>(output: &CompiledOutput, mut writer: W) -> Result<(), SerializationError> {
        writer.write_all(render(output).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Render the full header text.
pub(crate) fn render(output: &CompiledOutput) -> String {
    let mut out = String::new();

    out.push_str("// Generated code.\n\n");
    let _ = writeln!(
        out,
        "// Autocorrection dictionary ({} entries):",
        output.entry_count()
    );
    for meta in &output.dictionaries {
        let _ = writeln!(out, "// From {}", meta.name);
        let width = meta
            .pairs
            .iter()
            .map(|p| p.typo.chars().count())
            .max()
            .unwrap_or(0);
        for pair in &meta.pairs {
            let _ = writeln!(out, "//   {:<width$} -> {}", pair.typo, pair.correction);
        }
        let _ = writeln!(out, "// {}", "-".repeat(15));
    }

    out.push_str("\n#pragma once\n\n");
    let _ = writeln!(out, "#define N_DICTS {}\n", output.dictionary_count());

    let metas = &output.dictionaries;
    let _ = writeln!(
        out,
        "static const uint32_t autocorrect_offsets[N_DICTS] PROGMEM     = {{{}}};",
        join(metas.iter().map(|m| m.offset))
    );
    let _ = writeln!(
        out,
        "static const uint16_t autocorrect_min_lengths[N_DICTS] PROGMEM = {{{}}};",
        join(metas.iter().map(|m| m.min_length))
    );
    let _ = writeln!(
        out,
        "static const uint16_t autocorrect_max_lengths[N_DICTS] PROGMEM = {{{}}};",
        join(metas.iter().map(|m| m.max_length))
    );
    let _ = writeln!(
        out,
        "static const uint32_t autocorrect_sizes[N_DICTS] PROGMEM       = {{{}}};",
        join(metas.iter().map(|m| m.size))
    );
    let _ = writeln!(
        out,
        "static const uint8_t  autocorrect_node_size[N_DICTS] PROGMEM   = {{{}}};\n",
        join(metas.iter().map(|m| m.link_width.bytes()))
    );

    let _ = writeln!(out, "#define DICTIONARY_SIZE {}", output.data.len());
    let _ = writeln!(out, "#define TYPO_BUFFER_SIZE {}\n", output.typo_buffer_size());

    out.push_str("static const uint8_t autocorrect_data[DICTIONARY_SIZE] PROGMEM = {\n");
    out.push_str(&wrap_hex(&output.data));
    out.push_str("\n};\n\n");
    out
}

fn join<T: std::fmt::Display>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

/// `0xNN` bytes separated by `", "`, greedily filled into indented lines of at
/// most [`WRAP_WIDTH`] columns.
fn wrap_hex(data: &[u8]) -> String {
    let count = data.len();
    let mut out = String::new();
    let mut line = String::from(INDENT);
    let mut line_has_token = false;

    for (i, byte) in data.iter().enumerate() {
        let token = if i + 1 < count {
            format!("0x{byte:02X},")
        } else {
            format!("0x{byte:02X}")
        };

        if !line_has_token {
            line.push_str(&token);
            line_has_token = true;
        } else if line.len() + 1 + token.len() <= WRAP_WIDTH {
            line.push(' ');
            line.push_str(&token);
        } else {
            out.push_str(&line);
            out.push('\n');
            line = format!("{INDENT}{token}");
        }
    }

    if line_has_token {
        out.push_str(&line);
    }
    out
}
