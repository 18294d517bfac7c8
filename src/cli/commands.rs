//! Command implementations

use super::args::{Cli, Commands, OutputFormat};
use super::config::CompilerConfig;
use crate::compiler::{self, CompiledOutput, TableStats, MAX_DICTIONARIES};
use crate::dictionary::{Dictionary, LoadOptions, WordList};
use crate::serialization::{
    BincodeSerializer, CHeaderSerializer, JsonSerializer, OutputDeserializer, OutputSerializer,
};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Base name of the default output file.
pub const DEFAULT_OUTPUT_STEM: &str = "autocorrect_data";

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = CompilerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Compile {
            dicts,
            output,
            format,
            word_list,
            deny_warnings,
        } => cmd_compile(
            CompileRequest {
                dicts,
                output,
                format,
                word_list,
                deny_warnings,
            },
            &config,
            &mut std::io::stdout().lock(),
        )
        .map(|_| ()),
        Commands::Inspect { dicts, word_list } => {
            cmd_inspect(dicts, word_list, &config, &mut std::io::stdout().lock())
        }
    }
}

/// Arguments of the `compile` command after parsing.
#[derive(Debug, Clone, Default)]
pub struct CompileRequest {
    /// Dictionary files
    pub dicts: Vec<PathBuf>,
    /// Output file
    pub output: Option<PathBuf>,
    /// Output format
    pub format: Option<OutputFormat>,
    /// Word list override
    pub word_list: Option<PathBuf>,
    /// Treat warnings as errors
    pub deny_warnings: bool,
}

/// Compile dictionaries and write the artifact, reporting to `out`.
///
/// Returns the path written.
pub fn cmd_compile<W: Write>(
    request: CompileRequest,
    config: &CompilerConfig,
    out: &mut W,
) -> Result<PathBuf> {
    let CompileRequest {
        mut dicts,
        mut output,
        format,
        word_list,
        deny_warnings,
    } = request;

    // A trailing .h argument names the output file.
    if output.is_none() && has_extension(dicts.last(), "h") {
        output = dicts.pop();
    }

    let format = format.or(config.format).unwrap_or_default();
    let deny_warnings = deny_warnings || config.deny_warnings;
    let dictionaries = load_dictionaries(&dicts, word_list.as_deref(), config, deny_warnings)?;

    let compiled = compiler::compile(&dictionaries).context("Failed to compile dictionaries")?;

    let path = match output {
        Some(path) => path,
        None => default_output_path(&dicts[0], format),
    };
    write_output(&compiled, format, &path)?;

    writeln!(
        out,
        "Processed {} autocorrection entries to table with {} bytes.",
        compiled.entry_count(),
        compiled.data.len()
    )?;
    writeln!(out, "Wrote autocorrection data to {}", path.display())?;
    Ok(path)
}

/// Print per-dictionary table statistics.
pub fn cmd_inspect<W: Write>(
    dicts: Vec<PathBuf>,
    word_list: Option<PathBuf>,
    config: &CompilerConfig,
    out: &mut W,
) -> Result<()> {
    if let [path] = dicts.as_slice() {
        let artifact = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(OutputFormat::from_artifact_extension);
        if let Some(format) = artifact {
            let compiled = read_artifact(path, format)?;
            return print_artifact(&compiled, out);
        }
    }

    let dictionaries = load_dictionaries(&dicts, word_list.as_deref(), config, false)?;
    let tables =
        compiler::compile_tables(&dictionaries).context("Failed to compile dictionaries")?;

    for table in &tables {
        print_stats(&TableStats::from(table), out)?;
    }
    let total: usize = tables.iter().map(|t| t.size()).sum();
    writeln!(out, "{} {} bytes", "Total:".bold(), total)?;
    Ok(())
}

fn load_dictionaries(
    paths: &[PathBuf],
    word_list: Option<&Path>,
    config: &CompilerConfig,
    deny_warnings: bool,
) -> Result<Vec<Dictionary>> {
    if paths.is_empty() {
        bail!("At least one dictionary file must be provided");
    }
    if paths.len() > MAX_DICTIONARIES {
        bail!(
            "Current EEPROM settings can only index up to {} dicts, got {}",
            MAX_DICTIONARIES,
            paths.len()
        );
    }

    let words = match word_list.or(config.word_list.as_deref()) {
        Some(path) => WordList::load(path)
            .with_context(|| format!("Failed to load word list: {}", path.display()))?,
        None => {
            tracing::info!("no word list given, checking false triggers against built-in words");
            WordList::fallback()
        }
    };
    let mut options = LoadOptions::default();
    if let Some(min) = config.min_typo_length {
        options.min_typo_length = min;
    }

    let mut dictionaries = Vec::with_capacity(paths.len());
    let mut warning_count = 0;
    for path in paths {
        let loaded = Dictionary::load(path, &words, &options)
            .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;
        warning_count += loaded.warnings.len();
        dictionaries.push(loaded.dictionary);
    }

    if deny_warnings && warning_count > 0 {
        bail!("{} dictionary warning(s) with --deny-warnings", warning_count);
    }
    Ok(dictionaries)
}

fn write_output(compiled: &CompiledOutput, format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Header => CHeaderSerializer::serialize(compiled, &mut writer)?,
        OutputFormat::Json => JsonSerializer::serialize(compiled, &mut writer)?,
        OutputFormat::Bincode => BincodeSerializer::serialize(compiled, &mut writer)?,
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}

fn read_artifact(path: &Path, format: OutputFormat) -> Result<CompiledOutput> {
    let file =
        File::open(path).with_context(|| format!("Failed to open artifact: {}", path.display()))?;
    let reader = BufReader::new(file);
    let compiled = match format {
        OutputFormat::Json => JsonSerializer::deserialize(reader)?,
        OutputFormat::Bincode => BincodeSerializer::deserialize(reader)?,
        OutputFormat::Header => bail!("C headers cannot be read back"),
    };
    Ok(compiled)
}

fn print_stats<W: Write>(stats: &TableStats, out: &mut W) -> Result<()> {
    writeln!(out, "{}", stats.name.bold())?;
    writeln!(out, "  Pairs:        {}", stats.pairs)?;
    writeln!(
        out,
        "  Entries:      {} leaf, {} chain, {} branch",
        stats.entries.leaves, stats.entries.chains, stats.entries.branches
    )?;
    writeln!(out, "  Size:         {} bytes", stats.size)?;
    writeln!(out, "  Link width:   {} bytes", stats.link_width)?;
    writeln!(
        out,
        "  Typo length:  {}..={}",
        stats.min_length, stats.max_length
    )?;
    Ok(())
}

fn print_artifact<W: Write>(compiled: &CompiledOutput, out: &mut W) -> Result<()> {
    for meta in &compiled.dictionaries {
        writeln!(out, "{}", meta.name.bold())?;
        writeln!(out, "  Pairs:        {}", meta.pairs.len())?;
        writeln!(out, "  Offset:       {}", meta.offset)?;
        writeln!(out, "  Size:         {} bytes", meta.size)?;
        writeln!(out, "  Link width:   {} bytes", meta.link_width)?;
        writeln!(
            out,
            "  Typo length:  {}..={}",
            meta.min_length, meta.max_length
        )?;
    }
    writeln!(out, "{} {} bytes", "Total:".bold(), compiled.data.len())?;
    Ok(())
}

/// `autocorrect_data.<ext>` in the directory of `first_dict`.
pub fn default_output_path(first_dict: &Path, format: OutputFormat) -> PathBuf {
    let dir = first_dict.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{}.{}", DEFAULT_OUTPUT_STEM, format.extension()))
}

fn has_extension(path: Option<&PathBuf>, ext: &str) -> bool {
    path.and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == ext)
}
