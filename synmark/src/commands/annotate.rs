//! Annotate command: reads a document, applies the rule file and writes markup.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use synmark_core::{AnnotateOptions, AnnotationEngine, ErrorKind, RegexEngine, RuleSource, SynmarkError};

use crate::errors::CliError;

/// Options for a single annotate run, resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct AnnotateCommandOptions {
    pub format: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub insert_line_breaks: bool,
}

/// Runs the annotate pipeline.
///
/// The stages run in a fixed order so that the first failing stage decides
/// the exit code: input, output, rule compilation, then rendering.
pub fn run_annotate(opts: &AnnotateCommandOptions) -> Result<(), CliError> {
    info!("Starting synmark operation.");

    let document = read_input(opts.input.as_deref()).map_err(CliError::InputFile)?;
    debug!("Read {} bytes of input.", document.len());

    let mut writer = open_output(opts.output.as_deref()).map_err(CliError::OutputFile)?;

    let source = load_rules(opts.format.as_deref())?;
    let options = AnnotateOptions::default().with_line_breaks(opts.insert_line_breaks);
    let engine = RegexEngine::with_options(&source, options).map_err(CliError::FormatFile)?;

    let annotated = engine.annotate_bytes(&document)?;
    debug!("Annotated output is {} bytes.", annotated.len());

    writer
        .write_all(&annotated)
        .and_then(|_| writer.flush())
        .context("Failed to write annotated output")?;

    info!("Synmark operation completed.");
    Ok(())
}

/// Reads the document as raw bytes; no encoding is assumed.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let bytes = match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))?
        }
        None => {
            info!("Reading input from stdin...");
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    Ok(bytes)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("Writing annotated content to file: {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => {
            info!("Writing annotated content to stdout.");
            Ok(Box::new(io::stdout().lock()))
        }
    }
}

/// Loads the rule file. A missing or unreadable file means no rules; a file
/// that was read but cannot be decoded is a rule file error.
fn load_rules(path: Option<&Path>) -> Result<RuleSource, CliError> {
    let Some(path) = path else {
        info!("No rule file given; input is passed through unchanged.");
        return Ok(RuleSource::empty());
    };
    match RuleSource::load_from_file(path) {
        Ok(source) => Ok(source),
        Err(e) if is_read_failure(&e) => {
            warn!("{e:#}; continuing without rules.");
            Ok(RuleSource::empty())
        }
        Err(e) => Err(CliError::FormatFile(e)),
    }
}

fn is_read_failure(err: &anyhow::Error) -> bool {
    err.downcast_ref::<SynmarkError>()
        .is_some_and(|e| e.kind() == ErrorKind::Io)
}
