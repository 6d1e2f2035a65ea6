// synmark/src/cli.rs
//! This file defines the command-line interface (CLI) for the synmark application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "synmark",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Highlight plain text with HTML style tags",
    long_about = "Synmark reads a document and a rule file. Every rule pairs a pattern with a list of styles; each match of the pattern is wrapped in the corresponding tags (b, i, u, tt, font size, font color). The annotated document is written to stdout or to a file."
)]
pub struct Cli {
    /// Rule file: one `<pattern>\t<style>[,<style>...]` rule per line.
    #[arg(long, value_name = "FILE", help = "Read highlighting rules from this file.")]
    pub format: Option<PathBuf>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input: Option<PathBuf>,

    /// Write annotated output to this file instead of stdout.
    #[arg(long, value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Insert a `<br />` marker before every newline.
    #[arg(long, help = "Insert a <br /> marker before every newline.")]
    pub br: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

impl Cli {
    /// The log level forced by `--quiet` / `--debug`, if any. `--quiet` wins.
    pub fn log_level_override(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.debug {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}
