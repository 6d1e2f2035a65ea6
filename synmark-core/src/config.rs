//! Configuration management for `synmark-core`.
//!
//! Two things configure an annotation run: the rule file (a [`RuleSource`],
//! one rule per non-blank line) and the [`AnnotateOptions`] chosen by the
//! caller.
//!
//! License: MIT OR Apache-2.0

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::compiler::{compile_lines, CompiledRules};
use crate::errors::SynmarkError;

/// Options that shape the rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Insert a `<br />` marker before every newline of the document.
    pub insert_line_breaks: bool,
}

impl AnnotateOptions {
    pub fn with_line_breaks(mut self, enabled: bool) -> Self {
        self.insert_line_breaks = enabled;
        self
    }
}

/// The raw lines of a rule file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSource {
    pub lines: Vec<String>,
}

impl RuleSource {
    /// A rule source with no rules; annotation then only inserts line breaks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a rule file.
    ///
    /// # Errors
    ///
    /// Fails with [`SynmarkError::Io`] when the file cannot be read and with
    /// [`SynmarkError::InvalidEncoding`] when it is not valid UTF-8.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading rules from: {}", path.display());
        let bytes = std::fs::read(path)
            .map_err(SynmarkError::from)
            .with_context(|| format!("Failed to read rule file {}", path.display()))?;
        let source = Self::from_bytes(&bytes)
            .with_context(|| format!("Failed to decode rule file {}", path.display()))?;
        info!("Read {} line(s) from rule file {}.", source.lines.len(), path.display());
        Ok(source)
    }

    /// Decodes rule file contents.
    ///
    /// # Errors
    ///
    /// [`SynmarkError::InvalidEncoding`] naming the first line that is not
    /// valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SynmarkError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.parse(),
            Err(e) => {
                let valid = &bytes[..e.valid_up_to()];
                let line_number = valid.iter().filter(|b| **b == b'\n').count() + 1;
                Err(SynmarkError::InvalidEncoding { line_number })
            }
        }
    }

    /// Number of lines that are not blank.
    pub fn rule_line_count(&self) -> usize {
        self.lines.iter().filter(|l| !l.trim().is_empty()).count()
    }

    /// Compiles every rule, in file order.
    ///
    /// # Errors
    ///
    /// See [`crate::compiler::compile_rules`].
    pub fn compile(&self) -> Result<CompiledRules, SynmarkError> {
        debug!("Starting compilation of {} rule line(s).", self.rule_line_count());
        compile_lines(self.lines.iter().map(String::as_str))
    }
}

impl FromStr for RuleSource {
    type Err = SynmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            lines: s.lines().map(str::to_string).collect(),
        })
    }
}
