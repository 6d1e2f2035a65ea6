//! errors.rs - Custom error types for the synmark-core library.
//!
//! Every failure the core can produce happens before scanning starts: a rule
//! line that cannot be split, a dialect pattern the translator rejects, or a
//! style token that is not recognised. Callers that need to branch on the
//! failure class (the CLI maps them to exit codes) use [`SynmarkError::kind`].
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Coarse classification of a [`SynmarkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidPatternSyntax,
    InvalidStyleToken,
    MalformedRuleLine,
    InvalidEncoding,
    Io,
}

/// This enum represents all possible error types in the `synmark-core` library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SynmarkError {
    #[error("Invalid pattern syntax in '{pattern}': {reason}")]
    InvalidPatternSyntax { pattern: String, reason: String },

    #[error("Invalid style token '{token}'")]
    InvalidStyleToken { token: String },

    #[error("Malformed rule line {line_number}: '{line}' (expected <pattern><TAB><styles>)")]
    MalformedRuleLine { line_number: usize, line: String },

    #[error("Rule line {line_number} is not valid UTF-8")]
    InvalidEncoding { line_number: usize },

    #[error("Rule line {line_number}: {source}")]
    RuleLine {
        line_number: usize,
        #[source]
        source: Box<SynmarkError>,
    },

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

impl SynmarkError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        SynmarkError::InvalidPatternSyntax {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Attaches the 1-based rule file line to an error, unless it already carries one.
    pub(crate) fn at_line(self, line_number: usize) -> Self {
        match self {
            e @ (SynmarkError::MalformedRuleLine { .. }
            | SynmarkError::InvalidEncoding { .. }
            | SynmarkError::RuleLine { .. }) => e,
            other => SynmarkError::RuleLine {
                line_number,
                source: Box::new(other),
            },
        }
    }

    /// Returns the failure class, looking through line-number wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SynmarkError::InvalidPatternSyntax { .. } => ErrorKind::InvalidPatternSyntax,
            SynmarkError::InvalidStyleToken { .. } => ErrorKind::InvalidStyleToken,
            SynmarkError::MalformedRuleLine { .. } => ErrorKind::MalformedRuleLine,
            SynmarkError::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            SynmarkError::RuleLine { source, .. } => source.kind(),
            SynmarkError::Io(_) => ErrorKind::Io,
        }
    }
}
