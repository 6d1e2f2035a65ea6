// synmark/src/errors.rs
//! CLI failure classes and their process exit codes.

use thiserror::Error;

/// A failed synmark run, classified by the stage that failed.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid or repeated command-line arguments.
    #[error("{0}")]
    BadParams(String),

    /// The input could not be read.
    #[error("Cannot read input: {0:#}")]
    InputFile(anyhow::Error),

    /// The output file could not be created.
    #[error("Cannot open output: {0:#}")]
    OutputFile(anyhow::Error),

    /// The rule file did not compile.
    #[error("Invalid rule file: {0:#}")]
    FormatFile(anyhow::Error),

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::BadParams(_) => 1,
            CliError::InputFile(_) => 2,
            CliError::OutputFile(_) => 3,
            CliError::FormatFile(_) => 4,
            CliError::Unknown(_) => 255,
        }
    }
}
