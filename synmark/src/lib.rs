// synmark/src/lib.rs
//! # synmark CLI Application
//!
//! This crate provides the command-line front end for `synmark-core`: argument
//! parsing, logger setup, the annotate command and the mapping of failures to
//! process exit codes.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod logger;

pub use commands::annotate::{run_annotate, AnnotateCommandOptions};
pub use errors::CliError;
