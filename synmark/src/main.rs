// synmark/src/main.rs
//! synmark entry point.
//!
//! Parses the command line, initializes logging and runs the annotate command,
//! exiting with the code of the stage that failed.

use clap::Parser;
use clap::error::ErrorKind;
use std::process::exit;

use synmark::cli::Cli;
use synmark::logger;
use synmark::{run_annotate, AnnotateCommandOptions, CliError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                    if std::env::args_os().len() == 2 =>
                {
                    0
                }
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let err = CliError::BadParams("--help and --version must be given alone".to_string());
                    eprintln!("synmark: {err}");
                    exit(err.exit_code());
                }
                _ => CliError::BadParams(e.to_string()).exit_code(),
            };
            let _ = e.print();
            exit(code);
        }
    };

    logger::init_logger(cli.log_level_override());
    log::info!("synmark started. Version: {}", env!("CARGO_PKG_VERSION"));

    let opts = AnnotateCommandOptions {
        format: cli.format,
        input: cli.input,
        output: cli.output,
        insert_line_breaks: cli.br,
    };

    if let Err(e) = run_annotate(&opts) {
        eprintln!("synmark: {e}");
        exit(e.exit_code());
    }
}
