//! jfill CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (also `--lt` and bare help)
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Data file error
//! - 4: Template error
//! - 5: Output write error

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jfill_core::FillError;

mod commands;
mod target;

use commands::Cli;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const DATA_ERROR: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const WRITE_ERROR: u8 = 5;
}

fn main() -> ExitCode {
    // No arguments at all: show usage instead of a missing-argument error
    if std::env::args_os().len() <= 1 {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
            Err(_) => ExitCode::from(ExitCodes::GENERAL_ERROR),
        };
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version also arrive here
            return if e.use_stderr() {
                ExitCode::from(ExitCodes::INVALID_ARGS)
            } else {
                ExitCode::from(ExitCodes::SUCCESS)
            };
        }
    };
    init_logging(&cli);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Logs go to stderr so stdout only ever carries rendered output.
fn init_logging(cli: &Cli) {
    let default = if cli.verbose {
        "jfill_core=debug,jfill_cli=debug"
    } else if cli.quiet {
        "warn"
    } else {
        "warn,jfill_core=info,jfill_cli=info"
    };
    let directives = match std::env::var("RUST_LOG") {
        Ok(extra) if !extra.is_empty() => format!("{},{}", default, extra),
        _ => default.to_string(),
    };

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::new(directives))
        .try_init();
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let Some(fill_error) = e.chain().find_map(|c| c.downcast_ref::<FillError>()) else {
        return ExitCodes::GENERAL_ERROR;
    };

    if fill_error.is_data_error() {
        ExitCodes::DATA_ERROR
    } else if fill_error.is_template_error() {
        ExitCodes::TEMPLATE_ERROR
    } else {
        ExitCodes::WRITE_ERROR
    }
}
