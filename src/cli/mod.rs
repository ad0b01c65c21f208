//! CLI module for the `nameof` inspector
//!
//! A small command-line front end over the library, mostly useful when checking how a piece of
//! expression or signature text is trimmed.
//!
//! ## Commands
//!
//! - `extract <TEXT>...` - Run the identifier extractor over each argument
//! - `range` - Print the compiled-in default enum range, or validate a candidate range
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::io;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::version::NAMEOF_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::failure(format!("Error writing output: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect how nameof trims names out of source and signature text
#[derive(Parser, Debug)]
#[command(name = "nameof")]
#[command(version = NAMEOF_VERSION)]
#[command(about = "Inspect how nameof trims names out of source and signature text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the identifier extractor over each TEXT
    Extract {
        /// Expression or signature text to trim
        #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
        texts: Vec<String>,
        /// Keep a trailing generic argument list (`Type<i32>`)
        #[arg(long)]
        keep_template_suffix: bool,
        /// Exit with a failure code if any TEXT does not resolve
        #[arg(long)]
        strict: bool,
    },

    /// Print the default enum range, or validate a candidate range
    Range {
        /// Candidate lower bound
        #[arg(long, allow_hyphen_values = true, requires = "max")]
        min: Option<i32>,
        /// Candidate upper bound
        #[arg(long, allow_hyphen_values = true, requires = "min")]
        max: Option<i32>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Extract {
            texts,
            keep_template_suffix,
            strict,
        } => commands::extract(&texts, keep_template_suffix, strict, &mut out),
        Command::Range { min, max } => match (min, max) {
            (Some(min), Some(max)) => commands::check_range(min, max, &mut out),
            _ => commands::show_default_range(&mut out),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_arguments_parse() {
        let cli = Cli::try_parse_from(["nameof", "extract", "--keep-template-suffix", "a::B<u8>", "123abc"]).unwrap();
        match cli.command {
            Command::Extract {
                texts,
                keep_template_suffix,
                strict,
            } => {
                assert_eq!(texts, vec!["a::B<u8>", "123abc"]);
                assert!(keep_template_suffix);
                assert!(!strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn range_bounds_come_in_pairs() {
        assert!(Cli::try_parse_from(["nameof", "range", "--min", "-4"]).is_err());
        let cli = Cli::try_parse_from(["nameof", "range", "--min", "-4", "--max", "4"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Range {
                min: Some(-4),
                max: Some(4)
            }
        ));
    }
}
