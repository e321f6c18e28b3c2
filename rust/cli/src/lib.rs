//! # Flopnuts CLI Library
//!
//! Command-line front end for the flop nuts engine: an interactive practice
//! loop plus one-shot commands for inspecting flops and checking guesses.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["flopnuts", "practice", "--seed", "12345"];
//! let code = flopnuts_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `practice`: Deal flops and guess the nuts interactively
//! - `nuts`: Show the nuts for a given flop
//! - `check`: Check one guess against a given flop
//! - `deal`: Deal several flops with their nuts
//! - `rng`: Print the first draws of the dealing generator
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, FlopnutsCli};
use commands::{
    handle_cfg_command, handle_check_command, handle_deal_command, handle_nuts_command,
    handle_practice_command, handle_rng_command,
};

pub use config::{Config, RngKind};
pub use error::CliError;

const COMMANDS: &[&str] = &["practice", "nuts", "check", "deal", "rng", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for usage, configuration, or input errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["flopnuts", "nuts", "--flop", "Ah Kh Qh"];
/// let mut out = Vec::new();
/// let code = flopnuts_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("JTh"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FlopnutsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Practice { seed, rounds, rng } => config::load()
            .map_err(CliError::from)
            .and_then(|config| {
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                handle_practice_command(seed, rounds, rng, &config, out, &mut stdin_lock)
            }),
        Commands::Nuts { flop, json } => handle_nuts_command(&flop, json, out),
        Commands::Check { flop, guess, json } => handle_check_command(&flop, &guess, json, out),
        Commands::Deal { seed, count, rng } => config::load()
            .map_err(CliError::from)
            .and_then(|config| handle_deal_command(seed, count, rng, &config, out)),
        Commands::Rng { seed } => config::load()
            .map_err(CliError::from)
            .and_then(|config| handle_rng_command(seed, &config, out)),
        Commands::Cfg => config::load_with_sources()
            .map_err(CliError::from)
            .and_then(|resolved| handle_cfg_command(&resolved, out)),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = (|| -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "Poker Nuts Practice CLI")?;
        writeln!(err, "Usage: flopnuts <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in COMMANDS {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: flopnuts --help")
    })();
    exit_code::ERROR
}
