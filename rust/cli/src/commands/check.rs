//! Check command handler: validate a single guess against a flop.

use crate::error::CliError;
use crate::formatters::format_verdict;
use flopnuts_engine::{Flop, validate_guess};
use std::io::Write;

/// Handle the check command.
///
/// An incorrect or malformed guess is still a successful run; the verdict is
/// part of the output. Only an unreadable flop is an error.
pub fn handle_check_command(
    flop: &str,
    guess: &str,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let flop: Flop = flop.parse()?;
    let verdict = validate_guess(&flop, guess);

    if json {
        writeln!(out, "{}", serde_json::to_string(&verdict)?)?;
    } else {
        writeln!(out, "{}", format_verdict(&verdict))?;
    }
    Ok(())
}
