//! Nuts command handler: evaluate one flop given on the command line.

use crate::error::CliError;
use flopnuts_engine::{Flop, NutsResult, evaluate_nuts};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct NutsReport<'a> {
    flop: &'a Flop,
    #[serde(flatten)]
    nuts: &'a NutsResult,
}

/// Handle the nuts command.
///
/// Prints the flop, its nut patterns, and the hand name, or the same data as
/// a single JSON object with `--json`.
///
/// # Errors
///
/// Returns `CliError::Engine` if the flop text is not three distinct cards.
pub fn handle_nuts_command(flop: &str, json: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let flop: Flop = flop.parse()?;
    let nuts = evaluate_nuts(&flop);

    if json {
        let report = NutsReport {
            flop: &flop,
            nuts: &nuts,
        };
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "Flop: {}", flop)?;
        writeln!(out, "Nuts: {}", nuts.patterns.join(", "))?;
        writeln!(out, "Explanation: {}", nuts.explanation)?;
    }
    Ok(())
}
