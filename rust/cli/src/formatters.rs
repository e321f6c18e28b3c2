//! Text formatting for flops, nuts, and guess verdicts.
//!
//! Cards are always printed in their two-character form (`Ah`, `Td`) so the
//! output can be pasted back into `--flop` or a guess.

use flopnuts_engine::{Flop, GuessVerdict, NutsResult};

/// Format a flop as shown at the start of each practice round.
///
/// # Example
///
/// ```rust
/// use flopnuts_engine::Flop;
/// # use flopnuts_cli::formatters::format_flop_display;
///
/// let flop: Flop = "Ah Kd Qs".parse().unwrap();
/// assert_eq!(format_flop_display(&flop), "Flop: Ah Kd Qs");
/// ```
pub fn format_flop_display(flop: &Flop) -> String {
    format!("Flop: {}", flop)
}

/// One-line summary of the nuts, e.g. `KQo, KQs (straight)`.
pub fn format_nuts(nuts: &NutsResult) -> String {
    format!("{} ({})", nuts.patterns.join(", "), nuts.explanation)
}

/// Message printed after a guess is checked.
pub fn format_verdict(verdict: &GuessVerdict) -> String {
    if verdict.correct {
        format!("Correct! Nuts: {}", verdict.canonical_nuts.join(", "))
    } else {
        verdict.reason.clone()
    }
}
