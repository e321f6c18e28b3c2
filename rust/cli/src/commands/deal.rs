//! Deal command handler: deal a batch of flops and show the nuts for each.
//!
//! Useful for browsing textures without playing, and for checking that a
//! seed reproduces the same flops.

use crate::commands::make_dealer;
use crate::config::{Config, RngKind};
use crate::error::CliError;
use crate::formatters::format_nuts;
use flopnuts_engine::deck::deal_flop;
use flopnuts_engine::evaluate_nuts;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed; falls back to configuration, then random
/// * `count` - Number of flops to deal
/// * `rng` - Dealing generator; falls back to configuration
/// * `config` - Resolved configuration
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    count: u32,
    rng: Option<RngKind>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::InvalidInput("count must be >= 1".to_string()));
    }
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let kind = rng.unwrap_or(config.rng);
    let mut dealer = make_dealer(kind, seed);

    writeln!(out, "deal: seed={} rng={} count={}", seed, kind.as_str(), count)?;
    for i in 1..=count {
        let flop = deal_flop(dealer.as_mut());
        let nuts = evaluate_nuts(&flop);
        writeln!(out, "{}. Flop: {}", i, flop)?;
        writeln!(out, "   Nuts: {}", format_nuts(&nuts))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: Option<u64>, count: u32) -> String {
        let mut out = Vec::new();
        handle_deal_command(seed, count, None, &Config::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_deal_command_reference_seed() {
        let output = deal(Some(12345), 1);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "deal: seed=12345 rng=lcg count=1");
        assert_eq!(lines[1], "1. Flop: 9h 4d Qd");
        assert_eq!(lines[2], "   Nuts: QQ (three of a kind)");
    }

    #[test]
    fn test_deal_command_deterministic() {
        assert_eq!(deal(Some(42), 5), deal(Some(42), 5));
    }

    #[test]
    fn test_deal_command_without_seed() {
        let output = deal(None, 2);
        assert_eq!(output.matches("Flop:").count(), 2);
    }

    #[test]
    fn test_deal_command_chacha() {
        let mut out = Vec::new();
        handle_deal_command(Some(9), 3, Some(RngKind::Chacha), &Config::default(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("deal: seed=9 rng=chacha count=3"));
        assert_eq!(output.matches("Nuts:").count(), 3);
    }

    #[test]
    fn test_deal_command_zero_count() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(1), 0, None, &Config::default(), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
