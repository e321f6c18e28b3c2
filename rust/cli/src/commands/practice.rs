//! # Practice Command
//!
//! Interactive drill: a flop is dealt, the user types the nuts, and the
//! answer is checked before the next flop.
//!
//! ## Features
//!
//! - Accepts `AA`, `KQs`, `A5o`, `JTh` or exact cards such as `AhQh`
//! - Blank lines skip to a new flop; `q` quits; EOF ends the session
//! - Optional cap on the number of flops dealt

use crate::commands::make_dealer;
use crate::config::{Config, RngKind};
use crate::error::CliError;
use crate::formatters::{format_flop_display, format_verdict};
use crate::io_utils::read_stdin_line;
use crate::validation::{ParseResult, parse_practice_input};
use flopnuts_engine::deck::deal_flop;
use flopnuts_engine::validate_guess;
use std::io::{BufRead, Write};

/// Print the three-line greeting shown before the first flop.
pub fn print_introduction(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Poker Nuts Practice CLI")?;
    writeln!(out, "Type your guess like: AA, KQs, A5o, or exact AhQh")?;
    writeln!(out, "Type 'q' to quit\n")
}

/// Handle the practice command.
///
/// # Arguments
///
/// * `seed` - Dealing seed; falls back to configuration, then to a random seed
/// * `rounds` - Maximum flops to deal; falls back to configuration, else unlimited
/// * `rng` - Dealing generator; falls back to configuration
/// * `config` - Resolved configuration
/// * `out` - Output stream for the session
/// * `stdin` - Input stream for guesses
///
/// # Examples
///
/// ```ignore
/// use std::io::Cursor;
/// let mut out = Vec::new();
/// let mut input = Cursor::new("KQs\nq\n");
/// handle_practice_command(Some(12345), None, None, &Config::default(), &mut out, &mut input)?;
/// ```
pub fn handle_practice_command(
    seed: Option<u64>,
    rounds: Option<u32>,
    rng: Option<RngKind>,
    config: &Config,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let kind = rng.unwrap_or(config.rng);
    let rounds = rounds.or(config.rounds);
    let mut dealer = make_dealer(kind, seed);
    tracing::info!(seed, rng = kind.as_str(), ?rounds, "practice session started");

    print_introduction(out)?;

    let mut dealt = 0u32;
    while rounds.is_none_or(|limit| dealt < limit) {
        let flop = deal_flop(dealer.as_mut());
        dealt += 1;

        writeln!(out, "{}", format_flop_display(&flop))?;
        write!(out, "Guess the nuts: ")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        match parse_practice_input(&line) {
            ParseResult::Quit => break,
            ParseResult::Empty => writeln!(out, "Please enter a guess or \"q\" to quit\n")?,
            ParseResult::Guess(guess) => {
                let verdict = validate_guess(&flop, &guess);
                writeln!(out, "{}\n", format_verdict(&verdict))?;
            }
        }
    }

    tracing::info!(dealt, "practice session finished");
    writeln!(out, "Thanks for playing!")?;
    Ok(())
}
