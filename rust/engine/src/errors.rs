use thiserror::Error;

use crate::cards::Card;

/// Failures raised by the card codec and the evaluator.
///
/// These indicate malformed input reaching the engine and are reported to the
/// caller as-is; user guesses never surface through this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card format: {0:?}")]
    InvalidCard(String),
    #[error("Hand must have exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Duplicate card on flop: {0}")]
    DuplicateCard(Card),
    #[error("Invalid flop: {0}")]
    InvalidFlop(String),
}

/// Reasons a free-form guess could not be read as a hole-card pattern.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("Guess must be like 'AA', 'KQs', 'A5o', or exact 'AhQh'")]
    Malformed,
}
