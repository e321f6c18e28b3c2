use serde::{Deserialize, Serialize};

use crate::cards::{Flop, Rank, Suit};
use crate::errors::GuessError;
use crate::nuts::nut_patterns;
use crate::pattern::{HolePattern, Qualifier};

/// Outcome of checking a guess against the nuts of a flop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessVerdict {
    pub correct: bool,
    pub reason: String,
    /// Absent when the guess could not be parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_guess: Option<String>,
    pub canonical_nuts: Vec<String>,
}

fn rank(c: char) -> Result<Rank, GuessError> {
    Rank::from_char(c).ok_or(GuessError::Malformed)
}

fn suit(c: char) -> Result<Suit, GuessError> {
    Suit::from_char(c.to_ascii_lowercase()).ok_or(GuessError::Malformed)
}

/// Read a guess into the same pattern space as the nuts.
///
/// Input is trimmed and uppercased first, then read by length:
///
/// - `AA`, `KQ`: two ranks; a non-pair stays unqualified.
/// - `KQs`, `KQo`, `KQh`: ranks plus modifier. `s` means suited and becomes
///   the board's flush suit when the flop is monotone.
/// - `AhQh`: two exact cards, reduced to pair, suited or offsuit form.
///
/// # Examples
///
/// ```
/// use flopnuts_engine::cards::Flop;
/// use flopnuts_engine::guess::parse_guess;
///
/// let flop: Flop = "Ah Kh Qh".parse().unwrap();
/// assert_eq!(parse_guess(" tj ", &flop).unwrap().to_string(), "JT");
/// assert_eq!(parse_guess("JTs", &flop).unwrap().to_string(), "JTh");
/// assert_eq!(parse_guess("JhTh", &flop).unwrap().to_string(), "JTh");
/// assert!(parse_guess("QQx", &flop).is_err());
/// ```
pub fn parse_guess(guess: &str, flop: &Flop) -> Result<HolePattern, GuessError> {
    let cleaned: Vec<char> = guess.trim().to_uppercase().chars().collect();

    match cleaned.as_slice() {
        &[r1, r2] => {
            let (r1, r2) = (rank(r1)?, rank(r2)?);
            Ok(HolePattern::new(r1, r2, None))
        }
        &[r1, r2, modifier] => {
            let (r1, r2) = (rank(r1)?, rank(r2)?);
            let qualifier = match modifier {
                'S' => match flop.flush_suit() {
                    Some(s) => Qualifier::Suit(s),
                    None => Qualifier::Suited,
                },
                'O' => Qualifier::Offsuit,
                other => Qualifier::Suit(suit(other)?),
            };
            Ok(HolePattern::new(r1, r2, Some(qualifier)))
        }
        &[r1, s1, r2, s2] => {
            let (r1, s1, r2, s2) = (rank(r1)?, suit(s1)?, rank(r2)?, suit(s2)?);
            if r1 == r2 {
                return Ok(HolePattern::pair(r1));
            }
            let qualifier = if s1 != s2 {
                Qualifier::Offsuit
            } else if flop.flush_suit() == Some(s1) {
                Qualifier::Suit(s1)
            } else {
                Qualifier::Suited
            };
            Ok(HolePattern::new(r1, r2, Some(qualifier)))
        }
        _ => Err(GuessError::Malformed),
    }
}

/// Check a free-form guess against the nuts of `flop`.
///
/// Never fails: unreadable guesses come back as an incorrect verdict whose
/// reason starts with `"Invalid format."`. A bare two-rank guess such as `JT`
/// is correct when any nut pattern has those two ranks, whatever its qualifier.
///
/// # Examples
///
/// ```
/// use flopnuts_engine::cards::Flop;
/// use flopnuts_engine::guess::validate_guess;
///
/// let flop: Flop = "9h Td Jc".parse().unwrap();
/// assert!(validate_guess(&flop, "KQo").correct);
/// assert!(validate_guess(&flop, "kq").correct);
/// assert!(!validate_guess(&flop, "Q8o").correct);
/// assert!(validate_guess(&flop, "ZZ").reason.contains("format"));
/// ```
pub fn validate_guess(flop: &Flop, guess: &str) -> GuessVerdict {
    let (_, nuts) = nut_patterns(flop);
    let canonical_nuts: Vec<String> = nuts.iter().map(ToString::to_string).collect();

    let pattern = match parse_guess(guess, flop) {
        Ok(p) => p,
        Err(e) => {
            tracing::trace!(guess, error = %e, "guess rejected");
            return GuessVerdict {
                correct: false,
                reason: format!("Invalid format. {}", e),
                canonical_guess: None,
                canonical_nuts,
            };
        }
    };

    let canonical = pattern.to_string();
    let correct = nuts.iter().any(|nut| pattern.covers(nut));
    tracing::trace!(guess, canonical = %canonical, correct, "guess checked");

    let reason = if correct {
        "Correct!".to_string()
    } else {
        format!("Incorrect. Nuts: {}", canonical_nuts.join(", "))
    };
    GuessVerdict {
        correct,
        reason,
        canonical_guess: Some(canonical),
        canonical_nuts,
    }
}
