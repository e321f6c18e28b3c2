//! Shorthand for classes of hole cards: `AA`, `KQs`, `A5o`, `JTh`.

use std::collections::BTreeMap;
use std::fmt;

use crate::cards::{Card, Flop, Rank, Suit};
use crate::deck::Combo;
use crate::hand::HandValue;

/// Suit qualifier following the two rank characters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Qualifier {
    /// Both cards share a suit, whichever it is (`s`).
    Suited,
    /// The cards are of different suits (`o`).
    Offsuit,
    /// Both cards are of this exact suit (`h`, `d`, `c` or `s`).
    Suit(Suit),
}

impl Qualifier {
    pub fn to_char(self) -> char {
        match self {
            Qualifier::Suited => 's',
            Qualifier::Offsuit => 'o',
            Qualifier::Suit(s) => s.to_char(),
        }
    }
}

/// A class of two-card holdings. `high` is never below `low`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HolePattern {
    pub high: Rank,
    pub low: Rank,
    pub qualifier: Option<Qualifier>,
}

impl HolePattern {
    /// Orders the two ranks; the qualifier is taken as given.
    pub fn new(a: Rank, b: Rank, qualifier: Option<Qualifier>) -> Self {
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        Self {
            high,
            low,
            qualifier,
        }
    }

    pub fn pair(rank: Rank) -> Self {
        Self::new(rank, rank, None)
    }

    /// Two ranks and nothing else, e.g. `JT` or `77`.
    pub fn is_bare(&self) -> bool {
        self.qualifier.is_none()
    }

    /// True when `self` names `other` exactly, or when `self` is bare and
    /// `other` shares its two ranks.
    pub fn covers(&self, other: &HolePattern) -> bool {
        if self == other {
            return true;
        }
        self.is_bare() && self.high == other.high && self.low == other.low
    }
}

impl fmt::Display for HolePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high.to_char(), self.low.to_char())?;
        if let Some(q) = self.qualifier {
            write!(f, "{}", q.to_char())?;
        }
        Ok(())
    }
}

fn is_suited(combo: &Combo) -> bool {
    combo[0].suit == combo[1].suit
}

fn is_pair(combo: &Combo) -> bool {
    combo[0].rank == combo[1].rank
}

fn ranks_of(combo: &Combo) -> (Rank, Rank) {
    (combo[0].rank, combo[1].rank)
}

fn in_suit(combo: &Combo, suit: Suit) -> bool {
    combo.iter().all(|c: &Card| c.suit == suit)
}

fn add(patterns: &mut BTreeMap<String, HolePattern>, pattern: HolePattern) {
    patterns.insert(pattern.to_string(), pattern);
}

/// Reduce the winning combos to their minimal shorthand, sorted in ASCII
/// order with duplicates removed.
///
/// Pairs are written as two ranks. Other holdings get `s`/`o` unless the nuts
/// is a flush or straight flush, in which case only combos in the board's
/// flush suit are kept and written with that suit letter. Should that leave
/// nothing, every winning combo is written as its two bare ranks so the result
/// is never empty.
pub fn canonicalize(winners: &[Combo], flop: &Flop, best: &HandValue) -> Vec<HolePattern> {
    let flush_suit = flop.flush_suit();
    let needs_specific_suit = best.category.is_suit_specific();
    // keyed by display text so iteration is ASCII order
    let mut patterns: BTreeMap<String, HolePattern> = BTreeMap::new();

    for combo in winners {
        let (a, b) = ranks_of(combo);
        if is_pair(combo) {
            add(&mut patterns, HolePattern::pair(a));
            continue;
        }
        let qualifier = match (needs_specific_suit, flush_suit) {
            (true, Some(suit)) if in_suit(combo, suit) => Some(Qualifier::Suit(suit)),
            (true, _) => None,
            (false, _) if is_suited(combo) => Some(Qualifier::Suited),
            (false, _) => Some(Qualifier::Offsuit),
        };
        if let Some(q) = qualifier {
            add(&mut patterns, HolePattern::new(a, b, Some(q)));
        }
    }

    if patterns.is_empty() && needs_specific_suit {
        if let Some(suit) = flush_suit {
            for combo in winners.iter().filter(|c| in_suit(c, suit)) {
                let (a, b) = ranks_of(combo);
                add(&mut patterns, HolePattern::new(a, b, Some(Qualifier::Suit(suit))));
            }
        }
    }

    if patterns.is_empty() {
        tracing::debug!(
            winners = winners.len(),
            "no suit-qualified nut pattern, falling back to bare ranks"
        );
        for combo in winners {
            let (a, b) = ranks_of(combo);
            add(&mut patterns, HolePattern::new(a, b, None));
        }
    }

    patterns.into_values().collect()
}
