use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }

    /// Flush-based categories depend on the exact suit of the hole cards.
    pub fn is_suit_specific(self) -> bool {
        matches!(self, Category::Flush | Category::StraightFlush)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strength of an exact five-card hand.
///
/// Values compare by category, then tiebreak ranks position by position. A
/// shorter tiebreak list that is a prefix of a longer one compares lower, as
/// if each missing position held a value below every rank.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandValue {
    pub category: Category,
    // rank indices (0 = Two .. 12 = Ace), most significant first
    pub tiebreaks: Vec<u8>,
}

const ACE: u8 = 12;
// position of the Five, the top card of A-2-3-4-5
const WHEEL_HIGH: u8 = 3;

/// Rank an exact five-card hand.
///
/// # Examples
///
/// ```
/// use flopnuts_engine::cards::Card;
/// use flopnuts_engine::hand::{evaluate_hand, Category};
///
/// let cards: Vec<Card> = ["Ah", "Kh", "Qh", "Jh", "Th"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let value = evaluate_hand(&cards).unwrap();
/// assert_eq!(value.category, Category::StraightFlush);
/// assert_eq!(value.tiebreaks, vec![12]);
/// ```
///
/// # Errors
///
/// [`EngineError::InvalidHandSize`] unless exactly five cards are given.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandValue, EngineError> {
    let five: &[Card; 5] = cards
        .try_into()
        .map_err(|_| EngineError::InvalidHandSize(cards.len()))?;
    Ok(evaluate_five(five))
}

pub(crate) fn evaluate_five(cards: &[Card; 5]) -> HandValue {
    let mut rank_counts = [0u8; 13];
    let mut suit_counts = [0u8; 4];
    for c in cards {
        rank_counts[c.rank.index() as usize] += 1;
        suit_counts[c.suit.index()] += 1;
    }

    let is_flush = suit_counts.iter().any(|&n| n == 5);

    // (count, rank) groups, largest group first, higher rank breaking ties
    let mut groups: Vec<(u8, u8)> = (0..13u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let group_ranks: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();

    let straight_high = if groups.len() == 5 {
        detect_straight_high(&group_ranks)
    } else {
        None
    };

    let value = |category, tiebreaks| HandValue {
        category,
        tiebreaks,
    };

    if let (Some(high), true) = (straight_high, is_flush) {
        return value(Category::StraightFlush, vec![high]);
    }
    match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (4, _) => return value(Category::FourOfAKind, group_ranks),
        (3, Some(2)) => return value(Category::FullHouse, group_ranks),
        _ => {}
    }
    if is_flush {
        return value(Category::Flush, group_ranks);
    }
    if let Some(high) = straight_high {
        return value(Category::Straight, vec![high]);
    }
    match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (3, _) => value(Category::ThreeOfAKind, group_ranks),
        (2, Some(2)) => value(Category::TwoPair, group_ranks),
        (2, _) => value(Category::OnePair, group_ranks),
        _ => value(Category::HighCard, group_ranks),
    }
}

/// `ranks` holds five distinct ranks, descending.
fn detect_straight_high(ranks: &[u8]) -> Option<u8> {
    if ranks == [ACE, 3, 2, 1, 0] {
        return Some(WHEEL_HIGH);
    }
    if ranks[0] - ranks[4] == 4 {
        return Some(ranks[0]);
    }
    None
}

/// Human-readable name of a winning hand.
pub fn explain(value: &HandValue) -> &'static str {
    match value.category {
        Category::StraightFlush if value.tiebreaks.first() == Some(&ACE) => "royal flush",
        category => category.name(),
    }
}
