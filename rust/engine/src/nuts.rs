use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Flop};
use crate::deck::{remaining_deck, two_card_combos, Combo};
use crate::hand::{evaluate_five, explain, Category, HandValue};
use crate::pattern::{canonicalize, HolePattern};

/// Best attainable hand on a flop and every hole-card pair that reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutsSearch {
    pub best: HandValue,
    /// Tied winners in enumeration order.
    pub winners: Vec<Combo>,
}

/// Canonical nuts for a flop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutsResult {
    /// Sorted, duplicate-free shorthand patterns.
    pub patterns: Vec<String>,
    pub explanation: String,
}

/// Evaluate all 1176 hole-card pairs from the 49 unseen cards.
pub fn search_nuts(flop: &Flop) -> NutsSearch {
    let deck = remaining_deck(flop);
    let [f0, f1, f2] = *flop.cards();

    // ranks below every real five-card value
    let mut best = HandValue {
        category: Category::HighCard,
        tiebreaks: Vec::new(),
    };
    let mut winners: Vec<Combo> = Vec::new();
    for combo in two_card_combos(&deck) {
        let five: [Card; 5] = [f0, f1, f2, combo[0], combo[1]];
        let value = evaluate_five(&five);
        match value.cmp(&best) {
            Ordering::Less => {}
            Ordering::Equal => winners.push(combo),
            Ordering::Greater => {
                best = value;
                winners.clear();
                winners.push(combo);
            }
        }
    }

    tracing::debug!(
        flop = %flop,
        category = %best.category,
        winners = winners.len(),
        "nuts search complete"
    );
    NutsSearch { best, winners }
}

/// Nut patterns as structured values, with the hand they make.
pub fn nut_patterns(flop: &Flop) -> (HandValue, Vec<HolePattern>) {
    let search = search_nuts(flop);
    let patterns = canonicalize(&search.winners, flop, &search.best);
    (search.best, patterns)
}

/// Nuts for a flop as canonical patterns plus a hand name.
///
/// # Examples
///
/// ```
/// use flopnuts_engine::cards::Flop;
/// use flopnuts_engine::nuts::evaluate_nuts;
///
/// let flop: Flop = "9h Td Jc".parse().unwrap();
/// let nuts = evaluate_nuts(&flop);
/// assert_eq!(nuts.patterns, vec!["KQo", "KQs"]);
/// assert_eq!(nuts.explanation, "straight");
/// ```
pub fn evaluate_nuts(flop: &Flop) -> NutsResult {
    let (best, patterns) = nut_patterns(flop);
    NutsResult {
        patterns: patterns.iter().map(ToString::to_string).collect(),
        explanation: explain(&best).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::pattern::Qualifier;

    fn nuts(s: &str) -> NutsResult {
        evaluate_nuts(&s.parse().unwrap())
    }

    #[test]
    fn royal_flush_on_broadway_hearts() {
        let r = nuts("Ah Kh Qh");
        assert_eq!(r.patterns, ["JTh"]);
        assert!(r.explanation.contains("royal flush"));
    }

    #[test]
    fn quads_on_paired_board() {
        let r = nuts("7c 7d 2s");
        assert_eq!(r.patterns, ["77"]);
        assert!(r.explanation.contains("four of a kind"));
    }

    #[test]
    fn straight_on_connected_rainbow() {
        let r = nuts("9h Td Jc");
        assert_eq!(r.patterns, ["KQo", "KQs"]);
        assert!(r.explanation.contains("straight"));
    }

    #[test]
    fn low_straight_flush() {
        let r = nuts("2h 3h 4h");
        assert_eq!(r.patterns, ["65h"]);
        assert!(r.explanation.contains("straight flush"));
    }

    #[test]
    fn winners_are_counted_with_ties() {
        let s = search_nuts(&"9h Td Jc".parse().unwrap());
        assert_eq!(s.best.category, Category::Straight);
        assert_eq!(s.best.tiebreaks, vec![11]);
        assert_eq!(s.winners.len(), 16);

        let s = search_nuts(&"Kh Kd Ks".parse().unwrap());
        assert_eq!(s.best.category, Category::FourOfAKind);
        assert_eq!(s.winners.len(), 4);
    }

    #[test]
    fn other_textures() {
        assert_eq!(nuts("Ah Kh 7h").patterns, ["QJh"]);
        assert_eq!(nuts("Ah Kh 7h").explanation, "flush");
        assert_eq!(nuts("As Ah Kd").patterns, ["AA"]);
        assert_eq!(nuts("2c 7h Js").patterns, ["JJ"]);
        assert_eq!(nuts("2c 7h Js").explanation, "three of a kind");
        assert_eq!(nuts("Kh Kd Ks").patterns, ["AKo", "AKs"]);
        assert_eq!(nuts("7c 7d 7h").patterns, ["A7o", "A7s"]);
        assert_eq!(nuts("Ah Kd Qs").patterns, ["JTo", "JTs"]);
    }

    #[test]
    fn search_starts_below_every_hand() {
        for board in ["2c 3d 5h", "2c 2d 2h", "7s 8d Jc", "Ac Kc Qc"] {
            let s = search_nuts(&board.parse().unwrap());
            assert!(!s.winners.is_empty(), "{board}");
            assert!(!s.best.tiebreaks.is_empty(), "{board}");
        }
    }

    #[test]
    fn structured_patterns_follow_text_order() {
        let (best, patterns) = nut_patterns(&"9h Td Jc".parse().unwrap());
        assert_eq!(best.category, Category::Straight);
        assert_eq!(
            patterns,
            vec![
                HolePattern::new(Rank::King, Rank::Queen, Some(Qualifier::Offsuit)),
                HolePattern::new(Rank::King, Rank::Queen, Some(Qualifier::Suited)),
            ]
        );
    }
}
