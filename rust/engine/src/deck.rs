use crate::cards::{full_deck, Card, Flop};
use crate::rng::DealRng;

/// An unordered pair of distinct hole cards, stored in deck order.
pub type Combo = [Card; 2];

/// Fisher–Yates shuffle, walking from the last index down.
pub fn shuffle<R: DealRng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.rand_int(i as u32 + 1) as usize;
        cards.swap(i, j);
    }
}

/// Shuffle a fresh deck and take the top three cards.
///
/// # Examples
///
/// ```
/// use flopnuts_engine::deck::deal_flop;
/// use flopnuts_engine::rng::Lcg;
///
/// let mut rng = Lcg::new(12345);
/// let flop = deal_flop(&mut rng);
/// assert_eq!(flop.to_string(), "9h 4d Qd");
/// ```
pub fn deal_flop<R: DealRng + ?Sized>(rng: &mut R) -> Flop {
    let mut deck = full_deck();
    shuffle(&mut deck, rng);
    // cards of a full deck are distinct, so the top three always form a flop
    Flop::from_distinct([deck[0], deck[1], deck[2]])
}

/// The 49 cards not on the flop, in deck order.
pub fn remaining_deck(flop: &Flop) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|c| !flop.contains(*c))
        .collect()
}

/// Every unordered pair `(deck[i], deck[j])` with `i < j`.
pub fn two_card_combos(deck: &[Card]) -> Vec<Combo> {
    let mut combos = Vec::with_capacity(deck.len() * deck.len().saturating_sub(1) / 2);
    for (i, &a) in deck.iter().enumerate() {
        for &b in &deck[i + 1..] {
            combos.push([a, b]);
        }
    }
    combos
}
