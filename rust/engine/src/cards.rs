use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no ordering for hand strength; the declaration order is the
/// order in which [`full_deck`] lays them out.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (h)
    Hearts,
    /// Diamonds suit (d)
    Diamonds,
    /// Clubs suit (c)
    Clubs,
    /// Spades suit (s)
    Spades,
}

impl Suit {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Discriminants run 0 (Two) to 12 (Ace) and double as tiebreak values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2 (0)
    Two = 0,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10, written `T`
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace (12)
    Ace,
}

impl Rank {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Ranks are case-sensitive: `T`, `J`, `Q`, `K`, `A` must be uppercase.
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Serialized as its two-character form, e.g. `"Ah"`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(EngineError::InvalidCard(s.to_string()));
        };
        match (Rank::from_char(r), Suit::from_char(su)) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(EngineError::InvalidCard(s.to_string())),
        }
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = EngineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parse a two-character card such as `"Ah"` or `"2s"`.
pub fn parse_card(s: &str) -> Result<Card, EngineError> {
    s.parse()
}

/// Inverse of [`parse_card`]; always two characters, rank then suit.
pub fn format_card(card: Card) -> String {
    card.to_string()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The 52 cards, suit-major (h, d, c, s) with ranks ascending inside each suit.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

/// Three distinct community cards, in dealt order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Flop([Card; 3]);

impl Flop {
    pub fn new(cards: [Card; 3]) -> Result<Self, EngineError> {
        for i in 0..3 {
            for j in (i + 1)..3 {
                if cards[i] == cards[j] {
                    return Err(EngineError::DuplicateCard(cards[i]));
                }
            }
        }
        Ok(Self(cards))
    }

    pub(crate) fn from_distinct(cards: [Card; 3]) -> Self {
        debug_assert!(Flop::new(cards).is_ok());
        Self(cards)
    }

    pub fn cards(&self) -> &[Card; 3] {
        &self.0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }

    /// The suit shared by all three cards, if the flop is monotone.
    pub fn flush_suit(&self) -> Option<Suit> {
        let mut suit_counts = [0u8; 4];
        for c in &self.0 {
            suit_counts[c.suit.index()] += 1;
        }
        all_suits()
            .into_iter()
            .find(|s| suit_counts[s.index()] >= 3)
    }
}

impl fmt::Display for Flop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} {} {}", a, b, c)
    }
}

/// Accepts `"Ah Kh Qh"`, `"Ah,Kh,Qh"` or `"AhKhQh"`.
impl FromStr for Flop {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();
        let chars: Vec<char> = compact.chars().collect();
        if chars.len() != 6 {
            return Err(EngineError::InvalidFlop(format!(
                "expected 3 cards, got {:?}",
                s
            )));
        }
        let mut cards = [Card::new(Rank::Two, Suit::Hearts); 3];
        for (slot, pair) in cards.iter_mut().zip(chars.chunks(2)) {
            let text: String = pair.iter().collect();
            *slot = text.parse()?;
        }
        Flop::new(cards)
    }
}
