//! # flopnuts-engine: Flop Nuts Engine Core
//!
//! Finds the nuts on a Texas Hold'em flop: the strongest two-card holding a
//! player could have given three community cards, written as canonical
//! shorthand (`AA`, `KQs`, `JTh`). Also reads free-form guesses into the same
//! shorthand and checks them against the nuts.
//!
//! Every operation is a pure function of its inputs. The only advancing state
//! is the random source used to deal practice flops, owned by the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Rank, Suit, Card and Flop with their two-character codec
//! - [`rng`] - Seeded generators consumed by dealing
//! - [`deck`] - Shuffling, dealing, and hole-card enumeration
//! - [`hand`] - Five-card hand evaluation and strength ordering
//! - [`nuts`] - Exhaustive nuts search over the unseen deck
//! - [`pattern`] - Canonical hole-card shorthand
//! - [`guess`] - Guess parsing and validation
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use flopnuts_engine::{deal_flop, evaluate_nuts, validate_guess, Lcg};
//!
//! let mut rng = Lcg::new(12345);
//! let flop = deal_flop(&mut rng);
//! assert_eq!(flop.to_string(), "9h 4d Qd");
//!
//! let nuts = evaluate_nuts(&flop);
//! assert_eq!(nuts.patterns, vec!["QQ"]);
//! assert_eq!(nuts.explanation, "three of a kind");
//!
//! let verdict = validate_guess(&flop, "QQ");
//! assert!(verdict.correct);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod guess;
pub mod hand;
pub mod nuts;
pub mod pattern;
pub mod rng;

pub use cards::{format_card, parse_card, Card, Flop, Rank, Suit};
pub use deck::deal_flop;
pub use errors::{EngineError, GuessError};
pub use guess::{validate_guess, GuessVerdict};
pub use nuts::{evaluate_nuts, NutsResult};
pub use rng::{DealRng, Lcg};
