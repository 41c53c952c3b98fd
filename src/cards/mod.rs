//! Card and deck primitives.
//!
//! - `card`: `Card`, `Suit`, rank constants, textual notation, `Street`
//! - `deck`: exclusion-aware `Deck` with random draw-without-replacement

pub mod card;
pub mod deck;

pub use card::{cards_str, parse_cards, Card, Street, Suit};
pub use card::{ACE_LOW, DECK_SIZE, RANK_2, RANK_5, RANK_A, RANK_K, RANK_T};
pub use deck::Deck;
