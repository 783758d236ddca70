//! This is the core module. It exports the game agnostic code: cards,
//! decks, hands, five card hand values and combination helpers.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Errors shared by the whole crate.
mod error;
pub use self::error::PokerError;

/// Bitset of cards for fast membership and duplicate checks.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Ordered deck that can be shuffled.
mod flat_deck;
pub use self::flat_deck::FlatDeck;

/// Code related to cards in hands.
mod hand;
pub use self::hand::Hand;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::{CardIter, binomial, next_combination, nth_combination};

/// 5 Card hand value code.
mod rank;
/// Export the value functions and the results.
pub use self::rank::{
    HandValue, Rank, Valuation, ValueFunction, ace_five_low_value, ace_five_low8_value,
    deuce_seven_low_value, high_value, validate_hand,
};

/// Which players won or tied a deal.
mod player_bit_set;
pub use self::player_bit_set::{ActivePlayerBitSetIter, PlayerBitSet};
