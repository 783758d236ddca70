use std::fmt::Debug;
use std::ops::Not;

use super::{Card, FlatDeck, PokerError};

/// A set of cards, one bit per card in a 64 bit integer.
///
/// The bit for a card is `u8::from(card)` so iteration always walks the
/// cards in the same canonical order regardless of insertion order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use hilo_equity::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// Build the set of every card used across several groups of cards
    /// (board, each hand, blockers). Fails on the first card seen twice.
    ///
    /// ```
    /// use hilo_equity::core::{Card, CardBitSet, PokerError};
    ///
    /// let board = [Card::try_from("Ah").unwrap()];
    /// let hand = [Card::try_from("Kh").unwrap(), Card::try_from("Ah").unwrap()];
    ///
    /// let err = CardBitSet::try_from_groups(&[&board, &hand]).unwrap_err();
    /// assert_eq!(PokerError::DuplicateCard(board[0]), err);
    /// ```
    pub fn try_from_groups(groups: &[&[Card]]) -> Result<Self, PokerError> {
        let mut set = Self::new();
        for card in groups.iter().flat_map(|g| g.iter()) {
            if !set.insert(*card) {
                return Err(PokerError::DuplicateCard(*card));
            }
        }
        Ok(set)
    }

    /// Insert a card. Returns false if it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.cards |= 1 << u8::from(card);
        !had
    }

    /// Is the card in the bitset ?
    ///
    /// ```
    /// use hilo_equity::core::{Card, CardBitSet, Suit, Value};
    ///
    /// let mut cards = CardBitSet::new();
    /// cards.insert(Card::from(17));
    ///
    /// assert!(cards.contains(Card::new(Value::Six, Suit::Club)));
    /// ```
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }
}

impl Default for CardBitSet {
    /// Create a new bitset with all the cards in it
    /// ```
    /// use hilo_equity::core::CardBitSet;
    ///
    /// let cards = CardBitSet::default();
    ///
    /// assert_eq!(52, cards.count());
    /// assert!(!cards.is_empty());
    /// ```
    fn default() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }
}

impl From<CardBitSet> for FlatDeck {
    fn from(value: CardBitSet) -> Self {
        value.into_iter().collect::<Vec<Card>>().into()
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

impl Not for CardBitSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            // Only the first 52 bits are cards.
            cards: !self.cards & FIFTY_TWO_ONES,
        }
    }
}

/// Iterates the cards of a `CardBitSet` lowest index first.
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1 << card);

        Some(Card::from(card as u8))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardBitSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.count()))?;
        for card in *self {
            seq.serialize_element(&card)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CardBitSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cards: Vec<Card> = serde::Deserialize::deserialize(deserializer)?;
        Ok(cards.into_iter().collect())
    }
}
