use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, CardBitSet};

/// `FlatDeck` is a deck of cards that allows easy
/// indexing into the cards. It does not provide
/// contains methods.
///
/// `FlatDeck::default()` is the full 52 card deck in canonical order:
/// twos first, then threes, up to the aces; spades, clubs, hearts,
/// diamonds within each value.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatDeck {
    cards: Vec<Card>,
}

impl FlatDeck {
    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the flat deck in place (Fisher-Yates).
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use hilo_equity::core::FlatDeck;
    ///
    /// let mut one = FlatDeck::default();
    /// let mut two = FlatDeck::default();
    /// one.shuffle(&mut StdRng::seed_from_u64(7));
    /// two.shuffle(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(one, two);
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// A new deck with every card from every group removed. Groups are the
    /// board, each hand and any blockers. Neither `self` nor the groups are
    /// changed, and the order of the cards that remain is kept.
    ///
    /// ```
    /// use hilo_equity::core::{Card, FlatDeck};
    ///
    /// let deck = FlatDeck::default();
    /// let board = [Card::try_from("Ah").unwrap(), Card::try_from("Kh").unwrap()];
    /// let hand = [Card::try_from("2c").unwrap()];
    ///
    /// let rest = deck.without(&[&board, &hand]);
    /// assert_eq!(49, rest.len());
    /// assert_eq!(52, deck.len());
    /// ```
    pub fn without(&self, groups: &[&[Card]]) -> FlatDeck {
        let used: CardBitSet = groups.iter().flat_map(|g| g.iter().copied()).collect();
        let cards = self
            .cards
            .iter()
            .copied()
            .filter(|c| !used.contains(*c))
            .collect();
        FlatDeck { cards }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for FlatDeck {
    fn default() -> Self {
        CardBitSet::default().into()
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}
