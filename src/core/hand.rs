use std::fmt;
use std::ops::{Deref, Index};

use super::{Card, CardBitSet, PokerError};

/// An ordered list of cards held by one player, or shared on the board.
///
/// Order matters for some games (stud deals cards in order, omaha keeps
/// hole cards apart from the board) so unlike a `CardBitSet` this keeps
/// cards in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a hand from cards, rejecting any card given twice.
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, PokerError> {
        CardBitSet::try_from_groups(&[&cards])?;
        Ok(Self { cards })
    }

    /// Parse a hand from a string of two character card tokens.
    /// Spaces between cards are allowed.
    ///
    /// ```
    /// use hilo_equity::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("AcKc").unwrap();
    /// assert_eq!(2, hand.len());
    /// assert_eq!(Card::new(Value::Ace, Suit::Club), hand[0]);
    ///
    /// assert!(Hand::new_from_str("AcAc").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut seen = CardBitSet::new();
        let mut cards = Vec::new();

        while let Some(vc) = chars.next() {
            let sc = chars.next().ok_or(PokerError::TooFewChars)?;
            let mut token = String::with_capacity(2);
            token.push(vc);
            token.push(sc);
            let card = Card::try_from(token.as_str())?;
            if !seen.insert(card) {
                return Err(PokerError::DuplicateCard(card));
            }
            cards.push(card);
        }

        Ok(Self { cards })
    }

    /// Render the cards with suit symbols.
    pub fn glyph_string(&self) -> String {
        self.cards.iter().map(Card::glyph_string).collect()
    }
}

impl Deref for Hand {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl From<Hand> for Vec<Card> {
    fn from(value: Hand) -> Self {
        value.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cards {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_parse_keeps_order() {
        let h = Hand::new_from_str("Ts 2h Kd").unwrap();
        assert_eq!("Ts2hKd", h.to_string());
        assert_eq!(Value::Ten, h[0].value);
        assert_eq!(Value::King, h[2].value);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(PokerError::DuplicateCard(Card::new(Value::Ace, Suit::Club))),
            Hand::new_from_str("AcKdAc")
        );
        assert_eq!(Err(PokerError::TooFewChars), Hand::new_from_str("AcK"));
        assert_eq!(
            Err(PokerError::UnexpectedSuitChar('z')),
            Hand::new_from_str("Az")
        );
    }

    #[test]
    fn test_new_with_cards_rejects_duplicates() {
        let c = Card::new(Value::Nine, Suit::Heart);
        assert!(Hand::new_with_cards(vec![c, c]).is_err());
        let h = Hand::new_with_cards(vec![c]).unwrap();
        assert_eq!(1, h.len());
        assert_eq!(c, h[0]);
    }

    #[test]
    fn test_glyphs() {
        let h = Hand::new_from_str("AsTd").unwrap();
        assert_eq!("A\u{2660}T\u{2666}", h.glyph_string());
    }
}
