use std::fmt;

use super::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

/// Face characters indexed by face number. Index 1 is the ace when it
/// plays low, index 14 is the ace when it plays high.
const FACES: [char; 15] = [
    '?', 'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Take a u8 in `0..13` and convert it to a value.
    /// Anything larger saturates to the ace.
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v.min(12))]
    }

    /// The face number of the card with the ace playing high (2..=14).
    ///
    /// ```
    /// use hilo_equity::core::Value;
    ///
    /// assert_eq!(14, Value::Ace.face());
    /// assert_eq!(2, Value::Two.face());
    /// ```
    pub const fn face(self) -> u8 {
        self as u8 + 2
    }

    /// The face number of the card with the ace playing low (1..=13).
    ///
    /// ```
    /// use hilo_equity::core::Value;
    ///
    /// assert_eq!(1, Value::Ace.ace_low_face());
    /// assert_eq!(13, Value::King.ace_low_face());
    /// ```
    pub const fn ace_low_face(self) -> u8 {
        match self {
            Value::Ace => 1,
            v => v as u8 + 2,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Value::Ace),
            'K' | 'k' => Some(Value::King),
            'Q' | 'q' => Some(Value::Queen),
            'J' | 'j' => Some(Value::Jack),
            'T' | 't' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        FACES[usize::from(self.face())]
    }
}

/// Character for a face number as produced by `Value::face` or
/// `Value::ace_low_face`. Zero and anything out of range render as `?`.
pub(crate) fn face_char(face: u8) -> char {
    FACES.get(usize::from(face)).copied().unwrap_or('?')
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s & 3)]
    }

    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'd' | 'D' => Some(Suit::Diamond),
            's' | 'S' => Some(Suit::Spade),
            'h' | 'H' => Some(Suit::Heart),
            'c' | 'C' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Club => 'c',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
        }
    }

    /// The unicode symbol used when rendering for people.
    pub fn glyph(self) -> char {
        match self {
            Suit::Spade => '\u{2660}',
            Suit::Club => '\u{2663}',
            Suit::Heart => '\u{2665}',
            Suit::Diamond => '\u{2666}',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Render the card for people, using the suit symbol.
    ///
    /// ```
    /// use hilo_equity::core::{Card, Suit, Value};
    ///
    /// let card = Card::new(Value::Ten, Suit::Heart);
    /// assert_eq!("T\u{2665}", card.glyph_string());
    /// ```
    pub fn glyph_string(&self) -> String {
        format!("{}{}", self.value.to_char(), self.suit.glyph())
    }
}

/// Cards are indexed `value * 4 + suit`, which is also the order
/// used by `CardBitSet` and therefore by `FlatDeck::default`.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        (card.value as u8) * 4 + card.suit as u8
    }
}

impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let v = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(PokerError::UnexpectedValueChar(c)))?;
        let s = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(PokerError::UnexpectedSuitChar(c)))?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(Card::new(v, s))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self)
    }
}
