use std::cmp::Ordering;
use std::fmt;

use super::card::face_char;
use super::{Card, CardBitSet, PokerError};

/// All the different possible hand ranks.
/// Ordered weakest to strongest.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two different pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all for the same suit.
    StraightFlush = 8,
}

const RANKS: [Rank; 9] = [
    Rank::HighCard,
    Rank::OnePair,
    Rank::TwoPair,
    Rank::ThreeOfAKind,
    Rank::Straight,
    Rank::Flush,
    Rank::FullHouse,
    Rank::FourOfAKind,
    Rank::StraightFlush,
];

impl Rank {
    pub const fn ranks() -> [Rank; 9] {
        RANKS
    }

    pub fn from_u8(v: u8) -> Option<Rank> {
        RANKS.get(usize::from(v)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::HighCard => "High Card",
            Rank::OnePair => "Pair",
            Rank::TwoPair => "Two Pair",
            Rank::ThreeOfAKind => "Three of a Kind",
            Rank::Straight => "Straight",
            Rank::Flush => "Flush",
            Rank::FullHouse => "Full House",
            Rank::FourOfAKind => "Four of a Kind",
            Rank::StraightFlush => "Straight Flush",
        }
    }

    /// Recover the rank from a description produced by `HandValue`'s
    /// `Display`. The longest matching name wins so that "Straight Flush"
    /// isn't read as "Straight".
    ///
    /// ```
    /// use hilo_equity::core::Rank;
    ///
    /// assert_eq!(Some(Rank::StraightFlush), Rank::from_description("Straight Flush 9"));
    /// assert_eq!(Some(Rank::Straight), Rank::from_description("Straight 9"));
    /// assert_eq!(None, Rank::from_description("Royal"));
    /// ```
    pub fn from_description(desc: &str) -> Option<Rank> {
        RANKS
            .iter()
            .filter(|r| desc.starts_with(r.name()))
            .max_by_key(|r| r.name().len())
            .copied()
    }
}

/// Which way a value was computed. The tag is the top nibble of the
/// compact encoding so values from different valuations never collide.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Valuation {
    /// Normal high hand.
    High = 0x0,
    /// Ace to five low. The ace plays low, straights and flushes don't count.
    AceFiveLow = 0xe,
    /// Deuce to seven low. The ace plays high, straights and flushes count.
    DeuceSevenLow = 0xf,
}

impl Valuation {
    pub fn is_low(self) -> bool {
        self != Valuation::High
    }

    fn from_tag(tag: u32) -> Option<Valuation> {
        match tag {
            0x0 => Some(Valuation::High),
            0xe => Some(Valuation::AceFiveLow),
            0xf => Some(Valuation::DeuceSevenLow),
            _ => None,
        }
    }
}

/// The strength of a five card hand.
///
/// The rank and the kicker faces (most significant first, zero padded)
/// describe the hand as if it were being played high. For low valuations
/// the ordering is inverted, so for every valuation a larger `HandValue`
/// is the better hand. Values of different valuations are never equal and
/// order by their tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandValue {
    valuation: Valuation,
    rank: Rank,
    kickers: [u8; 5],
}

const INNER_MASK: u32 = 0x00ff_ffff;

impl HandValue {
    fn new(valuation: Valuation, rank: Rank, kickers: [u8; 5]) -> Self {
        Self {
            valuation,
            rank,
            kickers,
        }
    }

    pub fn valuation(&self) -> Valuation {
        self.valuation
    }

    /// The category of the underlying hand. For low values this is what the
    /// hand would be if played high, e.g. a pair is a bad low.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Kicker faces, most significant first. Aces are 14 except in ace to
    /// five lows where they are 1.
    pub fn kickers(&self) -> [u8; 5] {
        self.kickers
    }

    fn inner(&self) -> u32 {
        self.kickers
            .iter()
            .fold(self.rank as u32, |acc, k| (acc << 4) | u32::from(*k))
    }

    /// The compact integer form. Comparing two encoded values gives the same
    /// answer as comparing the `HandValue`s.
    ///
    /// ```
    /// use hilo_equity::core::{Card, high_value};
    ///
    /// let cards: Vec<Card> = ["As", "Ad", "Kc", "Qh", "2s"]
    ///     .iter()
    ///     .map(|s| Card::try_from(*s).unwrap())
    ///     .collect();
    /// let v = high_value(&cards).unwrap();
    /// assert_eq!(0x001e_dc20, v.to_u32());
    /// ```
    pub fn to_u32(&self) -> u32 {
        let inner = self.inner();
        let body = if self.valuation.is_low() {
            INNER_MASK - inner
        } else {
            inner
        };
        ((self.valuation as u32) << 24) | body
    }

    /// Decode the compact form produced by `to_u32`.
    pub fn from_u32(encoded: u32) -> Result<Self, PokerError> {
        let err = PokerError::InvalidEncodedValue(encoded);
        let valuation = Valuation::from_tag(encoded >> 24).ok_or(err.clone())?;
        let body = encoded & INNER_MASK;
        let inner = if valuation.is_low() {
            INNER_MASK - body
        } else {
            body
        };
        let rank = Rank::from_u8((inner >> 20) as u8).ok_or(err.clone())?;
        let mut kickers = [0u8; 5];
        for (i, k) in kickers.iter_mut().enumerate() {
            *k = ((inner >> (16 - 4 * i)) & 0xf) as u8;
            if *k > 14 {
                return Err(err);
            }
        }
        Ok(Self::new(valuation, rank, kickers))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        let ours = (self.rank, self.kickers);
        let theirs = (other.rank, other.kickers);
        self.valuation
            .cmp(&other.valuation)
            .then_with(|| match self.valuation {
                Valuation::High => ours.cmp(&theirs),
                Valuation::AceFiveLow | Valuation::DeuceSevenLow => theirs.cmp(&ours),
            })
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3, c4, c5] = self.kickers.map(face_char);
        let name = self.rank.name();
        match self.rank {
            Rank::HighCard | Rank::Flush => write!(f, "{name} {c1}{c2}{c3}{c4}{c5}"),
            Rank::OnePair => write!(f, "{name} {c1} - {c2}{c3}{c4}"),
            Rank::TwoPair => write!(f, "{name} {c1}{c2} - {c3}"),
            Rank::ThreeOfAKind => write!(f, "{name} {c1} - {c2}{c3}"),
            Rank::Straight | Rank::StraightFlush => write!(f, "{name} {c1}"),
            Rank::FullHouse => write!(f, "{name} {c1}{c2}"),
            Rank::FourOfAKind => write!(f, "{name} {c1} - {c2}"),
        }
    }
}

/// Every way of putting a value on five cards that a game can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueFunction {
    /// `high_value`
    High,
    /// `ace_five_low_value`, no qualifier. Used by razz.
    AceFiveLow,
    /// `ace_five_low8_value`, eight or better.
    AceFiveLow8,
    /// `deuce_seven_low_value`
    DeuceSevenLow,
}

impl ValueFunction {
    /// Value five cards already known to be unique. `None` only for an
    /// unqualified eight or better low.
    pub fn evaluate(self, cards: &[Card; 5]) -> Option<HandValue> {
        match self {
            ValueFunction::High => Some(rank_high(cards)),
            ValueFunction::AceFiveLow => Some(rank_ace_five_low(cards)),
            ValueFunction::AceFiveLow8 => rank_ace_five_low8(cards),
            ValueFunction::DeuceSevenLow => Some(rank_deuce_seven_low(cards)),
        }
    }

    /// Same as `evaluate` but checks there are exactly 5 unique cards.
    pub fn evaluate_slice(self, cards: &[Card]) -> Result<Option<HandValue>, PokerError> {
        Ok(self.evaluate(&validate_hand(cards)?))
    }
}

/// Check that the hand is exactly five unique cards.
pub fn validate_hand(cards: &[Card]) -> Result<[Card; 5], PokerError> {
    let five: [Card; 5] = cards
        .try_into()
        .map_err(|_| PokerError::InvalidHandSize(cards.len()))?;
    CardBitSet::try_from_groups(&[&five])?;
    Ok(five)
}

/// High value of exactly five cards.
///
/// ```
/// use hilo_equity::core::{Hand, Rank, high_value};
///
/// let hand = Hand::new_from_str("Ah2h3h4h5h").unwrap();
/// let v = high_value(&hand).unwrap();
/// assert_eq!(Rank::StraightFlush, v.rank());
/// assert_eq!("Straight Flush 5", v.to_string());
/// ```
pub fn high_value(cards: &[Card]) -> Result<HandValue, PokerError> {
    Ok(rank_high(&validate_hand(cards)?))
}

/// Ace to five low value with no qualifier. Always has a value.
pub fn ace_five_low_value(cards: &[Card]) -> Result<HandValue, PokerError> {
    Ok(rank_ace_five_low(&validate_hand(cards)?))
}

/// Ace to five, eight or better low value. `None` if the hand has a pair
/// or a card above eight (ace counts as one).
///
/// ```
/// use hilo_equity::core::{Hand, ace_five_low8_value};
///
/// let wheel = Hand::new_from_str("Ah2h3h4h5h").unwrap();
/// assert!(ace_five_low8_value(&wheel).unwrap().is_some());
///
/// let nine = Hand::new_from_str("9c2h3h4h5h").unwrap();
/// assert!(ace_five_low8_value(&nine).unwrap().is_none());
/// ```
pub fn ace_five_low8_value(cards: &[Card]) -> Result<Option<HandValue>, PokerError> {
    Ok(rank_ace_five_low8(&validate_hand(cards)?))
}

/// Deuce to seven low value. Always has a value.
pub fn deuce_seven_low_value(cards: &[Card]) -> Result<HandValue, PokerError> {
    Ok(rank_deuce_seven_low(&validate_hand(cards)?))
}

/// Rank by how many times each face shows up, ignoring straights and
/// flushes. The ace is 14 when `ace_high` and 1 otherwise.
fn rank_pairs(cards: &[Card; 5], ace_high: bool) -> (Rank, [u8; 5]) {
    let mut counts = [0u8; 15];
    for c in cards {
        let face = if ace_high {
            c.value.face()
        } else {
            c.value.ace_low_face()
        };
        counts[usize::from(face)] += 1;
    }

    let mut quad = 0;
    let mut trips = 0;
    let mut pairs: [u8; 2] = [0, 0];
    let mut num_pairs = 0;
    let mut singles = [0u8; 5];
    let mut num_singles = 0;

    for face in (1..=14u8).rev() {
        match counts[usize::from(face)] {
            1 => {
                singles[num_singles] = face;
                num_singles += 1;
            }
            2 => {
                pairs[num_pairs] = face;
                num_pairs += 1;
            }
            3 => trips = face,
            4 => quad = face,
            _ => {}
        }
    }

    if quad != 0 {
        (Rank::FourOfAKind, [quad, singles[0], 0, 0, 0])
    } else if trips != 0 && num_pairs == 1 {
        (Rank::FullHouse, [trips, pairs[0], 0, 0, 0])
    } else if trips != 0 {
        (Rank::ThreeOfAKind, [trips, singles[0], singles[1], 0, 0])
    } else if num_pairs == 2 {
        (Rank::TwoPair, [pairs[0], pairs[1], singles[0], 0, 0])
    } else if num_pairs == 1 {
        (
            Rank::OnePair,
            [pairs[0], singles[0], singles[1], singles[2], 0],
        )
    } else {
        (Rank::HighCard, singles)
    }
}

/// The high face of a straight given five distinct descending faces.
/// The wheel is the only straight where the ace plays low.
fn straight_high(faces: &[u8; 5]) -> Option<u8> {
    if faces[0] - faces[4] == 4 {
        Some(faces[0])
    } else if *faces == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

fn is_flush(cards: &[Card; 5]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

fn rank_high(cards: &[Card; 5]) -> HandValue {
    let (rank, kickers) = rank_pairs(cards, true);
    if rank != Rank::HighCard {
        return HandValue::new(Valuation::High, rank, kickers);
    }
    match (straight_high(&kickers), is_flush(cards)) {
        (Some(high), true) => HandValue::new(Valuation::High, Rank::StraightFlush, [high, 0, 0, 0, 0]),
        (Some(high), false) => HandValue::new(Valuation::High, Rank::Straight, [high, 0, 0, 0, 0]),
        (None, true) => HandValue::new(Valuation::High, Rank::Flush, kickers),
        (None, false) => HandValue::new(Valuation::High, Rank::HighCard, kickers),
    }
}

fn rank_ace_five_low(cards: &[Card; 5]) -> HandValue {
    let (rank, kickers) = rank_pairs(cards, false);
    HandValue::new(Valuation::AceFiveLow, rank, kickers)
}

fn rank_ace_five_low8(cards: &[Card; 5]) -> Option<HandValue> {
    let v = rank_ace_five_low(cards);
    (v.rank == Rank::HighCard && v.kickers[0] <= 8).then_some(v)
}

fn rank_deuce_seven_low(cards: &[Card; 5]) -> HandValue {
    const FIVE_HIGH: [u8; 5] = [5, 0, 0, 0, 0];
    const ACE_FIVE: [u8; 5] = [14, 5, 4, 3, 2];

    let high = rank_high(cards);
    // The ace plays high here, so 5-4-3-2-A is ace high rather than a straight.
    let (rank, kickers) = match (high.rank, high.kickers) {
        (Rank::Straight, FIVE_HIGH) => (Rank::HighCard, ACE_FIVE),
        (Rank::StraightFlush, FIVE_HIGH) => (Rank::Flush, ACE_FIVE),
        (rank, kickers) => (rank, kickers),
    };
    HandValue::new(Valuation::DeuceSevenLow, rank, kickers)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{FlatDeck, Hand};

    fn hand(s: &str) -> Hand {
        Hand::new_from_str(s).unwrap()
    }

    fn high(s: &str) -> HandValue {
        high_value(&hand(s)).unwrap()
    }

    #[test]
    fn test_cmp() {
        assert!(Rank::HighCard < Rank::StraightFlush);
        assert!(Rank::HighCard < Rank::FourOfAKind);
        assert!(Rank::HighCard < Rank::ThreeOfAKind);
    }

    #[test]
    fn test_high_card_hand() {
        let v = high("Ad8h9cTc5c");
        assert_eq!(Rank::HighCard, v.rank());
        assert_eq!([14, 10, 9, 8, 5], v.kickers());
        assert_eq!("High Card AT985", v.to_string());
    }

    #[test]
    fn test_flush() {
        let v = high("Ad8d9dTd5d");
        assert_eq!(Rank::Flush, v.rank());
        assert_eq!([14, 10, 9, 8, 5], v.kickers());
    }

    #[test]
    fn test_full_house() {
        let v = high("AdAc9d9c9s");
        assert_eq!(Rank::FullHouse, v.rank());
        assert_eq!([9, 14, 0, 0, 0], v.kickers());
        assert_eq!("Full House 9A", v.to_string());
    }

    #[test]
    fn test_two_pair() {
        let v = high("AdAc9d9cTs");
        assert_eq!(Rank::TwoPair, v.rank());
        assert_eq!([14, 9, 10, 0, 0], v.kickers());
        assert_eq!("Two Pair A9 - T", v.to_string());
    }

    #[test]
    fn test_one_pair() {
        let v = high("AdAc9d8cTs");
        assert_eq!(Rank::OnePair, v.rank());
        assert_eq!("Pair A - T98", v.to_string());
    }

    #[test]
    fn test_four_of_a_kind() {
        let v = high("AdAcAsAhTs");
        assert_eq!(Rank::FourOfAKind, v.rank());
        assert_eq!("Four of a Kind A - T", v.to_string());
    }

    #[test]
    fn test_three_of_a_kind() {
        let v = high("2c2s2h5s6d");
        assert_eq!(Rank::ThreeOfAKind, v.rank());
        assert_eq!("Three of a Kind 2 - 65", v.to_string());
    }

    #[test]
    fn test_wheel() {
        let v = high("Ad2c3s4h5s");
        assert_eq!(Rank::Straight, v.rank());
        assert_eq!("Straight 5", v.to_string());
        assert!(v < high("2c3s4h5s6d"));
        assert!(v > high("AdAcKsQh5s"));
    }

    #[test]
    fn test_wheel_straight_flush() {
        let wheel = high("As2s3s4s5s");
        assert_eq!(Rank::StraightFlush, wheel.rank());
        assert!(wheel < high("2s3s4s5s6s"));
        assert!(wheel > high("AsKsQsJs9s"));
        assert!(wheel > high("AdAcAhAsKs"));
    }

    #[test]
    fn test_category_order() {
        let ordered = [
            high("2c4d6h8sTc"),
            high("2c2d6h8sTc"),
            high("2c2d6h6sTc"),
            high("2c2d2h8sTc"),
            high("2c3d4h5s6c"),
            high("2c4c6c8cTc"),
            high("2c2d2h8s8c"),
            high("2c2d2h2sTc"),
            high("2c3c4c5c6c"),
        ];
        for (i, w) in ordered.windows(2).enumerate() {
            assert!(w[0] < w[1], "{} should beat {}", w[1], w[0]);
            assert_eq!(Rank::from_u8(i as u8), Some(w[0].rank()));
        }
    }

    #[test]
    fn test_kicker_order() {
        assert!(high("AcAdKs7h2c") > high("AcAdQsJh9c"));
        assert!(high("KcKdQsQh2c") > high("KcKdJsJhAc"));
        assert!(high("9c9d9s2h3c") < high("9c9d9s2h4c"));
        assert_eq!(high("AcKdQsJh9c"), high("AdKcQhJs9d"));
    }

    #[test]
    fn test_validate() {
        let four: Vec<Card> = hand("AcKdQsJh").into();
        assert_eq!(Err(PokerError::InvalidHandSize(4)), high_value(&four));

        let ac = Card::try_from("Ac").unwrap();
        let dup = vec![ac, ac, Card::from(1), Card::from(2), Card::from(3)];
        assert_eq!(Err(PokerError::DuplicateCard(ac)), high_value(&dup));
    }

    #[test]
    fn test_ace_five_low8() {
        let wheel = ace_five_low8_value(&hand("Ah2c3d4s5h")).unwrap().unwrap();
        let eight = ace_five_low8_value(&hand("8h2c3d4s5h")).unwrap().unwrap();
        let seven = ace_five_low8_value(&hand("7h2c3d4s5h")).unwrap().unwrap();
        assert!(wheel > seven);
        assert!(seven > eight);
        // Straights and flushes are ignored.
        assert_eq!(
            wheel,
            ace_five_low8_value(&hand("Ah2h3h4h5h")).unwrap().unwrap()
        );
        assert_eq!(Valuation::AceFiveLow, wheel.valuation());
        assert_eq!([5, 4, 3, 2, 1], wheel.kickers());
        assert_eq!("High Card 5432A", wheel.to_string());

        assert_eq!(None, ace_five_low8_value(&hand("9h2c3d4s5h")).unwrap());
        assert_eq!(None, ace_five_low8_value(&hand("Ah2c3d4sAd")).unwrap());
        assert_eq!(None, ace_five_low8_value(&hand("Kh2c3d4s5d")).unwrap());
    }

    #[test]
    fn test_ace_five_low_unqualified() {
        let pair = ace_five_low_value(&hand("Ah2c3d4sAd")).unwrap();
        let nine = ace_five_low_value(&hand("9h2c3d4s5h")).unwrap();
        let king = ace_five_low_value(&hand("Kh2c3d4s5h")).unwrap();
        assert!(nine > king);
        assert!(king > pair);
        assert_eq!(Rank::OnePair, pair.rank());
    }

    #[test]
    fn test_deuce_seven_low() {
        let best = deuce_seven_low_value(&hand("7h5c4d3s2h")).unwrap();
        let eight = deuce_seven_low_value(&hand("8h5c4d3s2h")).unwrap();
        let straight = deuce_seven_low_value(&hand("6h5c4d3s2h")).unwrap();
        let flush = deuce_seven_low_value(&hand("7h5h4h3h2h")).unwrap();
        assert!(best > eight);
        assert!(eight > straight);
        assert!(best > flush);

        // 5-4-3-2-A is ace high, worse than any king high but better than a pair.
        let ace_high = deuce_seven_low_value(&hand("Ah5c4d3s2h")).unwrap();
        let king_high = deuce_seven_low_value(&hand("Kh5c4d3s2h")).unwrap();
        let pair = deuce_seven_low_value(&hand("2c2d4d3s7h")).unwrap();
        assert_eq!(Rank::HighCard, ace_high.rank());
        assert_eq!([14, 5, 4, 3, 2], ace_high.kickers());
        assert!(king_high > ace_high);
        assert!(ace_high > pair);

        let ace_high_flush = deuce_seven_low_value(&hand("Ah5h4h3h2h")).unwrap();
        assert_eq!(Rank::Flush, ace_high_flush.rank());
        assert!(ace_high_flush < ace_high);
    }

    #[test]
    fn test_deuce_seven_inverts_high() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = FlatDeck::default();
        let mut seen = 0;
        while seen < 500 {
            deck.shuffle(&mut rng);
            let a = [deck[0], deck[1], deck[2], deck[3], deck[4]];
            let b = [deck[5], deck[6], deck[7], deck[8], deck[9]];
            let (ha, hb) = (rank_high(&a), rank_high(&b));
            let five_high = |v: &HandValue| {
                matches!(v.rank(), Rank::Straight | Rank::StraightFlush) && v.kickers()[0] == 5
            };
            if five_high(&ha) || five_high(&hb) {
                continue;
            }
            let (la, lb) = (rank_deuce_seven_low(&a), rank_deuce_seven_low(&b));
            assert_eq!(ha.cmp(&hb).reverse(), la.cmp(&lb));
            seen += 1;
        }
    }

    #[test]
    fn test_valuations_never_collide() {
        let h = hand("7h5c4d3s2h");
        let hv = high_value(&h).unwrap();
        let af = ace_five_low_value(&h).unwrap();
        let ds = deuce_seven_low_value(&h).unwrap();
        assert_ne!(hv.to_u32(), af.to_u32());
        assert_ne!(af.to_u32(), ds.to_u32());
        assert!(hv < af && af < ds);
        assert_eq!(0xe, af.to_u32() >> 24);
        assert_eq!(0xf, ds.to_u32() >> 24);
    }

    #[test]
    fn test_encoding_matches_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = FlatDeck::default();
        for _ in 0..500 {
            deck.shuffle(&mut rng);
            let a = [deck[0], deck[1], deck[2], deck[3], deck[4]];
            let b = [deck[5], deck[6], deck[7], deck[8], deck[9]];
            for f in [
                ValueFunction::High,
                ValueFunction::AceFiveLow,
                ValueFunction::DeuceSevenLow,
            ] {
                let (Some(va), Some(vb)) = (f.evaluate(&a), f.evaluate(&b)) else {
                    unreachable!("only the eight or better low can be unqualified");
                };
                assert_eq!(va.cmp(&vb), va.to_u32().cmp(&vb.to_u32()));
                assert_eq!(Ok(va), HandValue::from_u32(va.to_u32()));
            }
        }
    }

    #[test]
    fn test_description_round_trip() {
        let hands = [
            "Ad8h9cTc5c",
            "AdAc9d8cTs",
            "AdAc9d9cTs",
            "2c2s2h5s6d",
            "2c3s4h5s6d",
            "Ad8d9dTd5d",
            "AdAc9d9c9s",
            "AdAcAsAhTs",
            "9s8s7s6s5s",
        ];
        for (i, s) in hands.iter().enumerate() {
            let v = high(s);
            assert_eq!(Rank::from_u8(i as u8), Some(v.rank()));
            let desc = v.to_string();
            assert_eq!(Some(v.rank()), Rank::from_description(&desc), "{desc}");
            let decoded = HandValue::from_u32(v.to_u32()).unwrap();
            assert_eq!((v.to_u32() >> 20) & 0xf, decoded.rank() as u32);
        }
    }

    #[test]
    fn test_invalid_encoding() {
        assert!(HandValue::from_u32(0x0900_0000).is_err());
        assert!(HandValue::from_u32(0x0a00_0000).is_err());
        assert!(HandValue::from_u32(0x000f_0000).is_err());
    }
}
