use crate::core::{Card, HandValue, PokerError, ValueFunction};

use super::Selection;

/// The families of games. This decides how unknown cards get dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameKind {
    /// Shared board of three to five cards.
    Holdem,
    /// Up to seven cards per player, no board.
    Stud,
    /// Five cards per player, no board.
    Draw,
}

/// Everything needed to evaluate a game: how many cards a hand may have,
/// how the best five are picked, and how they are valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameVariant {
    pub name: &'static str,
    pub kind: GameKind,
    pub selection: Selection,
    pub hand_min: usize,
    pub hand_max: usize,
    /// Value used for the high half of the pot (or the whole pot).
    pub high: ValueFunction,
    /// Value used for the low half of the pot. `None` for games that are
    /// not split.
    pub low: Option<ValueFunction>,
}

pub const HOLDEM: GameVariant = GameVariant {
    name: "holdem",
    kind: GameKind::Holdem,
    selection: Selection::Holdem,
    hand_min: 2,
    hand_max: 2,
    high: ValueFunction::High,
    low: None,
};

pub const OMAHA: GameVariant = GameVariant {
    name: "omaha",
    kind: GameKind::Holdem,
    selection: Selection::Omaha,
    hand_min: 2,
    hand_max: 4,
    high: ValueFunction::High,
    low: None,
};

pub const OMAHA_HILO: GameVariant = GameVariant {
    name: "omahahilo",
    kind: GameKind::Holdem,
    selection: Selection::Omaha,
    hand_min: 2,
    hand_max: 4,
    high: ValueFunction::High,
    low: Some(ValueFunction::AceFiveLow8),
};

pub const DRAW: GameVariant = GameVariant {
    name: "draw",
    kind: GameKind::Draw,
    selection: Selection::Draw,
    hand_min: 1,
    hand_max: 5,
    high: ValueFunction::High,
    low: None,
};

/// Deuce to seven single draw. Played for low only so the low valuation
/// is the only one.
pub const LOW_DRAW: GameVariant = GameVariant {
    name: "lowdraw",
    kind: GameKind::Draw,
    selection: Selection::Draw,
    hand_min: 1,
    hand_max: 5,
    high: ValueFunction::DeuceSevenLow,
    low: None,
};

pub const STUD: GameVariant = GameVariant {
    name: "stud",
    kind: GameKind::Stud,
    selection: Selection::Stud,
    hand_min: 2,
    hand_max: 7,
    high: ValueFunction::High,
    low: None,
};

pub const STUD_HILO: GameVariant = GameVariant {
    name: "studhilo",
    kind: GameKind::Stud,
    selection: Selection::Stud,
    hand_min: 2,
    hand_max: 7,
    high: ValueFunction::High,
    low: Some(ValueFunction::AceFiveLow8),
};

/// Ace to five stud with no qualifier. Played for low only.
pub const RAZZ: GameVariant = GameVariant {
    name: "razz",
    kind: GameKind::Stud,
    selection: Selection::Stud,
    hand_min: 2,
    hand_max: 7,
    high: ValueFunction::AceFiveLow,
    low: None,
};

static VARIANTS: [GameVariant; 8] = [
    HOLDEM, OMAHA, OMAHA_HILO, DRAW, LOW_DRAW, STUD, STUD_HILO, RAZZ,
];

impl GameVariant {
    /// Every game that is known.
    pub fn all() -> &'static [GameVariant] {
        &VARIANTS
    }

    /// Look a game up by its name.
    ///
    /// ```
    /// use hilo_equity::games::{GameVariant, OMAHA_HILO};
    ///
    /// assert_eq!(&OMAHA_HILO, GameVariant::from_name("omahahilo").unwrap());
    /// assert!(GameVariant::from_name("badugi").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<&'static GameVariant, PokerError> {
        VARIANTS
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PokerError::UnknownGame(name.to_string()))
    }

    pub fn is_hi_lo(&self) -> bool {
        self.low.is_some()
    }

    /// The largest real board a caller may pass in. Stud and draw games
    /// take a single board card only as a stand in for the next card.
    pub fn board_max(&self) -> usize {
        match self.kind {
            GameKind::Holdem => 5,
            GameKind::Stud => 1,
            GameKind::Draw => 0,
        }
    }

    /// Best high value for one player. See `Selection::best_value`.
    pub fn high_value(&self, board: &[Card], hand: &[Card]) -> Result<Option<HandValue>, PokerError> {
        self.selection.best_value(board, hand, self.high)
    }

    /// Best low value for one player, `None` if the game has no low half
    /// or the player has no qualifying low.
    pub fn low_value(&self, board: &[Card], hand: &[Card]) -> Result<Option<HandValue>, PokerError> {
        match self.low {
            Some(low) => self.selection.best_value(board, hand, low),
            None => Ok(None),
        }
    }

    /// Check the board and the number of cards in every hand.
    pub(crate) fn check_arity(&self, board: &[Card], hands: &[Vec<Card>]) -> Result<(), PokerError> {
        let board_ok = match self.kind {
            GameKind::Holdem => matches!(board.len(), 0 | 3..=5),
            GameKind::Stud | GameKind::Draw => board.len() <= self.board_max(),
        };
        if !board_ok {
            return Err(PokerError::InvalidBoardSize {
                game: self.name,
                board: board.len(),
            });
        }
        let min_hands = match self.kind {
            GameKind::Holdem => 1,
            GameKind::Stud | GameKind::Draw => 2,
        };
        if hands.len() < min_hands {
            return Err(PokerError::TooFewHands {
                game: self.name,
                min: min_hands,
                hands: hands.len(),
            });
        }
        for hand in hands {
            if hand.len() < self.hand_min || hand.len() > self.hand_max {
                return Err(PokerError::InvalidHandLength {
                    game: self.name,
                    hand: hand.len(),
                });
            }
        }
        Ok(())
    }
}
