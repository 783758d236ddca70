use thiserror::Error;

use super::Card;

/// This is the core error type for the library. It uses `thiserror` to
/// provide readable error messages.
///
/// Every variant is a precondition failure: the caller handed in cards or a
/// game combination that can't be evaluated. Nothing here is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Unable to parse value '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit '{0}'")]
    UnexpectedSuitChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} was used more than once")]
    DuplicateCard(Card),
    #[error("A hand value needs exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Board of {board} cards is not valid for {game}")]
    InvalidBoardSize { game: &'static str, board: usize },
    #[error("Hand of {hand} cards is not valid for {game}")]
    InvalidHandLength { game: &'static str, hand: usize },
    #[error("{game} needs at least {min} hands, got {hands}")]
    TooFewHands {
        game: &'static str,
        min: usize,
        hands: usize,
    },
    #[error("Need {needed} unknown cards but only {remaining} are left in the deck")]
    NotEnoughCards { needed: usize, remaining: usize },
    #[error("Unknown game '{0}'")]
    UnknownGame(String),
    #[error("Value {0:#x} is not a valid encoded hand value")]
    InvalidEncodedValue(u32),
    #[error("No game was given to the equity calculator")]
    NeedGame,
}
