//! Game specific code: which five cards a player gets to use and the
//! registry of supported games.

/// Picking the best five card hand from hole cards and board.
mod best_hand;
pub use self::best_hand::Selection;

/// Static descriptions of every supported game.
mod variant;
pub use self::variant::{
    DRAW, GameKind, GameVariant, HOLDEM, LOW_DRAW, OMAHA, OMAHA_HILO, RAZZ, STUD, STUD_HILO,
};
