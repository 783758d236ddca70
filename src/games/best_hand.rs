use crate::core::{Card, HandValue, PokerError, ValueFunction, next_combination};

/// How a game builds a five card hand from a player's cards and the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Any five of the two hole cards and three to five board cards.
    Holdem,
    /// Exactly two of two to four hole cards and exactly three of the board.
    Omaha,
    /// Any five of up to seven hand cards. A single board card stands in
    /// for the next card dealt when looking for outs.
    Stud,
    /// The five card hand itself, or four hand cards plus a single board
    /// card when looking for outs.
    Draw,
}

impl Selection {
    pub fn name(self) -> &'static str {
        match self {
            Selection::Holdem => "holdem",
            Selection::Omaha => "omaha",
            Selection::Stud => "stud",
            Selection::Draw => "draw",
        }
    }

    /// The largest board this selection understands.
    pub fn board_max(self) -> usize {
        match self {
            Selection::Holdem | Selection::Omaha => 5,
            Selection::Stud | Selection::Draw => 1,
        }
    }

    fn hand_bounds(self) -> (usize, usize) {
        match self {
            Selection::Holdem => (2, 2),
            Selection::Omaha => (2, 4),
            Selection::Stud => (2, 7),
            Selection::Draw => (1, 5),
        }
    }

    /// Best value of any legal five card hand for `hand` with `board`.
    ///
    /// `None` when there aren't enough cards yet to make five (a board with
    /// fewer than three cards, a stud hand with fewer than five) or when the
    /// value function doesn't qualify any of the candidates. Cards are
    /// assumed to be unique; board and hand sizes outside the selection's
    /// limits are an error.
    ///
    /// ```
    /// use hilo_equity::core::{Hand, Rank, ValueFunction};
    /// use hilo_equity::games::Selection;
    ///
    /// let board = Hand::new_from_str("AhKhQh").unwrap();
    /// let hand = Hand::new_from_str("AcKc").unwrap();
    /// let v = Selection::Holdem
    ///     .best_value(&board, &hand, ValueFunction::High)
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(Rank::TwoPair, v.rank());
    /// ```
    pub fn best_value(
        self,
        board: &[Card],
        hand: &[Card],
        value: ValueFunction,
    ) -> Result<Option<HandValue>, PokerError> {
        self.check(board, hand)?;

        let best = match self {
            Selection::Holdem => {
                if board.len() < 3 {
                    None
                } else {
                    let pool: Vec<Card> = hand.iter().chain(board.iter()).copied().collect();
                    best_of_any_five(&pool, value)
                }
            }
            Selection::Omaha => {
                if board.len() < 3 {
                    None
                } else {
                    best_of_two_and_three(hand, board, value)
                }
            }
            Selection::Stud => {
                if hand.len() < 5 {
                    None
                } else {
                    // With seven cards in hand the board card is ignored.
                    let pool: Vec<Card> = hand.iter().chain(board.iter()).take(7).copied().collect();
                    best_of_any_five(&pool, value)
                }
            }
            Selection::Draw => match (hand.len(), board.len()) {
                (5, _) | (4, 1) => {
                    let pool: Vec<Card> = hand.iter().chain(board.iter()).take(5).copied().collect();
                    best_of_any_five(&pool, value)
                }
                _ => None,
            },
        };
        Ok(best)
    }

    fn check(self, board: &[Card], hand: &[Card]) -> Result<(), PokerError> {
        if board.len() > self.board_max() {
            return Err(PokerError::InvalidBoardSize {
                game: self.name(),
                board: board.len(),
            });
        }
        let (min, max) = self.hand_bounds();
        if hand.len() < min || hand.len() > max {
            return Err(PokerError::InvalidHandLength {
                game: self.name(),
                hand: hand.len(),
            });
        }
        Ok(())
    }
}

/// Max over every five card subset of the pool. `None` if the pool has
/// fewer than five cards or nothing qualifies.
fn best_of_any_five(pool: &[Card], value: ValueFunction) -> Option<HandValue> {
    if pool.len() < 5 {
        return None;
    }
    let mut idx = [0, 1, 2, 3, 4];
    let mut best = None;
    loop {
        best = best.max(value.evaluate(&idx.map(|i| pool[i])));
        if !next_combination(&mut idx, pool.len()) {
            return best;
        }
    }
}

/// Max over two hole cards combined with three board cards.
fn best_of_two_and_three(
    hand: &[Card],
    board: &[Card],
    value: ValueFunction,
) -> Option<HandValue> {
    let mut best = None;
    let mut hole = [0, 1];
    loop {
        let mut shared = [0, 1, 2];
        loop {
            let five = [
                hand[hole[0]],
                hand[hole[1]],
                board[shared[0]],
                board[shared[1]],
                board[shared[2]],
            ];
            best = best.max(value.evaluate(&five));
            if !next_combination(&mut shared, board.len()) {
                break;
            }
        }
        if !next_combination(&mut hole, hand.len()) {
            return best;
        }
    }
}
