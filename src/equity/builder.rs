use rand::{Rng, rngs::ThreadRng};

use crate::core::{Card, PokerError};
use crate::games::GameVariant;

use super::{DEFAULT_ITERATIONS, HiLoEquity, equity};

/// # EquityCalculatorBuilder
///
/// `RngEquityCalculatorBuilder` collects the inputs of an equity
/// calculation. A game is required, everything else is optional.
///
/// `EquityCalculatorBuilder` is a type alias for
/// `RngEquityCalculatorBuilder<ThreadRng>` which is the default builder.
///
/// ## Examples
///
/// ```
/// use hilo_equity::core::Hand;
/// use hilo_equity::equity::EquityCalculatorBuilder;
/// use hilo_equity::games::HOLDEM;
///
/// let mut calc = EquityCalculatorBuilder::default()
///     .game(HOLDEM)
///     .board(Hand::new_from_str("AhKhQh").unwrap().into())
///     .hands(vec![
///         Hand::new_from_str("AcKc").unwrap().into(),
///         Hand::new_from_str("2d2s").unwrap().into(),
///     ])
///     .build()
///     .unwrap();
/// let results = calc.calculate().unwrap();
/// assert!(results[0].high_summary.best);
/// ```
///
/// Sampled games can be made reproducible by passing in a seeded rng:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use hilo_equity::core::Hand;
/// use hilo_equity::equity::RngEquityCalculatorBuilder;
/// use hilo_equity::games::STUD;
///
/// let mut calc = RngEquityCalculatorBuilder::default()
///     .game(STUD)
///     .hands(vec![
///         Hand::new_from_str("AsAdKc").unwrap().into(),
///         Hand::new_from_str("7h8h9h").unwrap().into(),
///     ])
///     .iterations(200)
///     .rng(StdRng::seed_from_u64(420))
///     .build()
///     .unwrap();
/// let results = calc.calculate().unwrap();
/// assert_eq!(200, results[0].high.count);
/// ```
pub struct RngEquityCalculatorBuilder<R: Rng> {
    game: Option<GameVariant>,
    board: Vec<Card>,
    hands: Vec<Vec<Card>>,
    blockers: Vec<Card>,
    iterations: usize,
    rng: Option<R>,
}

impl<R: Rng> RngEquityCalculatorBuilder<R> {
    pub fn game(mut self, game: GameVariant) -> Self {
        self.game = Some(game);
        self
    }

    /// Set the known board cards.
    pub fn board(mut self, board: Vec<Card>) -> Self {
        self.board = board;
        self
    }

    /// Set the known cards of every player.
    pub fn hands(mut self, hands: Vec<Vec<Card>>) -> Self {
        self.hands = hands;
        self
    }

    /// Cards known to be gone that belong to nobody, for example a
    /// folded player's hand.
    pub fn blockers(mut self, blockers: Vec<Card>) -> Self {
        self.blockers = blockers;
        self
    }

    /// How many deals to sample when the game can't be enumerated.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Check the fields and create the calculator.
    ///
    /// @returns PokerError if no game was given or the board and hands
    /// don't fit the game.
    pub fn build(self) -> Result<EquityCalculator<R>, PokerError> {
        let game = self.game.ok_or(PokerError::NeedGame)?;
        game.check_arity(&self.board, &self.hands)?;
        Ok(EquityCalculator {
            game,
            board: self.board,
            hands: self.hands,
            blockers: self.blockers,
            iterations: self.iterations,
            rng: self.rng,
        })
    }
}

impl<R: Rng> Default for RngEquityCalculatorBuilder<R> {
    fn default() -> Self {
        Self {
            game: None,
            board: vec![],
            hands: vec![],
            blockers: vec![],
            iterations: DEFAULT_ITERATIONS,
            rng: None,
        }
    }
}

/// The rng is ThreadRng.
pub type EquityCalculatorBuilder = RngEquityCalculatorBuilder<ThreadRng>;

/// A configured equity calculation. Calling `calculate` more than once
/// keeps drawing from the same rng.
#[derive(Debug)]
pub struct EquityCalculator<R: Rng> {
    game: GameVariant,
    board: Vec<Card>,
    hands: Vec<Vec<Card>>,
    blockers: Vec<Card>,
    iterations: usize,
    // Without one the thread rng is used.
    rng: Option<R>,
}

impl<R: Rng> EquityCalculator<R> {
    pub fn game(&self) -> &GameVariant {
        &self.game
    }

    pub fn calculate(&mut self) -> Result<Vec<HiLoEquity>, PokerError> {
        match self.rng.as_mut() {
            Some(rng) => equity(
                &self.game,
                &self.board,
                &self.hands,
                &self.blockers,
                self.iterations,
                rng,
            ),
            None => equity(
                &self.game,
                &self.board,
                &self.hands,
                &self.blockers,
                self.iterations,
                &mut rand::rng(),
            ),
        }
    }
}
