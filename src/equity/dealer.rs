//! Ways of completing the unknown cards of a deal.
//!
//! A dealer is a cursor. Each call to `advance` writes the next completion
//! into the board and hands it is given, until `has_more` says every
//! completion (or every sample) has been produced. Dealers that can look
//! one card ahead also hand out an [`OutsCursor`].
use rand::Rng;

use crate::core::{Card, FlatDeck, PokerError, next_combination};

/// Default number of completions the random dealers sample.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// The capability every dealer has.
pub trait Deal {
    /// Is there another completion to deal.
    fn has_more(&self) -> bool;

    /// Write the next completion into `board` and `hands`. Only the cards
    /// past what was known at the start are overwritten, so the same
    /// buffers can be passed every time.
    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &mut Vec<Card>, hands: &mut [Vec<Card>]);

    /// True when the completions are every possible one rather than a sample.
    fn is_exact(&self) -> bool;

    /// A cursor over the single next cards, for dealers that look ahead.
    fn outs(&self) -> Option<OutsCursor<'_>>;

    /// Number of unknown cards the dealer draws from.
    fn remaining(&self) -> usize;
}

/// Walks every remaining card as a candidate next card. Each out is
/// written to a fixed board slot, dropping anything past it.
#[derive(Debug, Clone)]
pub struct OutsCursor<'a> {
    pool: &'a [Card],
    slot: usize,
    next: usize,
}

impl<'a> OutsCursor<'a> {
    pub fn new(pool: &'a [Card], slot: usize) -> Self {
        Self {
            pool,
            slot,
            next: 0,
        }
    }

    pub fn has_more(&self) -> bool {
        self.next < self.pool.len()
    }

    /// Put the next candidate card on `board` at the cursor's slot and
    /// return it.
    pub fn next_out(&mut self, board: &mut Vec<Card>) -> Option<Card> {
        let card = *self.pool.get(self.next)?;
        self.next += 1;
        board.truncate(self.slot);
        board.push(card);
        Some(card)
    }
}

/// Nothing is unknown. One completion that changes nothing.
#[derive(Debug, Clone, Default)]
pub struct FixedDealer {
    dealt: bool,
}

impl Deal for FixedDealer {
    fn has_more(&self) -> bool {
        !self.dealt
    }

    fn advance<R: Rng + ?Sized>(&mut self, _rng: &mut R, _board: &mut Vec<Card>, _hands: &mut [Vec<Card>]) {
        self.dealt = true;
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn outs(&self) -> Option<OutsCursor<'_>> {
        None
    }

    fn remaining(&self) -> usize {
        0
    }
}

/// Three board cards known. Every unordered pair of the remaining cards
/// becomes the turn and river exactly once.
#[derive(Debug, Clone)]
pub struct PairDealer {
    deck: FlatDeck,
    idx: [usize; 2],
    done: bool,
}

impl PairDealer {
    pub fn new(deck: FlatDeck) -> Result<Self, PokerError> {
        if deck.len() < 2 {
            return Err(PokerError::NotEnoughCards {
                needed: 2,
                remaining: deck.len(),
            });
        }
        Ok(Self {
            deck,
            idx: [0, 1],
            done: false,
        })
    }
}

impl Deal for PairDealer {
    fn has_more(&self) -> bool {
        !self.done
    }

    fn advance<R: Rng + ?Sized>(&mut self, _rng: &mut R, board: &mut Vec<Card>, _hands: &mut [Vec<Card>]) {
        board.truncate(3);
        board.push(self.deck[self.idx[0]]);
        board.push(self.deck[self.idx[1]]);
        self.done = !next_combination(&mut self.idx, self.deck.len());
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn outs(&self) -> Option<OutsCursor<'_>> {
        Some(OutsCursor::new(&self.deck[..], 3))
    }

    fn remaining(&self) -> usize {
        self.deck.len()
    }
}

/// Four board cards known. Every remaining card is the river once.
#[derive(Debug, Clone)]
pub struct SingleDealer {
    deck: FlatDeck,
    next: usize,
}

impl SingleDealer {
    pub fn new(deck: FlatDeck) -> Result<Self, PokerError> {
        if deck.is_empty() {
            return Err(PokerError::NotEnoughCards {
                needed: 1,
                remaining: 0,
            });
        }
        Ok(Self { deck, next: 0 })
    }
}

impl Deal for SingleDealer {
    fn has_more(&self) -> bool {
        self.next < self.deck.len()
    }

    fn advance<R: Rng + ?Sized>(&mut self, _rng: &mut R, board: &mut Vec<Card>, _hands: &mut [Vec<Card>]) {
        board.truncate(4);
        board.push(self.deck[self.next]);
        self.next += 1;
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn outs(&self) -> Option<OutsCursor<'_>> {
        Some(OutsCursor::new(&self.deck[..], 4))
    }

    fn remaining(&self) -> usize {
        self.deck.len()
    }
}

/// No board known. Each iteration shuffles and deals a whole board.
#[derive(Debug, Clone)]
pub struct RandomBoardDealer {
    deck: FlatDeck,
    iterations: usize,
    dealt: usize,
}

impl RandomBoardDealer {
    pub fn new(deck: FlatDeck, iterations: usize) -> Result<Self, PokerError> {
        if deck.len() < 5 {
            return Err(PokerError::NotEnoughCards {
                needed: 5,
                remaining: deck.len(),
            });
        }
        Ok(Self {
            deck,
            iterations,
            dealt: 0,
        })
    }
}

impl Deal for RandomBoardDealer {
    fn has_more(&self) -> bool {
        self.dealt < self.iterations
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &mut Vec<Card>, _hands: &mut [Vec<Card>]) {
        self.deck.shuffle(rng);
        board.clear();
        board.extend_from_slice(&self.deck[..5]);
        self.dealt += 1;
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn outs(&self) -> Option<OutsCursor<'_>> {
        None
    }

    fn remaining(&self) -> usize {
        self.deck.len()
    }
}

/// Stud and draw. Each iteration shuffles and fills every hand up to the
/// game's hand size. When every hand already holds at least four cards
/// the remaining cards are also offered as outs through a one card board.
#[derive(Debug, Clone)]
pub struct RandomDrawDealer {
    deck: FlatDeck,
    // Length of each hand before anything was drawn.
    hand_lens: Vec<usize>,
    hand_max: usize,
    iterations: usize,
    dealt: usize,
    with_outs: bool,
}

impl RandomDrawDealer {
    pub fn new(
        deck: FlatDeck,
        hands: &[Vec<Card>],
        hand_max: usize,
        iterations: usize,
    ) -> Result<Self, PokerError> {
        let hand_lens: Vec<usize> = hands.iter().map(|h| h.len()).collect();
        let needed: usize = hand_lens.iter().map(|l| hand_max.saturating_sub(*l)).sum();
        if needed > deck.len() {
            return Err(PokerError::NotEnoughCards {
                needed,
                remaining: deck.len(),
            });
        }
        let with_outs = hand_lens.iter().min().is_some_and(|m| *m >= 4);
        Ok(Self {
            deck,
            hand_lens,
            hand_max,
            iterations,
            dealt: 0,
            with_outs,
        })
    }
}

impl Deal for RandomDrawDealer {
    fn has_more(&self) -> bool {
        self.dealt < self.iterations
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, _board: &mut Vec<Card>, hands: &mut [Vec<Card>]) {
        self.deck.shuffle(rng);
        let mut offset = 0;
        for (hand, len) in hands.iter_mut().zip(self.hand_lens.iter()) {
            hand.truncate(*len);
            let draws = self.hand_max.saturating_sub(*len);
            hand.extend_from_slice(&self.deck[offset..offset + draws]);
            offset += draws;
        }
        self.dealt += 1;
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn outs(&self) -> Option<OutsCursor<'_>> {
        if self.with_outs {
            Some(OutsCursor::new(&self.deck[..], 0))
        } else {
            None
        }
    }

    fn remaining(&self) -> usize {
        self.deck.len()
    }
}

/// Every dealing strategy.
#[derive(Debug, Clone)]
pub enum Dealer {
    Fixed(FixedDealer),
    Pair(PairDealer),
    Single(SingleDealer),
    RandomBoard(RandomBoardDealer),
    RandomDraw(RandomDrawDealer),
}

impl Dealer {
    /// Pick the dealer for a shared board game from how many board cards
    /// are already known. `deck` is every card not seen anywhere and `game`
    /// names the game in errors.
    pub fn for_board(
        game: &'static str,
        deck: FlatDeck,
        board_len: usize,
        iterations: usize,
    ) -> Result<Self, PokerError> {
        match board_len {
            0 => Ok(Dealer::RandomBoard(RandomBoardDealer::new(deck, iterations)?)),
            3 => Ok(Dealer::Pair(PairDealer::new(deck)?)),
            4 => Ok(Dealer::Single(SingleDealer::new(deck)?)),
            5 => Ok(Dealer::Fixed(FixedDealer::default())),
            board => Err(PokerError::InvalidBoardSize { game, board }),
        }
    }

    /// Pick the dealer for a game where players draw their own cards up
    /// to `hand_max`.
    pub fn for_draw(
        deck: FlatDeck,
        hands: &[Vec<Card>],
        hand_max: usize,
        iterations: usize,
    ) -> Result<Self, PokerError> {
        let unknown: usize = hands.iter().map(|h| hand_max.saturating_sub(h.len())).sum();
        if unknown == 0 {
            Ok(Dealer::Fixed(FixedDealer::default()))
        } else {
            Ok(Dealer::RandomDraw(RandomDrawDealer::new(
                deck, hands, hand_max, iterations,
            )?))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dealer::Fixed(_) => "fixed",
            Dealer::Pair(_) => "pair",
            Dealer::Single(_) => "single",
            Dealer::RandomBoard(_) => "random_board",
            Dealer::RandomDraw(_) => "random_draw",
        }
    }
}

impl Deal for Dealer {
    fn has_more(&self) -> bool {
        match self {
            Dealer::Fixed(d) => d.has_more(),
            Dealer::Pair(d) => d.has_more(),
            Dealer::Single(d) => d.has_more(),
            Dealer::RandomBoard(d) => d.has_more(),
            Dealer::RandomDraw(d) => d.has_more(),
        }
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &mut Vec<Card>, hands: &mut [Vec<Card>]) {
        match self {
            Dealer::Fixed(d) => d.advance(rng, board, hands),
            Dealer::Pair(d) => d.advance(rng, board, hands),
            Dealer::Single(d) => d.advance(rng, board, hands),
            Dealer::RandomBoard(d) => d.advance(rng, board, hands),
            Dealer::RandomDraw(d) => d.advance(rng, board, hands),
        }
    }

    fn is_exact(&self) -> bool {
        match self {
            Dealer::Fixed(d) => d.is_exact(),
            Dealer::Pair(d) => d.is_exact(),
            Dealer::Single(d) => d.is_exact(),
            Dealer::RandomBoard(d) => d.is_exact(),
            Dealer::RandomDraw(d) => d.is_exact(),
        }
    }

    fn outs(&self) -> Option<OutsCursor<'_>> {
        match self {
            Dealer::Fixed(d) => d.outs(),
            Dealer::Pair(d) => d.outs(),
            Dealer::Single(d) => d.outs(),
            Dealer::RandomBoard(d) => d.outs(),
            Dealer::RandomDraw(d) => d.outs(),
        }
    }

    fn remaining(&self) -> usize {
        match self {
            Dealer::Fixed(d) => d.remaining(),
            Dealer::Pair(d) => d.remaining(),
            Dealer::Single(d) => d.remaining(),
            Dealer::RandomBoard(d) => d.remaining(),
            Dealer::RandomDraw(d) => d.remaining(),
        }
    }
}
