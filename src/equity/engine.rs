//! Equity calculation. Current values, next card outs, then every
//! completion the dealer produces is scored for the high and low halves.
use std::iter::once;

use rand::Rng;
use tracing::event;

use crate::core::{Card, CardBitSet, FlatDeck, HandValue, PlayerBitSet, PokerError};
use crate::games::{GameKind, GameVariant};

use super::{Deal, Dealer, HiLoEquity};

/// Equity for each hand in any game.
///
/// `blockers` are cards known to be out of play that belong to nobody.
/// `iterations` is only used when the game has to be sampled.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use hilo_equity::core::{Card, Hand};
/// use hilo_equity::equity::equity;
/// use hilo_equity::games::HOLDEM;
///
/// let board: Vec<Card> = Hand::new_from_str("AhKhQh7c2c").unwrap().into();
/// let hands: Vec<Vec<Card>> = vec![
///     Hand::new_from_str("AcKc").unwrap().into(),
///     Hand::new_from_str("2d2s").unwrap().into(),
/// ];
/// let mut rng = StdRng::seed_from_u64(1);
/// let results = equity(&HOLDEM, &board, &hands, &[], 1000, &mut rng).unwrap();
/// assert!(results[1].exact);
/// assert_eq!(1, results[1].high.win);
/// ```
pub fn equity<R: Rng + ?Sized>(
    game: &GameVariant,
    board: &[Card],
    hands: &[Vec<Card>],
    blockers: &[Card],
    iterations: usize,
    rng: &mut R,
) -> Result<Vec<HiLoEquity>, PokerError> {
    match game.kind {
        GameKind::Holdem => holdem_equity(game, board, hands, blockers, iterations, rng),
        GameKind::Stud | GameKind::Draw => draw_equity(game, board, hands, blockers, iterations, rng),
    }
}

/// Equity for shared board games. An empty board is sampled, a flop or
/// turn is enumerated exactly and a full board is scored once.
pub fn holdem_equity<R: Rng + ?Sized>(
    game: &GameVariant,
    board: &[Card],
    hands: &[Vec<Card>],
    blockers: &[Card],
    iterations: usize,
    rng: &mut R,
) -> Result<Vec<HiLoEquity>, PokerError> {
    game.check_arity(board, hands)?;
    let deck = unseen_deck(board, hands, blockers)?;
    let dealer = Dealer::for_board(game.name, deck, board.len(), iterations)?;
    equity_with_dealer(game, board, hands, dealer, rng)
}

/// Equity for stud and draw games. Missing hand cards are sampled. When
/// every hand is already complete it is scored once.
pub fn draw_equity<R: Rng + ?Sized>(
    game: &GameVariant,
    board: &[Card],
    hands: &[Vec<Card>],
    blockers: &[Card],
    iterations: usize,
    rng: &mut R,
) -> Result<Vec<HiLoEquity>, PokerError> {
    game.check_arity(board, hands)?;
    let deck = unseen_deck(board, hands, blockers)?;
    let dealer = Dealer::for_draw(deck, hands, game.hand_max, iterations)?;
    equity_with_dealer(game, board, hands, dealer, rng)
}

/// Every card not on the board, in a hand or blocked. Fails on the first
/// card that shows up twice.
fn unseen_deck(board: &[Card], hands: &[Vec<Card>], blockers: &[Card]) -> Result<FlatDeck, PokerError> {
    let groups: Vec<&[Card]> = once(board)
        .chain(hands.iter().map(Vec::as_slice))
        .chain(once(blockers))
        .collect();
    let seen = CardBitSet::try_from_groups(&groups)?;
    Ok((!seen).into())
}

/// Run `dealer` to completion scoring every deal. The caller's board and
/// hands are never changed.
pub fn equity_with_dealer<R: Rng + ?Sized>(
    game: &GameVariant,
    board: &[Card],
    hands: &[Vec<Card>],
    mut dealer: Dealer,
    rng: &mut R,
) -> Result<Vec<HiLoEquity>, PokerError> {
    event!(
        tracing::Level::DEBUG,
        game = game.name,
        ?board,
        hands = hands.len(),
        dealer = dealer.name(),
        "Starting equity"
    );

    let mut results: Vec<HiLoEquity> = hands
        .iter()
        .map(|h| HiLoEquity::new(h.clone(), game.is_hi_lo(), dealer.is_exact(), dealer.remaining()))
        .collect();

    let (high, low) = values(game, board, hands)?;
    let (high_best, _) = leaders(&high);
    let (low_best, _) = leaders(&low);
    for (idx, result) in results.iter_mut().enumerate() {
        result.high_summary.current = high[idx];
        result.high_summary.best = high_best.get(idx);
        if let Some(split) = result.split.as_mut() {
            split.low_summary.current = low[idx];
            split.low_summary.best = low_best.get(idx);
        }
    }

    find_outs(game, board, hands, &dealer, &mut results)?;

    let mut board = board.to_vec();
    let mut hands = hands.to_vec();
    let mut deals: usize = 0;
    while dealer.has_more() {
        dealer.advance(rng, &mut board, &mut hands);
        deals += 1;

        let (high, low) = values(game, &board, &hands)?;
        let (high_lead, high_max) = leaders(&high);
        let (low_lead, _) = leaders(&low);
        let high_won = high_lead.count() == 1;
        let low_won = low_lead.count() == 1;
        // Any qualifying low splits the pot.
        let split_pot = !low_lead.empty();

        for (idx, result) in results.iter_mut().enumerate() {
            let in_high = high_lead.get(idx);
            if let (true, Some(v)) = (in_high, high_max) {
                result.high_summary.record_win_rank(v.rank());
            }
            let high_equity = match result.split.as_mut() {
                Some(split) if split_pot => {
                    let in_low = low_lead.get(idx);
                    split.low_half.record(in_low && low_won, in_low && !low_won);
                    &mut split.high_half
                }
                _ => &mut result.high,
            };
            high_equity.record(in_high && high_won, in_high && !high_won);
        }
    }

    event!(
        tracing::Level::DEBUG,
        deals,
        exact = dealer.is_exact(),
        remaining = dealer.remaining(),
        "Finished equity"
    );
    Ok(results)
}

/// Try each single next card the dealer offers. A player who isn't best
/// now but would be best or tied best with the card gets it as an out.
fn find_outs(
    game: &GameVariant,
    board: &[Card],
    hands: &[Vec<Card>],
    dealer: &Dealer,
    results: &mut [HiLoEquity],
) -> Result<(), PokerError> {
    let Some(mut outs) = dealer.outs() else {
        return Ok(());
    };
    let mut board = board.to_vec();
    while let Some(card) = outs.next_out(&mut board) {
        let (high, low) = values(game, &board, hands)?;
        let (high_lead, _) = leaders(&high);
        let (low_lead, _) = leaders(&low);

        for idx in high_lead.ones() {
            let summary = &mut results[idx].high_summary;
            if !summary.best {
                summary.outs.push(card);
            }
        }
        for idx in low_lead.ones() {
            if let Some(split) = results[idx].split.as_mut() {
                if !split.low_summary.best {
                    split.low_summary.outs.push(card);
                }
            }
        }
    }

    for (idx, result) in results.iter().enumerate() {
        event!(
            tracing::Level::TRACE,
            player = idx,
            high_outs = ?result.high_summary.outs,
            low_outs = ?result.low_summary().map(|s| &s.outs),
            "Outs"
        );
    }
    Ok(())
}

type Values = Vec<Option<HandValue>>;

/// High and low value of every hand. The low values are all `None` for
/// games without a low half.
fn values(game: &GameVariant, board: &[Card], hands: &[Vec<Card>]) -> Result<(Values, Values), PokerError> {
    let high = hands
        .iter()
        .map(|h| game.high_value(board, h))
        .collect::<Result<Values, _>>()?;
    let low = hands
        .iter()
        .map(|h| game.low_value(board, h))
        .collect::<Result<Values, _>>()?;
    Ok((high, low))
}

/// The players holding the maximum value and that value. Players without
/// a value never lead; if nobody has one the set is empty.
fn leaders(values: &[Option<HandValue>]) -> (PlayerBitSet, Option<HandValue>) {
    values.iter().enumerate().fold(
        (PlayerBitSet::default(), None),
        |(mut found, max), (idx, value)| match (value, max) {
            (None, _) => (found, max),
            (Some(v), None) => {
                found.enable(idx);
                (found, Some(*v))
            }
            (Some(v), Some(m)) => match v.cmp(&m) {
                std::cmp::Ordering::Equal => {
                    // A tie, add the player.
                    found.enable(idx);
                    (found, max)
                }
                std::cmp::Ordering::Greater => {
                    // New leader, forget everyone else.
                    found = PlayerBitSet::default();
                    found.enable(idx);
                    (found, Some(*v))
                }
                std::cmp::Ordering::Less => (found, max),
            },
        },
    )
}
