//! Equity of each player's hand over every way the unknown cards can fall.

/// Strategies for dealing the unknown cards.
mod dealer;
pub use self::dealer::{
    DEFAULT_ITERATIONS, Deal, Dealer, FixedDealer, OutsCursor, PairDealer, RandomBoardDealer,
    RandomDrawDealer, SingleDealer,
};

/// Win/tie counters and per player results.
mod accumulator;
pub use self::accumulator::{Equity, EquityTotal, HiLoEquity, SplitEquity, ValueSummary};

mod engine;
pub use self::engine::{draw_equity, equity, equity_with_dealer, holdem_equity};

mod builder;
pub use self::builder::{EquityCalculator, EquityCalculatorBuilder, RngEquityCalculatorBuilder};
