//! Poker hand values and equity for hold'em, omaha, stud, razz and draw
//! games, including high/low split pot games.
//!
//! Hands are valued for high, ace to five low (with or without an eight
//! qualifier) and deuce to seven low. Equity is enumerated exactly when a
//! flop or turn is known and sampled otherwise.
//!
//! ```
//! use hilo_equity::core::Hand;
//! use hilo_equity::equity::EquityCalculatorBuilder;
//! use hilo_equity::games::GameVariant;
//!
//! let game = *GameVariant::from_name("omahahilo").unwrap();
//! let mut calc = EquityCalculatorBuilder::default()
//!     .game(game)
//!     .board(Hand::new_from_str("2h3h7dKs").unwrap().into())
//!     .hands(vec![
//!         Hand::new_from_str("As4cJs9c").unwrap().into(),
//!         Hand::new_from_str("KdKcQdQc").unwrap().into(),
//!     ])
//!     .build()
//!     .unwrap();
//! let results = calc.calculate().unwrap();
//! assert!(results[0].exact);
//! assert!(results[0].total().win_equity > 0.5);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Game rules: which cards make a hand and how it is valued.
pub mod games;
/// Dealing, outs and win/tie/lose accumulation.
pub mod equity;
