//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round state machine:
//! betting, the initial deal, player actions (hit, stand, double down,
//! split), dealer play and settlement. Presentation is kept outside the
//! engine behind the [`Sink`] trait, and automatic sequences are broken into
//! [`Step`]s so a front end can pace them however it likes.
//!
//! # Example
//!
//! ```
//! use blackjack_round::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! game.start_round().unwrap();
//! game.run_pending();
//!
//! while game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//!     game.run_pending();
//! }
//! assert_eq!(game.state(), GameState::Betting);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod sink;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealError};
pub use game::{Game, GameState, Round, Stats, Step};
pub use hand::{DealerHand, Hand, HandValue, evaluate, is_blackjack};
pub use options::{GameOptions, Pacing};
pub use result::{HandOutcome, HandResult, Natural, RoundResult};
pub use shoe::Shoe;
pub use sink::{HandOwner, NullSink, Sink};
pub use view::{Controls, HandView, RoundSnapshot};
