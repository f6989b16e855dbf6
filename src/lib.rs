//! A two-player Twenty-Four card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow of the
//! Twenty-Four shedding game: dealing the 52-card deck into two hands,
//! revealing two cards per player into the middle, flipping them face up, and
//! resolving the round as a win or a draw. Round verdicts come from outside
//! the engine (the players judge who solved the puzzle first); a player wins
//! the game by shedding their last card in a won round.
//!
//! # Example
//!
//! ```
//! use tfrs::{Game, GameOptions, Seat};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//!
//! game.deal().unwrap();
//! game.reveal().unwrap();
//! game.flip().unwrap();
//! let result = game.round_win(Seat::PlayerOne).unwrap();
//! assert_eq!(result.player_two_remaining, 28);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, FlipError, ParseRankError, ResolveError, RevealError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::{Player, Seat};
pub use result::{RoundOutcome, RoundResult};
