//! A Kings in the Corner game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full table flow for
//! a four-player game on eight radial piles: the initial deal, card and
//! pile selection, move legality, move application, win detection, and the
//! greedy auto-player that drives the three non-human seats.
//!
//! The engine is synchronous and poll-based: a caller (typically a
//! renderer) issues the mutating calls in turn order and reads the table
//! back through the snapshot queries after each one.
//!
//! # Example
//!
//! ```
//! use kcrs::{Game, Location, Seat};
//!
//! let game = Game::new(42);
//! game.deal_initial().unwrap();
//!
//! // South starts with eight cards, the other seats with seven.
//! assert_eq!(game.cards_at(Location::Hand(Seat::South)).len(), 8);
//! assert_eq!(game.current_player(), Seat::South);
//!
//! // Run one full turn cycle: each computer seat draws and plays.
//! game.advance_turn().unwrap();
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
pub mod table;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, KING_RANK, Suit};
pub use error::{DealError, MoveError, SelectError, TurnError};
pub use game::{Game, GameStatus, Selection};
pub use table::{Location, PILE_CAPACITY, Pile, Seat, Table};
