//! Error types for game operations.
//!
//! Every error is a rejection: when an operation returns `Err`, the
//! observable game state is unchanged. Mutating calls made after a winner
//! has been declared are not errors at all; they return `Ok` and do
//! nothing.

use thiserror::Error;

/// Errors that can occur when selecting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The card is neither in the acting player's hand nor in a play pile.
    #[error("card is not in the acting player's hand or any play pile")]
    InvalidSelection,
}

/// Errors that can occur when confirming a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No card or pile is currently selected.
    #[error("no card or pile is selected")]
    NoSelection,
    /// The destination pile is not legal for the current selection.
    #[error("destination pile is not legal for the current selection")]
    IllegalDestination,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The initial deal has already happened.
    #[error("cards have already been dealt")]
    AlreadyDealt,
}

/// Errors that can occur when advancing the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The initial deal has not happened yet.
    #[error("cards have not been dealt yet")]
    NotDealt,
}
