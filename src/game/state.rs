//! Game lifecycle and selection types.

use crate::card::Card;
use crate::table::{Pile, Seat};

/// Game lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Created, but the initial deal has not happened yet.
    AwaitingDeal,
    /// Cards are dealt and the game is being played.
    InProgress,
    /// A seat has emptied its hand and won; the state is frozen.
    Won(Seat),
}

/// What the acting player has picked up to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A single card from the acting player's hand.
    Hand(Card),
    /// A whole play pile, entered by selecting any card in it.
    Pile(Pile),
}
