//! Selection handling and move legality.

use alloc::vec::Vec;

use crate::card::{Card, KING_RANK};
use crate::error::SelectError;
use crate::table::{Location, Pile, Seat, Table};

use super::{Game, Selection};

impl Game {
    /// Selects a card for the acting player.
    ///
    /// A card in the current player's hand selects that card; a card
    /// anywhere in a play pile selects the whole pile (a buried card stands
    /// for its pile). Does nothing once a winner is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is neither in the current player's hand
    /// nor in a play pile. The previous selection is kept.
    pub fn select_card(&self, card: Card) -> Result<(), SelectError> {
        if self.winner().is_some() {
            return Ok(());
        }

        let seat = self.current_player();

        let table = self.table.lock();
        let selection = match table.location_of(card) {
            Some(Location::Hand(owner)) if owner == seat => Selection::Hand(card),
            Some(Location::Pile(pile)) => Selection::Pile(pile),
            _ => return Err(SelectError::InvalidSelection),
        };
        drop(table);

        *self.selection.lock() = Some(selection);
        Ok(())
    }

    /// Clears the pending selection, if any.
    pub fn clear_selection(&self) {
        *self.selection.lock() = None;
    }

    /// Returns the pending selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        *self.selection.lock()
    }

    /// Returns the piles the pending selection may legally move to.
    ///
    /// Recomputed from the live table on every call; empty when nothing is
    /// selected.
    #[must_use]
    pub fn legal_destinations(&self) -> Vec<Pile> {
        let Some(selection) = *self.selection.lock() else {
            return Vec::new();
        };
        let seat = self.current_player();
        let table = self.table.lock();
        destinations(&table, seat, selection)
    }
}

/// Computes the legal destination piles for a selection.
///
/// A hand selection whose card has left the hand, or a pile selection whose
/// pile has been emptied, has no destinations.
pub(super) fn destinations(table: &Table, seat: Seat, selection: Selection) -> Vec<Pile> {
    match selection {
        Selection::Hand(card) => {
            if !table.hand(seat).contains(&card) {
                return Vec::new();
            }
            Pile::ALL
                .into_iter()
                .filter(|&pile| hand_move_is_legal(table, card, pile))
                .collect()
        }
        Selection::Pile(source) => Pile::ALL
            .into_iter()
            .filter(|&pile| pile_move_is_legal(table, source, pile))
            .collect(),
    }
}

/// Returns whether a hand card may be played onto `destination`.
///
/// A non-empty destination follows the build rule against its top card. An
/// empty corner pile accepts any rank; an empty edge pile accepts a King
/// only.
pub(super) fn hand_move_is_legal(table: &Table, card: Card, destination: Pile) -> bool {
    match table.pile_top(destination) {
        Some(top) => card.builds_on(top),
        None => (card.rank == KING_RANK && destination.is_edge()) || destination.is_corner(),
    }
}

/// Returns whether a whole pile may be moved onto `destination`.
///
/// The pile's bottom card carries the build rule against the destination's
/// top card; empty destinations are never legal for pile moves.
pub(super) fn pile_move_is_legal(table: &Table, source: Pile, destination: Pile) -> bool {
    if source == destination {
        return false;
    }
    let Some(&moving) = table.pile(source).first() else {
        return false;
    };
    table
        .pile_top(destination)
        .is_some_and(|top| moving.builds_on(top))
}
