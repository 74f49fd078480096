//! Move application and win detection.

use crate::card::Card;
use crate::error::MoveError;
use crate::table::{Location, PILE_CAPACITY, Pile, Seat, Table};

use super::select::destinations;
use super::{Game, GameStatus, Selection};

impl Game {
    /// Moves the pending selection onto `destination`.
    ///
    /// The selection is consumed by this call whether the move is applied
    /// or rejected, so [`Game::legal_destinations`] is empty afterwards
    /// until a new selection is made. A hand move that empties the hand
    /// declares the acting player the winner. Does nothing once a winner is
    /// set.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is selected or the destination is not in
    /// the current legal set; the table is unchanged in both cases.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "status is held so the win is recorded atomically with the move"
    )]
    pub fn confirm_move(&self, destination: Pile) -> Result<(), MoveError> {
        let mut status = self.status.lock();
        if matches!(*status, GameStatus::Won(_)) {
            return Ok(());
        }

        let Some(selection) = self.selection.lock().take() else {
            return Err(MoveError::NoSelection);
        };

        let seat = self.current_player();

        let mut table = self.table.lock();
        if !destinations(&table, seat, selection).contains(&destination) {
            return Err(MoveError::IllegalDestination);
        }

        match selection {
            Selection::Pile(source) => apply_pile_move(&mut table, source, destination),
            Selection::Hand(card) => {
                apply_hand_move(&mut table, seat, card, destination);
                if table.hand(seat).is_empty() {
                    *status = GameStatus::Won(seat);
                }
            }
        }

        Ok(())
    }
}

/// Plays a hand card onto a destination pile.
///
/// The destination must have been validated; if it held two cards its
/// buried card is discarded to the center to make room.
pub(super) fn apply_hand_move(table: &mut Table, seat: Seat, card: Card, destination: Pile) {
    discard_buried_if_full(table, destination);

    // The legal-destination check guarantees the card is still in the hand.
    assert!(
        table.hand(seat).contains(&card),
        "selected card left the hand before the move was applied"
    );
    table.move_card(card, Location::Pile(destination));
}

/// Relocates a whole pile onto a destination pile.
///
/// The source's buried card (if any) is discarded to the center and its top
/// card lands on the destination; a full destination first discards its own
/// buried card.
pub(super) fn apply_pile_move(table: &mut Table, source: Pile, destination: Pile) {
    discard_buried_if_full(table, destination);

    let (buried, top) = match *table.pile(source) {
        [single] => (None, single),
        [buried, top] => (Some(buried), top),
        _ => unreachable!("pile move from an empty or over-capacity pile"),
    };

    if let Some(buried) = buried {
        table.move_card(buried, Location::Center);
    }
    table.move_card(top, Location::Pile(destination));
}

/// Discards a full destination's buried card to the center.
fn discard_buried_if_full(table: &mut Table, pile: Pile) {
    let cards = table.pile(pile);
    assert!(cards.len() <= PILE_CAPACITY, "play pile over capacity");

    if cards.len() == PILE_CAPACITY {
        let buried = cards[0];
        table.move_card(buried, Location::Center);
    }
}
