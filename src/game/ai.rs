//! Greedy auto-player for the computer seats.

use alloc::vec::Vec;

use crate::card::Card;
use crate::table::Pile;

use super::moves::{apply_hand_move, apply_pile_move};
use super::select::{hand_move_is_legal, pile_move_is_legal};
use super::{Game, GameStatus};

/// Number of greedy passes per turn activation.
const PASS_LIMIT: usize = 10;

impl Game {
    /// Plays greedy moves for the seat whose turn it is.
    ///
    /// Runs up to ten passes. Each pass walks the hand in position order
    /// and plays the first hand card with a legal destination (piles
    /// scanned in index order), which ends the pass; a hand card with no
    /// legal destination instead triggers a consolidation sweep that
    /// applies every legal pile-to-pile move it finds. Stops as soon as a
    /// winner is set. The fixed scan order makes the outcome deterministic
    /// for a given deal.
    pub fn auto_play(&self) {
        for _ in 0..PASS_LIMIT {
            if self.winner().is_some() {
                return;
            }
            self.auto_play_pass();
        }
    }

    /// Runs one pass; a hand-card move ends it early.
    fn auto_play_pass(&self) {
        let seat = self.current_player();
        let hand: Vec<Card> = self.table.lock().hand(seat).to_vec();

        for &card in &hand {
            let mut table = self.table.lock();

            let destination = Pile::ALL
                .into_iter()
                .find(|&pile| hand_move_is_legal(&table, card, pile));
            if let Some(destination) = destination {
                apply_hand_move(&mut table, seat, card, destination);
                let won = table.hand(seat).is_empty();
                drop(table);

                if won {
                    *self.status.lock() = GameStatus::Won(seat);
                }
                return;
            }

            // Consolidation sweep. Legality is evaluated against the live
            // table for every pair, so a source emptied mid-sweep simply
            // stops matching.
            for source in Pile::ALL {
                for destination in Pile::ALL {
                    if pile_move_is_legal(&table, source, destination) {
                        apply_pile_move(&mut table, source, destination);
                    }
                }
            }
        }
    }
}
