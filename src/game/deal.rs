//! Initial distribution and the turn cycle.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::{DealError, TurnError};
use crate::table::{Location, Pile, Seat, Table};

use super::{Game, GameStatus};

/// Cards dealt to every hand during the initial round-robin.
const INITIAL_HAND_SIZE: usize = 7;

/// Order in which the edge piles are seeded during the deal.
const EDGE_SEED_ORDER: [Pile; 4] = [Pile::North, Pile::South, Pile::West, Pile::East];

impl Game {
    /// Deals the opening layout.
    ///
    /// Seven cards go to each hand round-robin in seat order, one random
    /// center card seeds each edge pile (north, south, west, east), and one
    /// extra card goes to the human seat, which starts with eight. Sets the
    /// current player to South. Does nothing once a winner is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal has already happened.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for the entire deal"
    )]
    pub fn deal_initial(&self) -> Result<(), DealError> {
        let mut status = self.status.lock();
        match *status {
            GameStatus::AwaitingDeal => {}
            GameStatus::InProgress => return Err(DealError::AlreadyDealt),
            GameStatus::Won(_) => return Ok(()),
        }

        self.set_current_player(Seat::South);

        let mut table = self.table.lock();
        let mut rng = self.rng.lock();

        for _ in 0..INITIAL_HAND_SIZE {
            for seat in Seat::ORDER {
                deal_one(&mut table, &mut rng, Location::Hand(seat));
            }
        }

        for pile in EDGE_SEED_ORDER {
            deal_one(&mut table, &mut rng, Location::Pile(pile));
        }

        // The human seat starts with one extra card.
        deal_one(&mut table, &mut rng, Location::Hand(Seat::South));

        *status = GameStatus::InProgress;
        Ok(())
    }

    /// Runs one full turn cycle.
    ///
    /// Clears the selection, then for each computer seat in order (west,
    /// north, east): makes it the current player, deals it one card from
    /// the center, and lets it play greedily. Finally hands the turn back
    /// to South with one dealt card. Stops immediately if a seat wins
    /// mid-cycle; does nothing once a winner is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial deal has not happened yet.
    pub fn advance_turn(&self) -> Result<(), TurnError> {
        match self.status() {
            GameStatus::AwaitingDeal => return Err(TurnError::NotDealt),
            GameStatus::Won(_) => return Ok(()),
            GameStatus::InProgress => {}
        }

        self.clear_selection();

        for seat in [Seat::West, Seat::North, Seat::East] {
            self.set_current_player(seat);
            self.deal_to(Location::Hand(seat));
            self.auto_play();
            if self.winner().is_some() {
                return Ok(());
            }
        }

        self.set_current_player(Seat::South);
        self.deal_to(Location::Hand(Seat::South));

        Ok(())
    }

    /// Deals one random center card to a location.
    fn deal_to(&self, to: Location) {
        let mut table = self.table.lock();
        let mut rng = self.rng.lock();
        deal_one(&mut table, &mut rng, to);
    }
}

/// Picks a card uniformly from the live center membership and relocates it.
///
/// Returns `false` when the center is exhausted, which callers treat as a
/// steady state rather than an error.
fn deal_one(table: &mut Table, rng: &mut ChaCha8Rng, to: Location) -> bool {
    let center = table.center();
    if center.is_empty() {
        return false;
    }

    let card = center[rng.random_range(0..center.len())];
    table.move_card(card, to);
    true
}
