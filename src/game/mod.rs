//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::sync::Mutex;
use crate::table::{Location, Pile, Seat, Table};

mod ai;
mod deal;
mod moves;
mod select;
pub mod state;

pub use state::{GameStatus, Selection};

/// A Kings in the Corner game engine that manages the table, turn
/// rotation, selection, and the computer players.
///
/// The engine owns all 52 cards through [`Table`] and exposes a `&self`
/// API; callers must respect strict turn order (the human seat acts only
/// while it is the current player and no winner is set). Every mutating
/// call becomes a no-op once a winner has been declared.
pub struct Game {
    /// Card collections for the center pool, hands, and play piles.
    pub table: Mutex<Table>,
    /// Lifecycle status.
    pub status: Mutex<GameStatus>,
    /// Seat whose turn it is.
    current_player: Mutex<Seat>,
    /// Pending selection, if any.
    selection: Mutex<Option<Selection>>,
    /// Random number generator for center draws.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The same seed always produces the same deal and, with the same
    /// sequence of calls, the same game.
    ///
    /// # Example
    ///
    /// ```
    /// use kcrs::{Game, GameStatus};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.status(), GameStatus::AwaitingDeal);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            table: Mutex::new(Table::new()),
            status: Mutex::new(GameStatus::AwaitingDeal),
            current_player: Mutex::new(Seat::South),
            selection: Mutex::new(None),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        *self.status.lock()
    }

    /// Returns the winning seat, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match *self.status.lock() {
            GameStatus::Won(seat) => Some(seat),
            _ => None,
        }
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Seat {
        *self.current_player.lock()
    }

    /// Returns a snapshot of the cards at a location, ordered by position.
    #[must_use]
    pub fn cards_at(&self, location: Location) -> Vec<Card> {
        self.table.lock().cards_at(location).to_vec()
    }

    /// Returns the number of cards left in the center pool.
    #[must_use]
    pub fn center_count(&self) -> usize {
        self.table.lock().center().len()
    }

    /// Returns the exposed top card of a play pile, if any.
    #[must_use]
    pub fn pile_top(&self, pile: Pile) -> Option<Card> {
        self.table.lock().pile_top(pile)
    }

    pub(crate) fn set_current_player(&self, seat: Seat) {
        *self.current_player.lock() = seat;
    }
}
