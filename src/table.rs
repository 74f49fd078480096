//! Table layout: seats, play piles, and card placement.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Suit};

/// Maximum number of cards a play pile may hold.
pub const PILE_CAPACITY: usize = 2;

/// A player seat, in turn order. [`Seat::South`] is the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player, seated at the bottom of the table.
    South,
    /// First computer player.
    West,
    /// Second computer player.
    North,
    /// Third computer player.
    East,
}

impl Seat {
    /// All seats in turn order.
    pub const ORDER: [Self; 4] = [Self::South, Self::West, Self::North, Self::East];

    /// Index of the seat within the turn order (South = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One of the eight radial play piles, in index order.
///
/// Even-indexed piles sit on the table edges (north, south, east, west) and
/// may only be seeded by a King when empty; odd-indexed piles sit in the
/// corners and accept any rank when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pile {
    /// Edge pile, index 0.
    East,
    /// Corner pile, index 1.
    NorthEast,
    /// Edge pile, index 2.
    North,
    /// Corner pile, index 3.
    NorthWest,
    /// Edge pile, index 4.
    West,
    /// Corner pile, index 5.
    SouthWest,
    /// Edge pile, index 6.
    South,
    /// Corner pile, index 7.
    SouthEast,
}

impl Pile {
    /// All play piles in index order.
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Index of the pile (0..=7).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns whether this is an edge pile (even index).
    #[must_use]
    pub const fn is_edge(self) -> bool {
        self.index() % 2 == 0
    }

    /// Returns whether this is a corner pile (odd index).
    #[must_use]
    pub const fn is_corner(self) -> bool {
        !self.is_edge()
    }
}

/// A place a card can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// The shared draw/discard pool in the middle of the table.
    Center,
    /// A player's hand.
    Hand(Seat),
    /// One of the eight play piles.
    Pile(Pile),
}

/// The full table: owner of all 52 cards.
///
/// Each location is an ordered sequence; a card's position within its
/// location is its index in that sequence, so hand positions are always
/// contiguous and the last card of a pile is its exposed top. Cards are
/// created once by [`Table::new`] and only ever relocated.
#[derive(Debug, Clone)]
pub struct Table {
    /// Cards in the center pool.
    center: Vec<Card>,
    /// Cards in each hand, indexed by seat.
    hands: [Vec<Card>; 4],
    /// Cards in each play pile, indexed by pile.
    piles: [Vec<Card>; 8],
}

impl Table {
    /// Creates a table with the whole deck in the center.
    #[must_use]
    pub fn new() -> Self {
        let mut center = Vec::with_capacity(DECK_SIZE);

        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            for rank in 1..=13 {
                center.push(Card::new(suit, rank));
            }
        }

        Self {
            center,
            hands: core::array::from_fn(|_| Vec::new()),
            piles: core::array::from_fn(|_| Vec::new()),
        }
    }

    /// Returns the cards at a location, ordered by ascending position.
    #[must_use]
    pub fn cards_at(&self, location: Location) -> &[Card] {
        match location {
            Location::Center => &self.center,
            Location::Hand(seat) => &self.hands[seat.index()],
            Location::Pile(pile) => &self.piles[pile.index()],
        }
    }

    /// Returns the cards in the center pool.
    #[must_use]
    pub fn center(&self) -> &[Card] {
        &self.center
    }

    /// Returns a seat's hand, ordered by position.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    /// Returns a play pile, bottom card first.
    #[must_use]
    pub fn pile(&self, pile: Pile) -> &[Card] {
        &self.piles[pile.index()]
    }

    /// Returns the exposed top card of a play pile, if any.
    #[must_use]
    pub fn pile_top(&self, pile: Pile) -> Option<Card> {
        self.piles[pile.index()].last().copied()
    }

    /// Returns where a card currently is.
    #[must_use]
    pub fn location_of(&self, card: Card) -> Option<Location> {
        if self.center.contains(&card) {
            return Some(Location::Center);
        }
        for seat in Seat::ORDER {
            if self.hands[seat.index()].contains(&card) {
                return Some(Location::Hand(seat));
            }
        }
        for pile in Pile::ALL {
            if self.piles[pile.index()].contains(&card) {
                return Some(Location::Pile(pile));
            }
        }
        None
    }

    /// Total number of cards across every location.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.center.len()
            + self.hands.iter().map(Vec::len).sum::<usize>()
            + self.piles.iter().map(Vec::len).sum::<usize>()
    }

    /// Relocates a card: removes it from its current location (closing any
    /// gap behind it) and appends it to `to`.
    ///
    /// # Panics
    ///
    /// Panics if the card is not on the table, or if the move would push a
    /// play pile past its capacity. Both indicate corrupted state rather
    /// than a recoverable game-flow mistake.
    pub fn move_card(&mut self, card: Card, to: Location) {
        let removed = self.remove_card(card);
        assert!(removed, "card is not on the table");

        let stack = self.stack_mut(to);
        stack.push(card);

        if let Location::Pile(_) = to {
            assert!(stack.len() <= PILE_CAPACITY, "play pile over capacity");
        }
    }

    /// Removes a card from whichever sequence holds it.
    fn remove_card(&mut self, card: Card) -> bool {
        let stacks = core::iter::once(&mut self.center)
            .chain(self.hands.iter_mut())
            .chain(self.piles.iter_mut());

        for stack in stacks {
            if let Some(index) = stack.iter().position(|&c| c == card) {
                stack.remove(index);
                return true;
            }
        }
        false
    }

    fn stack_mut(&mut self, location: Location) -> &mut Vec<Card> {
        match location {
            Location::Center => &mut self.center,
            Location::Hand(seat) => &mut self.hands[seat.index()],
            Location::Pile(pile) => &mut self.piles[pile.index()],
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
