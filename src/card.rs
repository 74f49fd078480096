//! Card types and deck constants.

/// Card color, shared by two suits each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Clubs and spades.
    Black,
    /// Diamonds and hearts.
    Red,
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but will never satisfy the build rule against a real deck.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the color of the card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Returns whether this card may be placed on `top` of a build:
    /// `top` must be exactly one rank higher and of the opposite color.
    #[must_use]
    pub fn builds_on(self, top: Self) -> bool {
        top.rank == self.rank + 1 && top.color() != self.color()
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Rank of a King, the only rank that may seed an empty edge pile.
pub const KING_RANK: u8 = 13;
