//! Game integration tests.

use kcrs::{
    Card, DECK_SIZE, DealError, Game, GameStatus, Location, MoveError, Pile, Seat, SelectError,
    Selection, Suit, TurnError,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn place(game: &Game, card: Card, location: Location) {
    game.table.lock().move_card(card, location);
}

fn all_locations() -> Vec<Location> {
    let mut locations = vec![Location::Center];
    locations.extend(Seat::ORDER.map(Location::Hand));
    locations.extend(Pile::ALL.map(Location::Pile));
    locations
}

#[test]
fn fresh_game_has_the_full_deck_in_the_center() {
    let game = Game::new(1);

    let center = game.cards_at(Location::Center);
    assert_eq!(center.len(), DECK_SIZE);

    let unique: std::collections::HashSet<Card> = center.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(game.status(), GameStatus::AwaitingDeal);
    assert_eq!(game.current_player(), Seat::South);
    assert_eq!(game.winner(), None);
}

#[test]
fn deal_shapes_the_table() {
    let game = Game::new(42);
    game.deal_initial().unwrap();

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Seat::South);

    assert_eq!(game.cards_at(Location::Hand(Seat::South)).len(), 8);
    for seat in [Seat::West, Seat::North, Seat::East] {
        assert_eq!(game.cards_at(Location::Hand(seat)).len(), 7);
    }

    for pile in [Pile::North, Pile::South, Pile::West, Pile::East] {
        assert_eq!(game.cards_at(Location::Pile(pile)).len(), 1);
    }
    for pile in [
        Pile::NorthEast,
        Pile::NorthWest,
        Pile::SouthWest,
        Pile::SouthEast,
    ] {
        assert!(game.cards_at(Location::Pile(pile)).is_empty());
    }

    assert_eq!(game.center_count(), DECK_SIZE - 33);
    assert_eq!(game.table.lock().card_count(), DECK_SIZE);
}

#[test]
fn deal_twice_is_rejected() {
    let game = Game::new(42);
    game.deal_initial().unwrap();

    assert_eq!(game.deal_initial().unwrap_err(), DealError::AlreadyDealt);
}

#[test]
fn deal_is_deterministic_for_a_seed() {
    let a = Game::new(7);
    let b = Game::new(7);
    a.deal_initial().unwrap();
    b.deal_initial().unwrap();

    for location in all_locations() {
        assert_eq!(a.cards_at(location), b.cards_at(location));
    }
}

#[test]
fn select_requires_own_hand_or_a_play_pile() {
    let game = Game::new(3);
    game.deal_initial().unwrap();

    let center_card = game.cards_at(Location::Center)[0];
    assert_eq!(
        game.select_card(center_card).unwrap_err(),
        SelectError::InvalidSelection
    );

    let west_card = game.cards_at(Location::Hand(Seat::West))[0];
    assert_eq!(
        game.select_card(west_card).unwrap_err(),
        SelectError::InvalidSelection
    );

    let own_card = game.cards_at(Location::Hand(Seat::South))[0];
    game.select_card(own_card).unwrap();
    assert_eq!(game.selection(), Some(Selection::Hand(own_card)));

    let pile_card = game.cards_at(Location::Pile(Pile::North))[0];
    game.select_card(pile_card).unwrap();
    assert_eq!(game.selection(), Some(Selection::Pile(Pile::North)));

    game.clear_selection();
    assert_eq!(game.selection(), None);
    assert!(game.legal_destinations().is_empty());
}

#[test]
fn empty_corners_accept_any_rank_and_empty_edges_accept_kings_only() {
    let game = Game::new(0);
    place(&game, card(Suit::Clubs, 5), Location::Hand(Seat::South));
    place(&game, card(Suit::Spades, 13), Location::Hand(Seat::South));

    game.select_card(card(Suit::Clubs, 5)).unwrap();
    assert_eq!(
        game.legal_destinations(),
        vec![
            Pile::NorthEast,
            Pile::NorthWest,
            Pile::SouthWest,
            Pile::SouthEast
        ]
    );

    game.select_card(card(Suit::Spades, 13)).unwrap();
    assert_eq!(game.legal_destinations(), Pile::ALL.to_vec());
}

#[test]
fn build_rule_requires_rank_descent_and_alternating_color() {
    let game = Game::new(0);
    place(&game, card(Suit::Diamonds, 7), Location::Pile(Pile::East));
    place(&game, card(Suit::Clubs, 6), Location::Hand(Seat::South));
    place(&game, card(Suit::Diamonds, 6), Location::Hand(Seat::South));
    place(&game, card(Suit::Clubs, 5), Location::Hand(Seat::South));

    game.select_card(card(Suit::Clubs, 6)).unwrap();
    assert!(game.legal_destinations().contains(&Pile::East));

    // Same color is rejected.
    game.select_card(card(Suit::Diamonds, 6)).unwrap();
    assert!(!game.legal_destinations().contains(&Pile::East));

    // Rank must descend by exactly one.
    game.select_card(card(Suit::Clubs, 5)).unwrap();
    assert!(!game.legal_destinations().contains(&Pile::East));
}

#[test]
fn build_rule_predicate() {
    assert!(card(Suit::Clubs, 6).builds_on(card(Suit::Diamonds, 7)));
    assert!(!card(Suit::Diamonds, 6).builds_on(card(Suit::Hearts, 7)));
    assert!(!card(Suit::Clubs, 6).builds_on(card(Suit::Diamonds, 8)));
    assert!(!card(Suit::Clubs, 8).builds_on(card(Suit::Diamonds, 7)));
}

#[test]
fn confirm_move_plays_a_hand_card_and_clears_the_selection() {
    let game = Game::new(0);
    place(&game, card(Suit::Diamonds, 7), Location::Pile(Pile::East));
    place(&game, card(Suit::Clubs, 6), Location::Hand(Seat::South));
    place(&game, card(Suit::Diamonds, 6), Location::Hand(Seat::South));

    game.select_card(card(Suit::Clubs, 6)).unwrap();
    game.confirm_move(Pile::East).unwrap();

    assert_eq!(
        game.cards_at(Location::Pile(Pile::East)),
        vec![card(Suit::Diamonds, 7), card(Suit::Clubs, 6)]
    );
    assert_eq!(
        game.cards_at(Location::Hand(Seat::South)),
        vec![card(Suit::Diamonds, 6)]
    );
    assert_eq!(game.selection(), None);
    assert!(game.legal_destinations().is_empty());
    assert_eq!(game.table.lock().card_count(), DECK_SIZE);
}

#[test]
fn rejected_move_leaves_the_table_unchanged_but_clears_the_selection() {
    let game = Game::new(0);
    place(&game, card(Suit::Diamonds, 7), Location::Pile(Pile::East));
    place(&game, card(Suit::Diamonds, 6), Location::Hand(Seat::South));

    game.select_card(card(Suit::Diamonds, 6)).unwrap();
    assert_eq!(
        game.confirm_move(Pile::East).unwrap_err(),
        MoveError::IllegalDestination
    );

    assert_eq!(
        game.cards_at(Location::Pile(Pile::East)),
        vec![card(Suit::Diamonds, 7)]
    );
    assert_eq!(
        game.cards_at(Location::Hand(Seat::South)),
        vec![card(Suit::Diamonds, 6)]
    );
    assert_eq!(game.selection(), None);
    assert!(game.legal_destinations().is_empty());

    // The rejection consumed the selection.
    assert_eq!(
        game.confirm_move(Pile::East).unwrap_err(),
        MoveError::NoSelection
    );
}

#[test]
fn selecting_a_buried_card_selects_its_pile() {
    let game = Game::new(0);
    place(&game, card(Suit::Spades, 3), Location::Pile(Pile::NorthEast));
    place(&game, card(Suit::Hearts, 9), Location::Pile(Pile::NorthEast));

    game.select_card(card(Suit::Spades, 3)).unwrap();
    assert_eq!(game.selection(), Some(Selection::Pile(Pile::NorthEast)));
}

#[test]
fn moving_a_two_card_pile_buries_to_center_and_relocates_the_top() {
    let game = Game::new(0);
    place(&game, card(Suit::Spades, 3), Location::Pile(Pile::NorthEast));
    place(&game, card(Suit::Hearts, 9), Location::Pile(Pile::NorthEast));
    place(&game, card(Suit::Diamonds, 4), Location::Pile(Pile::North));

    game.select_card(card(Suit::Spades, 3)).unwrap();

    // The bottom card carries the build rule, and empty piles are never
    // destinations for a pile move.
    assert_eq!(game.legal_destinations(), vec![Pile::North]);

    game.confirm_move(Pile::North).unwrap();

    assert!(game.cards_at(Location::Pile(Pile::NorthEast)).is_empty());
    assert_eq!(
        game.cards_at(Location::Pile(Pile::North)),
        vec![card(Suit::Diamonds, 4), card(Suit::Hearts, 9)]
    );
    assert!(
        game.cards_at(Location::Center)
            .contains(&card(Suit::Spades, 3))
    );
    assert_eq!(game.table.lock().card_count(), DECK_SIZE);
}

#[test]
fn moving_a_single_card_pile_relocates_it() {
    let game = Game::new(0);
    place(&game, card(Suit::Spades, 3), Location::Pile(Pile::NorthEast));
    place(&game, card(Suit::Diamonds, 4), Location::Pile(Pile::North));

    game.select_card(card(Suit::Spades, 3)).unwrap();
    game.confirm_move(Pile::North).unwrap();

    assert!(game.cards_at(Location::Pile(Pile::NorthEast)).is_empty());
    assert_eq!(
        game.cards_at(Location::Pile(Pile::North)),
        vec![card(Suit::Diamonds, 4), card(Suit::Spades, 3)]
    );
}

#[test]
fn full_destination_discards_its_buried_card_to_the_center() {
    let game = Game::new(0);
    place(&game, card(Suit::Clubs, 9), Location::Pile(Pile::East));
    place(&game, card(Suit::Diamonds, 8), Location::Pile(Pile::East));
    place(&game, card(Suit::Spades, 7), Location::Hand(Seat::South));
    place(&game, card(Suit::Hearts, 2), Location::Hand(Seat::South));

    game.select_card(card(Suit::Spades, 7)).unwrap();
    game.confirm_move(Pile::East).unwrap();

    assert_eq!(
        game.cards_at(Location::Pile(Pile::East)),
        vec![card(Suit::Diamonds, 8), card(Suit::Spades, 7)]
    );
    assert!(
        game.cards_at(Location::Center)
            .contains(&card(Suit::Clubs, 9))
    );
}

#[test]
fn emptying_a_hand_wins_and_freezes_the_game() {
    let game = Game::new(0);
    place(&game, card(Suit::Diamonds, 7), Location::Pile(Pile::East));
    place(&game, card(Suit::Clubs, 6), Location::Hand(Seat::South));

    game.select_card(card(Suit::Clubs, 6)).unwrap();
    game.confirm_move(Pile::East).unwrap();

    assert_eq!(game.winner(), Some(Seat::South));
    assert_eq!(game.status(), GameStatus::Won(Seat::South));

    // Mutating calls are now silent no-ops.
    assert_eq!(game.advance_turn(), Ok(()));
    assert_eq!(game.confirm_move(Pile::North), Ok(()));
    assert_eq!(game.select_card(card(Suit::Clubs, 6)), Ok(()));
    assert_eq!(game.selection(), None);
    assert_eq!(game.deal_initial(), Ok(()));

    assert_eq!(
        game.cards_at(Location::Pile(Pile::East)),
        vec![card(Suit::Diamonds, 7), card(Suit::Clubs, 6)]
    );
    assert_eq!(game.center_count(), DECK_SIZE - 2);
    assert_eq!(game.current_player(), Seat::South);
}

#[test]
fn advance_turn_requires_a_deal() {
    let game = Game::new(9);
    assert_eq!(game.advance_turn().unwrap_err(), TurnError::NotDealt);
}

#[test]
fn advance_turn_with_an_exhausted_center_deals_nothing() {
    let game = Game::new(5);
    *game.status.lock() = GameStatus::InProgress;
    for center_card in game.cards_at(Location::Center) {
        place(&game, center_card, Location::Hand(Seat::South));
    }
    assert_eq!(game.center_count(), 0);

    game.advance_turn().unwrap();

    assert_eq!(game.current_player(), Seat::South);
    assert_eq!(game.cards_at(Location::Hand(Seat::South)).len(), DECK_SIZE);
    assert_eq!(game.winner(), None);
}

#[test]
fn advance_turn_returns_the_turn_to_south() {
    let game = Game::new(42);
    game.deal_initial().unwrap();

    game.advance_turn().unwrap();

    if game.winner().is_none() {
        assert_eq!(game.current_player(), Seat::South);
    }
    assert_eq!(game.table.lock().card_count(), DECK_SIZE);
    for pile in Pile::ALL {
        assert!(game.cards_at(Location::Pile(pile)).len() <= 2);
    }
}

#[test]
fn fixed_seed_produces_identical_games() {
    let a = Game::new(7);
    let b = Game::new(7);
    a.deal_initial().unwrap();
    b.deal_initial().unwrap();

    for _ in 0..3 {
        a.advance_turn().unwrap();
        b.advance_turn().unwrap();
    }

    for location in all_locations() {
        assert_eq!(a.cards_at(location), b.cards_at(location));
    }
    assert_eq!(a.winner(), b.winner());
}
