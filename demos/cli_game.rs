//! CLI Kings in the Corner example.
//!
//! Plays the human seat from the terminal; the engine drives the three
//! computer seats whenever the turn advances.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use kcrs::{Card, Game, Location, Pile, Seat, Suit};

fn main() {
    println!("Kings in the Corner CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(seed);
    game.deal_initial().expect("fresh game accepts one deal");

    loop {
        print_table(&game);

        if let Some(winner) = game.winner() {
            println!("{} wins!", seat_name(winner));
            break;
        }

        let input = prompt_line("Command (<index> play hand card, p<index> move pile, n next turn, q quit): ");
        match input.as_str() {
            "q" | "quit" => return,
            "n" | "next" | "" => {
                if let Err(err) = game.advance_turn() {
                    println!("Turn error: {err}");
                }
                continue;
            }
            _ => {}
        }

        let chosen = if let Some(rest) = input.strip_prefix('p') {
            rest.parse::<usize>()
                .ok()
                .and_then(|index| Pile::ALL.get(index).copied())
                .and_then(|pile| game.cards_at(Location::Pile(pile)).first().copied())
        } else {
            input
                .parse::<usize>()
                .ok()
                .and_then(|index| game.cards_at(Location::Hand(Seat::South)).get(index).copied())
        };

        let Some(chosen) = chosen else {
            println!("Nothing there.");
            continue;
        };

        if let Err(err) = game.select_card(chosen) {
            println!("Select error: {err}");
            continue;
        }

        let legal = game.legal_destinations();
        if legal.is_empty() {
            println!("No legal destination for {}.", format_card(chosen));
            game.clear_selection();
            continue;
        }

        let indices: Vec<String> = legal
            .iter()
            .map(|pile| format!("[{}] {}", pile.index(), pile_name(*pile)))
            .collect();
        println!("Legal destinations: {}", indices.join(" "));

        let destination_input = prompt_line("Destination pile index (c to cancel): ");
        if destination_input == "c" {
            game.clear_selection();
            continue;
        }

        let destination = destination_input
            .parse::<usize>()
            .ok()
            .and_then(|index| Pile::ALL.get(index).copied());

        let Some(destination) = destination else {
            println!("Please enter a pile index.");
            game.clear_selection();
            continue;
        };

        if let Err(err) = game.confirm_move(destination) {
            println!("Move error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!("\nCenter: {} cards", game.center_count());

    for (index, pile) in Pile::ALL.into_iter().enumerate() {
        let cards = game.cards_at(Location::Pile(pile));
        println!(
            "  [{index}] {:<11}{}",
            pile_name(pile),
            format_cards(&cards)
        );
    }

    let hand = game.cards_at(Location::Hand(Seat::South));
    let slots: Vec<String> = hand
        .iter()
        .enumerate()
        .map(|(index, card)| format!("[{index}]{}", format_card(*card)))
        .collect();
    println!("Your hand: {}", slots.join(" "));
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn pile_name(pile: Pile) -> &'static str {
    match pile {
        Pile::East => "east",
        Pile::NorthEast => "north-east",
        Pile::North => "north",
        Pile::NorthWest => "north-west",
        Pile::West => "west",
        Pile::SouthWest => "south-west",
        Pile::South => "south",
        Pile::SouthEast => "south-east",
    }
}

fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::South => "You (south)",
        Seat::West => "West",
        Seat::North => "North",
        Seat::East => "East",
    }
}
