//! CLI cribbage example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{CardView, Game, GameOptions, GameState, Input};

fn render_cards(label: &str, cards: &[CardView]) {
    print!("{label}: ");
    for view in cards {
        if view.face_up {
            print!("[{}] ", view.card);
        } else {
            print!("[##] ");
        }
    }
    println!();
}

fn render(game: &Game) {
    let view = game.snapshot();

    println!();
    println!(
        "Score  you {} / computer {}   (dealer: {})",
        view.player_score,
        view.computer_score,
        if view.player_is_dealer { "you" } else { "computer" }
    );
    if let Some(cut) = view.cut_card {
        println!("Cut card: [{cut}]");
    }
    render_cards("Computer", &view.computer_hand);
    render_cards("Pegging ", &view.pegging);
    if !view.pegging.is_empty() {
        println!("Pegging total: {}", view.pegging_total);
    }
    render_cards("You     ", &view.player_hand);
}

fn main() {
    println!("Cribbage CLI example (number = play that card, enter = advance, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        for line in game.drain_status() {
            println!("* {line}");
        }
        render(&game);

        match game.state() {
            GameState::PlayerDiscard => println!("Discard down to four cards."),
            GameState::Pegging => println!("Play a card."),
            GameState::PeggingWaitingForNextRound | GameState::CountPoints => {
                println!("Press enter for the next round.");
            }
            GameState::GameOver => println!("Game over. Press enter for a new game."),
        }

        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            break;
        }
        let line = line.trim();

        if line == "q" {
            break;
        }

        let input = match line.parse::<usize>() {
            Ok(index) if index >= 1 => Input::CardSelect(index - 1),
            _ => Input::AdvanceRound,
        };
        game.handle_input(input);
    }
}
