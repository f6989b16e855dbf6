//! CLI Twenty-Four example.
//!
//! The engine does not judge rounds itself: the players race to make 24 from
//! the four face-up cards, and whoever adjudicates types the verdict here.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tfrs::{Game, GameOptions, GameState, Seat};

fn main() {
    println!("Twenty-Four CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let one = prompt_name("Player one name: ", "Player One");
    let two = prompt_name("Player two name: ", "Player Two");
    let options = GameOptions::default()
        .with_player_one(one)
        .with_player_two(two);
    let game = Game::new(options, seed);

    loop {
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            break;
        }
        println!("\nDeck shuffled and dealt, 26 cards each.");

        while game.state() == GameState::Dealt {
            print_hand_counts(&game);

            match prompt_line("Press Enter to reveal (q to quit): ").as_str() {
                "q" | "quit" => return,
                _ => {}
            }

            if let Err(err) = game.reveal() {
                println!("Reveal error: {err}");
                return;
            }
            println!("Both players placed two cards face down.");

            let flipped = match game.flip() {
                Ok(cards) => cards,
                Err(err) => {
                    println!("Flip error: {err}");
                    return;
                }
            };

            println!("\nMiddle cards:");
            println!(
                "  {}: {} | {}",
                game.player_name(Seat::PlayerOne),
                flipped[0],
                flipped[1]
            );
            println!(
                "  {}: {} | {}",
                game.player_name(Seat::PlayerTwo),
                flipped[2],
                flipped[3]
            );

            let result = loop {
                let verdict = prompt_line("Round verdict - 1, 2 or (d)raw: ");
                let resolved = match verdict.as_str() {
                    "1" => game.round_win(Seat::PlayerOne),
                    "2" => game.round_win(Seat::PlayerTwo),
                    "d" | "draw" => game.round_draw(),
                    "q" | "quit" => return,
                    _ => {
                        println!("Unknown verdict.");
                        continue;
                    }
                };

                match resolved {
                    Ok(result) => break result,
                    Err(err) => {
                        println!("Resolve error: {err}");
                        return;
                    }
                }
            };

            if let Some(winner) = result.winner {
                println!("\n{} is the winner!", game.player_name(winner));
            }
        }

        if game.state() != GameState::GameOver {
            break;
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => game.reset(),
            _ => break,
        }
    }

    println!("Goodbye.");
}

fn print_hand_counts(game: &Game) {
    println!(
        "\n{}: {} cards | {}: {} cards",
        game.player_name(Seat::PlayerOne),
        game.hand_len(Seat::PlayerOne),
        game.player_name(Seat::PlayerTwo),
        game.hand_len(Seat::PlayerTwo)
    );
}

fn prompt_name(prompt: &str, fallback: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return fallback.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
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
