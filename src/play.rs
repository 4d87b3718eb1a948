//! Line-oriented terminal play mode.
//!
//! A view-layer adapter: it calls engine operations, inspects the
//! returned status, and renders from the read accessors. No game logic
//! lives here.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tictactoe::{GameEngine, GameStatus, Player, Position};
use tracing::debug;

/// Runs the interactive play loop until the user quits or stdin closes.
///
/// With `solo` set, O is driven by the engine's uniform-random move
/// helper after each human move.
pub fn run(solo: bool) -> Result<()> {
    let mut engine = GameEngine::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Tic-tac-toe. Enter a cell (0-8 or a label like \"center\").");
    println!("Commands: reset, scores, reset-scores, quit.");

    loop {
        println!();
        println!("{}", engine.board().display());

        match engine.status() {
            GameStatus::Active => {
                print!("Player {} > ", engine.current_player());
            }
            GameStatus::Won { player, .. } => {
                println!("Player {player} wins!");
                println!("Scores - {}", engine.scores());
                print!("Press enter for a new game (or \"quit\") > ");
            }
            GameStatus::Draw => {
                println!("It's a draw!");
                println!("Scores - {}", engine.scores());
                print!("Press enter for a new game (or \"quit\") > ");
            }
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        let input = input.trim();

        if engine.status().is_terminal() {
            match input {
                "quit" | "q" => break,
                _ => engine.reset_game(),
            }
            continue;
        }

        match input {
            "" => continue,
            "quit" | "q" => break,
            "reset" => {
                engine.reset_game();
                continue;
            }
            "scores" => {
                println!("Scores - {}", engine.scores());
                continue;
            }
            "reset-scores" => {
                engine.reset_score();
                println!("Scores cleared.");
                continue;
            }
            _ => {}
        }

        let Some(pos) = Position::from_label_or_number(input) else {
            println!("Unrecognized cell: {input:?}");
            continue;
        };

        if !engine.board().is_empty(pos) {
            // The engine would ignore this anyway; say so instead of
            // silently reprinting the board.
            println!("{} is already taken.", pos.label());
            continue;
        }

        debug!(?pos, "human move");
        let status = engine.apply_move(pos);

        if solo && status == GameStatus::Active && engine.current_player() == Player::O {
            engine.random_move();
        }
    }

    println!("Final scores - {}", engine.scores());
    Ok(())
}
