//! The game state machine: board, moves, win and draw rules, scores.

mod engine;
mod position;
mod rules;
mod types;

pub use engine::GameEngine;
pub use position::{Line, Position};
pub use rules::WINNING_LINES;
pub use types::{Board, GameStatus, Player, Scores, Square};
