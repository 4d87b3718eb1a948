//! Core domain types for the tic-tac-toe engine.

use super::position::{Line, Position};
use serde::{Deserialize, Serialize};

/// Player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order: 0-2 top row, 3-5 middle,
/// 6-8 bottom. A square goes from empty to occupied at most once per
/// game; only a game reset clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if the square at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index (0-8) so callers know what to
    /// pass to a move operation.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => index.to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Active,
    /// Game ended in a win.
    Won {
        /// The winning player.
        player: Player,
        /// The line that won, as recorded at the winning move.
        line: Line,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line, if the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Cumulative session scores.
///
/// Counters survive game resets and are cleared only by an explicit
/// score reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games drawn.
    draws: u32,
}

impl Scores {
    /// Creates a zeroed score sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a win for `player`.
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    /// Records a draw.
    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }

    /// Clears all counters.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total finished games on this score sheet.
    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
