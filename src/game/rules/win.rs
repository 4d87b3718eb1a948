//! Win detection logic.

use super::super::position::{Line, Position};
use super::super::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines in their fixed evaluation order: rows top to
/// bottom, columns left to right, then the two diagonals.
///
/// [`check_win`] reports the first matching line in this order, which
/// makes the recorded line deterministic when one move completes two
/// lines at once.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player and the first fully-marked line in
/// [`WINNING_LINES`] order, or `None` if no line is complete.
#[instrument]
pub fn check_win(board: &Board) -> Option<(Player, Line)> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}
