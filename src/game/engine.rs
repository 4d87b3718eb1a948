//! The game state machine.

use super::position::{Line, Position};
use super::rules;
use super::types::{Board, GameStatus, Player, Scores, Square};
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the player to move, the game status, and the
/// cumulative session scores. All operations are synchronous and run to
/// completion; the engine holds no locks and no external resources, so
/// concurrent embeddings must wrap the whole instance in their own
/// mutual exclusion (see [`crate::SharedEngine`]).
///
/// Illegal moves - an occupied square, or any move once the game is
/// over - are silently ignored rather than rejected: callers are
/// expected to filter input, but the engine stays safe without it.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    scores: Scores,
}

impl GameEngine {
    /// Creates a new engine: empty board, X to move, zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Active,
            scores: Scores::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Once the game is over this stays at the player who made the
    /// final move; it snaps back to X on the next game reset.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the recorded winning line, if the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.status.winning_line()
    }

    /// Returns the session scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Places the current player's mark at `pos` and returns the
    /// updated status.
    ///
    /// A move on an occupied square, or while the game is over, is a
    /// no-op that returns the status unchanged. On success the move is
    /// evaluated against the fixed line order of
    /// [`rules::WINNING_LINES`]; a win or draw ends the game and scores
    /// it, otherwise the turn passes to the opponent.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn apply_move(&mut self, pos: Position) -> GameStatus {
        if self.status.is_terminal() {
            debug!(?pos, "move ignored: game is over");
            return self.status;
        }
        if !self.board.is_empty(pos) {
            debug!(?pos, "move ignored: square occupied");
            return self.status;
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));

        if let Some((winner, line)) = rules::check_win(&self.board) {
            self.status = GameStatus::Won {
                player: winner,
                line,
            };
            self.scores.record_win(winner);
            info!(winner = %winner, ?line, "game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            self.scores.record_draw();
            info!("game drawn");
        } else {
            self.current_player = player.opponent();
        }

        self.status
    }

    /// Places the current player's mark at a raw board index (0-8).
    ///
    /// Same contract as [`apply_move`](Self::apply_move).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 9 or greater. An out-of-range index is a
    /// caller bug, unlike the benign occupied-square case.
    pub fn apply_move_index(&mut self, index: usize) -> GameStatus {
        assert!(index < 9, "board index out of range: {index}");
        self.apply_move(Position::ALL[index])
    }

    /// Plays the current player's mark on a uniformly random empty
    /// square; a no-op when the game is over or the board is full.
    ///
    /// This is a filler opponent, not an adversarial one: it never
    /// looks at line threats.
    pub fn random_move(&mut self) -> GameStatus {
        self.random_move_with(&mut rand::rng())
    }

    /// [`random_move`](Self::random_move) with a caller-supplied rng,
    /// for deterministic tests.
    #[instrument(skip(self, rng))]
    pub fn random_move_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> GameStatus {
        if self.status.is_terminal() {
            debug!("random move ignored: game is over");
            return self.status;
        }

        match Position::valid_moves(&self.board).choose(rng) {
            Some(&pos) => {
                debug!(?pos, "random move chosen");
                self.apply_move(pos)
            }
            None => self.status,
        }
    }

    /// Starts a new game: clears the board and the recorded winning
    /// line, X to move, status active. Scores are not touched.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        info!("resetting game");
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::Active;
    }

    /// Clears all score counters. Board and turn state are not touched.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        info!("resetting scores");
        self.scores.reset();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
