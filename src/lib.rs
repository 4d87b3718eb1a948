//! Tic-tac-toe game engine with session scoring.
//!
//! The core is [`GameEngine`], a synchronous state machine owning the
//! board, the player to move, the game status, and cumulative session
//! scores. View layers consume it through explicit method calls and
//! read-only accessors - there is no callback registration and no
//! global instance.
//!
//! Adapters included in this crate:
//!
//! - [`server`] - a JSON HTTP API around a [`SharedEngine`]
//! - the `tictactoe` binary's `play` subcommand - a terminal front end
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move_index(4);
//! assert_eq!(engine.current_player(), Player::O);
//! assert_eq!(engine.status(), GameStatus::Active);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod session;

// Public modules
pub mod server;

// Crate-level exports - game core
pub use game::{Board, GameEngine, GameStatus, Line, Player, Position, Scores, Square, WINNING_LINES};

// Crate-level exports - shared handle
pub use session::SharedEngine;
