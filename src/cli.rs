//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};

/// Tic-tac-toe - game engine, HTTP API, and terminal play
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe game engine and server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long, env = "PORT", default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Play a game in the terminal
    Play {
        /// Let the computer (uniform random moves) play O
        #[arg(long)]
        solo: bool,
    },
}
