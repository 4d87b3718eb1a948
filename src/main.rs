//! Tic-tac-toe - unified CLI.

mod cli;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::server::{self, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host } => {
            init_tracing("info");
            server::serve(ServerConfig::new(host, port)).await
        }
        Command::Play { solo } => {
            // Keep the board readable: only warnings unless RUST_LOG says more.
            init_tracing("warn");
            play::run(solo)
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
