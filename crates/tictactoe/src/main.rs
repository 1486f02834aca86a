//! tictactoe - console game entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe::{Cli, ConsoleInput, GameConfig, Orchestrator, Outcome, build_players};
use tictactoe_engine::Board;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli).context("Failed to load configuration")?;

    let outcome = play(&config)?;
    info!(?outcome, "Finished");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

#[instrument(skip(config))]
fn play(config: &GameConfig) -> Result<Outcome> {
    info!(?config, "Starting game");

    let board = Board::new(*config.board_size())?;
    let players = build_players(config, |_| ConsoleInput::new(io::stdin(), io::stdout()))?;

    let mut game = Orchestrator::new(board, players, io::stdout());
    game.run()
}
