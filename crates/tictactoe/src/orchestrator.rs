//! Turn loop between players.

use crate::display::render;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_engine::{Board, Piece, Player};
use tracing::{debug, info, instrument};

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a line.
    Winner {
        /// Winner's display name.
        name: String,
        /// Winner's piece.
        piece: Piece,
    },
    /// The board filled up without a winner.
    Draw,
}

/// Orchestrates gameplay between any number of players.
pub struct Orchestrator<W> {
    board: Board,
    players: Vec<Box<dyn Player>>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator; players act in the given order.
    pub fn new(board: Board, players: Vec<Box<dyn Player>>, out: W) -> Self {
        Self {
            board,
            players,
            out,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs the game loop until someone wins or the board is full.
    #[instrument(skip(self), fields(players = self.players.len(), size = self.board.size()))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");
        anyhow::ensure!(!self.players.is_empty(), "No players to run the game with");

        loop {
            for player in self.players.iter_mut() {
                writeln!(self.out, "It is now {}'s turn!", player.name())?;
                write!(self.out, "{}", render(&self.board)?)?;

                debug!(player = %player.name(), "Waiting for move");
                let position = player
                    .take_turn(&mut self.board)
                    .with_context(|| format!("{} failed to take a turn", player.name()))?;
                info!(player = %player.name(), %position, "Move made");

                if self.board.winner() == Some(player.piece()) {
                    writeln!(self.out, "{} is the winner! Woo!", player.name())?;
                    write!(self.out, "{}", render(&self.board)?)?;
                    info!(winner = %player.name(), "Game over");
                    return Ok(Outcome::Winner {
                        name: player.name().to_string(),
                        piece: player.piece(),
                    });
                }

                if self.board.is_full() {
                    writeln!(self.out, "No winners!")?;
                    write!(self.out, "{}", render(&self.board)?)?;
                    info!("Game over in a draw");
                    return Ok(Outcome::Draw);
                }
            }
        }
    }
}
