//! Tic-tac-toe engine - board model and heuristic move selection.
//!
//! # Architecture
//!
//! - **Board**: N×N grid of optional pieces with placement and win detection
//! - **Line**: shared walk over rows, columns, and both diagonals
//! - **Strategy**: one-ply heuristic scoring lines for a single piece
//! - **Arbiter**: robot player combining its own, its opponents', and a random move
//! - **Human**: interactive player validating moves from an input collaborator
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{AiPlayer, Board, Piece, Player};
//!
//! # fn example() -> Result<(), tictactoe_engine::GameError> {
//! let mut board = Board::default();
//! let mut robot = AiPlayer::seeded(Piece::new(1)?, vec![Piece::new(0)?], "Robot0", 42)?;
//!
//! let position = robot.take_turn(&mut board)?;
//! assert!(!board.is_empty(position.row, position.col));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arbiter;
mod board;
mod error;
mod human;
mod line;
mod player;
mod strategy;

pub use arbiter::{AiPlayer, Decision, RANDOM_MOVE_CHANCE, Reason, arbitrate};
pub use board::{Board, Move, Piece, Square};
pub use error::{GameError, GameErrorKind};
pub use human::{HumanPlayer, MoveSource, Rejection};
pub use line::{Dimension, Line, LineScore};
pub use player::Player;
pub use strategy::{BestMove, Strategy, min_of};
