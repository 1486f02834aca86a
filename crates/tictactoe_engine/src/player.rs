//! The capability shared by every kind of player.

use crate::board::{Board, Move, Piece};
use crate::error::GameError;

/// Something that can take a turn on the board.
///
/// A successful call fills exactly one previously empty square with
/// [`Player::piece`] and reports where.
pub trait Player {
    /// Decides on a move and places this player's piece.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the board is already full. Other errors come
    /// from the player's own collaborators and leave the board unchanged.
    fn take_turn(&mut self, board: &mut Board) -> Result<Move, GameError>;

    /// The piece this player places.
    fn piece(&self) -> Piece;

    /// Display name.
    fn name(&self) -> &str;
}
