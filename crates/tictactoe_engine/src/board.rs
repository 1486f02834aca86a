//! The N×N grid of placed pieces.

use crate::error::GameError;
use crate::line::Line;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A player's mark on the board, identified by a small non-negative integer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{}", _0)]
pub struct Piece(u32);

impl Piece {
    /// Creates a piece from a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `id` is negative or too large.
    #[instrument]
    pub fn new(id: i64) -> Result<Self, GameError> {
        if id < 0 {
            return Err(GameError::invalid_argument(format!(
                "Negative pieces aren't allowed (got {})",
                id
            )));
        }
        u32::try_from(id)
            .map(Self)
            .map_err(|_| GameError::invalid_argument(format!("Piece {} is out of range", id)))
    }

    /// Returns the raw identifier.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Piece {
    type Error = GameError;

    #[track_caller]
    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

/// A (row, column) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {})", row, col)]
pub struct Move {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nothing placed yet.
    Empty,
    /// Holds a piece; never cleared once set.
    Occupied(Piece),
}

impl Square {
    /// Returns the occupying piece, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece),
        }
    }
}

/// Square grid of squares, stored row-major.
///
/// Cells only ever go from [`Square::Empty`] to [`Square::Occupied`];
/// [`Board::place`] is the single mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Side length of the classic game.
    pub const STANDARD_SIZE: usize = 3;

    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is below 2.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < 2 {
            return Err(GameError::invalid_argument(format!(
                "Board size must be at least 2 (got {})",
                size
            )));
        }
        Ok(Self {
            size,
            squares: vec![Square::Empty; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Gets the square at the given coordinates, or `None` when they are off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.index(row, col).map(|idx| self.squares[idx])
    }

    /// Checks if the square at the given coordinates is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Places `piece` at (`row`, `col`).
    ///
    /// The board is left untouched on failure.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the coordinates are outside `[0, size)`.
    /// - `InvalidState` if the square is already occupied.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), GameError> {
        let idx = self.index(row, col).ok_or_else(|| {
            GameError::invalid_argument(format!(
                "Coordinates ({}, {}) are outside [0, {})",
                row, col, self.size
            ))
        })?;

        if let Square::Occupied(existing) = self.squares[idx] {
            return Err(GameError::invalid_state(format!(
                "Piece {} already exists at {}, {}",
                existing, row, col
            )));
        }

        self.squares[idx] = Square::Occupied(piece);
        debug!(row, col, %piece, "Placed piece");
        Ok(())
    }

    /// True when no empty squares remain.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns the piece that completes a line, if any.
    ///
    /// Lines are checked rows top-to-bottom, then columns left-to-right,
    /// then the main diagonal, then the anti-diagonal; the first fully
    /// owned line decides.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Piece> {
        Line::all(self.size)
            .into_iter()
            .find_map(|line| line.owner(self))
    }

    /// Coordinates of every empty square, row-major.
    pub fn empty_squares(&self) -> Vec<Move> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(idx, _)| Move::new(idx / self.size, idx % self.size))
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: Self::STANDARD_SIZE,
            squares: vec![Square::Empty; Self::STANDARD_SIZE * Self::STANDARD_SIZE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(id: i64) -> Piece {
        Piece::new(id).unwrap()
    }

    #[test]
    fn test_new_rejects_tiny_board() {
        assert!(Board::new(1).unwrap_err().is_invalid_argument());
        assert!(Board::new(0).unwrap_err().is_invalid_argument());
        assert_eq!(Board::new(2).unwrap().size(), 2);
    }

    #[test]
    fn test_negative_piece_rejected() {
        assert!(Piece::new(-1).unwrap_err().is_invalid_argument());
        assert_eq!(Piece::try_from(4_i64).unwrap().id(), 4);
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::default();
        board.place(1, 2, piece(0)).unwrap();
        assert_eq!(board.get(1, 2), Some(Square::Occupied(piece(0))));
        assert_eq!(board.get(0, 0), Some(Square::Empty));
        assert_eq!(board.get(3, 0), None);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::default();
        let err = board.place(0, 3, piece(0)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::default();
        board.place(1, 1, piece(0)).unwrap();
        let before = board.clone();

        let err = board.place(1, 1, piece(1)).unwrap_err();
        assert!(err.is_invalid_state());
        assert_eq!(board, before);

        // Same piece on the same square is still a failure.
        assert!(board.place(1, 1, piece(0)).unwrap_err().is_invalid_state());
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2).unwrap();
        assert!(!board.is_full());
        board.place(0, 0, piece(0)).unwrap();
        board.place(0, 1, piece(1)).unwrap();
        board.place(1, 0, piece(1)).unwrap();
        assert!(!board.is_full());
        board.place(1, 1, piece(0)).unwrap();
        assert!(board.is_full());
    }

    #[test]
    fn test_empty_squares() {
        let mut board = Board::default();
        board.place(0, 0, piece(0)).unwrap();
        board.place(2, 2, piece(1)).unwrap();
        let empties = board.empty_squares();
        assert_eq!(empties.len(), 7);
        assert!(!empties.contains(&Move::new(0, 0)));
        assert!(!empties.contains(&Move::new(2, 2)));
        assert_eq!(empties[0], Move::new(0, 1));
    }

    #[test]
    fn test_winner_scans_rows_top_to_bottom() {
        // Not reachable in a real game, but the scan order must still be fixed.
        let mut board = Board::default();
        for col in 0..3 {
            board.place(2, col, piece(0)).unwrap();
            board.place(0, col, piece(1)).unwrap();
        }
        assert_eq!(board.winner(), Some(piece(1)));
    }

    #[test]
    fn test_winner_scans_columns_left_to_right() {
        let mut board = Board::default();
        for row in 0..3 {
            board.place(row, 2, piece(0)).unwrap();
            board.place(row, 0, piece(2)).unwrap();
        }
        assert_eq!(board.winner(), Some(piece(2)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::default();
        board.place(2, 0, piece(3)).unwrap();
        board.place(1, 1, piece(3)).unwrap();
        board.place(0, 2, piece(3)).unwrap();
        assert_eq!(board.winner(), Some(piece(3)));
    }
}
