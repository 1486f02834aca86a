//! One-ply move heuristic for a single piece.
//!
//! A [`Strategy`] is a borrowed view of the board from one piece's point of
//! view. It is cheap to build and holds no state of its own, so callers
//! create a fresh one for every decision.

use crate::board::{Board, Move, Piece};
use crate::error::GameError;
use crate::line::{Dimension, LineScore};
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Returns the minimum of `weights` and the index of its first occurrence.
///
/// # Errors
///
/// Returns `InvalidArgument` if `weights` is empty.
#[instrument]
pub fn min_of(weights: &[usize]) -> Result<(usize, usize), GameError> {
    weights
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best: Option<(usize, usize)>, (idx, weight)| match best {
            Some((min, _)) if min <= weight => best,
            _ => Some((weight, idx)),
        })
        .ok_or_else(|| GameError::invalid_argument("Length of weights must be greater than zero"))
}

/// The best line-completing move found for a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BestMove {
    /// 0 = already won, 1 = one move from completing a line,
    /// board size = nothing productive left.
    pub weight: usize,
    /// Empty square to play, absent when the chosen line has none to offer.
    pub position: Option<Move>,
}

impl From<LineScore> for BestMove {
    fn from(score: LineScore) -> Self {
        Self {
            weight: score.weight,
            position: score.candidate,
        }
    }
}

/// Heuristic evaluation of a board for one piece.
#[derive(Debug, Clone, Copy)]
pub struct Strategy<'a> {
    piece: Piece,
    board: &'a Board,
}

impl<'a> Strategy<'a> {
    /// Creates a strategy for `piece` against a board snapshot.
    pub fn new(piece: Piece, board: &'a Board) -> Self {
        Self { piece, board }
    }

    /// The piece this strategy plays for.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Finds the line closest to completion for this piece.
    ///
    /// Each dimension is reduced to its lowest-weight line, then the three
    /// dimensions are reduced the same way; ties go to the line scanned
    /// first (rows, then columns, then diagonals).
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the board is full.
    #[instrument(skip(self), fields(piece = %self.piece))]
    pub fn best_move(&self) -> Result<BestMove, GameError> {
        self.ensure_not_full()?;

        let mut per_dimension = Vec::with_capacity(3);
        for dimension in Dimension::iter() {
            let scores: Vec<LineScore> = dimension
                .lines(self.board.size())
                .into_iter()
                .map(|line| line.score(self.board, self.piece))
                .collect();
            let weights: Vec<usize> = scores.iter().map(|s| s.weight).collect();
            let (weight, idx) = min_of(&weights)?;
            debug!(?dimension, weight, line = idx, "Best line in dimension");
            per_dimension.push(scores[idx]);
        }

        let weights: Vec<usize> = per_dimension.iter().map(|s| s.weight).collect();
        let (_, idx) = min_of(&weights)?;
        let best = BestMove::from(per_dimension[idx]);
        debug!(weight = best.weight, position = ?best.position, "Best move");
        Ok(best)
    }

    /// Picks an empty square uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the board is full.
    #[instrument(skip(self, rng), fields(piece = %self.piece))]
    pub fn random_move<R: Rng>(&self, rng: &mut R) -> Result<Move, GameError> {
        self.ensure_not_full()?;
        let empties = self.board.empty_squares();
        let idx = rng.random_range(0..empties.len());
        Ok(empties[idx])
    }

    fn ensure_not_full(&self) -> Result<(), GameError> {
        if self.board.is_full() {
            return Err(GameError::invalid_state(
                "Board is full so a move can't be made",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn piece(id: i64) -> Piece {
        Piece::new(id).unwrap()
    }

    #[test]
    fn test_min_of_first_occurrence_wins() {
        assert_eq!(min_of(&[5, 2, 2, 9]).unwrap(), (2, 1));
        assert_eq!(min_of(&[7]).unwrap(), (7, 0));
        assert_eq!(min_of(&[3, 3, 3]).unwrap(), (3, 0));
    }

    #[test]
    fn test_min_of_empty() {
        assert!(min_of(&[]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_best_move_empty_board() {
        let board = Board::default();
        let best = Strategy::new(piece(0), &board).best_move().unwrap();
        assert_eq!(best.weight, 3);
        let pos = best.position.unwrap();
        assert!(board.is_empty(pos.row, pos.col));
    }

    #[test]
    fn test_best_move_completes_row() {
        let mut board = Board::default();
        board.place(0, 0, piece(0)).unwrap();
        board.place(0, 1, piece(0)).unwrap();
        let best = Strategy::new(piece(0), &board).best_move().unwrap();
        assert_eq!(best.weight, 1);
        assert_eq!(best.position, Some(Move::new(0, 2)));
    }

    #[test]
    fn test_best_move_prefers_rows_on_tie() {
        let mut board = Board::default();
        board.place(1, 1, piece(0)).unwrap();
        // Row 1, column 1 and both diagonals all weigh 2; row 1 is scanned first.
        let best = Strategy::new(piece(0), &board).best_move().unwrap();
        assert_eq!(best.weight, 2);
        assert_eq!(best.position, Some(Move::new(1, 2)));
    }

    #[test]
    fn test_best_move_column() {
        let mut board = Board::default();
        board.place(0, 2, piece(1)).unwrap();
        board.place(1, 2, piece(1)).unwrap();
        board.place(0, 0, piece(0)).unwrap();
        let best = Strategy::new(piece(1), &board).best_move().unwrap();
        assert_eq!(best.weight, 1);
        assert_eq!(best.position, Some(Move::new(2, 2)));
    }

    #[test]
    fn test_best_move_anti_diagonal_coordinates() {
        let mut board = Board::default();
        board.place(2, 0, piece(0)).unwrap();
        board.place(0, 2, piece(0)).unwrap();
        // Block every row and column that could tie.
        board.place(0, 0, piece(1)).unwrap();
        board.place(2, 2, piece(1)).unwrap();
        let best = Strategy::new(piece(0), &board).best_move().unwrap();
        assert_eq!(best.weight, 1);
        assert_eq!(best.position, Some(Move::new(1, 1)));
    }

    #[test]
    fn test_best_move_everything_blocked() {
        // X O X
        // X O O
        // O X .
        let mut board = Board::default();
        for (row, col, id) in [
            (0, 0, 0),
            (0, 1, 1),
            (0, 2, 0),
            (1, 0, 0),
            (1, 1, 1),
            (1, 2, 1),
            (2, 0, 1),
            (2, 1, 0),
        ] {
            board.place(row, col, piece(id)).unwrap();
        }
        let best = Strategy::new(piece(0), &board).best_move().unwrap();
        assert_eq!(best.weight, 3);
    }

    #[test]
    fn test_best_move_full_board() {
        let mut board = Board::new(2).unwrap();
        board.place(0, 0, piece(0)).unwrap();
        board.place(0, 1, piece(1)).unwrap();
        board.place(1, 0, piece(1)).unwrap();
        board.place(1, 1, piece(0)).unwrap();
        let strategy = Strategy::new(piece(0), &board);
        assert!(strategy.best_move().unwrap_err().is_invalid_state());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(strategy.random_move(&mut rng).unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_random_move_single_empty_square() {
        let mut board = Board::default();
        let mut id = 0;
        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != (2, 1) {
                    board.place(row, col, piece(id % 2)).unwrap();
                    id += 1;
                }
            }
        }
        let strategy = Strategy::new(piece(0), &board);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(strategy.random_move(&mut rng).unwrap(), Move::new(2, 1));
        }
    }

    #[test]
    fn test_random_move_reaches_every_empty_square() {
        let mut board = Board::default();
        board.place(1, 1, piece(0)).unwrap();
        let strategy = Strategy::new(piece(1), &board);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let mv = strategy.random_move(&mut rng).unwrap();
            assert!(board.is_empty(mv.row, mv.col));
            seen.insert(mv);
        }
        assert_eq!(seen.len(), 8);
    }
}
