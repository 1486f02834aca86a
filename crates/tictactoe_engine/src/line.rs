//! Uniform scanning of rows, columns, and diagonals.
//!
//! Win detection and the move heuristic both walk the same set of lines;
//! this module owns their coordinates and the per-line evaluation.

use crate::board::{Board, Move, Piece, Square};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// The three families of lines, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Dimension {
    /// Rows, top to bottom.
    Rows,
    /// Columns, left to right.
    Columns,
    /// Main diagonal, then anti-diagonal.
    Diagonals,
}

impl Dimension {
    /// Lines belonging to this dimension on a board of the given size.
    pub fn lines(self, size: usize) -> Vec<Line> {
        match self {
            Dimension::Rows => (0..size).map(Line::Row).collect(),
            Dimension::Columns => (0..size).map(Line::Column).collect(),
            Dimension::Diagonals => vec![Line::MainDiagonal, Line::AntiDiagonal],
        }
    }
}

/// A full-length line of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `n`, walked left to right.
    Row(usize),
    /// Column `n`, walked top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Line {
    /// Every line in scan order: rows, columns, main diagonal, anti-diagonal.
    pub fn all(size: usize) -> Vec<Line> {
        Dimension::iter().flat_map(|dim| dim.lines(size)).collect()
    }

    /// Coordinates along the line, in walk order.
    pub fn cells(self, size: usize) -> impl Iterator<Item = Move> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Move::new(row, i),
            Line::Column(col) => Move::new(i, col),
            Line::MainDiagonal => Move::new(i, i),
            Line::AntiDiagonal => Move::new(size - 1 - i, i),
        })
    }

    /// The piece filling every square of this line, if there is one.
    pub fn owner(self, board: &Board) -> Option<Piece> {
        let mut owner = None;
        for cell in self.cells(board.size()) {
            let piece = board.get(cell.row, cell.col)?.piece()?;
            match owner {
                None => owner = Some(piece),
                Some(first) if first != piece => return None,
                Some(_) => {}
            }
        }
        owner
    }

    /// Evaluates how close `piece` is to completing this line.
    ///
    /// The weight counts empty squares; any foreign piece makes the line
    /// worthless and pins the weight at the board size. The candidate is the
    /// last empty square seen along an unblocked line.
    pub fn score(self, board: &Board, piece: Piece) -> LineScore {
        let size = board.size();
        let mut weight = 0;
        let mut candidate = None;

        for cell in self.cells(size) {
            match board.get(cell.row, cell.col) {
                Some(Square::Empty) => {
                    weight += 1;
                    candidate = Some(cell);
                }
                Some(Square::Occupied(other)) if other != piece => {
                    return LineScore::blocked(size);
                }
                _ => {}
            }
        }

        LineScore { weight, candidate }
    }
}

/// Result of scoring one line for one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineScore {
    /// Empty squares left to fill, or the board size when blocked.
    pub weight: usize,
    /// An empty square on the line, absent when blocked or already complete.
    pub candidate: Option<Move>,
}

impl LineScore {
    /// Score of a line holding a foreign piece.
    pub fn blocked(size: usize) -> Self {
        Self {
            weight: size,
            candidate: None,
        }
    }
}
