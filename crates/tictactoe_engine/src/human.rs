//! Interactive player backed by an input collaborator.

use crate::board::{Board, Move, Piece, Square};
use crate::error::GameError;
use crate::player::Player;
use tracing::{debug, info, instrument, warn};

/// Supplies move coordinates on behalf of a human.
///
/// Implementations handle parsing and reprompting on malformed input; the
/// player itself checks bounds and occupancy.
pub trait MoveSource {
    /// Asks for the next (row, column) pair.
    ///
    /// # Errors
    ///
    /// Returns an `Input` error when no more moves can be read.
    fn request_move(&mut self, player: &str, size: usize) -> Result<Move, GameError>;

    /// Reports why the last requested move was refused.
    fn reject(&mut self, reason: &Rejection);

    /// Confirms the accepted move.
    fn accepted(&mut self, _position: Move) {}
}

/// Why a requested move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// Row outside the board.
    #[display("Invalid row.")]
    InvalidRow,
    /// Column outside the board.
    #[display("Invalid column.")]
    InvalidColumn,
    /// The square already holds a piece.
    #[display("Piece already located at {}", _0)]
    Occupied(Move),
}

/// A human player; keeps asking its [`MoveSource`] until it gets a legal move.
#[derive(Debug)]
pub struct HumanPlayer<S> {
    piece: Piece,
    name: String,
    source: S,
}

impl<S: MoveSource> HumanPlayer<S> {
    /// Creates a new human player.
    pub fn new(piece: Piece, name: impl Into<String>, source: S) -> Self {
        Self {
            piece,
            name: name.into(),
            source,
        }
    }

    /// Returns the input collaborator.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn check(board: &Board, position: Move) -> Result<(), Rejection> {
        let size = board.size();
        if position.row >= size {
            return Err(Rejection::InvalidRow);
        }
        if position.col >= size {
            return Err(Rejection::InvalidColumn);
        }
        match board.get(position.row, position.col) {
            Some(Square::Empty) => Ok(()),
            _ => Err(Rejection::Occupied(position)),
        }
    }
}

impl<S: MoveSource> Player for HumanPlayer<S> {
    #[instrument(skip(self, board), fields(player = %self.name, piece = %self.piece))]
    fn take_turn(&mut self, board: &mut Board) -> Result<Move, GameError> {
        if board.is_full() {
            return Err(GameError::invalid_state(
                "Board is full so a move can't be made",
            ));
        }

        loop {
            let position = self.source.request_move(&self.name, board.size())?;
            debug!(%position, "Received move");

            if let Err(rejection) = Self::check(board, position) {
                warn!(%position, %rejection, "Rejected move");
                self.source.reject(&rejection);
                continue;
            }

            board.place(position.row, position.col, self.piece)?;
            info!(%position, "Human placed piece");
            self.source.accepted(position);
            return Ok(position);
        }
    }

    fn piece(&self) -> Piece {
        self.piece
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed script of moves.
    #[derive(Debug, Default)]
    struct Scripted {
        moves: VecDeque<Move>,
        rejections: Vec<Rejection>,
    }

    impl Scripted {
        fn new(moves: &[(usize, usize)]) -> Self {
            Self {
                moves: moves.iter().copied().map(Move::from).collect(),
                rejections: Vec::new(),
            }
        }
    }

    impl MoveSource for Scripted {
        fn request_move(&mut self, _player: &str, _size: usize) -> Result<Move, GameError> {
            self.moves
                .pop_front()
                .ok_or_else(|| GameError::input("script exhausted"))
        }

        fn reject(&mut self, reason: &Rejection) {
            self.rejections.push(*reason);
        }
    }

    fn piece(id: i64) -> Piece {
        Piece::new(id).unwrap()
    }

    #[test]
    fn test_places_valid_move() {
        let mut board = Board::default();
        let mut human = HumanPlayer::new(piece(0), "Human0", Scripted::new(&[(1, 2)]));
        assert_eq!(human.take_turn(&mut board).unwrap(), Move::new(1, 2));
        assert_eq!(board.get(1, 2), Some(Square::Occupied(piece(0))));
    }

    #[test]
    fn test_reprompts_until_legal() {
        let mut board = Board::default();
        board.place(0, 0, piece(1)).unwrap();
        let script = Scripted::new(&[(3, 0), (0, 5), (0, 0), (2, 2)]);
        let mut human = HumanPlayer::new(piece(0), "Human0", script);

        assert_eq!(human.take_turn(&mut board).unwrap(), Move::new(2, 2));
        assert_eq!(
            human.source().rejections,
            vec![
                Rejection::InvalidRow,
                Rejection::InvalidColumn,
                Rejection::Occupied(Move::new(0, 0)),
            ]
        );
    }

    #[test]
    fn test_input_failure_leaves_board_unchanged() {
        let mut board = Board::default();
        let mut human = HumanPlayer::new(piece(0), "Human0", Scripted::new(&[]));
        let err = human.take_turn(&mut board).unwrap_err();
        assert!(matches!(err.kind(), crate::GameErrorKind::Input(_)));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_full_board_rejected() {
        let mut board = Board::new(2).unwrap();
        board.place(0, 0, piece(0)).unwrap();
        board.place(0, 1, piece(1)).unwrap();
        board.place(1, 0, piece(1)).unwrap();
        board.place(1, 1, piece(0)).unwrap();
        let mut human = HumanPlayer::new(piece(0), "Human0", Scripted::new(&[(0, 0)]));
        assert!(human.take_turn(&mut board).unwrap_err().is_invalid_state());
    }
}
