//! Error types for board and move-selection operations.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Malformed coordinates, piece ids, or construction arguments.
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// The board cannot accept the requested operation (full, or cell taken).
    #[display("Invalid state: {}", _0)]
    InvalidState(String),

    /// The input collaborator failed to supply a move.
    #[display("Input error: {}", _0)]
    Input(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`GameErrorKind::InvalidArgument`] error.
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidArgument(message.into()))
    }

    /// Shorthand for an [`GameErrorKind::InvalidState`] error.
    #[track_caller]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidState(message.into()))
    }

    /// Shorthand for an [`GameErrorKind::Input`] error.
    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::Input(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }

    /// True for [`GameErrorKind::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, GameErrorKind::InvalidArgument(_))
    }

    /// True for [`GameErrorKind::InvalidState`].
    pub fn is_invalid_state(&self) -> bool {
        matches!(self.kind, GameErrorKind::InvalidState(_))
    }
}
