//! Heuristic computer player.
//!
//! Each turn the robot scores the board for itself and for every opponent,
//! then settles on one square with a fixed priority:
//! random flavor, winning, blocking, its own best line.

use crate::board::{Board, Move, Piece};
use crate::error::GameError;
use crate::player::Player;
use crate::strategy::{BestMove, Strategy, min_of};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default probability that a robot ignores the heuristic for a turn.
pub const RANDOM_MOVE_CHANCE: f64 = 0.25;

/// Why the arbiter picked the square it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Reason {
    /// The random draw fired.
    #[display("random")]
    Random,
    /// The robot completes one of its own lines.
    #[display("win")]
    Win,
    /// An opponent was one square away from completing a line.
    #[display("block")]
    Block,
    /// No productive line remains, so any square will do.
    #[display("fallback")]
    Fallback,
    /// The robot extends its most promising line.
    #[display("best")]
    Best,
}

/// The square chosen for a turn, with the branch that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    /// Square to place on.
    pub position: Move,
    /// Branch taken.
    pub reason: Reason,
}

impl Decision {
    fn new(position: Move, reason: Reason) -> Self {
        Self { position, reason }
    }
}

/// Combines the scored options for one turn into a single move.
///
/// `threat` is the most urgent opponent's best move, if there are opponents.
/// `size` is the board size, the weight of a line with nothing left to gain.
#[instrument]
pub fn arbitrate(
    own: BestMove,
    threat: Option<BestMove>,
    random: Move,
    be_random: bool,
    size: usize,
) -> Decision {
    if be_random {
        return Decision::new(random, Reason::Random);
    }

    if own.weight == 1 {
        if let Some(position) = own.position {
            return Decision::new(position, Reason::Win);
        }
    }

    if let Some(BestMove {
        weight: 1,
        position: Some(position),
    }) = threat
    {
        return Decision::new(position, Reason::Block);
    }

    match own.position {
        Some(position) if own.weight < size => Decision::new(position, Reason::Best),
        _ => Decision::new(random, Reason::Fallback),
    }
}

/// A computer-controlled player driven by [`Strategy`] and [`arbitrate`].
#[derive(Debug)]
pub struct AiPlayer<R = StdRng> {
    piece: Piece,
    opponents: Vec<Piece>,
    name: String,
    random_chance: f64,
    rng: R,
}

impl AiPlayer<StdRng> {
    /// Creates a robot seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `piece` is one of `opponents`.
    pub fn new(
        piece: Piece,
        opponents: Vec<Piece>,
        name: impl Into<String>,
    ) -> Result<Self, GameError> {
        Self::with_rng(piece, opponents, name, StdRng::from_os_rng())
    }

    /// Creates a robot with a reproducible random stream.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `piece` is one of `opponents`.
    pub fn seeded(
        piece: Piece,
        opponents: Vec<Piece>,
        name: impl Into<String>,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::with_rng(piece, opponents, name, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AiPlayer<R> {
    /// Creates a robot drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `piece` is one of `opponents`.
    #[instrument(skip(name, rng))]
    pub fn with_rng(
        piece: Piece,
        opponents: Vec<Piece>,
        name: impl Into<String>,
        rng: R,
    ) -> Result<Self, GameError> {
        if opponents.contains(&piece) {
            return Err(GameError::invalid_argument(format!(
                "Piece {} shouldn't be the same as an opponent piece",
                piece
            )));
        }

        let name = name.into();
        info!(robot = %name, ?opponents, "Creating robot player");
        Ok(Self {
            piece,
            opponents,
            name,
            random_chance: RANDOM_MOVE_CHANCE,
            rng,
        })
    }

    /// Overrides the probability of playing a random square.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `chance` lies in `[0, 1]`.
    pub fn with_random_chance(mut self, chance: f64) -> Result<Self, GameError> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(GameError::invalid_argument(format!(
                "Random chance must be within [0, 1] (got {})",
                chance
            )));
        }
        self.random_chance = chance;
        Ok(self)
    }

    /// Pieces this robot tries to block.
    pub fn opponents(&self) -> &[Piece] {
        &self.opponents
    }

    /// Probability of playing a random square on any turn.
    pub fn random_chance(&self) -> f64 {
        self.random_chance
    }

    /// Chooses a square without placing anything.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the board is full.
    #[instrument(skip(self, board), fields(robot = %self.name, piece = %self.piece))]
    pub fn decide(&mut self, board: &Board) -> Result<Decision, GameError> {
        let own_strategy = Strategy::new(self.piece, board);
        let own = own_strategy.best_move()?;

        let threat = self.most_urgent_threat(board)?;

        let be_random = self.rng.random_bool(self.random_chance);
        let random = own_strategy.random_move(&mut self.rng)?;
        debug!(?own, ?threat, be_random, %random, "Scored options");

        Ok(arbitrate(own, threat, random, be_random, board.size()))
    }

    fn most_urgent_threat(&self, board: &Board) -> Result<Option<BestMove>, GameError> {
        if self.opponents.is_empty() {
            return Ok(None);
        }

        let threats = self
            .opponents
            .iter()
            .map(|&opponent| Strategy::new(opponent, board).best_move())
            .collect::<Result<Vec<_>, _>>()?;
        let weights: Vec<usize> = threats.iter().map(|t| t.weight).collect();
        let (_, idx) = min_of(&weights)?;
        Ok(Some(threats[idx]))
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    #[instrument(skip(self, board), fields(robot = %self.name))]
    fn take_turn(&mut self, board: &mut Board) -> Result<Move, GameError> {
        let decision = self.decide(board)?;
        let Move { row, col } = decision.position;
        board.place(row, col, self.piece)?;
        info!(position = %decision.position, reason = %decision.reason, "Robot placed piece");
        Ok(decision.position)
    }

    fn piece(&self) -> Piece {
        self.piece
    }

    fn name(&self) -> &str {
        &self.name
    }
}
