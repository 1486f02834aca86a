//! Builds the players for a game from its configuration.

use crate::config::GameConfig;
use tictactoe_engine::{AiPlayer, GameError, HumanPlayer, MoveSource, Piece, Player};
use tracing::{info, instrument};

/// Creates humans first, then robots, with pieces numbered in that order.
///
/// Humans are named `Human{i}` and get their input from `source`; robots are
/// named `Robot{i}` and try to block every other piece. With a configured
/// seed, robot `i` draws from `seed + i`.
#[instrument(skip(config, source), fields(humans = config.humans(), robots = config.robots()))]
pub fn build_players<S, F>(
    config: &GameConfig,
    mut source: F,
) -> Result<Vec<Box<dyn Player>>, GameError>
where
    S: MoveSource + 'static,
    F: FnMut(usize) -> S,
{
    let pieces = (0..config.players())
        .map(|id| Piece::new(id as i64))
        .collect::<Result<Vec<_>, _>>()?;

    let mut players: Vec<Box<dyn Player>> = Vec::with_capacity(pieces.len());

    for index in 0..*config.humans() {
        let piece = pieces[players.len()];
        let name = format!("Human{}", index);
        players.push(Box::new(HumanPlayer::new(piece, name, source(index))));
    }

    for index in 0..*config.robots() {
        let piece = pieces[players.len()];
        let opponents: Vec<Piece> = pieces.iter().copied().filter(|p| *p != piece).collect();
        let name = format!("Robot{}", index);

        let robot = match config.seed() {
            Some(seed) => {
                AiPlayer::seeded(piece, opponents, name, seed.wrapping_add(index as u64))?
            }
            None => AiPlayer::new(piece, opponents, name)?,
        };
        players.push(Box::new(robot.with_random_chance(*config.random_chance())?));
    }

    info!(count = players.len(), "Players ready");
    Ok(players)
}
