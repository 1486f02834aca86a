//! Game configuration loaded from TOML and overridden from the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Board, RANDOM_MOVE_CHANCE};
use tracing::{debug, info, instrument};

/// Largest board the console display handles comfortably.
pub const MAX_BOARD_SIZE: usize = 9;

/// Most players the display has glyphs for.
pub const MAX_PLAYERS: usize = 7;

/// Settings for a single game.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    board_size: usize,

    /// Human players; they take the lowest pieces and move first.
    humans: usize,

    /// Robot players, following the humans.
    robots: usize,

    /// Probability that a robot ignores the heuristic for a turn.
    random_chance: f64,

    /// Seed for reproducible robot moves.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: Board::STANDARD_SIZE,
            humans: 1,
            robots: 1,
            random_chance: RANDOM_MOVE_CHANCE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file at `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds the effective configuration for a command line.
    #[instrument(skip(cli), fields(config = %cli.config.display()))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(&cli.config)?.override_with(cli);
        config.validate()?;
        Ok(config)
    }

    /// Replaces values with any given on the command line.
    pub fn override_with(mut self, cli: &Cli) -> Self {
        if let Some(size) = cli.size {
            self.board_size = size;
        }
        if let Some(humans) = cli.humans {
            self.humans = humans;
        }
        if let Some(robots) = cli.robots {
            self.robots = robots;
        }
        if let Some(chance) = cli.random_chance {
            self.random_chance = chance;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        self
    }

    /// Total number of players.
    pub fn players(&self) -> usize {
        self.humans + self.robots
    }

    /// Checks values are in range.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be within [2, {}] (got {})",
                MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.players() == 0 {
            return Err(ConfigError::new("at least one player is required".to_string()));
        }
        if self.players() > MAX_PLAYERS {
            return Err(ConfigError::new(format!(
                "at most {} players are supported (got {})",
                MAX_PLAYERS,
                self.players()
            )));
        }
        if !(0.0..=1.0).contains(&self.random_chance) {
            return Err(ConfigError::new(format!(
                "random_chance must be within [0, 1] (got {})",
                self.random_chance
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
