//! Console tic-tac-toe between humans and heuristic robots.
//!
//! The game rules and move selection live in [`tictactoe_engine`]; this crate
//! supplies the glue around them.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Roster**: humans and robots built from the config
//! - **Console**: stdin/stdout input collaborator for humans
//! - **Display**: ASCII-art board rendering
//! - **Orchestrator**: turn loop deciding win or draw

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod display;
mod orchestrator;
mod roster;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIZE, MAX_PLAYERS};
pub use console::{ConsoleInput, LineReader};
pub use display::{UnknownGlyph, render};
pub use orchestrator::{Orchestrator, Outcome};
pub use roster::build_players;
