//! Command-line interface for tictactoe.

use clap::Parser;

/// Tic-tac-toe for humans and heuristic robots
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against heuristic robots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Number of human players (they move first)
    #[arg(long)]
    pub humans: Option<usize>,

    /// Number of robot players
    #[arg(long)]
    pub robots: Option<usize>,

    /// Seed for reproducible robot moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that a robot plays a random square on its turn
    #[arg(long)]
    pub random_chance: Option<f64>,
}
