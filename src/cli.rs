//! Command-line interface for grid_duel.

use clap::{Args, Parser, Subcommand};
use grid_duel::{
    ConfigError, DEFAULT_SIMULATIONS, DEFAULT_SIZE, EmptyCellPolicy, MatchConfig, StrategyConfig,
    StrategyKind,
};
use std::path::PathBuf;

/// Grid Duel - pit tic-tac-toe strategies against each other
#[derive(Parser, Debug)]
#[command(name = "grid_duel")]
#[command(about = "Move-selection engine for tic-tac-toe style games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single match
    Play {
        /// Strategy for X (moves first)
        #[arg(long, default_value = "human")]
        x: StrategyKind,

        /// Strategy for O
        #[arg(long, default_value = "alpha-beta")]
        o: StrategyKind,

        /// Load the whole match from a TOML file instead
        #[arg(short, long, conflicts_with_all = ["x", "o"])]
        config: Option<PathBuf>,

        /// Print the match report as JSON instead of boards
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Play many seeded matches and report win rates
    Tournament {
        /// First strategy
        #[arg(long)]
        a: StrategyKind,

        /// Second strategy
        #[arg(long)]
        b: StrategyKind,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Swap who moves first every other game
        #[arg(long)]
        alternate: bool,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// List the available strategies
    Strategies,
}

/// Settings shared by every subcommand that builds strategies.
#[derive(Args, Debug, Clone)]
pub struct Tuning {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Base random seed
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Playouts per candidate move for monte-carlo
    #[arg(long, default_value_t = DEFAULT_SIMULATIONS)]
    pub simulations: usize,

    /// Run monte-carlo playouts in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Depth limit for minimax and alpha-beta
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Heuristic treatment of empty cells at the depth limit
    #[arg(long, default_value = "ignore")]
    pub empty_cells: EmptyCellPolicy,
}

impl Tuning {
    /// Strategy configuration for `kind` with these settings.
    pub fn strategy(&self, kind: StrategyKind) -> StrategyConfig {
        StrategyConfig::new(kind)
            .with_simulations(self.simulations)
            .with_parallel(self.parallel)
            .with_max_depth(self.max_depth)
            .with_empty_cells(self.empty_cells)
    }

    /// Validated match configuration for the two kinds.
    pub fn match_config(&self, x: StrategyKind, o: StrategyKind) -> Result<MatchConfig, ConfigError> {
        MatchConfig::new(self.size, self.seed, self.strategy(x), self.strategy(o))
    }
}
