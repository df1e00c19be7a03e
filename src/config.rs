//! Match configuration and the strategy factory.

use crate::driver::{Orchestrator, derive_seed};
use crate::error::ConfigError;
use crate::games::tictactoe::{DEFAULT_SIZE, EmptyCellPolicy, Game, Mark};
use crate::strategies::{
    AlphaBeta, DEFAULT_SIMULATIONS, FixedOrder, HumanStrategy, Minimax, MonteCarlo,
    MonteCarloConfig, SearchConfig, Strategy, UniformRandom,
};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::io::BufReader;
use std::path::Path;
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, info, instrument};

/// The available move-selection strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    /// Center, then corners, then edges.
    FixedOrder,
    /// Uniformly random empty cell.
    Random,
    /// Random playouts per candidate move.
    MonteCarlo,
    /// Exhaustive game-tree search.
    Minimax,
    /// Game-tree search with alpha-beta pruning.
    AlphaBeta,
    /// Moves typed on standard input.
    Human,
}

impl StrategyKind {
    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            StrategyKind::FixedOrder => "first free cell in center, corner, edge order",
            StrategyKind::Random => "uniformly random free cell",
            StrategyKind::MonteCarlo => "best average over random playouts",
            StrategyKind::Minimax => "full game-tree search",
            StrategyKind::AlphaBeta => "game-tree search with alpha-beta pruning",
            StrategyKind::Human => "reads `row col` from standard input",
        }
    }

    /// Whether the strategy needs an interactive terminal.
    pub fn is_interactive(self) -> bool {
        matches!(self, StrategyKind::Human)
    }
}

/// Configuration for one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct StrategyConfig {
    /// Which strategy to run.
    kind: StrategyKind,

    /// Playouts per candidate move (Monte Carlo).
    #[serde(default = "default_simulations")]
    simulations: usize,

    /// Run Monte Carlo batches in parallel.
    #[serde(default)]
    parallel: bool,

    /// Search depth limit (Minimax, AlphaBeta). Unlimited when absent.
    #[serde(default)]
    max_depth: Option<usize>,

    /// How the search heuristic treats empty cells.
    #[serde(default)]
    empty_cells: EmptyCellPolicy,
}

fn default_simulations() -> usize {
    DEFAULT_SIMULATIONS
}

fn default_board_size() -> usize {
    DEFAULT_SIZE
}

impl StrategyConfig {
    /// Creates a configuration with default tuning.
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            kind,
            simulations: default_simulations(),
            parallel: false,
            max_depth: None,
            empty_cells: EmptyCellPolicy::default(),
        }
    }

    fn monte_carlo(&self) -> Result<MonteCarloConfig, ConfigError> {
        MonteCarloConfig::new(self.simulations, self.parallel)
    }

    fn search(&self) -> Result<SearchConfig, ConfigError> {
        SearchConfig::new(self.max_depth, self.empty_cells)
    }

    /// Checks the tuning relevant to this kind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kind {
            StrategyKind::MonteCarlo => self.monte_carlo().map(|_| ()),
            StrategyKind::Minimax | StrategyKind::AlphaBeta => self.search().map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Instantiates the strategy for `mark`.
    ///
    /// Random sources are seeded from `seed` and the mark, so the same seed
    /// reproduces every choice.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub fn build(&self, mark: Mark, seed: u64) -> Result<Box<dyn Strategy>, ConfigError> {
        let seed = derive_seed(seed, mark_stream(mark));
        let strategy: Box<dyn Strategy> = match self.kind {
            StrategyKind::FixedOrder => Box::new(FixedOrder::new(mark)),
            StrategyKind::Random => Box::new(UniformRandom::seeded(mark, seed)),
            StrategyKind::MonteCarlo => {
                Box::new(MonteCarlo::seeded(mark, self.monte_carlo()?, seed))
            }
            StrategyKind::Minimax => Box::new(Minimax::with_config(mark, self.search()?)),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta::with_config(mark, self.search()?)),
            StrategyKind::Human => Box::new(HumanStrategy::new(
                mark,
                BufReader::new(std::io::stdin()),
                std::io::stdout(),
            )),
        };
        debug!(strategy = %strategy.name(), "Strategy built");
        Ok(strategy)
    }
}

fn mark_stream(mark: Mark) -> u64 {
    match mark {
        Mark::X => 1,
        Mark::O => 2,
    }
}

/// Configuration for a single match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board side length.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Base seed for every random source in the match.
    #[serde(default)]
    seed: u64,

    /// Player moving first.
    player_x: StrategyConfig,

    /// Player moving second.
    player_o: StrategyConfig,
}

impl MatchConfig {
    /// Creates a validated match configuration.
    #[instrument(skip(player_x, player_o))]
    pub fn new(
        board_size: usize,
        seed: u64,
        player_x: StrategyConfig,
        player_o: StrategyConfig,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            seed,
            player_x,
            player_o,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            x = %config.player_x.kind,
            o = %config.player_o.kind,
            size = config.board_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks the board size and both players.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("Board size must be at least 1"));
        }
        self.player_x.validate()?;
        self.player_o.validate()
    }

    /// Builds a ready-to-run orchestrator for this match.
    #[instrument(skip(self))]
    pub fn orchestrator(&self) -> Result<Orchestrator, ConfigError> {
        let game = Game::with_size(self.board_size)?;
        let x = self.player_x.build(Mark::X, self.seed)?;
        let o = self.player_o.build(Mark::O, self.seed)?;
        Orchestrator::new(game, x, o, self.seed)
    }
}
