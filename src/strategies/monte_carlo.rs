//! Monte Carlo rollout strategy.

use super::{Strategy, require_moves};
use crate::error::{ConfigError, StrategyError};
use crate::games::tictactoe::{Board, Coord, Mark, Outcome, legal_moves, terminal_outcome};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Playouts per candidate move unless configured otherwise.
pub const DEFAULT_SIMULATIONS: usize = 1000;

/// Tuning for [`MonteCarlo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawMonteCarloConfig")]
pub struct MonteCarloConfig {
    /// Random playouts per candidate move.
    simulations: usize,
    /// Run candidate batches on the rayon pool.
    parallel: bool,
}

impl MonteCarloConfig {
    /// Creates a config, rejecting a zero simulation count.
    #[instrument]
    pub fn new(simulations: usize, parallel: bool) -> Result<Self, ConfigError> {
        if simulations == 0 {
            return Err(ConfigError::new("Simulation count must be positive"));
        }
        Ok(Self {
            simulations,
            parallel,
        })
    }
}

/// Unchecked wire form of [`MonteCarloConfig`].
#[derive(Deserialize)]
struct RawMonteCarloConfig {
    simulations: usize,
    #[serde(default)]
    parallel: bool,
}

impl TryFrom<RawMonteCarloConfig> for MonteCarloConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMonteCarloConfig) -> Result<Self, Self::Error> {
        Self::new(raw.simulations, raw.parallel)
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            parallel: false,
        }
    }
}

/// Scores each legal move by the summed result of random playouts and plays
/// the best one, first in row-major order on ties.
///
/// A playout applies the candidate, then both sides play uniformly random
/// legal moves until the game ends: +1 for a win, -1 for a loss, 0 for a tie.
/// Every candidate batch gets its own generator seeded from the injected
/// source before any batch runs, so parallel and sequential runs agree.
#[derive(Debug, Clone)]
pub struct MonteCarlo<R = StdRng> {
    name: String,
    mark: Mark,
    config: MonteCarloConfig,
    rng: R,
}

impl<R: Rng + Send> MonteCarlo<R> {
    /// Creates a Monte Carlo strategy drawing seeds from `rng`.
    pub fn new(mark: Mark, config: MonteCarloConfig, rng: R) -> Self {
        Self {
            name: format!("MonteCarlo({}, {})", mark, config.simulations),
            mark,
            config,
            rng,
        }
    }

    /// Accumulated playout score for every legal move, row-major.
    #[instrument(skip_all, fields(strategy = %self.name))]
    pub fn evaluate(&mut self, board: &Board) -> Vec<(Coord, i64)> {
        let candidates = legal_moves(board);
        let seeds: Vec<u64> = candidates.iter().map(|_| self.rng.next_u64()).collect();
        let simulations = self.config.simulations;
        let mark = self.mark;

        let scores: Vec<i64> = if self.config.parallel {
            candidates
                .par_iter()
                .zip(seeds.par_iter())
                .map(|(coord, seed)| batch(board, *coord, mark, simulations, *seed))
                .collect()
        } else {
            candidates
                .iter()
                .zip(&seeds)
                .map(|(coord, seed)| batch(board, *coord, mark, simulations, *seed))
                .collect()
        };

        candidates.into_iter().zip(scores).collect()
    }
}

impl MonteCarlo<StdRng> {
    /// Creates a Monte Carlo strategy with a seeded `StdRng`.
    pub fn seeded(mark: Mark, config: MonteCarloConfig, seed: u64) -> Self {
        Self::new(mark, config, StdRng::seed_from_u64(seed))
    }
}

/// Sum of `simulations` playouts starting with `first`.
fn batch(board: &Board, first: Coord, mark: Mark, simulations: usize, seed: u64) -> i64 {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..simulations)
        .map(|_| rollout(board, first, mark, &mut rng))
        .sum()
}

/// One random playout on a private copy of the board.
pub(crate) fn rollout<R: Rng + ?Sized>(board: &Board, first: Coord, mark: Mark, rng: &mut R) -> i64 {
    let mut board = board.clone();
    board.play(first, mark);
    let mut mover = mark;

    loop {
        match terminal_outcome(&board) {
            Outcome::Win(winner) if winner == mark => return 1,
            Outcome::Win(_) => return -1,
            Outcome::Tie => return 0,
            Outcome::Ongoing => {}
        }

        mover = mover.opponent();
        let moves = legal_moves(&board);
        let Some(&next) = moves.choose(rng) else {
            return 0;
        };
        board.play(next, mover);
    }
}

impl<R: Rng + Send> Strategy for MonteCarlo<R> {
    fn select_move(&mut self, board: &Board) -> Result<Coord, StrategyError> {
        require_moves(board)?;
        let scored = self.evaluate(board);

        let mut best: Option<(Coord, i64)> = None;
        for (coord, score) in scored {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((coord, score));
            }
        }

        let (coord, score) = best.ok_or(StrategyError::NoLegalMoves)?;
        debug!(strategy = %self.name, %coord, score, "Monte Carlo choice");
        Ok(coord)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_of(simulations: usize) -> MonteCarloConfig {
        MonteCarloConfig::new(simulations, false).unwrap()
    }

    fn config(simulations: usize, parallel: bool) -> MonteCarloConfig {
        MonteCarloConfig::new(simulations, parallel).unwrap()
    }

    #[test]
    fn test_zero_simulations_rejected() {
        assert!(MonteCarloConfig::new(0, false).is_err());
        assert_eq!(*MonteCarloConfig::default().simulations(), 1000);
    }

    #[test]
    fn test_deserialized_config_is_checked() {
        let zero = serde_json::from_str::<MonteCarloConfig>(r#"{"simulations":0,"parallel":false}"#);
        assert!(zero.is_err());

        let config: MonteCarloConfig = serde_json::from_str(r#"{"simulations":25}"#).unwrap();
        assert_eq!(config, config_of(25));
    }

    #[test]
    fn test_winning_move_scores_every_playout() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let mut strategy = MonteCarlo::seeded(Mark::O, config(200, false), 3);
        let scored = strategy.evaluate(&board);
        assert_eq!(scored.len(), 5);
        assert!(scored.contains(&(Coord::new(1, 2), 200)));
        assert_eq!(strategy.select_move(&board), Ok(Coord::new(1, 2)));
    }

    #[test]
    fn test_rollout_terminates_with_unit_score() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let score = rollout(&Board::new(), Coord::new(0, 0), Mark::X, &mut rng);
            assert!((-1..=1).contains(&score));
        }
    }

    #[test]
    fn test_rollouts_never_touch_the_input_board() {
        let board: Board = "X../.O./...".parse().unwrap();
        let before = board.clone();
        let mut strategy = MonteCarlo::seeded(Mark::X, config(50, false), 0);
        strategy.select_move(&board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let board: Board = "X../.O./...".parse().unwrap();
        let mut sequential = MonteCarlo::seeded(Mark::X, config(100, false), 11);
        let mut parallel = MonteCarlo::seeded(Mark::X, config(100, true), 11);
        assert_eq!(sequential.evaluate(&board), parallel.evaluate(&board));
    }

    #[test]
    fn test_full_board_rejected() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        let mut strategy = MonteCarlo::seeded(Mark::X, MonteCarloConfig::default(), 0);
        assert_eq!(strategy.select_move(&board), Err(StrategyError::NoLegalMoves));
    }
}
