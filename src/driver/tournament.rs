//! Repeated seeded matches between two strategy factories.

use super::{Orchestrator, derive_seed};
use crate::error::{ConfigError, EngineError};
use crate::games::tictactoe::{Game, Mark, Outcome};
use crate::strategies::Strategy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use tracing::{info, instrument};

/// Aggregate results of a tournament between strategies A and B.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct TournamentReport {
    /// Games played.
    pub games: u32,
    /// Games won by A.
    pub wins_a: u32,
    /// Games won by B.
    pub wins_b: u32,
    /// Tied games.
    pub draws: u32,
}

impl TournamentReport {
    fn rate(&self, count: u32) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(self.games)
        }
    }

    /// Fraction of games won by A.
    pub fn win_rate_a(&self) -> f64 {
        self.rate(self.wins_a)
    }

    /// Fraction of games won by B.
    pub fn win_rate_b(&self) -> f64 {
        self.rate(self.wins_b)
    }

    /// Fraction of tied games.
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }
}

impl Add for TournamentReport {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            games: self.games + rhs.games,
            wins_a: self.wins_a + rhs.wins_a,
            wins_b: self.wins_b + rhs.wins_b,
            draws: self.draws + rhs.draws,
        }
    }
}

/// Plays `games` independent matches on the rayon pool.
///
/// Strategy A plays X unless `alternate` is set, in which case A plays O in
/// every odd-numbered game. Factories receive the mark to play and a seed
/// derived from `seed` and the game index, so the whole tournament is
/// reproducible.
#[instrument(skip(factory_a, factory_b))]
pub fn run<A, B>(
    size: usize,
    games: u32,
    seed: u64,
    alternate: bool,
    factory_a: A,
    factory_b: B,
) -> Result<TournamentReport, EngineError>
where
    A: Fn(Mark, u64) -> Result<Box<dyn Strategy>, ConfigError> + Sync,
    B: Fn(Mark, u64) -> Result<Box<dyn Strategy>, ConfigError> + Sync,
{
    // Surface a bad size before spawning any work.
    Game::with_size(size)?;

    let report = (0..games)
        .into_par_iter()
        .map(|i| -> Result<TournamentReport, EngineError> {
            let game_seed = derive_seed(seed, u64::from(i));
            let a_mark = if alternate && i % 2 == 1 { Mark::O } else { Mark::X };

            let a = factory_a(a_mark, derive_seed(game_seed, 0))?;
            let b = factory_b(a_mark.opponent(), derive_seed(game_seed, 1))?;
            let (x, o) = match a_mark {
                Mark::X => (a, b),
                Mark::O => (b, a),
            };

            let report = Orchestrator::new(Game::with_size(size)?, x, o, game_seed)?.run()?;
            let single = match report.outcome {
                Outcome::Win(mark) if mark == a_mark => TournamentReport {
                    wins_a: 1,
                    ..Default::default()
                },
                Outcome::Win(_) => TournamentReport {
                    wins_b: 1,
                    ..Default::default()
                },
                _ => TournamentReport {
                    draws: 1,
                    ..Default::default()
                },
            };
            Ok(TournamentReport { games: 1, ..single })
        })
        .try_reduce(TournamentReport::default, |l, r| Ok(l + r))?;

    info!(
        games = report.games,
        wins_a = report.wins_a,
        wins_b = report.wins_b,
        draws = report.draws,
        "Tournament finished"
    );
    Ok(report)
}
