//! Game orchestration between two strategies.

use super::derive_seed;
use crate::error::{ConfigError, EngineError};
use crate::games::tictactoe::{Board, Coord, Game, Mark, Move, Outcome};
use crate::strategies::Strategy;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Stream index of the driver's own fallback source.
const FALLBACK_STREAM: u64 = 0xFA11;

/// Notifications sent from the orchestrator to an observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was applied to the authoritative board.
    MoveMade {
        /// The move that was applied.
        mv: Move,
        /// Whether the driver substituted a random legal move.
        fallback: bool,
        /// Board after the move.
        board: Board,
    },
    /// The game reached a terminal outcome.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
    },
}

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Final outcome.
    pub outcome: Outcome,
    /// Every move in play order.
    pub moves: Vec<Move>,
    /// Number of moves the driver substituted after an invalid choice.
    pub fallbacks: usize,
    /// Final board.
    pub board: Board,
    /// Name of the X strategy.
    pub player_x: String,
    /// Name of the O strategy.
    pub player_o: String,
}

type Observer = Box<dyn FnMut(&GameEvent) + Send>;

/// Orchestrates gameplay between two strategies.
///
/// The orchestrator owns the only mutable game. Strategies receive a
/// snapshot of the board and return a coordinate; the orchestrator applies
/// it. A coordinate that cannot be applied is replaced by a uniformly random
/// legal move from the orchestrator's own seeded source.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Strategy>,
    player_o: Box<dyn Strategy>,
    rng: StdRng,
    fallbacks: usize,
    observer: Option<Observer>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the strategies are not bound to X and O
    /// respectively.
    #[instrument(skip(game, player_x, player_o), fields(x = %player_x.name(), o = %player_o.name()))]
    pub fn new(
        game: Game,
        player_x: Box<dyn Strategy>,
        player_o: Box<dyn Strategy>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if player_x.mark() != Mark::X || player_o.mark() != Mark::O {
            return Err(ConfigError::new(format!(
                "Strategies must play X and O, got {} and {}",
                player_x.mark(),
                player_o.mark()
            )));
        }
        Ok(Self {
            game,
            player_x,
            player_o,
            rng: StdRng::seed_from_u64(derive_seed(seed, FALLBACK_STREAM)),
            fallbacks: 0,
            observer: None,
        })
    }

    /// Registers a callback receiving every [`GameEvent`].
    pub fn with_observer(mut self, observer: impl FnMut(&GameEvent) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Number of substituted moves so far.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    fn emit(&mut self, event: GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&event);
        }
    }

    /// Asks the player to move, applies the move and returns the outcome.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the game has already ended
    /// - any `StrategyError` raised by the player
    #[instrument(skip(self), fields(player = %self.game.to_move()))]
    pub fn step(&mut self) -> Result<Outcome, EngineError> {
        if self.game.is_over() {
            return Err(crate::error::MoveError::GameOver.into());
        }

        let mark = self.game.to_move();
        let snapshot = self.game.snapshot();
        let player = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };
        debug!(player = %player.name(), "Waiting for move");
        let chosen = player.select_move(&snapshot)?;

        let (coord, fallback) = match self.game.make_move(chosen) {
            Ok(_) => (chosen, false),
            Err(e) => {
                let substitute = self.fallback_move(chosen)?;
                warn!(%mark, %chosen, %substitute, error = %e, "Invalid move, substituting random move");
                self.game.make_move(substitute)?;
                self.fallbacks += 1;
                (substitute, true)
            }
        };

        let outcome = self.game.outcome();
        let board = self.game.snapshot();
        self.emit(GameEvent::MoveMade {
            mv: Move::new(mark, coord),
            fallback,
            board,
        });
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.emit(GameEvent::GameOver { outcome });
        }
        Ok(outcome)
    }

    fn fallback_move(&mut self, rejected: Coord) -> Result<Coord, EngineError> {
        let moves = self.game.legal_moves();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| {
                warn!(%rejected, "No legal move left for fallback");
                crate::error::StrategyError::NoLegalMoves.into()
            })
    }

    /// Runs the game to completion.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<MatchReport, EngineError> {
        info!("Starting match");
        let mut outcome = self.game.outcome();
        while !outcome.is_terminal() {
            outcome = self.step()?;
        }

        Ok(MatchReport {
            outcome,
            moves: self.game.history().to_vec(),
            fallbacks: self.fallbacks,
            board: self.game.snapshot(),
            player_x: self.player_x.name().to_string(),
            player_o: self.player_o.name().to_string(),
        })
    }
}
