//! Tests for the match driver and its configuration.

use grid_duel::{
    Board, Coord, EngineError, FixedOrder, Game, GameEvent, Mark, MatchConfig, MatchReport,
    MonteCarloConfig, Orchestrator, Outcome, SearchConfig, Strategy, StrategyError, StrategyKind,
};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Answers out-of-bounds coordinates forever.
struct Lost(Mark);

impl Strategy for Lost {
    fn select_move(&mut self, board: &Board) -> Result<Coord, StrategyError> {
        Ok(Coord::new(board.size(), 0))
    }

    fn mark(&self) -> Mark {
        self.0
    }

    fn name(&self) -> &str {
        "Lost"
    }
}

/// Fails on its first turn.
struct Broken(Mark);

impl Strategy for Broken {
    fn select_move(&mut self, _board: &Board) -> Result<Coord, StrategyError> {
        Err(StrategyError::Input("stream closed".to_string()))
    }

    fn mark(&self) -> Mark {
        self.0
    }

    fn name(&self) -> &str {
        "Broken"
    }
}

#[test]
fn test_out_of_bounds_choices_are_replaced() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let mut driver = Orchestrator::new(
        Game::new(),
        Box::new(Lost(Mark::X)),
        Box::new(Lost(Mark::O)),
        21,
    )
    .unwrap()
    .with_observer(move |event| sink.lock().unwrap().push(event.clone()));

    let report = driver.run().unwrap();
    assert!(report.outcome.is_terminal());
    assert_eq!(report.fallbacks, report.moves.len());

    let events = events.lock().unwrap();
    let substituted = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { fallback: true, .. }))
        .count();
    assert_eq!(substituted, report.moves.len());
}

#[test]
fn test_fallbacks_are_reproducible() {
    let play = |seed| {
        Orchestrator::new(
            Game::new(),
            Box::new(Lost(Mark::X)),
            Box::new(Lost(Mark::O)),
            seed,
        )
        .unwrap()
        .run()
        .unwrap()
    };
    assert_eq!(play(3), play(3));
}

#[test]
fn test_strategy_errors_surface() {
    let mut driver = Orchestrator::new(
        Game::new(),
        Box::new(FixedOrder::new(Mark::X)),
        Box::new(Broken(Mark::O)),
        0,
    )
    .unwrap();
    let err = driver.run().unwrap_err();
    assert!(matches!(err, EngineError::Strategy(StrategyError::Input(_))));
    assert_eq!(driver.game().history().len(), 1);
}

#[test]
fn test_larger_board_match() {
    let mut driver = Orchestrator::new(
        Game::with_size(4).unwrap(),
        Box::new(FixedOrder::new(Mark::X)),
        Box::new(FixedOrder::new(Mark::O)),
        0,
    )
    .unwrap();
    let report = driver.run().unwrap();
    assert!(report.outcome.is_terminal());
    assert_eq!(report.board.size(), 4);
}

#[test]
fn test_report_serializes_to_json() {
    let mut driver = Orchestrator::new(
        Game::new(),
        Box::new(FixedOrder::new(Mark::X)),
        Box::new(FixedOrder::new(Mark::O)),
        0,
    )
    .unwrap();
    let report = driver.run().unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: MatchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.outcome, Outcome::Tie);
    assert_eq!(back.moves.len(), 9);
}

#[test]
fn test_match_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
board_size = 3
seed = 42

[player_x]
kind = "alpha-beta"
max_depth = 9

[player_o]
kind = "monte-carlo"
simulations = 50
parallel = true
"#
    )
    .unwrap();

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.seed(), 42);
    assert_eq!(*config.player_x().kind(), StrategyKind::AlphaBeta);
    assert_eq!(*config.player_o().simulations(), 50);
    assert!(*config.player_o().parallel());

    let report = config.orchestrator().unwrap().run().unwrap();
    assert_ne!(report.outcome, Outcome::Win(Mark::O));
}

#[test]
fn test_bad_config_files_rejected() {
    assert!(MatchConfig::from_file("/nonexistent/grid_duel.toml").is_err());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[player_x]
kind = "monte-carlo"
simulations = 0

[player_o]
kind = "random"
"#
    )
    .unwrap();
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Simulation count"));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[player_x]\nkind = \"oracle\"\n").unwrap();
    assert!(MatchConfig::from_file(file.path()).is_err());
}

#[test]
fn test_serialized_inputs_are_validated() {
    assert!(serde_json::from_str::<SearchConfig>(r#"{"max_depth":0,"empty_cells":"ignore"}"#).is_err());
    assert!(serde_json::from_str::<MonteCarloConfig>(r#"{"simulations":0,"parallel":false}"#).is_err());
    assert!(serde_json::from_str::<Board>(r#"{"size":3,"squares":["Empty","Empty"]}"#).is_err());

    let mut driver = Orchestrator::new(
        Game::new(),
        Box::new(FixedOrder::new(Mark::X)),
        Box::new(FixedOrder::new(Mark::O)),
        0,
    )
    .unwrap();
    let mut report = serde_json::to_value(driver.run().unwrap()).unwrap();
    report["board"]["squares"] = serde_json::json!(["Empty"]);
    assert!(serde_json::from_value::<MatchReport>(report).is_err());
}
