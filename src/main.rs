//! Grid Duel - Unified CLI
//!
//! Plays single matches and tournaments between move-selection strategies.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command, Tuning};
use grid_duel::{GameEvent, MatchConfig, StrategyKind, driver::tournament};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            x,
            o,
            config,
            json,
            tuning,
        } => run_play(x, o, config, json, tuning),
        Command::Tournament {
            a,
            b,
            games,
            alternate,
            tuning,
        } => run_tournament(a, b, games, alternate, tuning),
        Command::Strategies => {
            for kind in StrategyKind::iter() {
                println!("{:<12} {}", kind.to_string(), kind.description());
            }
            Ok(())
        }
    }
}

/// Play one match and print the boards or the JSON report
#[instrument(skip(x, o, tuning))]
fn run_play(
    x: StrategyKind,
    o: StrategyKind,
    config: Option<PathBuf>,
    json: bool,
    tuning: Tuning,
) -> Result<()> {
    let config = match config {
        Some(path) => MatchConfig::from_file(path)?,
        None => tuning.match_config(x, o)?,
    };

    info!(
        x = %config.player_x().kind(),
        o = %config.player_o().kind(),
        size = config.board_size(),
        seed = config.seed(),
        "Match configured"
    );

    let mut orchestrator = config.orchestrator()?;
    if !json {
        orchestrator = orchestrator.with_observer(|event| match event {
            GameEvent::MoveMade {
                mv,
                fallback,
                board,
            } => {
                let note = if *fallback { " (substituted)" } else { "" };
                println!("{}{}\n{}\n", mv, note, board);
            }
            GameEvent::GameOver { outcome } => println!("{}", outcome),
        });
    }

    let report = orchestrator.run()?;
    info!(outcome = %report.outcome, moves = report.moves.len(), "Match finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

/// Play a seeded tournament and print win and draw rates
#[instrument(skip(tuning))]
fn run_tournament(
    a: StrategyKind,
    b: StrategyKind,
    games: u32,
    alternate: bool,
    tuning: Tuning,
) -> Result<()> {
    if a.is_interactive() || b.is_interactive() {
        bail!("Interactive strategies cannot play tournaments");
    }
    // Validate both tunings before any game starts.
    tuning.match_config(a, b)?;

    let config_a = tuning.strategy(a);
    let config_b = tuning.strategy(b);
    let report = tournament::run(
        tuning.size,
        games,
        tuning.seed,
        alternate,
        |mark, seed| config_a.build(mark, seed),
        |mark, seed| config_b.build(mark, seed),
    )?;

    println!("games: {}", report.games);
    println!("{:<12} wins {:>5} ({:.1}%)", a.to_string(), report.wins_a, report.win_rate_a() * 100.0);
    println!("{:<12} wins {:>5} ({:.1}%)", b.to_string(), report.wins_b, report.win_rate_b() * 100.0);
    println!("{:<12}      {:>5} ({:.1}%)", "draws", report.draws, report.draw_rate() * 100.0);
    Ok(())
}
