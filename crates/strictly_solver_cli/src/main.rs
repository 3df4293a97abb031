//! Strictly Solver - unified CLI
//!
//! Solves tic-tac-toe once at startup, then plays or reports from the table.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use strictly_solver::{Player, Solver};
use strictly_solver_cli::{
    BestReport, Cli, Command, Orchestrator, PlayConfig, SolveReport, Terminal, choose_side,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play {
            human,
            config,
            hints,
        } => run_play(human, config, hints),
        Command::Solve { json } => run_solve(json),
        Command::Best { board, json } => run_best(&board, json),
    }
}

fn solved() -> Solver {
    let mut solver = Solver::new();
    solver.solve();
    solver
}

/// Play an interactive game on stdin/stdout
#[instrument]
fn run_play(human: Option<Player>, config: Option<PathBuf>, hints: bool) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => PlayConfig::default(),
    }
    .with_overrides(human, hints);

    let solver = solved();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut terminal = Terminal::new(&mut input, &mut output);

    let human = match config.human() {
        Some(side) => *side,
        None => choose_side(&mut terminal)?,
    };
    info!(%human, "Human side chosen");

    Orchestrator::new(&solver, human, *config.show_hints()).run(&mut terminal)?;
    Ok(())
}

/// Solve the full game and print a summary
#[instrument]
fn run_solve(json: bool) -> Result<()> {
    let report = SolveReport::from_solver(&solved())?;
    print_report(&report, json)
}

/// Answer a single board query
#[instrument]
fn run_best(board: &str, json: bool) -> Result<()> {
    let report = BestReport::query(&solved(), board)?;
    print_report(&report, json)
}

fn print_report<T>(report: &T, json: bool) -> Result<()>
where
    T: serde::Serialize + std::fmt::Display,
{
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, report).context("Failed to encode JSON")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report)?;
    }
    Ok(())
}
