//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_solver::Player;

/// Strictly Solver - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Solve tic-tac-toe exhaustively and play against the result", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "strictly_solver=debug")
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the solver in the terminal
    Play {
        /// Side you play (X moves first). Asked interactively if omitted.
        #[arg(long)]
        human: Option<Player>,

        /// Path to a TOML play configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show the solver's verdict after each AI move
        #[arg(long)]
        hints: bool,
    },

    /// Solve the full game and print a summary
    Solve {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the optimal move for a board, e.g. "X../.O./..."
    Best {
        /// Nine cells: X, O, and . for empty ('/' and '|' are ignored)
        board: String,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },
}
