//! Summaries printed by the `solve` and `best` commands.

use anyhow::{Context, Result, ensure};
use serde::Serialize;
use std::fmt;
use strictly_solver::rules::is_alternating;
use strictly_solver::{Board, Player, Position, Solver};
use tracing::instrument;

/// Human reading of a game value.
pub fn describe_value(value: i8) -> &'static str {
    match value {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}

/// Result of solving the full game.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Value of the empty board with X to move.
    pub value: i8,
    /// Move the table plays first.
    pub opening: Option<Position>,
    /// Boards stored in the table.
    pub table_size: usize,
    /// Boards whose moves were expanded.
    pub expanded: usize,
    /// Evaluations answered from the table.
    pub cache_hits: usize,
    /// Won boards reached.
    pub terminal: usize,
}

impl SolveReport {
    /// Gathers the report from a solver that has solved the empty board.
    #[instrument(skip(solver))]
    pub fn from_solver(solver: &Solver) -> Result<Self> {
        let root = solver.lookup(&Board::new())?;
        let stats = solver.stats();
        Ok(Self {
            value: root.value(),
            opening: root.best_move(),
            table_size: solver.table().len(),
            expanded: *stats.expanded(),
            cache_hits: *stats.cache_hits(),
            terminal: *stats.terminal(),
        })
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game value: {} ({})", self.value, describe_value(self.value))?;
        match self.opening {
            Some(pos) => writeln!(f, "Opening move: {} (cell {})", pos, pos.to_index() + 1)?,
            None => writeln!(f, "Opening move: none")?,
        }
        writeln!(f, "Boards solved: {}", self.table_size)?;
        write!(
            f,
            "Expanded: {}, table hits: {}, terminal: {}",
            self.expanded, self.cache_hits, self.terminal
        )
    }
}

/// Optimal continuation for one board.
#[derive(Debug, Clone, Serialize)]
pub struct BestReport {
    /// The queried board.
    pub board: Board,
    /// Side to move, inferred from the mark counts.
    pub to_move: Player,
    /// Optimal move, absent on finished boards.
    pub best_move: Option<Position>,
    /// Game value of the board.
    pub value: i8,
}

impl BestReport {
    /// Parses `notation` and looks it up in a solved table.
    #[instrument(skip(solver))]
    pub fn query(solver: &Solver, notation: &str) -> Result<Self> {
        let board: Board = notation.parse()?;
        ensure!(
            is_alternating(&board),
            "X must have as many marks as O, or one more:\n{}",
            board
        );
        let to_move = board
            .to_move()
            .context("Board does not alternate turns")?;
        let result = solver
            .lookup(&board)
            .context("Board cannot arise in play")?;
        Ok(Self {
            board,
            to_move,
            best_move: result.best_move(),
            value: result.value(),
        })
    }
}

impl fmt::Display for BestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        match (self.best_move, self.board.winner()) {
            (_, Some(winner)) => writeln!(f, "Game over: {} has won", winner)?,
            (Some(pos), None) => writeln!(
                f,
                "{} to move: play {} (cell {})",
                self.to_move,
                pos,
                pos.to_index() + 1
            )?,
            (None, None) => writeln!(f, "Game over: board is full")?,
        }
        write!(f, "Value: {} ({})", self.value, describe_value(self.value))
    }
}
