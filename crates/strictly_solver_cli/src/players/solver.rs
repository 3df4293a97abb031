//! AI player answering from the solved table.

use super::Player;
use crate::terminal::Terminal;
use anyhow::{Context, Result};
use strictly_solver::{Board, Position, Solver};
use tracing::debug;

/// Plays the table's optimal move; never loses.
#[derive(Debug, derive_new::new)]
pub struct SolverPlayer<'a> {
    solver: &'a Solver,
    #[new(into)]
    name: String,
}

impl Player for SolverPlayer<'_> {
    fn get_move(&mut self, board: &Board, _terminal: &mut Terminal<'_>) -> Result<Position> {
        let pos = self
            .solver
            .best_move(board)?
            .context("Solver has no move for a finished board")?;
        debug!(ai = %self.name, %pos, "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
