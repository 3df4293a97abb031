//! Player trait and implementations.

mod human;
mod solver;

pub use human::HumanPlayer;
pub use solver::SolverPlayer;

use crate::terminal::Terminal;
use anyhow::Result;
use strictly_solver::{Board, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns an empty position on `board`.
    fn get_move(&mut self, board: &Board, terminal: &mut Terminal<'_>) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
