//! Human player that types cell numbers.

use super::Player;
use crate::terminal::Terminal;
use anyhow::Result;
use strictly_solver::{Board, Position};
use tracing::debug;

/// Human player reading moves from the terminal.
#[derive(Debug, derive_new::new)]
pub struct HumanPlayer {
    #[new(into)]
    name: String,
}

impl Player for HumanPlayer {
    fn get_move(&mut self, board: &Board, terminal: &mut Terminal<'_>) -> Result<Position> {
        loop {
            let line = terminal.prompt("Your move, enter a free cell (1-9): ")?;
            match Position::from_cell_number(&line) {
                Some(pos) if board.is_empty(pos) => return Ok(pos),
                Some(pos) => {
                    debug!(player = %self.name, %pos, "Rejected occupied cell");
                    terminal.say(format!("{} is already taken.", pos))?;
                }
                None => {
                    debug!(player = %self.name, input = %line, "Rejected input");
                    terminal.say("Please enter a number from 1 to 9.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
