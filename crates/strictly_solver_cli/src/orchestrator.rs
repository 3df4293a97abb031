//! Game orchestration - alternates turns between two players.

use crate::players::{HumanPlayer, Player, SolverPlayer};
use crate::report::describe_value;
use crate::terminal::Terminal;
use anyhow::{Result, ensure};
use strictly_solver::{Board, Player as Mark, Solver};
use tracing::{info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Three in a row for this mark.
    Won(Mark),
    /// Full board, no winner.
    Draw,
}

/// Runs one game between a human and the solver.
pub struct Orchestrator<'a> {
    solver: &'a Solver,
    board: Board,
    human: Mark,
    x_player: Box<dyn Player + 'a>,
    o_player: Box<dyn Player + 'a>,
    show_hints: bool,
}

impl<'a> Orchestrator<'a> {
    /// Seats the human on `human` and the solver on the other side.
    ///
    /// The solver must already have evaluated the empty board.
    #[instrument(skip(solver))]
    pub fn new(solver: &'a Solver, human: Mark, show_hints: bool) -> Self {
        let person: Box<dyn Player + 'a> = Box::new(HumanPlayer::new("You"));
        let ai: Box<dyn Player + 'a> = Box::new(SolverPlayer::new(solver, "AI"));
        let (x_player, o_player) = match human {
            Mark::X => (person, ai),
            Mark::O => (ai, person),
        };
        Self {
            solver,
            board: Board::new(),
            human,
            x_player,
            o_player,
            show_hints,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until someone wins or the board fills, then announces the result.
    #[instrument(skip(self, terminal), fields(human = %self.human))]
    pub fn run(&mut self, terminal: &mut Terminal<'_>) -> Result<GameOutcome> {
        info!("Starting game");
        terminal.say("")?;
        terminal.say(self.board)?;

        let mut to_move = Mark::X;
        let outcome = loop {
            let player = match to_move {
                Mark::X => &mut self.x_player,
                Mark::O => &mut self.o_player,
            };
            let pos = player.get_move(&self.board, terminal)?;
            ensure!(
                self.board.is_empty(pos),
                "{} chose occupied {}",
                player.name(),
                pos
            );
            self.board.place(pos, to_move);
            info!(player = player.name(), mark = %to_move, %pos, "Move applied");

            terminal.say("")?;
            terminal.say(format!("{} played {} ({})", player.name(), to_move, pos))?;
            terminal.say(self.board)?;

            if self.show_hints && to_move != self.human {
                let value = self.solver.best_value(&self.board)?;
                terminal.say(format!("Solver verdict: {}", describe_value(value)))?;
            }

            if let Some(winner) = self.board.winner() {
                break GameOutcome::Won(winner);
            }
            if self.board.is_full() {
                break GameOutcome::Draw;
            }
            to_move = to_move.opponent();
        };

        info!(?outcome, "Game finished");
        terminal.say("")?;
        terminal.say(self.announcement(outcome))?;
        Ok(outcome)
    }

    fn announcement(&self, outcome: GameOutcome) -> &'static str {
        match outcome {
            GameOutcome::Won(winner) if winner == self.human => "Congrats, you defeated the AI!",
            GameOutcome::Won(_) => "The AI wins this one.",
            GameOutcome::Draw => "Game is a draw.",
        }
    }
}

/// Asks which side the human wants until a valid answer arrives.
#[instrument(skip(terminal))]
pub fn choose_side(terminal: &mut Terminal<'_>) -> Result<Mark> {
    loop {
        let answer = terminal.prompt("X or O ? ")?;
        if let Ok(mark) = answer.trim().parse::<Mark>() {
            return Ok(mark);
        }
    }
}
