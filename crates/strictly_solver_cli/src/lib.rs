//! Terminal driver for the strictly_solver table.
//!
//! Renders boards, reads human moves, alternates turns, and announces
//! results. All game knowledge comes from [`strictly_solver::Solver`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;
mod report;
mod terminal;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use orchestrator::{GameOutcome, Orchestrator, choose_side};
pub use players::{HumanPlayer, Player, SolverPlayer};
pub use report::{BestReport, SolveReport, describe_value};
pub use terminal::Terminal;
