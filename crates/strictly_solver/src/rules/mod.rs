//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are kept separate from board
//! storage so the solver and the driver share one definition of a win.

pub mod alternation;
pub mod draw;
pub mod win;

pub use alternation::is_alternating;
pub use draw::{is_draw, is_full};
pub use win::check_winner;
