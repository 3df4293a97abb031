//! Strictly Solver - exhaustive tic-tac-toe solving
//!
//! Computes the game-theoretic value of every reachable tic-tac-toe board
//! with a memoized minimax search, then answers optimal-move queries from
//! the resulting table in constant time.
//!
//! # Architecture
//!
//! - **Types**: `Board`, `Square`, `Player`, and named `Position`s
//! - **Rules**: win, draw, and turn-alternation checks
//! - **Search**: the `Solver` and its `SolutionTable`
//!
//! # Example
//!
//! ```
//! use strictly_solver::{Board, Player, Position, Solver};
//!
//! let mut solver = Solver::new();
//! assert_eq!(solver.solve(), 0);
//!
//! let mut board = Board::new();
//! board.place(Position::Center, Player::X);
//! let reply = solver.best_move(&board).unwrap();
//! assert!(reply.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod search;
mod table;
mod types;

pub use error::{ParseBoardError, SolveError};
pub use position::Position;
pub use rules::check_winner;
pub use search::{SearchStats, Solver};
pub use table::{SearchResult, SolutionTable};
pub use types::{Board, Player, Square};
