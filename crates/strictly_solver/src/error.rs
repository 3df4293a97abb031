//! Error types for the solver.

use crate::Board;

/// Error returned when querying the solution table.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SolveError {
    /// The board was never reached while evaluating.
    ///
    /// Querying before solving, or querying a board that is not reachable
    /// from the evaluated root, is a caller-side logic error.
    #[display("Board was never visited by the solver:\n{}", board)]
    NotVisited {
        /// The board that was looked up.
        board: Board,
    },
}

impl std::error::Error for SolveError {}

/// Error returned when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The input did not contain exactly nine cells.
    #[display("Expected 9 cells in {:?}, found {}", input, found)]
    WrongLength {
        /// The rejected input.
        input: String,
        /// Number of cells found.
        found: usize,
    },

    /// A cell was not a mark or an empty marker.
    #[display("Invalid cell {:?} at position {} in {:?}", character, position, input)]
    InvalidCell {
        /// The rejected input.
        input: String,
        /// Cell index (0-8) of the bad character.
        position: usize,
        /// The offending character.
        character: char,
    },
}

impl std::error::Error for ParseBoardError {}
