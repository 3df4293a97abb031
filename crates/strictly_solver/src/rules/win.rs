//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};

/// The eight lines that win the game.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise (including a full, drawn board). Boards where both
/// players own a line are not reachable by legal play; the first line
/// found wins.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some(player);
        }
    }

    None
}

impl Board {
    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }
}
