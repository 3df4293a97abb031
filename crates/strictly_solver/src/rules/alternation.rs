//! Turn alternation invariant.

use crate::{Board, Player};
use tracing::{instrument, warn};

/// Checks that X and O counts are equal, or X is one ahead.
///
/// Every board produced by alternating play starting with X satisfies
/// this; the solver assumes it of every board it is asked to evaluate.
#[instrument(skip(board))]
pub fn is_alternating(board: &Board) -> bool {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);

    let valid = x_count == o_count || x_count == o_count + 1;
    if !valid {
        warn!(x_count, o_count, "Board alternation violated");
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_alternates() {
        assert!(is_alternating(&Board::new()));
    }

    #[test]
    fn test_x_one_ahead_alternates() {
        let board: Board = "X../.O./..X".parse().unwrap();
        assert!(is_alternating(&board));
        assert_eq!(board.to_move(), Some(Player::O));
    }

    #[test]
    fn test_o_ahead_violates() {
        let board: Board = "O../.../...".parse().unwrap();
        assert!(!is_alternating(&board));
        assert_eq!(board.to_move(), None);
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let board: Board = "XX./.../...".parse().unwrap();
        assert!(!is_alternating(&board));
    }
}
