//! Tests for the memoized minimax solver.

use strictly_solver::{Board, Player, Position, SolveError, Solver};

fn solved() -> Solver {
    let mut solver = Solver::new();
    solver.solve();
    solver
}

#[test]
fn test_empty_board_is_a_draw() {
    let mut solver = Solver::new();
    assert_eq!(solver.evaluate(&Board::new(), Player::X), 0);
}

#[test]
fn test_table_covers_every_reachable_board() {
    let solver = solved();
    assert_eq!(solver.table().len(), 5478);
    assert_eq!(*solver.stats().expanded(), 4536);
    assert_eq!(*solver.stats().terminal(), 942);
}

#[test]
fn test_values_stay_in_range() {
    let solver = solved();
    for (_, result) in solver.table().iter() {
        assert!((-1..=1).contains(&result.value()));
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let mut solver = Solver::new();
    let first = solver.solve();
    let second = solver.solve();
    assert_eq!(first, second);

    let board: Board = "XO./.../...".parse().unwrap();
    let mut fresh = Solver::new();
    assert_eq!(fresh.evaluate(&board, Player::X), 1);
    assert_eq!(solver.best_value(&board).unwrap(), 1);
    assert_eq!(fresh.best_move(&board).unwrap(), solver.best_move(&board).unwrap());
}

#[test]
fn test_second_solve_is_served_from_table() {
    let mut solver = solved();
    let hits = *solver.stats().cache_hits();
    solver.solve();
    assert_eq!(*solver.stats().cache_hits(), hits + 1);
    assert_eq!(solver.table().len(), 5478);
}

#[test]
fn test_tie_break_picks_lowest_index() {
    let solver = solved();
    // Every opening draws, so the first cell wins the tie.
    assert_eq!(
        solver.best_move(&Board::new()).unwrap(),
        Some(Position::TopLeft)
    );
    // Against a corner opening only the center holds the draw for O.
    let board: Board = "X../.../...".parse().unwrap();
    assert_eq!(solver.best_move(&board).unwrap(), Some(Position::Center));
    // Center opening: every corner draws, the first one is chosen.
    let board: Board = ".../.X./...".parse().unwrap();
    assert_eq!(solver.best_move(&board).unwrap(), Some(Position::TopLeft));
}

#[test]
fn test_winning_line_is_found() {
    let solver = solved();
    // X to move can complete the top row.
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(solver.best_value(&board).unwrap(), 1);
    assert_eq!(solver.best_move(&board).unwrap(), Some(Position::TopRight));
}

#[test]
fn test_evaluate_leaves_board_untouched() {
    let board: Board = "X../.O./..X".parse().unwrap();
    let before = board;
    let mut solver = Solver::new();
    solver.evaluate(&board, Player::O);
    assert_eq!(board, before);
    assert!(solver.is_visited(&board));
}

#[test]
fn test_top_row_win_is_detected() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(board.winner(), Some(Player::X));

    let mut solver = Solver::new();
    assert_eq!(solver.evaluate(&board, Player::O), 1);
    assert_eq!(solver.best_move(&board).unwrap(), None);
}

#[test]
fn test_full_drawn_board() {
    let board: Board = "XOX/OXX/OXO".parse().unwrap();
    assert_eq!(board.winner(), None);

    let mut solver = Solver::new();
    assert_eq!(solver.evaluate(&board, Player::O), 0);
    assert_eq!(solver.best_move(&board).unwrap(), None);
    assert_eq!(solver.table().len(), 1);
}

#[test]
fn test_lookup_before_solving_fails() {
    let solver = Solver::new();
    let err = solver.best_move(&Board::new()).unwrap_err();
    assert_eq!(err, SolveError::NotVisited { board: Board::new() });
    assert!(!solver.is_visited(&Board::new()));
}

#[test]
fn test_lookup_outside_evaluated_subtree_fails() {
    let root: Board = "X../.../...".parse().unwrap();
    let mut solver = Solver::new();
    solver.evaluate(&root, Player::O);

    let elsewhere: Board = ".X./.../O..".parse().unwrap();
    assert!(matches!(
        solver.best_move(&elsewhere),
        Err(SolveError::NotVisited { .. })
    ));
    assert!(solver.lookup(&Board::new()).is_err());
}

#[test]
fn test_independent_solvers_do_not_share_tables() {
    let first = solved();
    let second = Solver::new();
    assert!(first.is_visited(&Board::new()));
    assert!(!second.is_visited(&Board::new()));
    assert!(second.table().is_empty());
}
