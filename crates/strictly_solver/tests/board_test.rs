//! Tests for board notation, rendering, and positions.

use strictly_solver::{Board, ParseBoardError, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_from_cell_number() {
    assert_eq!(Position::from_cell_number("1"), Some(Position::TopLeft));
    assert_eq!(Position::from_cell_number(" 9\n"), Some(Position::BottomRight));
    assert_eq!(Position::from_cell_number("0"), None);
    assert_eq!(Position::from_cell_number("10"), None);
    assert_eq!(Position::from_cell_number("x"), None);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Player::X);
    board.place(Position::Center, Player::O);

    let valid: Vec<_> = Position::valid_moves(&board).collect();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert_eq!(valid.first(), Some(&Position::TopCenter));
}

#[test]
fn test_place_then_clear_restores_board() {
    let original: Board = "X../.O./...".parse().unwrap();
    let mut board = original;
    board.place(Position::BottomRight, Player::X);
    assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
    board.clear(Position::BottomRight);
    assert_eq!(board, original);
}

#[test]
fn test_to_move_follows_counts() {
    assert_eq!(Board::new().to_move(), Some(Player::X));
    let board: Board = "X../.../...".parse().unwrap();
    assert_eq!(board.to_move(), Some(Player::O));
    let board: Board = "XO./.../...".parse().unwrap();
    assert_eq!(board.to_move(), Some(Player::X));
}

#[test]
fn test_parse_accepts_digits_and_separators() {
    let a: Board = "X2O|456|78X".parse().unwrap();
    let b: Board = "x.o / ... / ..x".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.get(Position::TopRight), Square::Occupied(Player::O));
}

#[test]
fn test_parse_rejects_wrong_length() {
    let err = "XO.".parse::<Board>().unwrap_err();
    assert!(matches!(err, ParseBoardError::WrongLength { found: 3, .. }));
}

#[test]
fn test_parse_rejects_unknown_cell() {
    let err = "XO?/.../...".parse::<Board>().unwrap_err();
    assert!(matches!(
        err,
        ParseBoardError::InvalidCell {
            position: 2,
            character: '?',
            ..
        }
    ));
}

#[test]
fn test_display_shows_marks_and_cell_numbers() {
    let board: Board = "X../.O./...".parse().unwrap();
    let expected = " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 ";
    assert_eq!(board.to_string(), expected);
}

#[test]
fn test_player_parses_case_insensitively() {
    assert_eq!("x".parse::<Player>().unwrap(), Player::X);
    assert_eq!("O".parse::<Player>().unwrap(), Player::O);
    assert!("z".parse::<Player>().is_err());
    assert_eq!(Player::X.opponent().opponent(), Player::X);
}
