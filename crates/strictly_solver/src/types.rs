//! Core domain types for tic-tac-toe.

use crate::error::ParseBoardError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Game value of a win for this player: `1` for X, `-1` for O.
    pub fn win_value(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Boards compare and hash cell by cell, which makes them usable directly
/// as solution table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places a mark on an empty square.
    pub fn place(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_empty(pos), "placing on occupied {pos}");
        self.squares[pos.to_index()] = Square::Occupied(player);
    }

    /// Empties a square.
    pub fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Infers whose turn it is from the mark counts.
    ///
    /// Returns `None` when the counts cannot arise from alternating play
    /// starting with X.
    pub fn to_move(&self) -> Option<Player> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x == o {
            Some(Player::X)
        } else if x == o + 1 {
            Some(Player::O)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.squares[idx] {
                    Square::Empty => write!(f, " {} ", idx + 1)?,
                    Square::Occupied(player) => write!(f, " {} ", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses compact notation such as `"XO./.X./..O"`.
    ///
    /// `X` and `O` (any case) are marks; `.`, `-`, `_` and digits are empty
    /// cells. Whitespace, `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        if cells.len() != 9 {
            return Err(ParseBoardError::WrongLength {
                input: s.to_string(),
                found: cells.len(),
            });
        }

        let mut board = Board::new();
        for (idx, c) in cells.into_iter().enumerate() {
            board.squares[idx] = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                c if c.is_ascii_digit() => Square::Empty,
                other => {
                    return Err(ParseBoardError::InvalidCell {
                        input: s.to_string(),
                        position: idx,
                        character: other,
                    });
                }
            };
        }
        Ok(board)
    }
}
