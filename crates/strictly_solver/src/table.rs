//! Solution table: the memoized result of every evaluated board.

use crate::{Board, Position};
use serde::Serialize;
use std::collections::HashMap;

/// Outcome of evaluating one board under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    best_move: Option<Position>,
    value: i8,
}

impl SearchResult {
    pub(crate) fn new(best_move: Option<Position>, value: i8) -> Self {
        debug_assert!((-1..=1).contains(&value), "game value out of range: {value}");
        Self { best_move, value }
    }

    /// Move that achieves the value; `None` on finished or full boards.
    pub fn best_move(&self) -> Option<Position> {
        self.best_move
    }

    /// Game value: `1` X wins, `-1` O wins, `0` draw.
    pub fn value(&self) -> i8 {
        self.value
    }
}

/// Map from board to its [`SearchResult`].
///
/// Grows monotonically while the owning solver evaluates; entries are
/// never replaced or evicted.
#[derive(Debug, Clone, Default)]
pub struct SolutionTable {
    entries: HashMap<Board, SearchResult>,
}

impl SolutionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored result for a board.
    pub fn get(&self, board: &Board) -> Option<&SearchResult> {
        self.entries.get(board)
    }

    /// Checks whether a board has a stored result.
    pub fn contains(&self, board: &Board) -> bool {
        self.entries.contains_key(board)
    }

    /// Number of stored boards.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over every stored board and result.
    pub fn iter(&self) -> impl Iterator<Item = (&Board, &SearchResult)> {
        self.entries.iter()
    }

    pub(crate) fn insert(&mut self, board: Board, result: SearchResult) {
        let previous = self.entries.insert(board, result);
        debug_assert!(
            previous.is_none_or(|p| p == result),
            "solution table entry changed for\n{board}"
        );
    }
}
