//! Exhaustive minimax search with memoization.
//!
//! X maximizes and O minimizes the game value. Every board visited during
//! evaluation is recorded in the solver's [`SolutionTable`] together with
//! the move that achieves its value, so once the empty board has been
//! evaluated the optimal move for any reachable position is a single
//! lookup.

use crate::error::SolveError;
use crate::rules::{check_winner, is_alternating};
use crate::table::{SearchResult, SolutionTable};
use crate::{Board, Player, Position};
use derive_getters::Getters;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Counters describing how much work evaluation did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SearchStats {
    /// Boards whose moves were expanded.
    expanded: usize,
    /// Evaluations answered straight from the table.
    cache_hits: usize,
    /// Boards found already won.
    terminal: usize,
}

/// Memoizing minimax solver.
///
/// Each solver owns its own table; independent solvers never share state.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    table: SolutionTable,
    stats: SearchStats,
}

impl Solver {
    /// Creates a solver with an empty table.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates the empty board with X to move.
    ///
    /// This visits every reachable board, after which [`Solver::best_move`]
    /// answers for any position arising in play.
    #[instrument(skip(self))]
    pub fn solve(&mut self) -> i8 {
        self.evaluate(&Board::new(), Player::X)
    }

    /// Returns the game value of `board` with `mover` to move.
    ///
    /// `1` means X wins under optimal play, `-1` O wins, `0` a draw. The
    /// board and everything reachable from it are recorded in the table.
    /// The caller's board is never modified.
    #[instrument(skip(self, board), fields(mover = %mover))]
    pub fn evaluate(&mut self, board: &Board, mover: Player) -> i8 {
        debug_assert!(is_alternating(board), "malformed board:\n{board}");

        let before = self.stats;
        let started = Instant::now();
        let mut scratch = *board;
        let value = self.search(&mut scratch, mover);
        debug_assert_eq!(&scratch, board, "exploration leaked a move");

        info!(
            value,
            table_size = self.table.len(),
            expanded = self.stats.expanded - before.expanded,
            cache_hits = self.stats.cache_hits - before.cache_hits,
            terminal = self.stats.terminal - before.terminal,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Evaluation complete"
        );
        value
    }

    fn search(&mut self, board: &mut Board, mover: Player) -> i8 {
        if let Some(result) = self.table.get(board) {
            self.stats.cache_hits += 1;
            return result.value();
        }

        if let Some(winner) = check_winner(board) {
            self.stats.terminal += 1;
            let value = winner.win_value();
            self.table.insert(*board, SearchResult::new(None, value));
            return value;
        }

        self.stats.expanded += 1;

        // Start worse than any real outcome so the first move always replaces it.
        let mut best_value = -2 * mover.win_value();
        let mut best_move = None;

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            board.place(pos, mover);
            let value = self.search(board, mover.opponent());
            board.clear(pos);

            // Strict comparison keeps the lowest index among equal moves.
            let improves = match mover {
                Player::X => value > best_value,
                Player::O => value < best_value,
            };
            if improves {
                best_value = value;
                best_move = Some(pos);
            }
        }

        if best_move.is_none() {
            best_value = 0;
        }

        self.table
            .insert(*board, SearchResult::new(best_move, best_value));
        best_value
    }

    /// Returns the stored result for a board.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotVisited`] if the board was never evaluated.
    #[instrument(skip(self, board))]
    pub fn lookup(&self, board: &Board) -> Result<&SearchResult, SolveError> {
        self.table.get(board).ok_or_else(|| {
            debug!("Lookup of unvisited board");
            SolveError::NotVisited { board: *board }
        })
    }

    /// Returns the optimal move for a visited board.
    ///
    /// `Ok(None)` means the board is already won or full.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotVisited`] if the board was never evaluated.
    pub fn best_move(&self, board: &Board) -> Result<Option<Position>, SolveError> {
        self.lookup(board).map(SearchResult::best_move)
    }

    /// Returns the game value of a visited board.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotVisited`] if the board was never evaluated.
    pub fn best_value(&self, board: &Board) -> Result<i8, SolveError> {
        self.lookup(board).map(SearchResult::value)
    }

    /// Checks whether a board has been evaluated.
    pub fn is_visited(&self, board: &Board) -> bool {
        self.table.contains(board)
    }

    /// Returns the solution table.
    pub fn table(&self) -> &SolutionTable {
        &self.table
    }

    /// Returns counters accumulated over every evaluation so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
