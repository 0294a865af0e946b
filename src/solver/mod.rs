use rand::Rng;
use thiserror::Error;

use super::board::Board;

mod search;

use search::{count_search, fill_search};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolverError {
    #[error("Sudoku is not solvable")]
    NotSolvable,
}

/// Result of a bounded solution count: no completion, exactly one, or at
/// least two. The search stops as soon as a second completion is found, an
/// exact count beyond that is never needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionCount {
    None,
    Unique,
    Multiple,
}

/// Fills all empty fields of `board` with a valid assignment, randomized by
/// shuffling the candidate values at every field. Fails only if the given
/// fields admit no solution at all; the board is unchanged in that case.
///
/// `board` must not already contain conflicting values. Boards produced by this
/// crate never do; checking is up to the caller for hand-built boards.
pub fn fill(board: &mut Board, rng: &mut impl Rng) -> Result<(), SolverError> {
    match fill_search(board, rng) {
        Some(_placements) => Ok(()),
        None => Err(SolverError::NotSolvable),
    }
}

/// Counts the completions of `board`. Takes the board by value, the caller's
/// copy is never modified.
///
/// Like [fill], this expects a board without conflicting values.
pub fn count_solutions(mut board: Board) -> SolutionCount {
    match count_search(&mut board, 2) {
        0 => SolutionCount::None,
        1 => SolutionCount::Unique,
        _ => SolutionCount::Multiple,
    }
}
