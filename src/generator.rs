use itertools::iproduct;
use rand::{seq::SliceRandom, Rng};
use rayon::prelude::*;

use super::board::{Board, HEIGHT, WIDTH};
use super::solver::{self, count_solutions, SolutionCount};

/// A generated sudoku: the clues presented to the player and the full
/// solution they were carved out of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub clues: Board,
    pub solution: Board,
}

// Reduction never leaves fewer clues than this on the board.
const MIN_CLUES: usize = 20;
// Reduction stops after this many removals had to be rolled back.
const MAX_FAILED_REMOVALS: u32 = 3;

pub fn generate() -> Puzzle {
    generate_with(&mut rand::thread_rng())
}

/// Generates a random solved board and reduces it to a puzzle, both driven by
/// the given rng so results are reproducible under a seeded rng.
pub fn generate_with(rng: &mut impl Rng) -> Puzzle {
    let solution = generate_solution_with(rng);
    let clues = reduce_with(solution, rng);
    Puzzle { clues, solution }
}

/// Generates `count` puzzles, independently and in parallel.
pub fn generate_many(count: usize) -> Vec<Puzzle> {
    (0..count).into_par_iter().map(|_| generate()).collect()
}

pub fn generate_solution() -> Board {
    generate_solution_with(&mut rand::thread_rng())
}

/// Produces a randomized fully solved board. Starting from an empty board
/// this always succeeds.
pub fn generate_solution_with(rng: &mut impl Rng) -> Board {
    let mut board = Board::new_empty();
    let filled = solver::fill(&mut board, rng);
    assert!(filled.is_ok(), "an empty board always has a solution");
    assert!(board.is_filled());
    assert!(!board.has_conflicts());
    board
}

pub fn reduce(board: Board) -> Board {
    reduce_with(board, &mut rand::thread_rng())
}

/// Removes values from `board` while the remaining clues still determine a
/// unique solution. Visits the filled fields in random order, each at most
/// once, and rolls back any removal that makes the board ambiguous. Stops
/// after three rollbacks, and never removes a value once only 20 clues are
/// left.
pub fn reduce_with(mut board: Board, rng: &mut impl Rng) -> Board {
    let mut removal_order: Vec<(usize, usize)> = iproduct!(0..WIDTH, 0..HEIGHT)
        .filter(|&(x, y)| !board.field(x, y).is_empty())
        .collect();
    removal_order.shuffle(rng);

    let mut num_clues = removal_order.len();
    let mut failed_removals = 0;
    while failed_removals < MAX_FAILED_REMOVALS && num_clues > MIN_CLUES {
        let Some((x, y)) = removal_order.pop() else {
            break;
        };
        if remove_field_if_unambiguous(&mut board, x, y) {
            num_clues -= 1;
        } else {
            failed_removals += 1;
        }
    }

    board
}

fn remove_field_if_unambiguous(board: &mut Board, x: usize, y: usize) -> bool {
    let mut field = board.field_mut(x, y);
    let value = field.get();
    field.set(None);
    match count_solutions(*board) {
        SolutionCount::Unique => true,
        count => {
            // Removing a value can only widen the solution set, so a board that
            // was solvable before stays solvable.
            debug_assert_ne!(SolutionCount::None, count);
            board.field_mut(x, y).set(value);
            false
        }
    }
}
