use std::num::NonZeroU8;

use rand::{seq::SliceRandom, RngCore};

use crate::board::{Board, WIDTH};

const fn digit(value: u8) -> NonZeroU8 {
    match NonZeroU8::new(value) {
        Some(digit) => digit,
        None => panic!("zero is not a sudoku value"),
    }
}

const DIGITS: [NonZeroU8; 9] = [
    digit(1),
    digit(2),
    digit(3),
    digit(4),
    digit(5),
    digit(6),
    digit(7),
    digit(8),
    digit(9),
];

/// One tentative placement made during a fill search, in the order the search
/// tried it. Placements that were later backtracked stay in the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    pub value: NonZeroU8,
    pub x: usize,
    pub y: usize,
}

enum Mode<'r> {
    // Stop at the first fully solved board and leave it on the board. Candidate
    // values are shuffled fresh at every field so the solution is randomized.
    Fill { rng: &'r mut dyn RngCore },
    // Enumerate completions in fixed candidate order, undoing each one to keep
    // exploring sibling branches, until `limit` completions have been seen.
    Count { limit: u32 },
}

struct Search<'r> {
    mode: Mode<'r>,
    solutions: u32,
    placements: Vec<Placement>,
}

impl Search<'_> {
    // Depth-first search over the empty fields in row-major order, starting the
    // scan at `scan_from`. Returns true to stop the whole search: in fill mode
    // because the board is solved, in count mode because the solution limit was
    // reached.
    //
    // Invariant: when `step` returns false, every placement it made has been
    // undone and the board is unchanged. When it returns true, the board keeps
    // the placements of the branch that was being explored.
    fn step(&mut self, board: &mut Board, scan_from: usize) -> bool {
        let Some(index) = board.first_empty_field_from(scan_from) else {
            // No empty fields left, the board is fully solved.
            self.solutions += 1;
            return match self.mode {
                Mode::Fill { .. } => true,
                Mode::Count { limit } => self.solutions >= limit,
            };
        };
        let (x, y) = (index % WIDTH, index / WIDTH);

        let mut candidates = DIGITS;
        if let Mode::Fill { rng } = &mut self.mode {
            candidates.shuffle(&mut **rng);
        }

        for value in candidates {
            if board.can_place(x, y, value) {
                board.field_mut(x, y).set(Some(value));
                if matches!(self.mode, Mode::Fill { .. }) {
                    self.placements.push(Placement { value, x, y });
                }
                if self.step(board, index + 1) {
                    return true;
                }
                // Undo the placement before trying the next candidate.
                board.field_mut(x, y).set(None);
            }
        }

        // No candidate worked out, backtrack to the caller.
        false
    }
}

// Fills all empty fields of `board` with a random valid assignment. Returns
// the placements that were tried, or None if no valid assignment exists; in
// that case `board` is left unchanged.
pub(crate) fn fill_search(
    board: &mut Board,
    rng: &mut dyn RngCore,
) -> Option<Vec<Placement>> {
    let mut search = Search {
        mode: Mode::Fill { rng },
        solutions: 0,
        placements: Vec::new(),
    };
    if search.step(board, 0) {
        // The chronologically last placement is the one that completed the
        // board, so it was never undone.
        if let Some(last) = search.placements.last() {
            debug_assert_eq!(Some(last.value), board.field(last.x, last.y).get());
        }
        Some(search.placements)
    } else {
        None
    }
}

// Counts the completions of `board`, stopping once `limit` have been found.
// The board is scratch space and is left in an unspecified state.
pub(crate) fn count_search(board: &mut Board, limit: u32) -> u32 {
    let mut search = Search {
        mode: Mode::Count { limit },
        solutions: 0,
        placements: Vec::new(),
    };
    search.step(board, 0);
    search.solutions
}
