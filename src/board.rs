use std::fmt;
use std::num::NonZeroU8;

use bitvec::prelude::*;
use itertools::iproduct;

use crate::utils::div_ceil;

pub const WIDTH: usize = 9;
pub const HEIGHT: usize = 9;
pub const NUM_FIELDS: usize = WIDTH * HEIGHT;
pub const MAX_VALUE: u8 = 9;

const NUM_BYTES: usize = div_ceil(NUM_FIELDS, 2);
const NUM_DIGITS: usize = MAX_VALUE as usize;

/// A [Board] is a 9x9 sudoku board.
/// Each field either contains a value in 1..=9 or is empty.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // Every byte stores two fields. The first 4 bits the first field, the second 4 bits the second field.
    // Fields are ordered by rows, first left-to-right, then top-to-bottom.
    compressed_board: [u8; NUM_BYTES],
}

#[derive(Clone, Copy)]
enum FieldSubindex {
    FirstHalfByte,
    SecondHalfByte,
}

pub struct FieldRef<T> {
    field: T,
    subindex: FieldSubindex,
}

impl FieldRef<&u8> {
    #[inline]
    pub fn get(&self) -> Option<NonZeroU8> {
        let value = match self.subindex {
            FieldSubindex::FirstHalfByte => self.field & 0x0F,
            FieldSubindex::SecondHalfByte => self.field >> 4,
        };
        assert!(value <= MAX_VALUE);
        NonZeroU8::new(value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }
}

impl FieldRef<&mut u8> {
    #[inline]
    pub fn get(&self) -> Option<NonZeroU8> {
        FieldRef::<&u8> {
            field: self.field,
            subindex: self.subindex,
        }
        .get()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }

    #[inline]
    pub fn set(&mut self, value: Option<NonZeroU8>) {
        let value = value.map_or(0, NonZeroU8::get);
        assert!(value <= MAX_VALUE);
        match self.subindex {
            FieldSubindex::FirstHalfByte => *self.field = (*self.field & 0xF0) | value,
            FieldSubindex::SecondHalfByte => *self.field = (*self.field & 0x0F) | (value << 4),
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Board {
            compressed_board: [0; NUM_BYTES],
        }
    }

    /// Parses a board from the text format used in tests and benchmarks:
    /// digits for filled fields, `_` for empty fields, whitespace ignored.
    /// Panics unless the input has exactly 81 fields.
    pub fn from_str(board_str: &str) -> Self {
        let mut board = Self::new_empty();
        let mut index = 0;
        for character in board_str.chars() {
            if character.is_whitespace() {
                continue;
            }
            let value = match character {
                '_' => None,
                '1'..='9' => NonZeroU8::new(character as u8 - b'0'),
                _ => panic!("Invalid character '{character}' in board string"),
            };
            assert!(index < NUM_FIELDS, "Board string has too many fields");
            board.field_mut(index % WIDTH, index / WIDTH).set(value);
            index += 1;
        }
        assert_eq!(NUM_FIELDS, index, "Board string has too few fields");
        board
    }

    fn index(x: usize, y: usize) -> (usize, FieldSubindex) {
        let index = y * WIDTH + x;
        let subindex = if index % 2 == 0 {
            FieldSubindex::FirstHalfByte
        } else {
            FieldSubindex::SecondHalfByte
        };
        (index, subindex)
    }

    #[inline]
    pub fn field(&self, x: usize, y: usize) -> FieldRef<&'_ u8> {
        let (index, subindex) = Self::index(x, y);
        let field = &self.compressed_board[index / 2];
        FieldRef { field, subindex }
    }

    #[inline]
    pub fn field_mut(&mut self, x: usize, y: usize) -> FieldRef<&'_ mut u8> {
        let (index, subindex) = Self::index(x, y);
        let field = &mut self.compressed_board[index / 2];
        FieldRef { field, subindex }
    }

    /// Returns true iff `value` is already placed somewhere in row `y`.
    pub fn row_contains(&self, y: usize, value: NonZeroU8) -> bool {
        (0..WIDTH).any(|x| self.field(x, y).get() == Some(value))
    }

    /// Returns true iff `value` is already placed somewhere in column `x`.
    pub fn col_contains(&self, x: usize, value: NonZeroU8) -> bool {
        (0..HEIGHT).any(|y| self.field(x, y).get() == Some(value))
    }

    /// Returns true iff `value` is already placed in the 3x3 region containing (x, y).
    pub fn region_contains(&self, x: usize, y: usize, value: NonZeroU8) -> bool {
        let (region_x, region_y) = (x / 3 * 3, y / 3 * 3);
        iproduct!(region_x..region_x + 3, region_y..region_y + 3)
            .any(|(x, y)| self.field(x, y).get() == Some(value))
    }

    /// Returns true iff placing `value` at (x, y) conflicts with no value already
    /// on the board. The field at (x, y) must be empty when calling this. A row,
    /// column or region that already contains `value` rejects it, so a filled
    /// field can never be validated against its own content.
    pub fn can_place(&self, x: usize, y: usize, value: NonZeroU8) -> bool {
        !self.row_contains(y, value)
            && !self.col_contains(x, value)
            && !self.region_contains(x, y, value)
    }

    // Returns the row-major index of the first empty field at or after `start`,
    // with x = index % WIDTH and y = index / WIDTH.
    pub(crate) fn first_empty_field_from(&self, start: usize) -> Option<usize> {
        (start..NUM_FIELDS).find(|&index| self.field(index % WIDTH, index / WIDTH).is_empty())
    }

    pub fn is_filled(&self) -> bool {
        self.first_empty_field_from(0).is_none()
    }

    pub fn num_empty(&self) -> usize {
        iproduct!(0..WIDTH, 0..HEIGHT)
            .filter(|&(x, y)| self.field(x, y).is_empty())
            .count()
    }

    pub fn num_filled(&self) -> usize {
        NUM_FIELDS - self.num_empty()
    }

    /// Returns true iff some row, column or region contains the same value twice.
    pub fn has_conflicts(&self) -> bool {
        for i in 0..WIDTH {
            if self.unit_has_conflict((0..WIDTH).map(|x| (x, i)))
                || self.unit_has_conflict((0..HEIGHT).map(|y| (i, y)))
            {
                return true;
            }
        }
        iproduct!(0..3, 0..3).any(|(region_x, region_y)| {
            self.unit_has_conflict(
                iproduct!(0..3, 0..3).map(move |(x, y)| (region_x * 3 + x, region_y * 3 + y)),
            )
        })
    }

    fn unit_has_conflict(&self, fields: impl Iterator<Item = (usize, usize)>) -> bool {
        let mut seen = DigitSet::new_empty();
        for (x, y) in fields {
            if let Some(value) = self.field(x, y).get() {
                if seen.contains(value) {
                    return true;
                }
                seen.insert(value);
            }
        }
        false
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..HEIGHT {
            if y > 0 && y % 3 == 0 {
                writeln!(f)?;
            }
            for x in 0..WIDTH {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.field(x, y).get() {
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, "_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Remembers which of the values 1..=9 were seen while scanning a row, column or region.
#[derive(Clone, Copy)]
struct DigitSet {
    values: BitArr!(for NUM_DIGITS),
}

impl DigitSet {
    const fn new_empty() -> Self {
        Self {
            values: bitarr![const 0; NUM_DIGITS],
        }
    }

    fn contains(&self, value: NonZeroU8) -> bool {
        self.values[usize::from(value.get()) - 1]
    }

    fn insert(&mut self, value: NonZeroU8) {
        self.values.set(usize::from(value.get()) - 1, true);
    }
}
