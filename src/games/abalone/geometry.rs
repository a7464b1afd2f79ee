//! Grid geometry: directions, offsets, and coordinates.
//!
//! The hexagonal board is stored as a 9x9 square grid. Row 0 is the top
//! row (`i` in notation), row 8 the bottom row (`a`). Six directions in
//! counterclockwise order move between neighbouring cells.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Number of grid rows.
pub const NUM_ROWS: usize = 9;

/// Number of grid columns.
pub const NUM_COLS: usize = 9;

/// Number of grid cells (valid or not).
pub const NUM_CELLS: usize = NUM_ROWS * NUM_COLS;

/// Number of move directions.
pub const NUM_DIRECTIONS: usize = 6;

/// A (row, column) position on the grid.
///
/// Signed so that stepping off the grid stays representable; use
/// [`Coordinate::in_grid`] before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies within `[0, 9) x [0, 9)`.
    #[must_use]
    pub const fn in_grid(self) -> bool {
        self.row >= 0 && self.row < NUM_ROWS as i32 && self.col >= 0 && self.col < NUM_COLS as i32
    }

    /// Row-major index into a grid array, or `None` off the grid.
    #[must_use]
    pub const fn cell_index(self) -> Option<usize> {
        if self.in_grid() {
            Some(self.row as usize * NUM_COLS + self.col as usize)
        } else {
            None
        }
    }

    /// One step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        self + direction.offset()
    }

    /// Component-wise sign, mapping each axis onto -1, 0 or 1.
    #[must_use]
    pub fn signum(self) -> Self {
        Self::new(self.row.signum(), self.col.signum())
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.row - other.row, self.col - other.col)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        Self::new(self.row * factor, self.col * factor)
    }
}

/// The six move directions, in counterclockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right = 0,
    UpRight = 1,
    UpLeft = 2,
    Left = 3,
    DownLeft = 4,
    DownRight = 5,
}

/// Unit (row, col) offsets, indexed by direction.
const OFFSETS: [Coordinate; NUM_DIRECTIONS] = [
    Coordinate::new(0, 1),
    Coordinate::new(-1, 1),
    Coordinate::new(-1, 0),
    Coordinate::new(0, -1),
    Coordinate::new(1, -1),
    Coordinate::new(1, 0),
];

impl Direction {
    /// All directions in counterclockwise order.
    pub const ALL: [Direction; NUM_DIRECTIONS] = [
        Direction::Right,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Direction with the given cyclic index, wrapping modulo 6.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % NUM_DIRECTIONS]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit offset of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> Coordinate {
        OFFSETS[self as usize]
    }

    /// The two counterclockwise neighbours (`self + 1`, `self + 2`).
    ///
    /// These are the slide axes of a broadside move in this direction.
    #[must_use]
    pub const fn sisters(self) -> (Direction, Direction) {
        (
            Self::from_index(self as usize + 1),
            Self::from_index(self as usize + 2),
        )
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::from_index(self as usize + 3)
    }

    /// The direction whose unit offset equals `offset`, if any.
    #[must_use]
    pub fn from_offset(offset: Coordinate) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.offset() == offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_distinct_units() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            let o = a.offset();
            assert!(o.row.abs() <= 1 && o.col.abs() <= 1);
            assert_ne!(o, Coordinate::new(0, 0));
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(o, b.offset());
            }
        }
    }

    #[test]
    fn test_reverse_cancels() {
        for d in Direction::ALL {
            assert_eq!(d.offset() + d.reverse().offset(), Coordinate::new(0, 0));
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn test_sisters() {
        assert_eq!(Direction::Right.sisters(), (Direction::UpRight, Direction::UpLeft));
        assert_eq!(Direction::DownLeft.sisters(), (Direction::DownRight, Direction::Right));
        assert_eq!(Direction::DownRight.sisters(), (Direction::Right, Direction::UpRight));
    }

    #[test]
    fn test_from_offset() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_offset(d.offset()), Some(d));
        }
        assert_eq!(Direction::from_offset(Coordinate::new(1, 1)), None);
        assert_eq!(Direction::from_offset(Coordinate::new(0, 2)), None);
    }

    #[test]
    fn test_coordinate_arithmetic() {
        let c = Coordinate::new(4, 4);
        assert_eq!(c.step(Direction::UpRight), Coordinate::new(3, 5));
        assert_eq!(c + Direction::Left.offset() * 2, Coordinate::new(4, 2));
        assert_eq!(Coordinate::new(4, 2) - c, Coordinate::new(0, -2));
        assert_eq!(Coordinate::new(-2, 2).signum(), Coordinate::new(-1, 1));
    }

    #[test]
    fn test_grid_bounds() {
        assert!(Coordinate::new(0, 0).in_grid());
        assert!(Coordinate::new(8, 8).in_grid());
        assert!(!Coordinate::new(-1, 0).in_grid());
        assert!(!Coordinate::new(0, 9).in_grid());
        assert_eq!(Coordinate::new(1, 2).cell_index(), Some(11));
        assert_eq!(Coordinate::new(9, 0).cell_index(), None);
    }
}
