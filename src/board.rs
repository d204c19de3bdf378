//! The fixed 10×10 coordinate space and its adjacency predicates.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::EngineError;
use crate::config::BOARD_SIZE;
use crate::coord_set::CoordSet;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Row fixed, column varies.
    Horizontal,
    /// Column fixed, row varies.
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// A cell on the board. Columns and rows are 1-based; column 1 is `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    column: u8,
    row: u8,
}

impl Coordinate {
    pub fn new(column: u8, row: u8) -> Result<Self, EngineError> {
        if (1..=BOARD_SIZE).contains(&column) && (1..=BOARD_SIZE).contains(&row) {
            Ok(Coordinate { column, row })
        } else {
            Err(EngineError::OutOfBounds { column, row })
        }
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column as its conventional letter.
    pub fn column_letter(&self) -> char {
        (b'A' + self.column - 1) as char
    }

    /// Row-major index in `0..100`.
    pub(crate) fn index(&self) -> usize {
        (self.row as usize - 1) * BOARD_SIZE as usize + (self.column as usize - 1)
    }

    pub(crate) fn from_index(idx: usize) -> Option<Self> {
        let n = BOARD_SIZE as usize;
        if idx >= n * n {
            return None;
        }
        Some(Coordinate {
            column: (idx % n) as u8 + 1,
            row: (idx / n) as u8 + 1,
        })
    }

    /// The coordinate `steps` cells further along `axis`, if still on the board.
    pub fn step(&self, axis: Axis, steps: u8) -> Option<Self> {
        let (column, row) = match axis {
            Axis::Horizontal => (self.column.checked_add(steps)?, self.row),
            Axis::Vertical => (self.column, self.row.checked_add(steps)?),
        };
        Coordinate::new(column, row).ok()
    }

    /// Position along `axis`: the column for horizontal, the row for vertical.
    pub fn position(&self, axis: Axis) -> u8 {
        match axis {
            Axis::Horizontal => self.column,
            Axis::Vertical => self.row,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row)
    }
}

impl FromStr for Coordinate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCoordinate(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }
        let column = letter as u8 - b'A' + 1;
        let digits = chars.as_str();
        let plain_number = !digits.is_empty()
            && !digits.starts_with('0')
            && digits.bytes().all(|b| b.is_ascii_digit());
        if !plain_number {
            return Err(invalid());
        }
        let row: u8 = digits.parse().map_err(|_| invalid())?;
        Coordinate::new(column, row).map_err(|_| invalid())
    }
}

/// Source of the coordinate universe. Implementations may cache or persist it;
/// the engine only reads it.
pub trait BoardProvider {
    fn all_coordinates(&self) -> CoordSet;
}

/// The standard 10×10 board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board;

impl Board {
    /// All 100 coordinates.
    pub fn all_coordinates(&self) -> CoordSet {
        CoordSet::full()
    }

    /// True iff `a` and `b` share a row or column and differ by one in the other axis.
    pub fn is_adjacent(a: Coordinate, b: Coordinate) -> bool {
        let dc = a.column.abs_diff(b.column);
        let dr = a.row.abs_diff(b.row);
        (dc == 0 && dr == 1) || (dc == 1 && dr == 0)
    }

    /// True iff `a` and `b` share the row (horizontal) or the column (vertical).
    pub fn is_aligned(a: Coordinate, b: Coordinate, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => a.row == b.row,
            Axis::Vertical => a.column == b.column,
        }
    }

    /// In-bounds four-directional neighbours of `coord`.
    pub fn neighbors(coord: Coordinate) -> impl Iterator<Item = Coordinate> {
        let (c, r) = (coord.column as i16, coord.row as i16);
        [(c - 1, r), (c + 1, r), (c, r - 1), (c, r + 1)]
            .into_iter()
            .filter_map(|(c, r)| {
                let column = u8::try_from(c).ok()?;
                let row = u8::try_from(r).ok()?;
                Coordinate::new(column, row).ok()
            })
    }
}

impl BoardProvider for Board {
    fn all_coordinates(&self) -> CoordSet {
        Board::all_coordinates(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrips_for_every_cell() {
        for idx in 0..100 {
            let coord = Coordinate::from_index(idx).unwrap();
            assert_eq!(coord.index(), idx);
        }
        assert!(Coordinate::from_index(100).is_none());
    }

    #[test]
    fn step_stops_at_edge() {
        let j1 = Coordinate::new(10, 1).unwrap();
        assert_eq!(j1.step(Axis::Horizontal, 1), None);
        assert_eq!(j1.step(Axis::Vertical, 9), Coordinate::new(10, 10).ok());
        assert_eq!(j1.step(Axis::Vertical, 10), None);
    }
}
