//! A fixed-size set of board coordinates packed into a `u128` bitboard.
//!
//! Bit `i` stands for the coordinate whose row-major index is `i`, so iteration
//! order is row 1 columns A..J, then row 2, and so on. No heap allocation is
//! involved; sets are `Copy` and combine with the usual bitwise operators.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};

use crate::board::Coordinate;
use crate::config::BOARD_SIZE;

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CoordSet {
    bits: u128,
}

impl CoordSet {
    #[inline]
    fn mask() -> u128 {
        (1u128 << CELLS) - 1
    }

    /// Empty set.
    #[inline]
    pub const fn new() -> Self {
        CoordSet { bits: 0 }
    }

    /// Every coordinate on the board.
    #[inline]
    pub fn full() -> Self {
        CoordSet { bits: Self::mask() }
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.bits >> coord.index()) & 1 == 1
    }

    /// Adds `coord`; returns `false` if it was already present.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let bit = 1u128 << coord.index();
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    /// Removes `coord`; returns `true` if it was present.
    pub fn remove(&mut self, coord: Coordinate) -> bool {
        let bit = 1u128 << coord.index();
        let present = self.bits & bit != 0;
        self.bits &= !bit;
        present
    }

    /// Iterator over the members in row-major order.
    #[inline]
    pub fn iter(&self) -> Members {
        Members {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl FromIterator<Coordinate> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = CoordSet::new();
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}

impl<'a> FromIterator<&'a Coordinate> for CoordSet {
    fn from_iter<I: IntoIterator<Item = &'a Coordinate>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl IntoIterator for CoordSet {
    type Item = Coordinate;
    type IntoIter = Members;

    fn into_iter(self) -> Members {
        self.iter()
    }
}

impl fmt::Debug for CoordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CoordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = BOARD_SIZE as usize;
        for r in 0..n {
            for c in 0..n {
                let bit = if (self.bits >> (r * n + c)) & 1 == 1 {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the members of a [`CoordSet`].
#[derive(Clone, Copy)]
pub struct Members {
    bits: u128,
    idx: usize,
}

impl Iterator for Members {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Coordinate> {
        while self.idx < CELLS {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & 1 == 1 {
                return Coordinate::from_index(idx);
            }
        }
        None
    }
}

impl BitAnd for CoordSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CoordSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOr for CoordSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CoordSet {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Set difference.
impl Sub for CoordSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        CoordSet {
            bits: self.bits & !rhs.bits,
        }
    }
}

/// Complement within board bounds.
impl Not for CoordSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        CoordSet {
            bits: !self.bits & Self::mask(),
        }
    }
}

impl BitAndAssign for CoordSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOrAssign for CoordSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}
