//! Positions into a dynamic array.
//!
//! A [`Cursor`] is a plain offset from the start of the buffer. It does not
//! borrow the array, so it stays memory-safe across mutations, but it is
//! only *meaningful* until the next operation that reallocates or shifts
//! elements (insert, erase, push, pop, reserve, shrink, swap, clear, move).
//! After such an operation the same offset may denote a different element.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Offset-based position, as returned by `begin()`, `end()` and `insert()`.
///
/// Supports the arithmetic positional code needs: `cursor + n`,
/// `cursor - n`, and `cursor - begin` for the integer offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    /// Cursor at the given offset.
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Offset of this position from the start of the buffer.
    pub const fn offset(self) -> usize {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({})", self.0)
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    fn add(self, rhs: usize) -> Cursor {
        match self.0.checked_add(rhs) {
            Some(offset) => Cursor(offset),
            None => panic!("cursor offset overflow: {} + {rhs}", self.0),
        }
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    fn sub(self, rhs: usize) -> Cursor {
        match self.0.checked_sub(rhs) {
            Some(offset) => Cursor(offset),
            None => panic!("cursor moved before begin: {} - {rhs}", self.0),
        }
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs;
    }
}

/// Distance between two positions; `pos - begin` is the offset of `pos`.
impl Sub<Cursor> for Cursor {
    type Output = usize;

    fn sub(self, rhs: Cursor) -> usize {
        match self.0.checked_sub(rhs.0) {
            Some(distance) => distance,
            None => panic!("cursor {} precedes cursor {}", self.0, rhs.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_round_trip() {
        let begin = Cursor::new(0);
        let pos = begin + 4;
        assert_eq!(pos.offset(), 4);
        assert_eq!(pos - begin, 4);
        assert_eq!((pos - 1).offset(), 3);
    }

    #[test]
    fn assign_operators() {
        let mut pos = Cursor::new(2);
        pos += 3;
        assert_eq!(pos, Cursor::new(5));
        pos -= 5;
        assert_eq!(pos, Cursor::default());
    }

    #[test]
    fn ordering_follows_offset() {
        assert!(Cursor::new(1) < Cursor::new(2));
        assert_eq!(Cursor::new(3).max(Cursor::new(9)), Cursor::new(9));
    }

    #[test]
    #[should_panic(expected = "before begin")]
    fn moving_before_begin_panics() {
        let _ = Cursor::new(0) - 1;
    }

    #[test]
    #[should_panic(expected = "precedes")]
    fn negative_distance_panics() {
        let _ = Cursor::new(1) - Cursor::new(2);
    }

    #[test]
    fn display() {
        assert_eq!(Cursor::new(7).to_string(), "Cursor(7)");
    }
}
