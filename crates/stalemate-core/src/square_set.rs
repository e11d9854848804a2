//! Compact set of board squares, one bit per square.

use crate::Square;
use std::fmt;

/// A set of squares backed by a 64-bit mask (bit `i` = square with index `i`)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// Create an empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1u64 << square.index());
    }

    pub fn contains(&self, square: Square) -> bool {
        self.0 & (1u64 << square.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(&self, other: &SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    pub fn intersection(&self, other: &SquareSet) -> SquareSet {
        SquareSet(self.0 & other.0)
    }

    /// Squares in `self` but not in `other`
    pub fn difference(&self, other: &SquareSet) -> SquareSet {
        SquareSet(self.0 & !other.0)
    }

    /// Iterate squares in row-major order
    pub fn iter(&self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::empty();
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for square in iter {
            self.insert(square);
        }
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the squares of a [`SquareSet`]
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut set = SquareSet::empty();
        assert!(set.is_empty());

        set.insert(sq(0, 0));
        set.insert(sq(7, 7));
        set.insert(sq(7, 7));
        assert_eq!(set.len(), 2);
        assert!(set.contains(sq(7, 7)));

        set.remove(sq(0, 0));
        assert!(!set.contains(sq(0, 0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_algebra() {
        let a: SquareSet = [sq(0, 0), sq(0, 1), sq(1, 1)].into_iter().collect();
        let b: SquareSet = [sq(0, 1), sq(2, 2)].into_iter().collect();

        assert_eq!(a.union(&b).len(), 4);
        assert_eq!(a.intersection(&b).iter().collect::<Vec<_>>(), vec![sq(0, 1)]);
        assert_eq!(
            a.difference(&b).iter().collect::<Vec<_>>(),
            vec![sq(0, 0), sq(1, 1)]
        );
    }

    #[test]
    fn test_iteration_is_row_major() {
        let set: SquareSet = [sq(5, 2), sq(0, 7), sq(5, 1)].into_iter().collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(squares, vec![sq(0, 7), sq(5, 1), sq(5, 2)]);
    }
}
