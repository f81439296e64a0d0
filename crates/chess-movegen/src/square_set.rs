//! A set of squares over the 0x88 index space.

use chess_core::Square;
use std::fmt;

/// A set of squares, one bit per 0x88 index.
///
/// Only bits of playable squares are ever set, so the off-board half of the
/// `u128` stays zero.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SquareSet(u128);

impl SquareSet {
    /// The empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the given square is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 >> sq.index()) & 1 == 1
    }

    /// Adds a square.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    /// Returns true if any square of `squares` is in the set.
    pub fn contains_any(self, squares: &[Square]) -> bool {
        squares.iter().any(|&sq| self.contains(sq))
    }

    /// Iterates over the squares in ascending index order.
    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the squares of a [`SquareSet`].
pub struct SquareSetIter(u128);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn insert_and_contains() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());

        set.insert(sq("h8"));
        set.insert(sq("a1"));
        set.insert(sq("a1"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(sq("h8")));
        assert!(set.contains(sq("a1")));
        assert!(!set.contains(sq("g8")));
    }

    #[test]
    fn iterates_in_index_order() {
        let set: SquareSet = [sq("c3"), sq("a1"), sq("h8"), sq("b2")].into_iter().collect();
        let squares: Vec<Square> = set.into_iter().collect();
        assert_eq!(squares, vec![sq("a1"), sq("b2"), sq("c3"), sq("h8")]);
        assert_eq!(set.iter().size_hint(), (4, Some(4)));
    }

    #[test]
    fn contains_any_checks_each_square() {
        let set: SquareSet = [sq("e1"), sq("f1")].into_iter().collect();
        assert!(set.contains_any(&[sq("g1"), sq("f1")]));
        assert!(!set.contains_any(&[sq("g1"), sq("d1")]));
        assert!(!set.contains_any(&[]));
    }

    #[test]
    fn debug_lists_coordinates() {
        let set: SquareSet = [sq("e4"), sq("d5")].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{Square(e4), Square(d5)}");
    }
}
