//! A set of board positions backed by an 81-bit mask.

use std::iter::FusedIterator;

use crate::Position;

/// A set of board positions, stored as a bitmask in a `u128`.
///
/// Used for conflict reporting: [`Grid::conflicts`](crate::Grid::conflicts)
/// returns one of these. Iteration yields positions in row-major order.
///
/// # Examples
///
/// ```
/// use rudoku_core::{Position, PositionSet};
///
/// let mut set = PositionSet::EMPTY;
/// set.insert(Position::new(8, 8));
/// set.insert(Position::new(0, 0));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Position::new(0, 0)));
/// let positions: Vec<_> = set.iter().collect();
/// assert_eq!(positions, [Position::new(0, 0), Position::new(8, 8)]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet {
    bits: u128,
}

impl PositionSet {
    /// The set containing no positions.
    pub const EMPTY: Self = Self { bits: 0 };

    const fn bit(pos: Position) -> u128 {
        1 << pos.index()
    }

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a position to the set.
    pub const fn insert(&mut self, pos: Position) {
        self.bits |= Self::bit(pos);
    }

    /// Removes a position from the set.
    pub const fn remove(&mut self, pos: Position) {
        self.bits &= !Self::bit(pos);
    }

    /// Returns whether the set contains the position.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & Self::bit(pos) != 0
    }

    /// Number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates over the positions in the set in row-major order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`], in row-major order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(Position::from_index(usize::try_from(index).ok()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
