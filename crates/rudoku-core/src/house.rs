//! Houses: the rows, columns, and 3×3 boxes of the board.

use crate::Position;

/// A Sudoku house: a row, column, or 3×3 box.
///
/// Every digit may appear at most once per house; the validator walks all
/// 27 of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row(u8),
    /// A column identified by its column index (0-8).
    Column(u8),
    /// A 3×3 box identified by its index (0-8, left to right, top to
    /// bottom).
    Box(u8),
}

impl House {
    /// All 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Box(i as u8);
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8, reading order) into an
    /// absolute position.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8, or if the house's own index
    /// is out of range.
    #[must_use]
    pub const fn position(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row(row) => Position::new(row, i),
            House::Column(col) => Position::new(i, col),
            House::Box(index) => Position::new(index / 3 * 3 + i / 3, index % 3 * 3 + i % 3),
        }
    }

    /// Returns the nine positions of this house in reading order.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn positions(self) -> [Position; 9] {
        std::array::from_fn(|i| self.position(i as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_houses() {
        assert_eq!(House::ALL.len(), 27);
        assert_eq!(House::ALL[0], House::Row(0));
        assert_eq!(House::ALL[9], House::Column(0));
        assert_eq!(House::ALL[18], House::Box(0));
        assert_eq!(House::ALL[26], House::Box(8));
    }

    #[test]
    fn test_row_positions() {
        let positions = House::Row(3).positions();
        for (col, pos) in positions.iter().enumerate() {
            assert_eq!(*pos, Position::new(3, u8::try_from(col).unwrap()));
        }
    }

    #[test]
    fn test_column_positions() {
        let positions = House::Column(7).positions();
        for (row, pos) in positions.iter().enumerate() {
            assert_eq!(*pos, Position::new(u8::try_from(row).unwrap(), 7));
        }
    }

    #[test]
    fn test_box_positions() {
        let positions = House::Box(4).positions();
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[8], Position::new(5, 5));
        for pos in positions {
            assert_eq!(pos.box_index(), 4);
        }
    }

    #[test]
    fn test_houses_cover_board() {
        // Each cell belongs to exactly one row, one column, and one box.
        let mut counts = [0_u8; 81];
        for house in House::ALL {
            for pos in house.positions() {
                counts[pos.index()] += 1;
            }
        }
        assert!(counts.iter().all(|&count| count == 3));
    }
}
