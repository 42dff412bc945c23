//! Board positions and the row/column/box geometry.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// Rows and columns are both indexed 0-8, with (0, 0) in the top-left
/// corner. Positions order row-major, matching the scan order used by the
/// solver and by [`Position::ALL`].
///
/// # Examples
///
/// ```
/// use rudoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.index(), 43);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(Position::from_index(43), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        Self {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    /// Row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Index of the 3×3 box containing this position (0-8, left to right,
    /// top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        3 * (self.row / 3) + self.col / 3
    }

    /// Top-left position of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: self.row / 3 * 3,
            col: self.col / 3 * 3,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(0, 8));
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 2).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "r3c7");
    }

    proptest! {
        #[test]
        fn prop_index_round_trip(index in 0_usize..81) {
            let pos = Position::from_index(index);
            prop_assert_eq!(pos.index(), index);
        }

        #[test]
        fn prop_box_origin_shares_box(row in 0_u8..9, col in 0_u8..9) {
            let pos = Position::new(row, col);
            let origin = pos.box_origin();
            prop_assert_eq!(origin.box_index(), pos.box_index());
            prop_assert_eq!(origin.row() % 3, 0);
            prop_assert_eq!(origin.col() % 3, 0);
        }
    }
}
