//! The 9×9 grid, constraint checking, and conflict detection.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, House, Position, PositionSet};

/// A 9×9 Sudoku grid of optionally filled cells.
///
/// Cells are stored in row-major order and indexed by [`Position`]. The
/// grid itself carries no notion of givens versus player input; that
/// distinction lives in the game session layer.
///
/// Grids round-trip through an 81-character string form where `1`-`9` are
/// digits and `.` (or `0`) marks an empty cell, and through plain
/// `[[u8; 9]; 9]` matrices with 0 as the empty marker for callers that
/// deal in raw integers.
///
/// # Examples
///
/// ```
/// use rudoku_core::{Digit, Grid, Position};
///
/// let grid: Grid = "\
///     53..7....\
///     6..195...\
///     .98....6.\
///     8...6...3\
///     4..8.3..1\
///     7...2...6\
///     .6....28.\
///     ...419..5\
///     ....8..79"
///     .parse()?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// assert!(grid.conflicts().is_empty());
/// # Ok::<(), rudoku_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// The grid with every cell empty.
    pub const EMPTY: Self = Self { cells: [None; 81] };

    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Builds a grid from a matrix of raw cell values, 0 meaning empty.
    ///
    /// This is the boundary for callers that represent boards as plain
    /// integers; [`Grid::to_values`] is the inverse.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError::ValueOutOfRange`] if any value exceeds 9.
    pub fn from_values(values: &[[u8; 9]; 9]) -> Result<Self, GridParseError> {
        let mut grid = Self::EMPTY;
        for pos in Position::ALL {
            let value = values[usize::from(pos.row())][usize::from(pos.col())];
            if value == 0 {
                continue;
            }
            let digit = Digit::new(value).ok_or(GridParseError::ValueOutOfRange { value })?;
            grid[pos] = Some(digit);
        }
        Ok(grid)
    }

    /// Returns the grid as a matrix of raw cell values, 0 meaning empty.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            if let Some(digit) = self[pos] {
                values[usize::from(pos.row())][usize::from(pos.col())] = digit.value();
            }
        }
        values
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// First empty cell in row-major order, or `None` on a complete grid.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Position::from_index)
    }

    /// Iterates over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(|&pos| self[pos].is_none())
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Checks whether `digit` may be placed at `pos` without colliding
    /// with its row, column, or box.
    ///
    /// Returns `false` iff the digit already occurs in another cell of the
    /// same row, column, or box. The target cell's own content is ignored,
    /// and the cell is not required to be empty; deciding whether to
    /// overwrite is the caller's business.
    ///
    /// # Examples
    ///
    /// ```
    /// use rudoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::EMPTY;
    /// grid[Position::new(0, 1)] = Some(Digit::D3);
    ///
    /// assert!(!grid.allows(Position::new(0, 2), Digit::D3));
    /// assert!(grid.allows(Position::new(1, 2), Digit::D3));
    /// ```
    #[must_use]
    pub fn allows(&self, pos: Position, digit: Digit) -> bool {
        for i in 0..9 {
            let row_peer = Position::new(pos.row(), i);
            if row_peer != pos && self[row_peer] == Some(digit) {
                return false;
            }
            let col_peer = Position::new(i, pos.col());
            if col_peer != pos && self[col_peer] == Some(digit) {
                return false;
            }
        }
        let origin = pos.box_origin();
        for row in origin.row()..origin.row() + 3 {
            for col in origin.col()..origin.col() + 3 {
                let box_peer = Position::new(row, col);
                if box_peer != pos && self[box_peer] == Some(digit) {
                    return false;
                }
            }
        }
        true
    }

    /// Finds every cell participating in a rule violation.
    ///
    /// Walks all 27 houses counting digit occurrences; each cell whose
    /// digit appears more than once in some house is reported, not just
    /// the later occurrence. Side-effect free and purely advisory: it
    /// never blocks or corrects input. Two calls on an unmodified grid
    /// return equal sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use rudoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::EMPTY;
    /// grid[Position::new(2, 0)] = Some(Digit::D7);
    /// grid[Position::new(2, 5)] = Some(Digit::D7);
    ///
    /// let conflicts = grid.conflicts();
    /// assert!(conflicts.contains(Position::new(2, 0)));
    /// assert!(conflicts.contains(Position::new(2, 5)));
    /// assert_eq!(conflicts.len(), 2);
    /// ```
    #[must_use]
    pub fn conflicts(&self) -> PositionSet {
        let mut conflicts = PositionSet::EMPTY;
        for house in House::ALL {
            let mut counts = [0_u8; 9];
            for pos in house.positions() {
                if let Some(digit) = self[pos] {
                    counts[usize::from(digit.value() - 1)] += 1;
                }
            }
            for pos in house.positions() {
                if let Some(digit) = self[pos]
                    && counts[usize::from(digit.value() - 1)] > 1
                {
                    conflicts.insert(pos);
                }
            }
        }
        conflicts
    }

    /// Returns whether the grid is a valid solution: complete and
    /// conflict-free.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.conflicts().is_empty()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

/// Errors from building a grid out of text or raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, got {len}")]
    WrongLength {
        /// Number of cells found.
        len: usize,
    },
    /// A character was neither a digit nor an empty-cell marker.
    #[display("invalid cell character {c:?}")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
    /// A raw cell value was outside the range 0-9.
    #[display("cell value {value} is out of range 0-9")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses 81 cells in row-major order; `1`-`9` are digits, `.` and
    /// `0` mark empty cells, and whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::EMPTY;
        let mut len = 0_usize;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let digit = match c {
                '.' | '0' => None,
                _ => Some(Digit::from_char(c).ok_or(GridParseError::InvalidCharacter { c })?),
            };
            if len < 81 {
                grid.cells[len] = digit;
            }
            len += 1;
        }
        if len != 81 {
            return Err(GridParseError::WrongLength { len });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    /// Writes the 81-character string form accepted by [`Grid::from_str`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
