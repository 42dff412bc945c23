//! Per-cell session state.

use rudoku_core::Digit;

/// The content of one cell in a game session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// A clue fixed by the generator; the player cannot change it.
    Given(Digit),
    /// A digit entered by the player (directly or via a hint).
    Filled(Digit),
    /// No digit.
    #[default]
    Empty,
}

impl CellState {
    /// Returns the digit in the cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }

    /// Returns whether the cell is a given.
    #[must_use]
    pub const fn is_given(self) -> bool {
        matches!(self, Self::Given(_))
    }

    /// Returns whether the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}
