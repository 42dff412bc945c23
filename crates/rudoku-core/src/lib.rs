//! Core data structures for the rudoku Sudoku engine.
//!
//! This crate provides the 9×9 grid data model shared by the solver,
//! generator, and game crates, along with the two rule-checking primitives
//! everything else builds on:
//!
//! - **Constraint checking** ([`Grid::allows`]): whether a digit can be
//!   placed at a position without colliding with its row, column, or box.
//! - **Conflict detection** ([`Grid::conflicts`]): every cell currently
//!   participating in a duplicate, for live feedback on a partially (and
//!   possibly incorrectly) filled board.
//!
//! # Examples
//!
//! ```
//! use rudoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::EMPTY;
//! grid[Position::new(0, 0)] = Digit::new(5);
//! grid[Position::new(0, 1)] = Digit::new(3);
//!
//! // 3 already appears in row 0, so it is not allowed at (0, 2).
//! assert!(!grid.allows(Position::new(0, 2), Digit::D3));
//! assert!(grid.allows(Position::new(0, 2), Digit::D4));
//!
//! // Nothing collides yet.
//! assert!(grid.conflicts().is_empty());
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod position_set;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridParseError},
    house::House,
    position::Position,
    position_set::PositionSet,
};
