//! Backtracking solver for rudoku grids.
//!
//! The solver fills a [`Grid`](rudoku_core::Grid) in place by depth-first
//! search: at the first empty cell (row-major) it tries candidate digits in
//! a configurable [`DigitOrder`], places the first one the constraint
//! checker allows, and descends; dead ends undo the placement before the
//! next candidate. Failure is a `false` return, never a panic or error,
//! and leaves the grid exactly as it was on entry.
//!
//! # Examples
//!
//! ```
//! use rudoku_core::Grid;
//! use rudoku_solver::solve;
//!
//! let mut grid = Grid::EMPTY;
//! assert!(solve(&mut grid));
//! assert!(grid.is_solved());
//! ```

pub use self::backtracking::{DigitOrder, solve, solve_ordered};

mod backtracking;
