//! Game session layer for the rudoku engine.
//!
//! A [`Game`] wraps a generated puzzle and tracks everything a UI needs
//! between user edits: which cells are givens, what the player has
//! entered, how many moves were made, and how many hints remain. The
//! session never renders anything; it hands back grids, conflict sets,
//! and [`Hint`] values for the embedding layer to present.
//!
//! # Examples
//!
//! ```
//! use rudoku_core::Digit;
//! use rudoku_game::Game;
//! use rudoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
//! let mut game = Game::new(&puzzle);
//!
//! let pos = game
//!     .to_grid()
//!     .first_empty()
//!     .expect("a fresh puzzle has empty cells");
//! game.set_digit(pos, Digit::D5)?;
//! assert_eq!(game.moves(), 1);
//! # Ok::<(), rudoku_game::GameError>(())
//! ```

pub use self::{
    cell_state::CellState,
    error::GameError,
    game::{Game, HINT_BUDGET, Hint},
};

mod cell_state;
mod error;
mod game;
