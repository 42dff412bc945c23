//! Puzzle generation for the rudoku engine.
//!
//! Generation is seeded and reproducible: a [`PuzzleSeed`] drives a PCG
//! random generator, which shuffles the solver's digit trial order to
//! produce a fresh full solution and then carves cells out of it down to
//! the [`Difficulty`]'s clue count. The same seed and difficulty always
//! reproduce the same puzzle.
//!
//! Carving does not check that the remaining clues pin down a unique
//! solution. Every puzzle is solvable by construction (the solution it was
//! carved from completes it), but sparse difficulties can admit other
//! completions; this mirrors the clue-count-only notion of difficulty and
//! is accepted, not a bug to fix here.
//!
//! # Examples
//!
//! ```
//! use rudoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new().generate(Difficulty::Expert);
//! assert_eq!(puzzle.problem.filled_count(), 20);
//! assert!(puzzle.solution.is_solved());
//! ```

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};

mod difficulty;
mod generator;
mod seed;
