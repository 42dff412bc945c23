//! Puzzle construction: solve an empty grid, then carve cells out.

use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use rudoku_core::{Grid, Position};
use rudoku_solver::{DigitOrder, solve_ordered};

use crate::{Difficulty, PuzzleSeed};

/// A generated puzzle together with its solution and provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle as presented to the player; its filled cells are the
    /// givens.
    pub problem: Grid,
    /// The full solution the problem was carved from. Sparse problems may
    /// admit other completions as well.
    pub solution: Grid,
    /// Seed that reproduces this puzzle exactly.
    pub seed: PuzzleSeed,
    /// Difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
}

/// Generates puzzles by solving the empty grid with a shuffled digit
/// trial order and clearing random cells down to the difficulty's clue
/// count.
///
/// # Examples
///
/// ```
/// use rudoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(Difficulty::Hard);
/// assert_eq!(puzzle.problem.filled_count(), 25);
///
/// // The same seed reproduces the same puzzle.
/// let again = generator.generate_with_seed(Difficulty::Hard, puzzle.seed);
/// assert_eq!(again.problem, puzzle.problem);
/// assert_eq!(again.solution, puzzle.solution);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The seed drives every random decision, so equal seed and
    /// difficulty always yield an identical puzzle.
    #[must_use]
    pub fn generate_with_seed(self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.bytes());
        let solution = random_solution(&mut rng);
        let problem = carve(solution, difficulty, &mut rng);
        GeneratedPuzzle {
            problem,
            solution,
            seed,
            difficulty,
        }
    }
}

/// Produces one full solution by solving the empty grid with a shuffled
/// digit trial order. Without the shuffle every invocation would rebuild
/// the same canonical solution.
fn random_solution(rng: &mut Pcg64) -> Grid {
    let mut order = DigitOrder::ASCENDING;
    order.digits_mut().shuffle(rng);
    let mut grid = Grid::EMPTY;
    let solved = solve_ordered(&mut grid, &order);
    debug_assert!(solved, "the empty grid always has a solution");
    grid
}

/// Clears uniformly random cells until the removal quota is met. Draws
/// that hit an already cleared cell are retried and not counted, matching
/// the quota exactly.
fn carve(solution: Grid, difficulty: Difficulty, rng: &mut Pcg64) -> Grid {
    let mut problem = solution;
    let mut removed = 0;
    while removed < difficulty.cells_to_remove() {
        let row = rng.random_range(0..9);
        let col = rng.random_range(0..9);
        let pos = Position::new(row, col);
        if problem[pos].is_some() {
            problem[pos] = None;
            removed += 1;
        }
    }
    problem
}
