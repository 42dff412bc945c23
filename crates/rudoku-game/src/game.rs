//! The game session: givens, player input, moves, and hints.

use rand::{Rng, RngExt as _};
use rudoku_core::{Digit, Grid, Position, PositionSet};
use rudoku_generator::{Difficulty, GeneratedPuzzle};
use rudoku_solver::solve;

use crate::{CellState, GameError};

/// Number of hints a new game starts with.
pub const HINT_BUDGET: u8 = 3;

/// A correct digit for one empty cell, derived by re-solving the board.
///
/// Produced by [`Game::hint`]; the session is only changed when the caller
/// feeds the value back through [`Game::apply_hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The empty cell the hint fills.
    pub position: Position,
    /// The digit belonging there in the completion the solver found.
    pub digit: Digit,
}

/// A Sudoku game session.
///
/// Tracks given (fixed) cells and player input separately, along with a
/// move counter and the hint budget. Givens can never be overwritten;
/// conflicting player input is accepted and surfaced through
/// [`Game::conflicts`] rather than blocked, so the UI can paint the
/// offending cells.
///
/// # Examples
///
/// ```
/// use rudoku_game::Game;
/// use rudoku_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Medium);
/// let game = Game::new(&puzzle);
///
/// assert!(!game.is_solved());
/// assert_eq!(game.moves(), 0);
/// assert_eq!(game.hints_remaining(), rudoku_game::HINT_BUDGET);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    difficulty: Difficulty,
    moves: u32,
    hints_remaining: u8,
}

impl Game {
    /// Creates a session from a generated puzzle.
    ///
    /// Filled cells of the puzzle's problem grid become givens; the rest
    /// start empty.
    #[must_use]
    pub fn new(puzzle: &GeneratedPuzzle) -> Self {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            difficulty: puzzle.difficulty,
            moves: 0,
            hints_remaining: HINT_BUDGET,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Difficulty the underlying puzzle was generated for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of digit entries made this session (player input and
    /// applied hints).
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Hints left in the budget.
    #[must_use]
    pub const fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    /// Snapshot of givens and player input as a plain grid.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::EMPTY;
        for pos in Position::ALL {
            grid[pos] = self.cell(pos).as_digit();
        }
        grid
    }

    /// Cells currently violating the one-digit-per-house rule.
    ///
    /// Purely advisory; input is never blocked on conflicts. Intended to
    /// run after every edit and after hint application for live feedback.
    #[must_use]
    pub fn conflicts(&self) -> PositionSet {
        self.to_grid().conflicts()
    }

    /// Returns whether the board is complete and conflict-free.
    ///
    /// Any valid completion counts, not just the one the generator built;
    /// carved puzzles may admit several solutions.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.to_grid().is_solved()
    }

    /// Enters a player digit, overwriting previous player input.
    ///
    /// Conflicting digits are accepted; check [`Game::conflicts`]
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` holds a
    /// given.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        self.moves += 1;
        Ok(())
    }

    /// Clears player input at `pos`. Clearing an empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` holds a
    /// given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Empty;
        Ok(())
    }

    /// Removes all player input, keeping the givens.
    pub fn clear_entries(&mut self) {
        for cell in &mut self.cells {
            if let CellState::Filled(_) = cell {
                *cell = CellState::Empty;
            }
        }
    }

    /// Returns the board to its initial state: player input removed, move
    /// counter and hint budget restored.
    pub fn reset(&mut self) {
        self.clear_entries();
        self.moves = 0;
        self.hints_remaining = HINT_BUDGET;
    }

    /// Derives a hint by re-solving a snapshot of the board.
    ///
    /// Picks an empty cell uniformly at random through `rng`, solves a
    /// copy of the current board, and reads the chosen cell from the
    /// completion. Returns `None` when the board is already full, or when
    /// the snapshot has no solution (unreachable for boards whose player
    /// input extends some completion, but handled rather than assumed
    /// away). Player input is honored: the completion extends whatever
    /// the player has entered, as long as it is consistent.
    ///
    /// Never mutates the session; apply the result with
    /// [`Game::apply_hint`].
    pub fn hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Hint> {
        let grid = self.to_grid();
        let empty: Vec<Position> = grid.empty_positions().collect();
        if empty.is_empty() {
            return None;
        }
        let position = empty[rng.random_range(0..empty.len())];

        let mut completion = grid;
        if !solve(&mut completion) {
            return None;
        }
        let digit = completion[position]?;
        Some(Hint { position, digit })
    }

    /// Applies a hint, spending one hint from the budget and counting a
    /// move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoHintsRemaining`] when the budget is
    /// exhausted, [`GameError::HintTargetFilled`] if the player has
    /// filled the cell since the hint was derived, and
    /// [`GameError::CannotModifyGivenCell`] for hints that target a given
    /// (impossible for hints from [`Game::hint`] on this session).
    pub fn apply_hint(&mut self, hint: &Hint) -> Result<(), GameError> {
        if self.hints_remaining == 0 {
            return Err(GameError::NoHintsRemaining);
        }
        match self.cell(hint.position) {
            CellState::Given(_) => return Err(GameError::CannotModifyGivenCell),
            CellState::Filled(_) => return Err(GameError::HintTargetFilled),
            CellState::Empty => {}
        }
        self.cells[hint.position.index()] = CellState::Filled(hint.digit);
        self.hints_remaining -= 1;
        self.moves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use rudoku_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn test_puzzle(difficulty: Difficulty) -> GeneratedPuzzle {
        PuzzleGenerator::new().generate_with_seed(difficulty, PuzzleSeed::from_bytes([42; 32]))
    }

    fn test_rng() -> Pcg64 {
        Pcg64::from_seed([7; 32])
    }

    #[test]
    fn test_new_game_mirrors_problem() {
        let puzzle = test_puzzle(Difficulty::Medium);
        let game = Game::new(&puzzle);
        for pos in Position::ALL {
            match puzzle.problem[pos] {
                Some(digit) => assert_eq!(game.cell(pos), CellState::Given(digit)),
                None => assert_eq!(game.cell(pos), CellState::Empty),
            }
        }
        assert_eq!(game.to_grid(), puzzle.problem);
        assert_eq!(game.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_givens_are_protected() {
        let puzzle = test_puzzle(Difficulty::Easy);
        let mut game = Game::new(&puzzle);
        let given = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_given())
            .expect("puzzle has givens");

        assert_eq!(
            game.set_digit(given, Digit::D1),
            Err(GameError::CannotModifyGivenCell)
        );
        assert_eq!(
            game.clear_cell(given),
            Err(GameError::CannotModifyGivenCell)
        );
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_set_and_clear_digit() {
        let puzzle = test_puzzle(Difficulty::Easy);
        let mut game = Game::new(&puzzle);
        let pos = game.to_grid().first_empty().unwrap();

        game.set_digit(pos, Digit::D3).unwrap();
        assert_eq!(game.cell(pos), CellState::Filled(Digit::D3));
        game.set_digit(pos, Digit::D4).unwrap();
        assert_eq!(game.cell(pos), CellState::Filled(Digit::D4));
        game.clear_cell(pos).unwrap();
        assert!(game.cell(pos).is_empty());
        assert_eq!(game.moves(), 2);
    }

    #[test]
    fn test_conflicting_input_is_reported_not_blocked() {
        let puzzle = test_puzzle(Difficulty::Medium);
        let mut game = Game::new(&puzzle);

        // Copy a given digit into an empty cell of the same row.
        let (given, digit, target) = Position::ALL
            .into_iter()
            .find_map(|pos| {
                let CellState::Given(digit) = game.cell(pos) else {
                    return None;
                };
                let target = (0..9)
                    .map(|col| Position::new(pos.row(), col))
                    .find(|&peer| game.cell(peer).is_empty())?;
                Some((pos, digit, target))
            })
            .expect("some given shares a row with an empty cell");

        game.set_digit(target, digit).unwrap();
        let conflicts = game.conflicts();
        assert!(conflicts.contains(given));
        assert!(conflicts.contains(target));
    }

    #[test]
    fn test_clear_entries_and_reset() {
        let puzzle = test_puzzle(Difficulty::Hard);
        let mut game = Game::new(&puzzle);
        let pos = game.to_grid().first_empty().unwrap();
        let digit = puzzle.solution[pos].expect("solution is complete");
        game.set_digit(pos, digit).unwrap();

        let hint = game.hint(&mut test_rng()).unwrap();
        game.apply_hint(&hint).unwrap();
        assert_eq!(game.hints_remaining(), HINT_BUDGET - 1);

        game.clear_entries();
        assert_eq!(game.to_grid(), puzzle.problem);
        // Clearing entries keeps the stats.
        assert_eq!(game.moves(), 2);

        game.reset();
        assert_eq!(game.to_grid(), puzzle.problem);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.hints_remaining(), HINT_BUDGET);
    }

    #[test]
    fn test_hint_never_mutates_session() {
        let puzzle = test_puzzle(Difficulty::Expert);
        let game = Game::new(&puzzle);
        let before = game.clone();

        let hint = game.hint(&mut test_rng());
        assert!(hint.is_some());
        assert_eq!(game, before);
    }

    #[test]
    fn test_hint_targets_empty_cell_with_solvable_digit() {
        let puzzle = test_puzzle(Difficulty::Medium);
        let game = Game::new(&puzzle);

        let hint = game.hint(&mut test_rng()).unwrap();
        assert!(game.cell(hint.position).is_empty());

        // Placing the hinted digit keeps the board solvable.
        let mut grid = game.to_grid();
        grid[hint.position] = Some(hint.digit);
        assert!(solve(&mut grid));
    }

    #[test]
    fn test_hint_on_full_board_returns_none() {
        let puzzle = test_puzzle(Difficulty::Easy);
        let mut game = Game::new(&puzzle);
        for pos in Position::ALL {
            if game.cell(pos).is_empty() {
                let digit = puzzle.solution[pos].expect("solution is complete");
                game.set_digit(pos, digit).unwrap();
            }
        }
        assert!(game.is_solved());
        assert_eq!(game.hint(&mut test_rng()), None);
    }

    #[test]
    fn test_hint_budget_is_enforced() {
        let puzzle = test_puzzle(Difficulty::Expert);
        let mut game = Game::new(&puzzle);
        let mut rng = test_rng();

        for _ in 0..HINT_BUDGET {
            let hint = game.hint(&mut rng).unwrap();
            game.apply_hint(&hint).unwrap();
        }
        assert_eq!(game.hints_remaining(), 0);

        let hint = game.hint(&mut rng).unwrap();
        assert_eq!(game.apply_hint(&hint), Err(GameError::NoHintsRemaining));
    }

    #[test]
    fn test_stale_hint_is_rejected() {
        let puzzle = test_puzzle(Difficulty::Medium);
        let mut game = Game::new(&puzzle);

        let hint = game.hint(&mut test_rng()).unwrap();
        game.set_digit(hint.position, Digit::D1).unwrap();
        assert_eq!(game.apply_hint(&hint), Err(GameError::HintTargetFilled));
    }

    #[test]
    fn test_solving_with_solution_digits() {
        let puzzle = test_puzzle(Difficulty::Easy);
        let mut game = Game::new(&puzzle);
        assert!(!game.is_solved());
        for pos in Position::ALL {
            if game.cell(pos).is_empty() {
                let digit = puzzle.solution[pos].expect("solution is complete");
                game.set_digit(pos, digit).unwrap();
            }
        }
        assert!(game.is_solved());
        assert!(game.conflicts().is_empty());
    }
}
