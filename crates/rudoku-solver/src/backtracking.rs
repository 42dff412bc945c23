//! Depth-first backtracking over the grid's empty cells.

use rudoku_core::{Digit, DigitSet, Grid, Position};

/// The order in which the solver tries candidate digits.
///
/// Ascending order gives the canonical deterministic search; the generator
/// shuffles an order per puzzle so that solving the empty grid does not
/// always produce the same solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitOrder {
    digits: [Digit; 9],
}

impl DigitOrder {
    /// Digits 1-9 in ascending order.
    pub const ASCENDING: Self = Self { digits: Digit::ALL };

    /// Creates an order from an explicit digit array.
    ///
    /// The array should contain each digit exactly once; an order with
    /// repeats omits digits from the search and can make solvable grids
    /// appear unsolvable.
    #[must_use]
    pub const fn new(digits: [Digit; 9]) -> Self {
        Self { digits }
    }

    /// Returns the digits in trial order.
    #[must_use]
    pub const fn digits(&self) -> &[Digit; 9] {
        &self.digits
    }

    /// Mutable access to the trial order, for shuffling.
    pub const fn digits_mut(&mut self) -> &mut [Digit; 9] {
        &mut self.digits
    }
}

impl Default for DigitOrder {
    fn default() -> Self {
        Self::ASCENDING
    }
}

/// One level of the search: an empty cell and the digits already tried
/// there.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Position,
    tried: DigitSet,
}

impl Frame {
    const UNUSED: Self = Self::at(Position::ALL[0]);

    const fn at(pos: Position) -> Self {
        Self {
            pos,
            tried: DigitSet::EMPTY,
        }
    }
}

/// Solves the grid in place, trying digits in ascending order.
///
/// See [`solve_ordered`] for the full contract.
///
/// # Examples
///
/// ```
/// use rudoku_core::Grid;
/// use rudoku_solver::solve;
///
/// let mut grid: Grid = "\
///     53..7....6..195....98....6.8...6...34..8.3..1\
///     7...2...6.6....28....419..5....8..79"
///     .parse()
///     .unwrap();
/// assert!(solve(&mut grid));
/// assert!(grid.is_solved());
/// ```
pub fn solve(grid: &mut Grid) -> bool {
    solve_ordered(grid, &DigitOrder::ASCENDING)
}

/// Solves the grid in place, trying digits in the given order.
///
/// On `true` the grid has been filled to a complete, conflict-free
/// solution. On `false` no solution exists under the trial order and every
/// speculative placement has been undone, so the grid compares equal to
/// its entry state. A grid with no empty cells succeeds trivially.
///
/// The filled cells of the input are assumed to be mutually conflict-free
/// (see [`Grid::conflicts`]); on an already inconsistent grid the result
/// is unspecified. The search runs to completion with no cancellation;
/// worst-case time is exponential, though grids reachable from generated
/// puzzles solve quickly in practice.
pub fn solve_ordered(grid: &mut Grid, order: &DigitOrder) -> bool {
    // One frame per cell bounds the search stack at 81 entries; no native
    // recursion.
    let mut stack = [Frame::UNUSED; 81];
    let mut depth: usize;

    match grid.first_empty() {
        Some(pos) => {
            stack[0] = Frame::at(pos);
            depth = 1;
        }
        None => return true,
    }

    while depth > 0 {
        let frame = &mut stack[depth - 1];
        // A failed descent leaves this frame's speculative digit behind;
        // clear it before trying the next candidate.
        grid[frame.pos] = None;

        let mut placed = None;
        for &digit in order.digits() {
            if frame.tried.contains(digit) {
                continue;
            }
            frame.tried.insert(digit);
            if grid.allows(frame.pos, digit) {
                placed = Some(digit);
                break;
            }
        }

        let pos = frame.pos;
        match placed {
            None => depth -= 1,
            Some(digit) => {
                grid[pos] = Some(digit);
                match grid.first_empty() {
                    // Frames 0..depth all hold placed digits, so the next
                    // empty cell leaves room for this push.
                    Some(next) => {
                        stack[depth] = Frame::at(next);
                        depth += 1;
                    }
                    None => return true,
                }
            }
        }
    }
    false
}
