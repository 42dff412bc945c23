//! Difficulty levels and their clue counts.

use std::fmt::{self, Display};

/// Puzzle difficulty, measured purely by clue count.
///
/// Each level maps to a fixed number of givens left on the board out of
/// 81. Difficulty says nothing about which solving techniques a puzzle
/// requires; a "hard" puzzle may still fall to simple elimination. The
/// table below is the generator's only tunable.
///
/// | Level  | Clues |
/// |--------|-------|
/// | Easy   | 35    |
/// | Medium | 30    |
/// | Hard   | 25    |
/// | Expert | 20    |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 35 clues.
    Easy,
    /// 30 clues.
    #[default]
    Medium,
    /// 25 clues.
    Hard,
    /// 20 clues.
    Expert,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Number of clues (givens) a generated puzzle keeps, out of 81.
    #[must_use]
    pub const fn clue_count(self) -> u8 {
        match self {
            Self::Easy => 35,
            Self::Medium => 30,
            Self::Hard => 25,
            Self::Expert => 20,
        }
    }

    /// Number of cells the generator removes from the full solution.
    #[must_use]
    pub const fn cells_to_remove(self) -> u8 {
        81 - self.clue_count()
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        f.write_str(name)
    }
}
