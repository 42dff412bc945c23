//! Game session errors.

use derive_more::{Display, Error};

/// Errors from game session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is a given and cannot be modified.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The hint budget is exhausted.
    #[display("no hints remaining")]
    NoHintsRemaining,
    /// A hint was applied to a cell the player has since filled.
    #[display("hint target cell is no longer empty")]
    HintTargetFilled,
}
