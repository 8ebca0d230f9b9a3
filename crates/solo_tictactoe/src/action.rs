//! Move rejection reasons.

use super::Position;

/// Error that can occur when validating or applying a move.
///
/// `CellOccupied` and `GameOver` are ordinary, recoverable rejections.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
