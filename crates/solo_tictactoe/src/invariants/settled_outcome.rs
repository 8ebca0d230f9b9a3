//! Settled outcome invariant: the stored outcome is the board's outcome.

use super::super::GameState;
use super::super::rules::evaluate_outcome;
use super::Invariant;

/// Invariant: the outcome kept in the state equals a fresh evaluation of
/// the board.
pub struct SettledOutcomeInvariant;

impl Invariant<GameState> for SettledOutcomeInvariant {
    fn holds(game: &GameState) -> bool {
        *game.outcome() == evaluate_outcome(game.board())
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}
