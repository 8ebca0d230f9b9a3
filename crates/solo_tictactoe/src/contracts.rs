//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! are checked on every move; postconditions in debug builds.

use super::action::MoveError;
use super::invariants::{InvariantSet, StateInvariants};
use super::state::GameState;
use super::{Cell, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions relating the state before and after the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must not be won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a settled game.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto a marked cell.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition. Game-over takes priority over occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: marked cells are kept and exactly one new mark appears,
/// belonging to the player who moved.
pub struct MonotonicTransition;

impl MonotonicTransition {
    /// Checks the before/after pair.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut added = 0;
        for (old, new) in before.board().cells().iter().zip(after.board().cells()) {
            match (old, new) {
                (Cell::Empty, Cell::Occupied(player)) => {
                    if *player != before.next_player() {
                        warn!(?player, "Mark placed for the wrong player");
                        return false;
                    }
                    added += 1;
                }
                (old, new) if old != new => {
                    warn!(?old, ?new, "Marked cell changed");
                    return false;
                }
                _ => {}
            }
        }

        let valid = added == 1;
        if !valid {
            warn!(added, "Expected exactly one new mark");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Cell is empty
///
/// Postconditions:
/// - Board changes by exactly one new mark
/// - Mark counts and player to move agree
/// - Stored outcome matches the board
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut descriptions = Vec::new();

        if !MonotonicTransition::holds(before, after) {
            descriptions.push("Board changes by exactly one new mark".to_string());
        }

        if let Err(violations) = StateInvariants::check_all(after) {
            descriptions.extend(violations.into_iter().map(|v| v.description));
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameState::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameState::replay(&[Position::Center]).expect("Valid replay");
        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameState::new();
        let after = game.apply_move(Position::Center).expect("Valid move");
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameState::new();
        let mut after = game.apply_move(Position::Center).expect("Valid move");

        // Sneak in a second mark
        after.board.set(Position::TopLeft, Cell::Occupied(Player::O));

        assert!(matches!(
            MoveContract::post(&game, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let game = GameState::replay(&[Position::Center]).expect("Valid replay");
        let mut after = game.apply_move(Position::TopLeft).expect("Valid move");

        after.board.set(Position::Center, Cell::Occupied(Player::O));

        assert!(!MonotonicTransition::holds(&game, &after));
    }
}
