//! Complete game state and its transition rules.

use super::action::MoveError;
use super::contracts::{Contract, MoveContract};
use super::rules::{Outcome, evaluate_outcome};
use super::{Board, Cell, Player, Position, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board, player to move, and the outcome derived from the board.
///
/// A state is never mutated in place by play: [`GameState::apply_move`]
/// returns the successor and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) next_player: Player,
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_player: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns a fresh initial state. Nothing carries over.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn reset(&self) -> Self {
        debug!("Resetting game");
        Self::new()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.outcome.winning_line()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Places the next player's mark at `pos` and returns the resulting state.
    ///
    /// The outcome is re-evaluated before the successor is returned, so a
    /// move can never land on a decided game.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already won or drawn.
    /// - [`MoveError::CellOccupied`] if the cell is already marked.
    #[instrument(skip(self), fields(position = ?pos, player = %self.next_player))]
    pub fn apply_move(&self, pos: Position) -> Result<GameState, MoveError> {
        MoveContract::pre(self, &pos)?;

        let mut board = self.board.clone();
        board.set(pos, Cell::Occupied(self.next_player));
        let outcome = evaluate_outcome(&board);

        let next = GameState {
            board,
            next_player: self.next_player.opponent(),
            outcome,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(outcome = %next.outcome, "Move applied");
        Ok(next)
    }

    /// Replays moves from the initial state.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(GameState::new(), |state, pos| state.apply_move(*pos))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
