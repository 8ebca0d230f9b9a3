//! Outcome classification of a board.

use super::super::{Board, Player, WinningLine};
use super::{check_winner, is_full};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Settled or unsettled result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A player marked a full line.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, line } => write!(f, "Player {} wins on {}", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board: a win on the first complete line, else a draw when
/// full, else in progress.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        return Outcome::Win { player, line };
    }

    if is_full(board) {
        return Outcome::Draw;
    }

    Outcome::InProgress
}
