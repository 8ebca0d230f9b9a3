//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, WINNING_LINES, WinningLine};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the player and the first fully-marked line in table order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    WINNING_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}
