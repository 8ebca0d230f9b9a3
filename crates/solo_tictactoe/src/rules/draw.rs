//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Cell, Player, Position};
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    fn board_from(marks: &str) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (cell, ch) in cells.iter_mut().zip(marks.chars()) {
            *cell = match ch {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from("....X....");
        assert!(!is_full(&board));
        assert_eq!(board.get(Position::Center), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        assert!(is_draw(&board_from("XOXOXXOXO")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X wins the top row on a full board
        assert!(!is_draw(&board_from("XXXOOXOXO")));
    }
}
