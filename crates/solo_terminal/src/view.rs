//! Render model derived from game state.
//!
//! The renderer draws a [`BoardView`] and nothing else, so no game logic
//! leaks into presentation.

use derive_getters::Getters;
use solo_tictactoe::{Cell, GameState, Outcome, Position, WinningLine};

/// Everything the screen shows for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    /// Marks in row-major order.
    cells: [Cell; 9],
    /// Status line text.
    status: String,
    /// Completed line to highlight, if any.
    winning_line: Option<WinningLine>,
    /// Whether an opponent move is scheduled.
    opponent_thinking: bool,
    /// Whether "play again" is offered.
    can_reset: bool,
}

impl BoardView {
    /// Builds the view for `state`, given whether an opponent move is pending.
    pub fn render(state: &GameState, opponent_pending: bool) -> Self {
        Self {
            cells: *state.board().cells(),
            status: status_text(state),
            winning_line: state.winning_line(),
            opponent_thinking: opponent_pending && !state.is_over(),
            can_reset: state.is_over(),
        }
    }

    /// Cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Whether `pos` is part of the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }
}

/// Status line: winner, draw, or whose turn it is.
pub fn status_text(state: &GameState) -> String {
    match state.outcome() {
        Outcome::Win { player, .. } => format!("Winner: {}", player),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::InProgress => format!("Next player: {}", state.next_player().label()),
    }
}
