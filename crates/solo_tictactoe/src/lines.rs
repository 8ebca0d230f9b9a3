//! The fixed table of winning lines.
//!
//! Outcome evaluation and the opponent's winning-move search both scan
//! this table, in this order.

use super::position::Position;
use super::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};

/// Three positions that win the game when marked by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// Checks whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The player holding all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        match board.get(a) {
            Cell::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(player)
            }
            _ => None,
        }
    }

    /// The empty cell that would complete this line for `player`.
    ///
    /// Requires the other two cells to be marked by `player`. Checked in the
    /// order (a,b → c), (a,c → b), (b,c → a).
    pub fn completion_for(&self, board: &Board, player: Player) -> Option<Position> {
        let [a, b, c] = self.0;
        let mine = |pos| board.get(pos) == Cell::Occupied(player);
        let open = |pos| board.is_empty(pos);

        if mine(a) && mine(b) && open(c) {
            Some(c)
        } else if mine(a) && mine(c) && open(b) {
            Some(b)
        } else if mine(b) && mine(c) && open(a) {
            Some(a)
        } else {
            None
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// All 8 winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = {
    use Position::*;
    [
        // Rows
        WinningLine::new(TopLeft, TopCenter, TopRight),
        WinningLine::new(MiddleLeft, Center, MiddleRight),
        WinningLine::new(BottomLeft, BottomCenter, BottomRight),
        // Columns
        WinningLine::new(TopLeft, MiddleLeft, BottomLeft),
        WinningLine::new(TopCenter, Center, BottomCenter),
        WinningLine::new(TopRight, MiddleRight, BottomRight),
        // Diagonals
        WinningLine::new(TopLeft, Center, BottomRight),
        WinningLine::new(TopRight, Center, BottomLeft),
    ]
};
