//! The computer opponent's move policy.
//!
//! Deliberately weak: it only sometimes takes an immediate win, never
//! blocks the human, and never looks past one ply.

use super::dice::Dice;
use super::{Board, Player, Position, WINNING_LINES};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Default chance that the opponent skips the winning-move search.
pub const DEFAULT_RANDOM_MOVE_PROBABILITY: f64 = 0.7;

/// Finds a cell that completes a line for `player`.
///
/// Scans [`WINNING_LINES`] in order and returns the first completion.
#[instrument(skip(board))]
pub fn find_winning_move(board: &Board, player: Player) -> Option<Position> {
    WINNING_LINES
        .iter()
        .find_map(|line| line.completion_for(board, player))
}

/// Chooses moves for the computer player.
#[derive(Debug, Clone)]
pub struct OpponentPolicy<D> {
    mark: Player,
    random_move_probability: f64,
    dice: D,
}

impl OpponentPolicy<StdRng> {
    /// Policy backed by a seeded RNG, or OS entropy when `seed` is `None`.
    pub fn from_seed(random_move_probability: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(random_move_probability, rng)
    }
}

impl<D: Dice> OpponentPolicy<D> {
    /// Creates a policy playing O.
    ///
    /// A roll below `random_move_probability` goes straight to a random
    /// move; otherwise an immediate win is tried first.
    pub fn new(random_move_probability: f64, dice: D) -> Self {
        Self {
            mark: Player::O,
            random_move_probability,
            dice,
        }
    }

    /// The mark this policy plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// The probability of skipping the winning-move search.
    pub fn random_move_probability(&self) -> f64 {
        self.random_move_probability
    }

    /// Chooses a move, or `None` when the board is full.
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    pub fn choose_move(&mut self, board: &Board) -> Option<Position> {
        let available = board.available();
        if available.is_empty() {
            debug!("No move available");
            return None;
        }

        let roll = self.dice.roll();
        if roll >= self.random_move_probability {
            if let Some(pos) = find_winning_move(board, self.mark) {
                debug!(roll, position = ?pos, "Taking winning move");
                return Some(pos);
            }
            debug!(roll, "No winning move, falling back to random");
        }

        let pos = available[self.dice.pick(available.len())];
        debug!(roll, position = ?pos, "Random move");
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::rules::{Outcome, evaluate_outcome};
    use crate::{Cell, GameState};

    fn board_with(o: &[usize], x: &[usize]) -> Board {
        let mut cells = [Cell::Empty; 9];
        for &i in o {
            cells[i] = Cell::Occupied(Player::O);
        }
        for &i in x {
            cells[i] = Cell::Occupied(Player::X);
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_full_board_no_move() {
        let board = board_with(&[1, 3, 5, 6], &[0, 2, 4, 7, 8]);
        let mut policy = OpponentPolicy::new(0.7, ScriptedDice::new().with_rolls([0.99]));
        assert_eq!(policy.choose_move(&board), None);
    }

    #[test]
    fn test_winning_branch_completes_row() {
        let board = board_with(&[0, 1], &[4, 8]);
        let mut policy = OpponentPolicy::new(0.7, ScriptedDice::new().with_rolls([0.7]));
        assert_eq!(policy.choose_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_random_branch_ignores_win() {
        let board = board_with(&[0, 1], &[4, 8]);
        // Available: 2,3,5,6,7; pick index 1 -> 3
        let dice = ScriptedDice::new().with_rolls([0.69]).with_picks([1]);
        let mut policy = OpponentPolicy::new(0.7, dice);
        assert_eq!(policy.choose_move(&board), Some(Position::MiddleLeft));
    }

    #[test]
    fn test_no_win_falls_back_to_random() {
        let board = board_with(&[0], &[4]);
        let dice = ScriptedDice::new().with_rolls([0.95]).with_picks([0]);
        let mut policy = OpponentPolicy::new(0.7, dice);
        assert_eq!(policy.choose_move(&board), Some(Position::TopCenter));
    }

    #[test]
    fn test_never_blocks_human() {
        // X threatens the top row; O has no win and picks at random
        let board = board_with(&[4], &[0, 1]);
        assert_eq!(find_winning_move(&board, Player::O), None);
        let dice = ScriptedDice::new().with_rolls([0.99]).with_picks([5]);
        let mut policy = OpponentPolicy::new(0.7, dice);
        assert_eq!(policy.choose_move(&board), Some(Position::BottomRight));
    }

    #[test]
    fn test_winning_move_for_every_line() {
        for line in WINNING_LINES {
            for missing in line.positions() {
                let o: Vec<usize> = line
                    .positions()
                    .iter()
                    .filter(|p| **p != missing)
                    .map(|p| p.index())
                    .collect();
                let mut board = board_with(&o, &[]);
                let pos = find_winning_move(&board, Player::O).expect("Winning move");
                assert_eq!(pos, missing);

                board.set(pos, Cell::Occupied(Player::O));
                assert_eq!(
                    evaluate_outcome(&board),
                    Outcome::Win {
                        player: Player::O,
                        line
                    }
                );
            }
        }
    }

    #[test]
    fn test_seeded_policy_only_picks_empty_cells() {
        let mut policy = OpponentPolicy::from_seed(0.7, Some(11));
        let mut state = GameState::new();
        while !state.is_over() {
            let pos = match state.next_player() {
                Player::X => state.board().available()[0],
                Player::O => policy.choose_move(state.board()).expect("Cell available"),
            };
            assert!(state.board().is_empty(pos));
            state = state.apply_move(pos).expect("Legal move");
        }
    }
}
