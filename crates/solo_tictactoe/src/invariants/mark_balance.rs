//! Mark balance invariant: X moves first and players alternate.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X has as many marks as O, or one more, and the player to
/// move is the one implied by the counts.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);

        match (x == o, x == o + 1) {
            (true, _) => game.next_player() == Player::X,
            (_, true) => game.next_player() == Player::O,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MarkBalanceInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .expect("Valid replay");

        assert!(MarkBalanceInvariant::holds(&game));
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::replay(&[Position::TopLeft]).expect("Valid replay");
        game.board.set(Position::Center, Cell::Occupied(Player::X));
        assert!(!MarkBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut game = GameState::new();
        game.next_player = Player::O;
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
