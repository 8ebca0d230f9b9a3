//! Solo tic-tac-toe - pure game logic
//!
//! A human plays X against a scripted computer O.
//!
//! # Architecture
//!
//! - **GameState**: board, player to move, derived outcome. Moves are pure
//!   transitions checked by contracts.
//! - **Rules**: win and draw detection over the shared [`WINNING_LINES`] table.
//! - **OpponentPolicy**: the computer's probabilistic, one-ply move choice.
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{GameState, OpponentPolicy, Position, ScriptedDice};
//!
//! let state = GameState::new().apply_move(Position::Center)?;
//! let mut policy = OpponentPolicy::new(0.7, ScriptedDice::new());
//! let reply = policy.choose_move(state.board()).expect("Board has room");
//! let state = state.apply_move(reply)?;
//! assert_eq!(state.board().filled(), 2);
//! # Ok::<(), solo_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod dice;
mod lines;
mod opponent;
mod position;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use action::MoveError;
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MonotonicTransition, MoveContract};
pub use dice::{Dice, ScriptedDice};
pub use lines::{WINNING_LINES, WinningLine};
pub use opponent::{DEFAULT_RANDOM_MOVE_PROBABILITY, OpponentPolicy, find_winning_move};
pub use position::Position;
pub use rules::{Outcome, evaluate_outcome};
pub use state::GameState;
pub use types::{Board, Cell, Player};
