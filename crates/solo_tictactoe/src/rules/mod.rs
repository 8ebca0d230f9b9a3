//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Rules are separated from state storage so
//! the contract layer and the opponent can reuse them.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate_outcome};
pub use win::check_winner;
