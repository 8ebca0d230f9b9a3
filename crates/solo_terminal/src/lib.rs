//! Solo tic-tac-toe in the terminal.
//!
//! A human plays X against a scripted computer O.
//!
//! # Architecture
//!
//! - **Session**: owns the game state and schedules the computer's replies
//! - **Timer**: cancellable delays; stale replies never land on a newer board
//! - **View**: pure render model handed to the terminal UI
//! - **Config**: TOML knobs for the opponent and delays

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;
mod timer;
mod tui;
mod view;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use session::{GameSession, HUMAN};
pub use timer::{Scheduled, TimerDriver, TimerStage, TimerToken, TurnTimer};
pub use tui::{App, Command, command_for, move_cursor, run_tui};
pub use view::{BoardView, status_text};
