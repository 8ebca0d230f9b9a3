//! Application state: session, cursor, and the timer driver.

use super::input::{Command, command_for, move_cursor};
use crate::session::GameSession;
use crate::timer::{Scheduled, TimerDriver, TimerToken};
use crate::view::BoardView;
use crossterm::event::KeyCode;
use solo_tictactoe::{Dice, Position};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App<D> {
    session: GameSession<D>,
    driver: TimerDriver,
    cursor: Position,
    should_quit: bool,
}

impl<D: Dice> App<D> {
    /// Creates an application around a session.
    pub fn new(session: GameSession<D>, driver: TimerDriver) -> Self {
        Self {
            session,
            driver,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render model for the current frame.
    pub fn view(&self) -> BoardView {
        self.session.view()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = command_for(key) else {
            return;
        };
        debug!(?command, "Key command");

        match command {
            Command::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::ActivateCursor => self.activate(self.cursor),
            Command::Activate(pos) => {
                self.cursor = pos;
                self.activate(pos);
            }
            Command::Reset => {
                if self.session.on_reset_requested() {
                    self.driver.cancel();
                }
            }
            Command::Quit => self.should_quit = true,
        }
    }

    /// Handles a fired timer.
    #[instrument(skip(self))]
    pub fn handle_timer(&mut self, token: TimerToken) {
        let next = self.session.on_timer(token);
        self.follow(next);
    }

    fn activate(&mut self, pos: Position) {
        let next = self.session.on_cell_activated(pos);
        self.follow(next);
    }

    fn follow(&mut self, next: Option<Scheduled>) {
        match next {
            Some(scheduled) => self.driver.start(scheduled),
            None if !self.session.opponent_pending() => self.driver.cancel(),
            None => {}
        }
    }
}
