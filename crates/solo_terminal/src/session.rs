//! A single human-vs-computer game session.
//!
//! The session owns the current [`GameState`], the opponent policy, and the
//! turn timer. Presentation forwards input here and draws [`BoardView`]s;
//! it never touches game state directly.

use crate::config::GameConfig;
use crate::timer::{Scheduled, TimerStage, TimerToken, TurnTimer};
use crate::view::BoardView;
use rand::rngs::StdRng;
use solo_tictactoe::{Dice, GameState, OpponentPolicy, Player, Position};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// The human always plays X.
pub const HUMAN: Player = Player::X;

/// Game session driving the computer's delayed replies.
#[derive(Debug)]
pub struct GameSession<D> {
    state: GameState,
    policy: OpponentPolicy<D>,
    timer: TurnTimer,
    turn_delay: Duration,
    thinking_delay: Duration,
}

impl GameSession<StdRng> {
    /// Builds a session from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let policy = OpponentPolicy::from_seed(*config.random_move_probability(), *config.seed());
        Self::new(policy, config.turn_delay(), config.thinking_delay())
    }
}

impl<D: Dice> GameSession<D> {
    /// Creates a session at the initial state.
    pub fn new(policy: OpponentPolicy<D>, turn_delay: Duration, thinking_delay: Duration) -> Self {
        Self {
            state: GameState::new(),
            policy,
            timer: TurnTimer::new(),
            turn_delay,
            thinking_delay,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether an opponent move is scheduled.
    pub fn opponent_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Render model for the current frame.
    pub fn view(&self) -> BoardView {
        BoardView::render(&self.state, self.opponent_pending())
    }

    /// Human activated a cell.
    ///
    /// Ignored unless it is the human's turn, the game is live, and the cell
    /// is empty. Returns the delay to start when the computer is up next.
    #[instrument(skip(self), fields(generation = self.timer.generation()))]
    pub fn on_cell_activated(&mut self, pos: Position) -> Option<Scheduled> {
        if self.state.next_player() != HUMAN || self.opponent_pending() {
            debug!("Not the human's turn, ignoring");
            return None;
        }

        match self.state.apply_move(pos) {
            Ok(next) => {
                info!(position = ?pos, "Human moved");
                self.commit(next)
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                None
            }
        }
    }

    /// Human asked for a new game. Only honoured once the game has ended.
    #[instrument(skip(self))]
    pub fn on_reset_requested(&mut self) -> bool {
        if !self.state.is_over() {
            debug!("Game still running, ignoring reset");
            return false;
        }
        self.reset();
        true
    }

    /// Replaces the state with a fresh game and invalidates any pending timer.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("New game");
        self.state = self.state.reset();
        self.timer.invalidate();
    }

    /// A timer fired. Stale tokens are dropped.
    ///
    /// A settle token schedules the thinking delay; a think token plays the
    /// computer's move.
    #[instrument(skip(self), fields(generation = self.timer.generation()))]
    pub fn on_timer(&mut self, token: TimerToken) -> Option<Scheduled> {
        if !self.timer.take(token) {
            debug!(?token, "Stale timer ignored");
            return None;
        }

        if self.state.is_over() || self.state.next_player() != self.policy.mark() {
            debug!("Opponent turn no longer applies");
            return None;
        }

        match token.stage() {
            TimerStage::Settle => {
                let token = self.timer.schedule(TimerStage::Think);
                Some(Scheduled::new(token, self.thinking_delay))
            }
            TimerStage::Think => self.play_opponent(),
        }
    }

    fn play_opponent(&mut self) -> Option<Scheduled> {
        let Some(pos) = self.policy.choose_move(self.state.board()) else {
            debug!("Board full, opponent passes");
            return None;
        };

        match self.state.apply_move(pos) {
            Ok(next) => {
                info!(position = ?pos, "Computer moved");
                self.commit(next)
            }
            Err(e) => {
                debug!(error = %e, "Opponent move rejected");
                None
            }
        }
    }

    /// Installs a new state. Any pending timer is from the old state and
    /// is invalidated.
    fn commit(&mut self, next: GameState) -> Option<Scheduled> {
        self.state = next;
        self.timer.invalidate();

        if let Some(winner) = self.state.winner() {
            info!(%winner, board = %self.state.board().display(), "Game won");
            return None;
        }
        if self.state.is_over() {
            info!(board = %self.state.board().display(), "Game drawn");
            return None;
        }

        if self.state.next_player() == self.policy.mark() {
            let token = self.timer.schedule(TimerStage::Settle);
            Some(Scheduled::new(token, self.turn_delay))
        } else {
            None
        }
    }
}
