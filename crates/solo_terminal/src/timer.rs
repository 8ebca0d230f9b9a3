//! Cancellable turn timers.
//!
//! [`TurnTimer`] is the bookkeeping half: it hands out tokens and decides
//! whether a fired token still applies. [`TimerDriver`] is the tokio half:
//! it sleeps and delivers tokens over a channel, aborting the previous
//! sleep whenever a new one supersedes it.

use derive_getters::Getters;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, trace};

/// Which delay a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerStage {
    /// Pause after the human move, before the opponent starts its turn.
    Settle,
    /// The opponent's deliberation delay; firing applies its move.
    Think,
}

/// Proof of a scheduled delay, valid only for the generation it was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, derive_new::new)]
pub struct TimerToken {
    /// Generation the token was issued in.
    generation: u64,
    /// Delay the token belongs to.
    stage: TimerStage,
}

/// A token paired with how long to wait before delivering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct Scheduled {
    /// Token to deliver.
    token: TimerToken,
    /// Wait before delivery.
    delay: Duration,
}

/// Tracks the single pending timer.
///
/// Every state change calls [`TurnTimer::invalidate`], which bumps the
/// generation. Tokens from an older generation are never accepted.
#[derive(Debug, Default)]
pub struct TurnTimer {
    generation: u64,
    pending: Option<TimerToken>,
}

impl TurnTimer {
    /// Creates an idle timer at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a token is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Issues a token for `stage`, replacing any outstanding one.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn schedule(&mut self, stage: TimerStage) -> TimerToken {
        let token = TimerToken::new(self.generation, stage);
        if let Some(old) = self.pending.replace(token) {
            debug!(?old, "Superseded pending timer");
        }
        token
    }

    /// Drops the outstanding token and moves to a new generation.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn invalidate(&mut self) {
        self.generation += 1;
        if let Some(old) = self.pending.take() {
            debug!(?old, "Invalidated pending timer");
        }
    }

    /// Consumes `token` if it is the outstanding one. Returns false for
    /// stale or unknown tokens.
    pub fn take(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            trace!(?token, pending = ?self.pending, "Rejected stale token");
            false
        }
    }
}

/// Runs at most one sleeping task that delivers a token when it wakes.
#[derive(Debug)]
pub struct TimerDriver {
    tx: mpsc::UnboundedSender<TimerToken>,
    handle: Option<JoinHandle<()>>,
}

impl TimerDriver {
    /// Creates a driver delivering fired tokens to `tx`.
    pub fn new(tx: mpsc::UnboundedSender<TimerToken>) -> Self {
        Self { tx, handle: None }
    }

    /// Starts the delay, aborting any earlier one.
    #[instrument(skip(self, scheduled), fields(token = ?scheduled.token(), delay = ?scheduled.delay()))]
    pub fn start(&mut self, scheduled: Scheduled) {
        self.cancel();
        let tx = self.tx.clone();
        let token = *scheduled.token();
        let delay = *scheduled.delay();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(token).is_err() {
                debug!(?token, "Timer receiver closed");
            }
        }));
    }

    /// Aborts the running delay, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}
