//! Timer delivery under tokio's paused clock.

use crossterm::event::KeyCode;
use solo_terminal::{App, GameSession, Scheduled, TimerDriver, TimerStage, TurnTimer};
use solo_tictactoe::{OpponentPolicy, Player, ScriptedDice};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, timeout};

#[tokio::test(start_paused = true)]
async fn test_token_delivered_after_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver = TimerDriver::new(tx);
    let mut timer = TurnTimer::new();
    let token = timer.schedule(TimerStage::Settle);

    let start = Instant::now();
    driver.start(Scheduled::new(token, Duration::from_millis(100)));

    assert_eq!(rx.recv().await, Some(token));
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_prevents_delivery() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver = TimerDriver::new(tx);
    let mut timer = TurnTimer::new();
    let token = timer.schedule(TimerStage::Think);

    driver.start(Scheduled::new(token, Duration::from_millis(1000)));
    driver.cancel();

    assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_new_start_supersedes_previous() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver = TimerDriver::new(tx);
    let mut timer = TurnTimer::new();
    let slow = timer.schedule(TimerStage::Think);
    let fast = timer.schedule(TimerStage::Settle);

    driver.start(Scheduled::new(slow, Duration::from_millis(1000)));
    driver.start(Scheduled::new(fast, Duration::from_millis(100)));

    assert_eq!(rx.recv().await, Some(fast));
    assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_stale_delivery_after_reset_is_ignored() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    // Driver kept running on purpose; the session must still reject the token
    let mut driver = TimerDriver::new(tx);
    let mut session = GameSession::new(
        OpponentPolicy::new(0.7, ScriptedDice::new()),
        Duration::from_millis(100),
        Duration::from_millis(1000),
    );

    let settle = session
        .on_cell_activated(solo_tictactoe::Position::Center)
        .expect("O to move");
    driver.start(settle);
    session.reset();

    let fired = rx.recv().await.expect("Token delivered");
    assert!(session.on_timer(fired).is_none());
    assert_eq!(session.state().board().filled(), 0);
    assert_eq!(session.state().next_player(), Player::X);
}

#[tokio::test(start_paused = true)]
async fn test_app_completes_opponent_turn() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let session = GameSession::new(
        OpponentPolicy::new(0.7, ScriptedDice::new()),
        Duration::from_millis(100),
        Duration::from_millis(1000),
    );
    let mut app = App::new(session, TimerDriver::new(tx));

    let start = Instant::now();
    app.handle_key(KeyCode::Char('5'));
    assert!(*app.view().opponent_thinking());

    while *app.view().opponent_thinking() {
        let token = rx.recv().await.expect("Token delivered");
        app.handle_timer(token);
    }

    assert!(start.elapsed() >= Duration::from_millis(1100));
    let view = app.view();
    assert_eq!(view.cells().iter().filter(|c| c.mark().is_some()).count(), 2);
    assert_eq!(view.status(), "Next player: X (You)");
}
