//! Terminal UI for solo tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, command_for, move_cursor};

use crate::config::GameConfig;
use crate::session::GameSession;
use crate::timer::TimerDriver;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use solo_tictactoe::Dice;
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
#[instrument(skip(config))]
pub async fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let app = App::new(GameSession::from_config(config), TimerDriver::new(timer_tx));

    let res = run_app(&mut terminal, app, &mut timer_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Draw, deliver fired timers, then read at most one key.
async fn run_app<D: Dice>(
    terminal: &mut Tui,
    mut app: App<D>,
    timer_rx: &mut mpsc::UnboundedReceiver<crate::timer::TimerToken>,
) -> Result<()> {
    loop {
        let view = app.view();
        let cursor = app.cursor();
        terminal.draw(|f| ui::draw(f, &view, cursor))?;

        while let Ok(token) = timer_rx.try_recv() {
            app.handle_timer(token);
        }

        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key.code);
            }
        } else {
            // Yield so timer tasks can run
            tokio::time::sleep(Duration::from_millis(30)).await;
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
