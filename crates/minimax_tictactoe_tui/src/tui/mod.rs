//! Terminal UI for playing against the computer.

mod app;
mod input;
mod scheduler;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use minimax_tictactoe::{ComputerTurn, GameController};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use app::{App, AppAction};
use scheduler::TokioScheduler;

use crate::config::GameConfig;

/// Runs the terminal UI until the player quits.
///
/// With `name` set the name prompt is skipped.
#[instrument(skip(config), fields(delay_ms = *config.computer_delay_ms()))]
pub async fn run_tui(config: &GameConfig, name: Option<String>) -> Result<()> {
    info!("Starting terminal UI");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let controller = GameController::with_delay(TokioScheduler::new(tx), config.computer_delay());
    let mut app = App::new(controller, config.default_player_name().clone());
    if let Some(name) = name {
        app.start_game(&name);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game_loop(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

async fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<TokioScheduler>,
    rx: &mut mpsc::UnboundedReceiver<ComputerTurn>,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(ticket) = rx.try_recv() {
            debug!(?ticket, "Computer turn due");
            app.computer_turn(ticket);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) == AppAction::Quit {
                    return Ok(());
                }
            }
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
