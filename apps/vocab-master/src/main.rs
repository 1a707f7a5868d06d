//! Vocab Master - vocabulary games generated from your own word list.
//!
//! Features:
//! - Paste a `word|part of speech|definition|pronunciation|example|theme` list
//! - Seven activities: spelling, meaning match, grammar, story, themes,
//!   quiz and flashcards
//! - Score and level tracking for the session

mod app;
mod config;
mod logging;
mod ui;

use anyhow::Result;
use app::App;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

fn main() -> Result<()> {
    let config = Config::load();
    let log_guard = logging::init_tracing(&config);
    if log_guard.is_some() {
        tracing::info!("vocab-master starting");
    }
    if Config::config_path().is_some_and(|p| !p.exists()) {
        if let Err(err) = config.save() {
            tracing::warn!(%err, "could not write default config");
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!(score = app.session.state().score, level = app.session.state().level, "session ended");
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || (app.can_quit() && key.code == KeyCode::Char('q')) {
                    return Ok(());
                }
                app.handle_key(key);
            }
        }
    }
}
