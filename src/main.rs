//! SavePass - Login List Viewer
//!
//! A read-only TUI for browsing locally stored login entries.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod input;
mod logins;
mod store;
mod ui;

use app::{App, AppConfig};
use store::FileStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let store_path = args.get(1).map(PathBuf::from);

    let mut config = AppConfig::default();
    if let Some(path) = store_path {
        config.store_path = path;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let store = FileStore::new(config.store_path.clone());
    let mut app = App::new(config, Box::new(store));

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    // The screen is becoming visible for the first time.
    app.reload()?;

    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key_event(key)? {
                        break;
                    }
                }
                // Every focus gain reloads from the store.
                Event::FocusGained => app.reload()?,
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
