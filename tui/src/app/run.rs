use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use predictor::AppConfig;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::state::session::Session;
use crate::ui::screens::{loading, menu, unavailable, Action, Screen};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI application.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails. Model failures are
/// shown on screen instead.
pub fn run(config: &AppConfig) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut screen = start(&mut terminal, config)?;

    loop {
        terminal.draw(|f| screen.draw(f))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code) {
                    Action::Quit => break,
                    Action::Retry => screen = start(&mut terminal, config)?,
                    Action::Transition(next) => screen = next,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    log::info!("exiting");
    Ok(())
}

/// Provisions the model behind a loading frame and picks the first screen.
fn start<B: Backend>(terminal: &mut Terminal<B>, config: &AppConfig) -> Result<Screen> {
    terminal.draw(|f| loading::draw(f, config))?;

    let screen = match predictor::start(config) {
        Ok(model) => Screen::Menu(menu::MenuState::new(Session::new(model))),
        Err(e) => {
            log::error!("{e}");
            Screen::Unavailable(unavailable::UnavailableState::new(&e))
        }
    };

    Ok(screen)
}
