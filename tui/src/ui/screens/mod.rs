pub mod form;
pub mod guide;
pub mod loading;
pub mod menu;
pub mod unavailable;

use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
    /// Provision the model again, e.g. after a failed download.
    Retry,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Form(form::FormScreen),
    Guide(guide::GuideState),
    Unavailable(unavailable::UnavailableState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Form(s) => form::draw(f, s),
            Screen::Guide(s) => guide::draw(f, s),
            Screen::Unavailable(s) => unavailable::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key),
            Screen::Form(s) => form::handle_key(s, key),
            Screen::Guide(s) => guide::handle_key(s, key),
            Screen::Unavailable(s) => unavailable::handle_key(s, key),
        }
    }
}
