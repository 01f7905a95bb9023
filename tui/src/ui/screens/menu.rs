use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::session::Session;
use crate::ui::{layout::centered_rect, theme::Theme, widgets};

use super::{form::FormScreen, guide::GuideState, Action, Screen};

const LOGO: &str = r#"
 ██╗  ██╗██╗    ██╗██╗  ██╗
 ██║ ██╔╝██║    ██║██║  ██║
 █████╔╝ ██║ █╗ ██║███████║
 ██╔═██╗ ██║███╗██║██╔══██║
 ██║  ██╗╚███╔███╔╝██║  ██║
 ╚═╝  ╚═╝ ╚══╝╚══╝ ╚═╝  ╚═╝

smart appliance energy predictor
"#;

const MENU_ITEMS: &[&str] = &["Predict Energy Consumption", "Input Guide", "Quit"];

#[derive(Clone)]
pub struct MenuState {
    pub selected: usize,
    session: Session,
}

impl MenuState {
    pub fn new(session: Session) -> Self {
        Self {
            selected: 0,
            session,
        }
    }
}

pub fn handle_key(state: &mut MenuState, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected < MENU_ITEMS.len() - 1 {
                state.selected += 1;
            }
            Action::None
        }
        KeyCode::Enter => match state.selected {
            0 => Action::Transition(Screen::Form(FormScreen::new(state.session.clone()))),
            1 => Action::Transition(Screen::Guide(GuideState::new(Screen::Menu(
                state.clone(),
            )))),
            2 => Action::Quit,
            _ => Action::None,
        },
        KeyCode::Char('?') => {
            Action::Transition(Screen::Guide(GuideState::new(Screen::Menu(state.clone()))))
        }
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &MenuState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(60, 80, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(1),
            Constraint::Length(MENU_ITEMS.len() as u16 * 2 + 2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(outer);

    draw_logo(f, chunks[0]);
    draw_menu(f, chunks[2], state);
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("model: {}", state.session.model_summary()),
            Theme::muted(),
        ))
        .alignment(Alignment::Center),
        chunks[3],
    );
    f.render_widget(
        widgets::hint_bar(&[
            ("↑↓ / j k", "navigate"),
            ("enter", "select"),
            ("?", "guide"),
            ("q", "quit"),
        ]),
        chunks[4],
    );
}

fn draw_logo(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, Theme::title())))
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_menu(f: &mut Frame, area: Rect, state: &MenuState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" MENU ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let item_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            MENU_ITEMS
                .iter()
                .map(|_| Constraint::Length(2))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (i, (label, item_area)) in MENU_ITEMS.iter().zip(item_areas.iter()).enumerate() {
        let (prefix, style) = if i == state.selected {
            ("▶ ", Theme::title().add_modifier(Modifier::BOLD))
        } else {
            ("  ", Theme::dim())
        };

        let line = Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(*label, style),
        ]);

        f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), *item_area);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use predictor::Model;

    use super::*;

    fn menu() -> MenuState {
        let model = Model::from_json(
            br#"{"kind": "linear", "feature_names": ["lights"], "coefficients": [1.0], "intercept": 0.0}"#,
        )
        .unwrap();
        MenuState::new(Session::new(Arc::new(model)))
    }

    #[test]
    fn selection_stays_within_items() {
        let mut state = menu();
        handle_key(&mut state, KeyCode::Up);
        assert_eq!(state.selected, 0);

        for _ in 0..10 {
            handle_key(&mut state, KeyCode::Down);
        }
        assert_eq!(state.selected, MENU_ITEMS.len() - 1);
    }

    #[test]
    fn enter_routes_to_each_item() {
        let mut state = menu();
        assert!(matches!(
            handle_key(&mut state, KeyCode::Enter),
            Action::Transition(Screen::Form(_))
        ));

        state.selected = 1;
        assert!(matches!(
            handle_key(&mut state, KeyCode::Enter),
            Action::Transition(Screen::Guide(_))
        ));

        state.selected = 2;
        assert!(matches!(handle_key(&mut state, KeyCode::Enter), Action::Quit));
    }
}
