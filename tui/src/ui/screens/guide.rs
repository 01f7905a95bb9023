use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::ui::{layout::centered_rect, theme::Theme, widgets};

use super::{Action, Screen};

/// (input, explanation) pairs shown in the guide.
const ENTRIES: &[(&str, &str)] = &[
    ("Lights Energy (Wh)", "Energy consumed by lighting fixtures."),
    ("Average Indoor Temperature (°C)", "Affects AC/heater usage."),
    (
        "Average Indoor Humidity (%)",
        "Higher humidity increases cooling load.",
    ),
    ("Hour of Day (0–23)", "Energy usage varies by time."),
    (
        "Day / Month / Weekday",
        "Captures daily and seasonal patterns. Weekday values: 0 → Monday, 6 → Sunday.",
    ),
];

const INTRO: &str = "Predicts household appliance energy consumption (Wh) with a machine \
learning model trained on real household sensor data. Outdoor conditions are not entered: \
the model receives fixed typical values for them, and the single indoor temperature and \
humidity readings stand in for every room.";

/// Explains every form input; any key returns to the previous screen.
pub struct GuideState {
    back: Option<Box<Screen>>,
    scroll: u16,
}

impl GuideState {
    pub fn new(back: Screen) -> Self {
        Self {
            back: Some(Box::new(back)),
            scroll: 0,
        }
    }
}

pub fn handle_key(state: &mut GuideState, key: KeyCode) -> Action {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll = state.scroll.saturating_add(1);
            Action::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll = state.scroll.saturating_sub(1);
            Action::None
        }
        _ => match state.back.take() {
            Some(back) => Action::Transition(*back),
            None => Action::Quit,
        },
    }
}

pub fn draw(f: &mut Frame, state: &GuideState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(70, 85, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Input Information",
            Theme::title().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let mut lines = vec![
        Line::from(Span::styled(INTRO, Theme::dim())),
        Line::from(""),
    ];
    for (input, explanation) in ENTRIES {
        lines.push(Line::from(Span::styled(*input, Theme::title())));
        lines.push(Line::from(Span::styled(*explanation, Theme::text())));
        lines.push(Line::from(""));
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(widgets::panel("Guide"))
            .wrap(Wrap { trim: false })
            .scroll((state.scroll, 0)),
        chunks[1],
    );

    f.render_widget(
        widgets::hint_bar(&[("↑↓", "scroll"), ("any key", "back")]),
        chunks[2],
    );
}
