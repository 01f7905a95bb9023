use std::error::Error;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::{layout::centered_rect, theme::Theme, widgets};

use super::Action;

/// Shown when the model could not be provisioned at startup.
pub struct UnavailableState {
    /// The error followed by each of its causes.
    chain: Vec<String>,
}

impl UnavailableState {
    pub fn new(err: &dyn Error) -> Self {
        let mut chain = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        Self { chain }
    }

    #[cfg(test)]
    pub fn from_message(msg: impl Into<String>) -> Self {
        Self {
            chain: vec![msg.into()],
        }
    }
}

pub fn handle_key(_state: &mut UnavailableState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('r') | KeyCode::Enter => Action::Retry,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &UnavailableState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(65, 60, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1), // spacer
            Constraint::Min(4),    // reason box
            Constraint::Length(1), // spacer
            Constraint::Length(3), // hints
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Model Unavailable",
            Theme::error().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "The trained model could not be downloaded or loaded. Predictions are disabled.",
            Theme::muted(),
        )),
        chunks[1],
    );

    let lines = state
        .chain
        .iter()
        .enumerate()
        .map(|(i, msg)| {
            let prefix = if i == 0 { "" } else { "caused by: " };
            Line::from(vec![
                Span::styled(prefix, Theme::muted()),
                Span::styled(msg.as_str(), Theme::text()),
            ])
        })
        .collect::<Vec<_>>();

    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::error())
                    .title(" Reason ")
                    .title_style(Theme::error()),
            )
            .wrap(Wrap { trim: true }),
        chunks[3],
    );

    widgets::render_hints(
        f,
        chunks[5],
        &[("r / enter", "retry"), ("q / esc", "quit")],
    );
}
