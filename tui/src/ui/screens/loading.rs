use predictor::AppConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::ui::{layout::centered_rect, theme::Theme, widgets};

/// Drawn once while the model is being provisioned; the download blocks the
/// UI loop so this frame stays up until it finishes.
pub fn draw(f: &mut Frame, config: &AppConfig) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(60, 40, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(outer);

    let message = if config.model_path.exists() {
        "Loading trained ML model..."
    } else {
        "Downloading trained ML model..."
    };

    f.render_widget(
        Paragraph::new(Span::styled(message, Theme::title())).alignment(Alignment::Center),
        chunks[0],
    );

    let lines = vec![
        Line::from(vec![
            Span::styled("source: ", Theme::muted()),
            Span::styled(config.model_url.as_str(), Theme::dim()),
        ]),
        Line::from(vec![
            Span::styled("cache:  ", Theme::muted()),
            Span::styled(config.model_path.display().to_string(), Theme::dim()),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .block(widgets::panel("Model"))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}
