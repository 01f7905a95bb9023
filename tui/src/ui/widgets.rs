use predictor::Severity;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::session::{LogLine, Outcome, Session};

use super::{layout::centered_rect, theme::Theme};

pub fn header(session: &Session) -> Paragraph<'static> {
    let uptime = session.uptime_secs();

    let line1 = Line::from(vec![
        Span::styled("Smart Appliance Energy Consumption Predictor", Theme::title()),
        Span::styled("  |  ", Theme::muted()),
        Span::styled(
            "reduce cost · improve efficiency · support the smart grid",
            Theme::dim(),
        ),
    ]);

    let line2 = Line::from(Span::styled(
        format!(
            "Model: {}  |  Predictions: {}  |  Uptime: {:02}:{:02}",
            session.model_summary(),
            session.predictions(),
            uptime / 60,
            uptime % 60
        ),
        Theme::dim(),
    ));

    Paragraph::new(vec![line1, line2])
        .block(panel("Overview"))
        .wrap(Wrap { trim: true })
}

/// Prediction result and the advisories that fired for it.
pub fn outcome(outcome: Option<&Outcome>) -> Paragraph<'static> {
    let mut lines = Vec::new();

    match outcome {
        None => {
            lines.push(Line::from(Span::styled(
                "Fill in the household conditions and press enter.",
                Theme::muted(),
            )));
        }
        Some(Ok(prediction)) => {
            lines.push(Line::from(Span::styled(prediction.to_string(), Theme::ok())));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Energy Optimization Tips",
                Theme::title(),
            )));

            if prediction.advisories.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No tips for these conditions.",
                    Theme::muted(),
                )));
            }

            for advisory in &prediction.advisories {
                let (marker, style) = match advisory.severity() {
                    Severity::Warning => ("! ", Theme::warn()),
                    Severity::Info => ("i ", Theme::info()),
                };
                lines.push(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(advisory.message(), style),
                ]));
            }
        }
        Some(Err(reason)) => {
            lines.push(Line::from(Span::styled("Prediction failed", Theme::error())));
            lines.push(Line::from(Span::styled(reason.clone(), Theme::text())));
        }
    }

    Paragraph::new(lines)
        .block(panel("Prediction"))
        .wrap(Wrap { trim: true })
}

/// The most recent event lines that fit in `height` rows.
pub fn events(logs: &[LogLine], height: u16) -> Paragraph<'_> {
    let visible = usize::from(height.saturating_sub(2));
    let tail = &logs[logs.len().saturating_sub(visible)..];

    let lines = tail
        .iter()
        .map(|l| {
            let style = match l.level {
                "ERROR" => Theme::error(),
                "TIP" => Theme::info(),
                _ => Theme::dim(),
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), style),
                Span::styled(l.message.as_str(), Theme::text()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(panel("Events"))
        .wrap(Wrap { trim: true })
}

pub fn footer() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "Built with Rust, ratatui & crossterm",
        Theme::muted(),
    ))
}

/// A bordered panel with a styled title.
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(format!(" {title} "))
        .title_style(Theme::title())
}

/// Renders `[key] action` rows centered in `area`.
pub fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let key_col_width = hints
        .iter()
        .map(|(k, _)| k.chars().count() as u16 + 2)
        .max()
        .unwrap_or(8)
        + 2;

    let outer = centered_rect(50, 100, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            hints
                .iter()
                .map(|_| Constraint::Length(1))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(outer);

    for (i, (key, action)) in hints.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(key_col_width), Constraint::Min(0)])
            .split(rows[i]);

        f.render_widget(
            Paragraph::new(Span::styled(format!("[{key}]"), Theme::accent())),
            cols[0],
        );
        f.render_widget(Paragraph::new(Span::styled(*action, Theme::dim())), cols[1]);
    }
}

/// One-line hint bar: `key action  key action ...`.
pub fn hint_bar(hints: &[(&str, &str)]) -> Paragraph<'static> {
    let spans = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(key.to_string(), Theme::dim()),
                Span::styled(format!(" {action}    "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center)
}
