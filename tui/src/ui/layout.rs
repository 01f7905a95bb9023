use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the prediction form screen.
pub struct FormLayout {
    pub header: Rect,
    pub fields: Rect,
    pub button: Rect,
    pub outcome: Rect,
    pub events: Option<Rect>,
    pub footer: Rect,
}

/// Computes the form screen regions.
///
/// ```text
/// header
/// fields  | outcome
/// button  |
/// events (optional)
/// footer
/// ```
pub fn form(area: Rect, show_events: bool) -> FormLayout {
    let (header, body, events, footer) = vertical(area, show_events);
    let (left, outcome) = body_columns(body);
    let (fields, button) = left_column(left);

    FormLayout {
        header,
        fields,
        button,
        outcome,
        events,
        footer,
    }
}

/// Splits into (header, body, events_opt, footer).
fn vertical(area: Rect, show_events: bool) -> (Rect, Rect, Option<Rect>, Rect) {
    let constraints = if show_events {
        vec![
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if show_events {
        (chunks[0], chunks[1], Some(chunks[2]), chunks[3])
    } else {
        (chunks[0], chunks[1], None, chunks[2])
    }
}

/// Splits body into (inputs, outcome).
fn body_columns(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits the inputs column into (fields, button).
fn left_column(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(3)])
        .split(area);

    (rows[0], rows[1])
}

/// A rectangle of the given percentages centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_panel_is_optional() {
        let area = Rect::new(0, 0, 100, 40);

        assert!(form(area, true).events.is_some());
        assert!(form(area, false).events.is_none());
    }

    #[test]
    fn regions_stay_inside_the_screen() {
        let area = Rect::new(0, 0, 120, 40);
        let l = form(area, true);

        for r in [l.header, l.fields, l.button, l.outcome, l.footer] {
            assert!(area.union(r) == area, "{r:?} escapes {area:?}");
        }
        assert_eq!(l.footer.y + l.footer.height, area.height);
    }

    #[test]
    fn centered_rect_is_centered() {
        let r = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!((r.x, r.y, r.width, r.height), (25, 10, 50, 20));
    }
}
