use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{
    form::{FieldId, FieldKind, Focus, FormState, FIELDS},
    session::Session,
};
use crate::ui::{layout, theme::Theme, widgets};

use super::{guide::GuideState, menu::MenuState, Action, Screen};

/// The prediction form together with the session it submits to.
#[derive(Clone)]
pub struct FormScreen {
    pub form: FormState,
    pub session: Session,
    pub show_events: bool,
}

impl FormScreen {
    pub fn new(session: Session) -> Self {
        Self {
            form: FormState::new(),
            session,
            show_events: true,
        }
    }
}

pub fn handle_key(state: &mut FormScreen, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::BackTab => state.form.focus_prev(),
        KeyCode::Down | KeyCode::Tab => state.form.focus_next(),
        KeyCode::Left => state.form.adjust(-1),
        KeyCode::Right => state.form.adjust(1),
        KeyCode::Backspace => state.form.backspace(),
        KeyCode::Enter => {
            let inputs = state.form.to_inputs();
            state.session.submit(inputs);
        }
        KeyCode::Esc => {
            return Action::Transition(Screen::Menu(MenuState::new(state.session.clone())));
        }
        KeyCode::Char(c) if state.form.type_char(c) => {}
        KeyCode::Char('?') => {
            return Action::Transition(Screen::Guide(GuideState::new(Screen::Form(
                state.clone(),
            ))));
        }
        KeyCode::Char('r') => {
            state.form.reset();
            state.session.clear_outcome();
        }
        KeyCode::Char('e') => state.show_events = !state.show_events,
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &FormScreen) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let regions = layout::form(area, state.show_events);

    f.render_widget(widgets::header(&state.session), regions.header);
    draw_fields(f, regions.fields, &state.form);
    draw_button(f, regions.button, state.form.focus() == Focus::PredictButton);
    f.render_widget(widgets::outcome(state.session.outcome()), regions.outcome);

    if let Some(events) = regions.events {
        f.render_widget(
            widgets::events(state.session.logs(), events.height),
            events,
        );
    }

    let footer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(regions.footer);

    f.render_widget(
        widgets::hint_bar(&[
            ("↑↓", "field"),
            ("←→", "adjust"),
            ("enter", "predict"),
            ("r", "reset"),
            ("?", "guide"),
            ("e", "events"),
            ("esc", "menu"),
        ]),
        footer[0],
    );
    f.render_widget(widgets::footer().alignment(Alignment::Right), footer[1]);
}

fn draw_fields(f: &mut Frame, area: Rect, form: &FormState) {
    let block = widgets::panel("Enter Household Conditions");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = FIELDS
        .iter()
        .map(|&id| field_line(form, id, form.focus() == Focus::Field(id)))
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(lines), inner);
}

fn field_line(form: &FormState, id: FieldId, focused: bool) -> Line<'static> {
    let label_style = if focused { Theme::title() } else { Theme::dim() };
    let marker = if focused { "▶ " } else { "  " };

    let value = form.display(id);
    let value_span = match id.kind() {
        FieldKind::Number { .. } if focused => Span::styled(format!("{value}█"), Theme::accent()),
        FieldKind::Number { .. } => Span::styled(value, Theme::text()),
        FieldKind::Slider { range } => Span::styled(
            format!(
                "◀ {value:>2} ▶  {}",
                slider_track(&value, *range.start(), *range.end())
            ),
            if focused { Theme::accent() } else { Theme::text() },
        ),
    };

    Line::from(vec![
        Span::styled(marker, Theme::accent()),
        Span::styled(format!("{:<34}", id.label()), label_style),
        value_span,
    ])
}

/// A compact position indicator like `──●─────`.
fn slider_track(value: &str, start: u32, end: u32) -> String {
    const WIDTH: u32 = 12;
    let value = value.parse::<u32>().unwrap_or(start);
    let span = (end - start).max(1);
    let pos = (value.saturating_sub(start) * (WIDTH - 1)) / span;

    (0..WIDTH)
        .map(|i| if i == pos { '●' } else { '─' })
        .collect()
}

fn draw_button(f: &mut Frame, area: Rect, focused: bool) {
    let (style, border) = if focused {
        (Theme::highlight(), Theme::border_focus())
    } else {
        (Theme::title(), Theme::border())
    };

    let button = Paragraph::new(Span::styled(" Predict Energy Consumption ", style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border),
        );

    f.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use predictor::Model;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn screen() -> FormScreen {
        let model = Model::from_json(
            br#"{"kind": "linear", "feature_names": ["lights", "hour"], "coefficients": [2.0, 1.0], "intercept": 1.0}"#,
        )
        .unwrap();
        FormScreen::new(Session::new(Arc::new(model)))
    }

    #[test]
    fn enter_predicts_from_the_form() {
        let mut state = screen();
        assert!(matches!(handle_key(&mut state, KeyCode::Enter), Action::None));

        let prediction = state.session.outcome().unwrap().as_ref().unwrap();
        assert_eq!(prediction.watt_hours, 60.0);
    }

    #[test]
    fn typed_digits_reach_the_prediction() {
        let mut state = screen();
        handle_key(&mut state, KeyCode::Char('5'));
        handle_key(&mut state, KeyCode::Enter);

        let prediction = state.session.outcome().unwrap().as_ref().unwrap();
        assert_eq!(prediction.watt_hours, 30.0);
    }

    #[test]
    fn reset_clears_form_and_outcome() {
        let mut state = screen();
        handle_key(&mut state, KeyCode::Right);
        handle_key(&mut state, KeyCode::Enter);
        handle_key(&mut state, KeyCode::Char('r'));

        assert!(state.session.outcome().is_none());
        assert_eq!(state.form.display(FieldId::Lights), "20");
    }

    #[test]
    fn guide_and_menu_transitions() {
        let mut state = screen();
        assert!(matches!(
            handle_key(&mut state, KeyCode::Char('?')),
            Action::Transition(Screen::Guide(_))
        ));
        assert!(matches!(
            handle_key(&mut state, KeyCode::Esc),
            Action::Transition(Screen::Menu(_))
        ));
    }

    #[test]
    fn slider_track_marks_the_position() {
        assert_eq!(slider_track("0", 0, 23).chars().next(), Some('●'));
        assert_eq!(slider_track("23", 0, 23).chars().last(), Some('●'));
        assert_eq!(slider_track("6", 1, 12).chars().count(), 12);
    }

    #[test]
    fn renders_prediction_and_tips() {
        let mut state = screen();
        handle_key(&mut state, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(text.contains("Predicted Appliance Energy Consumption: 60.00 Wh"));
        assert!(text.contains("Peak-hour usage detected"));
        assert!(text.contains("Predict Energy Consumption"));
    }
}
