use std::ops::RangeInclusive;

use predictor::{
    inputs::{DAY_RANGE, HOUR_RANGE, MONTH_RANGE, WEEKDAY_RANGE},
    HouseholdInputs, PredictorError,
};

/// The form's input fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Lights,
    Temperature,
    Humidity,
    Hour,
    Day,
    Month,
    Weekday,
}

pub const FIELDS: [FieldId; 7] = [
    FieldId::Lights,
    FieldId::Temperature,
    FieldId::Humidity,
    FieldId::Hour,
    FieldId::Day,
    FieldId::Month,
    FieldId::Weekday,
];

/// How a field is edited.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free numeric entry, stepped with ←/→ and floored at `min` if set.
    Number { min: Option<f64>, step: f64 },
    /// Integer picked within a closed range.
    Slider { range: RangeInclusive<u32> },
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            Self::Lights => "Lights Energy (Wh)",
            Self::Temperature => "Average Indoor Temperature (°C)",
            Self::Humidity => "Average Indoor Humidity (%)",
            Self::Hour => "Hour of Day",
            Self::Day => "Day of Month",
            Self::Month => "Month",
            Self::Weekday => "Weekday (0 = Monday, 6 = Sunday)",
        }
    }

    /// Name used in validation messages.
    pub fn key(self) -> &'static str {
        match self {
            Self::Lights => "lights",
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Weekday => "weekday",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Lights => FieldKind::Number {
                min: Some(0.0),
                step: 1.0,
            },
            Self::Temperature => FieldKind::Number {
                min: None,
                step: 0.5,
            },
            Self::Humidity => FieldKind::Number {
                min: None,
                step: 1.0,
            },
            Self::Hour => FieldKind::Slider { range: HOUR_RANGE },
            Self::Day => FieldKind::Slider { range: DAY_RANGE },
            Self::Month => FieldKind::Slider { range: MONTH_RANGE },
            Self::Weekday => FieldKind::Slider {
                range: WEEKDAY_RANGE,
            },
        }
    }
}

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    PredictButton,
}

/// Editable form contents.
///
/// Number fields keep the raw text the user typed so partially entered
/// values such as `"-"` or `"12."` survive between keystrokes; they are only
/// parsed on submission. The first character typed into a freshly focused
/// number field replaces its contents.
#[derive(Debug, Clone)]
pub struct FormState {
    lights: String,
    temperature: String,
    humidity: String,
    hour: u32,
    day: u32,
    month: u32,
    weekday: u32,
    focus: Focus,
    replace_on_type: bool,
}

impl FormState {
    /// Creates a form holding the default household conditions.
    pub fn new() -> Self {
        let d = HouseholdInputs::default();
        Self {
            lights: d.lights.to_string(),
            temperature: d.temperature.to_string(),
            humidity: d.humidity.to_string(),
            hour: d.hour,
            day: d.day,
            month: d.month,
            weekday: d.weekday,
            focus: Focus::Field(FieldId::Lights),
            replace_on_type: true,
        }
    }

    /// Restores every field to its default, keeping the focus.
    pub fn reset(&mut self) {
        let focus = self.focus;
        *self = Self::new();
        self.focus = focus;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Field(id) => match position(id) + 1 {
                i if i < FIELDS.len() => Focus::Field(FIELDS[i]),
                _ => Focus::PredictButton,
            },
            Focus::PredictButton => Focus::Field(FIELDS[0]),
        };
        self.replace_on_type = true;
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Field(id) => match position(id) {
                0 => Focus::PredictButton,
                i => Focus::Field(FIELDS[i - 1]),
            },
            Focus::PredictButton => Focus::Field(FIELDS[FIELDS.len() - 1]),
        };
        self.replace_on_type = true;
    }

    /// Steps the focused field by `delta` steps, clamping to its range.
    ///
    /// Number fields keep the precision that was typed, so stepping up and
    /// back down restores the original value.
    pub fn adjust(&mut self, delta: i32) {
        let Focus::Field(id) = self.focus else {
            return;
        };
        self.replace_on_type = false;

        match id.kind() {
            FieldKind::Number { min, step } => {
                let Some(text) = self.text_mut(id) else {
                    return;
                };
                let current = text.trim().parse::<f64>().unwrap_or(0.0);
                let precision = decimals(text.trim()).max(decimals(&step.to_string()));

                let mut next = current + f64::from(delta) * step;
                if let Some(min) = min {
                    next = next.max(min);
                }
                *text = format_number(next, precision);
            }
            FieldKind::Slider { range } => {
                let Some(value) = self.slider_mut(id) else {
                    return;
                };
                let next = i64::from(*value) + i64::from(delta);
                let clamped = next.clamp(i64::from(*range.start()), i64::from(*range.end()));
                *value = clamped as u32;
            }
        }
    }

    /// Appends a typed character to the focused number field.
    ///
    /// Returns `false` if the key was not consumed.
    pub fn type_char(&mut self, c: char) -> bool {
        let Focus::Field(id) = self.focus else {
            return false;
        };
        let replace = self.replace_on_type;
        let Some(text) = self.text_mut(id) else {
            return false;
        };

        let current = if replace { "" } else { text.as_str() };
        let accepted = match c {
            '0'..='9' => true,
            '.' => !current.contains('.'),
            '-' => current.is_empty(),
            _ => false,
        };
        if !accepted {
            return false;
        }

        if replace {
            text.clear();
        }
        text.push(c);
        self.replace_on_type = false;
        true
    }

    pub fn backspace(&mut self) {
        if let Focus::Field(id) = self.focus {
            self.replace_on_type = false;
            if let Some(text) = self.text_mut(id) {
                text.pop();
            }
        }
    }

    /// Text shown for `id` in the form.
    pub fn display(&self, id: FieldId) -> String {
        match id {
            FieldId::Lights => self.lights.clone(),
            FieldId::Temperature => self.temperature.clone(),
            FieldId::Humidity => self.humidity.clone(),
            FieldId::Hour => self.hour.to_string(),
            FieldId::Day => self.day.to_string(),
            FieldId::Month => self.month.to_string(),
            FieldId::Weekday => self.weekday.to_string(),
        }
    }

    /// Parses the form into prediction inputs.
    ///
    /// # Errors
    /// Returns `InvalidInput` if a number field does not hold a number.
    pub fn to_inputs(&self) -> Result<HouseholdInputs, PredictorError> {
        Ok(HouseholdInputs {
            lights: parse(FieldId::Lights, &self.lights)?,
            temperature: parse(FieldId::Temperature, &self.temperature)?,
            humidity: parse(FieldId::Humidity, &self.humidity)?,
            hour: self.hour,
            day: self.day,
            month: self.month,
            weekday: self.weekday,
        })
    }

    /// Text buffer of a number field, `None` for sliders.
    fn text_mut(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::Lights => Some(&mut self.lights),
            FieldId::Temperature => Some(&mut self.temperature),
            FieldId::Humidity => Some(&mut self.humidity),
            FieldId::Hour | FieldId::Day | FieldId::Month | FieldId::Weekday => None,
        }
    }

    /// Value of a slider field, `None` for number fields.
    fn slider_mut(&mut self, id: FieldId) -> Option<&mut u32> {
        match id {
            FieldId::Hour => Some(&mut self.hour),
            FieldId::Day => Some(&mut self.day),
            FieldId::Month => Some(&mut self.month),
            FieldId::Weekday => Some(&mut self.weekday),
            FieldId::Lights | FieldId::Temperature | FieldId::Humidity => None,
        }
    }
}

fn position(id: FieldId) -> usize {
    FIELDS.iter().position(|f| *f == id).unwrap_or(0)
}

fn parse(id: FieldId, text: &str) -> Result<f64, PredictorError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| PredictorError::InvalidInput {
            field: id.key(),
            reason: format!("'{text}' is not a number"),
        })
}

/// Number of digits after the decimal point in `text`.
fn decimals(text: &str) -> usize {
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// Formats with at most `precision` decimals and no trailing zeros: `20`,
/// `22.5`, `30.004`.
fn format_number(v: f64, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
