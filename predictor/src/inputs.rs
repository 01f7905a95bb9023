use std::ops::RangeInclusive;

use crate::error::{PredictorError, Result};

pub const HOUR_RANGE: RangeInclusive<u32> = 0..=23;
pub const DAY_RANGE: RangeInclusive<u32> = 1..=31;
pub const MONTH_RANGE: RangeInclusive<u32> = 1..=12;
/// 0 is Monday, 6 is Sunday.
pub const WEEKDAY_RANGE: RangeInclusive<u32> = 0..=6;

/// The household conditions a user enters on the form.
///
/// Temperature and humidity are single representative readings for the whole
/// home; the assembler broadcasts them across every per-room sensor field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseholdInputs {
    /// Energy used by light fixtures, in Wh.
    pub lights: f64,
    /// Average indoor temperature, in °C.
    pub temperature: f64,
    /// Average indoor relative humidity, in %.
    pub humidity: f64,
    pub hour: u32,
    pub day: u32,
    pub month: u32,
    pub weekday: u32,
}

impl Default for HouseholdInputs {
    fn default() -> Self {
        Self {
            lights: 20.0,
            temperature: 22.0,
            humidity: 45.0,
            hour: 19,
            day: 15,
            month: 6,
            weekday: 3,
        }
    }
}

impl HouseholdInputs {
    /// Checks every value against its basic numeric range.
    ///
    /// # Errors
    /// Returns `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        finite("lights", self.lights)?;
        finite("temperature", self.temperature)?;
        finite("humidity", self.humidity)?;

        if self.lights < 0.0 {
            return Err(PredictorError::InvalidInput {
                field: "lights",
                reason: format!("must be >= 0, got {}", self.lights),
            });
        }

        within("hour", self.hour, HOUR_RANGE)?;
        within("day", self.day, DAY_RANGE)?;
        within("month", self.month, MONTH_RANGE)?;
        within("weekday", self.weekday, WEEKDAY_RANGE)
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PredictorError::InvalidInput {
            field,
            reason: format!("must be a finite number, got {value}"),
        })
    }
}

fn within(field: &'static str, value: u32, range: RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(PredictorError::InvalidInput {
            field,
            reason: format!(
                "must be within {}..={}, got {value}",
                range.start(),
                range.end()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_form() {
        let inputs = HouseholdInputs::default();
        assert_eq!(inputs.lights, 20.0);
        assert_eq!(inputs.temperature, 22.0);
        assert_eq!(inputs.humidity, 45.0);
        assert_eq!(
            (inputs.hour, inputs.day, inputs.month, inputs.weekday),
            (19, 15, 6, 3)
        );
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn negative_lights_are_rejected() {
        let inputs = HouseholdInputs {
            lights: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(PredictorError::InvalidInput { field: "lights", .. })
        ));
    }

    #[test]
    fn time_fields_are_range_checked() {
        let cases = [
            HouseholdInputs { hour: 24, ..Default::default() },
            HouseholdInputs { day: 0, ..Default::default() },
            HouseholdInputs { month: 13, ..Default::default() },
            HouseholdInputs { weekday: 7, ..Default::default() },
        ];

        for inputs in cases {
            assert!(inputs.validate().is_err(), "{inputs:?} should be rejected");
        }
    }

    #[test]
    fn range_edges_are_accepted() {
        let low = HouseholdInputs {
            lights: 0.0,
            hour: 0,
            day: 1,
            month: 1,
            weekday: 0,
            ..Default::default()
        };
        let high = HouseholdInputs {
            hour: 23,
            day: 31,
            month: 12,
            weekday: 6,
            ..Default::default()
        };

        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
    }

    #[test]
    fn nan_temperature_is_rejected() {
        let inputs = HouseholdInputs {
            temperature: f64::NAN,
            ..Default::default()
        };
        assert!(inputs.validate().is_err());
    }
}
