use std::{fmt, ops::RangeInclusive};

use crate::inputs::HouseholdInputs;

/// Hours treated as peak grid demand.
pub const PEAK_HOURS: RangeInclusive<u32> = 18..=22;
/// Lighting energy above this, in Wh, is considered high.
pub const LIGHTING_LIMIT_WH: f64 = 30.0;
/// Indoor temperatures, in °C, that do not trigger a thermal hint.
pub const COMFORT_RANGE_C: RangeInclusive<f64> = 18.0..=26.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
}

/// A static energy-saving hint triggered by the form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    PeakHours,
    Lighting,
    Thermal,
}

impl Advisory {
    pub fn severity(self) -> Severity {
        match self {
            Self::PeakHours => Severity::Warning,
            Self::Lighting | Self::Thermal => Severity::Info,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::PeakHours => "Peak-hour usage detected. Try shifting heavy appliances.",
            Self::Lighting => "High lighting usage detected. Use LED lights to save energy.",
            Self::Thermal => "Maintain indoor temperature between 20–24°C for efficiency.",
        }
    }

    /// Evaluates every rule against the raw inputs, independently of the
    /// model's output.
    pub fn collect(inputs: &HouseholdInputs) -> Vec<Self> {
        let rules = [
            (Self::PeakHours, PEAK_HOURS.contains(&inputs.hour)),
            (Self::Lighting, inputs.lights > LIGHTING_LIMIT_WH),
            (Self::Thermal, !COMFORT_RANGE_C.contains(&inputs.temperature)),
        ];

        rules
            .into_iter()
            .filter_map(|(advisory, fires)| fires.then_some(advisory))
            .collect()
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(f: impl FnOnce(&mut HouseholdInputs)) -> Vec<Advisory> {
        let mut inputs = HouseholdInputs::default();
        f(&mut inputs);
        Advisory::collect(&inputs)
    }

    #[test]
    fn defaults_only_trigger_peak_hours() {
        assert_eq!(with(|_| {}), vec![Advisory::PeakHours]);
    }

    #[test]
    fn peak_hours_are_inclusive() {
        for hour in [18, 20, 22] {
            assert!(with(|i| i.hour = hour).contains(&Advisory::PeakHours));
        }
        for hour in [0, 17, 23] {
            assert!(!with(|i| i.hour = hour).contains(&Advisory::PeakHours));
        }
    }

    #[test]
    fn lighting_limit_is_exclusive() {
        assert!(!with(|i| i.lights = 30.0).contains(&Advisory::Lighting));
        assert!(with(|i| i.lights = 30.01).contains(&Advisory::Lighting));
    }

    #[test]
    fn comfort_range_bounds_do_not_fire() {
        for t in [18.0, 22.0, 26.0] {
            assert!(!with(|i| i.temperature = t).contains(&Advisory::Thermal));
        }
        for t in [17.99, 26.01, -5.0, 40.0] {
            assert!(with(|i| i.temperature = t).contains(&Advisory::Thermal));
        }
    }

    #[test]
    fn all_rules_fire_together() {
        let advisories = with(|i| {
            i.hour = 21;
            i.lights = 80.0;
            i.temperature = 30.0;
        });

        assert_eq!(
            advisories,
            vec![Advisory::PeakHours, Advisory::Lighting, Advisory::Thermal]
        );
    }

    #[test]
    fn severities() {
        assert_eq!(Advisory::PeakHours.severity(), Severity::Warning);
        assert_eq!(Advisory::Lighting.severity(), Severity::Info);
        assert_eq!(Advisory::Thermal.severity(), Severity::Info);
    }
}
