use ndarray::Array1;

use crate::{
    error::{PredictorError, Result},
    inputs::HouseholdInputs,
};

/// Per-room indoor temperature sensors the model was trained on.
pub const TEMPERATURE_FIELDS: [&str; 9] = ["T1", "T2", "T3", "T4", "T5", "T6", "T7", "T8", "T9"];

/// Per-room indoor humidity sensors the model was trained on.
pub const HUMIDITY_FIELDS: [&str; 9] = [
    "RH_1", "RH_2", "RH_3", "RH_4", "RH_5", "RH_6", "RH_7", "RH_8", "RH_9",
];

/// Outdoor and noise fields with no form input, filled with fixed values.
pub const CONSTANT_FIELDS: [(&str, f64); 8] = [
    ("T_out", 15.0),
    ("Press_mm_hg", 760.0),
    ("RH_out", 60.0),
    ("Windspeed", 2.0),
    ("Visibility", 40.0),
    ("Tdewpoint", 10.0),
    ("rv1", 0.5),
    ("rv2", 0.5),
];

/// Number of fields every assembled record carries.
pub const RECORD_LEN: usize =
    1 + TEMPERATURE_FIELDS.len() + HUMIDITY_FIELDS.len() + CONSTANT_FIELDS.len() + 4;

/// A flat, ordered set of named model inputs built from one form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    fields: Vec<(&'static str, f64)>,
}

impl FeatureRecord {
    /// Builds the full record from the form inputs.
    ///
    /// The single temperature and humidity readings are copied into all nine
    /// per-room fields, the outdoor fields take [`CONSTANT_FIELDS`] and the
    /// time fields are attached as given.
    pub fn assemble(inputs: &HouseholdInputs) -> Self {
        let mut fields = Vec::with_capacity(RECORD_LEN);

        fields.push(("lights", inputs.lights));
        fields.extend(TEMPERATURE_FIELDS.iter().map(|&n| (n, inputs.temperature)));
        fields.extend(HUMIDITY_FIELDS.iter().map(|&n| (n, inputs.humidity)));
        fields.extend(CONSTANT_FIELDS);
        fields.extend([
            ("hour", f64::from(inputs.hour)),
            ("day", f64::from(inputs.day)),
            ("month", f64::from(inputs.month)),
            ("weekday", f64::from(inputs.weekday)),
        ]);

        Self { fields }
    }

    /// Returns the value of `name`, if the record has it.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .find_map(|&(n, v)| (n == name).then_some(v))
    }

    /// Field names in assembly order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|&(n, _)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.fields.iter().copied()
    }

    /// Lays the record out in the order a model declares.
    ///
    /// # Errors
    /// Returns `SchemaMismatch` listing every expected name the record lacks.
    pub fn align(&self, expected: &[String]) -> Result<Array1<f64>> {
        let mut missing = Vec::new();
        let mut row = Vec::with_capacity(expected.len());

        for name in expected {
            match self.get(name) {
                Some(v) => row.push(v),
                None => missing.push(name.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(PredictorError::SchemaMismatch { missing });
        }

        let unused = self
            .names()
            .filter(|n| !expected.iter().any(|e| e == n))
            .collect::<Vec<_>>();
        if !unused.is_empty() {
            log::debug!("dropping fields the model does not use: {unused:?}");
        }

        Ok(Array1::from(row))
    }
}
