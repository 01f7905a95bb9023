use std::fmt;

use crate::{
    advisory::Advisory,
    error::{PredictorError, Result},
    features::FeatureRecord,
    inputs::HouseholdInputs,
    model::Predictor,
};

/// The outcome of one prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted appliance energy consumption, in Wh.
    pub watt_hours: f64,
    pub advisories: Vec<Advisory>,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Predicted Appliance Energy Consumption: {:.2} Wh",
            self.watt_hours
        )
    }
}

/// Runs one prediction: validate, assemble, align to the model's schema,
/// predict, then derive the advisories.
///
/// # Errors
/// Returns `InvalidInput` for out-of-range inputs, `SchemaMismatch` if the
/// model expects unknown features and `PredictionFailure` if the model output
/// is not finite.
pub fn predict<P: Predictor + ?Sized>(model: &P, inputs: &HouseholdInputs) -> Result<Prediction> {
    inputs.validate()?;

    let record = FeatureRecord::assemble(inputs);
    let row = record.align(model.feature_names())?;
    let watt_hours = model.predict(row.view());

    if !watt_hours.is_finite() {
        return Err(PredictorError::PredictionFailure(format!(
            "model returned {watt_hours}"
        )));
    }

    log::debug!("predicted {watt_hours:.2} Wh for {inputs:?}");

    Ok(Prediction {
        watt_hours,
        advisories: Advisory::collect(inputs),
    })
}
