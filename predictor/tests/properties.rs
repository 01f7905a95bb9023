//! Property tests for feature assembly and schema alignment.

use ndarray::ArrayView1;
use predictor::{
    Advisory, HouseholdInputs, Predictor, predict,
    features::{FeatureRecord, HUMIDITY_FIELDS, TEMPERATURE_FIELDS},
};
use proptest::prelude::*;

/// Returns the sum of `weight_i * row_i` with distinct powers of two, so any
/// misplaced column changes the result.
struct Weighted {
    names: Vec<String>,
}

impl Predictor for Weighted {
    fn feature_names(&self) -> &[String] {
        &self.names
    }

    fn predict(&self, row: ArrayView1<'_, f64>) -> f64 {
        row.iter()
            .enumerate()
            .map(|(i, v)| v * 2f64.powi(i as i32))
            .sum()
    }
}

fn inputs_strategy() -> impl Strategy<Value = HouseholdInputs> {
    (
        0.0..500.0f64,
        -20.0..45.0f64,
        0.0..100.0f64,
        0u32..=23,
        1u32..=31,
        1u32..=12,
        0u32..=6,
    )
        .prop_map(|(lights, temperature, humidity, hour, day, month, weekday)| HouseholdInputs {
            lights,
            temperature,
            humidity,
            hour,
            day,
            month,
            weekday,
        })
}

fn schema() -> Vec<String> {
    FeatureRecord::assemble(&HouseholdInputs::default())
        .names()
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn temperature_is_broadcast_to_every_room(t in -50.0..60.0f64) {
        let record = FeatureRecord::assemble(&HouseholdInputs { temperature: t, ..Default::default() });
        for name in TEMPERATURE_FIELDS {
            prop_assert_eq!(record.get(name), Some(t));
        }
    }

    #[test]
    fn humidity_is_broadcast_to_every_room(h in 0.0..100.0f64) {
        let record = FeatureRecord::assemble(&HouseholdInputs { humidity: h, ..Default::default() });
        for name in HUMIDITY_FIELDS {
            prop_assert_eq!(record.get(name), Some(h));
        }
    }

    #[test]
    fn assembly_is_deterministic(inputs in inputs_strategy()) {
        let a = FeatureRecord::assemble(&inputs);
        let b = FeatureRecord::assemble(&inputs);
        prop_assert_eq!(&a, &b);

        let bits = |r: &FeatureRecord| r.iter().map(|(n, v)| (n, v.to_bits())).collect::<Vec<_>>();
        prop_assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn alignment_follows_any_schema_permutation(
        inputs in inputs_strategy(),
        order in Just(schema()).prop_shuffle(),
    ) {
        let record = FeatureRecord::assemble(&inputs);
        let row = record.align(&order).unwrap();

        prop_assert_eq!(row.len(), order.len());
        for (name, value) in order.iter().zip(row.iter()) {
            prop_assert_eq!(record.get(name), Some(*value));
        }
    }

    #[test]
    fn prediction_is_independent_of_declared_order(
        inputs in inputs_strategy(),
        order in Just(schema()).prop_shuffle(),
    ) {
        let model = Weighted { names: order.clone() };
        let prediction = predict(&model, &inputs).unwrap();

        let record = FeatureRecord::assemble(&inputs);
        let expected: f64 = order
            .iter()
            .enumerate()
            .map(|(i, n)| record.get(n).unwrap() * 2f64.powi(i as i32))
            .sum();

        prop_assert_eq!(prediction.watt_hours, expected);
    }

    #[test]
    fn advisories_depend_only_on_inputs(inputs in inputs_strategy()) {
        let advisories = Advisory::collect(&inputs);

        prop_assert_eq!(advisories.contains(&Advisory::PeakHours), (18..=22).contains(&inputs.hour));
        prop_assert_eq!(advisories.contains(&Advisory::Lighting), inputs.lights > 30.0);
        prop_assert_eq!(
            advisories.contains(&Advisory::Thermal),
            inputs.temperature < 18.0 || inputs.temperature > 26.0
        );
    }
}
