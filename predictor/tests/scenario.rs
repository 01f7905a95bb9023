use predictor::{
    Advisory, HouseholdInputs, Model, Predictor, Severity, features::FeatureRecord, predict,
};

/// A two-tree forest splitting on hour and lights.
const FOREST: &str = r#"{
    "kind": "tree_ensemble",
    "feature_names": ["hour", "lights", "T_out", "Press_mm_hg", "rv1"],
    "aggregation": "mean",
    "trees": [
        [
            {"split": {"feature": 0, "threshold": 17.5, "left": 1, "right": 2}},
            {"leaf": 60.0},
            {"leaf": 140.0}
        ],
        [
            {"split": {"feature": 1, "threshold": 30.0, "left": 1, "right": 2}},
            {"leaf": 80.0},
            {"leaf": 200.0}
        ]
    ]
}"#;

#[test]
fn default_form_scenario() {
    let inputs = HouseholdInputs::default();
    let record = FeatureRecord::assemble(&inputs);

    let expected_constants = [
        ("T_out", 15.0),
        ("Press_mm_hg", 760.0),
        ("RH_out", 60.0),
        ("Windspeed", 2.0),
        ("Visibility", 40.0),
        ("Tdewpoint", 10.0),
        ("rv1", 0.5),
        ("rv2", 0.5),
    ];
    for (name, value) in expected_constants {
        assert_eq!(record.get(name), Some(value), "{name}");
    }
    for i in 1..=9 {
        assert_eq!(record.get(&format!("T{i}")), Some(22.0));
        assert_eq!(record.get(&format!("RH_{i}")), Some(45.0));
    }

    let model = Model::from_json(FOREST.as_bytes()).unwrap();
    let prediction = predict(&model, &inputs).unwrap();

    assert_eq!(prediction.watt_hours, 110.0);
    assert_eq!(
        prediction.to_string(),
        "Predicted Appliance Energy Consumption: 110.00 Wh"
    );
    assert_eq!(prediction.advisories, vec![Advisory::PeakHours]);
    assert_eq!(prediction.advisories[0].severity(), Severity::Warning);
}

#[test]
fn advisories_come_from_inputs_not_the_prediction() {
    let model = Model::from_json(FOREST.as_bytes()).unwrap();
    let inputs = HouseholdInputs {
        lights: 45.0,
        temperature: 12.0,
        hour: 9,
        ..Default::default()
    };

    let prediction = predict(&model, &inputs).unwrap();

    assert_eq!(prediction.watt_hours, 130.0);
    assert_eq!(
        prediction.advisories,
        vec![Advisory::Lighting, Advisory::Thermal]
    );
}

#[test]
fn model_order_is_reported_from_its_metadata() {
    let model = Model::from_json(FOREST.as_bytes()).unwrap();
    assert_eq!(
        model.feature_names(),
        ["hour", "lights", "T_out", "Press_mm_hg", "rv1"]
    );
}
