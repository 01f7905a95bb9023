mod linear;
mod tree;

use std::collections::HashSet;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

pub use linear::LinearModel;
pub use tree::{Aggregation, Node, Split, Tree, TreeEnsemble};

/// A loaded regression model.
///
/// Implementors are immutable once built, so a single instance can be shared
/// by every prediction for the lifetime of the process.
pub trait Predictor: Send + Sync {
    /// Input features in the exact order the model was trained with.
    fn feature_names(&self) -> &[String];

    /// Predicts a single value from a row laid out as [`Predictor::feature_names`].
    fn predict(&self, row: ArrayView1<'_, f64>) -> f64;
}

/// On-disk description of a model, as stored in the artifact file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Linear {
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    },
    TreeEnsemble {
        feature_names: Vec<String>,
        trees: Vec<Vec<Node>>,
        aggregation: Aggregation,
        #[serde(default)]
        base_score: f64,
    },
}

/// A validated model ready to serve predictions.
#[derive(Debug, Clone)]
pub enum Model {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl Model {
    /// Parses and validates a model artifact.
    ///
    /// # Errors
    /// Returns a human-readable reason if the bytes are not a valid model.
    pub fn from_json(bytes: &[u8]) -> Result<Self, String> {
        let spec: ModelSpec =
            serde_json::from_slice(bytes).map_err(|e| format!("invalid model JSON: {e}"))?;
        Self::try_from(spec)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::TreeEnsemble(_) => "tree_ensemble",
        }
    }

    /// Short description used in logs and the UI header.
    pub fn summary(&self) -> String {
        match self {
            Self::Linear(m) => format!("linear, {} features", m.feature_names().len()),
            Self::TreeEnsemble(m) => format!(
                "tree_ensemble ({}), {} trees, {} features",
                m.aggregation(),
                m.trees().len(),
                m.feature_names().len()
            ),
        }
    }
}

impl TryFrom<ModelSpec> for Model {
    type Error = String;

    fn try_from(spec: ModelSpec) -> Result<Self, Self::Error> {
        match spec {
            ModelSpec::Linear {
                feature_names,
                coefficients,
                intercept,
            } => {
                check_feature_names(&feature_names)?;
                LinearModel::new(feature_names, coefficients, intercept).map(Self::Linear)
            }
            ModelSpec::TreeEnsemble {
                feature_names,
                trees,
                aggregation,
                base_score,
            } => {
                check_feature_names(&feature_names)?;
                TreeEnsemble::new(feature_names, trees, aggregation, base_score)
                    .map(Self::TreeEnsemble)
            }
        }
    }
}

impl Predictor for Model {
    fn feature_names(&self) -> &[String] {
        match self {
            Self::Linear(m) => m.feature_names(),
            Self::TreeEnsemble(m) => m.feature_names(),
        }
    }

    fn predict(&self, row: ArrayView1<'_, f64>) -> f64 {
        match self {
            Self::Linear(m) => m.predict(row),
            Self::TreeEnsemble(m) => m.predict(row),
        }
    }
}

fn check_feature_names(names: &[String]) -> Result<(), String> {
    if names.is_empty() {
        return Err("feature_names must not be empty".into());
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if name.is_empty() {
            return Err("feature_names must not contain empty names".into());
        }
        if !seen.insert(name.as_str()) {
            return Err(format!("duplicate feature name: {name}"));
        }
    }

    Ok(())
}
