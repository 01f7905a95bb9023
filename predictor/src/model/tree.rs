use std::fmt;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// A node of a flattened decision tree. Node `0` is the root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Leaf(f64),
    Split(Split),
}

/// Rows with `row[feature] <= threshold` continue at `left`, the rest at `right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub feature: usize,
    pub threshold: f64,
    pub left: usize,
    pub right: usize,
}

/// How the outputs of the individual trees are combined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Random forest: average of the trees.
    Mean,
    /// Gradient boosting: shrunk sum of the trees.
    Sum { learning_rate: f64 },
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => write!(f, "mean"),
            Self::Sum { learning_rate } => write!(f, "sum, lr={learning_rate}"),
        }
    }
}

/// A single validated decision tree.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates a new `Tree` over rows of `num_features` values.
    ///
    /// Children must come after their parent, which keeps every traversal
    /// finite.
    ///
    /// # Errors
    /// Returns a reason describing the first malformed node.
    pub fn new(nodes: Vec<Node>, num_features: usize) -> Result<Self, String> {
        if nodes.is_empty() {
            return Err("tree has no nodes".into());
        }

        for (i, node) in nodes.iter().enumerate() {
            match *node {
                Node::Leaf(value) if !value.is_finite() => {
                    return Err(format!("node {i}: leaf value is not finite"));
                }
                Node::Leaf(_) => {}
                Node::Split(s) => {
                    if s.feature >= num_features {
                        return Err(format!(
                            "node {i}: feature {} out of range for {num_features} features",
                            s.feature
                        ));
                    }
                    if !s.threshold.is_finite() {
                        return Err(format!("node {i}: threshold is not finite"));
                    }
                    for child in [s.left, s.right] {
                        if child <= i || child >= nodes.len() {
                            return Err(format!("node {i}: invalid child index {child}"));
                        }
                    }
                }
            }
        }

        Ok(Self { nodes })
    }

    /// Walks the tree from the root down to a leaf.
    pub fn eval(&self, row: ArrayView1<'_, f64>) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf(value) => return value,
                Node::Split(s) => {
                    idx = if row[s.feature] <= s.threshold {
                        s.left
                    } else {
                        s.right
                    };
                }
            }
        }
    }
}

/// A forest or boosted ensemble of regression trees.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    feature_names: Vec<String>,
    trees: Vec<Tree>,
    aggregation: Aggregation,
    base_score: f64,
}

impl TreeEnsemble {
    /// Creates a new `TreeEnsemble`.
    ///
    /// # Errors
    /// Returns a reason if there are no trees, a tree is malformed or a
    /// scalar parameter is not finite.
    pub fn new(
        feature_names: Vec<String>,
        trees: Vec<Vec<Node>>,
        aggregation: Aggregation,
        base_score: f64,
    ) -> Result<Self, String> {
        if trees.is_empty() {
            return Err("ensemble has no trees".into());
        }
        if !base_score.is_finite() {
            return Err("base_score is not finite".into());
        }
        if let Aggregation::Sum { learning_rate } = aggregation {
            if !learning_rate.is_finite() || learning_rate <= 0.0 {
                return Err(format!("learning_rate must be positive, got {learning_rate}"));
            }
        }

        let num_features = feature_names.len();
        let trees = trees
            .into_iter()
            .enumerate()
            .map(|(i, nodes)| Tree::new(nodes, num_features).map_err(|e| format!("tree {i}: {e}")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            feature_names,
            trees,
            aggregation,
            base_score,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    pub fn predict(&self, row: ArrayView1<'_, f64>) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.eval(row)).sum();

        match self.aggregation {
            Aggregation::Mean => self.base_score + total / self.trees.len() as f64,
            Aggregation::Sum { learning_rate } => self.base_score + learning_rate * total,
        }
    }
}
