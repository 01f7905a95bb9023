use ndarray::{Array1, ArrayView1};

/// Ordinary linear regression: `intercept + coefficients · row`.
#[derive(Debug, Clone)]
pub struct LinearModel {
    feature_names: Vec<String>,
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Creates a new `LinearModel`.
    ///
    /// # Errors
    /// Returns a reason if the coefficients do not match the feature names or
    /// any parameter is not finite.
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, String> {
        if coefficients.len() != feature_names.len() {
            return Err(format!(
                "coefficients length mismatch: got {}, expected {}",
                coefficients.len(),
                feature_names.len()
            ));
        }
        if let Some(i) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(format!("coefficient {i} is not finite"));
        }
        if !intercept.is_finite() {
            return Err("intercept is not finite".into());
        }

        Ok(Self {
            feature_names,
            coefficients: Array1::from(coefficients),
            intercept,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn predict(&self, row: ArrayView1<'_, f64>) -> f64 {
        self.intercept + self.coefficients.dot(&row)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("x{i}")).collect()
    }

    #[test]
    fn predicts_the_affine_combination() {
        let model = LinearModel::new(names(3), vec![1.0, -2.0, 0.25], 5.0).unwrap();
        assert_eq!(model.predict(array![4.0, 1.0, 8.0].view()), 9.0);
    }

    #[test]
    fn rejects_coefficient_count_mismatch() {
        let err = LinearModel::new(names(3), vec![1.0, 2.0], 0.0).unwrap_err();
        assert_eq!(err, "coefficients length mismatch: got 2, expected 3");
    }

    #[test]
    fn rejects_non_finite_parameters() {
        assert!(LinearModel::new(names(1), vec![f64::NAN], 0.0).is_err());
        assert!(LinearModel::new(names(1), vec![1.0], f64::INFINITY).is_err());
    }
}
