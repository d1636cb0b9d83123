//! Logistic regression classifier.

use serde::{Deserialize, Serialize};

/// Linear model squashed through the logistic function.
///
/// `p = 1 / (1 + exp(-(intercept + sum(coefficients[i] * x[i]))))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    /// Check the model is usable with `feature_count` inputs.
    pub fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.coefficients.len() != feature_count {
            return Err(format!(
                "logistic model has {} coefficients for {feature_count} features",
                self.coefficients.len()
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("logistic model parameters must be finite".to_string());
        }
        Ok(())
    }

    /// Class-1 probability for a validated row.
    pub fn probability(&self, values: &[f64]) -> f64 {
        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(values)
                .map(|(c, x)| c * x)
                .sum::<f64>();
        sigmoid(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    // Split on sign so large |z| never overflows exp().
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
