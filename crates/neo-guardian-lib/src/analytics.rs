//! Model analytics: which inputs the classifier leans on.

use crate::model::{FeatureImportance, ModelInfo};

/// Reference weights used when an artifact ships none.
pub const REFERENCE_IMPORTANCES: [(&str, f64); 4] = [
    ("Magnitude", 0.45),
    ("MOID", 0.30),
    ("Velocity", 0.15),
    ("Miss Dist", 0.10),
];

/// Importance table for display, heaviest first.
///
/// Uses the weights carried by the artifact when it has any, otherwise the
/// reference table.
pub fn importance_table(info: Option<&ModelInfo>) -> Vec<FeatureImportance> {
    let mut table: Vec<FeatureImportance> = match info {
        Some(info) if !info.feature_importances.is_empty() => info.feature_importances.clone(),
        _ => REFERENCE_IMPORTANCES
            .iter()
            .map(|(feature, weight)| FeatureImportance::new(*feature, *weight))
            .collect(),
    };
    table.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    table
}
