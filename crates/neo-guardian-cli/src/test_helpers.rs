// Test utilities used across `neo-guardian-cli` unit tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use chrono::NaiveTime;
use neo_guardian_lib::{
    AssessmentResult, FeatureImportance, ModelInfo, ModelKind, ObservationInput, ScanEntry,
    SizeClass, FEATURE_CONTRACT,
};

/// Scan entry with default observation values and the given verdict.
pub fn entry(designation: &str, hazardous: bool, probability: f64, diameter_m: f64) -> ScanEntry {
    ScanEntry {
        time: NaiveTime::from_hms_opt(14, 5, 9).expect("valid time"),
        designation: designation.to_string(),
        input: ObservationInput::default(),
        result: AssessmentResult {
            is_hazardous: hazardous,
            hazard_probability: probability,
            estimated_diameter_m: diameter_m,
            size_class: SizeClass::from_diameter_m(diameter_m),
        },
    }
}

pub fn sample_info(feature_importances: Vec<FeatureImportance>) -> ModelInfo {
    ModelInfo {
        name: "unit-model".to_string(),
        kind: ModelKind::Logistic,
        contract: FEATURE_CONTRACT.to_string(),
        feature_count: 17,
        feature_importances,
    }
}
