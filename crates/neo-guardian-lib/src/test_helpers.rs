// Test-only helpers for `neo-guardian-lib` tests
#![allow(dead_code)]
use chrono::NaiveTime;

use crate::assess::AssessmentResult;
use crate::error::Result;
use crate::features::{contract_columns, FeatureRow};
use crate::model::Classifier;
use crate::observation::ObservationInput;
use crate::session::ScanEntry;
use crate::size::SizeClass;

/// Classifier stub that returns a fixed label and probability.
pub struct FixedClassifier {
    label: u8,
    probability: f64,
    columns: Vec<String>,
}

impl FixedClassifier {
    pub fn new(label: u8, probability: f64) -> Self {
        Self {
            label,
            probability,
            columns: contract_columns(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }
}

impl Classifier for FixedClassifier {
    fn feature_names(&self) -> &[String] {
        &self.columns
    }

    fn predict_proba(&self, _row: &FeatureRow) -> Result<f64> {
        Ok(self.probability)
    }

    fn predict(&self, _row: &FeatureRow) -> Result<u8> {
        Ok(self.label)
    }
}

/// Builder to create `ScanEntry` instances in tests with sensible defaults.
pub struct ScanEntryBuilder {
    entry: ScanEntry,
}

impl ScanEntryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entry: ScanEntry {
                time: NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"),
                designation: "NEO-2026-A10".to_string(),
                input: ObservationInput::default(),
                result: AssessmentResult {
                    is_hazardous: false,
                    hazard_probability: 0.1,
                    estimated_diameter_m: 136.6,
                    size_class: SizeClass::CityLevel,
                },
            },
        }
    }

    pub fn designation(mut self, designation: &str) -> Self {
        self.entry.designation = designation.to_string();
        self
    }

    pub fn time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.entry.time = NaiveTime::from_hms_opt(hour, minute, second).expect("valid time");
        self
    }

    pub fn magnitude(mut self, h: f64) -> Self {
        self.entry.input.absolute_magnitude = h;
        self
    }

    pub fn velocity(mut self, v: f64) -> Self {
        self.entry.input.velocity_km_s = v;
        self
    }

    pub fn moid(mut self, moid: f64) -> Self {
        self.entry.input.orbit_intersection_au = moid;
        self
    }

    pub fn diameter(mut self, d: f64) -> Self {
        self.entry.result.estimated_diameter_m = d;
        self.entry.result.size_class = SizeClass::from_diameter_m(d);
        self
    }

    pub fn hazardous(mut self, hazardous: bool) -> Self {
        self.entry.result.is_hazardous = hazardous;
        self
    }

    pub fn probability(mut self, p: f64) -> Self {
        self.entry.result.hazard_probability = p;
        self
    }

    pub fn build(self) -> ScanEntry {
        self.entry
    }
}

impl Default for ScanEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
