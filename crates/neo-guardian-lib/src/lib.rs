//! NEO Guardian library entry points.
//!
//! This crate loads a pre-trained hazard classifier, assesses near-Earth
//! object observations against it, estimates physical size from absolute
//! magnitude, and keeps a session log of scans. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod analytics;
pub mod assess;
pub mod constants;
pub mod designation;
pub mod error;
pub mod features;
pub mod model;
pub mod observation;
pub mod orbit;
pub mod records;
pub mod report;
pub mod session;
pub mod size;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use analytics::importance_table;
pub use assess::{AssessmentResult, HazardAssessor};
pub use designation::{generate_designation, new_designation};
pub use error::{Error, Result};
pub use features::{FeatureRow, FillerDefaults, FEATURE_CONTRACT, FEATURE_NAMES};
pub use model::{
    resolve_model_path, Classifier, FeatureImportance, ModelArtifact, ModelInfo, ModelKind,
};
pub use observation::ObservationInput;
pub use orbit::{orbit_outline, OrbitPoint};
pub use records::{read_observations, read_observations_path, ObservationRecord};
pub use report::{ReportRenderMode, ScanReport};
pub use session::{ScanEntry, SessionLog, SESSION_CSV_HEADER};
pub use size::{estimate_diameter_m, KineticClass, SizeClass};
