//! Hazard assessment: classifier call plus size estimation.

use std::path::Path;

use chrono::NaiveTime;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::features::{FeatureRow, FillerDefaults};
use crate::model::{
    label_for_probability, Classifier, ModelArtifact, ModelInfo, HAZARDOUS_LABEL, SAFE_LABEL,
};
use crate::observation::ObservationInput;
use crate::session::{ScanEntry, SessionLog};
use crate::size::{estimate_diameter_m, SizeClass};

/// Outcome of assessing a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub is_hazardous: bool,
    /// Probability of the hazardous class, in `[0, 1]`.
    pub hazard_probability: f64,
    pub estimated_diameter_m: f64,
    pub size_class: SizeClass,
}

impl AssessmentResult {
    /// Status word shown on panels and in the session log.
    pub fn status_label(&self) -> &'static str {
        if self.is_hazardous {
            "HAZARDOUS"
        } else {
            "SAFE"
        }
    }
}

/// Combines a loaded classifier with the filler defaults it was trained on.
///
/// An assessor can only be built from a classifier that loaded successfully,
/// so every call to [`HazardAssessor::assess`] has a usable model.
pub struct HazardAssessor {
    classifier: Box<dyn Classifier>,
    defaults: FillerDefaults,
    info: Option<ModelInfo>,
}

impl std::fmt::Debug for HazardAssessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HazardAssessor")
            .field("features", &self.classifier.feature_names().len())
            .field("defaults", &self.defaults)
            .field("info", &self.info)
            .finish()
    }
}

impl HazardAssessor {
    /// Wrap an arbitrary classifier.
    pub fn new(classifier: Box<dyn Classifier>, defaults: FillerDefaults) -> Self {
        Self {
            classifier,
            defaults,
            info: None,
        }
    }

    /// Build an assessor from a validated artifact, honouring its filler defaults.
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        let (classifier, defaults, info) = artifact.into_parts();
        Self {
            classifier: Box::new(classifier),
            defaults,
            info: Some(info),
        }
    }

    /// Load the artifact at `path` and build an assessor from it.
    ///
    /// Fails with [`Error::ModelUnavailable`] when the artifact cannot be used.
    pub fn load(path: &Path) -> Result<Self> {
        ModelArtifact::from_path(path).map(Self::from_artifact)
    }

    pub fn model_info(&self) -> Option<&ModelInfo> {
        self.info.as_ref()
    }

    pub fn filler_defaults(&self) -> &FillerDefaults {
        &self.defaults
    }

    /// Classify an observation and estimate its size.
    ///
    /// Inputs are assumed to be range-checked by the caller. Errors only
    /// arise from a feature layout the classifier rejects or from classifier
    /// output outside its documented range.
    pub fn assess(&self, input: &ObservationInput) -> Result<AssessmentResult> {
        let row = FeatureRow::assemble(input, &self.defaults, self.classifier.feature_names())?;

        let label = self.classifier.predict(&row)?;
        let probability = self.classifier.predict_proba(&row)?;

        if label != HAZARDOUS_LABEL && label != SAFE_LABEL {
            return Err(Error::InvalidClassifierOutput {
                message: format!("label {label} is not 0 or 1"),
            });
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidClassifierOutput {
                message: format!("probability {probability} is outside [0, 1]"),
            });
        }
        if label_for_probability(probability) != label {
            warn!(
                label,
                probability, "classifier label disagrees with its probability; using label"
            );
        }

        let estimated_diameter_m = estimate_diameter_m(input.absolute_magnitude);
        let result = AssessmentResult {
            is_hazardous: label == HAZARDOUS_LABEL,
            hazard_probability: probability,
            estimated_diameter_m,
            size_class: SizeClass::from_diameter_m(estimated_diameter_m),
        };

        debug!(
            magnitude = input.absolute_magnitude,
            probability,
            diameter_m = estimated_diameter_m,
            size_class = %result.size_class,
            "assessed observation"
        );
        Ok(result)
    }

    /// Assess an observation and append it to the session log.
    ///
    /// The log is taken by value and handed back with the new entry so the
    /// caller stays the sole owner of session state.
    pub fn scan(
        &self,
        mut log: SessionLog,
        designation: impl Into<String>,
        input: ObservationInput,
        time: NaiveTime,
    ) -> Result<(ScanEntry, SessionLog)> {
        let result = self.assess(&input)?;
        let entry = ScanEntry {
            time,
            designation: designation.into(),
            input,
            result,
        };
        log.push(entry.clone());
        Ok((entry, log))
    }
}
