//! Classifier abstraction and the artifact-backed models that implement it.
//!
//! - [`artifact`] - JSON model artifact loading, integrity checks and path resolution
//! - [`logistic`] - Logistic regression over the raw feature row
//! - [`forest`] - Averaged decision-tree ensemble in flattened node form
//!
//! The assessor only talks to [`Classifier`]; any predictor exposing the same
//! two operations can be plugged in.

pub mod artifact;
pub mod forest;
pub mod logistic;

pub use artifact::{
    default_model_path, resolve_model_path, ArtifactClassifier, FeatureImportance, ModelArtifact,
    ModelInfo, ModelKind, ModelSpec, ARTIFACT_FORMAT_VERSION, DATA_DIR_ENV_VAR, MODEL_ENV_VAR,
    MODEL_FILENAME,
};
pub use forest::{DecisionTree, ForestModel};
pub use logistic::LogisticModel;

use crate::error::{Error, Result};
use crate::features::FeatureRow;

/// Class label for a hazardous object.
pub const HAZARDOUS_LABEL: u8 = 1;

/// Class label for a non-threatening object.
pub const SAFE_LABEL: u8 = 0;

/// Probability strictly above which the positive class wins.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Opaque binary predictor trained on the feature contract.
///
/// Implementations are immutable once loaded and may be shared freely.
pub trait Classifier: Send + Sync {
    /// Column names in the order the model was trained on.
    fn feature_names(&self) -> &[String];

    /// Probability that the row belongs to class 1 (hazardous).
    fn predict_proba(&self, row: &FeatureRow) -> Result<f64>;

    /// Class label (0 or 1) for the row.
    fn predict(&self, row: &FeatureRow) -> Result<u8> {
        Ok(label_for_probability(self.predict_proba(row)?))
    }
}

/// Map a class-1 probability onto a label. Ties resolve to class 0.
pub fn label_for_probability(probability: f64) -> u8 {
    if probability > DECISION_THRESHOLD {
        HAZARDOUS_LABEL
    } else {
        SAFE_LABEL
    }
}

/// Reject rows whose width does not match the model.
pub(crate) fn ensure_row_width(row: &FeatureRow, expected: usize) -> Result<()> {
    if row.len() != expected {
        return Err(Error::FeatureMismatch {
            message: format!("row has {} values, model expects {expected}", row.len()),
        });
    }
    Ok(())
}
