//! Model artifact loading.
//!
//! Artifacts are JSON documents:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "name": "asteroid_guardian_v1",
//!   "feature_names": ["absolute_magnitude", "..."],
//!   "filler_defaults": { "inclination_deg": 10.0 },
//!   "feature_importances": [{ "feature": "Magnitude", "weight": 0.45 }],
//!   "model": { "kind": "logistic", "coefficients": [0.0], "intercept": 0.0 }
//! }
//! ```
//!
//! When a `<artifact>.sha256` sidecar sits next to the file, the artifact's
//! digest must match it before the contents are trusted.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::features::{column_indices, FeatureRow, FillerDefaults, FEATURE_CONTRACT};

use super::forest::ForestModel;
use super::logistic::LogisticModel;
use super::{ensure_row_width, Classifier};

/// Artifact schema version understood by this loader.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Default filename for the model artifact.
pub const MODEL_FILENAME: &str = "asteroid_guardian_v1.json";

/// Environment variable naming an explicit artifact file.
pub const MODEL_ENV_VAR: &str = "NEO_GUARDIAN_MODEL";

/// Environment variable naming a directory holding [`MODEL_FILENAME`].
pub const DATA_DIR_ENV_VAR: &str = "NEO_GUARDIAN_DATA_DIR";

/// One row of the model analytics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub weight: f64,
}

impl FeatureImportance {
    pub fn new(feature: impl Into<String>, weight: f64) -> Self {
        Self {
            feature: feature.into(),
            weight,
        }
    }
}

/// Model family stored in an artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Logistic(LogisticModel),
    Forest(ForestModel),
}

impl ModelSpec {
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelSpec::Logistic(_) => ModelKind::Logistic,
            ModelSpec::Forest(_) => ModelKind::Forest,
        }
    }

    fn validate(&self, feature_count: usize) -> std::result::Result<(), String> {
        match self {
            ModelSpec::Logistic(model) => model.validate(feature_count),
            ModelSpec::Forest(model) => model.validate(feature_count),
        }
    }

    fn probability(&self, values: &[f64]) -> f64 {
        match self {
            ModelSpec::Logistic(model) => model.probability(values),
            ModelSpec::Forest(model) => model.probability(values),
        }
    }
}

/// Discriminant of [`ModelSpec`], used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Logistic,
    Forest,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Logistic => write!(f, "logistic"),
            ModelKind::Forest => write!(f, "forest"),
        }
    }
}

fn default_contract() -> String {
    FEATURE_CONTRACT.to_string()
}

/// Serialized classifier plus the contract metadata trained alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub name: String,
    #[serde(default = "default_contract")]
    pub contract: String,
    pub feature_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filler_defaults: Option<FillerDefaults>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_importances: Vec<FeatureImportance>,
    pub model: ModelSpec,
}

impl ModelArtifact {
    /// Load and validate an artifact from disk.
    ///
    /// Every failure (missing file, checksum mismatch, malformed JSON,
    /// inconsistent model) is reported as [`Error::ModelUnavailable`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .map_err(|err| Error::model_unavailable(path, format!("failed to read: {err}")))?;
        verify_sidecar_checksum(path, &bytes)?;

        let artifact =
            Self::parse(&bytes).map_err(|reason| Error::model_unavailable(path, reason))?;

        info!(
            name = %artifact.name,
            kind = %artifact.model.kind(),
            path = %path.display(),
            "loaded model artifact"
        );
        Ok(artifact)
    }

    /// Parse and validate an artifact held in memory.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes).map_err(|reason| Error::model_unavailable("<memory>", reason))
    }

    fn parse(bytes: &[u8]) -> std::result::Result<Self, String> {
        let artifact: ModelArtifact =
            serde_json::from_slice(bytes).map_err(|err| format!("malformed artifact: {err}"))?;
        artifact.check()?;
        Ok(artifact)
    }

    /// Check schema version, contract columns and model structure.
    fn check(&self) -> std::result::Result<(), String> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(format!(
                "unsupported artifact format version {} (expected {ARTIFACT_FORMAT_VERSION})",
                self.format_version
            ));
        }
        if self.contract != FEATURE_CONTRACT {
            return Err(format!(
                "artifact targets feature contract '{}', expected '{FEATURE_CONTRACT}'",
                self.contract
            ));
        }
        column_indices(&self.feature_names).map_err(|err| err.to_string())?;
        self.model.validate(self.feature_names.len())
    }

    /// Split the artifact into the classifier and its descriptive metadata.
    pub fn into_parts(self) -> (ArtifactClassifier, FillerDefaults, ModelInfo) {
        let info = ModelInfo {
            name: self.name,
            kind: self.model.kind(),
            contract: self.contract,
            feature_count: self.feature_names.len(),
            feature_importances: self.feature_importances,
        };
        let classifier = ArtifactClassifier {
            feature_names: self.feature_names,
            model: self.model,
        };
        (classifier, self.filler_defaults.unwrap_or_default(), info)
    }
}

/// Descriptive metadata retained after an artifact is loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub kind: ModelKind,
    pub contract: String,
    pub feature_count: usize,
    pub feature_importances: Vec<FeatureImportance>,
}

/// [`Classifier`] backed by a validated [`ModelSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactClassifier {
    feature_names: Vec<String>,
    model: ModelSpec,
}

impl ArtifactClassifier {
    pub fn kind(&self) -> ModelKind {
        self.model.kind()
    }
}

impl Classifier for ArtifactClassifier {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<f64> {
        ensure_row_width(row, self.feature_names.len())?;
        Ok(self.model.probability(row.values()))
    }
}

fn verify_sidecar_checksum(path: &Path, bytes: &[u8]) -> Result<()> {
    let sidecar = checksum_sidecar_path(path);
    if !sidecar.exists() {
        debug!(path = %path.display(), "no checksum sidecar; skipping integrity check");
        return Ok(());
    }

    let contents = fs::read_to_string(&sidecar).map_err(|err| {
        Error::model_unavailable(path, format!("failed to read checksum sidecar: {err}"))
    })?;
    // Accept both a bare digest and `sha256sum` output ("<digest>  <file>").
    let expected = contents
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let computed = hex::encode(Sha256::digest(bytes));

    if expected != computed {
        return Err(Error::model_unavailable(
            path,
            "checksum mismatch - artifact may be corrupted",
        ));
    }
    Ok(())
}

fn checksum_sidecar_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".sha256");
    path.with_file_name(name)
}

/// Resolve the platform default artifact location.
pub fn default_model_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "neoguardian", "neo-guardian")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(MODEL_FILENAME))
}

/// Decide which artifact file to load.
///
/// Resolution order:
/// 1. Explicit `target` argument when provided (a directory gets
///    [`MODEL_FILENAME`] appended).
/// 2. `NEO_GUARDIAN_MODEL` environment variable, file or directory.
/// 3. `NEO_GUARDIAN_DATA_DIR` environment variable joined with [`MODEL_FILENAME`].
/// 4. Platform-specific project data directory.
///
/// The returned path is not checked for existence; loading reports that.
pub fn resolve_model_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(canonical_model_path(explicit));
    }

    if let Some(env_path) = env::var_os(MODEL_ENV_VAR) {
        return Ok(canonical_model_path(Path::new(&env_path)));
    }

    if let Some(dir) = env::var_os(DATA_DIR_ENV_VAR) {
        return Ok(PathBuf::from(dir).join(MODEL_FILENAME));
    }

    default_model_path()
}

fn canonical_model_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(MODEL_FILENAME);
    }
    path.to_path_buf()
}
