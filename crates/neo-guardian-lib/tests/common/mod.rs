//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests,
//! including fixture paths and temporary copies of model artifacts.

use std::fs;
use std::path::PathBuf;

use neo_guardian_lib::HazardAssessor;
use sha2::{Digest, Sha256};
use tempfile::TempDir;

/// Path to fixtures directory used by tests (model artifacts, batch files).
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the logistic fixture artifact.
pub fn logistic_model_path() -> PathBuf {
    fixtures_dir().join("asteroid_guardian_v1.json")
}

/// Path to the forest fixture artifact.
#[allow(dead_code)]
pub fn forest_model_path() -> PathBuf {
    fixtures_dir().join("forest_guardian.json")
}

#[allow(dead_code)]
pub fn logistic_assessor() -> HazardAssessor {
    HazardAssessor::load(&logistic_model_path()).expect("logistic fixture loads")
}

#[allow(dead_code)]
pub fn forest_assessor() -> HazardAssessor {
    HazardAssessor::load(&forest_model_path()).expect("forest fixture loads")
}

/// Temporary directory holding a copy of the logistic artifact.
#[allow(dead_code)]
pub struct ModelTestEnv {
    /// Temp directory (dropped on struct drop)
    _temp_dir: TempDir,
    /// Path to the copied artifact
    pub model_path: PathBuf,
}

#[allow(dead_code)]
impl ModelTestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let model_path = temp_dir.path().join("asteroid_guardian_v1.json");
        fs::copy(logistic_model_path(), &model_path).expect("copy fixture artifact");
        Self {
            _temp_dir: temp_dir,
            model_path,
        }
    }

    pub fn temp_path(&self) -> &std::path::Path {
        self._temp_dir.path()
    }

    pub fn sidecar_path(&self) -> PathBuf {
        self.temp_path().join("asteroid_guardian_v1.json.sha256")
    }

    /// Write a sidecar containing the artifact's real digest.
    pub fn write_valid_sidecar(&self) {
        let bytes = fs::read(&self.model_path).expect("read artifact");
        let digest = hex::encode(Sha256::digest(&bytes));
        fs::write(
            self.sidecar_path(),
            format!("{digest}  asteroid_guardian_v1.json\n"),
        )
        .expect("write sidecar");
    }

    pub fn write_sidecar(&self, contents: &str) {
        fs::write(self.sidecar_path(), contents).expect("write sidecar");
    }

    pub fn overwrite_model(&self, contents: &str) {
        fs::write(&self.model_path, contents).expect("overwrite artifact");
    }
}

impl Default for ModelTestEnv {
    fn default() -> Self {
        Self::new()
    }
}
