// Subcommand handlers.
//
// main.rs parses arguments and dispatches here; each module owns one subcommand.

use std::path::Path;

use anyhow::{Context, Result};
use neo_guardian_lib::{resolve_model_path, HazardAssessor};

pub mod analytics;
pub mod batch;
pub mod scan;

/// Resolve and load the hazard model. Failure here is fatal for every subcommand.
pub fn load_assessor(model: Option<&Path>) -> Result<HazardAssessor> {
    let path = resolve_model_path(model).context("failed to resolve the model artifact path")?;
    HazardAssessor::load(&path)
        .with_context(|| format!("failed to load hazard model from {}", path.display()))
}
