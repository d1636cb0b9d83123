//! Feature contract between observation inputs and the trained classifier.
//!
//! The classifier was trained on seventeen columns, only six of which an
//! operator controls. The remaining eleven are held at fixed values described
//! by [`FillerDefaults`]. The column names and defaults together form the
//! versioned contract [`FEATURE_CONTRACT`]; a model artifact built against a
//! different contract is rejected when its columns are aligned.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::observation::ObservationInput;

/// Identifier of the feature contract implemented by this module.
pub const FEATURE_CONTRACT: &str = "asteroid_guardian_v1";

/// Number of columns in the contract.
pub const FEATURE_COUNT: usize = 17;

/// Column names in training order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "absolute_magnitude",
    "est_diameter_km",
    "mass_proxy_kg",
    "relative_velocity_km_s",
    "miss_distance_au",
    "orbit_id",
    "orbit_uncertainty",
    "minimum_orbit_intersection",
    "epoch_osculation",
    "eccentricity",
    "semi_major_axis_au",
    "inclination_deg",
    "asc_node_longitude_deg",
    "perihelion_distance_au",
    "perihelion_arg_deg",
    "mean_anomaly_deg",
    "mean_motion_deg_per_day",
];

/// Fixed values for the model features operators do not control.
///
/// Artifacts may ship their own values; any field they omit falls back to the
/// defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillerDefaults {
    pub est_diameter_km: f64,
    pub mass_proxy_kg: f64,
    pub orbit_id: f64,
    pub epoch_osculation: f64,
    pub semi_major_axis_au: f64,
    pub inclination_deg: f64,
    pub asc_node_longitude_deg: f64,
    pub perihelion_distance_au: f64,
    pub perihelion_arg_deg: f64,
    pub mean_anomaly_deg: f64,
    pub mean_motion_deg_per_day: f64,
}

impl Default for FillerDefaults {
    fn default() -> Self {
        Self {
            est_diameter_km: 0.5,
            mass_proxy_kg: 1.4e12,
            orbit_id: 15.0,
            epoch_osculation: 2_450_000.0,
            semi_major_axis_au: 1.2,
            inclination_deg: 10.0,
            asc_node_longitude_deg: 180.0,
            perihelion_distance_au: 0.9,
            perihelion_arg_deg: 150.0,
            mean_anomaly_deg: 200.0,
            mean_motion_deg_per_day: 0.6,
        }
    }
}

impl FillerDefaults {
    /// Combine an observation with the filler values in contract order.
    pub fn contract_row(&self, input: &ObservationInput) -> [f64; FEATURE_COUNT] {
        [
            input.absolute_magnitude,
            self.est_diameter_km,
            self.mass_proxy_kg,
            input.velocity_km_s,
            input.miss_distance_au,
            self.orbit_id,
            f64::from(input.condition_code),
            input.orbit_intersection_au,
            self.epoch_osculation,
            input.eccentricity,
            self.semi_major_axis_au,
            self.inclination_deg,
            self.asc_node_longitude_deg,
            self.perihelion_distance_au,
            self.perihelion_arg_deg,
            self.mean_anomaly_deg,
            self.mean_motion_deg_per_day,
        ]
    }
}

/// A single-row feature vector laid out in a model's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<f64>,
}

impl FeatureRow {
    /// Wrap values that are already in the model's column order.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Build the row for `input`, ordered to match `columns`.
    ///
    /// Columns are matched by name, so a model trained on a permutation of
    /// the contract still receives the right values.
    pub fn assemble(
        input: &ObservationInput,
        defaults: &FillerDefaults,
        columns: &[String],
    ) -> Result<Self> {
        let contract = defaults.contract_row(input);
        let values = column_indices(columns)?
            .into_iter()
            .map(|index| contract[index])
            .collect();
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Contract position of each model column.
///
/// Unknown, duplicate, or missing columns are rejected.
pub fn column_indices(columns: &[String]) -> Result<Vec<usize>> {
    if columns.len() != FEATURE_COUNT {
        return Err(Error::FeatureMismatch {
            message: format!(
                "model expects {} columns, contract {FEATURE_CONTRACT} provides {FEATURE_COUNT}",
                columns.len()
            ),
        });
    }

    let mut seen = [false; FEATURE_COUNT];
    let mut indices = Vec::with_capacity(FEATURE_COUNT);
    for column in columns {
        let index = contract_index(column).ok_or_else(|| Error::FeatureMismatch {
            message: format!("unknown column '{column}'"),
        })?;
        if seen[index] {
            return Err(Error::FeatureMismatch {
                message: format!("duplicate column '{column}'"),
            });
        }
        seen[index] = true;
        indices.push(index);
    }
    Ok(indices)
}

/// Position of a column name within the contract, if it belongs to it.
pub fn contract_index(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|candidate| *candidate == name)
}

/// Contract column names as owned strings, handy for building artifacts.
pub fn contract_columns() -> Vec<String> {
    FEATURE_NAMES.iter().map(|name| name.to_string()).collect()
}
