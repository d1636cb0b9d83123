//! Batch observation files.
//!
//! A batch file is CSV with one observation per row:
//!
//! ```text
//! designation,mag,velocity,miss_distance,moid,condition_code,eccentricity
//! NEO-2026-A10,22.0,15.0,0.05,0.01,5,0.5
//! ,18.0,20.0,0.05,0.01,5,0.5
//! ```
//!
//! The `designation` column is optional; blank or missing designations are
//! generated when the batch is scanned.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::observation::ObservationInput;

/// One parsed and validated row of a batch file.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRecord {
    pub designation: Option<String>,
    pub input: ObservationInput,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    designation: Option<String>,
    #[serde(alias = "absolute_magnitude", alias = "h")]
    mag: f64,
    #[serde(alias = "velocity_km_s", alias = "speed")]
    velocity: f64,
    #[serde(alias = "miss_distance_au")]
    miss_distance: f64,
    #[serde(alias = "orbit_intersection_au")]
    moid: f64,
    #[serde(alias = "u")]
    condition_code: u8,
    eccentricity: f64,
}

/// Read and validate observations from a CSV file.
pub fn read_observations_path(path: &Path) -> Result<Vec<ObservationRecord>> {
    let file = fs::File::open(path)?;
    read_observations(file)
}

/// Read and validate observations from any CSV source.
///
/// Rows are numbered from 2 (the header is row 1) in error messages.
pub fn read_observations<R: Read>(reader: R) -> Result<Vec<ObservationRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let row_number = index as u64 + 2;
        let raw = row.map_err(|err| Error::ObservationRecord {
            row: row_number,
            message: err.to_string(),
        })?;

        let input = ObservationInput {
            absolute_magnitude: raw.mag,
            velocity_km_s: raw.velocity,
            miss_distance_au: raw.miss_distance,
            orbit_intersection_au: raw.moid,
            condition_code: raw.condition_code,
            eccentricity: raw.eccentricity,
        };
        input.validate().map_err(|err| Error::ObservationRecord {
            row: row_number,
            message: err.to_string(),
        })?;

        let designation = raw
            .designation
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        records.push(ObservationRecord { designation, input });
    }

    Ok(records)
}
