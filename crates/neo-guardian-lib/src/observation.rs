//! User-supplied observation parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{
    MAX_ABSOLUTE_MAGNITUDE, MAX_CONDITION_CODE, MAX_ECCENTRICITY, MIN_ABSOLUTE_MAGNITUDE,
};
use crate::error::{Error, Result};

/// The six observation fields an operator controls for a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationInput {
    /// Absolute magnitude H (10-30). Lower is larger.
    pub absolute_magnitude: f64,
    /// Relative velocity in km/s.
    pub velocity_km_s: f64,
    /// Miss distance in astronomical units.
    pub miss_distance_au: f64,
    /// Minimum orbit intersection distance (MOID) in astronomical units.
    pub orbit_intersection_au: f64,
    /// Orbit condition code U (0-9).
    pub condition_code: u8,
    /// Orbit eccentricity (0-0.95).
    pub eccentricity: f64,
}

impl Default for ObservationInput {
    fn default() -> Self {
        Self {
            absolute_magnitude: 22.0,
            velocity_km_s: 15.0,
            miss_distance_au: 0.05,
            orbit_intersection_au: 0.01,
            condition_code: 5,
            eccentricity: 0.5,
        }
    }
}

impl ObservationInput {
    /// Check every field against the ranges the input layer allows.
    ///
    /// The assessor itself assumes valid input; callers collecting values
    /// from users or files run this first.
    pub fn validate(&self) -> Result<()> {
        check_range(
            "absolute_magnitude",
            self.absolute_magnitude,
            MIN_ABSOLUTE_MAGNITUDE,
            MAX_ABSOLUTE_MAGNITUDE,
        )?;
        check_non_negative("velocity_km_s", self.velocity_km_s)?;
        check_non_negative("miss_distance_au", self.miss_distance_au)?;
        check_non_negative("orbit_intersection_au", self.orbit_intersection_au)?;

        if self.condition_code > MAX_CONDITION_CODE {
            return Err(Error::InvalidObservation {
                field: "condition_code",
                message: format!(
                    "must be between 0 and {MAX_CONDITION_CODE}, got {}",
                    self.condition_code
                ),
            });
        }

        check_range("eccentricity", self.eccentricity, 0.0, MAX_ECCENTRICITY)
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidObservation {
            field,
            message: format!("must be finite and non-negative, got {value}"),
        });
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() || !(min..=max).contains(&value) {
        return Err(Error::InvalidObservation {
            field,
            message: format!("must be between {min} and {max}, got {value}"),
        });
    }
    Ok(())
}
