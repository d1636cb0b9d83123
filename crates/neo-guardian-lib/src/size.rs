//! Physical size estimation from absolute magnitude.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ASSUMED_ALBEDO, BLAST_RADIUS_KM_PER_M, CITY_LEVEL_MIN_M, DIAMETER_CONSTANT_KM,
    KINETIC_CITY_LEVEL_ABOVE_M, KINETIC_TSAR_BOMBA_ABOVE_M, PLANET_KILLER_MIN_M,
    POTENTIALLY_HAZARDOUS_MIN_M,
};

/// Estimate diameter in kilometres from absolute magnitude `h` and geometric albedo.
///
/// Formula: `D_km = 1329 / sqrt(albedo) * 10^(-0.2 * H)`
pub fn diameter_km(h: f64, albedo: f64) -> f64 {
    DIAMETER_CONSTANT_KM / albedo.sqrt() * 10f64.powf(-0.2 * h)
}

/// Estimate diameter in metres using [`ASSUMED_ALBEDO`].
///
/// # Examples
/// ```
/// use neo_guardian_lib::size::estimate_diameter_m;
///
/// let d = estimate_diameter_m(22.0);
/// assert!((d - 136.6).abs() < 0.1);
/// assert!(estimate_diameter_m(18.0) > d);
/// ```
pub fn estimate_diameter_m(h: f64) -> f64 {
    diameter_km(h, ASSUMED_ALBEDO) * 1000.0
}

/// Severity tier derived from estimated diameter. Bounds are closed-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// Under 25 m; burns up or airbursts high in the atmosphere.
    Meteoroid,
    /// 25 m to under 140 m.
    CityLevel,
    /// 140 m to under 1 km.
    PotentiallyHazardous,
    /// 1 km and above.
    PlanetKiller,
}

impl SizeClass {
    pub fn from_diameter_m(diameter_m: f64) -> Self {
        if diameter_m >= PLANET_KILLER_MIN_M {
            SizeClass::PlanetKiller
        } else if diameter_m >= POTENTIALLY_HAZARDOUS_MIN_M {
            SizeClass::PotentiallyHazardous
        } else if diameter_m >= CITY_LEVEL_MIN_M {
            SizeClass::CityLevel
        } else {
            SizeClass::Meteoroid
        }
    }

    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Meteoroid => "Meteoroid",
            SizeClass::CityLevel => "City-Level",
            SizeClass::PotentiallyHazardous => "Potentially Hazardous",
            SizeClass::PlanetKiller => "Planet Killer",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rough impact-energy bracket used by the consequences panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KineticClass {
    SmallAirburst,
    CityLevel,
    TsarBombaPlus,
}

impl KineticClass {
    pub fn from_diameter_m(diameter_m: f64) -> Self {
        if diameter_m > KINETIC_TSAR_BOMBA_ABOVE_M {
            KineticClass::TsarBombaPlus
        } else if diameter_m > KINETIC_CITY_LEVEL_ABOVE_M {
            KineticClass::CityLevel
        } else {
            KineticClass::SmallAirburst
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KineticClass::SmallAirburst => "Small Airburst",
            KineticClass::CityLevel => "City Level",
            KineticClass::TsarBombaPlus => "Tsar Bomba+",
        }
    }
}

/// Approximate blast radius in kilometres.
pub fn blast_radius_km(diameter_m: f64) -> f64 {
    diameter_m * BLAST_RADIUS_KM_PER_M
}
