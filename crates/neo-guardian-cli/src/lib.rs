//! NEO Guardian CLI library.
//!
//! Argument definitions, subcommand handlers, terminal styling and output
//! formatting for the `neo-guardian` binary.

use std::path::PathBuf;

use clap::Args;

use neo_guardian_lib::ObservationInput;

pub mod commands;
pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;

use output::OutputFormat;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Model artifact file, or a directory containing `asteroid_guardian_v1.json`.
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Suppress the logo banner and the timing footer.
    #[arg(long, global = true)]
    pub no_logo: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

/// Observation fields for a single scan. Unset fields use the console defaults.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Absolute magnitude H (10-30). Lower is larger.
    #[arg(long = "mag", default_value_t = 22.0)]
    pub magnitude: f64,

    /// Relative velocity in km/s.
    #[arg(long, default_value_t = 15.0)]
    pub velocity: f64,

    /// Miss distance in AU.
    #[arg(long = "miss-distance", default_value_t = 0.05)]
    pub miss_distance: f64,

    /// Minimum orbit intersection distance in AU.
    #[arg(long, default_value_t = 0.01)]
    pub moid: f64,

    /// Orbit condition code U (0-9).
    #[arg(
        long = "condition-code",
        default_value_t = 5,
        value_parser = clap::value_parser!(u8).range(0..=9)
    )]
    pub condition_code: u8,

    /// Orbit eccentricity (0-0.95).
    #[arg(long, default_value_t = 0.5)]
    pub eccentricity: f64,

    /// Designation to record; generated when omitted.
    #[arg(long)]
    pub designation: Option<String>,

    /// Write the session log to this CSV file after the scan.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl ScanArgs {
    pub fn observation(&self) -> ObservationInput {
        ObservationInput {
            absolute_magnitude: self.magnitude,
            velocity_km_s: self.velocity,
            miss_distance_au: self.miss_distance,
            orbit_intersection_au: self.moid,
            condition_code: self.condition_code,
            eccentricity: self.eccentricity,
        }
    }
}

/// Arguments for scanning a file of observations.
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// CSV file with one observation per row.
    #[arg(long)]
    pub input: PathBuf,

    /// Write the session log to this CSV file after all rows are scanned.
    #[arg(long)]
    pub export: Option<PathBuf>,
}
