//! Session-scoped scan history and CSV export.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::NaiveTime;
use csv::WriterBuilder;
use serde::Serialize;

use crate::assess::AssessmentResult;
use crate::error::Result;
use crate::observation::ObservationInput;

/// Column headers of the exported mission log, in order.
pub const SESSION_CSV_HEADER: [&str; 8] = [
    "Time",
    "ID",
    "Mag(H)",
    "Speed",
    "MOID",
    "Diameter(m)",
    "Result",
    "Confidence",
];

/// One completed scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanEntry {
    pub time: NaiveTime,
    pub designation: String,
    pub input: ObservationInput,
    pub result: AssessmentResult,
}

impl ScanEntry {
    /// Cells for this entry in [`SESSION_CSV_HEADER`] order.
    pub fn csv_record(&self) -> [String; 8] {
        [
            self.time.format("%H:%M:%S").to_string(),
            self.designation.clone(),
            format!("{:.1}", self.input.absolute_magnitude),
            format!("{:.1}", self.input.velocity_km_s),
            format!("{:.5}", self.input.orbit_intersection_au),
            format!("{:.0}", self.result.estimated_diameter_m.trunc()),
            self.result.status_label().to_string(),
            format_confidence(self.result.hazard_probability),
        ]
    }
}

/// Probability rendered as a one-decimal percentage, e.g. `87.5%`.
pub fn format_confidence(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Append-only log of scans performed during one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SessionLog {
    entries: Vec<ScanEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ScanEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ScanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every recorded scan.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries classified as hazardous.
    pub fn hazardous_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.result.is_hazardous)
            .count()
    }

    /// Write the log as CSV. The header row is always present.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        csv_writer.write_record(SESSION_CSV_HEADER)?;
        for entry in &self.entries {
            csv_writer.write_record(entry.csv_record())?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Render the log to an in-memory CSV string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Export the log to `path`, creating parent directories as needed.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = fs::File::create(path)?;
        self.write_csv(file)
    }
}

impl<'a> IntoIterator for &'a SessionLog {
    type Item = &'a ScanEntry;
    type IntoIter = std::slice::Iter<'a, ScanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
