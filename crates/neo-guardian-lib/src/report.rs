//! Per-scan report panels: intelligence brief, scale comparison, impact
//! estimate and orbit outline, plus plain and Markdown rendering.

use std::fmt::Write;

use serde::Serialize;

use crate::assess::AssessmentResult;
use crate::constants::{CRITICAL_TRACKING_PROBABILITY, ORBIT_SAMPLES, SCALE_DISPLAY_CAP_M};
use crate::observation::ObservationInput;
use crate::orbit::{orbit_outline, OrbitPoint};
use crate::session::{format_confidence, ScanEntry};
use crate::size::{blast_radius_km, KineticClass};

/// Landmarks plotted next to the asteroid in the scale comparison, in metres.
pub const LANDMARKS: [(&str, f64); 4] = [
    ("Stadium", 110.0),
    ("Pyramid", 138.0),
    ("Eiffel Tower", 300.0),
    ("Empire State", 443.0),
];

/// Presentation style for turning a [`ScanReport`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRenderMode {
    PlainText,
    RichText,
}

/// Whether a comparison bar is a reference landmark or the scanned object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    Landmark,
    Threat,
}

/// One bar of the real-world scale comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleBar {
    pub label: String,
    pub size_m: f64,
    pub kind: BarKind,
}

/// Impact consequences panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactEstimate {
    pub diameter_m: f64,
    pub kinetic_class: KineticClass,
    pub blast_radius_km: f64,
}

/// Everything a front end needs to display one scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub designation: String,
    pub input: ObservationInput,
    pub result: AssessmentResult,
    pub brief: String,
    pub action: String,
    pub scale: Vec<ScaleBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oversize_notice: Option<String>,
    pub impact: ImpactEstimate,
    pub orbit: Vec<OrbitPoint>,
}

impl ScanReport {
    /// Derive the display panels for a completed scan.
    pub fn from_entry(entry: &ScanEntry) -> Self {
        Self::new(&entry.designation, entry.input, entry.result)
    }

    pub fn new(designation: &str, input: ObservationInput, result: AssessmentResult) -> Self {
        let diameter = result.estimated_diameter_m;

        let brief = if result.is_hazardous {
            format!(
                "Warning: {designation} exhibits high-risk parameters. Its Magnitude ({:?}) suggests a major mass.",
                input.absolute_magnitude
            )
        } else {
            format!("Status: {designation} is currently non-threatening.")
        };

        let action = if result.hazard_probability > CRITICAL_TRACKING_PROBABILITY {
            "Critical tracking required."
        } else {
            "Routine database update."
        };

        let mut scale: Vec<ScaleBar> = LANDMARKS
            .iter()
            .map(|(label, size_m)| ScaleBar {
                label: label.to_string(),
                size_m: *size_m,
                kind: BarKind::Landmark,
            })
            .collect();
        scale.push(ScaleBar {
            label: "Your Asteroid".to_string(),
            size_m: diameter.min(SCALE_DISPLAY_CAP_M),
            kind: BarKind::Threat,
        });

        let oversize_notice = (diameter > SCALE_DISPLAY_CAP_M).then(|| {
            format!(
                "This asteroid is massive (~{}km)! It is significantly larger than any skyscraper.",
                (diameter / 1000.0).trunc()
            )
        });

        Self {
            designation: designation.to_string(),
            input,
            result,
            brief,
            action: action.to_string(),
            scale,
            oversize_notice,
            impact: ImpactEstimate {
                diameter_m: diameter,
                kinetic_class: KineticClass::from_diameter_m(diameter),
                blast_radius_km: blast_radius_km(diameter),
            },
            orbit: orbit_outline(input.eccentricity, ORBIT_SAMPLES),
        }
    }

    /// Render the report using the requested textual mode.
    pub fn render(&self, mode: ReportRenderMode) -> String {
        match mode {
            ReportRenderMode::PlainText => self.render_plain(),
            ReportRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Analysis for Object: {}", self.designation);
        let _ = writeln!(
            buffer,
            "Status: {} (hazard probability {})",
            self.result.status_label(),
            format_confidence(self.result.hazard_probability)
        );
        let _ = writeln!(buffer, "Size class: {}", self.result.size_class);
        let _ = writeln!(buffer, "{}", self.brief);
        let _ = writeln!(buffer, "Action: {}", self.action);
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Scale comparison:");
        for bar in &self.scale {
            let _ = writeln!(buffer, "  {:<14} {:>6.0} m", bar.label, bar.size_m);
        }
        if let Some(notice) = &self.oversize_notice {
            let _ = writeln!(buffer, "  {notice}");
        }
        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "Estimated Diameter: {} meters",
            self.impact.diameter_m.trunc()
        );
        let _ = writeln!(buffer, "Kinetic Class: {}", self.impact.kinetic_class.label());
        let _ = writeln!(buffer, "Blast Radius: ~{:.1} km", self.impact.blast_radius_km);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "## Analysis for Object: `{}`", self.designation);
        let _ = writeln!(
            buffer,
            "**{}** - hazard probability **{}** ({})",
            self.result.status_label(),
            format_confidence(self.result.hazard_probability),
            self.result.size_class
        );
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "> {}", self.brief);
        let _ = writeln!(buffer, ">");
        let _ = writeln!(buffer, "> _Action:_ {}", self.action);
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "| Object | Size (m) | Type |");
        let _ = writeln!(buffer, "|---|---:|---|");
        for bar in &self.scale {
            let kind = match bar.kind {
                BarKind::Landmark => "Landmark",
                BarKind::Threat => "Threat",
            };
            let _ = writeln!(buffer, "| {} | {:.0} | {} |", bar.label, bar.size_m, kind);
        }
        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "* **Estimated Diameter:** {} meters",
            self.impact.diameter_m.trunc()
        );
        let _ = writeln!(
            buffer,
            "* **Kinetic Class:** {}",
            self.impact.kinetic_class.label()
        );
        let _ = writeln!(
            buffer,
            "* **Blast Radius:** ~{:.1} km",
            self.impact.blast_radius_km
        );
        buffer
    }
}
