//! Console output for scans, batch sessions and model analytics.
//!
//! Formatters return strings so they can be tested without capturing
//! stdout; `main.rs` and the command handlers do the printing.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use neo_guardian_lib::report::{BarKind, ScaleBar};
use neo_guardian_lib::{
    FeatureImportance, ModelInfo, OrbitPoint, ReportRenderMode, ScanReport, SessionLog,
    SESSION_CSV_HEADER,
};

use crate::terminal::{supports_unicode, ColorPalette, Glyphs};

/// Width in characters of the longest bar in a chart.
pub const BAR_WIDTH: usize = 40;

/// Orbit plot grid size.
pub const ORBIT_COLUMNS: usize = 41;
pub const ORBIT_ROWS: usize = 15;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Console panels with charts.
    Text,
    /// Markdown report.
    Rich,
    /// Machine-readable JSON on stdout.
    Json,
}

impl OutputFormat {
    /// Decorations (logo, footer) would corrupt JSON output.
    pub fn allows_decorations(self) -> bool {
        !matches!(self, OutputFormat::Json)
    }
}

/// Print the console banner.
pub fn print_logo() {
    let palette = ColorPalette::detect();
    let (cyan, orange, reset) = (palette.cyan, palette.orange, palette.reset);

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────────╮{reset}
{cyan}│{orange}   N E O   G U A R D I A N                {cyan}│{reset}
{cyan}├──────────────────────────────────────────┤{reset}
{cyan}│{orange}   planetary defense console              {cyan}│{reset}
{cyan}╰──────────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+--------------------------------------------+
|  NEO GUARDIAN                              |
|  >> PLANETARY DEFENSE CONSOLE              |
+--------------------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    let palette = ColorPalette::detect();
    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{elapsed_ms}ms")
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{}Completed in {time_str}{}", palette.gray, palette.reset);
}

/// Serialize `value` as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output as JSON")
}

/// Full console view of one scan: verdict badge, report panels, scale chart
/// and orbit plot.
pub fn format_scan_text(report: &ScanReport, palette: &ColorPalette, glyphs: &Glyphs) -> String {
    let mut buffer = String::new();
    let hazardous = report.result.is_hazardous;
    let _ = writeln!(
        buffer,
        "{}{}{} {}{}{}",
        palette.verdict_badge(hazardous),
        format_badge(report.result.status_label()),
        palette.reset,
        palette.bold,
        report.designation,
        palette.reset,
    );
    let _ = writeln!(buffer);
    buffer.push_str(&report.render(ReportRenderMode::PlainText));
    let _ = writeln!(buffer);
    let _ = writeln!(buffer, "Scale chart:");
    buffer.push_str(&scale_chart(&report.scale, palette, glyphs, BAR_WIDTH));
    let _ = writeln!(buffer);
    let _ = writeln!(
        buffer,
        "Orbit (e = {:.2}, {} points):",
        report.input.eccentricity,
        report.orbit.len()
    );
    buffer.push_str(&orbit_plot(&report.orbit, glyphs, ORBIT_COLUMNS, ORBIT_ROWS));
    buffer
}

fn format_badge(label: &str) -> String {
    format!(" {label} ")
}

/// Horizontal bars scaled to the largest entry.
pub fn scale_chart(
    bars: &[ScaleBar],
    palette: &ColorPalette,
    glyphs: &Glyphs,
    width: usize,
) -> String {
    let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
    let max = bars.iter().map(|b| b.size_m).fold(0.0_f64, f64::max);

    let mut buffer = String::new();
    for bar in bars {
        let color = match bar.kind {
            BarKind::Landmark => palette.cyan,
            BarKind::Threat => palette.orange,
        };
        let fill = bar_length(bar.size_m, max, width);
        let _ = writeln!(
            buffer,
            "  {:<label_width$} {color}{}{reset} {:.0} m",
            bar.label,
            glyphs.bar.to_string().repeat(fill),
            bar.size_m,
            reset = palette.reset,
        );
    }
    buffer
}

/// Number of glyphs for `value` on a chart whose largest value is `max`.
/// Any positive value gets at least one glyph.
pub fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if value <= 0.0 || max <= 0.0 {
        return 0;
    }
    let scaled = (value / max * width as f64).round() as usize;
    scaled.clamp(1, width)
}

/// Plot the orbit outline on a character grid with the Sun at the center.
///
/// Points are expected in `[-1, 1]` on both axes; y grows upward.
pub fn orbit_plot(points: &[OrbitPoint], glyphs: &Glyphs, columns: usize, rows: usize) -> String {
    if columns == 0 || rows == 0 {
        return String::new();
    }
    let mut grid = vec![vec![' '; columns]; rows];
    let to_cell = |value: f64, cells: usize| -> usize {
        let unit = ((value + 1.0) / 2.0).clamp(0.0, 1.0);
        (unit * (cells - 1) as f64).round() as usize
    };

    grid[to_cell(0.0, rows)][to_cell(0.0, columns)] = glyphs.sun;
    for point in points {
        let col = to_cell(point.x, columns);
        let row = rows - 1 - to_cell(point.y, rows);
        grid[row][col] = glyphs.orbit;
    }

    let mut buffer = String::new();
    for row in grid {
        let line: String = row.into_iter().collect();
        let _ = writeln!(buffer, "  {}", line.trim_end());
    }
    buffer
}

/// Session log as an aligned table with the export columns.
pub fn format_session_table(log: &SessionLog, palette: &ColorPalette, glyphs: &Glyphs) -> String {
    let rows: Vec<[String; 8]> = log.entries().iter().map(|e| e.csv_record()).collect();
    let mut widths: Vec<usize> = SESSION_CSV_HEADER.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut buffer = String::new();
    let header: Vec<String> = SESSION_CSV_HEADER
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    let _ = writeln!(buffer, "{}{}{}", palette.bold, header.join("  ").trim_end(), palette.reset);
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let _ = writeln!(buffer, "{}", glyphs.rule.to_string().repeat(rule_len));

    for (row, entry) in rows.iter().zip(log.entries()) {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(index, (cell, w))| {
                let padded = format!("{cell:<w$}");
                if index == RESULT_COLUMN {
                    let color = palette.verdict_text(entry.result.is_hazardous);
                    format!("{color}{padded}{}", palette.reset)
                } else {
                    padded
                }
            })
            .collect();
        let _ = writeln!(buffer, "{}", cells.join("  ").trim_end());
    }
    buffer
}

const RESULT_COLUMN: usize = 6;

/// One-line session summary, e.g. `Scanned 3 objects: 2 hazardous, 1 safe`.
pub fn format_session_summary(log: &SessionLog) -> String {
    let hazardous = log.hazardous_count();
    let noun = if log.len() == 1 { "object" } else { "objects" };
    format!(
        "Scanned {} {noun}: {hazardous} hazardous, {} safe",
        log.len(),
        log.len() - hazardous
    )
}

/// Importance bars plus the model metadata block.
pub fn format_analytics_text(
    info: Option<&ModelInfo>,
    table: &[FeatureImportance],
    palette: &ColorPalette,
    glyphs: &Glyphs,
) -> String {
    let mut buffer = String::new();
    match info {
        Some(info) => {
            let _ = writeln!(buffer, "Model: {}{}{}", palette.bold, info.name, palette.reset);
            let _ = writeln!(buffer, "  kind: {}", info.kind);
            let _ = writeln!(buffer, "  feature contract: {}", info.contract);
            let _ = writeln!(buffer, "  features: {}", info.feature_count);
        }
        None => {
            let _ = writeln!(buffer, "Model: <unnamed classifier>");
        }
    }
    let source = if importance_source(info) == ImportanceSource::Artifact {
        "artifact"
    } else {
        "reference"
    };
    let _ = writeln!(buffer);
    let _ = writeln!(buffer, "Feature importance ({source} weights):");

    let label_width = table.iter().map(|row| row.feature.len()).max().unwrap_or(0);
    let max = table.iter().map(|row| row.weight).fold(0.0_f64, f64::max);
    for row in table {
        let fill = bar_length(row.weight, max, BAR_WIDTH);
        let _ = writeln!(
            buffer,
            "  {:<label_width$} {}{}{} {:.2}",
            row.feature,
            palette.cyan,
            glyphs.bar.to_string().repeat(fill),
            palette.reset,
            row.weight,
        );
    }
    buffer
}

/// Where the displayed importance weights came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceSource {
    Artifact,
    Reference,
}

pub fn importance_source(info: Option<&ModelInfo>) -> ImportanceSource {
    match info {
        Some(info) if !info.feature_importances.is_empty() => ImportanceSource::Artifact,
        _ => ImportanceSource::Reference,
    }
}

/// JSON body of `analytics`.
#[derive(Debug, Serialize)]
pub struct AnalyticsOutput<'a> {
    pub model: Option<&'a ModelInfo>,
    pub source: ImportanceSource,
    pub importances: &'a [FeatureImportance],
}

/// JSON body of `batch`.
#[derive(Debug, Serialize)]
pub struct BatchOutput<'a> {
    pub scanned: usize,
    pub hazardous: usize,
    pub entries: &'a SessionLog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{entry, sample_info};
    use neo_guardian_lib::{orbit_outline, ObservationInput};

    #[test]
    fn bar_length_scales_and_keeps_tiny_values_visible() {
        assert_eq!(bar_length(2000.0, 2000.0, 40), 40);
        assert_eq!(bar_length(1000.0, 2000.0, 40), 20);
        assert_eq!(bar_length(1.0, 2000.0, 40), 1);
        assert_eq!(bar_length(0.0, 2000.0, 40), 0);
    }

    #[test]
    fn scale_chart_has_one_line_per_bar() {
        let report = ScanReport::new(
            "NEO-2026-B21",
            ObservationInput::default(),
            entry("NEO-2026-B21", true, 0.9, 861.9).result,
        );
        let chart = scale_chart(
            &report.scale,
            &ColorPalette::plain(),
            &Glyphs::ascii(),
            BAR_WIDTH,
        );
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[4].contains("Your Asteroid"));
        assert!(lines[4].contains(&"#".repeat(BAR_WIDTH)));
        assert!(lines[0].starts_with("  Stadium"));
    }

    #[test]
    fn orbit_plot_marks_sun_and_path() {
        let points = orbit_outline(0.0, 100);
        let plot = orbit_plot(&points, &Glyphs::ascii(), 21, 11);
        let lines: Vec<&str> = plot.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[5].contains('O'));
        assert!(lines[0].contains('*'));
        assert!(lines[10].contains('*'));
    }

    #[test]
    fn session_table_aligns_columns() {
        let mut log = SessionLog::new();
        log.push(entry("NEO-2026-A10", false, 0.148, 136.6));
        log.push(entry("NEO-2026-B21", true, 0.622, 861.9));
        let table = format_session_table(&log, &ColorPalette::plain(), &Glyphs::ascii());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Time"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("SAFE"));
        assert!(lines[3].contains("HAZARDOUS"));
        assert_eq!(lines[2].find("NEO"), lines[3].find("NEO"));
    }

    #[test]
    fn session_summary_counts_verdicts() {
        let mut log = SessionLog::new();
        log.push(entry("NEO-2026-A10", false, 0.1, 50.0));
        assert_eq!(format_session_summary(&log), "Scanned 1 object: 0 hazardous, 1 safe");
        log.push(entry("NEO-2026-B21", true, 0.9, 900.0));
        assert_eq!(format_session_summary(&log), "Scanned 2 objects: 1 hazardous, 1 safe");
    }

    #[test]
    fn analytics_reports_reference_weights_without_artifact_importances() {
        let info = sample_info(Vec::new());
        let table = neo_guardian_lib::importance_table(Some(&info));
        let text = format_analytics_text(
            Some(&info),
            &table,
            &ColorPalette::plain(),
            &Glyphs::ascii(),
        );
        assert!(text.contains("Model: unit-model"));
        assert!(text.contains("Feature importance (reference weights):"));
        assert!(text.contains("Magnitude"));
        assert!(text.contains("0.45"));
    }

    #[test]
    fn json_output_has_no_decorations() {
        assert!(OutputFormat::Text.allows_decorations());
        assert!(OutputFormat::Rich.allows_decorations());
        assert!(!OutputFormat::Json.allows_decorations());
    }
}
