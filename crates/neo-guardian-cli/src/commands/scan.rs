//! `scan`: assess one observation and show the full report.

use anyhow::{Context, Result};
use chrono::{Local, NaiveTime, Timelike};
use tracing::info;

use neo_guardian_lib::{new_designation, ReportRenderMode, ScanReport, SessionLog};

use crate::output::{format_scan_text, to_json, OutputFormat};
use crate::terminal::{ColorPalette, Glyphs};
use crate::{GlobalOptions, ScanArgs};

pub fn handle_scan(options: &GlobalOptions, args: &ScanArgs) -> Result<()> {
    let assessor = super::load_assessor(options.model.as_deref())?;

    let input = args.observation();
    input.validate().context("observation rejected")?;

    let designation = args.designation.clone().unwrap_or_else(new_designation);
    let (entry, log) = assessor
        .scan(SessionLog::new(), designation, input, now())
        .context("assessment failed")?;
    let report = ScanReport::from_entry(&entry);

    match options.format {
        OutputFormat::Text => print!(
            "{}",
            format_scan_text(&report, &ColorPalette::detect(), &Glyphs::detect())
        ),
        OutputFormat::Rich => print!("{}", report.render(ReportRenderMode::RichText)),
        OutputFormat::Json => println!("{}", to_json(&report)?),
    }

    if let Some(path) = &args.export {
        log.export_csv(path)
            .with_context(|| format!("failed to export session log to {}", path.display()))?;
        info!(path = %path.display(), rows = log.len(), "exported session log");
    }
    Ok(())
}

/// Local wall-clock time truncated to whole seconds.
pub(crate) fn now() -> NaiveTime {
    let time = Local::now().time();
    time.with_nanosecond(0).unwrap_or(time)
}
