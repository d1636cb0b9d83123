//! `batch`: scan every row of an observation file into one session log.

use anyhow::{Context, Result};
use tracing::{info, warn};

use neo_guardian_lib::{new_designation, read_observations_path, SessionLog};

use crate::output::{
    format_session_summary, format_session_table, to_json, BatchOutput, OutputFormat,
};
use crate::terminal::{ColorPalette, Glyphs};
use crate::{BatchArgs, GlobalOptions};

pub fn handle_batch(options: &GlobalOptions, args: &BatchArgs) -> Result<()> {
    let assessor = super::load_assessor(options.model.as_deref())?;

    let records = read_observations_path(&args.input)
        .with_context(|| format!("failed to read observations from {}", args.input.display()))?;
    if records.is_empty() {
        warn!(path = %args.input.display(), "observation file has no rows");
    }

    let time = super::scan::now();
    let mut log = SessionLog::new();
    for record in records {
        let designation = record.designation.unwrap_or_else(new_designation);
        let (_, next) = assessor
            .scan(log, designation.as_str(), record.input, time)
            .with_context(|| format!("assessment failed for {designation}"))?;
        log = next;
    }
    info!(
        scanned = log.len(),
        hazardous = log.hazardous_count(),
        "batch complete"
    );

    match options.format {
        OutputFormat::Text | OutputFormat::Rich => {
            let palette = ColorPalette::detect();
            print!("{}", format_session_table(&log, &palette, &Glyphs::detect()));
            println!();
            println!("{}", format_session_summary(&log));
        }
        OutputFormat::Json => {
            let body = BatchOutput {
                scanned: log.len(),
                hazardous: log.hazardous_count(),
                entries: &log,
            };
            println!("{}", to_json(&body)?);
        }
    }

    if let Some(path) = &args.export {
        log.export_csv(path)
            .with_context(|| format!("failed to export session log to {}", path.display()))?;
        info!(path = %path.display(), rows = log.len(), "exported session log");
    }
    Ok(())
}
