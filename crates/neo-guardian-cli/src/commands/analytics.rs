//! `analytics`: which observation inputs the loaded model weighs most.

use anyhow::Result;

use neo_guardian_lib::importance_table;

use crate::output::{
    format_analytics_text, importance_source, to_json, AnalyticsOutput, OutputFormat,
};
use crate::terminal::{ColorPalette, Glyphs};
use crate::GlobalOptions;

pub fn handle_analytics(options: &GlobalOptions) -> Result<()> {
    let assessor = super::load_assessor(options.model.as_deref())?;
    let info = assessor.model_info();
    let table = importance_table(info);

    match options.format {
        OutputFormat::Text | OutputFormat::Rich => print!(
            "{}",
            format_analytics_text(info, &table, &ColorPalette::detect(), &Glyphs::detect())
        ),
        OutputFormat::Json => {
            let body = AnalyticsOutput {
                model: info,
                source: importance_source(info),
                importances: &table,
            };
            println!("{}", to_json(&body)?);
        }
    }
    Ok(())
}
