//! Report command - Markdown report from measurements and a scan record

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use vcds_conv::{load_vehicle_data, VehicleConfig};
use vcds_report::{render_markdown, write_report, ReportInput};

use crate::output::OutputContext;

/// Inputs for the report command
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Vehicle configuration (YAML); no measurements without it
    pub vehicle: Option<PathBuf>,
    pub data_dir: PathBuf,
    /// Diagnostic record (JSON)
    pub record: Option<PathBuf>,
    pub out: PathBuf,
    pub comment: Option<String>,
}

/// Render and write the report
pub fn report(options: &ReportOptions, ctx: &OutputContext) -> Result<()> {
    let config = options
        .vehicle
        .as_ref()
        .map(|path| {
            VehicleConfig::from_file(path)
                .with_context(|| format!("Failed to load vehicle config: {}", path.display()))
        })
        .transpose()?;

    let data = config
        .as_ref()
        .map(|config| load_vehicle_data(&options.data_dir, config))
        .transpose()
        .context("Failed to load measurement tables")?;

    let record = options
        .record
        .as_ref()
        .map(vcds_parse::read_record)
        .transpose()?;

    if data.is_none() && record.is_none() {
        ctx.info("Nothing to report: pass --vehicle <YAML> and/or --record <JSON>");
        return Ok(());
    }

    let markdown = render_markdown(&ReportInput {
        vehicle: config.as_ref().and_then(VehicleConfig::display_name),
        record: record.as_ref(),
        data: data.as_ref(),
        comment: options.comment.as_deref(),
        generated_at: Some(Utc::now()),
    });

    if let Some(parent) = options.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
    }
    write_report(&options.out, &markdown)?;

    ctx.success(&format!("Report written to {}", options.out.display()));
    Ok(())
}
