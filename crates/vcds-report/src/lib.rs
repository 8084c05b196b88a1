//! vcds-report - Markdown reports for VCDS scans
//!
//! Renders a vehicle report from a parsed scan record and/or loaded
//! measurement tables.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;
use vcds_core::{DiagnosticRecord, Measurement, ParsedData, VcdsError, VcdsResult};

/// Report title
pub const REPORT_TITLE: &str = "VCDS Vehicle Diagnostic Report";

/// Everything a report can be built from
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportInput<'a> {
    /// Vehicle name shown under the title
    pub vehicle: Option<&'a str>,
    pub record: Option<&'a DiagnosticRecord>,
    pub data: Option<&'a ParsedData>,
    /// Free-text analyst comment
    pub comment: Option<&'a str>,
    pub generated_at: Option<DateTime<Utc>>,
}

/// Escape a value for use inside a Markdown table cell
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn render_measurements(out: &mut String, heading: &str, measurements: &[Measurement]) {
    let _ = writeln!(out, "## {}\n", heading);
    if measurements.is_empty() {
        out.push_str("_No data._\n");
    }
    for m in measurements {
        let _ = writeln!(out, "- {}: {} = {}", m.group, m.description, m.actual);
    }
    out.push('\n');
}

fn render_record(out: &mut String, record: &DiagnosticRecord) {
    if !record.vehicle_info.is_empty() {
        out.push_str("## Vehicle\n\n| Field | Value |\n|-------|-------|\n");
        for (label, value) in record.vehicle_info.iter() {
            let _ = writeln!(out, "| {} | {} |", cell(label), cell(value));
        }
        out.push('\n');
    }

    out.push_str("## Module Status\n\n");
    if record.modules.is_empty() {
        out.push_str("_No module status lines._\n\n");
    } else {
        out.push_str("| Module | Status |\n|--------|--------|\n");
        for m in &record.modules {
            let _ = writeln!(out, "| {} | {} |", cell(&m.module), cell(&m.status));
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "## Faults\n\n{} fault(s) in {} module(s), {} intermittent.\n",
        record.fault_count(),
        record.faults.len(),
        record.intermittent_count()
    );
    for block in &record.faults {
        let _ = writeln!(out, "### Address {}: {}\n", block.address, block.description);
        for code in &block.codes {
            let _ = writeln!(out, "- **{}** ({})", code.code_line, code.status);
            if !code.details.is_empty() {
                let _ = writeln!(out, "\n```\n{}\n```\n", code.details);
            }
        }
        out.push('\n');
    }
}

/// Render the Markdown report
pub fn render_markdown(input: &ReportInput<'_>) -> String {
    let mut out = format!("# {}\n\n", REPORT_TITLE);

    if let Some(vehicle) = input.vehicle {
        let _ = writeln!(out, "Vehicle: **{}**  ", vehicle);
    }
    if let Some(at) = input.generated_at {
        let _ = writeln!(out, "Generated: {}", at.format("%Y-%m-%d %H:%M UTC"));
    }
    if input.vehicle.is_some() || input.generated_at.is_some() {
        out.push('\n');
    }

    if let Some(record) = input.record {
        render_record(&mut out, record);
    }

    if let Some(data) = input.data {
        render_measurements(&mut out, "Measuring Blocks", &data.blockmap);
        render_measurements(&mut out, "Adaptation", &data.adaptation);
    }

    out.push_str("## Comment\n\n");
    out.push_str(input.comment.unwrap_or("_No comment._"));
    out.push('\n');
    out
}

/// Write a rendered report
pub fn write_report(path: impl AsRef<Path>, markdown: &str) -> VcdsResult<()> {
    let path = path.as_ref();
    std::fs::write(path, markdown).map_err(|e| VcdsError::write(path, e))?;
    info!("Wrote report to {}", path.display());
    Ok(())
}
