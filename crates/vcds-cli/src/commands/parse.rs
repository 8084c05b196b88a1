//! Parse command - scan transcripts to diagnostic records

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;
use vcds_core::DiagnosticRecord;
use vcds_parse::{parse_with_diagnostics, read_transcript, write_record, ParseDiagnostics};

use crate::output::{FaultRow, ModuleRow, OutputContext, OutputFormat, SkippedRow};

/// Shown when no transcript is given
pub const USAGE_GUIDANCE: &str = "\
No transcript given; nothing to parse.
Usage: vcds parse <FILE>... [--out-dir <DIR>] [--diagnostics]
Example: vcds parse scans/golf7_autoscan.txt --out-dir data/";

/// Parse each transcript; a failing file does not stop the others
pub fn parse(
    files: &[PathBuf],
    out_dir: Option<&Path>,
    show_diagnostics: bool,
    ctx: &OutputContext,
) -> Result<()> {
    if files.is_empty() {
        ctx.info(USAGE_GUIDANCE);
        return Ok(());
    }

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let mut failed = 0;
    for file in files {
        if let Err(e) = parse_one(file, out_dir, show_diagnostics, ctx) {
            ctx.error(&format!("{:#}", e));
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{} of {} transcript(s) failed", failed, files.len());
    }
    Ok(())
}

fn parse_one(
    file: &Path,
    out_dir: Option<&Path>,
    show_diagnostics: bool,
    ctx: &OutputContext,
) -> Result<()> {
    debug!("Parsing transcript {}", file.display());
    let text = read_transcript(file)?;
    let (record, diagnostics) = parse_with_diagnostics(&text);

    match out_dir {
        Some(dir) => {
            let path = dir.join(record_file_name(file));
            write_record(&path, &record)?;
            ctx.success(&format!(
                "{} -> {} ({} fault(s))",
                file.display(),
                path.display(),
                record.fault_count()
            ));
        }
        None => print_record(&record, ctx)?,
    }

    if show_diagnostics {
        print_diagnostics(&diagnostics, ctx);
    }
    Ok(())
}

/// `<stem>.json` for a transcript path
fn record_file_name(file: &Path) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "record".to_string());
    PathBuf::from(format!("{}.json", stem))
}

fn fault_rows(record: &DiagnosticRecord) -> Vec<FaultRow> {
    record
        .faults
        .iter()
        .flat_map(|block| {
            block.codes.iter().map(|code| FaultRow {
                address: block.address.clone(),
                code_line: code.code_line.clone(),
                status: code.status.to_string(),
                details: code.details.lines().next().unwrap_or("-").to_string(),
            })
        })
        .collect()
}

fn print_record(record: &DiagnosticRecord, ctx: &OutputContext) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        println!("{}", record.to_json()?);
        return Ok(());
    }

    let pairs: Vec<(&str, String)> = record
        .vehicle_info
        .iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect();
    if !pairs.is_empty() {
        ctx.heading("Vehicle");
        ctx.print_kv(&pairs);
    }

    let modules: Vec<ModuleRow> = record
        .modules
        .iter()
        .map(|m| ModuleRow {
            module: m.module.clone(),
            status: m.status.clone(),
        })
        .collect();
    ctx.heading("Modules");
    ctx.print(&modules);

    let faults = fault_rows(record);
    ctx.heading("Faults");
    if faults.is_empty() {
        ctx.info("No faults found");
    } else {
        ctx.print(&faults);
    }
    Ok(())
}

fn print_diagnostics(diagnostics: &ParseDiagnostics, ctx: &OutputContext) {
    ctx.heading("Skipped sections");
    let skipped: Vec<SkippedRow> = diagnostics
        .skipped
        .iter()
        .map(|s| SkippedRow {
            address: s.address.clone(),
            reason: s.reason.to_string(),
        })
        .collect();
    ctx.print(&skipped);

    for mismatch in &diagnostics.count_mismatches {
        ctx.warn(&format!(
            "Address {}: summary declares {} fault(s) but {} were extracted",
            mismatch.address, mismatch.declared, mismatch.extracted
        ));
    }
}
