//! Cleansing of raw measurement exports
//!
//! Raw exports come in a local 8-bit code page with comment lines, repeated
//! headers and ragged rows. Cleaning keeps only 2-4 column data rows, repairs
//! the degree sign in units and writes a UTF-8 table with a fixed header.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::csv::join_csv;
use crate::error::{ConvError, ConvResult};

/// Header of a cleaned table
pub const CLEAN_HEADER: [&str; 4] = ["Group", "Description", "Actual", "Unit"];

/// Unit written when the export has no unit column
pub const MISSING_UNIT: &str = "--";

/// One data row of a cleaned table
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRow {
    pub group: String,
    pub description: String,
    /// Numeric value; `None` when absent or not a number
    pub actual: Option<f64>,
    pub unit: String,
}

impl CleanRow {
    /// Actual value as written to the cleaned table
    pub fn actual_text(&self) -> String {
        self.actual.map(|v| v.to_string()).unwrap_or_default()
    }
}

/// Rows kept from one export plus the number of rejected lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedTable {
    pub rows: Vec<CleanRow>,
    pub skipped: usize,
}

impl CleanedTable {
    /// Render as UTF-8 CSV with the fixed header
    pub fn to_csv(&self) -> String {
        let mut out = join_csv(CLEAN_HEADER);
        out.push('\n');
        for row in &self.rows {
            let actual = row.actual_text();
            out.push_str(&join_csv([
                row.group.as_str(),
                row.description.as_str(),
                actual.as_str(),
                row.unit.as_str(),
            ]));
            out.push('\n');
        }
        out
    }
}

/// Result of cleaning one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Cleaned table written
    Written { rows: usize, skipped: usize },
    /// No valid rows; nothing written
    Empty { skipped: usize },
}

/// Totals for a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub found: usize,
    pub written: usize,
    pub empty: usize,
    pub failed: usize,
}

/// Repair a unit mangled by lossy decoding
///
/// A Latin-1 degree sign decodes to U+FFFD, so "°C" arrives as "\u{FFFD}C".
pub fn repair_unit(unit: Option<&str>) -> String {
    match unit {
        None => MISSING_UNIT.to_string(),
        Some("\u{FFFD}C") => "°C".to_string(),
        Some("\u{FFFD}") => String::new(),
        Some(other) => other.to_string(),
    }
}

fn parse_actual(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn is_header(parts: &[&str]) -> bool {
    parts.len() >= 2 && parts[0] == "Group" && parts[1] == "Description"
}

/// Clean the text of one export
pub fn clean_text(text: &str) -> CleanedTable {
    let mut table = CleanedTable::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if is_header(&parts) {
            continue;
        }
        if !(2..=4).contains(&parts.len()) {
            warn!("Skipped line (unexpected columns): {}", line);
            table.skipped += 1;
            continue;
        }

        table.rows.push(CleanRow {
            group: parts[0].to_string(),
            description: parts[1].to_string(),
            actual: parse_actual(parts.get(2).copied()),
            unit: repair_unit(parts.get(3).copied()),
        });
    }

    table
}

/// Decode raw export bytes
///
/// Invalid UTF-8 is replaced with U+FFFD; [`repair_unit`] relies on this.
pub fn decode_export(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let replaced = text.matches('\u{FFFD}').count();
    if replaced > 0 {
        debug!("Decoded export with {} replacement character(s)", replaced);
    }
    text.into_owned()
}

/// Clean one export file into `output`
pub fn clean_csv(input: &Path, output: &Path) -> ConvResult<CleanOutcome> {
    let bytes = std::fs::read(input).map_err(|e| ConvError::io(input, e))?;
    let table = clean_text(&decode_export(&bytes));

    if table.rows.is_empty() {
        warn!("No valid data rows found in {}", input.display());
        return Ok(CleanOutcome::Empty {
            skipped: table.skipped,
        });
    }

    std::fs::write(output, table.to_csv()).map_err(|e| ConvError::io(output, e))?;
    info!("Cleaned: {} -> {}", input.display(), output.display());
    Ok(CleanOutcome::Written {
        rows: table.rows.len(),
        skipped: table.skipped,
    })
}

/// List `*.csv` files (any case) in a directory, sorted by name
pub fn list_csv_files(dir: &Path) -> ConvResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| ConvError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Clean every export in `input_dir` into `output_dir`
///
/// A failing file is logged and counted; the batch continues.
pub fn batch_clean(input_dir: &Path, output_dir: &Path) -> ConvResult<BatchSummary> {
    let files = list_csv_files(input_dir)?;
    info!("Found {} export file(s) in {}", files.len(), input_dir.display());

    std::fs::create_dir_all(output_dir).map_err(|e| ConvError::io(output_dir, e))?;

    let mut summary = BatchSummary {
        found: files.len(),
        ..Default::default()
    };

    for input in &files {
        let Some(name) = input.file_name() else {
            continue;
        };
        match clean_csv(input, &output_dir.join(name)) {
            Ok(CleanOutcome::Written { .. }) => summary.written += 1,
            Ok(CleanOutcome::Empty { .. }) => summary.empty += 1,
            Err(e) => {
                warn!("Failed to clean {}: {}", input.display(), e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
