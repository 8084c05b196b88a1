//! Module status line extraction

use tracing::trace;
use vcds_core::ModuleStatusRecord;

use crate::patterns::PATTERNS;

/// Separator between module label and status label
pub const STATUS_SEPARATOR: &str = "-- Status: ";

/// Parse one line as a module status record
///
/// The line must start with a two-character hex code (any case) and contain
/// the status separator.
pub fn parse_status_line(line: &str) -> Option<ModuleStatusRecord> {
    if !PATTERNS.module_status.is_match(line) {
        return None;
    }
    let (module, status) = line.split_once(STATUS_SEPARATOR)?;
    Some(ModuleStatusRecord {
        module: module.trim().to_string(),
        status: status.trim().to_string(),
    })
}

/// Collect every module status line, in transcript order
///
/// Duplicates are kept as-is.
pub fn extract_module_status(text: &str) -> Vec<ModuleStatusRecord> {
    let records: Vec<ModuleStatusRecord> = text.lines().filter_map(parse_status_line).collect();
    trace!("Found {} module status lines", records.len());
    records
}
