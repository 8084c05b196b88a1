//! Compiled patterns for transcript scanning

use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns for scanning transcripts.
pub(crate) static PATTERNS: LazyLock<TranscriptPatterns> = LazyLock::new(TranscriptPatterns::new);

pub(crate) struct TranscriptPatterns {
    // Header fields
    pub(crate) vin: Regex,
    pub(crate) mileage: Regex,
    pub(crate) date: Regex,
    pub(crate) tool_version: Regex,

    // Module status lines
    pub(crate) module_status: Regex,

    // Address segments
    pub(crate) address_header: Regex,

    // Fault sections
    pub(crate) fault_summary: Regex,
    pub(crate) fault_entry: Regex,
}

impl TranscriptPatterns {
    fn new() -> Self {
        // Patterns are constants; a failure here is a bug in the pattern text.
        Self {
            // VIN:      WVWZZZAUZEW123456
            vin: Regex::new(r"VIN:[ \t]*([A-Za-z0-9]+)").expect("static regex must compile"),
            // Mileage: 95340km-59242mi
            mileage: Regex::new(
                r"Mileage:[ \t]*(\d+[ \t]*km[ \t]*[-/][ \t]*\d+[ \t]*mi(?:les)?)",
            )
            .expect("static regex must compile"),
            // Date: 2024-04-15 10:23:45
            date: Regex::new(
                r"Date:[ \t]*(\d{1,4}[./-]\d{1,2}[./-]\d{1,4}(?:[ \tT]+\d{1,2}:\d{2}(?::\d{2})?)?)",
            )
            .expect("static regex must compile"),
            // VCDS Version: Release 23.3.0.0
            tool_version: Regex::new(r"VCDS Version:[ \t]*(?:Release[ \t]+)?(\d+(?:\.\d+)+)")
                .expect("static regex must compile"),
            // 01-Engine -- Status: OK 0000
            module_status: Regex::new(r"^(?i:[0-9a-f]{2}).*?-- Status: ")
                .expect("static regex must compile"),
            // Address 17: Instruments (J285)
            address_header: Regex::new(r"(?m)^Address ([^\s:]+):[ \t]*([^\r\n]*)")
                .expect("static regex must compile"),
            // 2 Faults Found:
            fault_summary: Regex::new(r"(?im)^[ \t]*(\d{1,3})[ \t]+faults?[ \t]+found:")
                .expect("static regex must compile"),
            // 1041 - Battery Voltage
            //           P0562 00 [008] - Too Low
            fault_entry: Regex::new(
                r"(?m)^(\d+) - ([^\r\n]*)\r?\n((?: {6}[^\r\n]*(?:\r?\n|\z))+)",
            )
            .expect("static regex must compile"),
        }
    }
}
