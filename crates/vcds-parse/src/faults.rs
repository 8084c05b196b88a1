//! Fault section analysis
//!
//! Decides whether an address segment holds real fault entries and, if so,
//! splits it into numbered entries with their indented detail lines.

use serde::Serialize;
use tracing::debug;
use vcds_core::{FaultBlock, FaultCode, FaultStatus};

use crate::patterns::PATTERNS;
use crate::segment::AddressSegment;

/// Phrase that marks a module without stored faults
pub const NO_FAULT_CODE: &str = "No fault code found.";

/// Marker for intermittent faults in detail text
pub const INTERMITTENT_MARKER: &str = "Intermittent";

/// Why a segment produced no fault block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Segment reports "No fault code found."
    NoFaultCode,
    /// No "<n> Fault(s) Found:" summary line
    MissingSummary,
    /// Summary present but no numbered entries with details
    NoEntries,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipReason::NoFaultCode => "no fault code found",
            SkipReason::MissingSummary => "no fault summary line",
            SkipReason::NoEntries => "no fault entries",
        };
        f.write_str(s)
    }
}

/// Outcome of analysing one address segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentAnalysis {
    /// At least one fault entry was found
    Faults {
        block: FaultBlock,
        /// Count from the summary line (advisory only)
        declared: u32,
    },
    Skipped(SkipReason),
}

impl SegmentAnalysis {
    /// The fault block, if any
    pub fn into_block(self) -> Option<FaultBlock> {
        match self {
            SegmentAnalysis::Faults { block, .. } => Some(block),
            SegmentAnalysis::Skipped(_) => None,
        }
    }
}

/// Classify a fault by its detail text
pub fn classify(details: &str) -> FaultStatus {
    if details.contains(INTERMITTENT_MARKER) {
        FaultStatus::Intermittent
    } else {
        FaultStatus::Confirmed
    }
}

/// Count declared by the first "<n> Fault(s) Found:" line
pub fn declared_fault_count(body: &str) -> Option<u32> {
    PATTERNS
        .fault_summary
        .captures(body)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract every numbered fault entry from a segment body, in text order
pub fn extract_fault_codes(body: &str) -> Vec<FaultCode> {
    PATTERNS
        .fault_entry
        .captures_iter(body)
        .map(|caps| {
            let number = &caps[1];
            let title = caps[2].trim();
            let details = caps[3]
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n");
            let status = classify(&details);
            FaultCode {
                code_line: format!("{} - {}", number, title),
                details,
                status,
            }
        })
        .collect()
}

/// Analyse one address segment
pub fn analyze_segment(segment: &AddressSegment<'_>) -> SegmentAnalysis {
    if segment.body.contains(NO_FAULT_CODE) {
        return SegmentAnalysis::Skipped(SkipReason::NoFaultCode);
    }

    let Some(declared) = declared_fault_count(segment.body) else {
        debug!(
            "Skipping address {}: {}",
            segment.address,
            SkipReason::MissingSummary
        );
        return SegmentAnalysis::Skipped(SkipReason::MissingSummary);
    };

    let codes = extract_fault_codes(segment.body);
    if codes.is_empty() {
        debug!(
            "Skipping address {}: {} (summary declared {})",
            segment.address,
            SkipReason::NoEntries,
            declared
        );
        return SegmentAnalysis::Skipped(SkipReason::NoEntries);
    }

    SegmentAnalysis::Faults {
        block: FaultBlock {
            address: segment.address.to_string(),
            description: segment.description.to_string(),
            codes,
        },
        declared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment_addresses;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn analyze(text: &str) -> SegmentAnalysis {
        let segments = segment_addresses(text);
        assert_eq!(segments.len(), 1);
        analyze_segment(&segments[0])
    }

    #[rstest]
    #[case("P0562 - Too Low\nIntermittent - Confirmed", FaultStatus::Intermittent)]
    #[case("P0000 - Intermittent", FaultStatus::Intermittent)]
    #[case("P0562 - Too Low\nConfirmed - Tested Since Memory Clear", FaultStatus::Confirmed)]
    #[case("intermittent", FaultStatus::Confirmed)]
    #[case("", FaultStatus::Confirmed)]
    fn test_classify(#[case] details: &str, #[case] expected: FaultStatus) {
        assert_eq!(classify(details), expected);
    }

    #[test]
    fn test_single_intermittent_fault() {
        let analysis = analyze(
            "Address 17: Instruments\n1 Fault Found:\n01 - Battery Voltage\n            P0000 - Intermittent\n",
        );
        let SegmentAnalysis::Faults { block, declared } = analysis else {
            panic!("expected faults");
        };
        assert_eq!(declared, 1);
        assert_eq!(block.address, "17");
        assert_eq!(block.description, "Instruments");
        assert_eq!(block.codes.len(), 1);
        assert_eq!(block.codes[0].code_line, "01 - Battery Voltage");
        assert_eq!(block.codes[0].details, "P0000 - Intermittent");
        assert_eq!(block.codes[0].status, FaultStatus::Intermittent);
    }

    #[test]
    fn test_no_fault_code_found_is_authoritative() {
        let analysis = analyze(
            "Address 19: CAN Gateway\nNo fault code found.\n1 Fault Found:\n01 - Bogus\n        detail\n",
        );
        assert_eq!(analysis, SegmentAnalysis::Skipped(SkipReason::NoFaultCode));
    }

    #[test]
    fn test_missing_summary() {
        let analysis = analyze("Address 44: Steering Assist\n01 - Something\n        detail\n");
        assert_eq!(analysis, SegmentAnalysis::Skipped(SkipReason::MissingSummary));
    }

    #[test]
    fn test_summary_without_entries() {
        let analysis = analyze("Address 44: Steering Assist\n2 Faults Found:\nnothing useful\n");
        assert_eq!(analysis, SegmentAnalysis::Skipped(SkipReason::NoEntries));
    }

    #[test]
    fn test_multiple_entries_with_multiline_details() {
        let body = "\
2 Faults Found:
1041 - Battery Voltage
          P0562 00 [008] - Too Low
          Intermittent - Confirmed - Tested Since Memory Clear
             Freeze Frame:
                    Fault Status: 00000001
3 - Fuel Level Sensor
          B1234 - Open Circuit
          Confirmed - Tested Since Memory Clear
";
        let codes = extract_fault_codes(body);
        assert_eq!(codes.len(), 2);

        assert_eq!(codes[0].code_line, "1041 - Battery Voltage");
        assert_eq!(
            codes[0].details,
            "P0562 00 [008] - Too Low\n\
             Intermittent - Confirmed - Tested Since Memory Clear\n\
             Freeze Frame:\n\
             Fault Status: 00000001"
        );
        assert_eq!(codes[0].status, FaultStatus::Intermittent);

        assert_eq!(codes[1].code_line, "3 - Fuel Level Sensor");
        assert_eq!(codes[1].status, FaultStatus::Confirmed);
        assert_eq!(declared_fault_count(body), Some(2));
    }

    #[test]
    fn test_entry_needs_indented_details() {
        let body = "1 Fault Found:\n01 - Title\n   too shallow\n";
        assert!(extract_fault_codes(body).is_empty());
    }

    #[test]
    fn test_details_at_end_of_text_without_newline() {
        let codes = extract_fault_codes("7 - Door Lock\n        U0100 - No Communication");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].details, "U0100 - No Communication");
    }
}
