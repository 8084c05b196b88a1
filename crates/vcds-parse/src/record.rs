//! Record assembly
//!
//! Runs the extractors over one transcript and composes their results.

use tracing::{debug, warn};
use vcds_core::{DiagnosticRecord, FaultBlock, ModuleStatusRecord, VehicleInfo};

use crate::diagnostics::{CountMismatch, ParseDiagnostics, SkippedSegment};
use crate::faults::{analyze_segment, SegmentAnalysis};
use crate::fields::extract_vehicle_info;
use crate::segment::segment_addresses;
use crate::status::extract_module_status;

/// Compose extraction results into a record
pub fn assemble(
    vehicle_info: VehicleInfo,
    modules: Vec<ModuleStatusRecord>,
    faults: Vec<FaultBlock>,
) -> DiagnosticRecord {
    DiagnosticRecord {
        vehicle_info,
        modules,
        faults,
    }
}

/// Parse a transcript into a record
pub fn parse(text: &str) -> DiagnosticRecord {
    parse_with_diagnostics(text).0
}

/// Parse a transcript, also reporting skipped segments and count mismatches
pub fn parse_with_diagnostics(text: &str) -> (DiagnosticRecord, ParseDiagnostics) {
    let vehicle_info = extract_vehicle_info(text);
    let modules = extract_module_status(text);
    let segments = segment_addresses(text);

    let mut diagnostics = ParseDiagnostics {
        segments: segments.len(),
        ..Default::default()
    };
    let mut faults = Vec::new();

    for segment in &segments {
        match analyze_segment(segment) {
            SegmentAnalysis::Faults { block, declared } => {
                if declared as usize != block.codes.len() {
                    warn!(
                        "Address {}: summary declares {} fault(s), extracted {}",
                        block.address,
                        declared,
                        block.codes.len()
                    );
                    diagnostics.count_mismatches.push(CountMismatch {
                        address: block.address.clone(),
                        declared,
                        extracted: block.codes.len(),
                    });
                }
                faults.push(block);
            }
            SegmentAnalysis::Skipped(reason) => {
                diagnostics.skipped.push(SkippedSegment {
                    address: segment.address.to_string(),
                    reason,
                });
            }
        }
    }

    debug!(
        "Parsed transcript: {} header field(s), {} module(s), {} fault block(s) from {} segment(s)",
        vehicle_info.len(),
        modules.len(),
        faults.len(),
        segments.len()
    );

    (assemble(vehicle_info, modules, faults), diagnostics)
}
