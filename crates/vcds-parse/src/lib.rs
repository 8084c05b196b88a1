//! vcds-parse - Parser for VCDS auto-scan transcripts
//!
//! Turns the free-form text of a diagnostic scan into a [`DiagnosticRecord`]:
//! header fields, per-module status lines, and per-address fault sections.
//!
//! # Quick Start
//!
//! ```rust
//! use vcds_core::{FaultStatus, HeaderField};
//!
//! let text = "\
//! VIN:      WVWZZZAUZEW123456
//! 17-Instruments -- Status: Malfunction 0010
//! Address 17: Instruments
//! 1 Fault Found:
//! 01 - Battery Voltage
//!             P0000 - Intermittent
//! ";
//!
//! let record = vcds_parse::parse(text);
//! assert_eq!(record.vehicle_info.get(HeaderField::Vin), Some("WVWZZZAUZEW123456"));
//! assert_eq!(record.modules[0].status, "Malfunction 0010");
//! assert_eq!(record.faults[0].codes[0].status, FaultStatus::Intermittent);
//! ```
//!
//! # Pipeline
//!
//! | Stage | Function | Output |
//! |-------|----------|--------|
//! | Header fields | [`extract_vehicle_info`] | `VehicleInfo` |
//! | Status lines | [`extract_module_status`] | `Vec<ModuleStatusRecord>` |
//! | Segmentation | [`segment_addresses`] | `Vec<AddressSegment>` |
//! | Fault sections | [`analyze_segment`] | `SegmentAnalysis` |
//! | Assembly | [`assemble`] | `DiagnosticRecord` |
//!
//! None of the stages fail on text input. Lines and sections that do not have
//! the expected shape are skipped; [`parse_with_diagnostics`] reports which.
//!
//! [`DiagnosticRecord`]: vcds_core::DiagnosticRecord

pub mod diagnostics;
pub mod faults;
pub mod fields;
mod patterns;
pub mod record;
pub mod segment;
pub mod status;
pub mod transcript;

pub use diagnostics::{CountMismatch, ParseDiagnostics, SkippedSegment};
pub use faults::{
    analyze_segment, classify, declared_fault_count, extract_fault_codes, SegmentAnalysis,
    SkipReason,
};
pub use fields::{extract_field, extract_vehicle_info};
pub use record::{assemble, parse, parse_with_diagnostics};
pub use segment::{segment_addresses, AddressSegment};
pub use status::{extract_module_status, parse_status_line};
pub use transcript::{parse_file, read_record, read_transcript, write_record};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::record::{parse, parse_with_diagnostics};
    pub use crate::transcript::{parse_file, write_record};
    pub use vcds_core::{DiagnosticRecord, FaultBlock, FaultCode, FaultStatus, HeaderField};
}
