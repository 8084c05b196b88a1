//! Parse diagnostics
//!
//! Side information about a parse run. It never changes the record.

use serde::Serialize;

use crate::faults::SkipReason;

/// An address segment that produced no fault block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSegment {
    pub address: String,
    pub reason: SkipReason,
}

/// A fault summary whose count disagrees with the extracted entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountMismatch {
    pub address: String,
    /// Count from the "<n> Fault(s) Found:" line
    pub declared: u32,
    /// Entries actually extracted
    pub extracted: usize,
}

/// Diagnostics for a single parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostics {
    /// Number of address segments found
    pub segments: usize,
    pub skipped: Vec<SkippedSegment>,
    pub count_mismatches: Vec<CountMismatch>,
}

impl ParseDiagnostics {
    /// Segments skipped for a given reason
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    /// True when every fault summary matched its extracted entries
    pub fn counts_consistent(&self) -> bool {
        self.count_mismatches.is_empty()
    }
}
