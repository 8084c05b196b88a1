//! Measurement models (rows of cleaned measuring-block and adaptation exports)

use serde::{Deserialize, Serialize};

/// One measured value from an export table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Group/channel identifier, e.g. "IDE00021"
    pub group: String,
    /// Human-readable description
    pub description: String,
    /// Value as printed in the cleaned table (may be empty)
    pub actual: String,
}

impl Measurement {
    pub fn new(
        group: impl Into<String>,
        description: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            description: description.into(),
            actual: actual.into(),
        }
    }
}

/// Which report section a measurement table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    /// Measuring blocks (live data)
    Blockmap,
    /// Adaptation channels
    Adaptation,
}

impl MeasurementKind {
    /// Infer the kind from an export file name
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.contains("blockmap") {
            Some(MeasurementKind::Blockmap)
        } else if lower.contains("adaptation") {
            Some(MeasurementKind::Adaptation)
        } else {
            None
        }
    }
}

/// Measurements for one vehicle, grouped by report section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedData {
    pub blockmap: Vec<Measurement>,
    pub adaptation: Vec<Measurement>,
}

impl ParsedData {
    /// Append measurements to the section for `kind`
    pub fn extend(&mut self, kind: MeasurementKind, measurements: Vec<Measurement>) {
        match kind {
            MeasurementKind::Blockmap => self.blockmap.extend(measurements),
            MeasurementKind::Adaptation => self.adaptation.extend(measurements),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blockmap.is_empty() && self.adaptation.is_empty()
    }
}
