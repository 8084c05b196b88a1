//! Diagnostic record models (the structured form of one scan transcript)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Singleton header fields recognised in a transcript header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    /// Vehicle identification number
    Vin,
    /// Odometer reading as printed (e.g. "95340km-59242mi")
    Mileage,
    /// Scan date as printed
    Date,
    /// Scan tool release (e.g. "23.3.0.0")
    ToolVersion,
}

impl HeaderField {
    /// All header fields, in report order
    pub const ALL: [HeaderField; 4] = [
        HeaderField::Vin,
        HeaderField::Mileage,
        HeaderField::Date,
        HeaderField::ToolVersion,
    ];

    /// Key used for this field in `vehicle_info`
    pub fn label(&self) -> &'static str {
        match self {
            HeaderField::Vin => "VIN",
            HeaderField::Mileage => "Mileage",
            HeaderField::Date => "Date",
            HeaderField::ToolVersion => "VCDS Version",
        }
    }
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Header fields found in a transcript, keyed by label
///
/// A field is present only if it was found; absence is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleInfo(BTreeMap<String, String>);

impl VehicleInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous one
    pub fn insert(&mut self, field: HeaderField, value: impl Into<String>) {
        self.0.insert(field.label().to_string(), value.into());
    }

    /// Get a field value
    pub fn get(&self, field: HeaderField) -> Option<&str> {
        self.0.get(field.label()).map(String::as_str)
    }

    /// Iterate over `(label, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One `<code>-<module> -- Status: <status>` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStatusRecord {
    /// Module label, e.g. "01-Engine"
    pub module: String,
    /// Status label, e.g. "OK 0000" or "Malfunction 0010"
    pub status: String,
}

/// Persistence state of a fault entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultStatus {
    /// Fault is stored as present
    #[default]
    Confirmed,
    /// Fault comes and goes
    Intermittent,
}

impl std::fmt::Display for FaultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FaultStatus::Confirmed => "Confirmed",
            FaultStatus::Intermittent => "Intermittent",
        };
        f.write_str(s)
    }
}

/// A single numbered fault entry with its indented detail lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultCode {
    /// "<number> - <title>", e.g. "1041 - Battery Voltage"
    pub code_line: String,
    /// Detail lines, each trimmed, joined with '\n'
    pub details: String,
    pub status: FaultStatus,
}

/// One module's fault section; never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultBlock {
    /// Module address token, e.g. "17"
    pub address: String,
    /// Text after the address colon, e.g. "Instruments (J285)"
    pub description: String,
    pub codes: Vec<FaultCode>,
}

/// Structured form of one scan transcript
///
/// Built once per transcript by the parser and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub vehicle_info: VehicleInfo,
    pub modules: Vec<ModuleStatusRecord>,
    pub faults: Vec<FaultBlock>,
}

impl DiagnosticRecord {
    /// Total number of fault entries across all blocks
    pub fn fault_count(&self) -> usize {
        self.faults.iter().map(|b| b.codes.len()).sum()
    }

    /// Number of fault entries classified as intermittent
    pub fn intermittent_count(&self) -> usize {
        self.faults
            .iter()
            .flat_map(|b| &b.codes)
            .filter(|c| c.status == FaultStatus::Intermittent)
            .count()
    }

    /// Find the fault block for a module address
    pub fn block(&self, address: &str) -> Option<&FaultBlock> {
        self.faults.iter().find(|b| b.address == address)
    }

    /// Serialize to the pretty-printed JSON artifact
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a record from its JSON artifact
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
