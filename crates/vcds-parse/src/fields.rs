//! Header field extraction
//!
//! Each field is matched on its own over the whole transcript; the first match
//! wins and a field without a match is simply left out.

use regex::Regex;
use tracing::trace;
use vcds_core::{HeaderField, VehicleInfo};

use crate::patterns::PATTERNS;

fn pattern_for(field: HeaderField) -> &'static Regex {
    match field {
        HeaderField::Vin => &PATTERNS.vin,
        HeaderField::Mileage => &PATTERNS.mileage,
        HeaderField::Date => &PATTERNS.date,
        HeaderField::ToolVersion => &PATTERNS.tool_version,
    }
}

/// Extract a single header field
pub fn extract_field(text: &str, field: HeaderField) -> Option<&str> {
    pattern_for(field)
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Extract all recognised header fields
pub fn extract_vehicle_info(text: &str) -> VehicleInfo {
    let mut info = VehicleInfo::new();
    for field in HeaderField::ALL {
        match extract_field(text, field) {
            Some(value) => info.insert(field, value),
            None => trace!("Header field {} not present", field),
        }
    }
    info
}
