//! vcds-core - Core types for VCDS diagnostics
//!
//! This crate provides the record types produced by the scan-transcript parser
//! and the measurement types produced by the export loader, plus the shared
//! error taxonomy.

pub mod error;
pub mod models;

pub use error::{VcdsError, VcdsResult};
pub use models::*;
