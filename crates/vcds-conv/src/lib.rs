//! vcds-conv - Measurement export handling for VCDS reports
//!
//! Cleans raw measuring-block and adaptation exports into UTF-8 tables and
//! loads them into report sections according to a vehicle configuration.
//!
//! # Quick Start
//!
//! ```rust
//! use vcds_conv::{clean_text, parse_measurements};
//!
//! let table = clean_text("; comment\nIDE00025,Coolant temperature,91,\u{FFFD}C\n");
//! assert_eq!(table.rows[0].unit, "°C");
//!
//! let measurements = parse_measurements(&table.to_csv());
//! assert_eq!(measurements[0].actual, "91");
//! ```
//!
//! # Vehicle Configuration
//!
//! ```yaml
//! meta:
//!   vehicle: Golf 7 Clubsport
//!
//! modules:
//!   engine:
//!     file: 01_engine_blockmap.csv   # kind inferred: blockmap
//!   engine_adaptation:
//!     file: 01_engine_adapt.csv
//!     kind: adaptation
//! ```

pub mod clean;
pub mod config;
pub mod csv;
pub mod error;
pub mod loader;

// Re-export main types
pub use clean::{
    batch_clean, clean_csv, clean_text, decode_export, repair_unit, BatchSummary, CleanOutcome,
    CleanRow, CleanedTable,
};
pub use config::{ConfigMeta, ModuleConfig, VehicleConfig};
pub use error::{ConvError, ConvResult};
pub use loader::{find_file, load_measurements, load_vehicle_data, parse_measurements};
