//! Command implementations for the vcds CLI

pub mod clean;
pub mod parse;
pub mod report;

pub use clean::clean;
pub use parse::parse;
pub use report::{report, ReportOptions};
