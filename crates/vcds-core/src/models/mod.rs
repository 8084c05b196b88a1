//! Shared data models for VCDS transcripts and measurement exports

mod measurement;
mod record;

pub use measurement::*;
pub use record::*;
