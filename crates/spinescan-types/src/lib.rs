//! Data model for spinescan.
//!
//! This crate defines the types passed between the OCR engine, the
//! segmentation heuristics, the exporter and the CLI.

mod detection;
mod entity;
mod record;

pub use detection::*;
pub use entity::*;
pub use record::*;
