//! Engine for reading artist/album labels off record spine photos.
//!
//! The pipeline is OCR ([`ocr`]) → line reconstruction ([`lines`]) →
//! artist/album segmentation ([`segment`], optionally backed by [`ner`]),
//! driven per directory by [`batch`] and written out by [`export`].

pub mod batch;
pub mod error;
pub mod export;
pub mod lines;
pub mod ner;
pub mod ocr;
pub mod segment;

pub use batch::{BatchReport, BatchRunner, Inspection};
pub use error::ScanError;
pub use lines::LineConfig;
