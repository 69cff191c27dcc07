//! Artist/album segmentation of reconstructed spine text.
//!
//! Two heuristics are provided. [`PatternSegmenter`] splits every line on
//! separators or word position and feeds a per-line table.
//! [`EntitySegmenter`] reads the whole text through an entity recognizer and
//! yields at most one artist/album pair per image.

mod entity;
mod pattern;

use spinescan_types::{Fields, RowLayout};

pub use entity::{pick_fields, EntitySegmenter};
pub use pattern::{split_line, PatternSegmenter};

/// Splits reconstructed text into artist/album fields.
///
/// Ambiguous input is resolved by default rules, never by an error; errors
/// are reserved for collaborator failures.
pub trait FieldSegmenter {
    /// Table contract the output of this segmenter is meant for.
    fn layout(&self) -> RowLayout;

    /// Segment the newline-joined lines of one image.
    fn segment(&self, text: &str) -> anyhow::Result<Vec<Fields>>;
}

impl<T: FieldSegmenter + ?Sized> FieldSegmenter for Box<T> {
    fn layout(&self) -> RowLayout {
        (**self).layout()
    }

    fn segment(&self, text: &str) -> anyhow::Result<Vec<Fields>> {
        (**self).segment(text)
    }
}
