//! Per-image results, table rows and batch summaries.

use serde::{Deserialize, Serialize};

/// Artist and album text split out of a spine. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields {
    pub artist: String,
    pub album: String,
}

impl Fields {
    pub fn new(artist: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            album: album.into(),
        }
    }

    /// True when both artist and album are empty.
    pub fn is_empty(&self) -> bool {
        self.artist.is_empty() && self.album.is_empty()
    }
}

/// Output table contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLayout {
    /// One row per reconstructed line of each image.
    PerLine,
    /// One row per image; images with no artist and no album are omitted.
    PerImage,
}

impl RowLayout {
    /// CSV header for this layout.
    pub fn header(self) -> [&'static str; 3] {
        match self {
            RowLayout::PerLine => ["Image", "Artist", "Album"],
            RowLayout::PerImage => ["Filename", "Artist", "Album"],
        }
    }
}

/// Everything extracted from one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    /// File name relative to the input directory.
    pub filename: String,

    /// Segmented fields, in line order for per-line layouts.
    pub fields: Vec<Fields>,

    /// Number of reconstructed lines.
    pub line_count: usize,

    /// Number of OCR detections kept after filtering.
    pub detection_count: usize,
}

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub image: String,
    pub artist: String,
    pub album: String,
}

/// Why an image was left out of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnreadableImage,
    RecognitionFailed,
    SegmentationFailed,
}

/// An image that failed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedImage {
    pub filename: String,
    pub reason: SkipReason,
    pub message: String,
}

/// Outcome of a whole scan, as reported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub input_dir: String,

    pub output_file: String,

    pub layout: RowLayout,

    /// Images that produced a result (possibly with no text).
    pub images_processed: usize,

    /// Processed images where OCR found nothing.
    pub images_without_text: usize,

    pub rows_written: usize,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedImage>,
}
