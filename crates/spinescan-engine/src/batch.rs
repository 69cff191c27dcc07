//! Directory batch runner.
//!
//! Lists the images in a directory and pushes each one through
//! OCR → line reconstruction → segmentation. Per-image failures are logged
//! and recorded; only an unusable input directory aborts the run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use spinescan_types::{Detection, Fields, ImageResult, Line, RowLayout, SkippedImage};
use tracing::{debug, info, warn};

use crate::error::ScanError;
use crate::lines::{filter_detections, join_lines, reconstruct_lines, LineConfig};
use crate::ocr::TextDetector;
use crate::segment::FieldSegmenter;

/// Extensions treated as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "tiff", "bmp", "gif"];

/// Whether `path` has a recognized image extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// List image files directly inside `dir`, sorted by path.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::InvalidInputDir(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ScanError::ListDir {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut images = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && is_image_file(&path) {
                    images.push(path);
                } else {
                    debug!("Ignoring {:?}", path);
                }
            }
            Err(e) => warn!("Cannot read directory entry in {}: {}", dir.display(), e),
        }
    }

    images.sort();
    Ok(images)
}

/// Intermediate products for a single image.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub detections: Vec<Detection>,
    pub lines: Vec<Line>,
    pub fields: Vec<Fields>,
}

impl Inspection {
    pub fn into_result(self) -> ImageResult {
        ImageResult {
            filename: self.filename,
            line_count: self.lines.len(),
            detection_count: self.detections.len(),
            fields: self.fields,
        }
    }
}

/// Results accumulated over a directory.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Successfully processed images, in listing order.
    pub results: Vec<ImageResult>,

    /// Images that failed and were left out.
    pub skipped: Vec<SkippedImage>,
}

impl BatchReport {
    /// Processed images on which OCR found no text.
    pub fn images_without_text(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.detection_count == 0)
            .count()
    }
}

/// Runs the pipeline over a directory with injected collaborators.
pub struct BatchRunner<'a> {
    detector: &'a dyn TextDetector,
    segmenter: &'a dyn FieldSegmenter,
    config: LineConfig,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        detector: &'a dyn TextDetector,
        segmenter: &'a dyn FieldSegmenter,
        config: LineConfig,
    ) -> Self {
        Self {
            detector,
            segmenter,
            config,
        }
    }

    /// Table layout produced by the configured segmenter.
    pub fn layout(&self) -> RowLayout {
        self.segmenter.layout()
    }

    /// Process every image in `dir`.
    pub fn run(&self, dir: &Path) -> Result<BatchReport, ScanError> {
        let images = list_images(dir)?;
        info!("Found {} images in {}", images.len(), dir.display());

        let mut report = BatchReport::default();

        for path in images {
            let filename = file_name(&path);
            debug!("Processing {}", path.display());

            match self.process_image(&path) {
                Ok(result) => {
                    debug!("{}: {} results", filename, result.fields.len());
                    report.results.push(result);
                }
                Err(e) => {
                    let Some(reason) = e.skip_reason() else {
                        return Err(e);
                    };
                    warn!("Skipping {}: {}", filename, e);
                    report.skipped.push(SkippedImage {
                        filename,
                        reason,
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Processed {} images ({} skipped)",
            report.results.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Process a single image.
    pub fn process_image(&self, path: &Path) -> Result<ImageResult, ScanError> {
        self.inspect(path).map(Inspection::into_result)
    }

    /// Process a single image, keeping every intermediate product.
    pub fn inspect(&self, path: &Path) -> Result<Inspection, ScanError> {
        let image = image::open(path).map_err(|source| ScanError::UnreadableImage {
            path: path.to_path_buf(),
            source,
        })?;
        let (width, height) = (image.width(), image.height());

        let detections = self
            .detector
            .detect(&image)
            .map_err(|e| ScanError::Recognition {
                path: path.to_path_buf(),
                message: format!("{:#}", e),
            })?;
        let detections = filter_detections(detections, self.config.min_confidence);

        if detections.is_empty() {
            info!("No text detected in {}", path.display());
        }

        let lines = reconstruct_lines(&detections, height, self.config.gap_ratio);
        let text = join_lines(&lines);

        let fields = self
            .segmenter
            .segment(&text)
            .map_err(|e| ScanError::Segmentation {
                path: path.to_path_buf(),
                message: format!("{:#}", e),
            })?;

        Ok(Inspection {
            filename: file_name(path),
            width,
            height,
            detections,
            lines,
            fields,
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
