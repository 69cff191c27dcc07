//! OCR engine wrapper using the ocrs library.

use anyhow::{Context, Result};
use image::DynamicImage;
use ocrs::{ImageSource, OcrEngine, OcrEngineParams, TextItem};
use rten::Model;
use spinescan_types::Detection;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::TextDetector;

const DETECTION_MODEL: &str = "text-detection.rten";
const RECOGNITION_MODEL: &str = "text-recognition.rten";

/// ocrs does not score recognized words, so every detection reports this.
const OCRS_CONFIDENCE: f32 = 1.0;

/// Word-level text detector backed by ocrs.
pub struct OcrsDetector {
    engine: OcrEngine,
}

impl OcrsDetector {
    /// Create a detector from the two models in `models_dir`.
    pub fn new(models_dir: &Path) -> Result<Self> {
        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(load_model(models_dir, DETECTION_MODEL)?),
            recognition_model: Some(load_model(models_dir, RECOGNITION_MODEL)?),
            ..Default::default()
        })
        .context("Failed to create OCR engine")?;

        debug!("OCR engine ready with models from {:?}", models_dir);
        Ok(Self { engine })
    }
}

fn load_model(models_dir: &Path, name: &str) -> Result<Model> {
    let path = models_dir.join(name);
    debug!("Loading {} from {:?}", name, path);
    Model::load_file(&path).with_context(|| format!("Failed to load OCR model {:?}", path))
}

impl TextDetector for OcrsDetector {
    fn detect(&self, image: &DynamicImage) -> Result<Vec<Detection>> {
        let img = image.to_rgb8();
        let (width, height) = img.dimensions();
        trace!("Image loaded: {}x{}", width, height);

        let img_source = ImageSource::from_bytes(img.as_raw(), (width, height))
            .context("Failed to create image source")?;

        let ocr_input = self
            .engine
            .prepare_input(img_source)
            .context("Failed to prepare OCR input")?;

        let word_rects = self
            .engine
            .detect_words(&ocr_input)
            .context("Failed to detect words")?;

        trace!("Detected {} word regions", word_rects.len());

        let line_rects = self.engine.find_text_lines(&ocr_input, &word_rects);

        let line_texts = self
            .engine
            .recognize_text(&ocr_input, &line_rects)
            .context("Failed to recognize text")?;

        // One detection per recognized word; line grouping happens downstream.
        let mut detections = Vec::new();

        for line in line_texts.iter().flatten() {
            for word in line.words() {
                let text = word.to_string();
                if text.trim().is_empty() {
                    continue;
                }

                let rect = word.bounding_rect();
                let left = rect.left() as f32;
                let top = rect.top() as f32;
                let right = (rect.left() + rect.width()) as f32;
                let bottom = (rect.top() + rect.height()) as f32;

                detections.push(Detection::from_rect(
                    left,
                    top,
                    right,
                    bottom,
                    text,
                    OCRS_CONFIDENCE,
                ));
            }
        }

        debug!("Recognized {} words", detections.len());
        Ok(detections)
    }
}

/// Locate the directory holding the ocrs models.
///
/// Checked in order: the explicit directory, `bin/../models` relative to the
/// executable, then `./models`.
pub fn find_models_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        if has_models(dir) {
            return Ok(dir.to_path_buf());
        }
        anyhow::bail!(
            "Could not find {} and {} in {:?}",
            DETECTION_MODEL,
            RECOGNITION_MODEL,
            dir
        );
    }

    let exe_path = std::env::current_exe().context("Failed to get executable path")?;
    let candidates = [
        exe_path
            .parent()
            .and_then(|p| p.parent())
            .map(|p| p.join("models")),
        Some(PathBuf::from("models")),
    ];

    for dir in candidates.into_iter().flatten() {
        if has_models(&dir) {
            debug!("Found models directory at {:?}", dir);
            return Ok(dir);
        }
    }

    anyhow::bail!(
        "Could not find OCR models. Download {} and {} into ./models or pass --models-dir.",
        DETECTION_MODEL,
        RECOGNITION_MODEL
    )
}

fn has_models(dir: &Path) -> bool {
    dir.join(DETECTION_MODEL).exists() && dir.join(RECOGNITION_MODEL).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OcrsDetector::new(dir.path()).err().unwrap();
        assert!(format!("{:#}", err).contains(DETECTION_MODEL));
    }

    #[test]
    fn test_explicit_models_dir_requires_both_models() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DETECTION_MODEL), b"").unwrap();

        let err = find_models_dir(Some(dir.path())).unwrap_err();
        assert!(err.to_string().contains(RECOGNITION_MODEL));

        std::fs::write(dir.path().join(RECOGNITION_MODEL), b"").unwrap();
        assert_eq!(find_models_dir(Some(dir.path())).unwrap(), dir.path());
    }
}
