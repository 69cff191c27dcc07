//! OCR (Optical Character Recognition) module.
//!
//! Turns a decoded spine photo into an unordered set of [`Detection`]s.
//! The production backend runs the ocrs library; tests substitute their own
//! [`TextDetector`].

mod engine;

use image::DynamicImage;
use spinescan_types::Detection;

pub use engine::{find_models_dir, OcrsDetector};

/// Image-to-text-regions service.
pub trait TextDetector {
    /// Detect text regions in `image`.
    ///
    /// An image without text yields an empty vector, not an error.
    fn detect(&self, image: &DynamicImage) -> anyhow::Result<Vec<Detection>>;
}

impl<T: TextDetector + ?Sized> TextDetector for Box<T> {
    fn detect(&self, image: &DynamicImage) -> anyhow::Result<Vec<Detection>> {
        (**self).detect(image)
    }
}
