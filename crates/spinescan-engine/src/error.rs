//! Engine error types.

use std::path::PathBuf;

use spinescan_types::SkipReason;
use thiserror::Error;

/// Errors raised while scanning a directory of spine photos.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("input directory {} does not exist or is not a directory", .0.display())]
    InvalidInputDir(PathBuf),

    #[error("failed to list images in {}: {message}", .path.display())]
    ListDir { path: PathBuf, message: String },

    #[error("cannot decode image {}: {source}", .path.display())]
    UnreadableImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("text recognition failed for {}: {message}", .path.display())]
    Recognition { path: PathBuf, message: String },

    #[error("field segmentation failed for {}: {message}", .path.display())]
    Segmentation { path: PathBuf, message: String },

    #[error("failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScanError {
    /// Reason to record when this error only affects a single image.
    ///
    /// Returns `None` for errors that must abort the whole batch.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            ScanError::UnreadableImage { .. } => Some(SkipReason::UnreadableImage),
            ScanError::Recognition { .. } => Some(SkipReason::RecognitionFailed),
            ScanError::Segmentation { .. } => Some(SkipReason::SegmentationFailed),
            ScanError::InvalidInputDir(_) | ScanError::ListDir { .. } | ScanError::Export { .. } => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_image_errors_are_skippable() {
        let err = ScanError::Recognition {
            path: PathBuf::from("a.png"),
            message: "model failure".to_string(),
        };
        assert_eq!(err.skip_reason(), Some(SkipReason::RecognitionFailed));
        assert!(err.to_string().contains("a.png"));
    }

    #[test]
    fn test_invalid_dir_is_fatal() {
        let err = ScanError::InvalidInputDir(PathBuf::from("/nope"));
        assert_eq!(err.skip_reason(), None);
        assert_eq!(
            err.to_string(),
            "input directory /nope does not exist or is not a directory"
        );
    }
}
