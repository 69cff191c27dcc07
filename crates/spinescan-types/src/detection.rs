//! OCR detection and reconstructed line types.

use serde::{Deserialize, Serialize};

/// A point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single OCR hit: bounding box, recognized text and confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Box corners: top-left, top-right, bottom-right, bottom-left.
    pub corners: [Point; 4],

    /// Recognized text.
    pub text: String,

    /// Recognition confidence in `[0, 1]`.
    pub confidence: f32,
}

impl Detection {
    /// Create a detection from its four corners.
    pub fn new(corners: [Point; 4], text: impl Into<String>, confidence: f32) -> Self {
        Self {
            corners,
            text: text.into(),
            confidence,
        }
    }

    /// Create a detection from an axis-aligned rectangle.
    pub fn from_rect(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        text: impl Into<String>,
        confidence: f32,
    ) -> Self {
        Self::new(
            [
                Point::new(left, top),
                Point::new(right, top),
                Point::new(right, bottom),
                Point::new(left, bottom),
            ],
            text,
            confidence,
        )
    }

    /// Vertical midpoint, taken between the top-left and bottom-right corners.
    pub fn mid_y(&self) -> f32 {
        (self.corners[0].y + self.corners[2].y) / 2.0
    }
}

/// Detections judged to share a vertical band, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Texts of the member detections.
    pub parts: Vec<String>,

    /// Mean vertical midpoint of the member detections.
    pub mid_y: f32,
}

impl Line {
    /// Line text with parts joined by single spaces.
    pub fn text(&self) -> String {
        self.parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_y_from_rect() {
        let det = Detection::from_rect(0.0, 10.0, 40.0, 30.0, "ABBA", 0.9);
        assert_eq!(det.mid_y(), 20.0);
        assert_eq!(det.corners[1], Point::new(40.0, 10.0));
    }

    #[test]
    fn test_line_text_joins_with_spaces() {
        let line = Line {
            parts: vec!["Pink".to_string(), "Floyd".to_string()],
            mid_y: 4.0,
        };
        assert_eq!(line.text(), "Pink Floyd");
    }

    #[test]
    fn test_detection_serialization() {
        let det = Detection::from_rect(1.0, 2.0, 3.0, 4.0, "Blue", 1.0);
        let json = serde_json::to_string(&det).unwrap();
        assert!(json.contains("\"text\":\"Blue\""));

        let parsed: Detection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, det);
    }
}
