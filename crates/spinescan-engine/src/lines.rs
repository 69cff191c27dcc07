//! Line reconstruction from unordered OCR detections.
//!
//! Detections are sorted by vertical midpoint and clustered with single
//! linkage: a new line starts whenever the gap to the previous midpoint
//! exceeds a fixed fraction of the image height.

use spinescan_types::{Detection, Line};
use tracing::trace;

/// Default line gap, as a fraction of the image height.
pub const DEFAULT_GAP_RATIO: f32 = 0.03;

/// Tunables for turning detections into lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineConfig {
    /// Midpoint gap, relative to image height, that starts a new line.
    pub gap_ratio: f32,

    /// Detections below this confidence are dropped.
    pub min_confidence: f32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            gap_ratio: DEFAULT_GAP_RATIO,
            min_confidence: 0.0,
        }
    }
}

/// Drop blank and low-confidence detections.
pub fn filter_detections(detections: Vec<Detection>, min_confidence: f32) -> Vec<Detection> {
    detections
        .into_iter()
        .filter(|d| !d.text.trim().is_empty() && d.confidence >= min_confidence)
        .collect()
}

/// Cluster detections into lines ordered top to bottom.
pub fn reconstruct_lines(detections: &[Detection], image_height: u32, gap_ratio: f32) -> Vec<Line> {
    let threshold = image_height as f32 * gap_ratio;

    let mut sorted: Vec<&Detection> = detections.iter().collect();
    sorted.sort_by(|a, b| a.mid_y().total_cmp(&b.mid_y()));

    let mut lines = Vec::new();
    let mut current: Vec<&Detection> = Vec::new();
    let mut prev_mid: Option<f32> = None;

    for det in sorted {
        let mid = det.mid_y();
        if let Some(prev) = prev_mid {
            if (mid - prev).abs() > threshold {
                lines.push(close_line(&current));
                current.clear();
            }
        }
        current.push(det);
        prev_mid = Some(mid);
    }

    if !current.is_empty() {
        lines.push(close_line(&current));
    }

    trace!(
        "Grouped {} detections into {} lines (threshold {:.1}px)",
        detections.len(),
        lines.len(),
        threshold
    );
    lines
}

fn close_line(members: &[&Detection]) -> Line {
    let mid_y = members.iter().map(|d| d.mid_y()).sum::<f32>() / members.len() as f32;
    Line {
        parts: members.iter().map(|d| d.text.clone()).collect(),
        mid_y,
    }
}

/// Join line texts with newlines.
pub fn join_lines(lines: &[Line]) -> String {
    lines.iter().map(Line::text).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(mid: f32, text: &str) -> Detection {
        Detection::from_rect(0.0, mid - 5.0, 50.0, mid + 5.0, text, 0.9)
    }

    #[test]
    fn test_clusters_by_midpoint_gap() {
        let detections = vec![
            at(50.0, "The"),
            at(10.0, "Pink"),
            at(52.0, "Wall"),
            at(12.0, "Floyd"),
        ];

        // 3% of 500 is a 15px threshold.
        let lines = reconstruct_lines(&detections, 500, DEFAULT_GAP_RATIO);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].parts, vec!["Pink", "Floyd"]);
        assert_eq!(lines[1].parts, vec!["The", "Wall"]);
        assert_eq!(lines[0].mid_y, 11.0);
        assert_eq!(join_lines(&lines), "Pink Floyd\nThe Wall");
    }

    #[test]
    fn test_gap_equal_to_threshold_stays_on_line() {
        let detections = vec![at(10.0, "a"), at(20.0, "b"), at(30.5, "c")];
        let lines = reconstruct_lines(&detections, 20, 0.5);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "a b");
        assert_eq!(lines[1].text(), "c");
    }

    #[test]
    fn test_single_linkage_chains_small_steps() {
        let detections: Vec<_> = (0..6).map(|i| at(i as f32 * 10.0, "w")).collect();
        let lines = reconstruct_lines(&detections, 500, DEFAULT_GAP_RATIO);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].parts.len(), 6);
    }

    #[test]
    fn test_no_detections_yield_empty_text() {
        let lines = reconstruct_lines(&[], 500, DEFAULT_GAP_RATIO);
        assert!(lines.is_empty());
        assert_eq!(join_lines(&lines), "");
    }

    #[test]
    fn test_filter_detections() {
        let mut low = at(10.0, "ghost");
        low.confidence = 0.1;
        let blank = at(20.0, "  ");
        let kept = at(30.0, "Queen");

        let filtered = filter_detections(vec![low, blank, kept], 0.5);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "Queen");
    }

    proptest! {
        #[test]
        fn test_lines_preserve_sorted_texts(
            mids in prop::collection::vec(0u16..1000, 0..40),
            height in 1u32..2000,
        ) {
            let detections: Vec<Detection> = mids
                .iter()
                .enumerate()
                .map(|(i, m)| at(*m as f32, &format!("w{}", i)))
                .collect();

            let lines = reconstruct_lines(&detections, height, DEFAULT_GAP_RATIO);
            prop_assert!(lines.len() <= detections.len());

            let mut expected: Vec<&Detection> = detections.iter().collect();
            expected.sort_by(|a, b| a.mid_y().total_cmp(&b.mid_y()));
            let expected: Vec<String> = expected.iter().map(|d| d.text.clone()).collect();

            let produced: Vec<String> = lines.into_iter().flat_map(|l| l.parts).collect();
            prop_assert_eq!(produced, expected);
        }
    }
}
