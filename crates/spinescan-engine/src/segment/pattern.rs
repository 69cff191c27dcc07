//! Separator and word-position heuristic, one result per line.

use std::sync::OnceLock;

use regex::Regex;
use spinescan_types::{Fields, RowLayout};
use tracing::debug;

use super::FieldSegmenter;

const PRESENTS_MARKER: &str = "PRESENTS:";

/// A colon or hyphen with its surrounding whitespace, or a run of two or
/// more whitespace characters.
fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"\s*[:\-]\s*|\s{2,}").expect("valid separator regex"))
}

/// Split a single spine line into artist and album.
pub fn split_line(line: &str) -> Fields {
    let line = line.trim();

    if let Some((before, after)) = line.split_once(PRESENTS_MARKER) {
        return Fields::new(before.trim(), format!("PRESENTS: {}", after.trim()));
    }

    if let Some(m) = separator().find(line) {
        return Fields::new(line[..m.start()].trim(), line[m.end()..].trim());
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() > 2 {
        let mid = words.len() / 2;
        return Fields::new(words[..mid].join(" "), words[mid..].join(" "));
    }

    Fields::new(line, "")
}

/// Per-line segmenter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternSegmenter;

impl FieldSegmenter for PatternSegmenter {
    fn layout(&self) -> RowLayout {
        RowLayout::PerLine
    }

    fn segment(&self, text: &str) -> anyhow::Result<Vec<Fields>> {
        // Empty text is still one (empty) line so the image keeps a row.
        Ok(text
            .split('\n')
            .map(|line| {
                let fields = split_line(line);
                debug!(
                    "Line {:?} -> artist {:?}, album {:?}",
                    line, fields.artist, fields.album
                );
                fields
            })
            .collect())
    }
}
