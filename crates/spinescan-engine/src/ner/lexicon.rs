//! Lexicon-backed entity recognizer.
//!
//! Matches a curated list of artist and album names against OCR text,
//! ignoring case and tolerating any whitespace between words.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use spinescan_types::{Entity, EntityLabel};
use tracing::debug;

use super::EntityRecognizer;

/// A known name and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    entries: Vec<LexiconEntry>,
}

/// Recognizer that finds lexicon entries in text.
#[derive(Debug, Default)]
pub struct LexiconRecognizer {
    patterns: Vec<(Regex, EntityLabel)>,
}

impl LexiconRecognizer {
    /// Compile a recognizer from lexicon entries. Blank entries are ignored.
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self> {
        let mut patterns = Vec::with_capacity(entries.len());

        for entry in entries {
            let Some(pattern) = entry_pattern(&entry.text) else {
                continue;
            };
            let regex = Regex::new(&pattern)
                .with_context(|| format!("Invalid lexicon entry {:?}", entry.text))?;
            patterns.push((regex, entry.label));
        }

        Ok(Self { patterns })
    }

    /// Load a lexicon from a JSON file of the form
    /// `{"entries": [{"text": "Miles Davis", "label": "PERSON"}]}`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon {:?}", path))?;
        let file: LexiconFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse lexicon {:?}", path))?;

        debug!("Loaded {} lexicon entries from {:?}", file.entries.len(), path);
        Self::new(file.entries)
    }

    /// Number of usable entries.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Case-insensitive pattern matching the entry's words separated by any
/// whitespace, anchored at word boundaries where the entry starts or ends
/// with a word character.
fn entry_pattern(text: &str) -> Option<String> {
    let words: Vec<String> = text.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return None;
    }

    let trimmed = text.trim();
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let lead = if is_word(trimmed.chars().next()) { r"\b" } else { "" };
    let tail = if is_word(trimmed.chars().last()) { r"\b" } else { "" };

    Some(format!("(?i){}{}{}", lead, words.join(r"\s+"), tail))
}

impl EntityRecognizer for LexiconRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let mut spans: Vec<(usize, usize, EntityLabel)> = self
            .patterns
            .iter()
            .flat_map(|(regex, label)| {
                regex
                    .find_iter(text)
                    .map(move |m| (m.start(), m.end(), *label))
            })
            .collect();

        // Earliest start first; at equal starts the longest span wins.
        spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut entities = Vec::new();
        let mut covered = 0;
        for (start, end, label) in spans {
            if start < covered {
                continue;
            }
            entities.push(Entity {
                text: text[start..end].to_string(),
                label,
                start,
                end,
            });
            covered = end;
        }

        Ok(entities)
    }
}
