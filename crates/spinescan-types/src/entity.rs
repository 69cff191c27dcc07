//! Named-entity types.

use serde::{Deserialize, Serialize};

/// Semantic label attached to a recognized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Org,
    /// Geopolitical entity (countries, cities).
    Gpe,
    Loc,
    WorkOfArt,
    Product,
    Event,
    Other,
}

/// Which record field an entity label feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCategory {
    Artist,
    Album,
}

impl EntityLabel {
    /// People, organizations and places name artists; works, products and
    /// events name albums.
    pub fn category(self) -> Option<FieldCategory> {
        match self {
            EntityLabel::Person | EntityLabel::Org | EntityLabel::Gpe | EntityLabel::Loc => {
                Some(FieldCategory::Artist)
            }
            EntityLabel::WorkOfArt | EntityLabel::Product | EntityLabel::Event => {
                Some(FieldCategory::Album)
            }
            EntityLabel::Other => None,
        }
    }
}

/// A labelled span of the recognizer's input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Surface text as it appears in the input.
    pub text: String,

    pub label: EntityLabel,

    /// Byte offset of the span start.
    pub start: usize,

    /// Byte offset one past the span end.
    pub end: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&EntityLabel::WorkOfArt).unwrap();
        assert_eq!(json, "\"WORK_OF_ART\"");

        let parsed: EntityLabel = serde_json::from_str("\"PERSON\"").unwrap();
        assert_eq!(parsed, EntityLabel::Person);
    }

    #[test]
    fn test_label_categories() {
        assert_eq!(EntityLabel::Gpe.category(), Some(FieldCategory::Artist));
        assert_eq!(EntityLabel::Event.category(), Some(FieldCategory::Album));
        assert_eq!(EntityLabel::Other.category(), None);
    }
}
