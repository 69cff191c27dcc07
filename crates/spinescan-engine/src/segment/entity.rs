//! Entity-driven segmentation with positional fallback, one result per image.

use spinescan_types::{Entity, FieldCategory, Fields, RowLayout};
use tracing::debug;

use super::FieldSegmenter;
use crate::ner::EntityRecognizer;

/// First artist-category and first album-category entity texts.
pub fn pick_fields(entities: &[Entity]) -> (Option<&str>, Option<&str>) {
    entities
        .iter()
        .fold((None, None), |(artist, album), entity| {
            match entity.label.category() {
                Some(FieldCategory::Artist) => (artist.or(Some(entity.text.as_str())), album),
                Some(FieldCategory::Album) => (artist, album.or(Some(entity.text.as_str()))),
                None => (artist, album),
            }
        })
}

/// Whole-text segmenter backed by an [`EntityRecognizer`].
pub struct EntitySegmenter<R> {
    recognizer: R,
}

impl<R: EntityRecognizer> EntitySegmenter<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }
}

impl<R: EntityRecognizer> FieldSegmenter for EntitySegmenter<R> {
    fn layout(&self) -> RowLayout {
        RowLayout::PerImage
    }

    fn segment(&self, text: &str) -> anyhow::Result<Vec<Fields>> {
        let entities = self.recognizer.recognize(text)?;
        debug!("Recognized {} entities", entities.len());

        let (artist, album) = pick_fields(&entities);
        let mut lines = text.lines().map(str::trim);
        let first = lines.next().unwrap_or_default();
        let second = lines.next().unwrap_or_default();

        let fields = Fields::new(artist.unwrap_or(first), album.unwrap_or(second));
        debug!("Artist {:?}, album {:?}", fields.artist, fields.album);

        if fields.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![fields])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::{LexiconEntry, LexiconRecognizer};
    use spinescan_types::EntityLabel;

    /// Recognizer that returns a fixed span list.
    struct Fixed(Vec<Entity>);

    impl EntityRecognizer for Fixed {
        fn recognize(&self, _text: &str) -> anyhow::Result<Vec<Entity>> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl EntityRecognizer for Failing {
        fn recognize(&self, _text: &str) -> anyhow::Result<Vec<Entity>> {
            anyhow::bail!("model unavailable")
        }
    }

    fn entity(text: &str, label: EntityLabel) -> Entity {
        Entity {
            text: text.to_string(),
            label,
            start: 0,
            end: text.len(),
        }
    }

    #[test]
    fn test_entities_fill_both_fields() {
        let segmenter = EntitySegmenter::new(Fixed(vec![
            entity("Miles Davis", EntityLabel::Person),
            entity("Kind of Blue", EntityLabel::WorkOfArt),
        ]));

        let fields = segmenter.segment("MILES DAVIS\nKIND OF BLUE").unwrap();
        assert_eq!(fields, vec![Fields::new("Miles Davis", "Kind of Blue")]);
    }

    #[test]
    fn test_lexicon_recognizer_end_to_end() {
        let recognizer = LexiconRecognizer::new(vec![
            LexiconEntry {
                text: "Miles Davis".to_string(),
                label: EntityLabel::Person,
            },
            LexiconEntry {
                text: "Kind of Blue".to_string(),
                label: EntityLabel::WorkOfArt,
            },
        ])
        .unwrap();
        let segmenter = EntitySegmenter::new(recognizer);

        let fields = segmenter.segment("COLUMBIA\nMILES DAVIS\nKind of Blue").unwrap();
        assert_eq!(fields, vec![Fields::new("MILES DAVIS", "Kind of Blue")]);

        // Names missing from the lexicon fall back to line positions
        let fields = segmenter.segment("Sonny Rollins\nSaxophone Colossus").unwrap();
        assert_eq!(
            fields,
            vec![Fields::new("Sonny Rollins", "Saxophone Colossus")]
        );
    }

    #[test]
    fn test_first_match_per_category_wins() {
        let entities = vec![
            entity("Columbia", EntityLabel::Org),
            entity("Newport 1958", EntityLabel::Event),
            entity("John Coltrane", EntityLabel::Person),
            entity("Giant Steps", EntityLabel::WorkOfArt),
            entity("liner", EntityLabel::Other),
        ];
        assert_eq!(pick_fields(&entities), (Some("Columbia"), Some("Newport 1958")));
    }

    #[test]
    fn test_positional_fallback() {
        let segmenter = EntitySegmenter::new(Fixed(vec![]));
        let fields = segmenter.segment("Artist X\nAlbum Y").unwrap();
        assert_eq!(fields, vec![Fields::new("Artist X", "Album Y")]);
    }

    #[test]
    fn test_partial_fallback() {
        let segmenter = EntitySegmenter::new(Fixed(vec![entity(
            "Blue Train",
            EntityLabel::WorkOfArt,
        )]));
        let fields = segmenter.segment("Coltrane\nBlue Train").unwrap();
        assert_eq!(fields, vec![Fields::new("Coltrane", "Blue Train")]);
    }

    #[test]
    fn test_single_line_has_empty_album() {
        let segmenter = EntitySegmenter::new(Fixed(vec![]));
        let fields = segmenter.segment("Anthology").unwrap();
        assert_eq!(fields, vec![Fields::new("Anthology", "")]);
    }

    #[test]
    fn test_empty_text_yields_no_record() {
        let segmenter = EntitySegmenter::new(Fixed(vec![]));
        assert!(segmenter.segment("").unwrap().is_empty());
        assert_eq!(segmenter.layout(), RowLayout::PerImage);
    }

    #[test]
    fn test_recognizer_failure_propagates() {
        let segmenter = EntitySegmenter::new(Failing);
        assert!(segmenter.segment("anything").is_err());
    }
}
