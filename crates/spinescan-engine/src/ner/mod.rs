//! Named-entity recognition.
//!
//! The entity segmenter only needs labelled spans; where they come from is
//! behind [`EntityRecognizer`].

mod lexicon;

use spinescan_types::Entity;

pub use lexicon::{LexiconEntry, LexiconRecognizer};

/// Produces labelled spans for a piece of text.
pub trait EntityRecognizer {
    /// Recognize entities in `text`, ordered by start offset.
    fn recognize(&self, text: &str) -> anyhow::Result<Vec<Entity>>;
}

impl<T: EntityRecognizer + ?Sized> EntityRecognizer for Box<T> {
    fn recognize(&self, text: &str) -> anyhow::Result<Vec<Entity>> {
        (**self).recognize(text)
    }
}
