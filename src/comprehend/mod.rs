//! Tokenization of Amazon Comprehend results.
//!
//! Language, entity and key phrase detections all carry a piece of text.
//! The [`Annotation`] trait exposes it so the same word and sentence
//! extraction works for every result type.

mod models;

pub use models::{
    ComprehendResponse, DominantLanguageResponse, EntitiesResponse, Entity, KeyPhrase,
    KeyPhrasesResponse, Language,
};

use crate::nlp::TextAnalyzer;

/// A Comprehend result item that carries text.
pub trait Annotation {
    /// Text of the item.
    fn text(&self) -> &str;
}

/// Texts of all items joined by a single space.
pub fn annotations_text<A: Annotation>(items: &[A]) -> String {
    items.iter().map(Annotation::text).collect::<Vec<_>>().join(" ")
}

/// Word tokens of the joined item texts, optionally stemmed.
pub fn annotations_words<A: Annotation>(
    items: &[A],
    analyzer: &TextAnalyzer,
    stemmed: bool,
) -> Vec<String> {
    let text = annotations_text(items);
    if stemmed {
        analyzer.stem_words(&text)
    } else {
        analyzer.words(&text)
    }
}

/// One sentence per item; stemmed sentences are their stemmed words re-joined.
pub fn annotations_sentences<A: Annotation>(
    items: &[A],
    analyzer: &TextAnalyzer,
    stemmed: bool,
) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            if stemmed {
                analyzer.stem_text(item.text())
            } else {
                item.text().to_string()
            }
        })
        .collect()
}
