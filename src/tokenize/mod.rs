//! Document-level text, sentence, word and paragraph extraction.
//!
//! The flat text of a document is every line and table cell joined by a
//! single space. Sentences and words are cut from that flat text by the
//! [`TextAnalyzer`] collaborators, while paragraphs come from the geometric
//! [`ParagraphDetector`]. Every granularity can optionally be stemmed.

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutOptions, ParagraphDetector, DEFAULT_EPSILON};
use crate::model::Document;
use crate::nlp::TextAnalyzer;

/// Unit of text produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// The whole document as a single string
    #[default]
    Text,
    /// One entry per sentence
    Sentences,
    /// One entry per word or punctuation token
    Words,
    /// One entry per reconstructed paragraph
    Paragraphs,
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Granularity::Text => "text",
            Granularity::Sentences => "sentences",
            Granularity::Words => "words",
            Granularity::Paragraphs => "paragraphs",
        };
        f.write_str(name)
    }
}

/// Options for [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenizeOptions {
    /// Replace every word with its stem
    pub stemmed: bool,
    /// Threshold margin for paragraph detection
    pub epsilon: f64,
}

impl TokenizeOptions {
    /// Create new tokenize options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable stemming.
    pub fn with_stemming(mut self, stemmed: bool) -> Self {
        self.stemmed = stemmed;
        self
    }

    /// Set the paragraph threshold margin.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    fn layout(&self) -> LayoutOptions {
        LayoutOptions::new().with_epsilon(self.epsilon)
    }
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            stemmed: false,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Uniform result of a tokenization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tokens {
    /// What each item represents
    pub granularity: Granularity,
    /// Whether items were stemmed
    pub stemmed: bool,
    /// Extracted items in document order
    pub items: Vec<String>,
}

impl Tokens {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl IntoIterator for Tokens {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Extracts text units from a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct DocumentTokenizer {
    analyzer: TextAnalyzer,
    layout: LayoutOptions,
}

impl DocumentTokenizer {
    /// Create a tokenizer with the default analyzer and layout options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom text analyzer.
    pub fn with_analyzer(mut self, analyzer: TextAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Use custom paragraph detection options.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Get the text analyzer.
    pub fn analyzer(&self) -> &TextAnalyzer {
        &self.analyzer
    }

    /// Flat text of the document.
    pub fn text(&self, doc: &Document, stemmed: bool) -> String {
        let text = doc.plain_text();
        if stemmed {
            self.analyzer.stem_text(&text)
        } else {
            text
        }
    }

    /// Sentences of the flat text.
    pub fn sentences(&self, doc: &Document, stemmed: bool) -> Vec<String> {
        let sentences = self.analyzer.sentences(&doc.plain_text());
        self.maybe_stem(sentences, stemmed)
    }

    /// Word tokens of the flat text.
    pub fn words(&self, doc: &Document, stemmed: bool) -> Vec<String> {
        let words = self.analyzer.words(&doc.plain_text());
        if stemmed {
            words.iter().map(|w| self.analyzer.stem(w)).collect()
        } else {
            words
        }
    }

    /// Paragraphs reconstructed from line geometry.
    pub fn paragraphs(&self, doc: &Document, stemmed: bool) -> Vec<String> {
        let paragraphs = ParagraphDetector::with_options(self.layout).detect(doc);
        self.maybe_stem(paragraphs, stemmed)
    }

    /// Extract items at the requested granularity.
    pub fn tokenize(&self, doc: &Document, granularity: Granularity, stemmed: bool) -> Tokens {
        let items = match granularity {
            Granularity::Text => {
                let text = self.text(doc, stemmed);
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text]
                }
            }
            Granularity::Sentences => self.sentences(doc, stemmed),
            Granularity::Words => self.words(doc, stemmed),
            Granularity::Paragraphs => self.paragraphs(doc, stemmed),
        };
        log::debug!("Extracted {} {} (stemmed: {})", items.len(), granularity, stemmed);

        Tokens {
            granularity,
            stemmed,
            items,
        }
    }

    fn maybe_stem(&self, items: Vec<String>, stemmed: bool) -> Vec<String> {
        if stemmed {
            items.iter().map(|s| self.analyzer.stem_text(s)).collect()
        } else {
            items
        }
    }
}

/// Extract items from a document with the default analyzer.
pub fn tokenize(doc: &Document, granularity: Granularity, options: &TokenizeOptions) -> Tokens {
    DocumentTokenizer::new()
        .with_layout(options.layout())
        .tokenize(doc, granularity, options.stemmed)
}
