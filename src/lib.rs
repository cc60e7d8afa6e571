//! # untextract
//!
//! Paragraph reconstruction and tokenization for document-analysis output.
//!
//! OCR services such as Amazon Textract report positioned lines of text but
//! no paragraph structure. This library parses saved analysis responses,
//! rebuilds paragraphs from line geometry, and extracts text, sentences and
//! words (optionally stemmed) for downstream language processing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use untextract::{parse_file, ParagraphDetector};
//!
//! fn main() -> untextract::Result<()> {
//!     // Parse a saved Textract response
//!     let doc = parse_file("response.json")?;
//!
//!     // Reconstruct paragraphs from line geometry
//!     for paragraph in ParagraphDetector::new().detect(&doc) {
//!         println!("{}", paragraph);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Paragraph detection**: vertical gaps, indentation and page breaks
//! - **Tokenization**: Penn Treebank style words, Unicode sentences
//! - **Stemming**: English Snowball stemmer for every granularity
//! - **Tables and forms**: cells and key/value fields from the response
//! - **Comprehend results**: word and sentence extraction from annotations
//! - **Parallel processing**: Uses Rayon for batches of documents

pub mod comprehend;
pub mod error;
pub mod layout;
pub mod model;
pub mod nlp;
pub mod parser;
pub mod render;
pub mod tokenize;

// Re-export commonly used types
pub use comprehend::{Annotation, ComprehendResponse, Entity, KeyPhrase, Language};
pub use error::{Error, Result};
pub use layout::{LayoutOptions, LayoutReport, ParagraphDetector};
pub use model::{
    BoundingBox, Document, Field, FieldText, Form, Line, Page, Table, TableCell, TableRow, Word,
};
pub use nlp::TextAnalyzer;
pub use parser::{PageSelection, ParseOptions, TextractParser};
pub use render::JsonFormat;
pub use tokenize::{DocumentTokenizer, Granularity, TokenizeOptions, Tokens};

use std::io::Read;
use std::path::Path;

/// Parse a saved Textract response file.
///
/// # Example
///
/// ```no_run
/// use untextract::parse_file;
///
/// let doc = parse_file("response.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    TextractParser::new().parse_file(path)
}

/// Parse a saved Textract response file with custom options.
///
/// # Example
///
/// ```no_run
/// use untextract::{parse_file_with_options, PageSelection, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_pages(PageSelection::Range(1..=2))
///     .lines_only();
/// let doc = parse_file_with_options("response.json", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    TextractParser::with_options(options).parse_file(path)
}

/// Parse a Textract response from a JSON string.
pub fn parse_str(json: &str) -> Result<Document> {
    TextractParser::new().parse_str(json)
}

/// Parse a Textract response from a JSON string with custom options.
pub fn parse_str_with_options(json: &str, options: ParseOptions) -> Result<Document> {
    TextractParser::with_options(options).parse_str(json)
}

/// Parse a Textract response from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    TextractParser::new().parse_reader(reader)
}

/// Parse a Textract response from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    TextractParser::with_options(options).parse_reader(reader)
}

/// Extract the flat text of a response file.
///
/// # Example
///
/// ```no_run
/// use untextract::extract_text;
///
/// let text = extract_text("response.json").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Reconstruct the paragraphs of a response file.
pub fn paragraphs<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let doc = parse_file(path)?;
    Ok(ParagraphDetector::new().detect(&doc))
}

/// Extract the sentences of a response file.
pub fn sentences<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let doc = parse_file(path)?;
    Ok(DocumentTokenizer::new().sentences(&doc, false))
}

/// Extract the word tokens of a response file.
pub fn words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let doc = parse_file(path)?;
    Ok(DocumentTokenizer::new().words(&doc, false))
}

/// Builder for parsing and tokenizing analysis responses.
///
/// # Example
///
/// ```no_run
/// use untextract::{Granularity, Untextract};
///
/// let paragraphs = Untextract::new()
///     .stemmed()
///     .with_epsilon(0.02)
///     .lines_only()
///     .parse("response.json")?
///     .tokenize(Granularity::Paragraphs);
/// # Ok::<(), untextract::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Untextract {
    parse_options: ParseOptions,
    tokenize_options: TokenizeOptions,
}

impl Untextract {
    /// Create a new Untextract builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.parse_options = self.parse_options.with_pages(pages);
        self
    }

    /// Ignore tables and forms.
    pub fn lines_only(mut self) -> Self {
        self.parse_options = self.parse_options.lines_only();
        self
    }

    /// Stem every extracted word.
    pub fn stemmed(mut self) -> Self {
        self.tokenize_options = self.tokenize_options.with_stemming(true);
        self
    }

    /// Set the paragraph threshold margin.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.tokenize_options = self.tokenize_options.with_epsilon(epsilon);
        self
    }

    /// Parse a response file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UntextractResult> {
        let document = TextractParser::with_options(self.parse_options).parse_file(path)?;
        Ok(UntextractResult {
            document,
            options: self.tokenize_options,
        })
    }

    /// Parse a response from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<UntextractResult> {
        let document = TextractParser::with_options(self.parse_options).parse_str(json)?;
        Ok(UntextractResult {
            document,
            options: self.tokenize_options,
        })
    }
}

/// Result of parsing an analysis response.
#[derive(Debug, Clone)]
pub struct UntextractResult {
    /// The parsed document
    pub document: Document,
    /// Tokenize options to use
    options: TokenizeOptions,
}

impl UntextractResult {
    /// Extract items at the requested granularity.
    pub fn tokenize(&self, granularity: Granularity) -> Tokens {
        tokenize::tokenize(&self.document, granularity, &self.options)
    }

    /// Run paragraph detection and keep every intermediate result.
    pub fn layout_report(&self) -> Result<LayoutReport> {
        let options = LayoutOptions::new().with_epsilon(self.options.epsilon);
        ParagraphDetector::with_options(options).analyze(&self.document)
    }

    /// Human-readable dump of the document.
    pub fn outline(&self) -> String {
        render::outline(&self.document)
    }

    /// Get plain text without stemming.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{"Blocks": [
        {"BlockType": "PAGE", "Id": "p1"},
        {"BlockType": "LINE", "Id": "l1", "Text": "Running risks",
         "Geometry": {"BoundingBox": {"Top": 0.10, "Left": 0.10}}},
        {"BlockType": "LINE", "Id": "l2", "Text": "are assessed.",
         "Geometry": {"BoundingBox": {"Top": 0.12, "Left": 0.10}}},
        {"BlockType": "LINE", "Id": "l3", "Text": "New section.",
         "Geometry": {"BoundingBox": {"Top": 0.40, "Left": 0.10}}}
    ]}"#;

    #[test]
    fn test_untextract_builder_default() {
        let builder = Untextract::default();
        assert!(!builder.tokenize_options.stemmed);
        assert_eq!(builder.parse_options.pages, PageSelection::All);
    }

    #[test]
    fn test_untextract_builder_chained() {
        let builder = Untextract::new()
            .stemmed()
            .with_epsilon(0.05)
            .lines_only()
            .with_pages(PageSelection::Pages(vec![2]));

        assert!(builder.tokenize_options.stemmed);
        assert_eq!(builder.tokenize_options.epsilon, 0.05);
        assert!(!builder.parse_options.include_tables);
        assert!(!builder.parse_options.include_forms);
        assert_eq!(builder.parse_options.pages, PageSelection::Pages(vec![2]));
    }

    #[test]
    fn test_parse_str_and_tokenize() {
        let result = Untextract::new().parse_str(RESPONSE).unwrap();
        assert_eq!(
            result.tokenize(Granularity::Paragraphs).items,
            vec!["Running risks are assessed.", "New section."]
        );
        assert_eq!(
            result.plain_text(),
            "Running risks are assessed. New section."
        );
    }

    #[test]
    fn test_stemmed_result() {
        let result = Untextract::new().stemmed().parse_str(RESPONSE).unwrap();
        let words = result.tokenize(Granularity::Words);
        assert!(words.stemmed);
        assert_eq!(&words.items[..3], &["run", "risk", "are"]);
    }

    #[test]
    fn test_layout_report() {
        let result = Untextract::new().parse_str(RESPONSE).unwrap();
        let report = result.layout_report().unwrap();
        assert_eq!(report.lines.len(), 3);
        assert_eq!(report.paragraph_start_count(), 2);
    }

    #[test]
    fn test_parse_str_invalid_json() {
        assert!(matches!(parse_str("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_file_missing() {
        assert!(matches!(
            parse_file("/nonexistent/response.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_parse_reader() {
        let doc = parse_reader(RESPONSE.as_bytes()).unwrap();
        assert_eq!(doc.line_count(), 3);
    }
}
