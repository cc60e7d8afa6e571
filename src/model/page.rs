//! Page-level types.

use super::{BoundingBox, Form, Table};
use serde::{Deserialize, Serialize};

/// A single page of analysis output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Detected lines, in reading order
    pub lines: Vec<Line>,

    /// Detected tables
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,

    /// Detected key/value form fields
    #[serde(default)]
    pub form: Form,
}

impl Page {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Add a table to the page.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Texts of every line, then every table cell, in page order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .chain(self.tables.iter().flat_map(|t| t.cell_texts()))
    }

    /// Text of every line followed by every table cell, space separated.
    pub fn plain_text(&self) -> String {
        self.texts().collect::<Vec<_>>().join(" ")
    }
}

/// A line of text with its location on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// Block id from the analysis response
    #[serde(default)]
    pub id: String,

    /// Line text
    pub text: String,

    /// Recognition confidence (0-100)
    #[serde(default)]
    pub confidence: f32,

    /// Location of the line on its page
    pub bounding_box: BoundingBox,

    /// Words making up the line
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<Word>,
}

impl Line {
    /// Create a line from text and geometry.
    pub fn new(text: impl Into<String>, bounding_box: BoundingBox) -> Self {
        Self {
            id: String::new(),
            text: text.into(),
            confidence: 0.0,
            bounding_box,
            words: Vec::new(),
        }
    }

    /// Create a line positioned at `top`/`left` with no extent.
    pub fn at(text: impl Into<String>, top: f64, left: f64) -> Self {
        Self::new(text, BoundingBox::new(top, left, 0.0, 0.0))
    }

    /// Set the block id and return self.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the confidence and return self.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Top edge of the line.
    pub fn top(&self) -> f64 {
        self.bounding_box.top
    }

    /// Left edge of the line.
    pub fn left(&self) -> f64 {
        self.bounding_box.left
    }
}

/// A single recognized word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Block id from the analysis response
    #[serde(default)]
    pub id: String,

    /// Word text
    pub text: String,

    /// Recognition confidence (0-100)
    #[serde(default)]
    pub confidence: f32,

    /// Location of the word, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

impl Word {
    /// Create a word without geometry.
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            id: String::new(),
            text: text.into(),
            confidence,
            bounding_box: None,
        }
    }
}
