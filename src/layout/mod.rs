//! Paragraph reconstruction from line geometry.
//!
//! The analysis service reports lines with bounding boxes but no paragraph
//! structure. Paragraphs are recovered in four pure stages:
//!
//! 1. [`analyze_lines`] measures each line's vertical and horizontal offset
//!    from the previous line in document order.
//! 2. [`Thresholds::calibrate`] derives document-wide cutoffs from the mean
//!    offsets plus a fixed epsilon.
//! 3. [`classify`] flags lines whose offsets exceed the cutoffs.
//! 4. [`assemble_paragraphs`] folds the flagged lines into paragraph text.
//!
//! A line starts a paragraph when it is the first line of a page, when the
//! gap above it is unusually large, or when it is indented further than usual.
//!
//! ```
//! use untextract::layout::ParagraphDetector;
//! use untextract::model::{Document, Line, Page};
//!
//! let mut page = Page::new(1);
//! page.add_line(Line::at("First paragraph", 0.10, 0.10));
//! page.add_line(Line::at("still first.", 0.12, 0.10));
//! page.add_line(Line::at("Second paragraph.", 0.40, 0.10));
//! let doc = Document::from_pages(vec![page]);
//!
//! let paragraphs = ParagraphDetector::new().detect(&doc);
//! assert_eq!(paragraphs, vec!["First paragraph still first.", "Second paragraph."]);
//! ```

mod assemble;
mod calibrate;
mod classify;
mod metrics;

pub use assemble::assemble_paragraphs;
pub use calibrate::{Thresholds, DEFAULT_EPSILON};
pub use classify::{classify, ClassifiedLine};
pub use metrics::{analyze_lines, AnalyzedLine};

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::Document;

/// Options for paragraph detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Margin added to the mean deltas; larger values detect fewer paragraphs
    pub epsilon: f64,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold margin.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Full output of one detection run, for inspecting and tuning thresholds.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    /// Calibrated thresholds
    pub thresholds: Thresholds,
    /// Every line with its deltas and signals
    pub lines: Vec<ClassifiedLine>,
    /// Assembled paragraphs
    pub paragraphs: Vec<String>,
}

impl LayoutReport {
    /// Number of lines that start a paragraph.
    pub fn paragraph_start_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_paragraph_start()).count()
    }
}

impl std::fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "vertical threshold: {}", self.thresholds.vertical)?;
        writeln!(f, "indent threshold: {}", self.thresholds.indent)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        for paragraph in &self.paragraphs {
            writeln!(f)?;
            writeln!(f, "{}", paragraph)?;
        }
        Ok(())
    }
}

/// Geometric paragraph detector.
#[derive(Debug, Clone, Default)]
pub struct ParagraphDetector {
    options: LayoutOptions,
}

impl ParagraphDetector {
    /// Create a detector with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom options.
    pub fn with_options(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Get the layout options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Run every stage and keep the intermediate results.
    ///
    /// Fails with [`Error::EmptyDocument`] when the document has no lines.
    pub fn analyze(&self, doc: &Document) -> Result<LayoutReport> {
        let analyzed = analyze_lines(doc);
        let thresholds = Thresholds::calibrate(&analyzed, self.options.epsilon)?;
        log::debug!("Calibrated over {} lines: {}", analyzed.len(), thresholds);

        let lines = classify(analyzed, &thresholds);
        for line in &lines {
            log::trace!("{}", line);
        }

        let paragraphs = assemble_paragraphs(&lines);
        log::debug!("Detected {} paragraphs", paragraphs.len());

        Ok(LayoutReport {
            thresholds,
            lines,
            paragraphs,
        })
    }

    /// Reconstruct paragraphs; a document without lines yields none.
    pub fn detect(&self, doc: &Document) -> Vec<String> {
        match self.analyze(doc) {
            Ok(report) => report.paragraphs,
            Err(Error::EmptyDocument) => {
                log::debug!("Document has no lines, no paragraphs to detect");
                Vec::new()
            }
            Err(e) => {
                log::warn!("Paragraph detection failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Reconstruct paragraphs for many independent documents in parallel.
    pub fn detect_batch(&self, docs: &[Document]) -> Vec<Vec<String>> {
        docs.par_iter().map(|doc| self.detect(doc)).collect()
    }
}
