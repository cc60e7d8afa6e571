//! Per-line layout metrics.

use serde::Serialize;

use crate::model::Document;

/// A line with its position relative to the line before it.
///
/// Deltas are measured against the previous line in document order, across
/// page boundaries. The very first line of the document is measured against
/// an implicit origin of `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedLine {
    /// Line text
    pub text: String,
    /// `top - previous top`
    pub vertical_delta: f64,
    /// `left - previous left`
    pub horizontal_delta: f64,
    /// First line of its page
    pub is_page_start: bool,
}

/// Flatten every line of the document into [`AnalyzedLine`]s.
///
/// The output has exactly one entry per line, in page order then line order.
pub fn analyze_lines(doc: &Document) -> Vec<AnalyzedLine> {
    doc.pages
        .iter()
        .flat_map(|page| {
            page.lines
                .iter()
                .enumerate()
                .map(|(i, line)| (i == 0, line))
        })
        .scan((0.0f64, 0.0f64), |previous, (is_page_start, line)| {
            let (previous_top, previous_left) = *previous;
            *previous = (line.top(), line.left());
            Some(AnalyzedLine {
                text: line.text.clone(),
                vertical_delta: line.top() - previous_top,
                horizontal_delta: line.left() - previous_left,
                is_page_start,
            })
        })
        .collect()
}
