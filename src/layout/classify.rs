//! Paragraph start classification.

use serde::Serialize;

use super::{AnalyzedLine, Thresholds};

/// An analyzed line decorated with its paragraph-start signals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedLine {
    /// The measured line
    #[serde(flatten)]
    pub line: AnalyzedLine,
    /// Vertical gap above the line exceeds the threshold
    pub is_vertical_gap_start: bool,
    /// Indentation relative to the previous line exceeds the threshold
    pub is_indent_start: bool,
}

impl ClassifiedLine {
    /// Whether this line begins a paragraph (page start, vertical gap or indent).
    pub fn is_paragraph_start(&self) -> bool {
        self.line.is_page_start || self.is_vertical_gap_start || self.is_indent_start
    }

    /// Line text.
    pub fn text(&self) -> &str {
        &self.line.text
    }
}

impl std::fmt::Display for ClassifiedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[paragraph_start: {} page_start: {} vertical_gap_start: {} indent_start: {} \
             horizontal_delta: {} vertical_delta: {}] {}",
            self.is_paragraph_start(),
            self.line.is_page_start,
            self.is_vertical_gap_start,
            self.is_indent_start,
            self.line.horizontal_delta,
            self.line.vertical_delta,
            self.line.text
        )
    }
}

/// Classify each line against the calibrated thresholds.
///
/// Comparisons are strict: a delta equal to its threshold does not start a
/// paragraph. Each line is classified independently of the others.
pub fn classify(lines: Vec<AnalyzedLine>, thresholds: &Thresholds) -> Vec<ClassifiedLine> {
    lines
        .into_iter()
        .map(|line| ClassifiedLine {
            is_vertical_gap_start: line.vertical_delta > thresholds.vertical,
            is_indent_start: line.horizontal_delta > thresholds.indent,
            line,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds(vertical: f64, indent: f64) -> Thresholds {
        Thresholds {
            mean_vertical_delta: 0.0,
            mean_horizontal_delta: 0.0,
            vertical,
            indent,
            epsilon: 0.0,
        }
    }

    fn line(vertical_delta: f64, horizontal_delta: f64, is_page_start: bool) -> AnalyzedLine {
        AnalyzedLine {
            text: "x".to_string(),
            vertical_delta,
            horizontal_delta,
            is_page_start,
        }
    }

    #[test]
    fn test_equal_delta_does_not_start_paragraph() {
        let classified = classify(vec![line(0.5, 0.25, false)], &thresholds(0.5, 0.25));
        assert!(!classified[0].is_vertical_gap_start);
        assert!(!classified[0].is_indent_start);
        assert!(!classified[0].is_paragraph_start());
    }

    #[test]
    fn test_each_signal_starts_paragraph() {
        let classified = classify(
            vec![
                line(0.0, 0.0, true),
                line(0.75, 0.0, false),
                line(0.0, 0.5, false),
                line(0.25, 0.125, false),
            ],
            &thresholds(0.5, 0.25),
        );

        assert!(classified[0].is_paragraph_start());
        assert!(classified[1].is_vertical_gap_start);
        assert!(classified[1].is_paragraph_start());
        assert!(classified[2].is_indent_start);
        assert!(classified[2].is_paragraph_start());
        assert!(!classified[3].is_paragraph_start());
    }

    #[test]
    fn test_negative_deltas_never_trigger() {
        let classified = classify(vec![line(-0.9, -0.9, false)], &thresholds(0.0, 0.0));
        assert!(!classified[0].is_paragraph_start());
    }

    #[test]
    fn test_display_lists_signals() {
        let classified = classify(vec![line(0.75, 0.0, false)], &thresholds(0.5, 0.25));
        let rendered = classified[0].to_string();
        assert!(rendered.starts_with("[paragraph_start: true page_start: false"));
        assert!(rendered.ends_with("] x"));
    }
}
