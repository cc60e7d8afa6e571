//! Paragraph text assembly.

use super::ClassifiedLine;

/// Fold classified lines into paragraph strings.
///
/// A paragraph-start line closes the paragraph being built and opens a new
/// one; any other line is appended to the current paragraph after a single
/// space. The trailing paragraph is emitted at the end.
pub fn assemble_paragraphs(lines: &[ClassifiedLine]) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in lines {
        if line.is_paragraph_start() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            current.push_str(line.text());
        } else {
            current.push(' ');
            current.push_str(line.text());
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::AnalyzedLine;

    fn classified(text: &str, starts: bool) -> ClassifiedLine {
        ClassifiedLine {
            line: AnalyzedLine {
                text: text.to_string(),
                vertical_delta: 0.0,
                horizontal_delta: 0.0,
                is_page_start: starts,
            },
            is_vertical_gap_start: false,
            is_indent_start: false,
        }
    }

    #[test]
    fn test_groups_lines() {
        let lines = [
            classified("Heading", true),
            classified("First body line", true),
            classified("continues here.", false),
            classified("Last", true),
        ];

        assert_eq!(
            assemble_paragraphs(&lines),
            vec!["Heading", "First body line continues here.", "Last"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(assemble_paragraphs(&[]).is_empty());
    }

    #[test]
    fn test_empty_start_line_merges_forward() {
        // The empty start line opens an empty paragraph; "B" is appended to it.
        let lines = [
            classified("A", true),
            classified("", true),
            classified("B", false),
        ];
        assert_eq!(assemble_paragraphs(&lines), vec!["A", " B"]);
    }
}
