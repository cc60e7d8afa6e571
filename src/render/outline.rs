//! Human-readable dump of a parsed document.

use crate::model::Document;

const RULE: &str = "====================\n";

/// Describe every page's lines, words, tables and form fields.
///
/// Lines show their bounding box and confidence, table cells their
/// zero-based position within the table.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();

    for page in &doc.pages {
        out.push_str(&format!("PAGE {}\n", page.number));
        out.push_str(RULE);
        for line in &page.lines {
            out.push_str(&format!(
                "Line: [{}] => {}--{}\n",
                line.bounding_box, line.text, line.confidence
            ));
            for word in &line.words {
                out.push_str(&format!("Word: {}--{}\n", word.text, word.confidence));
            }
        }

        for table in &page.tables {
            out.push_str("\nTABLE\n");
            out.push_str(RULE);
            for (r, row) in table.rows.iter().enumerate() {
                for (c, cell) in row.cells.iter().enumerate() {
                    out.push_str(&format!(
                        "Table[{}][{}] = {}-{}\n",
                        r, c, cell.text, cell.confidence
                    ));
                }
            }
        }

        if !page.form.is_empty() {
            out.push_str("\nForm (key/values)\n");
            out.push_str(RULE);
            for field in &page.form.fields {
                out.push_str(&format!(
                    "Field: Key: {}, Value: {}\n",
                    field.key_text(),
                    field.value_text()
                ));
            }
        }
        out.push('\n');
    }

    out
}
