//! Table types.

use serde::{Deserialize, Serialize};

/// A detected table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Block id from the analysis response
    #[serde(default)]
    pub id: String,

    /// Rows in the table, ordered by row index
    pub rows: Vec<TableRow>,

    /// Detection confidence (0-100)
    #[serde(default)]
    pub confidence: f32,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell by zero-based row and column position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    /// Cell texts in row-major order.
    pub fn cell_texts(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter().map(|c| c.text.as_str()))
    }

    /// Get plain text representation of the table (tab-separated cells).
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row, ordered by column index
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Row index (1-indexed, as reported upstream)
    pub row_index: u32,

    /// Column index (1-indexed, as reported upstream)
    pub column_index: u32,

    /// Number of rows this cell spans
    #[serde(default = "one")]
    pub row_span: u32,

    /// Number of columns this cell spans
    #[serde(default = "one")]
    pub column_span: u32,

    /// Cell text (words joined by a space)
    pub text: String,

    /// Detection confidence (0-100)
    #[serde(default)]
    pub confidence: f32,
}

fn one() -> u32 {
    1
}

impl TableCell {
    /// Create a single-span cell with text content.
    pub fn text(row_index: u32, column_index: u32, text: impl Into<String>) -> Self {
        Self {
            row_index,
            column_index,
            row_span: 1,
            column_span: 1,
            text: text.into(),
            confidence: 0.0,
        }
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.column_span > 1
    }
}
