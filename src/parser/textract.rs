//! Textract response parsing.
//!
//! A Textract response is a flat list of blocks linked by id. PAGE blocks open
//! a new page; the LINE, TABLE and KEY_VALUE_SET blocks that follow belong to
//! it, and reach their words and cells through `CHILD`/`VALUE` relationships.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::ParseOptions;
use crate::error::{Error, Result};
use crate::model::{
    BoundingBox, Document, Field, FieldText, Line, Page, Table, TableCell, TableRow, Word,
};

/// One page of a (possibly paginated) analysis response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AnalysisResponse {
    #[serde(default)]
    blocks: Vec<Block>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Block {
    block_type: BlockType,
    id: String,
    text: Option<String>,
    confidence: Option<f64>,
    geometry: Option<Geometry>,
    relationships: Option<Vec<Relationship>>,
    row_index: Option<u32>,
    column_index: Option<u32>,
    row_span: Option<u32>,
    column_span: Option<u32>,
    #[serde(default)]
    entity_types: Vec<String>,
    selection_status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum BlockType {
    Page,
    Line,
    Word,
    Table,
    Cell,
    KeyValueSet,
    SelectionElement,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Geometry {
    bounding_box: Option<RawBoundingBox>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawBoundingBox {
    top: Option<f64>,
    left: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Relationship {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(default)]
    ids: Vec<String>,
}

impl Block {
    fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    fn confidence(&self) -> f32 {
        self.confidence.unwrap_or(0.0) as f32
    }

    /// Bounding box, only when both top and left are present.
    fn bounding_box(&self) -> Option<BoundingBox> {
        let raw = self.geometry.as_ref()?.bounding_box?;
        Some(BoundingBox::new(
            raw.top?,
            raw.left?,
            raw.width.unwrap_or(0.0),
            raw.height.unwrap_or(0.0),
        ))
    }

    fn related_ids<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.relationships
            .iter()
            .flatten()
            .filter(move |r| r.kind == kind)
            .flat_map(|r| r.ids.iter().map(String::as_str))
    }
}

/// Id lookup over every block of the response.
struct BlockIndex<'a> {
    blocks: HashMap<&'a str, &'a Block>,
}

impl<'a> BlockIndex<'a> {
    fn new(blocks: &'a [Block]) -> Self {
        Self {
            blocks: blocks.iter().map(|b| (b.id.as_str(), b)).collect(),
        }
    }

    fn related(&self, block: &'a Block, kind: &str) -> Result<Vec<&'a Block>> {
        block
            .related_ids(kind)
            .map(|id| {
                self.blocks
                    .get(id)
                    .copied()
                    .ok_or_else(|| Error::MissingBlock(id.to_string()))
            })
            .collect()
    }

    /// Words (and selection marks) under a block, joined by a space.
    fn child_text(&self, block: &'a Block) -> Result<String> {
        let parts: Vec<&str> = self
            .related(block, "CHILD")?
            .into_iter()
            .filter_map(|child| match child.block_type {
                BlockType::Word => Some(child.text()),
                BlockType::SelectionElement => child.selection_status.as_deref(),
                _ => None,
            })
            .collect();
        Ok(parts.join(" "))
    }
}

/// Parser turning Textract JSON into a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct TextractParser {
    options: ParseOptions,
}

impl TextractParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a response file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse a response from a reader.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Document> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        self.parse_value(value)
    }

    /// Parse a response from a JSON string.
    pub fn parse_str(&self, json: &str) -> Result<Document> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        self.parse_value(value)
    }

    /// Parse a single response object, or an array of paginated responses.
    pub fn parse_value(&self, value: serde_json::Value) -> Result<Document> {
        let responses: Vec<AnalysisResponse> = match value {
            serde_json::Value::Array(_) => serde_json::from_value(value)?,
            serde_json::Value::Object(_) => vec![serde_json::from_value(value)?],
            other => {
                return Err(Error::InvalidResponse(format!(
                    "expected an object or an array of objects, found {}",
                    json_kind(&other)
                )))
            }
        };

        let blocks: Vec<Block> = responses.into_iter().flat_map(|r| r.blocks).collect();
        self.build_document(&blocks)
    }

    fn build_document(&self, blocks: &[Block]) -> Result<Document> {
        let index = BlockIndex::new(blocks);
        let mut groups: Vec<Vec<&Block>> = Vec::new();

        for block in blocks {
            if block.block_type == BlockType::Page {
                groups.push(Vec::new());
                continue;
            }
            match groups.last_mut() {
                Some(group) => group.push(block),
                None => {
                    return Err(Error::InvalidResponse(format!(
                        "block {} appears before the first PAGE block",
                        block.id
                    )))
                }
            }
        }

        let mut doc = Document::new();
        for (i, group) in groups.iter().enumerate() {
            let number = i as u32 + 1;
            if !self.options.pages.includes(number) {
                log::debug!("Skipping page {} (not selected)", number);
                continue;
            }
            doc.add_page(self.build_page(number, group, &index)?);
        }

        log::debug!(
            "Parsed {} blocks into {} pages ({} lines)",
            blocks.len(),
            doc.page_count(),
            doc.line_count()
        );
        Ok(doc)
    }

    fn build_page<'a>(
        &self,
        number: u32,
        blocks: &[&'a Block],
        index: &BlockIndex<'a>,
    ) -> Result<Page> {
        let mut page = Page::new(number);

        for &block in blocks {
            match block.block_type {
                BlockType::Line => page.add_line(build_line(block, number, index)?),
                BlockType::Table if self.options.include_tables => {
                    page.add_table(build_table(block, index)?)
                }
                BlockType::KeyValueSet
                    if self.options.include_forms
                        && block.entity_types.iter().any(|t| t == "KEY") =>
                {
                    page.form.add_field(build_field(block, index)?)
                }
                _ => {}
            }
        }

        Ok(page)
    }
}

fn build_line<'a>(block: &'a Block, page: u32, index: &BlockIndex<'a>) -> Result<Line> {
    let bounding_box = block.bounding_box().ok_or_else(|| Error::MalformedGeometry {
        block_id: block.id.clone(),
        page,
    })?;

    let words = index
        .related(block, "CHILD")?
        .into_iter()
        .filter(|b| b.block_type == BlockType::Word)
        .map(|b| Word {
            id: b.id.clone(),
            text: b.text().to_string(),
            confidence: b.confidence(),
            bounding_box: b.bounding_box(),
        })
        .collect();

    Ok(Line {
        id: block.id.clone(),
        text: block.text().to_string(),
        confidence: block.confidence(),
        bounding_box,
        words,
    })
}

fn build_table<'a>(block: &'a Block, index: &BlockIndex<'a>) -> Result<Table> {
    let mut rows: BTreeMap<u32, Vec<TableCell>> = BTreeMap::new();

    for cell in index.related(block, "CHILD")? {
        if cell.block_type != BlockType::Cell {
            continue;
        }
        let (Some(row_index), Some(column_index)) = (cell.row_index, cell.column_index) else {
            return Err(Error::InvalidResponse(format!(
                "cell {} has no row/column index",
                cell.id
            )));
        };
        rows.entry(row_index).or_default().push(TableCell {
            row_index,
            column_index,
            row_span: cell.row_span.unwrap_or(1),
            column_span: cell.column_span.unwrap_or(1),
            text: index.child_text(cell)?,
            confidence: cell.confidence(),
        });
    }

    let rows = rows
        .into_values()
        .map(|mut cells| {
            cells.sort_by_key(|c| c.column_index);
            TableRow::new(cells)
        })
        .collect();

    Ok(Table {
        id: block.id.clone(),
        rows,
        confidence: block.confidence(),
    })
}

fn build_field<'a>(key_block: &'a Block, index: &BlockIndex<'a>) -> Result<Field> {
    let key = FieldText {
        text: index.child_text(key_block)?,
        confidence: key_block.confidence(),
    };

    let value = match index.related(key_block, "VALUE")?.first().copied() {
        Some(value_block) => Some(FieldText {
            text: index.child_text(value_block)?,
            confidence: value_block.confidence(),
        }),
        None => None,
    };

    Ok(Field {
        key: Some(key),
        value,
    })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
