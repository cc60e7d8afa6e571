//! Integration tests for Textract response parsing.

use std::io::Write;

use serde_json::json;
use untextract::{
    parse_file, parse_file_with_options, parse_str, parse_str_with_options, Error,
    PageSelection, ParseOptions, TextractParser,
};

fn geometry(top: f64, left: f64) -> serde_json::Value {
    json!({ "BoundingBox": { "Width": 0.4, "Height": 0.02, "Left": left, "Top": top } })
}

/// One page with a line, a 2x2 table and a key/value pair.
fn invoice_response() -> serde_json::Value {
    json!({
        "DocumentMetadata": { "Pages": 1 },
        "Blocks": [
            { "BlockType": "PAGE", "Id": "page-1", "Geometry": geometry(0.0, 0.0) },
            {
                "BlockType": "LINE", "Id": "line-1", "Text": "Invoice total",
                "Confidence": 99.1, "Geometry": geometry(0.05, 0.1),
                "Relationships": [{ "Type": "CHILD", "Ids": ["w-1", "w-2"] }]
            },
            { "BlockType": "WORD", "Id": "w-1", "Text": "Invoice", "Confidence": 99.3,
              "Geometry": geometry(0.05, 0.1) },
            { "BlockType": "WORD", "Id": "w-2", "Text": "total", "Confidence": 98.9,
              "Geometry": geometry(0.05, 0.2) },
            {
                "BlockType": "TABLE", "Id": "table-1", "Confidence": 97.0,
                "Relationships": [{ "Type": "CHILD", "Ids": ["c-22", "c-11", "c-12", "c-21"] }]
            },
            { "BlockType": "CELL", "Id": "c-11", "RowIndex": 1, "ColumnIndex": 1,
              "Relationships": [{ "Type": "CHILD", "Ids": ["w-3"] }] },
            { "BlockType": "CELL", "Id": "c-12", "RowIndex": 1, "ColumnIndex": 2,
              "Relationships": [{ "Type": "CHILD", "Ids": ["w-4", "w-5"] }] },
            { "BlockType": "CELL", "Id": "c-21", "RowIndex": 2, "ColumnIndex": 1,
              "Relationships": [{ "Type": "CHILD", "Ids": ["sel-1"] }] },
            { "BlockType": "CELL", "Id": "c-22", "RowIndex": 2, "ColumnIndex": 2, "ColumnSpan": 1 },
            { "BlockType": "WORD", "Id": "w-3", "Text": "Item" },
            { "BlockType": "WORD", "Id": "w-4", "Text": "Unit" },
            { "BlockType": "WORD", "Id": "w-5", "Text": "price" },
            { "BlockType": "SELECTION_ELEMENT", "Id": "sel-1", "SelectionStatus": "SELECTED" },
            {
                "BlockType": "KEY_VALUE_SET", "Id": "key-1", "EntityTypes": ["KEY"],
                "Confidence": 88.0,
                "Relationships": [
                    { "Type": "VALUE", "Ids": ["value-1"] },
                    { "Type": "CHILD", "Ids": ["w-6"] }
                ]
            },
            {
                "BlockType": "KEY_VALUE_SET", "Id": "value-1", "EntityTypes": ["VALUE"],
                "Confidence": 87.0,
                "Relationships": [{ "Type": "CHILD", "Ids": ["w-7"] }]
            },
            { "BlockType": "WORD", "Id": "w-6", "Text": "Name:" },
            { "BlockType": "WORD", "Id": "w-7", "Text": "Jane" }
        ]
    })
}

fn paginated_responses() -> serde_json::Value {
    json!([
        { "Blocks": [
            { "BlockType": "PAGE", "Id": "p1" },
            { "BlockType": "LINE", "Id": "l1", "Text": "Page one", "Geometry": geometry(0.1, 0.1) },
            { "BlockType": "PAGE", "Id": "p2" },
            { "BlockType": "LINE", "Id": "l2", "Text": "Page two", "Geometry": geometry(0.1, 0.1) }
        ]},
        { "Blocks": [
            { "BlockType": "PAGE", "Id": "p3" },
            { "BlockType": "LINE", "Id": "l3", "Text": "Page three", "Geometry": geometry(0.1, 0.1) }
        ]}
    ])
}

#[test]
fn test_lines_and_words() {
    let doc = parse_str(&invoice_response().to_string()).unwrap();
    let line = &doc.pages[0].lines[0];

    assert_eq!(line.id, "line-1");
    assert_eq!(line.text, "Invoice total");
    assert!((line.top() - 0.05).abs() < 1e-6);
    assert_eq!(line.words.len(), 2);
    assert_eq!(line.words[1].text, "total");
    assert!(line.words[1].bounding_box.is_some());
}

#[test]
fn test_table_cells_ordered() {
    let doc = parse_str(&invoice_response().to_string()).unwrap();
    let table = &doc.pages[0].tables[0];

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.rows[0].cells[1].text, "Unit price");
    assert_eq!(table.rows[1].cells[0].text, "SELECTED");
    assert!(table.rows[1].cells[1].is_empty());
}

#[test]
fn test_form_fields() {
    let doc = parse_str(&invoice_response().to_string()).unwrap();
    let form = &doc.pages[0].form;

    assert_eq!(form.fields.len(), 1);
    let field = form.get_field("name:").unwrap();
    assert_eq!(field.value_text(), "Jane");
    assert_eq!(field.value.as_ref().unwrap().confidence, 87.0);
}

#[test]
fn test_plain_text_includes_cells() {
    let doc = parse_str(&invoice_response().to_string()).unwrap();
    assert_eq!(doc.plain_text(), "Invoice total Item Unit price SELECTED ");
}

#[test]
fn test_lines_only() {
    let doc = parse_str_with_options(
        &invoice_response().to_string(),
        ParseOptions::new().lines_only(),
    )
    .unwrap();
    assert!(doc.pages[0].tables.is_empty());
    assert!(doc.pages[0].form.is_empty());
    assert_eq!(doc.line_count(), 1);
}

#[test]
fn test_paginated_responses() {
    let doc = TextractParser::new()
        .parse_value(paginated_responses())
        .unwrap();
    assert_eq!(doc.page_count(), 3);
    assert_eq!(doc.get_page(3).unwrap().lines[0].text, "Page three");
}

#[test]
fn test_page_selection_keeps_numbers() {
    let options = ParseOptions::new().with_pages(PageSelection::parse("2-3").unwrap());
    let doc = TextractParser::with_options(options)
        .parse_value(paginated_responses())
        .unwrap();

    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.pages[0].number, 2);
    assert!(doc.get_page(1).is_none());
}

#[test]
fn test_malformed_line_fails_fast() {
    let response = json!({ "Blocks": [
        { "BlockType": "PAGE", "Id": "p1" },
        { "BlockType": "LINE", "Id": "ok", "Text": "fine", "Geometry": geometry(0.1, 0.1) },
        { "BlockType": "PAGE", "Id": "p2" },
        { "BlockType": "LINE", "Id": "bad", "Text": "broken",
          "Geometry": { "BoundingBox": { "Left": 0.1 } } }
    ]});

    match parse_str(&response.to_string()) {
        Err(Error::MalformedGeometry { block_id, page }) => {
            assert_eq!(block_id, "bad");
            assert_eq!(page, 2);
        }
        other => panic!("expected MalformedGeometry, got {:?}", other),
    }
}

#[test]
fn test_line_missing_left_fails_fast() {
    let response = json!({ "Blocks": [
        { "BlockType": "PAGE", "Id": "p1" },
        { "BlockType": "LINE", "Id": "ok", "Text": "fine", "Geometry": geometry(0.1, 0.1) },
        { "BlockType": "LINE", "Id": "no-left", "Text": "broken",
          "Geometry": { "BoundingBox": { "Top": 0.2, "Width": 0.3, "Height": 0.05 } } }
    ]});

    match parse_str(&response.to_string()) {
        Err(Error::MalformedGeometry { block_id, page }) => {
            assert_eq!(block_id, "no-left");
            assert_eq!(page, 1);
        }
        other => panic!("expected MalformedGeometry, got {:?}", other),
    }
}

#[test]
fn test_dangling_relationship() {
    let response = json!({ "Blocks": [
        { "BlockType": "PAGE", "Id": "p1" },
        { "BlockType": "LINE", "Id": "l1", "Text": "x", "Geometry": geometry(0.1, 0.1),
          "Relationships": [{ "Type": "CHILD", "Ids": ["gone"] }] }
    ]});
    assert!(matches!(
        parse_str(&response.to_string()),
        Err(Error::MissingBlock(id)) if id == "gone"
    ));
}

#[test]
fn test_empty_response() {
    let doc = parse_str(r#"{"Blocks": []}"#).unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.plain_text(), "");
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(invoice_response().to_string().as_bytes())
        .unwrap();

    let doc = parse_file(file.path()).unwrap();
    assert_eq!(doc.page_count(), 1);

    let options = ParseOptions::new().with_tables(false);
    let doc = parse_file_with_options(file.path(), options).unwrap();
    assert!(doc.pages[0].tables.is_empty());
    assert_eq!(doc.pages[0].form.fields.len(), 1);
}

#[test]
fn test_parse_file_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    assert!(matches!(parse_file(file.path()), Err(Error::Json(_))));
}
