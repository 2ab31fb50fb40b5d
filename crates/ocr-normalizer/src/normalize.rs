//! Conversion of the raw analysis-engine payload into [`CanonicalOcrResult`].
//!
//! The raw payload is the only untyped value in the pipeline; this module is
//! the choke point that turns it into strict types. Every optional field gets
//! a defensive default — the sole hard failure is a root that is not an
//! object at all.

use serde_json::Value;
use shared_types::{
    BoundingRegion, CanonicalOcrResult, KeyValuePair, Line, Page, Paragraph, Point,
    SelectionMark, SelectionState, Table, TableCell, Word,
};

use crate::error::NormalizeError;
use crate::polygon::normalize_polygon;

/// Normalize a raw analysis result.
///
/// Tolerates arbitrarily missing fields; raises [`NormalizeError`] only when
/// the root value is not an object.
pub fn normalize(raw: &Value) -> Result<CanonicalOcrResult, NormalizeError> {
    let root = raw
        .as_object()
        .ok_or_else(|| NormalizeError::MalformedInput(json_type_name(raw).to_string()))?;

    let mut result = CanonicalOcrResult::default();

    for raw_page in array(root.get("pages")) {
        let mut page = Page {
            page_number: u32_at(raw_page, "pageNumber", 1),
            width: f64_at(raw_page, "width", 0.0),
            height: f64_at(raw_page, "height", 0.0),
            unit: str_at(raw_page, "unit", "pixel"),
            ..Default::default()
        };

        for raw_word in array(raw_page.get("words")) {
            let word = Word {
                content: str_at(raw_word, "content", ""),
                polygon: polygon_at(raw_word),
                confidence: f64_at(raw_word, "confidence", 0.0),
            };
            page.words.push(word.clone());
            result.words.push(word);
        }

        for raw_line in array(raw_page.get("lines")) {
            let line = Line {
                content: str_at(raw_line, "content", ""),
                polygon: polygon_at(raw_line),
                page_number: page.page_number,
            };
            // Line text doubles as fallback content
            result.content.push(line.content.clone());
            page.lines.push(line.clone());
            result.lines.push(line);
        }

        for raw_mark in array(raw_page.get("selectionMarks")) {
            let mark = SelectionMark {
                state: selection_state(raw_mark.get("state")),
                polygon: polygon_at(raw_mark),
                confidence: f64_at(raw_mark, "confidence", 0.0),
                page_number: page.page_number,
            };
            page.selection_marks.push(mark.clone());
            result.selection_marks.push(mark);
        }

        result.pages.push(page);
    }

    for raw_para in array(root.get("paragraphs")) {
        let paragraph = Paragraph {
            content: str_at(raw_para, "content", ""),
            bounding_regions: array(raw_para.get("boundingRegions"))
                .iter()
                .map(|region| BoundingRegion {
                    page_number: u32_at(region, "pageNumber", 1),
                    polygon: polygon_at(region),
                })
                .collect(),
        };
        if !paragraph.content.is_empty() {
            result.content.push(paragraph.content.clone());
        }
        result.paragraphs.push(paragraph);
    }

    for raw_table in array(root.get("tables")) {
        result.tables.push(Table {
            row_count: u32_at(raw_table, "rowCount", 0),
            column_count: u32_at(raw_table, "columnCount", 0),
            cells: array(raw_table.get("cells"))
                .iter()
                .map(|cell| TableCell {
                    row_index: u32_at(cell, "rowIndex", 0),
                    column_index: u32_at(cell, "columnIndex", 0),
                    content: str_at(cell, "content", ""),
                    row_span: u32_at(cell, "rowSpan", 1),
                    column_span: u32_at(cell, "columnSpan", 1),
                })
                .collect(),
        });
    }

    for raw_pair in array(root.get("keyValuePairs")) {
        let pair = KeyValuePair {
            key: nested_content(raw_pair.get("key")),
            value: nested_content(raw_pair.get("value")),
            confidence: f64_at(raw_pair, "confidence", 0.0),
        };
        // Pairs with neither side carry no signal
        if !pair.key.is_empty() || !pair.value.is_empty() {
            result.key_value_pairs.push(pair);
        }
    }

    if let Some(content) = root.get("content").and_then(Value::as_str) {
        if !content.is_empty() {
            result.content.push(content.to_string());
        }
    }

    tracing::info!(
        pages = result.pages.len(),
        lines = result.lines.len(),
        words = result.words.len(),
        selection_marks = result.selection_marks.len(),
        key_value_pairs = result.key_value_pairs.len(),
        "normalized analysis result"
    );

    Ok(result)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn array(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn str_at(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn f64_at(value: &Value, key: &str, default: f64) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(default)
}

fn u32_at(value: &Value, key: &str, default: u32) -> u32 {
    value
        .get(key)
        .and_then(Value::as_u64)
        .map(|n| n as u32)
        .unwrap_or(default)
}

fn polygon_at(value: &Value) -> Vec<Point> {
    value
        .get("polygon")
        .map(normalize_polygon)
        .unwrap_or_default()
}

fn selection_state(value: Option<&Value>) -> SelectionState {
    match value.and_then(Value::as_str) {
        Some("selected") => SelectionState::Selected,
        _ => SelectionState::Unselected,
    }
}

/// Key-value sides nest their text as `{ "content": ... }`.
fn nested_content(value: Option<&Value>) -> String {
    value
        .and_then(|v| v.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_yields_empty_result() {
        let result = normalize(&json!({})).unwrap();
        assert!(result.pages.is_empty());
        assert!(result.lines.is_empty());
        assert!(result.words.is_empty());
        assert!(result.key_value_pairs.is_empty());
        assert!(result.content.is_empty());
    }

    #[test]
    fn test_non_object_root_is_malformed() {
        assert!(normalize(&json!(null)).is_err());
        assert!(normalize(&json!([1, 2, 3])).is_err());
        assert!(normalize(&json!("text")).is_err());
    }

    #[test]
    fn test_page_elements_are_flattened() {
        let raw = json!({
            "pages": [{
                "pageNumber": 2,
                "width": 8.5,
                "height": 11.0,
                "unit": "inch",
                "words": [{"content": "שלום", "confidence": 0.93, "polygon": [1, 2, 3, 4]}],
                "lines": [{"content": "שלום עולם", "polygon": [1, 2, 3, 4]}],
                "selectionMarks": [{"state": "selected", "confidence": 0.8}]
            }]
        });
        let result = normalize(&raw).unwrap();

        assert_eq!(result.pages.len(), 1);
        assert_eq!(result.pages[0].page_number, 2);
        assert_eq!(result.pages[0].unit, "inch");
        assert_eq!(result.words.len(), 1);
        assert_eq!(result.words[0].confidence, 0.93);
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].page_number, 2);
        assert_eq!(result.selection_marks.len(), 1);
        assert_eq!(result.selection_marks[0].state, SelectionState::Selected);
        assert_eq!(result.selection_marks[0].page_number, 2);
        // line content lands in the fallback list
        assert_eq!(result.content, vec!["שלום עולם"]);
    }

    #[test]
    fn test_missing_optional_fields_get_defaults() {
        let raw = json!({
            "pages": [{"lines": [{"content": "no polygon"}]}]
        });
        let result = normalize(&raw).unwrap();
        assert_eq!(result.pages[0].page_number, 1);
        assert_eq!(result.pages[0].width, 0.0);
        assert!(result.lines[0].polygon.is_empty());
    }

    #[test]
    fn test_key_value_pairs_with_both_sides_empty_are_dropped() {
        let raw = json!({
            "keyValuePairs": [
                {"key": {"content": "שם"}, "value": {"content": "כהן"}, "confidence": 0.9},
                {"key": {"content": ""}, "value": {"content": ""}},
                {"key": {"content": "טלפון"}, "value": {}},
                {}
            ]
        });
        let result = normalize(&raw).unwrap();
        assert_eq!(result.key_value_pairs.len(), 2);
        assert_eq!(result.key_value_pairs[0].key, "שם");
        assert_eq!(result.key_value_pairs[1].key, "טלפון");
        assert_eq!(result.key_value_pairs[1].value, "");
    }

    #[test]
    fn test_table_cell_spans_default_to_one() {
        let raw = json!({
            "tables": [{
                "rowCount": 1,
                "columnCount": 2,
                "cells": [{"rowIndex": 0, "columnIndex": 1, "content": "תא"}]
            }]
        });
        let result = normalize(&raw).unwrap();
        assert_eq!(result.tables[0].cells[0].row_span, 1);
        assert_eq!(result.tables[0].cells[0].column_span, 1);
    }

    #[test]
    fn test_content_fallback_order() {
        let raw = json!({
            "pages": [{"lines": [{"content": "line one"}]}],
            "paragraphs": [{"content": "paragraph one"}, {"content": ""}],
            "content": "full document text"
        });
        let result = normalize(&raw).unwrap();
        assert_eq!(
            result.content,
            vec!["line one", "paragraph one", "full document text"]
        );
        assert_eq!(result.paragraphs.len(), 2);
    }

    #[test]
    fn test_paragraph_bounding_regions() {
        let raw = json!({
            "paragraphs": [{
                "content": "para",
                "boundingRegions": [{"pageNumber": 3, "polygon": [0, 0, 1, 1]}]
            }]
        });
        let result = normalize(&raw).unwrap();
        assert_eq!(result.paragraphs[0].bounding_regions[0].page_number, 3);
        assert_eq!(result.paragraphs[0].bounding_regions[0].polygon.len(), 2);
    }
}
