//! Canonical OCR analysis types.
//!
//! Every downstream stage consumes this representation, independent of the
//! analysis engine's native output shape. The flattened cross-page sequences
//! on [`CanonicalOcrResult`] are read-only projections built once at
//! normalization time.

use serde::{Deserialize, Serialize};

/// A single polygon vertex in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A recognized text line with its position on the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    pub content: String,
    /// Empty when the source carried no usable polygon data.
    pub polygon: Vec<Point>,
    pub page_number: u32,
}

/// A recognized word with its recognition confidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Word {
    pub content: String,
    pub polygon: Vec<Point>,
    /// In `[0, 1]`; 0.0 when the engine reported none.
    pub confidence: f64,
}

/// Checkbox / selection mark state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    Selected,
    #[default]
    Unselected,
}

/// A checkbox-style mark detected on a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionMark {
    pub state: SelectionState,
    pub polygon: Vec<Point>,
    pub confidence: f64,
    pub page_number: u32,
}

/// A detected key/value pairing. Either side may be empty, never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
    pub confidence: f64,
}

/// Page region a paragraph spans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub page_number: u32,
    pub polygon: Vec<Point>,
}

/// A paragraph-level text block, attributed at document level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: String,
    pub bounding_regions: Vec<BoundingRegion>,
}

/// A single table cell. Spans default to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    pub row_index: u32,
    pub column_index: u32,
    pub content: String,
    pub row_span: u32,
    pub column_span: u32,
}

impl Default for TableCell {
    fn default() -> Self {
        Self {
            row_index: 0,
            column_index: 0,
            content: String::new(),
            row_span: 1,
            column_span: 1,
        }
    }
}

/// A detected table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub row_count: u32,
    pub column_count: u32,
    pub cells: Vec<TableCell>,
}

/// A single document page and the elements recognized on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub page_number: u32,
    pub width: f64,
    pub height: f64,
    pub unit: String,
    pub words: Vec<Word>,
    pub lines: Vec<Line>,
    pub selection_marks: Vec<SelectionMark>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page_number: 1,
            width: 0.0,
            height: 0.0,
            unit: "pixel".to_string(),
            words: Vec::new(),
            lines: Vec::new(),
            selection_marks: Vec::new(),
        }
    }
}

/// The normalized analysis result.
///
/// `lines`, `words`, `selection_marks` also appear under their owning
/// [`Page`]; `content` is a flat text fallback holding every line and
/// paragraph content plus the engine's top-level content string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanonicalOcrResult {
    pub pages: Vec<Page>,
    pub paragraphs: Vec<Paragraph>,
    pub tables: Vec<Table>,
    pub selection_marks: Vec<SelectionMark>,
    pub key_value_pairs: Vec<KeyValuePair>,
    pub lines: Vec<Line>,
    pub words: Vec<Word>,
    pub content: Vec<String>,
}
