//! Projection of the canonical OCR result into model-ready text.

use std::cmp::Ordering;

use ocr_normalizer::clean_ocr_artifacts;
use shared_types::{CanonicalOcrResult, Line, SelectionState};

/// Flatten the canonical result into one ordered text block.
///
/// Section order is fixed — the extraction instructions reference the
/// sections positionally: per-page lines in reading order, checkboxes,
/// key-value pairs, table cells, then the full content fallback. The
/// fallback repeats line text on purpose so content the engine attributed
/// only at document level is not lost.
pub fn project(ocr: &CanonicalOcrResult) -> String {
    let mut parts: Vec<String> = Vec::new();

    for page in &ocr.pages {
        parts.push(format!("\n=== PAGE {} ===", page.page_number));

        let mut lines: Vec<&Line> = page.lines.iter().collect();
        lines.sort_by(|a, b| {
            mean_y(a)
                .partial_cmp(&mean_y(b))
                .unwrap_or(Ordering::Equal)
        });

        for line in lines {
            let content = line.content.trim();
            if !content.is_empty() {
                parts.push(clean_ocr_artifacts(content));
            }
        }
    }

    let selected_count = ocr
        .pages
        .iter()
        .flat_map(|page| &page.selection_marks)
        .filter(|mark| mark.state == SelectionState::Selected)
        .count();
    if selected_count > 0 {
        parts.push("\n=== CHECKBOXES ===".to_string());
        for _ in 0..selected_count {
            parts.push("CHECKED checkbox found".to_string());
        }
    }

    if !ocr.key_value_pairs.is_empty() {
        parts.push("\n=== KEY-VALUE PAIRS ===".to_string());
        for pair in &ocr.key_value_pairs {
            if !pair.key.is_empty() && !pair.value.is_empty() {
                parts.push(format!(
                    "{} → {}",
                    clean_ocr_artifacts(&pair.key),
                    clean_ocr_artifacts(&pair.value)
                ));
            }
        }
    }

    if !ocr.tables.is_empty() {
        parts.push("\n=== TABLE CONTENT ===".to_string());
        for table in &ocr.tables {
            for cell in &table.cells {
                if !cell.content.is_empty() {
                    parts.push(clean_ocr_artifacts(&cell.content));
                }
            }
        }
    }

    if !ocr.content.is_empty() {
        parts.push("\n=== ALL OCR CONTENT ===".to_string());
        for content in &ocr.content {
            if !content.trim().is_empty() {
                parts.push(clean_ocr_artifacts(content));
            }
        }
    }

    parts.join("\n")
}

/// Mean vertical coordinate of a line's polygon.
///
/// A line with no polygon sorts as 0.0, i.e. first — un-positioned OCR
/// artifacts must not be silently dropped.
fn mean_y(line: &Line) -> f64 {
    if line.polygon.is_empty() {
        return 0.0;
    }
    line.polygon.iter().map(|p| p.y).sum::<f64>() / line.polygon.len() as f64
}
