//! Field validation and quality scoring.
//!
//! Computes a completeness percentage over the schema's leaf paths, an
//! OCR-confidence percentage, and format warnings. Format violations never
//! block the pipeline.

pub mod confidence;
pub mod format;
pub mod paths;

use serde_json::Value;
use shared_types::{CanonicalOcrResult, FieldRecord, ValidationReport};

/// Validator with a small owned scratch state, reset at the start of every
/// call. Holds no cross-document state.
#[derive(Debug, Default)]
pub struct FieldValidator {
    warnings: Vec<String>,
    empty_fields: Vec<String>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate one record; `ocr` feeds the confidence score when present.
    /// The report is recomputed fully on every call.
    pub fn validate(
        &mut self,
        record: &FieldRecord,
        ocr: Option<&CanonicalOcrResult>,
    ) -> ValidationReport {
        self.warnings.clear();
        self.empty_fields.clear();

        let completeness_score = self.calculate_completeness(record);
        let accuracy_score = confidence::ocr_confidence(ocr);
        self.warnings = format::check_formats(record);

        ValidationReport {
            completeness_score,
            accuracy_score,
            empty_fields: self.empty_fields.clone(),
            warnings: self.warnings.clone(),
        }
    }

    /// Share of schema leaves holding a non-blank value, as a percentage.
    /// Unfilled paths are collected into the scratch list in template order.
    fn calculate_completeness(&mut self, record: &FieldRecord) -> f64 {
        let fields = serde_json::to_value(record)
            .expect("record serializes to plain JSON");
        let field_paths = paths::leaf_paths(&FieldRecord::template());
        let total = field_paths.len();

        let mut filled = 0usize;
        for path in field_paths {
            if is_filled(&fields, &path) {
                filled += 1;
            } else {
                self.empty_fields.push(path);
            }
        }

        if total == 0 {
            return 0.0;
        }
        filled as f64 / total as f64 * 100.0
    }
}

fn is_filled(fields: &Value, path: &str) -> bool {
    paths::resolve(fields, path)
        .and_then(Value::as_str)
        .is_some_and(|value| !value.trim().is_empty())
}
