//! Validation report and final pipeline result shapes.

use serde::{Deserialize, Serialize};

use crate::record::FieldRecord;

/// Outcome of one validation pass. Recomputed fully on every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Percentage of schema leaves holding a non-blank value.
    pub completeness_score: f64,
    /// Mean word recognition confidence, scaled to 0–100.
    pub accuracy_score: f64,
    /// Dotted paths of unfilled leaves, in template order.
    pub empty_fields: Vec<String>,
    /// Human-readable format violations.
    pub warnings: Vec<String>,
}

/// The validation block of a [`ProcessingResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub warnings: Vec<String>,
    pub has_warnings: bool,
    pub completeness_score: f64,
    pub accuracy_score: f64,
    pub empty_fields: Vec<String>,
}

impl From<ValidationReport> for ValidationSummary {
    fn from(report: ValidationReport) -> Self {
        Self {
            has_warnings: !report.warnings.is_empty(),
            warnings: report.warnings,
            completeness_score: report.completeness_score,
            accuracy_score: report.accuracy_score,
            empty_fields: report.empty_fields,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Success,
    Error,
}

/// Provenance of one processed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Caller-supplied source identifier (typically a file path).
    pub source: String,
    /// Unix timestamp of pipeline completion.
    pub processed_at: i64,
}

/// The pipeline's one-per-document output.
///
/// `data` always carries the full schema — the canonical empty record on
/// error — so consumers never branch on a missing key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub status: ProcessingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub data: FieldRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl ProcessingResult {
    pub fn success(
        data: FieldRecord,
        validation: ValidationSummary,
        metadata: DocumentMetadata,
    ) -> Self {
        Self {
            status: ProcessingStatus::Success,
            error: None,
            data,
            validation: Some(validation),
            metadata: Some(metadata),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ProcessingStatus::Error,
            error: Some(message.into()),
            data: FieldRecord::default(),
            validation: None,
            metadata: None,
        }
    }
}
