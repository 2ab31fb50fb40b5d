use thiserror::Error;

/// Failures at the extraction-model boundary.
///
/// Call and parse failures are recovered inside [`crate::FieldExtractor`] —
/// a failed or unparsable extraction degrades to the empty record, never a
/// crashed pipeline. `MissingConfig` surfaces at startup, before any
/// document is processed.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("extraction model call failed: {0}")]
    Call(#[from] reqwest::Error),

    #[error("extraction model returned no completion text")]
    EmptyCompletion,

    #[error("extraction response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
