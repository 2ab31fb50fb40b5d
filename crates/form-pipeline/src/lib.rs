//! Pipeline orchestration: raw analysis result in, structured record out.
//!
//! normalize → project → extract → merge → validate. Each stage is a pure
//! transform except the single extraction-model call; the orchestrator's
//! external contract is "always a structured result" — a document failure
//! becomes a `status: error` result, never a propagated error.

use serde_json::Value;

use extraction_engine::FieldExtractor;
use field_validator::FieldValidator;
use shared_types::{DocumentMetadata, ProcessingResult, ValidationSummary};

/// Per-pipeline processor. Holds no cross-document state beyond the
/// validator's scratch struct, which resets on every call.
pub struct FormProcessor {
    extractor: FieldExtractor,
    validator: FieldValidator,
}

impl FormProcessor {
    pub fn new(extractor: FieldExtractor) -> Self {
        Self {
            extractor,
            validator: FieldValidator::new(),
        }
    }

    /// Run the full pipeline over one raw analysis result.
    ///
    /// `source` identifies the document in logs and result metadata.
    pub fn process(&mut self, raw: &Value, source: &str) -> ProcessingResult {
        tracing::info!(source, "processing form");

        let ocr = match ocr_normalizer::normalize(raw) {
            Ok(ocr) => ocr,
            Err(e) => {
                tracing::error!(source, "processing failed: {e}");
                return ProcessingResult::error(e.to_string());
            }
        };

        let projected = extraction_engine::project(&ocr);

        tracing::info!(source, "extracting fields");
        let record = self.extractor.extract(&projected);

        tracing::info!(source, "validating fields");
        let report = self.validator.validate(&record, Some(&ocr));

        tracing::info!(
            source,
            completeness = report.completeness_score,
            accuracy = report.accuracy_score,
            warnings = report.warnings.len(),
            "processing complete"
        );

        ProcessingResult::success(
            record,
            ValidationSummary::from(report),
            DocumentMetadata {
                source: source.to_string(),
                processed_at: chrono::Utc::now().timestamp(),
            },
        )
    }

    /// Process documents sequentially with per-document failure isolation:
    /// one malformed document never aborts the batch.
    pub fn process_batch(&mut self, documents: &[(String, Value)]) -> Vec<ProcessingResult> {
        documents
            .iter()
            .map(|(source, raw)| self.process(raw, source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extraction_engine::{ChatModel, ExtractionError};
    use serde_json::json;
    use shared_types::ProcessingStatus;

    struct CannedModel(String);

    impl ChatModel for CannedModel {
        fn complete(&self, _system: &str, _user: &str) -> Result<String, ExtractionError> {
            Ok(self.0.clone())
        }
    }

    fn processor_with_response(response: &str) -> FormProcessor {
        FormProcessor::new(FieldExtractor::new(Box::new(CannedModel(
            response.to_string(),
        ))))
    }

    fn minimal_analysis_result() -> Value {
        json!({
            "pages": [{
                "pageNumber": 1,
                "lines": [{"content": "תל אביב", "polygon": [1.0, 1.0, 2.0, 1.0]}]
            }]
        })
    }

    #[test]
    fn test_end_to_end_single_field() {
        let mut processor = processor_with_response(r#"{"address": {"city": "תל אביב"}}"#);
        let result = processor.process(&minimal_analysis_result(), "form.pdf");

        assert_eq!(result.status, ProcessingStatus::Success);
        assert_eq!(result.data.address.city, "תל אביב");
        assert_eq!(result.data.last_name, "");
        assert_eq!(result.data.address.street, "");
        assert_eq!(result.data.medical_institution_fields.health_fund_member, "");

        let validation = result.validation.unwrap();
        let expected = 1.0 / 35.0 * 100.0;
        assert!((validation.completeness_score - expected).abs() < 1e-9);
        // no words in the input, so the confidence placeholder applies
        assert_eq!(validation.accuracy_score, 50.0);
        assert!(!validation.has_warnings);

        assert_eq!(result.metadata.unwrap().source, "form.pdf");
    }

    #[test]
    fn test_malformed_root_becomes_error_result() {
        let mut processor = processor_with_response("{}");
        let result = processor.process(&json!("not an object"), "bad.pdf");

        assert_eq!(result.status, ProcessingStatus::Error);
        assert!(result.error.unwrap().contains("not a JSON object"));
        assert_eq!(result.data, shared_types::FieldRecord::default());
    }

    #[test]
    fn test_unparsable_model_response_still_succeeds() {
        let mut processor = processor_with_response("no json in sight");
        let result = processor.process(&minimal_analysis_result(), "form.pdf");

        assert_eq!(result.status, ProcessingStatus::Success);
        assert_eq!(result.data, shared_types::FieldRecord::default());
        assert_eq!(result.validation.unwrap().completeness_score, 0.0);
    }

    #[test]
    fn test_batch_isolates_failures() {
        let mut processor = processor_with_response(r#"{"lastName": "כהן"}"#);
        let documents = vec![
            ("good.pdf".to_string(), minimal_analysis_result()),
            ("bad.pdf".to_string(), json!(null)),
            ("also-good.pdf".to_string(), json!({})),
        ];
        let results = processor.process_batch(&documents);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].status, ProcessingStatus::Success);
        assert_eq!(results[0].data.last_name, "כהן");
        assert_eq!(results[1].status, ProcessingStatus::Error);
        assert_eq!(results[2].status, ProcessingStatus::Success);
    }

    #[test]
    fn test_word_confidence_feeds_accuracy_score() {
        let raw = json!({
            "pages": [{
                "pageNumber": 1,
                "words": [
                    {"content": "תל", "confidence": 0.9},
                    {"content": "אביב", "confidence": 0.7}
                ],
                "lines": [{"content": "תל אביב", "polygon": [1, 1, 2, 1]}]
            }]
        });
        let mut processor = processor_with_response("{}");
        let result = processor.process(&raw, "form.pdf");

        let accuracy = result.validation.unwrap().accuracy_score;
        assert!((accuracy - 80.0).abs() < 1e-9);
    }
}
