//! The extraction requestor: one model call per document.

use shared_types::FieldRecord;

use crate::client::ChatModel;
use crate::merge::merge_extracted;
use crate::prompt::{build_user_prompt, SYSTEM_INSTRUCTION};
use crate::response::parse_model_response;

/// Drives the extraction-model call and coerces the response into the
/// schema. Any call or parse failure degrades to the canonical empty record
/// — extraction failure means "nothing extracted", never a crashed pipeline.
pub struct FieldExtractor {
    model: Box<dyn ChatModel>,
}

impl FieldExtractor {
    pub fn new(model: Box<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Run one extraction over the projected OCR text.
    pub fn extract(&self, projected_text: &str) -> FieldRecord {
        let user_prompt = build_user_prompt(projected_text);

        let response = match self.model.complete(SYSTEM_INSTRUCTION, &user_prompt) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("extraction call failed: {e}");
                return FieldRecord::default();
            }
        };

        match parse_model_response(&response) {
            Ok(extracted) => merge_extracted(&extracted),
            Err(e) => {
                tracing::error!("failed to parse extraction response: {e}");
                tracing::debug!(response = %head(&response, 500), "unparsable response");
                FieldRecord::default()
            }
        }
    }
}

fn head(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}
