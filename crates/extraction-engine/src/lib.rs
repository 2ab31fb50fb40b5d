//! Field extraction from normalized OCR results.
//!
//! Projects the canonical representation into model-ready text, drives the
//! single extraction-model call, and coerces whatever comes back into the
//! strict schema.

pub mod client;
pub mod error;
pub mod extractor;
pub mod layout;
pub mod merge;
pub mod prompt;
pub mod response;

pub use client::{AzureOpenAiClient, ChatModel, OpenAiConfig};
pub use error::ExtractionError;
pub use extractor::FieldExtractor;
pub use layout::project;
pub use merge::{merge_extracted, merge_with_template};
pub use response::parse_model_response;
